//! Command implementations for the ssinc CLI
//!
//! Each command module handles the CLI interface and delegates to
//! ssinc-core for actual implementation.

pub mod render;
pub mod scan;
