/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Fetch failures
//!
//! A failed fetch never fails a resolution run; the error ends up in
//! the run summary and the markers that wanted the resource stay in
//! the document.

/// Why a resource could not be fetched
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The source has no resource under this name
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The resource exists but could not be read
    #[error("failed to read {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Catch-all for custom sources
    #[error("{0}")]
    Other(String),
}
