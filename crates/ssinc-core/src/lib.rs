/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Client-side emulation of server-side includes
//!
//! Web servers expand `<!--#include "nav.html"-->` comments before a
//! page goes over the wire. When pages are served statically during
//! development, nothing expands them. This crate does the expansion
//! itself: scan a parsed document for include markers, fetch each
//! distinct resource once per pass, splice the fetched markup in where
//! the markers sit, and keep going until includes brought in by other
//! includes have all been resolved.
//!
//! The engine is generic over two seams: [`DocumentEdit`] for the tree
//! being edited (implemented by [`ssinc_dom::Document`]) and
//! [`IncludeSource`] for where content comes from ([`DirSource`] for a
//! directory on disk, [`MemorySource`] for tests and embedding).
//!
//! # Example
//!
//! ```
//! use ssinc_core::{resolve, MemorySource};
//! use ssinc_dom::Document;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut source = MemorySource::new();
//! source.add("nav.html", "<nav>menu</nav>");
//!
//! let mut doc = Document::parse("<body><!--#include \"nav.html\"--></body>").unwrap();
//! let summary = resolve(&mut doc, &source).await;
//!
//! assert_eq!(summary.replaced, 1);
//! assert_eq!(doc.to_markup(), "<body><nav>menu</nav></body>");
//! # }
//! ```

pub mod directive;
pub mod document;
pub mod error;
pub mod pending;
pub mod resolver;
pub mod source;

pub use directive::include_target;
pub use document::DocumentEdit;
pub use error::FetchError;
pub use pending::PendingSet;
pub use resolver::{resolve, scan, ResolveSummary, UnresolvedInclude};
pub use source::{DirSource, IncludeSource, MemorySource, NullSource};
