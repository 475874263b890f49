//! Lenient HTML-ish markup tree for server-include expansion
//!
//! Parses a page into an arena-backed tree, lets callers find comment
//! nodes and splice fetched markup in before them, and serializes the
//! result back out with byte-level fidelity for everything that was not
//! edited.
//!
//! This is not a full HTML5 parser. It handles the markup dev servers
//! actually serve: void elements, stray and missing end tags, fragments
//! with multiple top-level nodes. Known gap: a bare `<` inside
//! `<script>` or `<style>` content is treated as markup, so such
//! content must be externalized or escaped.
//!
//! # Example
//!
//! ```
//! use ssinc_dom::Document;
//!
//! let mut doc = Document::parse("<body><!--marker--></body>").unwrap();
//! let marker = doc.comments()[0];
//! doc.insert_markup_before(marker, "<nav>menu</nav>").unwrap();
//! doc.remove(marker).unwrap();
//! assert_eq!(doc.to_markup(), "<body><nav>menu</nav></body>");
//! ```

pub mod error;
mod parser;
mod serialize;
pub mod types;

pub use error::{DomError, Result};
pub use types::{Document, Element, NodeId, NodeKind};
