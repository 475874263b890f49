/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The document seam the resolver works through
//!
//! The engine never touches a concrete tree type directly; anything
//! that can enumerate comments and splice markup can have its includes
//! resolved. [`ssinc_dom::Document`] is the bundled implementation.

use std::fmt;
use std::hash::Hash;

use ssinc_dom::{Document, DomError, NodeId};

/// Editable view of a parsed document.
///
/// Handles must stay valid across edits: replacing one marker must not
/// invalidate the handles of markers found in the same scan.
pub trait DocumentEdit {
    /// Stable reference to a comment node
    type Handle: Clone + Eq + Hash + fmt::Debug + Send;
    /// Failure type for traversal and edits
    type Error: std::error::Error;

    /// All comment nodes currently in the document, in document order.
    ///
    /// An error here means the tree could not be walked at all; the
    /// resolver treats that the same as a document with no markers.
    fn comment_handles(&self) -> Result<Vec<Self::Handle>, Self::Error>;

    /// The comment's interior text, or `None` if the handle no longer
    /// refers to a comment
    fn comment_text(&self, handle: &Self::Handle) -> Option<String>;

    /// Parse `markup` as a fragment and insert every top-level node it
    /// produces immediately before `handle`, preserving fragment order
    fn splice_markup_before(&mut self, handle: &Self::Handle, markup: &str)
        -> Result<(), Self::Error>;

    /// Detach the node from the document
    fn remove(&mut self, handle: &Self::Handle) -> Result<(), Self::Error>;
}

impl DocumentEdit for Document {
    type Handle = NodeId;
    type Error = DomError;

    fn comment_handles(&self) -> Result<Vec<NodeId>, DomError> {
        Ok(self.comments())
    }

    fn comment_text(&self, handle: &NodeId) -> Option<String> {
        self.comment_text(*handle).map(str::to_owned)
    }

    fn splice_markup_before(&mut self, handle: &NodeId, markup: &str) -> Result<(), DomError> {
        self.insert_markup_before(*handle, markup).map(|_| ())
    }

    fn remove(&mut self, handle: &NodeId) -> Result<(), DomError> {
        self.remove(*handle)
    }
}
