//! Error types for markup parsing and tree edits

use crate::types::NodeId;

/// Errors that can occur while parsing markup or editing the tree
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// The input could not be tokenized as markup
    #[error("markup syntax error at byte {position}: {message}")]
    Markup {
        /// Description of the syntax problem
        message: String,
        /// Byte offset into the input where tokenization failed
        position: u64,
    },

    /// A node id that does not belong to this document
    #[error("unknown node {0:?}")]
    NodeNotFound(NodeId),

    /// The operation requires an attached node, but this one has been
    /// detached from the tree
    #[error("node {0:?} is not attached to the tree")]
    NodeDetached(NodeId),
}

/// Convenience alias for DOM operations
pub type Result<T> = std::result::Result<T, DomError>;
