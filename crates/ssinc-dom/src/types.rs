//! Arena-backed markup tree
//!
//! The tree is stored as a flat arena of nodes addressed by [`NodeId`].
//! Ids are never reused: removing a node only detaches it from its
//! parent, so ids handed out before an edit remain valid (and simply
//! become detached) afterwards.

use crate::error::{DomError, Result};
use crate::parser;

/// Handle to a node in a [`Document`] arena.
///
/// A `NodeId` is only meaningful for the document that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// An element tag, e.g. `<div class="x">`
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name exactly as written in the source
    pub name: String,
    /// Everything between the tag name and the closing `>`, verbatim,
    /// including leading whitespace
    pub attrs_raw: String,
    /// Whether the tag was written in `<x/>` form
    pub self_closing: bool,
}

/// The content of a single node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// An element with an open tag and (possibly) children
    Element(Element),
    /// A run of character data, entities left unexpanded
    Text(String),
    /// A comment; the string is the text between `<!--` and `-->`
    Comment(String),
    /// A construct reproduced verbatim on output: doctype, processing
    /// instruction, XML declaration, or CDATA section
    Raw(String),
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// A parsed markup document (or fragment) that can be edited in place.
///
/// Parsing is lenient in the ways dev-server HTML needs: void elements
/// (`<br>`, `<img>`, ...) take no children and no end tag, unmatched
/// end tags are dropped, and elements still open at end of input are
/// implicitly closed.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) roots: Vec<NodeId>,
}

/// HTML elements that never have content or an end tag
pub(crate) fn is_void_element(name: &str) -> bool {
    const VOID: &[&str] = &[
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ];
    VOID.iter().any(|v| name.eq_ignore_ascii_case(v))
}

impl Document {
    /// Parse markup into a document.
    ///
    /// The input may be a full page or a fragment; multiple top-level
    /// nodes are allowed. Only genuine tokenization failures (e.g. an
    /// unterminated tag) produce an error.
    pub fn parse(source: &str) -> Result<Document> {
        let mut nodes = Vec::new();
        let roots = parser::parse_nodes(&mut nodes, source)?;
        Ok(Document { nodes, roots })
    }

    /// The top-level nodes in document order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The content of a node, or `None` for an id from another document
    pub fn node_kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.0).map(|n| &n.kind)
    }

    /// Child ids of a node in document order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.nodes.get(id.0) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// The parent of a node, if it is attached below another node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Whether a node is still reachable from the document roots
    pub fn is_attached(&self, id: NodeId) -> bool {
        if id.0 >= self.nodes.len() {
            return false;
        }
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            current = parent;
        }
        self.roots.contains(&current)
    }

    /// All attached comment nodes, in document order.
    ///
    /// The tree is walked depth-first from each root, so the returned
    /// order matches the order the comments appear in serialized output.
    pub fn comments(&self) -> Vec<NodeId> {
        let mut found = Vec::new();
        for &root in &self.roots {
            self.collect_comments(root, &mut found);
        }
        found
    }

    fn collect_comments(&self, id: NodeId, found: &mut Vec<NodeId>) {
        let node = &self.nodes[id.0];
        if matches!(node.kind, NodeKind::Comment(_)) {
            found.push(id);
        }
        for &child in &node.children {
            self.collect_comments(child, found);
        }
    }

    /// The interior text of a comment node, or `None` if the id does
    /// not refer to a comment
    pub fn comment_text(&self, id: NodeId) -> Option<&str> {
        match self.nodes.get(id.0).map(|n| &n.kind) {
            Some(NodeKind::Comment(text)) => Some(text),
            _ => None,
        }
    }

    /// Parse `markup` as a fragment and insert its top-level nodes
    /// immediately before `before`, preserving their order.
    ///
    /// Returns the number of nodes inserted. Fails with `NodeDetached`
    /// if `before` was removed from the tree; on any error the
    /// reachable tree is unchanged.
    pub fn insert_markup_before(&mut self, before: NodeId, markup: &str) -> Result<usize> {
        self.check_id(before)?;
        enum Slot {
            Child(NodeId),
            Root,
        }
        let slot = match self.nodes[before.0].parent {
            Some(parent) => Slot::Child(parent),
            None if self.roots.contains(&before) => Slot::Root,
            None => return Err(DomError::NodeDetached(before)),
        };
        let new_ids = parser::parse_nodes(&mut self.nodes, markup)?;
        match slot {
            Slot::Child(parent) => {
                let index = self.position_in(&self.nodes[parent.0].children, before)?;
                self.nodes[parent.0]
                    .children
                    .splice(index..index, new_ids.iter().copied());
                for &id in &new_ids {
                    self.nodes[id.0].parent = Some(parent);
                }
            }
            Slot::Root => {
                let index = self.position_in(&self.roots, before)?;
                self.roots.splice(index..index, new_ids.iter().copied());
            }
        }
        Ok(new_ids.len())
    }

    /// Detach a node from the tree.
    ///
    /// The node's id stays valid but the node (and its subtree) no
    /// longer appears in traversals or serialized output.
    pub fn remove(&mut self, id: NodeId) -> Result<()> {
        self.check_id(id)?;
        match self.nodes[id.0].parent {
            Some(parent) => {
                let index = self.position_in(&self.nodes[parent.0].children, id)?;
                self.nodes[parent.0].children.remove(index);
                self.nodes[id.0].parent = None;
                Ok(())
            }
            None => {
                let index = self.position_in(&self.roots, id)?;
                self.roots.remove(index);
                Ok(())
            }
        }
    }

    fn check_id(&self, id: NodeId) -> Result<()> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(DomError::NodeNotFound(id))
        }
    }

    fn position_in(&self, list: &[NodeId], id: NodeId) -> Result<usize> {
        list.iter()
            .position(|&n| n == id)
            .ok_or(DomError::NodeDetached(id))
    }
}
