//! Serialization back to markup text
//!
//! Nothing is escaped or pretty-printed on the way out. Text, comments,
//! attributes and raw constructs are emitted exactly as parsed, so a
//! well-formed document round-trips byte for byte. The only
//! normalization is structural repair: implicitly closed elements gain
//! their end tag and stray end tags disappear.

use crate::types::{is_void_element, Document, NodeId, NodeKind};

impl Document {
    /// Serialize the document back to markup text
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for &root in &self.roots {
            self.write_node(root, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].kind {
            NodeKind::Text(raw) => out.push_str(raw),
            NodeKind::Raw(raw) => out.push_str(raw),
            NodeKind::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeKind::Element(element) => {
                out.push('<');
                out.push_str(&element.name);
                out.push_str(&element.attrs_raw);
                if element.self_closing {
                    out.push_str("/>");
                    return;
                }
                out.push('>');
                if is_void_element(&element.name) {
                    return;
                }
                for &child in &self.nodes[id.0].children {
                    self.write_node(child, out);
                }
                out.push_str("</");
                out.push_str(&element.name);
                out.push('>');
            }
        }
    }
}
