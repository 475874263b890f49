//! Event-driven markup parser built on quick-xml
//!
//! quick-xml's structural checks are disabled; tag matching is done
//! here so that real-world HTML (void elements, stray end tags,
//! unclosed elements at end of input) parses without complaint.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{DomError, Result};
use crate::types::{is_void_element, Element, NodeData, NodeId, NodeKind};

/// Parse `source` into nodes appended to `nodes`, returning the ids of
/// the top-level nodes in document order. Returned nodes have no
/// parent; the caller decides where they hang.
pub(crate) fn parse_nodes(nodes: &mut Vec<NodeData>, source: &str) -> Result<Vec<NodeId>> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text_start = false;
    reader.config_mut().trim_text_end = false;
    // Tag matching is handled below, not by the reader.
    reader.config_mut().check_end_names = false;
    reader.config_mut().allow_unmatched_ends = true;

    let mut top: Vec<NodeId> = Vec::new();
    // Open elements, innermost last, with lowercased names for matching.
    let mut stack: Vec<(NodeId, String)> = Vec::new();

    loop {
        let event_start = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(tag)) => {
                let element = element_from(&tag, false);
                let void = is_void_element(&element.name);
                let lower = element.name.to_ascii_lowercase();
                let id = attach(nodes, NodeKind::Element(element), &stack, &mut top);
                if !void {
                    stack.push((id, lower));
                }
            }
            Ok(Event::Empty(tag)) => {
                let element = element_from(&tag, true);
                attach(nodes, NodeKind::Element(element), &stack, &mut top);
            }
            Ok(Event::End(tag)) => {
                let name = String::from_utf8_lossy(tag.name().as_ref()).to_ascii_lowercase();
                // Close the nearest matching open element, implicitly
                // closing anything opened inside it. A close tag with no
                // matching open tag is dropped.
                if let Some(open) = stack.iter().rposition(|(_, n)| *n == name) {
                    stack.truncate(open);
                }
            }
            Ok(Event::Text(text)) => {
                let raw = String::from_utf8_lossy(text.as_ref()).into_owned();
                attach(nodes, NodeKind::Text(raw), &stack, &mut top);
            }
            Ok(Event::Comment(text)) => {
                let interior = String::from_utf8_lossy(text.as_ref()).into_owned();
                attach(nodes, NodeKind::Comment(interior), &stack, &mut top);
            }
            Ok(Event::CData(_) | Event::PI(_) | Event::Decl(_) | Event::DocType(_)) => {
                // Reproduced on output exactly as written.
                let event_end = reader.buffer_position() as usize;
                let raw = source[event_start..event_end].to_string();
                attach(nodes, NodeKind::Raw(raw), &stack, &mut top);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DomError::Markup {
                    message: e.to_string(),
                    position: reader.error_position(),
                });
            }
        }
    }

    // Elements still open here are implicitly closed.
    Ok(top)
}

fn element_from(tag: &BytesStart, self_closing: bool) -> Element {
    let raw = String::from_utf8_lossy(tag.as_ref());
    let name_len = tag.name().as_ref().len();
    Element {
        name: raw[..name_len].to_string(),
        attrs_raw: raw[name_len..].to_string(),
        self_closing,
    }
}

fn attach(
    nodes: &mut Vec<NodeData>,
    kind: NodeKind,
    stack: &[(NodeId, String)],
    top: &mut Vec<NodeId>,
) -> NodeId {
    let id = NodeId(nodes.len());
    let parent = stack.last().map(|(parent, _)| *parent);
    nodes.push(NodeData {
        kind,
        parent,
        children: Vec::new(),
    });
    match parent {
        Some(parent) => nodes[parent.0].children.push(id),
        None => top.push(id),
    }
    id
}
