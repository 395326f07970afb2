//! Bureau XML ingestion.
//!
//! Builds the [`TreeNode`] document shape from raw markup, following the
//! conventions the extraction layer expects from xml2js-family parsers:
//! every child element is collected under its name as a sequence even when
//! it occurs once; a childless element with attributes becomes a
//! text-wrapper; a branch element's attributes land under a `"$"` key and
//! its loose text under `"_"`. The document element itself is not
//! sequence-wrapped, so the returned root is a one-key mapping from the
//! root tag name to its node.
//!
//! ```rust
//! use inprofile::core::normalize;
//! use inprofile::xml::parse_str;
//!
//! let xml = "<INProfileResponse><SCORE><BureauScore>772</BureauScore></SCORE></INProfileResponse>";
//! let tree = parse_str(xml).unwrap();
//! assert_eq!(normalize(&tree).identity.credit_score, "772");
//! ```

use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::core::{ReportError, TreeNode};

/// Parse a bureau response document into its tree form.
///
/// Ill-formed markup and documents with no root element are rejected with
/// [`ReportError::Xml`]; no input panics.
pub fn parse_str(xml: &str) -> Result<TreeNode, ReportError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: BTreeMap<String, TreeNode> = BTreeMap::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                stack.push(Frame::open(e));
            }
            Ok(Event::Empty(ref e)) => {
                attach(&mut stack, &mut root, Frame::open(e));
            }
            Ok(Event::Text(ref e)) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(frame) = stack.last_mut() {
                    frame
                        .text
                        .push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                if let Some(frame) = stack.pop() {
                    attach(&mut stack, &mut root, frame);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ReportError::Xml(format!(
                    "parse error at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(ReportError::Xml("unexpected end of document".to_string()));
    }
    if root.is_empty() {
        return Err(ReportError::Xml("no document element".to_string()));
    }

    Ok(TreeNode::Map(root))
}

/// One element being assembled while its subtree is still open.
struct Frame {
    name: String,
    attrs: BTreeMap<String, String>,
    text: String,
    children: BTreeMap<String, Vec<TreeNode>>,
}

impl Frame {
    fn open(e: &BytesStart<'_>) -> Self {
        let name = std::str::from_utf8(e.name().as_ref())
            .unwrap_or("")
            .to_string();
        let attrs = e
            .attributes()
            .flatten()
            .map(|attr| {
                (
                    std::str::from_utf8(attr.key.as_ref())
                        .unwrap_or("")
                        .to_string(),
                    std::str::from_utf8(&attr.value).unwrap_or("").to_string(),
                )
            })
            .collect();
        Frame {
            name,
            attrs,
            text: String::new(),
            children: BTreeMap::new(),
        }
    }

    /// Close this element into its final node shape.
    fn close(self) -> (String, TreeNode) {
        let Frame {
            name,
            attrs,
            text,
            children,
        } = self;

        if children.is_empty() {
            let node = if attrs.is_empty() {
                TreeNode::Text(text)
            } else {
                TreeNode::Wrapped { text, attrs }
            };
            return (name, node);
        }

        let mut fields: BTreeMap<String, TreeNode> = children
            .into_iter()
            .map(|(child_name, nodes)| (child_name, TreeNode::Seq(nodes)))
            .collect();
        if !attrs.is_empty() {
            fields.insert(
                "$".to_string(),
                TreeNode::Map(attrs.into_iter().map(|(k, v)| (k, TreeNode::Text(v))).collect()),
            );
        }
        if !text.is_empty() {
            fields.insert("_".to_string(), TreeNode::Text(text));
        }
        (name, TreeNode::Map(fields))
    }
}

fn attach(stack: &mut Vec<Frame>, root: &mut BTreeMap<String, TreeNode>, frame: Frame) {
    let (name, node) = frame.close();
    match stack.last_mut() {
        Some(parent) => parent.children.entry(name).or_default().push(node),
        // Document element: kept unwrapped under its tag name.
        None => {
            root.insert(name, node);
        }
    }
}
