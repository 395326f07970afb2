//! JSON bridge.
//!
//! The upstream interchange format for parsed bureau documents is the
//! xml2js object shape. These conversions embed [`TreeNode`] into
//! `serde_json::Value` and back: strings map to text leaves, arrays to
//! sequences, objects to mappings. An object carrying only a `"_"` text
//! key, optionally next to a `"$"` attribute object, maps to a
//! text-wrapper.
//!
//! ```rust
//! use inprofile::core::normalize;
//! use inprofile::json::from_value;
//! use serde_json::json;
//!
//! let doc = json!({
//!     "INProfileResponse": {
//!         "SCORE": [{ "BureauScore": ["772"] }]
//!     }
//! });
//! assert_eq!(normalize(&from_value(&doc)).identity.credit_score, "772");
//! ```

use serde_json::{Map, Value};

use crate::core::TreeNode;

/// Build a tree from an xml2js-shaped JSON document.
///
/// Scalars that never occur in well-formed documents are still mapped
/// somewhere harmless: null becomes empty text, numbers and booleans
/// become their display text.
pub fn from_value(value: &Value) -> TreeNode {
    match value {
        Value::Null => TreeNode::Text(String::new()),
        Value::Bool(b) => TreeNode::Text(b.to_string()),
        Value::Number(n) => TreeNode::Text(n.to_string()),
        Value::String(s) => TreeNode::Text(s.clone()),
        Value::Array(items) => TreeNode::Seq(items.iter().map(from_value).collect()),
        Value::Object(fields) => from_object(fields),
    }
}

fn from_object(fields: &Map<String, Value>) -> TreeNode {
    if let Some(Value::String(text)) = fields.get("_") {
        if fields.keys().all(|k| k == "_" || k == "$") {
            let attrs = match fields.get("$") {
                Some(Value::Object(attrs)) => attrs
                    .iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect(),
                _ => Default::default(),
            };
            return TreeNode::Wrapped {
                text: text.clone(),
                attrs,
            };
        }
    }
    TreeNode::Map(fields.iter().map(|(k, v)| (k.clone(), from_value(v))).collect())
}

/// Embed a tree back into the xml2js JSON shape.
pub fn to_value(node: &TreeNode) -> Value {
    match node {
        TreeNode::Text(s) => Value::String(s.clone()),
        TreeNode::Wrapped { text, attrs } => {
            let mut fields = Map::new();
            fields.insert("_".to_string(), Value::String(text.clone()));
            if !attrs.is_empty() {
                fields.insert(
                    "$".to_string(),
                    attrs
                        .iter()
                        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                        .collect::<Map<_, _>>()
                        .into(),
                );
            }
            Value::Object(fields)
        }
        TreeNode::Seq(items) => Value::Array(items.iter().map(to_value).collect()),
        TreeNode::Map(fields) => Value::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), to_value(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrapper_objects_become_text_wrappers() {
        let node = from_value(&json!({"_": "772", "$": {"outOf": "900"}}));
        assert_eq!(node, TreeNode::wrapped("772", [("outOf", "900")]));
    }

    #[test]
    fn wrapper_next_to_children_stays_a_mapping() {
        let node = from_value(&json!({"_": "text", "Child": ["x"]}));
        assert!(matches!(node, TreeNode::Map(_)));
    }

    #[test]
    fn embedding_round_trips() {
        let tree = TreeNode::map([
            ("A", TreeNode::seq([TreeNode::wrapped("x", [("k", "v")])])),
            ("B", TreeNode::text("y")),
        ]);
        assert_eq!(from_value(&to_value(&tree)), tree);
    }
}
