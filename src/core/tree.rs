use std::collections::BTreeMap;

/// A node of the parsed bureau document.
///
/// Markup-to-tree parsers in the xml2js tradition produce exactly four
/// shapes, and real reports mix all of them freely:
///
/// - [`Text`](TreeNode::Text): a bare string leaf.
/// - [`Wrapped`](TreeNode::Wrapped): element text plus attributes, emitted
///   when an element carries both a body and attributes.
/// - [`Seq`](TreeNode::Seq): an ordered sequence. The parser wraps every
///   repeatable or optional element in one, including elements that occur
///   exactly once.
/// - [`Map`](TreeNode::Map): named children with unique keys; key order
///   carries no meaning.
///
/// Nodes are read-only input, built fresh per document and discarded after
/// extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Text(String),
    Wrapped {
        text: String,
        attrs: BTreeMap<String, String>,
    },
    Seq(Vec<TreeNode>),
    Map(BTreeMap<String, TreeNode>),
}

impl TreeNode {
    /// A bare text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        TreeNode::Text(value.into())
    }

    /// A text-wrapper leaf holding element text and attributes.
    pub fn wrapped<K, V>(
        text: impl Into<String>,
        attrs: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        TreeNode::Wrapped {
            text: text.into(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// An ordered sequence of nodes.
    pub fn seq(items: impl IntoIterator<Item = TreeNode>) -> Self {
        TreeNode::Seq(items.into_iter().collect())
    }

    /// A mapping from field name to child node.
    pub fn map<K>(entries: impl IntoIterator<Item = (K, TreeNode)>) -> Self
    where
        K: Into<String>,
    {
        TreeNode::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Child lookup. `None` unless this node is a mapping holding `key`.
    pub fn get(&self, key: &str) -> Option<&TreeNode> {
        match self {
            TreeNode::Map(fields) => fields.get(key),
            _ => None,
        }
    }

    /// First element of a sequence. `None` for an empty sequence and for
    /// every non-sequence shape.
    pub fn first(&self) -> Option<&TreeNode> {
        match self {
            TreeNode::Seq(items) => items.first(),
            _ => None,
        }
    }

    /// Leaf text of a `Text` or `Wrapped` node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TreeNode::Text(s) => Some(s),
            TreeNode::Wrapped { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_shape() {
        let node = TreeNode::map([("a", TreeNode::seq([TreeNode::text("x")]))]);
        assert_eq!(
            node.get("a")
                .and_then(TreeNode::first)
                .and_then(TreeNode::as_text),
            Some("x")
        );
        assert!(node.get("b").is_none());
        assert!(node.first().is_none());
        assert!(node.as_text().is_none());
    }

    #[test]
    fn wrapper_exposes_text_not_attrs() {
        let node = TreeNode::wrapped("772", [("outOf", "900")]);
        assert_eq!(node.as_text(), Some("772"));
        assert!(node.get("outOf").is_none());
    }

    #[test]
    fn first_skips_nothing_on_empty_seq() {
        assert!(TreeNode::Seq(vec![]).first().is_none());
    }
}
