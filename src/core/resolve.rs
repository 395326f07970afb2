use super::tree::TreeNode;

/// Resolve a dotted field path against a document node.
///
/// Walks `path` segment by segment, descending through mappings. The two
/// parser conventions are normalized away after the walk: a value wrapped
/// in a non-empty sequence is replaced by the sequence's first element,
/// and a text-wrapper yields its text content with the attributes
/// discarded.
///
/// Absence is not an error. A segment that names a missing key, or that
/// lands on anything other than a mapping, short-circuits to `""`. Real
/// reports omit a large share of their optional elements, so the empty
/// string is the uniform missing-value signal. The function holds no state
/// and never panics.
pub fn resolve(node: &TreeNode, path: &str) -> String {
    let mut current = node;
    for segment in path.split('.') {
        match current.get(segment) {
            Some(child) => current = child,
            None => return String::new(),
        }
    }

    // Logically-scalar fields still arrive as one-element sequences.
    let current = match current {
        TreeNode::Seq(items) if !items.is_empty() => &items[0],
        other => other,
    };

    current.as_text().unwrap_or_default().to_string()
}
