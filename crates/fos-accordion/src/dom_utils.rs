//! DOM Utilities
//!
//! Accordion-specific lookups over the arena tree: batch attribute writes,
//! nearest instance-tag search and ancestor search scoped to an instance.

use fos_dom::{DomResult, DomTree, NodeId};

use crate::DATA_HASH_ID;

/// Set several attributes on one element
pub fn set_attributes(tree: &mut DomTree, node: NodeId, attrs: &[(&str, &str)]) -> DomResult<()> {
    for (name, value) in attrs {
        tree.set_attribute(node, name, *value)?;
    }
    Ok(())
}

/// Nearest element at or above `node` carrying the instance tag, with the tag value
pub fn search_parent_hash_id(tree: &DomTree, node: NodeId) -> Option<(NodeId, &str)> {
    tree.ancestors(node)
        .find_map(|id| tree.get_attribute(id, DATA_HASH_ID).map(|tag| (id, tag)))
}

/// Nearest element at or above `node` with `class` and the given instance tag
pub fn search_parent(tree: &DomTree, node: NodeId, class: &str, hash: &str) -> Option<NodeId> {
    tree.ancestors(node)
        .find(|&id| tree.has_class(id, class) && tree.get_attribute(id, DATA_HASH_ID) == Some(hash))
}

/// Element below `scope` with the given `id` attribute and instance tag
pub fn find_by_id(tree: &DomTree, scope: NodeId, id: &str, hash: &str) -> Option<NodeId> {
    tree.descendants(scope).find(|&node| {
        tree.get_attribute(node, "id") == Some(id) && tree.get_attribute(node, DATA_HASH_ID) == Some(hash)
    })
}

/// Nearest strict ancestor of `node` carrying `class`
pub fn closest_strict_ancestor(tree: &DomTree, node: NodeId, class: &str) -> Option<NodeId> {
    tree.ancestors(node).skip(1).find(|&id| tree.has_class(id, class))
}

/// Short human description of an element, for error messages
pub fn describe(tree: &DomTree, node: NodeId) -> String {
    let tag = tree.tag_name(node).unwrap_or("node");
    let text = tree.text_content(node);
    let text = text.trim();
    if text.is_empty() {
        return format!("<{tag}> {node}");
    }
    let short: String = text.chars().take(40).collect();
    format!("<{tag}> {node} \"{short}\"")
}
