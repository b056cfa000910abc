//! Document - High-level document API
//!
//! Wraps the tree with the bits of page state widgets care about: the
//! cached structural elements, the focused element and the ready state.

use crate::{DomError, DomResult, DomTree, NodeId};

/// Document loading state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    #[default]
    Loading,
    Complete,
}

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
    /// Element holding keyboard focus
    active_element: Option<NodeId>,
    ready_state: ReadyState,
}

impl Document {
    /// Create a new document with html/head/body
    pub fn new() -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Freshly created nodes cannot violate hierarchy rules.
        let _ = tree.append_child(NodeId::ROOT, html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            html_element: html,
            head_element: head,
            body_element: body,
            active_element: None,
            ready_state: ReadyState::Loading,
        }
    }

    /// Wrap an existing tree, locating html/head/body
    pub fn from_tree(tree: DomTree) -> Self {
        let mut doc = Self {
            tree,
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
            active_element: None,
            ready_state: ReadyState::Loading,
        };
        doc.finalize();
        doc
    }

    /// Re-resolve the cached structural elements
    pub fn finalize(&mut self) {
        let tree = &self.tree;
        self.html_element = tree
            .element_children(NodeId::ROOT)
            .find(|&id| tree.tag_name(id) == Some("html"))
            .unwrap_or(NodeId::NONE);
        let find_child = |tag: &str| {
            tree.element_children(self.html_element)
                .find(|&id| tree.tag_name(id) == Some(tag))
                .unwrap_or(NodeId::NONE)
        };
        let head = find_child("head");
        let body = find_child("body");
        self.head_element = head;
        self.body_element = body;
    }

    /// Get <html> element
    pub fn document_element(&self) -> Option<NodeId> {
        Some(self.html_element).filter(|id| id.is_valid())
    }

    /// Get <head> element
    pub fn head(&self) -> Option<NodeId> {
        Some(self.head_element).filter(|id| id.is_valid())
    }

    /// Get <body> element
    pub fn body(&self) -> Option<NodeId> {
        Some(self.body_element).filter(|id| id.is_valid())
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.element_by_id(NodeId::ROOT, id)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Currently focused element
    pub fn active_element(&self) -> Option<NodeId> {
        self.active_element
    }

    /// Whether `id` is reachable from the document node
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.tree.contains(NodeId::ROOT, id)
    }

    /// Move focus to `id`. Returns whether focus actually changed.
    ///
    /// Focusing an element detached from the document does nothing.
    pub fn set_active_element(&mut self, id: NodeId) -> DomResult<bool> {
        if self.tree.get(id).is_none() {
            return Err(DomError::NotFound(id));
        }
        if !self.tree.is_element(id) {
            return Err(DomError::NotAnElement(id));
        }
        if self.active_element == Some(id) || !self.is_connected(id) {
            return Ok(false);
        }
        tracing::trace!("focus moves to {}", id);
        self.active_element = Some(id);
        Ok(true)
    }

    /// Drop focus
    pub fn blur(&mut self) {
        self.active_element = None;
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn set_ready_state(&mut self, state: ReadyState) {
        self.ready_state = state;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_structure() {
        let doc = Document::new();
        let html = doc.document_element().unwrap();
        assert_eq!(doc.tree().parent(doc.body().unwrap()), Some(html));
        assert_eq!(doc.tree().parent(doc.head().unwrap()), Some(html));
        assert_eq!(doc.ready_state(), ReadyState::Loading);
    }

    #[test]
    fn test_from_bare_tree() {
        let doc = Document::from_tree(DomTree::new());
        assert!(doc.document_element().is_none());
        assert!(doc.body().is_none());
    }

    #[test]
    fn test_focus_tracking() {
        let mut doc = Document::new();
        let body = doc.body().unwrap();
        let button = doc.tree_mut().create_element("button");
        doc.tree_mut().append_child(body, button).unwrap();

        assert_eq!(doc.set_active_element(button), Ok(true));
        assert_eq!(doc.set_active_element(button), Ok(false));
        assert_eq!(doc.active_element(), Some(button));

        let text = doc.tree_mut().create_text("x");
        assert_eq!(doc.set_active_element(text), Err(DomError::NotAnElement(text)));
        doc.blur();
        assert!(doc.active_element().is_none());
    }

    #[test]
    fn test_focus_detached_element_is_noop() {
        let mut doc = Document::new();
        let body = doc.body().unwrap();
        let button = doc.tree_mut().create_element("button");
        assert!(!doc.is_connected(button));
        assert_eq!(doc.set_active_element(button), Ok(false));
        assert_eq!(doc.active_element(), None);

        doc.tree_mut().append_child(body, button).unwrap();
        assert_eq!(doc.set_active_element(button), Ok(true));
        doc.tree_mut().detach(button).unwrap();
        assert!(!doc.is_connected(button));
    }
}
