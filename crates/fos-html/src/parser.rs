//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it into the fOS arena DOM.

use fos_dom::{Document, DomTree, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document ({} bytes)", html.len());

        let dom = Self::parse_rcdom(html)?;
        let mut tree = DomTree::new();
        self.convert_node(&dom.document, &mut tree, NodeId::ROOT)?;

        let document = Document::from_tree(tree);
        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    /// Parse `html` as body content and append the resulting nodes to `parent`.
    ///
    /// Used to inject markup into a live document; returns the top-level
    /// nodes that were inserted.
    pub fn parse_into(&self, tree: &mut DomTree, parent: NodeId, html: &str) -> Result<Vec<NodeId>, ParseError> {
        let dom = Self::parse_rcdom(html)?;
        let Some(body) = find_body(&dom.document) else {
            return Ok(Vec::new());
        };

        let before: Vec<NodeId> = tree.children(parent).collect();
        for child in body.children.borrow().iter() {
            self.convert_node(child, tree, parent)?;
        }
        let inserted: Vec<NodeId> = tree.children(parent).filter(|id| !before.contains(id)).collect();
        tracing::debug!("Injected {} nodes under {}", inserted.len(), parent);
        Ok(inserted)
    }

    fn parse_rcdom(html: &str) -> Result<RcDom, ParseError> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;
        Ok(dom)
    }

    /// Convert an RcDom node into our tree under `parent`
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) -> Result<(), ParseError> {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent)?;
                }
            }
            RcNodeData::Doctype { name, public_id, system_id } => {
                let id = tree.create_doctype(name, public_id, system_id);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if !text.trim().is_empty() {
                    let id = tree.create_text(&text);
                    tree.append_child(parent, id)?;
                }
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);
                for attr in attrs.borrow().iter() {
                    tree.set_attribute(id, &attr.name.local, attr.value.to_string())?;
                }
                tree.append_child(parent, id)?;

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id)?;
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {}
        }
        Ok(())
    }
}

fn find_body(document: &Handle) -> Option<Handle> {
    let find = |parent: &Handle, tag: &str| {
        parent
            .children
            .borrow()
            .iter()
            .find(|child| matches!(&child.data, RcNodeData::Element { name, .. } if &*name.local == tag))
            .cloned()
    };
    let html = find(document, "html")?;
    find(&html, "body")
}
