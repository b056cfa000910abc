//! fOS HTML
//!
//! HTML5 parsing built on html5ever, converting into the fOS arena DOM,
//! plus serialization back to markup.

mod parser;
mod serializer;

pub use fos_dom::{Document, DomTree, NodeId};
pub use parser::HtmlParser;
pub use serializer::{HtmlSerializer, inner_html, outer_html};

/// Parse an HTML string into a document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read markup: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot insert parsed markup: {0}")]
    Dom(#[from] fos_dom::DomError),
}
