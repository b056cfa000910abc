//! fOS Accordion
//!
//! Accessible ARIA accordions over the fOS DOM. Marker-classed markup is
//! rewritten into a `tablist` of `tab` buttons and `tabpanel`s, and a single
//! document-level handler drives expand/collapse, roving selection and
//! keyboard navigation for every instance on the page.
//!
//! ```rust,ignore
//! use fos_accordion::Accordions;
//!
//! let mut page = Accordions::from_markup(html)?;
//! page.content_loaded()?;
//! page.click(header);
//! page.run_pending_tasks();
//! ```

mod builder;
mod config;
mod controller;
mod dom_utils;
mod events;
mod registry;
mod runtime;
mod tasks;

pub use builder::{attach, destroy};
pub use config::{AccordionConfig, DATA_HASH_ID};
pub use controller::{Dispatch, handle_event, header_set, resolve, selected_index};
pub use events::{AccordionEvent, EventKind, EventOutcome, Key, KeyModifiers, KeyboardInput};
pub use fos_dom::{Document, DomTree, NodeId};
pub use registry::{ConfigRegistry, InstanceId};
pub use runtime::{Accordions, Plugin};
pub use tasks::{Task, TaskQueue};

/// Accordion result type
pub type AccordionResult<T> = Result<T, AccordionError>;

/// Accordion errors
#[derive(Debug, thiserror::Error)]
pub enum AccordionError {
    #[error("malformed accordion markup at {header}: {reason}")]
    MalformedMarkup { header: NodeId, reason: String },

    #[error("{0} is not a built accordion container")]
    NotAnAccordion(NodeId),

    #[error("invalid accordion configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("DOM error: {0}")]
    Dom(#[from] fos_dom::DomError),

    #[error("HTML error: {0}")]
    Parse(#[from] fos_html::ParseError),
}
