//! Accordion Runtime
//!
//! Page-level owner of the document, the config registry and the deferred
//! task queue. Plays the part of the document listener: every click,
//! keydown and focus goes through [`Accordions::dispatch`].

use std::sync::Arc;

use fos_dom::{Document, NodeId, ReadyState};
use fos_html::HtmlParser;

use crate::events::{AccordionEvent, EventOutcome, KeyboardInput};
use crate::{AccordionConfig, AccordionResult, ConfigRegistry, InstanceId, Task, TaskQueue, builder, controller};

/// A configured accordion factory
#[derive(Debug, Clone, Default)]
pub struct Plugin {
    config: Arc<AccordionConfig>,
}

impl Plugin {
    pub fn new(config: AccordionConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Build from a JSON override record
    pub fn from_json(json: &str) -> AccordionResult<Self> {
        Ok(Self::new(AccordionConfig::from_json(json)?))
    }

    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }
}

/// Accordion-enabled page
#[derive(Debug)]
pub struct Accordions {
    document: Document,
    registry: ConfigRegistry,
    tasks: TaskQueue,
    loaded: bool,
}

impl Accordions {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            registry: ConfigRegistry::new(),
            tasks: TaskQueue::new(),
            loaded: false,
        }
    }

    /// Parse a page
    pub fn from_markup(html: &str) -> AccordionResult<Self> {
        Ok(Self::new(fos_html::parse(html)?))
    }

    /// Create a factory with the given overrides
    pub fn plugin(config: AccordionConfig) -> Plugin {
        Plugin::new(config)
    }

    /// Build every unbuilt container under `root` (the whole document when `None`)
    pub fn attach(&mut self, plugin: &Plugin, root: Option<NodeId>) -> AccordionResult<Vec<InstanceId>> {
        let root = root.unwrap_or_else(|| self.document.tree().root());
        builder::attach(self.document.tree_mut(), &mut self.registry, &plugin.config, root)
    }

    /// Undo the build of one container
    pub fn destroy(&mut self, container: NodeId) -> AccordionResult<()> {
        builder::destroy(self.document.tree_mut(), &mut self.registry, container)?;
        // Removing the focused button drops focus, as a browser does.
        if let Some(active) = self.document.active_element() {
            if !self.document.is_connected(active) {
                self.document.blur();
            }
        }
        Ok(())
    }

    /// Document-ready hook: attach a default-configured plugin to the whole page.
    ///
    /// Only the first call does anything.
    pub fn content_loaded(&mut self) -> AccordionResult<Vec<InstanceId>> {
        if self.loaded {
            return Ok(Vec::new());
        }
        self.document.set_ready_state(ReadyState::Complete);
        let instances = self.attach(&Plugin::default(), None)?;
        self.loaded = true;
        tracing::info!("document ready, {} accordion(s) initialized", instances.len());
        Ok(instances)
    }

    /// Parse `html` and append it under `parent`, returning the inserted top-level nodes.
    ///
    /// Injected containers stay unbuilt until `attach` is called for them.
    pub fn inject(&mut self, parent: NodeId, html: &str) -> AccordionResult<Vec<NodeId>> {
        let nodes = HtmlParser::new().parse_into(self.document.tree_mut(), parent, html)?;
        Ok(nodes)
    }

    /// Deliver an event to the delegated handler
    pub fn dispatch(&mut self, event: &mut AccordionEvent) -> EventOutcome {
        controller::handle_event(self.document.tree_mut(), &self.registry, &mut self.tasks, event)
    }

    pub fn click(&mut self, target: NodeId) -> EventOutcome {
        self.dispatch(&mut AccordionEvent::click(target))
    }

    pub fn key_down(&mut self, target: NodeId, input: KeyboardInput) -> EventOutcome {
        self.dispatch(&mut AccordionEvent::key_down(target, input))
    }

    /// Move focus to `target` right away, as a Tab press would
    pub fn focus(&mut self, target: NodeId) -> EventOutcome {
        match self.document.set_active_element(target) {
            Ok(true) => self.dispatch(&mut AccordionEvent::focus(target)),
            Ok(false) => EventOutcome::Ignored,
            Err(err) => {
                tracing::warn!("cannot focus {}: {}", target, err);
                EventOutcome::Ignored
            }
        }
    }

    /// Run one turn of deferred tasks. Returns how many ran.
    pub fn run_pending_tasks(&mut self) -> usize {
        let turn = self.tasks.take_turn();
        let count = turn.len();
        for task in turn {
            match task {
                Task::Focus(target) => {
                    self.focus(target);
                }
            }
        }
        count
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    pub fn pending_tasks(&self) -> &TaskQueue {
        &self.tasks
    }
}
