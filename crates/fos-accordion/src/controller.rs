//! Interaction Controller
//!
//! One delegated handler for click, keydown and focus on the whole
//! document. An event is routed to the nearest element carrying an
//! instance tag, so events inside a nested accordion never reach the outer
//! one. The controller only rewrites ARIA state and queues focus moves;
//! it never builds markup.

use std::sync::Arc;

use fos_dom::{DomResult, DomTree, NodeId};

use crate::dom_utils::{find_by_id, search_parent, search_parent_hash_id};
use crate::events::{AccordionEvent, EventKind, EventOutcome, Key, KeyboardInput};
use crate::{AccordionConfig, ConfigRegistry, DATA_HASH_ID, InstanceId, TaskQueue};

/// Instance an event target belongs to
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub instance: InstanceId,
    pub config: Arc<AccordionConfig>,
    /// Nearest element at or above the target carrying the instance tag
    pub owner: NodeId,
}

impl Dispatch {
    fn tag(&self) -> String {
        self.instance.to_string()
    }
}

/// Find the instance owning `target`.
///
/// Returns `None` when no ancestor is tagged, or when the tag names an
/// instance the registry no longer knows.
pub fn resolve(tree: &DomTree, registry: &ConfigRegistry, target: NodeId) -> Option<Dispatch> {
    let (owner, tag) = search_parent_hash_id(tree, target)?;
    match registry.get_by_tag(tag) {
        Some((instance, config)) => Some(Dispatch {
            instance,
            config: Arc::clone(config),
            owner,
        }),
        None => {
            tracing::warn!("ignoring event for unknown accordion instance {:?} on {}", tag, owner);
            None
        }
    }
}

/// Handle one delegated event
pub fn handle_event(
    tree: &mut DomTree,
    registry: &ConfigRegistry,
    tasks: &mut TaskQueue,
    event: &mut AccordionEvent,
) -> EventOutcome {
    let Some(dispatch) = resolve(tree, registry, event.target) else {
        return EventOutcome::Ignored;
    };

    let result = if tree.has_class(dispatch.owner, &dispatch.config.accordion_js_header) {
        on_header(tree, tasks, &dispatch, event)
    } else {
        match &event.kind {
            EventKind::KeyDown(input) => {
                let input = input.clone();
                on_panel_key(tree, tasks, &dispatch, event, &input)
            }
            _ => Ok(EventOutcome::Ignored),
        }
    };

    match result {
        Ok(outcome) => {
            if outcome.is_handled() {
                tracing::trace!("{} on {} handled by {}", event.kind.name(), event.target, dispatch.instance);
            }
            outcome
        }
        Err(err) => {
            tracing::warn!("accordion {} failed to handle {}: {}", dispatch.instance, event.kind.name(), err);
            EventOutcome::Ignored
        }
    }
}

fn on_header(
    tree: &mut DomTree,
    tasks: &mut TaskQueue,
    dispatch: &Dispatch,
    event: &mut AccordionEvent,
) -> DomResult<EventOutcome> {
    let config = &dispatch.config;
    let button = dispatch.owner;
    let Some(container) = owning_container(tree, dispatch, button) else {
        return Ok(EventOutcome::Ignored);
    };
    let headers = header_set(tree, dispatch, container);

    match &event.kind {
        EventKind::Focus => {
            select(tree, config, &headers, button)?;
            Ok(EventOutcome::Handled)
        }
        EventKind::Click => {
            let single_select = tree.get_attribute(container, &config.attr_multiselectable) == Some("false");
            if single_select {
                for &other in headers.iter().filter(|&&h| h != button) {
                    set_expanded(tree, dispatch, container, other, false)?;
                }
            }
            let expanded = tree.get_attribute(button, &config.attr_expanded) == Some("true");
            set_expanded(tree, dispatch, container, button, !expanded)?;
            select(tree, config, &headers, button)?;
            tasks.defer_focus(button);
            event.prevent_default();
            Ok(EventOutcome::HandledPreventDefault)
        }
        EventKind::KeyDown(input) => {
            let Some(position) = headers.iter().position(|&h| h == button) else {
                return Ok(EventOutcome::Ignored);
            };
            let current = selected_index(tree, config, &headers).unwrap_or(position);
            let Some(target) = header_key_target(input, current, headers.len()) else {
                return Ok(EventOutcome::Ignored);
            };
            move_to(tree, tasks, config, &headers, headers[target])?;
            event.prevent_default();
            Ok(EventOutcome::HandledPreventDefault)
        }
    }
}

/// Index a tab-list navigation key moves to, with wrap-around
fn header_key_target(input: &KeyboardInput, current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let ctrl = input.modifiers.ctrl;
    match input.key {
        Key::Home => Some(0),
        Key::End => Some(len - 1),
        Key::ArrowLeft | Key::ArrowUp if !ctrl => Some(wrap_prev(current, len)),
        Key::ArrowRight | Key::ArrowDown if !ctrl => Some(wrap_next(current, len)),
        _ => None,
    }
}

fn on_panel_key(
    tree: &mut DomTree,
    tasks: &mut TaskQueue,
    dispatch: &Dispatch,
    event: &mut AccordionEvent,
    input: &KeyboardInput,
) -> DomResult<EventOutcome> {
    if !input.modifiers.ctrl || !matches!(input.key, Key::ArrowUp | Key::PageUp | Key::PageDown) {
        return Ok(EventOutcome::Ignored);
    }
    let config = &dispatch.config;
    let tag = dispatch.tag();
    let Some(panel) = search_parent(tree, event.target, &config.accordion_js_panel, &tag) else {
        return Ok(EventOutcome::Ignored);
    };
    let Some(container) = owning_container(tree, dispatch, panel) else {
        return Ok(EventOutcome::Ignored);
    };
    let Some(owner_header) = tree
        .get_attribute(panel, &config.attr_labelledby)
        .and_then(|id| find_by_id(tree, container, id, &tag))
    else {
        return Ok(EventOutcome::Ignored);
    };
    let headers = header_set(tree, dispatch, container);
    let Some(position) = headers.iter().position(|&h| h == owner_header) else {
        return Ok(EventOutcome::Ignored);
    };

    let target = match input.key {
        Key::PageUp => wrap_prev(position, headers.len()),
        Key::PageDown => wrap_next(position, headers.len()),
        _ => position,
    };
    move_to(tree, tasks, config, &headers, headers[target])?;
    event.prevent_default();
    Ok(EventOutcome::HandledPreventDefault)
}

fn owning_container(tree: &DomTree, dispatch: &Dispatch, node: NodeId) -> Option<NodeId> {
    search_parent(tree, node, &dispatch.config.accordion_js, &dispatch.tag())
}

/// Ordered header buttons of one container.
///
/// Without cool selectors only buttons whose title wrapper is a direct
/// child of the container count.
pub fn header_set(tree: &DomTree, dispatch: &Dispatch, container: NodeId) -> Vec<NodeId> {
    let config = &dispatch.config;
    let tag = dispatch.tag();
    let cool_selectors = tree.has_attribute(container, &config.data_cool_selectors);
    tree.elements_by_class_name(container, &config.accordion_js_header)
        .into_iter()
        .filter(|&h| tree.get_attribute(h, DATA_HASH_ID) == Some(tag.as_str()))
        .filter(|&h| cool_selectors || tree.parent(h).and_then(|p| tree.parent(p)) == Some(container))
        .collect()
}

/// Position of the first header with `aria-selected="true"`
pub fn selected_index(tree: &DomTree, config: &AccordionConfig, headers: &[NodeId]) -> Option<usize> {
    headers
        .iter()
        .position(|&h| tree.get_attribute(h, &config.attr_selected) == Some("true"))
}

fn select(tree: &mut DomTree, config: &AccordionConfig, headers: &[NodeId], selected: NodeId) -> DomResult<()> {
    for &header in headers {
        let value = if header == selected { "true" } else { "false" };
        tree.set_attribute(header, &config.attr_selected, value)?;
    }
    Ok(())
}

fn move_to(
    tree: &mut DomTree,
    tasks: &mut TaskQueue,
    config: &AccordionConfig,
    headers: &[NodeId],
    target: NodeId,
) -> DomResult<()> {
    select(tree, config, headers, target)?;
    tasks.defer_focus(target);
    Ok(())
}

/// Write `aria-expanded` on a header and the matching `aria-hidden` on its panel
fn set_expanded(
    tree: &mut DomTree,
    dispatch: &Dispatch,
    container: NodeId,
    header: NodeId,
    expanded: bool,
) -> DomResult<()> {
    let config = &dispatch.config;
    tree.set_attribute(header, &config.attr_expanded, if expanded { "true" } else { "false" })?;
    let panel = tree
        .get_attribute(header, &config.attr_controls)
        .and_then(|id| find_by_id(tree, container, id, &dispatch.tag()));
    match panel {
        Some(panel) => tree.set_attribute(panel, &config.attr_hidden, if expanded { "false" } else { "true" }),
        None => {
            tracing::warn!("header {} controls no panel in {}", header, dispatch.instance);
            Ok(())
        }
    }
}

fn wrap_prev(index: usize, len: usize) -> usize {
    if index == 0 { len - 1 } else { index - 1 }
}

fn wrap_next(index: usize, len: usize) -> usize {
    (index + 1) % len
}
