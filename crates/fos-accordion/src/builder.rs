//! Accordion Builder
//!
//! Turns marker-classed markup into a `tablist` of `tab` buttons and
//! `tabpanel`s. Each header element is kept in place as the title wrapper:
//! its content moves into a generated `<button>` that carries the tab
//! semantics.
//!
//! Every container found under the root is validated before any of them is
//! touched, so malformed markup leaves the document unchanged.

use std::sync::Arc;

use fos_dom::{DomTree, NodeId};

use crate::dom_utils::{closest_strict_ancestor, describe, find_by_id, set_attributes};
use crate::{AccordionConfig, AccordionError, AccordionResult, ConfigRegistry, DATA_HASH_ID, InstanceId};

/// A validated container: headers paired with their panels, in order
#[derive(Debug)]
struct ContainerPlan {
    container: NodeId,
    pairs: Vec<(NodeId, NodeId)>,
}

/// Style-class prefix from the container's prefix attribute (`"foo"` -> `"foo-"`)
fn class_prefix(tree: &DomTree, container: NodeId, config: &AccordionConfig) -> String {
    tree.get_attribute(container, &config.data_prefix_class)
        .map(|prefix| format!("{prefix}-"))
        .unwrap_or_default()
}

/// Transform every unbuilt accordion container below `root`.
///
/// Containers already carrying an instance tag are skipped, which makes
/// repeated calls on the same content harmless.
pub fn attach(
    tree: &mut DomTree,
    registry: &mut ConfigRegistry,
    config: &Arc<AccordionConfig>,
    root: NodeId,
) -> AccordionResult<Vec<InstanceId>> {
    let containers: Vec<NodeId> = std::iter::once(root)
        .filter(|&root| tree.has_class(root, &config.accordion_js))
        .chain(tree.elements_by_class_name(root, &config.accordion_js))
        .filter(|&container| !tree.has_attribute(container, DATA_HASH_ID))
        .collect();

    let plans = containers
        .iter()
        .map(|&container| plan_container(tree, config, container))
        .collect::<AccordionResult<Vec<_>>>()?;

    let mut instances = Vec::with_capacity(plans.len());
    for plan in &plans {
        let instance = registry.register(Arc::clone(config));
        build_container(tree, config, plan, instance)?;
        instances.push(instance);
    }

    tracing::debug!("attached {} accordion(s) under {}", instances.len(), root);
    Ok(instances)
}

fn plan_container(tree: &DomTree, config: &AccordionConfig, container: NodeId) -> AccordionResult<ContainerPlan> {
    let cool_selectors = tree.has_attribute(container, &config.data_cool_selectors);
    let header_class = config.accordion_js_header.as_str();

    let mut pairs = Vec::new();
    for header in tree.elements_by_class_name(container, header_class) {
        // Buttons of an already built accordion keep the header marker.
        if tree.has_attribute(header, DATA_HASH_ID) {
            continue;
        }
        let direct_child = tree.parent(header) == Some(container);
        let owned = closest_strict_ancestor(tree, header, &config.accordion_js) == Some(container);
        if !direct_child && !(cool_selectors && owned) {
            continue;
        }

        let panel = tree
            .next_element_sibling(header)
            .ok_or_else(|| AccordionError::MalformedMarkup {
                header,
                reason: format!("{} has no following panel element", describe(tree, header)),
            })?;
        if tree.has_class(panel, header_class) {
            return Err(AccordionError::MalformedMarkup {
                header,
                reason: format!(
                    "{} is followed by another header instead of a panel",
                    describe(tree, header)
                ),
            });
        }
        pairs.push((header, panel));
    }

    Ok(ContainerPlan { container, pairs })
}

fn build_container(
    tree: &mut DomTree,
    config: &AccordionConfig,
    plan: &ContainerPlan,
    instance: InstanceId,
) -> AccordionResult<()> {
    let container = plan.container;
    let tag = instance.to_string();
    let prefix = class_prefix(tree, container, config);
    let single_select = tree.get_attribute(container, &config.data_multiselectable) == Some("none");

    set_attributes(
        tree,
        container,
        &[
            (config.attr_multiselectable.as_str(), if single_select { "false" } else { "true" }),
            (config.attr_role.as_str(), config.role_tablist.as_str()),
            ("id", tag.as_str()),
            (DATA_HASH_ID, tag.as_str()),
        ],
    )?;
    tree.add_class(container, &format!("{prefix}{}", config.style))?;

    let mut seen_open = false;
    for (position, &(header, panel)) in plan.pairs.iter().enumerate() {
        let index = position + 1;
        let tab_id = config.tab_id(&tag, index);
        let panel_id = config.panel_element_id(&tag, index);

        let button = tree.create_element("button");
        for child in tree.take_children(header)? {
            tree.append_child(button, child)?;
        }
        tree.add_class(button, &config.accordion_js_header)?;
        tree.add_class(button, &format!("{prefix}{}", config.header_style))?;
        set_attributes(
            tree,
            button,
            &[
                (config.attr_role.as_str(), config.role_tab.as_str()),
                ("id", tab_id.as_str()),
                (config.attr_controls.as_str(), panel_id.as_str()),
                (config.attr_selected.as_str(), "false"),
                ("type", "button"),
                (DATA_HASH_ID, tag.as_str()),
            ],
        )?;
        tree.append_child(header, button)?;

        tree.add_class(header, &format!("{prefix}{}", config.title_style))?;
        tree.remove_class(header, &config.accordion_js_header)?;

        tree.add_class(panel, &config.accordion_js_panel)?;
        tree.add_class(panel, &format!("{prefix}{}", config.panel_style))?;
        set_attributes(
            tree,
            panel,
            &[
                (config.attr_role.as_str(), config.role_tabpanel.as_str()),
                (config.attr_labelledby.as_str(), tab_id.as_str()),
                ("id", panel_id.as_str()),
                (DATA_HASH_ID, tag.as_str()),
            ],
        )?;

        let mut opened = tree.get_attribute(header, &config.data_opened) == Some("true");
        if opened {
            tree.remove_attribute(header, &config.data_opened)?;
            if single_select && seen_open {
                tracing::debug!("{}: single-select accordion keeps only its first opened panel", tab_id);
                opened = false;
            }
        }
        seen_open |= opened;

        tree.set_attribute(button, &config.attr_expanded, if opened { "true" } else { "false" })?;
        tree.set_attribute(panel, &config.attr_hidden, if opened { "false" } else { "true" })?;
    }

    tracing::debug!(
        "built accordion {} with {} panel(s){}",
        tag,
        plan.pairs.len(),
        if single_select { ", single-select" } else { "" }
    );
    Ok(())
}

/// Undo the transform of one container and drop its registry entry
pub fn destroy(tree: &mut DomTree, registry: &mut ConfigRegistry, container: NodeId) -> AccordionResult<()> {
    let tag = tree
        .get_attribute(container, DATA_HASH_ID)
        .map(str::to_string)
        .ok_or(AccordionError::NotAnAccordion(container))?;
    let (instance, config) = registry
        .get_by_tag(&tag)
        .map(|(id, config)| (id, Arc::clone(config)))
        .ok_or(AccordionError::NotAnAccordion(container))?;
    if !tree.has_class(container, &config.accordion_js) {
        return Err(AccordionError::NotAnAccordion(container));
    }
    let prefix = class_prefix(tree, container, &config);

    let buttons: Vec<NodeId> = tree
        .elements_by_class_name(container, &config.accordion_js_header)
        .into_iter()
        .filter(|&button| tree.get_attribute(button, DATA_HASH_ID) == Some(tag.as_str()))
        .collect();

    for button in buttons {
        let Some(header) = tree.parent(button) else {
            continue;
        };
        let expanded = tree.get_attribute(button, &config.attr_expanded) == Some("true");
        let panel = tree
            .get_attribute(button, &config.attr_controls)
            .and_then(|panel_id| find_by_id(tree, container, panel_id, &tag));

        let content = tree.take_children(button)?;
        tree.detach(button)?;
        for child in content {
            tree.append_child(header, child)?;
        }
        tree.remove_class(header, &format!("{prefix}{}", config.title_style))?;
        tree.add_class(header, &config.accordion_js_header)?;
        if expanded {
            tree.set_attribute(header, &config.data_opened, "true")?;
        }

        if let Some(panel) = panel {
            tree.remove_class(panel, &format!("{prefix}{}", config.panel_style))?;
            for attr in [
                config.attr_role.as_str(),
                config.attr_labelledby.as_str(),
                config.attr_hidden.as_str(),
                "id",
                DATA_HASH_ID,
            ] {
                tree.remove_attribute(panel, attr)?;
            }
        }
    }

    tree.remove_class(container, &format!("{prefix}{}", config.style))?;
    for attr in [
        config.attr_multiselectable.as_str(),
        config.attr_role.as_str(),
        "id",
        DATA_HASH_ID,
    ] {
        tree.remove_attribute(container, attr)?;
    }
    registry.remove(instance);

    tracing::debug!("destroyed accordion {}", instance);
    Ok(())
}
