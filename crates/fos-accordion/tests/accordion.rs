//! Integration tests - Markup to built accordion to interaction
//!
//! Drives whole pages through `Accordions`: parse, build, dispatch events,
//! run deferred focus and check the resulting ARIA state.

use fos_accordion::{
    AccordionConfig, AccordionError, Accordions, DATA_HASH_ID, EventOutcome, Key, KeyboardInput, NodeId, Plugin,
};
use fos_html::outer_html;

const THREE_PAIRS: &str = r##"
    <div class="js-accordion" data-test="acc">
        <h2 class="js-accordion__header">One</h2>
        <div data-test="panel1"><p>First <a href="#" data-test="link1">link</a></p></div>
        <h2 class="js-accordion__header">Two</h2>
        <div data-test="panel2"><p>Second <a href="#" data-test="link2">link</a></p></div>
        <h2 class="js-accordion__header">Three</h2>
        <div data-test="panel3"><p>Third <a href="#" data-test="link3">link</a></p></div>
    </div>
"##;

const SINGLE_SELECT: &str = r#"
    <div class="js-accordion" data-accordion-multiselectable="none">
        <h2 class="js-accordion__header" data-accordion-opened="true">One</h2>
        <div>First</div>
        <h2 class="js-accordion__header">Two</h2>
        <div>Second</div>
        <h2 class="js-accordion__header">Three</h2>
        <div>Third</div>
    </div>
"#;

const NESTED: &str = r#"
    <div class="js-accordion" data-test="outer">
        <h2 class="js-accordion__header">Outer one</h2>
        <div>
            <div class="js-accordion" data-test="inner">
                <h3 class="js-accordion__header">Inner one</h3>
                <div>Inner first</div>
                <h3 class="js-accordion__header">Inner two</h3>
                <div>Inner second</div>
            </div>
        </div>
        <h2 class="js-accordion__header">Outer two</h2>
        <div>Outer second</div>
    </div>
"#;

// ============================================================================
// HELPERS
// ============================================================================

fn built(html: &str) -> Accordions {
    let mut page = Accordions::from_markup(html).unwrap();
    page.content_loaded().unwrap();
    page
}

fn attr<'a>(page: &'a Accordions, node: NodeId, name: &str) -> Option<&'a str> {
    page.document().tree().get_attribute(node, name)
}

fn by_test_id(page: &Accordions, value: &str) -> NodeId {
    let tree = page.document().tree();
    tree.descendants(tree.root())
        .find(|&node| tree.get_attribute(node, "data-test") == Some(value))
        .unwrap_or_else(|| panic!("no element with data-test={value}"))
}

/// Header buttons below `scope` belonging to the instance tagged on `scope`
fn headers_in(page: &Accordions, scope: NodeId) -> Vec<NodeId> {
    let tree = page.document().tree();
    let tag = tree.get_attribute(scope, DATA_HASH_ID);
    tree.elements_by_class_name(scope, "js-accordion__header")
        .into_iter()
        .filter(|&h| tree.get_attribute(h, DATA_HASH_ID) == tag)
        .collect()
}

fn headers(page: &Accordions) -> Vec<NodeId> {
    let tree = page.document().tree();
    tree.elements_by_class_name(tree.root(), "js-accordion__header")
}

fn panel_of(page: &Accordions, header: NodeId) -> NodeId {
    let id = attr(page, header, "aria-controls").unwrap();
    page.document().get_element_by_id(id).unwrap()
}

fn expanded(page: &Accordions, headers: &[NodeId]) -> Vec<String> {
    headers
        .iter()
        .map(|&h| attr(page, h, "aria-expanded").unwrap_or("").to_string())
        .collect()
}

fn selected(page: &Accordions, headers: &[NodeId]) -> Vec<NodeId> {
    headers
        .iter()
        .copied()
        .filter(|&h| attr(page, h, "aria-selected") == Some("true"))
        .collect()
}

fn press(page: &mut Accordions, target: NodeId, key: Key) -> EventOutcome {
    let outcome = page.key_down(target, KeyboardInput::new(key));
    page.run_pending_tasks();
    outcome
}

fn press_ctrl(page: &mut Accordions, target: NodeId, key: Key) -> EventOutcome {
    let outcome = page.key_down(target, KeyboardInput::with_ctrl(key));
    page.run_pending_tasks();
    outcome
}

// ============================================================================
// BUILD
// ============================================================================

#[test]
fn test_three_pairs_initial_state() {
    let page = built(THREE_PAIRS);
    let hs = headers(&page);
    assert_eq!(hs.len(), 3);
    assert_eq!(expanded(&page, &hs), ["false", "false", "false"]);

    for &h in &hs {
        assert_eq!(attr(&page, h, "role"), Some("tab"));
        assert_eq!(attr(&page, h, "aria-selected"), Some("false"));
        assert_eq!(attr(&page, panel_of(&page, h), "aria-hidden"), Some("true"));
    }

    let tree = page.document().tree();
    assert!(
        tree.descendants(tree.root()).all(|node| !tree.has_attribute(node, "tabindex")),
        "built markup must not restrict tab order"
    );
}

#[test]
fn test_panels_paired_by_id() {
    let page = built(THREE_PAIRS);
    for (i, &h) in headers(&page).iter().enumerate() {
        let panel = panel_of(&page, h);
        assert_eq!(panel, by_test_id(&page, &format!("panel{}", i + 1)));
        assert_eq!(attr(&page, panel, "aria-labelledby"), attr(&page, h, "id"));
    }
}

#[test]
fn test_generated_ids_unique_across_instances() {
    let page = built(&format!("{THREE_PAIRS}{THREE_PAIRS}"));
    let tree = page.document().tree();
    let mut ids: Vec<&str> = tree
        .descendants(tree.root())
        .filter_map(|node| tree.get_attribute(node, "id"))
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert_eq!(total, 2 * (1 + 3 + 3));
}

#[test]
fn test_attach_is_idempotent() {
    let mut page = built(THREE_PAIRS);
    let container = by_test_id(&page, "acc");
    let before = outer_html(page.document().tree(), container);

    let again = page.attach(&Plugin::default(), None).unwrap();
    assert!(again.is_empty());
    assert_eq!(outer_html(page.document().tree(), container), before);
    assert_eq!(page.registry().len(), 1);
}

#[test]
fn test_malformed_markup_leaves_document_untouched() {
    let html = format!(
        r#"{THREE_PAIRS}
        <div class="js-accordion">
            <h2 class="js-accordion__header" data-test="orphan">Lonely</h2>
        </div>"#
    );
    let mut page = Accordions::from_markup(&html).unwrap();
    let body = page.document().body().unwrap();
    let before = outer_html(page.document().tree(), body);

    let err = page.content_loaded().unwrap_err();
    let orphan = by_test_id(&page, "orphan");
    match err {
        AccordionError::MalformedMarkup { header, reason } => {
            assert_eq!(header, orphan);
            assert!(reason.contains("Lonely"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(outer_html(page.document().tree(), body), before);
    assert!(page.registry().is_empty());
}

#[test]
fn test_injected_content_attaches_separately() {
    let mut page = built(THREE_PAIRS);
    let body = page.document().body().unwrap();
    let inserted = page.inject(body, SINGLE_SELECT).unwrap();
    assert_eq!(inserted.len(), 1);
    assert_eq!(attr(&page, inserted[0], DATA_HASH_ID), None);

    let ids = page.attach(&Plugin::default(), Some(inserted[0])).unwrap();
    assert_eq!(ids.len(), 1);
    assert_eq!(page.registry().len(), 2);
    assert_eq!(attr(&page, inserted[0], DATA_HASH_ID), Some(ids[0].to_string().as_str()));
    assert_eq!(headers_in(&page, inserted[0]).len(), 3);
}

// ============================================================================
// CLICK
// ============================================================================

#[test]
fn test_single_select_click_switches_panels() {
    let mut page = built(SINGLE_SELECT);
    let hs = headers(&page);
    assert_eq!(expanded(&page, &hs), ["true", "false", "false"]);

    assert_eq!(page.click(hs[1]), EventOutcome::HandledPreventDefault);
    assert_eq!(expanded(&page, &hs), ["false", "true", "false"]);
    assert_eq!(attr(&page, panel_of(&page, hs[0]), "aria-hidden"), Some("true"));
    assert_eq!(attr(&page, panel_of(&page, hs[1]), "aria-hidden"), Some("false"));
    assert_eq!(selected(&page, &hs), [hs[1]]);
}

#[test]
fn test_single_select_at_most_one_expanded() {
    let mut page = built(SINGLE_SELECT);
    let hs = headers(&page);
    for &i in &[2, 2, 0, 1, 1, 0, 2, 1] {
        page.click(hs[i]);
        page.run_pending_tasks();
        let open = expanded(&page, &hs).iter().filter(|v| *v == "true").count();
        assert!(open <= 1, "{open} panels open after clicking header {i}");
    }
}

#[test]
fn test_multi_select_click_toggles_pair() {
    let mut page = built(THREE_PAIRS);
    let hs = headers(&page);

    page.click(hs[0]);
    page.click(hs[2]);
    assert_eq!(expanded(&page, &hs), ["true", "false", "true"]);
    assert_eq!(attr(&page, panel_of(&page, hs[2]), "aria-hidden"), Some("false"));

    page.click(hs[0]);
    assert_eq!(expanded(&page, &hs), ["false", "false", "true"]);
    assert_eq!(attr(&page, panel_of(&page, hs[0]), "aria-hidden"), Some("true"));
    assert_eq!(selected(&page, &hs), [hs[0]]);
}

#[test]
fn test_click_defers_focus() {
    let mut page = built(THREE_PAIRS);
    let hs = headers(&page);
    page.click(hs[1]);
    assert_eq!(page.document().active_element(), None);
    assert_eq!(page.run_pending_tasks(), 1);
    assert_eq!(page.document().active_element(), Some(hs[1]));
}

#[test]
fn test_click_on_panel_is_ignored() {
    let mut page = built(THREE_PAIRS);
    let panel = by_test_id(&page, "panel1");
    assert_eq!(page.click(panel), EventOutcome::Ignored);
    assert_eq!(page.click(by_test_id(&page, "link1")), EventOutcome::Ignored);
    assert!(page.pending_tasks().is_empty());
}

// ============================================================================
// KEYBOARD
// ============================================================================

#[test]
fn test_arrow_navigation_wraps() {
    let mut page = built(THREE_PAIRS);
    let hs = headers(&page);

    page.focus(hs[2]);
    assert_eq!(press(&mut page, hs[2], Key::ArrowDown), EventOutcome::HandledPreventDefault);
    assert_eq!(selected(&page, &hs), [hs[0]]);
    assert_eq!(page.document().active_element(), Some(hs[0]));

    assert_eq!(press(&mut page, hs[0], Key::ArrowUp), EventOutcome::HandledPreventDefault);
    assert_eq!(selected(&page, &hs), [hs[2]]);
    assert_eq!(page.document().active_element(), Some(hs[2]));

    press(&mut page, hs[2], Key::ArrowLeft);
    assert_eq!(selected(&page, &hs), [hs[1]]);
    press(&mut page, hs[1], Key::ArrowRight);
    assert_eq!(selected(&page, &hs), [hs[2]]);
}

#[test]
fn test_home_end() {
    let mut page = built(THREE_PAIRS);
    let hs = headers(&page);
    page.focus(hs[1]);

    press(&mut page, hs[1], Key::End);
    assert_eq!(selected(&page, &hs), [hs[2]]);
    press(&mut page, hs[2], Key::Home);
    assert_eq!(selected(&page, &hs), [hs[0]]);
    assert_eq!(page.document().active_element(), Some(hs[0]));
}

#[test]
fn test_legacy_key_codes_navigate() {
    let mut page = built(THREE_PAIRS);
    let hs = headers(&page);
    page.focus(hs[0]);
    press(&mut page, hs[0], Key::from_key_code(40));
    assert_eq!(selected(&page, &hs), [hs[1]]);
    press(&mut page, hs[1], Key::from_key_code(35));
    assert_eq!(selected(&page, &hs), [hs[2]]);
}

#[test]
fn test_navigation_keys_do_not_toggle() {
    let mut page = built(THREE_PAIRS);
    let hs = headers(&page);
    page.focus(hs[0]);
    press(&mut page, hs[0], Key::ArrowDown);
    press(&mut page, hs[1], Key::End);
    assert_eq!(expanded(&page, &hs), ["false", "false", "false"]);
}

#[test]
fn test_other_keys_ignored() {
    let mut page = built(THREE_PAIRS);
    let hs = headers(&page);
    page.focus(hs[0]);
    assert_eq!(press(&mut page, hs[0], Key::parse("Enter")), EventOutcome::Ignored);
    assert_eq!(press(&mut page, hs[0], Key::PageDown), EventOutcome::Ignored);
    assert_eq!(press_ctrl(&mut page, hs[0], Key::ArrowDown), EventOutcome::Ignored);
    assert_eq!(selected(&page, &hs), [hs[0]]);
}

#[test]
fn test_ctrl_page_down_from_last_panel_wraps() {
    let mut page = built(THREE_PAIRS);
    let hs = headers(&page);
    let link = by_test_id(&page, "link3");

    assert_eq!(press_ctrl(&mut page, link, Key::PageDown), EventOutcome::HandledPreventDefault);
    assert_eq!(selected(&page, &hs), [hs[0]]);
    assert_eq!(page.document().active_element(), Some(hs[0]));
}

#[test]
fn test_ctrl_page_up_from_first_panel_wraps() {
    let mut page = built(THREE_PAIRS);
    let hs = headers(&page);
    let link = by_test_id(&page, "link1");

    press_ctrl(&mut page, link, Key::PageUp);
    assert_eq!(selected(&page, &hs), [hs[2]]);
    assert_eq!(page.document().active_element(), Some(hs[2]));
}

#[test]
fn test_ctrl_up_returns_to_owning_header() {
    let mut page = built(THREE_PAIRS);
    let hs = headers(&page);
    let panel = by_test_id(&page, "panel2");

    assert_eq!(press_ctrl(&mut page, panel, Key::ArrowUp), EventOutcome::HandledPreventDefault);
    assert_eq!(selected(&page, &hs), [hs[1]]);
    assert_eq!(page.document().active_element(), Some(hs[1]));
}

#[test]
fn test_panel_keys_without_ctrl_ignored() {
    let mut page = built(THREE_PAIRS);
    let link = by_test_id(&page, "link2");
    assert_eq!(press(&mut page, link, Key::PageDown), EventOutcome::Ignored);
    assert_eq!(press(&mut page, link, Key::ArrowUp), EventOutcome::Ignored);
    assert_eq!(page.document().active_element(), None);
}

#[test]
fn test_exactly_one_selected_after_each_operation() {
    let mut page = built(THREE_PAIRS);
    let hs = headers(&page);
    let link2 = by_test_id(&page, "link2");

    page.focus(hs[1]);
    assert_eq!(selected(&page, &hs).len(), 1);

    let assert_one = |page: &Accordions, step: &str| {
        assert_eq!(selected(page, &hs).len(), 1, "after {step}");
    };

    press(&mut page, hs[1], Key::ArrowDown);
    assert_one(&page, "ArrowDown");
    press(&mut page, hs[2], Key::ArrowDown);
    assert_one(&page, "wrapping ArrowDown");
    page.click(hs[2]);
    page.run_pending_tasks();
    assert_one(&page, "click");
    press(&mut page, hs[2], Key::Home);
    assert_one(&page, "Home");
    press_ctrl(&mut page, link2, Key::PageUp);
    assert_one(&page, "Ctrl+PageUp");
    page.focus(hs[1]);
    assert_one(&page, "focus");
    press(&mut page, hs[1], Key::End);
    assert_one(&page, "End");
}

// ============================================================================
// FOCUS
// ============================================================================

#[test]
fn test_focus_selects_without_expanding() {
    let mut page = built(THREE_PAIRS);
    let hs = headers(&page);
    assert_eq!(page.focus(hs[2]), EventOutcome::Handled);
    assert_eq!(selected(&page, &hs), [hs[2]]);
    assert_eq!(expanded(&page, &hs), ["false", "false", "false"]);
}

// ============================================================================
// NESTED ACCORDIONS
// ============================================================================

#[test]
fn test_nested_accordions_are_independent() {
    let mut page = built(NESTED);
    assert_eq!(page.registry().len(), 2);

    let outer = by_test_id(&page, "outer");
    let inner = by_test_id(&page, "inner");
    assert_ne!(attr(&page, outer, DATA_HASH_ID), attr(&page, inner, DATA_HASH_ID));

    let outer_headers = headers_in(&page, outer);
    let inner_headers = headers_in(&page, inner);
    assert_eq!(outer_headers.len(), 2);
    assert_eq!(inner_headers.len(), 2);

    page.click(inner_headers[1]);
    page.run_pending_tasks();
    assert_eq!(expanded(&page, &inner_headers), ["false", "true"]);
    assert_eq!(expanded(&page, &outer_headers), ["false", "false"]);
    assert!(selected(&page, &outer_headers).is_empty());

    // Wraps within the inner set only.
    press(&mut page, inner_headers[1], Key::ArrowDown);
    assert_eq!(selected(&page, &inner_headers), [inner_headers[0]]);
    assert!(selected(&page, &outer_headers).is_empty());

    press(&mut page, outer_headers[0], Key::End);
    assert_eq!(selected(&page, &outer_headers), [outer_headers[1]]);
    assert_eq!(selected(&page, &inner_headers), [inner_headers[0]]);
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_custom_configuration() {
    let html = r#"
        <section class="faq">
            <h3 class="faq__question">Why?</h3>
            <div>Because.</div>
            <h3 class="faq__question">How?</h3>
            <div>Like this.</div>
        </section>
    "#;
    let plugin = Plugin::from_json(
        r#"{
            "ACCORDION_JS": "faq",
            "ACCORDION_JS_HEADER": "faq__question",
            "ACCORDION_PREFIX_IDS": "faq-",
            "ACCORDION_STYLE": "faq-list"
        }"#,
    )
    .unwrap();

    let mut page = built(html);
    assert!(page.registry().is_empty());

    let ids = page.attach(&plugin, None).unwrap();
    assert_eq!(ids.len(), 1);
    let tree = page.document().tree();
    let buttons = tree.elements_by_class_name(tree.root(), "faq__question");
    let button = buttons.into_iter().find(|&b| tree.tag_name(b) == Some("button")).unwrap();
    let expected = format!("faq-{}_tab1", ids[0]);
    assert_eq!(attr(&page, button, "id"), Some(expected.as_str()));

    let container = tree.elements_by_class_name(tree.root(), "faq")[0];
    assert!(tree.has_class(container, "faq-list"));

    assert_eq!(page.click(button), EventOutcome::HandledPreventDefault);
    assert_eq!(attr(&page, button, "aria-expanded"), Some("true"));
}

#[test]
fn test_plugin_builder_api() {
    let config = AccordionConfig {
        attr_selected: "data-selected".to_string(),
        ..AccordionConfig::default()
    };
    let plugin = Accordions::plugin(config);
    let mut page = Accordions::from_markup(THREE_PAIRS).unwrap();
    page.attach(&plugin, None).unwrap();

    let hs = headers(&page);
    assert_eq!(attr(&page, hs[0], "data-selected"), Some("false"));
    page.focus(hs[0]);
    assert_eq!(attr(&page, hs[0], "data-selected"), Some("true"));
    assert!(!page.document().tree().has_attribute(hs[0], "aria-selected"));
}

// ============================================================================
// DESTROY AND STALE STATE
// ============================================================================

#[test]
fn test_destroy_and_rebuild() {
    let mut page = built(THREE_PAIRS);
    let container = by_test_id(&page, "acc");
    let hs = headers(&page);
    page.click(hs[1]);
    page.run_pending_tasks();

    page.destroy(container).unwrap();
    assert!(page.registry().is_empty());
    assert!(headers_in(&page, container).iter().all(|&h| page.document().tree().tag_name(h) != Some("button")));
    assert!(!page.document().tree().has_attribute(container, "role"));

    let second_title = page.document().tree().elements_by_class_name(container, "js-accordion__header")[1];
    assert_eq!(attr(&page, second_title, "data-accordion-opened"), Some("true"));

    let ids = page.attach(&Plugin::default(), Some(container)).unwrap();
    assert_eq!(ids.len(), 1);
    let rebuilt = headers_in(&page, container);
    assert_eq!(expanded(&page, &rebuilt), ["false", "true", "false"]);
}

#[test]
fn test_destroy_rejects_plain_element() {
    let mut page = built(THREE_PAIRS);
    let panel = by_test_id(&page, "panel1");
    let link = by_test_id(&page, "link1");
    assert!(matches!(page.destroy(link), Err(AccordionError::NotAnAccordion(node)) if node == link));
    // Tagged, but a panel rather than a container.
    assert!(matches!(page.destroy(panel), Err(AccordionError::NotAnAccordion(_))));
}

#[test]
fn test_events_after_destroy_ignored() {
    let mut page = built(THREE_PAIRS);
    let container = by_test_id(&page, "acc");
    page.destroy(container).unwrap();

    let title = page.document().tree().elements_by_class_name(container, "js-accordion__header")[0];
    assert_eq!(page.click(title), EventOutcome::Ignored);
    assert_eq!(press(&mut page, title, Key::Home), EventOutcome::Ignored);
}

#[test]
fn test_unknown_instance_tag_ignored() {
    let mut page = built(THREE_PAIRS);
    let hs = headers(&page);
    page.document_mut().tree_mut().set_attribute(hs[0], DATA_HASH_ID, "z999").unwrap();

    assert_eq!(page.click(hs[0]), EventOutcome::Ignored);
    assert_eq!(page.focus(hs[0]), EventOutcome::Ignored);
    assert!(page.pending_tasks().is_empty());
    assert_eq!(attr(&page, hs[0], "aria-expanded"), Some("false"));
}

#[test]
fn test_events_outside_accordions_ignored() {
    let mut page = built(r#"<p data-test="para">Hello</p>"#);
    let para = by_test_id(&page, "para");
    assert_eq!(page.click(para), EventOutcome::Ignored);
    assert_eq!(page.focus(para), EventOutcome::Ignored);
    assert_eq!(press(&mut page, para, Key::Home), EventOutcome::Ignored);
    assert_eq!(page.document().active_element(), Some(para));
}

#[test]
fn test_pending_focus_after_destroy_is_dropped() {
    let mut page = built(THREE_PAIRS);
    let container = by_test_id(&page, "acc");
    let hs = headers(&page);

    page.click(hs[1]);
    assert_eq!(page.pending_tasks().len(), 1);
    page.destroy(container).unwrap();

    assert_eq!(page.run_pending_tasks(), 1);
    assert_eq!(page.document().active_element(), None);
    assert!(!page.document().is_connected(hs[1]));
}

#[test]
fn test_destroy_drops_focus_from_removed_button() {
    let mut page = built(THREE_PAIRS);
    let container = by_test_id(&page, "acc");
    let hs = headers(&page);

    page.focus(hs[0]);
    assert_eq!(page.document().active_element(), Some(hs[0]));
    page.destroy(container).unwrap();
    assert_eq!(page.document().active_element(), None);
}

// ============================================================================
// COOL SELECTORS
// ============================================================================

const COOL_SELECTORS: &str = r##"
    <div class="js-accordion" data-accordion-cool-selectors data-accordion-multiselectable="none" data-test="cool">
        <div class="item">
            <h2 class="js-accordion__header">Alpha</h2>
            <div>
                <div class="js-accordion" data-test="cool-inner">
                    <h3 class="js-accordion__header">Inner one</h3>
                    <div><a href="#" data-test="inner-link">inner</a></div>
                    <h3 class="js-accordion__header">Inner two</h3>
                    <div>Inner second</div>
                </div>
            </div>
        </div>
        <div class="item">
            <h2 class="js-accordion__header">Beta</h2>
            <div>Beta body</div>
        </div>
        <div class="item">
            <h2 class="js-accordion__header">Gamma</h2>
            <div>Gamma body</div>
        </div>
    </div>
"##;

#[test]
fn test_cool_selectors_navigation_wraps_over_wrapped_headers() {
    let mut page = built(COOL_SELECTORS);
    let outer = headers_in(&page, by_test_id(&page, "cool"));
    assert_eq!(outer.len(), 3);

    page.focus(outer[2]);
    assert_eq!(press(&mut page, outer[2], Key::ArrowDown), EventOutcome::HandledPreventDefault);
    assert_eq!(selected(&page, &outer), [outer[0]]);
    assert_eq!(page.document().active_element(), Some(outer[0]));

    press(&mut page, outer[0], Key::ArrowUp);
    assert_eq!(selected(&page, &outer), [outer[2]]);
    press(&mut page, outer[2], Key::Home);
    assert_eq!(selected(&page, &outer), [outer[0]]);
}

#[test]
fn test_cool_selectors_single_select_collapses_wrapped_pairs() {
    let mut page = built(COOL_SELECTORS);
    let outer = headers_in(&page, by_test_id(&page, "cool"));

    page.click(outer[0]);
    assert_eq!(expanded(&page, &outer), ["true", "false", "false"]);
    page.click(outer[2]);
    assert_eq!(expanded(&page, &outer), ["false", "false", "true"]);
    assert_eq!(attr(&page, panel_of(&page, outer[0]), "aria-hidden"), Some("true"));
    assert_eq!(selected(&page, &outer), [outer[2]]);
}

#[test]
fn test_cool_selectors_exclude_nested_accordion_headers() {
    let mut page = built(COOL_SELECTORS);
    let outer = headers_in(&page, by_test_id(&page, "cool"));
    let inner = headers_in(&page, by_test_id(&page, "cool-inner"));
    assert_eq!(inner.len(), 2);
    assert!(inner.iter().all(|h| !outer.contains(h)));

    page.click(outer[1]);
    page.run_pending_tasks();

    let link = by_test_id(&page, "inner-link");
    assert_eq!(press_ctrl(&mut page, link, Key::PageDown), EventOutcome::HandledPreventDefault);
    assert_eq!(selected(&page, &inner), [inner[1]]);
    assert_eq!(selected(&page, &outer), [outer[1]]);

    page.click(inner[0]);
    assert_eq!(expanded(&page, &inner), ["true", "false"]);
    assert_eq!(expanded(&page, &outer), ["false", "true", "false"]);
}
