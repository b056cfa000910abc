//! Example: Build an accordion and drive it with a few events

use fos_accordion::{Accordions, Key, KeyboardInput};
use fos_html::outer_html;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
    <body>
        <div class="js-accordion" data-accordion-prefix-classes="faq" data-accordion-multiselectable="none">
            <h2 class="js-accordion__header" data-accordion-opened="true">What is this?</h2>
            <div><p>An accessible accordion.</p></div>
            <h2 class="js-accordion__header">How do I use it?</h2>
            <div><p>Add the marker classes and call attach.</p></div>
        </div>
    </body>
</html>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut page = Accordions::from_markup(PAGE)?;
    let instances = page.content_loaded()?;
    println!("Built {} accordion(s)", instances.len());

    let tree = page.document().tree();
    let headers = tree.elements_by_class_name(tree.root(), "js-accordion__header");
    let second = headers[1];

    page.click(second);
    page.run_pending_tasks();
    page.key_down(second, KeyboardInput::new(Key::Home));
    page.run_pending_tasks();

    let tree = page.document().tree();
    if let Some(container) = tree.elements_by_class_name(tree.root(), "js-accordion").first() {
        println!("{}", outer_html(tree, *container));
    }
    Ok(())
}
