use std::fs::File;

use hideshow::{Document, Element, Options, Stylesheet, ToggleController};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("disclosure.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    // Options can come from page configuration; an empty object keeps defaults.
    let options = Options::from_json("{}")?;
    let mut doc = page();
    let mut controller = ToggleController::new(options);
    let registered = controller.init(&doc);
    println!("registered {registered} trigger(s)");

    for id in ["faq-btn", "faq-btn", "menu-btn", "menu-btn"] {
        for transition in doc.click(&controller, id)? {
            println!("{id}: {:?} -> {}", transition.strategy, transition.state);
        }
        report(&doc, id);
    }

    Ok(())
}

fn page() -> Document {
    let root = Element::new("body")
        .id("body")
        .child(
            Element::trigger("Show answer", "faq")
                .id("faq-btn")
                .attr("data-text", "Hide answer")
                .attr("data-class", "is-hidden")
                .attr("aria-expanded", "false"),
        )
        .child(Element::div().id("faq").class("is-hidden").text("Forty-two."))
        .child(
            Element::trigger("Menu", "menu")
                .id("menu-btn")
                .attr("aria-expanded", "true"),
        )
        .child(Element::new("nav").id("menu").text("Home | About"));

    Document::new(root).with_stylesheet(Stylesheet::new().rule(".is-hidden", "visibility: hidden"))
}

fn report(doc: &Document, trigger_id: &str) {
    let Some(trigger) = doc.element(trigger_id) else {
        return;
    };
    let target_id = trigger.get_attr("aria-controls").unwrap_or_default();
    let Some(target) = doc.element(target_id) else {
        return;
    };
    println!(
        "  label={:?} aria-expanded={:?} class={:?} style={:?} aria-hidden={:?} tabindex={:?} focused={:?}",
        trigger.text_content(),
        trigger.get_attr("aria-expanded"),
        target.get_attr("class"),
        target.get_attr("style"),
        target.get_attr("aria-hidden"),
        target.get_attr("tabindex"),
        doc.focused(),
    );
}
