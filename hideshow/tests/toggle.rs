use hideshow::{
    select_strategy, Document, Element, ExpandedState, Strategy, Stylesheet, ToggleController,
    ToggleError,
};

fn page(trigger: Element, target: Element) -> Document {
    Document::new(Element::new("body").id("body").child(trigger).child(target))
}

fn controller(doc: &Document) -> ToggleController<String> {
    let mut controller = ToggleController::default();
    controller.init(doc);
    controller
}

fn attr<'a>(doc: &'a Document, id: &str, name: &str) -> Option<&'a str> {
    doc.element(id).and_then(|el| el.get_attr(name))
}

fn label(doc: &Document, id: &str) -> String {
    doc.element(id).map(Element::text_content).unwrap_or_default()
}

// ============================================================================
// Strategy Selection
// ============================================================================

#[test]
fn test_strategy_table() {
    assert_eq!(select_strategy(Some("is-hidden"), "block"), Strategy::Class);
    assert_eq!(select_strategy(Some("is-hidden"), "flex"), Strategy::Class);
    assert_eq!(
        select_strategy(Some("is-hidden"), "none"),
        Strategy::ClassForcedHidden
    );
    assert_eq!(select_strategy(None, "block"), Strategy::InlineStyle);
    assert_eq!(select_strategy(None, "none"), Strategy::InlineStyle);
}

#[test]
fn test_strategy_display_comparison_is_lenient() {
    assert_eq!(
        select_strategy(Some("x"), " NONE "),
        Strategy::ClassForcedHidden
    );
}

#[test]
fn test_strategy_rederived_every_click() {
    // The class itself sets display: none, so the second click sees "none".
    let mut doc = page(
        Element::trigger("Toggle", "panel")
            .id("btn")
            .attr("data-class", "is-hidden"),
        Element::div().id("panel"),
    )
    .with_stylesheet(Stylesheet::new().rule(".is-hidden", "display: none"));
    let controller = controller(&doc);

    let first = doc.click(&controller, "btn").unwrap();
    let second = doc.click(&controller, "btn").unwrap();

    assert_eq!(first[0].strategy, Strategy::Class);
    assert_eq!(second[0].strategy, Strategy::ClassForcedHidden);
}

// ============================================================================
// Class Strategy
// ============================================================================

#[test]
fn test_class_scenario() {
    let mut doc = page(
        Element::trigger("Toggle", "panel")
            .id("btn")
            .attr("data-class", "is-hidden")
            .attr("aria-expanded", "true"),
        Element::div().id("panel").style("display: block"),
    )
    .with_stylesheet(Stylesheet::new().rule(".is-hidden", "visibility: hidden"));
    let controller = controller(&doc);

    let hide = doc.click(&controller, "btn").unwrap();
    assert_eq!(hide.len(), 1);
    assert_eq!(hide[0].strategy, Strategy::Class);
    assert_eq!(hide[0].state, ExpandedState::Collapsed);
    assert!(doc.element("panel").unwrap().has_class("is-hidden"));
    assert_eq!(attr(&doc, "btn", "aria-expanded"), Some("false"));
    assert_eq!(attr(&doc, "panel", "tabindex"), None);

    let show = doc.click(&controller, "btn").unwrap();
    assert_eq!(show[0].state, ExpandedState::Expanded);
    assert!(!doc.element("panel").unwrap().has_class("is-hidden"));
    assert_eq!(attr(&doc, "btn", "aria-expanded"), Some("true"));
    assert_eq!(attr(&doc, "panel", "tabindex"), Some("-1"));
    assert_eq!(doc.focused(), Some("panel"));
}

#[test]
fn test_class_strategy_leaves_aria_hidden_alone() {
    let mut doc = page(
        Element::trigger("Toggle", "panel")
            .id("btn")
            .attr("data-class", "collapsed"),
        Element::div().id("panel"),
    );
    let controller = controller(&doc);

    doc.click(&controller, "btn").unwrap();
    assert_eq!(attr(&doc, "panel", "aria-hidden"), None);
    assert_eq!(attr(&doc, "panel", "style"), None);
}

#[test]
fn test_class_with_display_none_rule_shows_again() {
    let mut doc = page(
        Element::trigger("Toggle", "panel")
            .id("btn")
            .attr("data-class", "is-hidden"),
        Element::div().id("panel"),
    )
    .with_stylesheet(Stylesheet::new().rule(".is-hidden", "display: none"));
    let controller = controller(&doc);

    doc.click(&controller, "btn").unwrap();
    assert_eq!(attr(&doc, "panel", "aria-hidden"), None);

    let show = doc.click(&controller, "btn").unwrap();
    assert_eq!(show[0].state, ExpandedState::Expanded);
    assert!(!doc.element("panel").unwrap().has_class("is-hidden"));
    assert_eq!(attr(&doc, "panel", "aria-hidden"), None);
    assert_eq!(attr(&doc, "panel", "tabindex"), Some("-1"));
    assert_eq!(doc.focused(), Some("panel"));
}

#[test]
fn test_class_strategy_without_native_class_list() {
    let mut doc = page(
        Element::trigger("Toggle", "panel")
            .id("btn")
            .attr("data-class", "is-hidden"),
        Element::div().id("panel").class("panel"),
    )
    .without_class_list();
    let controller = controller(&doc);

    doc.click(&controller, "btn").unwrap();
    assert_eq!(attr(&doc, "panel", "class"), Some("panel is-hidden"));

    doc.click(&controller, "btn").unwrap();
    assert_eq!(attr(&doc, "panel", "class"), Some("panel"));
}

// ============================================================================
// Class Strategy With Forced Hidden
// ============================================================================

#[test]
fn test_forced_hidden_mirrors_flip_into_aria_hidden() {
    // Hidden by an unrelated rule; the toggle class has no styling of its own.
    let mut doc = page(
        Element::trigger("Toggle", "panel")
            .id("btn")
            .attr("data-class", "is-open"),
        Element::div().id("panel"),
    )
    .with_stylesheet(Stylesheet::new().rule("#panel", "display: none"));
    let controller = controller(&doc);

    let first = doc.click(&controller, "btn").unwrap();
    assert_eq!(first[0].strategy, Strategy::ClassForcedHidden);
    assert_eq!(first[0].state, ExpandedState::Collapsed);
    assert!(doc.element("panel").unwrap().has_class("is-open"));
    assert_eq!(attr(&doc, "panel", "aria-hidden"), Some("true"));
    assert_eq!(attr(&doc, "btn", "aria-expanded"), Some("false"));

    let second = doc.click(&controller, "btn").unwrap();
    assert_eq!(second[0].strategy, Strategy::ClassForcedHidden);
    assert_eq!(second[0].state, ExpandedState::Expanded);
    assert!(!doc.element("panel").unwrap().has_class("is-open"));
    assert_eq!(attr(&doc, "panel", "aria-hidden"), None);
    assert_eq!(attr(&doc, "btn", "aria-expanded"), Some("true"));
    assert_eq!(attr(&doc, "panel", "tabindex"), Some("-1"));
}

#[test]
fn test_forced_hidden_relies_on_page_css_to_reveal() {
    let mut doc = page(
        Element::trigger("Toggle", "panel")
            .id("btn")
            .attr("data-class", "is-open"),
        Element::div().id("panel").class("is-open"),
    )
    .with_stylesheet(Stylesheet::new().rule("#panel", "display: none"));
    let controller = controller(&doc);

    doc.click(&controller, "btn").unwrap();

    // ARIA says expanded, but nothing in the page reveals the panel.
    assert_eq!(attr(&doc, "btn", "aria-expanded"), Some("true"));
    assert_eq!(attr(&doc, "panel", "style"), None);
    assert_eq!(doc.focused(), None);
}

// ============================================================================
// Inline Style Strategy
// ============================================================================

#[test]
fn test_inline_scenario() {
    let mut doc = page(
        Element::trigger("Toggle", "panel").id("btn"),
        Element::div().id("panel"),
    );
    let controller = controller(&doc);

    let hide = doc.click(&controller, "btn").unwrap();
    assert_eq!(hide[0].strategy, Strategy::InlineStyle);
    assert_eq!(hide[0].state, ExpandedState::Collapsed);
    let panel = doc.element("panel").unwrap();
    assert_eq!(panel.inline_style("display").as_deref(), Some("none"));
    assert_eq!(panel.get_attr("aria-hidden"), Some("true"));
    assert_eq!(panel.get_attr("tabindex"), None);
    assert_eq!(attr(&doc, "btn", "aria-expanded"), Some("false"));

    let show = doc.click(&controller, "btn").unwrap();
    assert_eq!(show[0].state, ExpandedState::Expanded);
    let panel = doc.element("panel").unwrap();
    assert_eq!(panel.get_attr("style"), None);
    assert_eq!(panel.get_attr("aria-hidden"), None);
    assert_eq!(panel.get_attr("tabindex"), Some("-1"));
    assert_eq!(attr(&doc, "btn", "aria-expanded"), Some("true"));
    assert_eq!(doc.focused(), Some("panel"));
}

#[test]
fn test_inline_hide_keeps_other_declarations() {
    let mut doc = page(
        Element::trigger("Toggle", "panel").id("btn"),
        Element::div().id("panel").style("color: red"),
    );
    let controller = controller(&doc);

    doc.click(&controller, "btn").unwrap();
    let panel = doc.element("panel").unwrap();
    assert_eq!(panel.inline_style("color").as_deref(), Some("red"));
    assert_eq!(panel.inline_style("display").as_deref(), Some("none"));
}

#[test]
fn test_inline_treats_hidden_ancestor_as_hidden() {
    let root = Element::new("body")
        .id("body")
        .child(Element::trigger("Toggle", "panel").id("btn"))
        .child(
            Element::div()
                .id("wrapper")
                .style("display: none")
                .child(Element::div().id("panel")),
        );
    let mut doc = Document::new(root);
    let controller = controller(&doc);

    let result = doc.click(&controller, "btn").unwrap();
    assert_eq!(result[0].state, ExpandedState::Expanded);
    assert_eq!(doc.focused(), None);
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_round_trip_inline_from_hidden() {
    let mut doc = page(
        Element::trigger("Toggle", "panel").id("btn"),
        Element::div()
            .id("panel")
            .style("display: none")
            .attr("aria-hidden", "true"),
    );
    let controller = controller(&doc);

    doc.click(&controller, "btn").unwrap();
    doc.click(&controller, "btn").unwrap();

    let panel = doc.element("panel").unwrap();
    assert_eq!(panel.inline_style("display").as_deref(), Some("none"));
    assert_eq!(panel.get_attr("aria-hidden"), Some("true"));
    assert_eq!(panel.get_attr("tabindex"), None);
}

#[test]
fn test_round_trip_all_strategies() {
    let cases = [
        (Some("is-hidden"), Stylesheet::new().rule(".is-hidden", "opacity: 0")),
        (Some("is-hidden"), Stylesheet::new().rule(".is-hidden", "display: none")),
        (Some("is-open"), Stylesheet::new().rule("#panel", "display: none")),
        (None, Stylesheet::new()),
    ];

    for (class, sheet) in cases {
        let mut trigger = Element::trigger("Toggle", "panel").id("btn");
        if let Some(class) = class {
            trigger = trigger.attr("data-class", class);
        }
        let mut doc = page(trigger, Element::div().id("panel")).with_stylesheet(sheet);
        let controller = controller(&doc);
        let before = doc.element("panel").unwrap().clone();
        let was_hidden_class = class.is_some_and(|c| before.has_class(c));

        doc.click(&controller, "btn").unwrap();
        doc.click(&controller, "btn").unwrap();

        let after = doc.element("panel").unwrap();
        assert_eq!(
            class.is_some_and(|c| after.has_class(c)),
            was_hidden_class,
            "class for {class:?}"
        );
        assert_eq!(after.get_attr("aria-hidden"), None, "aria-hidden for {class:?}");
        assert_eq!(after.inline_style("display"), None, "display for {class:?}");
        // Starting untabbable, the second click enters Shown and leaves tabindex="-1".
        assert_eq!(before.get_attr("tabindex"), None);
        assert_eq!(after.get_attr("tabindex"), Some("-1"), "tabindex for {class:?}");
    }
}

// ============================================================================
// ARIA Consistency
// ============================================================================

#[test]
fn test_aria_consistency_after_every_click() {
    let setups = [
        (Some("is-hidden"), Stylesheet::new().rule(".is-hidden", "display: none")),
        (Some("is-open"), Stylesheet::new().rule("#panel", "display: none")),
        (None, Stylesheet::new()),
    ];

    for (class, sheet) in setups {
        let mut trigger = Element::trigger("Toggle", "panel").id("btn");
        if let Some(class) = class {
            trigger = trigger.attr("data-class", class);
        }
        let mut doc = page(trigger, Element::div().id("panel")).with_stylesheet(sheet);
        let controller = controller(&doc);

        for _ in 0..4 {
            let transition = doc.click(&controller, "btn").unwrap()[0];
            match transition.state {
                ExpandedState::Collapsed => {
                    assert_eq!(attr(&doc, "btn", "aria-expanded"), Some("false"));
                    assert_eq!(attr(&doc, "panel", "tabindex"), None);
                }
                ExpandedState::Expanded => {
                    assert_eq!(attr(&doc, "btn", "aria-expanded"), Some("true"));
                    assert_eq!(attr(&doc, "panel", "tabindex"), Some("-1"));
                }
            }
        }
    }
}

// ============================================================================
// Label Rotation
// ============================================================================

#[test]
fn test_label_rotation_is_a_swap() {
    let mut doc = page(
        Element::trigger("Show", "panel")
            .id("btn")
            .attr("data-text", "Hide"),
        Element::div().id("panel"),
    );
    let controller = controller(&doc);

    let first = doc.click(&controller, "btn").unwrap();
    assert!(first[0].label_rotated);
    assert_eq!(label(&doc, "btn"), "Hide");
    assert_eq!(attr(&doc, "btn", "data-text"), Some("Show"));

    doc.click(&controller, "btn").unwrap();
    assert_eq!(label(&doc, "btn"), "Show");
    assert_eq!(attr(&doc, "btn", "data-text"), Some("Hide"));
}

#[test]
fn test_label_rotation_ignores_direction() {
    // Markup starts out of step: the label already says "Hide" for a visible panel.
    let mut doc = page(
        Element::trigger("Hide", "panel")
            .id("btn")
            .attr("data-text", "Show")
            .attr("data-class", "is-hidden"),
        Element::div().id("panel").class("is-hidden"),
    );
    let controller = controller(&doc);

    let result = doc.click(&controller, "btn").unwrap();
    assert_eq!(result[0].state, ExpandedState::Expanded);
    assert_eq!(label(&doc, "btn"), "Show");
}

#[test]
fn test_no_replacement_text_keeps_label() {
    let mut doc = page(
        Element::trigger("Details", "panel").id("btn"),
        Element::div().id("panel"),
    );
    let controller = controller(&doc);

    let result = doc.click(&controller, "btn").unwrap();
    assert!(!result[0].label_rotated);
    assert_eq!(label(&doc, "btn"), "Details");
    assert_eq!(attr(&doc, "btn", "data-text"), None);
}

#[test]
fn test_empty_replacement_text_still_rotates() {
    let mut doc = page(
        Element::trigger("Show", "panel")
            .id("btn")
            .attr("data-text", ""),
        Element::div().id("panel"),
    );
    let controller = controller(&doc);

    doc.click(&controller, "btn").unwrap();
    assert_eq!(label(&doc, "btn"), "");
    assert_eq!(attr(&doc, "btn", "data-text"), Some("Show"));

    doc.click(&controller, "btn").unwrap();
    assert_eq!(label(&doc, "btn"), "Show");
    assert_eq!(attr(&doc, "btn", "data-text"), Some(""));
}

#[test]
fn test_rotation_replaces_nested_label_markup() {
    let mut doc = page(
        Element::trigger("", "panel")
            .id("btn")
            .attr("data-text", "Hide")
            .child(Element::span(" Show ").id("icon")),
        Element::div().id("panel"),
    );
    let controller = controller(&doc);

    doc.click(&controller, "btn").unwrap();
    assert_eq!(label(&doc, "btn"), "Hide");
    assert_eq!(attr(&doc, "btn", "data-text"), Some("Show"));
    assert!(doc.element("icon").is_none());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_target_fails_explicitly() {
    let mut doc = page(
        Element::trigger("Show", "nope")
            .id("btn")
            .attr("data-text", "Hide")
            .attr("aria-expanded", "false"),
        Element::div().id("panel"),
    );
    let controller = controller(&doc);

    let err = doc.click(&controller, "btn").unwrap_err();
    assert!(matches!(err, ToggleError::TargetNotFound { ref id } if id == "nope"));
    assert_eq!(err.missing_target(), Some("nope"));

    // Nothing was written before the failure.
    assert_eq!(label(&doc, "btn"), "Show");
    assert_eq!(attr(&doc, "btn", "data-text"), Some("Hide"));
    assert_eq!(attr(&doc, "btn", "aria-expanded"), Some("false"));
}

#[test]
fn test_missing_controls_attribute() {
    let mut doc = page(
        Element::button("Show").id("btn").attr("data-action", "hide-show"),
        Element::div().id("panel"),
    );
    let controller = controller(&doc);

    let err = doc.click(&controller, "btn").unwrap_err();
    assert!(matches!(err, ToggleError::MissingControls { .. }));
    assert!(err.to_string().contains("button#btn"));
}
