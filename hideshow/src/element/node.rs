use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::class::{attr_add_class, attr_has_class};
use crate::document::style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the in-memory document.
///
/// `class` and `style` live in `attributes` as plain strings, the way markup
/// carries them.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub tag: String,
    /// Own text, rendered before any children.
    pub text: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Element>,
}

impl Default for Element {
    fn default() -> Self {
        Self::new("div")
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        Self {
            id: generate_id(&tag),
            tag,
            text: String::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new("span").text(text)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new("button").attr("type", "button").text(label)
    }

    /// A trigger wired to `target` with the default marker.
    pub fn trigger(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self::button(label)
            .attr("data-action", "hide-show")
            .attr("aria-controls", target)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        let current = self.get_attr("class").unwrap_or_default();
        if !attr_has_class(current, class) {
            let updated = attr_add_class(current, class);
            self.attributes.insert("class".to_string(), updated);
        }
        self
    }

    /// Set the inline `style` attribute, e.g. `"display: none"`.
    pub fn style(self, declarations: impl Into<String>) -> Self {
        self.attr("style", declarations)
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(new_children);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| attr_has_class(classes, class))
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class").unwrap_or_default().split_whitespace()
    }

    /// Value of a property in the inline `style` attribute.
    pub fn inline_style(&self, property: &str) -> Option<String> {
        style::get_property(self.get_attr("style")?, property)
    }

    /// Text of this element and all descendants, like `textContent`.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// `display` from the user-agent stylesheet.
    pub fn default_display(&self) -> &'static str {
        match self.tag.as_str() {
            "head" | "script" | "style" | "template" | "title" => "none",
            "a" | "abbr" | "b" | "code" | "em" | "i" | "label" | "small" | "span"
            | "strong" => "inline",
            "button" | "input" | "select" | "textarea" => "inline-block",
            "li" => "list-item",
            "table" => "table",
            _ => "block",
        }
    }
}
