//! Class-membership probes.
//!
//! The host's native class-set API is used when available. Otherwise the
//! `class` attribute is treated as a whitespace-delimited string.

use regex::Regex;

use crate::config::attr;
use crate::dom::Dom;

pub fn has_class<D: Dom>(dom: &D, el: &D::Node, class: &str) -> bool {
    match dom.class_list_contains(el, class) {
        Some(found) => found,
        None => attr_has_class(&class_attr(dom, el), class),
    }
}

pub fn add_class<D: Dom>(dom: &mut D, el: &D::Node, class: &str) {
    if dom.class_list_add(el, class) {
        return;
    }
    let current = class_attr(dom, el);
    if !attr_has_class(&current, class) {
        dom.set_attribute(el, attr::CLASS_LIST, &attr_add_class(&current, class));
    }
}

pub fn remove_class<D: Dom>(dom: &mut D, el: &D::Node, class: &str) {
    if dom.class_list_remove(el, class) {
        return;
    }
    let current = class_attr(dom, el);
    if attr_has_class(&current, class) {
        dom.set_attribute(el, attr::CLASS_LIST, &attr_remove_class(&current, class));
    }
}

fn class_attr<D: Dom>(dom: &D, el: &D::Node) -> String {
    dom.attribute(el, attr::CLASS_LIST).unwrap_or_default()
}

fn class_pattern(class: &str) -> Option<Regex> {
    Regex::new(&format!(r"(\s|^){}(\s|$)", regex::escape(class))).ok()
}

/// Whitespace-delimited membership test against a raw `class` string.
pub fn attr_has_class(classes: &str, class: &str) -> bool {
    !class.is_empty() && class_pattern(class).is_some_and(|re| re.is_match(classes))
}

/// Append `class` to a raw `class` string.
pub fn attr_add_class(classes: &str, class: &str) -> String {
    normalize(&format!("{classes} {class}"))
}

/// Remove every occurrence of `class` from a raw `class` string.
pub fn attr_remove_class(classes: &str, class: &str) -> String {
    let Some(re) = class_pattern(class) else {
        return classes.to_string();
    };
    let mut result = classes.to_string();
    // Adjacent duplicates share a separator, so one pass can miss the second.
    while re.is_match(&result) {
        result = re.replace(&result, " ").into_owned();
    }
    normalize(&result)
}

fn normalize(classes: &str) -> String {
    classes.split_whitespace().collect::<Vec<_>>().join(" ")
}
