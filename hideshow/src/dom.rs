//! The host DOM seam.

use std::fmt::Debug;

use crate::error::ToggleError;

/// Operations the toggle controller needs from a host document.
///
/// Node handles are cheap clones that stay valid for the life of the page.
/// Writes against a stale handle are ignored by implementations.
pub trait Dom {
    type Node: Clone + PartialEq + Debug;

    /// Resolve an element by its `id`.
    fn get_element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All elements whose attribute `name` equals `value`, in document order.
    fn query_by_attribute(&self, name: &str, value: &str) -> Vec<Self::Node>;

    /// Parent element, if any.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Short human-readable description used in errors and logs.
    fn describe(&self, node: &Self::Node) -> String;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    /// Rendered text of the element and its descendants.
    fn text(&self, node: &Self::Node) -> String;

    /// Replace the element's contents with `label`.
    fn set_label(&mut self, node: &Self::Node, label: &str);

    /// Native class-set membership. `None` when the host has no class-set API,
    /// in which case callers fall back to the `class` attribute string.
    fn class_list_contains(&self, _node: &Self::Node, _class: &str) -> Option<bool> {
        None
    }

    /// Add via the native class-set API. Returns `false` if unsupported.
    fn class_list_add(&mut self, _node: &Self::Node, _class: &str) -> bool {
        false
    }

    /// Remove via the native class-set API. Returns `false` if unsupported.
    fn class_list_remove(&mut self, _node: &Self::Node, _class: &str) -> bool {
        false
    }

    /// Resolved `display` of the element itself, ignoring ancestors.
    fn computed_display(&self, node: &Self::Node) -> Result<String, ToggleError>;

    /// True if the element contributes no layout box.
    fn is_hidden(&self, node: &Self::Node) -> bool;

    /// Set the inline `display` property to `none`.
    fn set_display_none(&mut self, node: &Self::Node);

    /// Move focus to the element. Returns `true` if focus moved.
    fn focus(&mut self, node: &Self::Node) -> bool;
}
