//! In-memory document implementing [`Dom`].

pub mod style;

pub use style::Stylesheet;

use log::trace;

use crate::class::attr_add_class;
use crate::config::attr;
use crate::controller::ToggleController;
use crate::dom::Dom;
use crate::element::{collect_by_attribute, find_element, find_element_mut, find_path, Element};
use crate::error::ToggleError;
use crate::event::ClickEvent;
use crate::toggle::Transition;

/// An element tree plus the author stylesheet and focus.
///
/// Node handles are element IDs.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    stylesheet: Stylesheet,
    focused: Option<String>,
    class_list: bool,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            stylesheet: Stylesheet::default(),
            focused: None,
            class_list: true,
        }
    }

    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Behave like an engine without a native class-set API.
    pub fn without_class_list(mut self) -> Self {
        self.class_list = false;
        self
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    /// ID of the focused element.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Clear focus. Returns true if something was focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Click the element with `id`, delivering the event through `controller`.
    pub fn click(
        &mut self,
        controller: &ToggleController<String>,
        id: &str,
    ) -> Result<Vec<Transition>, ToggleError> {
        let mut event = ClickEvent::new(id.to_string());
        controller.dispatch(self, &mut event)
    }

    fn with_element(&mut self, id: &str, f: impl FnOnce(&mut Element)) {
        match find_element_mut(&mut self.root, id) {
            Some(element) => f(element),
            None => trace!("[document] write to detached element {id} ignored"),
        }
    }

    fn display_of(&self, element: &Element) -> String {
        if let Some(display) = element.inline_style("display") {
            return display;
        }
        if let Some(display) = self.stylesheet.resolve(element, "display") {
            return display;
        }
        if element.get_attr("hidden").is_some() {
            return "none".to_string();
        }
        element.default_display().to_string()
    }

    fn visibility_of(&self, path: &[&Element]) -> String {
        path.iter()
            .rev()
            .find_map(|element| {
                element
                    .inline_style("visibility")
                    .or_else(|| self.stylesheet.resolve(element, "visibility"))
            })
            .unwrap_or_else(|| "visible".to_string())
    }
}

impl Dom for Document {
    type Node = String;

    fn get_element_by_id(&self, id: &str) -> Option<String> {
        self.element(id).map(|element| element.id.clone())
    }

    fn query_by_attribute(&self, name: &str, value: &str) -> Vec<String> {
        collect_by_attribute(&self.root, name, value)
    }

    fn parent(&self, node: &String) -> Option<String> {
        let path = find_path(&self.root, node)?;
        let parent = path.len().checked_sub(2)?;
        Some(path[parent].id.clone())
    }

    fn describe(&self, node: &String) -> String {
        match self.element(node) {
            Some(element) => format!("{}#{}", element.tag, element.id),
            None => format!("#{node}"),
        }
    }

    fn attribute(&self, node: &String, name: &str) -> Option<String> {
        let element = self.element(node)?;
        if name == "id" {
            return Some(element.id.clone());
        }
        element.get_attr(name).map(str::to_string)
    }

    fn set_attribute(&mut self, node: &String, name: &str, value: &str) {
        self.with_element(node, |element| {
            element.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn remove_attribute(&mut self, node: &String, name: &str) {
        self.with_element(node, |element| {
            element.attributes.remove(name);
        });
    }

    fn text(&self, node: &String) -> String {
        self.element(node)
            .map(Element::text_content)
            .unwrap_or_default()
    }

    fn set_label(&mut self, node: &String, label: &str) {
        self.with_element(node, |element| {
            element.text = label.to_string();
            element.children.clear();
        });
    }

    fn class_list_contains(&self, node: &String, class: &str) -> Option<bool> {
        if !self.class_list {
            return None;
        }
        Some(
            self.element(node)
                .is_some_and(|element| element.classes().any(|c| c == class)),
        )
    }

    fn class_list_add(&mut self, node: &String, class: &str) -> bool {
        if !self.class_list {
            return false;
        }
        self.with_element(node, |element| {
            if !element.classes().any(|c| c == class) {
                let current = element.get_attr(attr::CLASS_LIST).unwrap_or_default();
                let updated = attr_add_class(current, class);
                element.attributes.insert(attr::CLASS_LIST.to_string(), updated);
            }
        });
        true
    }

    fn class_list_remove(&mut self, node: &String, class: &str) -> bool {
        if !self.class_list {
            return false;
        }
        self.with_element(node, |element| {
            let remaining: Vec<String> = element
                .classes()
                .filter(|c| *c != class)
                .map(str::to_string)
                .collect();
            element
                .attributes
                .insert(attr::CLASS_LIST.to_string(), remaining.join(" "));
        });
        true
    }

    fn computed_display(&self, node: &String) -> Result<String, ToggleError> {
        let element = self.element(node).ok_or_else(|| ToggleError::ComputedStyle {
            id: node.clone(),
            reason: "element is not in the document".to_string(),
        })?;
        Ok(self.display_of(element))
    }

    fn is_hidden(&self, node: &String) -> bool {
        let Some(path) = find_path(&self.root, node) else {
            return true;
        };
        if path.iter().any(|element| self.display_of(element) == "none") {
            return true;
        }
        matches!(self.visibility_of(&path).as_str(), "hidden" | "collapse")
    }

    fn set_display_none(&mut self, node: &String) {
        self.with_element(node, |element| {
            let updated = style::set_property(element.get_attr(attr::STYLE), "display", "none");
            element.attributes.insert(attr::STYLE.to_string(), updated);
        });
    }

    fn focus(&mut self, node: &String) -> bool {
        if self.is_hidden(node) {
            return false;
        }
        self.focused = Some(node.clone());
        true
    }
}
