//! Visibility probes.
//!
//! Two orthogonal signals: the coarse "renders no box" probe drives the
//! inline-style strategy, and the element's own computed `display` selects
//! between the class strategies.

use crate::dom::Dom;
use crate::error::ToggleError;

/// A resolved CSS `display` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayValue(String);

impl DisplayValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_ascii_lowercase())
    }

    pub fn is_none(&self) -> bool {
        self.0 == "none"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// True if the element contributes no layout box.
pub fn is_hidden<D: Dom>(dom: &D, el: &D::Node) -> bool {
    let hidden = dom.is_hidden(el);
    log::trace!("[hideshow] is_hidden({}) = {hidden}", dom.describe(el));
    hidden
}

/// The element's own resolved `display` value.
pub fn computed_display<D: Dom>(dom: &D, el: &D::Node) -> Result<DisplayValue, ToggleError> {
    let display = DisplayValue::new(dom.computed_display(el)?);
    log::trace!(
        "[hideshow] computed_display({}) = {}",
        dom.describe(el),
        display.as_str()
    );
    Ok(display)
}
