//! Trigger configuration and controller options.

use std::fmt;

use serde::Deserialize;

use crate::dom::Dom;
use crate::error::ToggleError;

/// Attribute names making up the declarative protocol.
pub mod attr {
    pub const CONTROLS: &str = "aria-controls";
    pub const TEXT: &str = "data-text";
    pub const CLASS: &str = "data-class";
    pub const EXPANDED: &str = "aria-expanded";
    pub const HIDDEN: &str = "aria-hidden";
    pub const TABINDEX: &str = "tabindex";
    pub const STYLE: &str = "style";
    pub const CLASS_LIST: &str = "class";
}

/// The two-value accessibility state mirrored through `aria-expanded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpandedState {
    Expanded,
    Collapsed,
}

impl ExpandedState {
    /// Attribute serialization (`"true"` / `"false"`).
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Expanded => "true",
            Self::Collapsed => "false",
        }
    }

    /// Parse an attribute value. Anything other than `true`/`false` is `None`.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "true" => Some(Self::Expanded),
            "false" => Some(Self::Collapsed),
            _ => None,
        }
    }
}

impl fmt::Display for ExpandedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expanded => write!(f, "expanded"),
            Self::Collapsed => write!(f, "collapsed"),
        }
    }
}

/// Controller options.
///
/// Every field has a default, so a partial JSON object is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Attribute that marks an element as a trigger.
    pub marker_attribute: String,
    /// Value the marker attribute must equal.
    pub marker_value: String,
    /// Move focus to the target when it is shown.
    pub focus_target: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            marker_attribute: "data-action".to_string(),
            marker_value: "hide-show".to_string(),
            focus_target: true,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object, e.g. `{"markerValue": "disclosure"}`.
    pub fn from_json(json: &str) -> Result<Self, ToggleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn marker(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.marker_attribute = attribute.into();
        self.marker_value = value.into();
        self
    }

    pub fn focus_target(mut self, focus: bool) -> Self {
        self.focus_target = focus;
        self
    }
}

/// Configuration read from a trigger at click time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerConfig {
    /// Id of the target, from `aria-controls`.
    pub target_id: String,
    /// The trigger's visible label before the click.
    pub current_label: String,
    /// Replacement label from `data-text`. `Some("")` is a configured empty label.
    pub replacement_label: Option<String>,
    /// Toggle class from `data-class`.
    pub toggle_class: Option<String>,
    /// Current `aria-expanded`, for diagnostics only.
    pub expanded: Option<ExpandedState>,
}

/// Read a trigger's configuration from its attributes and text.
pub fn read_config<D: Dom>(dom: &D, trigger: &D::Node) -> Result<TriggerConfig, ToggleError> {
    let target_id = dom
        .attribute(trigger, attr::CONTROLS)
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ToggleError::MissingControls {
            trigger: dom.describe(trigger),
        })?;

    // A class token cannot be empty, so an empty data-class configures nothing.
    let toggle_class = dom
        .attribute(trigger, attr::CLASS)
        .map(|class| class.trim().to_string())
        .filter(|class| !class.is_empty());

    let expanded = dom.attribute(trigger, attr::EXPANDED).and_then(|value| {
        let parsed = ExpandedState::from_attr(&value);
        if parsed.is_none() {
            log::debug!("[hideshow] ignoring unparseable aria-expanded={value:?}");
        }
        parsed
    });

    Ok(TriggerConfig {
        target_id,
        current_label: dom.text(trigger).trim().to_string(),
        replacement_label: dom.attribute(trigger, attr::TEXT),
        toggle_class,
        expanded,
    })
}
