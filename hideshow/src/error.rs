//! Error types for the toggle controller.

/// Errors that abort a single click handler.
///
/// Every fallible step of a toggle runs before the first DOM write, so an
/// error always leaves the trigger and target untouched.
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    /// The trigger carries no `aria-controls` attribute.
    #[error("trigger {trigger} has no aria-controls attribute")]
    MissingControls {
        /// Description of the offending trigger.
        trigger: String,
    },

    /// `aria-controls` names an id that resolves to no element.
    #[error("target not found: no element with id {id:?}")]
    TargetNotFound {
        /// The id read from `aria-controls`.
        id: String,
    },

    /// The host could not resolve the target's computed style.
    #[error("computed style unavailable for {id}: {reason}")]
    ComputedStyle {
        /// Description of the target.
        id: String,
        /// Host-provided reason.
        reason: String,
    },

    /// Controller options could not be parsed.
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

impl ToggleError {
    /// Returns the unresolved target id if this is a `TargetNotFound` error.
    pub fn missing_target(&self) -> Option<&str> {
        match self {
            Self::TargetNotFound { id } => Some(id.as_str()),
            _ => None,
        }
    }
}
