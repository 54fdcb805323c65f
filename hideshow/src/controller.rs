//! Trigger discovery and click handling.

use std::fmt::Debug;

use log::{debug, info, warn};

use crate::config::{read_config, Options};
use crate::dom::Dom;
use crate::error::ToggleError;
use crate::event::ClickEvent;
use crate::toggle::{toggle, Transition};

/// Discovers triggers and routes clicks on them to the state machine.
///
/// Holds no toggle state of its own; everything lives in the DOM.
#[derive(Debug)]
pub struct ToggleController<N> {
    options: Options,
    registrations: Vec<N>,
}

impl<N> Default for ToggleController<N> {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl<N> ToggleController<N> {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            registrations: Vec::new(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Registered triggers, one entry per registered handler.
    pub fn registrations(&self) -> &[N] {
        &self.registrations
    }
}

impl<N: Clone + PartialEq + Debug> ToggleController<N> {
    /// Register a click handler on every trigger in the document.
    ///
    /// Returns the number of handlers registered. Calling this twice registers
    /// every trigger twice, so each click then toggles twice.
    pub fn init<D: Dom<Node = N>>(&mut self, dom: &D) -> usize {
        let triggers =
            dom.query_by_attribute(&self.options.marker_attribute, &self.options.marker_value);
        if triggers.is_empty() {
            debug!(
                "[hideshow] no triggers matching [{}=\"{}\"]",
                self.options.marker_attribute, self.options.marker_value
            );
            return 0;
        }

        let count = triggers.len();
        for trigger in triggers {
            debug!("[hideshow] registering {}", dom.describe(&trigger));
            self.registrations.push(trigger);
        }
        info!("[hideshow] registered {count} trigger(s)");
        count
    }

    /// Deliver a click, bubbling from the event target to the root.
    ///
    /// Every handler registered on an element along the path runs in
    /// registration order. The first error aborts delivery.
    pub fn dispatch<D: Dom<Node = N>>(
        &self,
        dom: &mut D,
        event: &mut ClickEvent<N>,
    ) -> Result<Vec<Transition>, ToggleError> {
        let mut transitions = Vec::new();
        let mut current = Some(event.target.clone());

        while let Some(node) = current {
            for trigger in self.registrations.iter().filter(|t| **t == node) {
                event.prevent_default();
                transitions.push(handle_click(dom, trigger, &self.options)?);
            }
            current = dom.parent(&node);
        }

        Ok(transitions)
    }
}

/// The click handler body: read the trigger's configuration and toggle.
pub fn handle_click<D: Dom>(
    dom: &mut D,
    trigger: &D::Node,
    options: &Options,
) -> Result<Transition, ToggleError> {
    let config = read_config(dom, trigger)?;
    let transition = toggle(dom, trigger, &config, options)?;

    // aria-expanded is written, not trusted: report markup that was out of step.
    if config.expanded == Some(transition.state) {
        warn!(
            "[hideshow] {} had aria-expanded=\"{}\" before entering that state",
            dom.describe(trigger),
            transition.state.as_attr()
        );
    }

    Ok(transition)
}
