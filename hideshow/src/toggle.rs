//! The toggle state machine.
//!
//! On every click one of three strategies is chosen from the trigger's toggle
//! class and the target's computed `display`:
//!
//! | toggle class | computed display | strategy                             |
//! |--------------|------------------|--------------------------------------|
//! | present      | not `none`       | [`Strategy::Class`]                  |
//! | present      | `none`           | [`Strategy::ClassForcedHidden`]      |
//! | absent       | any              | [`Strategy::InlineStyle`]            |
//!
//! The strategy is re-derived on every click, never cached.

use log::debug;

use crate::class::{add_class, has_class, remove_class};
use crate::config::{attr, ExpandedState, Options, TriggerConfig};
use crate::dom::Dom;
use crate::error::ToggleError;
use crate::visibility::{computed_display, is_hidden};

/// How the target is hidden and shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Flip membership of the toggle class.
    Class,
    /// Flip the toggle class while the target already computes to
    /// `display: none`, mirroring the flip into `aria-hidden`.
    ///
    /// Removing the class cannot undo a `display: none` coming from elsewhere.
    /// Page authors must style the toggle class so that its absence actually
    /// reveals the target; only ARIA bookkeeping is guaranteed here.
    ClassForcedHidden,
    /// Set or clear inline `display: none`.
    InlineStyle,
}

/// Outcome of a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub strategy: Strategy,
    /// State the target was moved into.
    pub state: ExpandedState,
    /// Whether the trigger's label was rotated.
    pub label_rotated: bool,
}

/// Pick the strategy for a toggle class and a computed `display` value.
pub fn select_strategy(toggle_class: Option<&str>, computed_display: &str) -> Strategy {
    match toggle_class {
        Some(_) if computed_display.trim().eq_ignore_ascii_case("none") => {
            Strategy::ClassForcedHidden
        }
        Some(_) => Strategy::Class,
        None => Strategy::InlineStyle,
    }
}

/// Toggle the target named by `config` and update `trigger` to match.
///
/// The target is resolved and its computed style read before anything is
/// written, so an error leaves both elements untouched.
pub fn toggle<D: Dom>(
    dom: &mut D,
    trigger: &D::Node,
    config: &TriggerConfig,
    options: &Options,
) -> Result<Transition, ToggleError> {
    let target = dom
        .get_element_by_id(&config.target_id)
        .ok_or_else(|| ToggleError::TargetNotFound {
            id: config.target_id.clone(),
        })?;
    let display = computed_display(dom, &target)?;
    let strategy = select_strategy(config.toggle_class.as_deref(), display.as_str());

    debug!(
        "[hideshow] toggle trigger={} target={} display={} strategy={:?}",
        dom.describe(trigger),
        config.target_id,
        display.as_str(),
        strategy
    );

    let label_rotated = rotate_label(dom, trigger, config);

    let state = match (strategy, config.toggle_class.as_deref()) {
        (Strategy::Class, Some(class)) => toggle_class(dom, trigger, &target, class, false, options),
        (Strategy::ClassForcedHidden, Some(class)) => {
            toggle_class(dom, trigger, &target, class, true, options)
        }
        _ => toggle_inline(dom, trigger, &target, options),
    };

    debug!("[hideshow] {} is now {state}", config.target_id);

    Ok(Transition {
        strategy,
        state,
        label_rotated,
    })
}

/// Swap the visible label with the configured replacement.
///
/// Runs on every click regardless of direction.
fn rotate_label<D: Dom>(dom: &mut D, trigger: &D::Node, config: &TriggerConfig) -> bool {
    let Some(replacement) = config.replacement_label.as_deref() else {
        return false;
    };
    dom.set_label(trigger, replacement);
    dom.set_attribute(trigger, attr::TEXT, &config.current_label);
    true
}

fn toggle_class<D: Dom>(
    dom: &mut D,
    trigger: &D::Node,
    target: &D::Node,
    class: &str,
    forced_hidden: bool,
    options: &Options,
) -> ExpandedState {
    if has_class(dom, target, class) {
        remove_class(dom, target, class);
        if forced_hidden {
            dom.remove_attribute(target, attr::HIDDEN);
        }
        display_el(dom, trigger, target, options);
        ExpandedState::Expanded
    } else {
        add_class(dom, target, class);
        if forced_hidden {
            dom.set_attribute(target, attr::HIDDEN, "true");
        }
        remove_el(dom, trigger, target);
        ExpandedState::Collapsed
    }
}

fn toggle_inline<D: Dom>(
    dom: &mut D,
    trigger: &D::Node,
    target: &D::Node,
    options: &Options,
) -> ExpandedState {
    if is_hidden(dom, target) {
        dom.remove_attribute(target, attr::STYLE);
        dom.remove_attribute(target, attr::HIDDEN);
        display_el(dom, trigger, target, options);
        ExpandedState::Expanded
    } else {
        dom.set_display_none(target);
        dom.set_attribute(target, attr::HIDDEN, "true");
        remove_el(dom, trigger, target);
        ExpandedState::Collapsed
    }
}

fn display_el<D: Dom>(dom: &mut D, trigger: &D::Node, target: &D::Node, options: &Options) {
    dom.set_attribute(trigger, attr::EXPANDED, ExpandedState::Expanded.as_attr());
    dom.set_attribute(target, attr::TABINDEX, "-1");
    if options.focus_target && !dom.focus(target) {
        debug!("[hideshow] focus did not move to {}", dom.describe(target));
    }
}

fn remove_el<D: Dom>(dom: &mut D, trigger: &D::Node, target: &D::Node) {
    dom.remove_attribute(target, attr::TABINDEX);
    dom.set_attribute(trigger, attr::EXPANDED, ExpandedState::Collapsed.as_attr());
}
