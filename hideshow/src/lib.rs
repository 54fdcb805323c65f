//! Declarative, accessible hide/show toggles.
//!
//! A trigger element (usually a `<button>`) names its target through
//! `aria-controls` and optionally configures a replacement label
//! (`data-text`) and a toggle class (`data-class`). Each click flips the
//! target between shown and hidden and keeps `aria-expanded`, `aria-hidden`
//! and `tabindex` in step.
//!
//! The host DOM sits behind the [`Dom`] trait. [`Document`] is an in-memory
//! implementation; `hideshow-web` binds the same controller to a browser page.

pub mod class;
pub mod config;
pub mod controller;
pub mod document;
pub mod dom;
pub mod element;
pub mod error;
pub mod event;
pub mod toggle;
pub mod visibility;

pub use config::{read_config, ExpandedState, Options, TriggerConfig};
pub use controller::{handle_click, ToggleController};
pub use document::{Document, Stylesheet};
pub use dom::Dom;
pub use element::Element;
pub use error::ToggleError;
pub use event::ClickEvent;
pub use toggle::{select_strategy, toggle, Strategy, Transition};
pub use visibility::DisplayValue;
