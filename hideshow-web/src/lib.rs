//! Browser binding for `hideshow`.
//!
//! Implements [`hideshow::Dom`] over the live page via web-sys and registers
//! one `click` listener per trigger. With the default `autostart` feature the
//! module wires itself up on instantiation; otherwise call `initWithOptions`.

#[cfg(target_arch = "wasm32")]
mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{init_with_options, BrowserDom};
