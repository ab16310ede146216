//! # widget
//!
//! Rust + WASM chat widget for the Bytezinho marketing site.
//!
//! The widget attaches to markup supplied by the host page (see [`markup`])
//! and drives it from an explicit in-memory model: visibility, the lead
//! gate, the typing indicator and per-message streaming reveals. The DOM is
//! a derived view written through the [`view::WidgetView`] trait, and the
//! two remote endpoints sit behind [`net::api::ChatBackend`].
//!
//! Everything except the `dom` module compiles and tests natively. Browser
//! glue is gated behind the `hydrate` feature.

pub mod attach;
pub mod config;
pub mod controller;
pub mod error;
pub mod markup;
pub mod net;
pub mod reveal;
pub mod state;
pub mod util;
pub mod view;

#[cfg(feature = "hydrate")]
pub mod dom;

pub use config::WidgetConfig;
pub use controller::ChatWidget;
pub use error::WidgetError;

/// WASM entry point: initialize logging and mount the widget on the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    dom::mount();
}
