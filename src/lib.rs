//! # page-behaviors
//!
//! WASM enhancement layer for server-rendered pages. Attaches small,
//! independent interaction behaviors (reveal-on-scroll, accordions, tooltips,
//! scroll-spy, dark mode, form validation, page transitions, ...) to markup
//! that follows a class-name contract.
//!
//! Each behavior splits into a browser-independent core operating on
//! [`node::Node`] handles and plain values, and a `hydrate`-only `attach`
//! function that queries the document and wires `web-sys` listeners.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`behaviors`] | One module per widget type |
//! | [`config`] | Tunable offsets, delays, and log level |
//! | [`consts`] | Selectors, class names, storage keys |
//! | [`error`] | [`error::BehaviorError`] |
//! | [`node`] | The [`node::Node`] handle trait |
//! | [`storage`] | Preference persistence boundary |
//! | [`page`] | Initializer that attaches every behavior |

pub mod behaviors;
pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod node;
pub mod page;
pub mod storage;

/// WASM entry point: installs logging and schedules the page initializer.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    page::boot();
}
