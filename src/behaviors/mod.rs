//! One module per widget type.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every module exposes a browser-independent core over [`crate::node::Node`]
//! handles and, under the `hydrate` feature, an `attach` function with the
//! signature `fn(&Document, &BehaviorConfig) -> Result<usize, BehaviorError>`
//! returning how many elements it wired. Behaviors never depend on each other.

pub mod accordion;
pub mod dark_mode;
pub mod file_input;
pub mod loader;
pub mod reveal;
pub mod scroll_spy;
pub mod smooth_scroll;
pub mod tooltip;
pub mod transition;
pub mod validation;
