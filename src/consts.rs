//! Markup contract: selectors, class names, and storage keys.

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_SELECTOR: &str = ".reveal";

/// Shared "on" class for reveal, accordion, tooltip, and scroll-spy links.
pub const ACTIVE_CLASS: &str = "active";

// ── Accordion ───────────────────────────────────────────────────

pub const ACCORDION_ITEM_SELECTOR: &str = ".accordion-item";
pub const ACCORDION_HEADER_SELECTOR: &str = ".accordion-header";

// ── File input ──────────────────────────────────────────────────

pub const FILE_WRAPPER_SELECTOR: &str = ".custom-file-input";
pub const FILE_INPUT_SELECTOR: &str = ".custom-file-input input[type=\"file\"]";
pub const FILE_NAME_SELECTOR: &str = ".file-name";
pub const HAS_FILE_CLASS: &str = "has-file";

// ── Loader ──────────────────────────────────────────────────────

pub const LOADER_SELECTOR: &str = ".page-loader";
pub const LOADED_CLASS: &str = "loaded";

// ── Tooltip ─────────────────────────────────────────────────────

pub const TOOLTIP_SELECTOR: &str = ".tooltip";

// ── Scroll-spy ──────────────────────────────────────────────────

pub const SCROLLSPY_SECTION_SELECTOR: &str = "[data-scrollspy]";
pub const SCROLLSPY_LINK_SELECTOR: &str = ".scroll-nav-link";

// ── Smooth scroll ───────────────────────────────────────────────

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]:not([href=\"#\"])";

// ── Dark mode ───────────────────────────────────────────────────

pub const DARK_MODE_TOGGLE_SELECTOR: &str = ".dark-mode-toggle";
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// `localStorage` key holding `"enabled"` or `"disabled"`.
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";

// ── Validation ──────────────────────────────────────────────────

pub const VALIDATED_FORM_SELECTOR: &str = "form[data-validate]";
pub const REQUIRED_FIELD_SELECTOR: &str = "[required]";
pub const FORM_GROUP_SELECTOR: &str = ".form-group";
pub const HAS_ERROR_CLASS: &str = "has-error";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const ERROR_MESSAGE_SELECTOR: &str = ".error-message";

// ── Page transition ─────────────────────────────────────────────

pub const TRANSITION_OUT_CLASS: &str = "page-transition-out";

// ── Config ──────────────────────────────────────────────────────

/// Attribute on `<html>` carrying a JSON [`crate::config::BehaviorConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-page-behaviors";
