//! Page initializer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `boot` runs from the WASM start hook, usually before the document has
//! finished parsing. It reads the config from `<html>`, starts logging,
//! registers the navigation listener right away, and defers every other
//! behavior until `DOMContentLoaded`.
//!
//! Each behavior attaches on its own: a failure is logged and the remaining
//! behaviors still run.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::BehaviorConfig;
use crate::error::BehaviorError;

/// Resolve the config attribute, falling back to defaults on bad input.
/// The second value is the parse error to report once logging is up.
pub fn resolve_config(raw: Option<&str>) -> (BehaviorConfig, Option<BehaviorError>) {
    match BehaviorConfig::from_attribute(raw) {
        Ok(config) => (config, None),
        Err(err) => (BehaviorConfig::default(), Some(err)),
    }
}

/// Log one behavior's attach result.
pub fn report(name: &str, outcome: &Result<usize, BehaviorError>) {
    match outcome {
        Ok(0) => log::debug!("{name}: no matching elements"),
        Ok(wired) => log::debug!("{name}: wired {wired}"),
        Err(err) => log::warn!("{name}: not attached: {err}"),
    }
}

#[cfg(feature = "hydrate")]
type Attach = fn(&web_sys::Document, &BehaviorConfig) -> Result<usize, BehaviorError>;

/// Behaviors attached once the document is ready, in attach order.
#[cfg(feature = "hydrate")]
const ON_READY: &[(&str, Attach)] = &[
    ("reveal", crate::behaviors::reveal::attach),
    ("accordion", crate::behaviors::accordion::attach),
    ("file_input", crate::behaviors::file_input::attach),
    ("loader", crate::behaviors::loader::attach),
    ("tooltip", crate::behaviors::tooltip::attach),
    ("scroll_spy", crate::behaviors::scroll_spy::attach),
    ("smooth_scroll", crate::behaviors::smooth_scroll::attach),
    ("dark_mode", crate::behaviors::dark_mode::attach),
    ("validation", crate::behaviors::validation::attach),
];

/// Attach every ready-time behavior to `document`.
#[cfg(feature = "hydrate")]
pub fn init(document: &web_sys::Document, config: &BehaviorConfig) {
    for (name, attach) in ON_READY {
        report(name, &attach(document, config));
    }
}

#[cfg(feature = "hydrate")]
pub fn boot() {
    use crate::consts::CONFIG_ATTRIBUTE;
    use crate::dom::{self, Listen};

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            web_sys::console::error_1(&format!("page-behaviors: {err}").into());
            return;
        }
    };

    let raw = document
        .document_element()
        .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    let (mut config, config_error) = resolve_config(raw.as_deref());
    let level = match config.level() {
        Ok(level) => level,
        Err(err) => {
            web_sys::console::warn_1(&format!("page-behaviors: {err}; using info").into());
            config.log_level = "info".to_owned();
            log::Level::Info
        }
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("page-behaviors: logger already set: {err}").into());
    }
    if let Some(err) = config_error {
        log::warn!("{err}; using defaults");
    }

    report("transition", &crate::behaviors::transition::attach(&document, &config));

    if document.ready_state() == "loading" {
        let ready = document.clone();
        let registered = dom::listen_with(&document, "DOMContentLoaded", Listen::ONCE, move |_| {
            init(&ready, &config);
        });
        if let Err(err) = registered {
            log::warn!("could not wait for DOMContentLoaded: {err}");
        }
    } else {
        init(&document, &config);
    }
}
