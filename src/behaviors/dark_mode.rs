//! Dark mode restore and toggle.
//!
//! Reads the user's preference from a [`PreferenceStore`] (`localStorage` in
//! the browser) and applies the `dark-mode` class to `<body>`. Toggling flips
//! the class and writes the resulting state back.
//!
//! TRADE-OFFS
//! ==========
//! The stored preference is restored even on pages without a
//! `.dark-mode-toggle`, so the theme stays consistent across the site. When
//! storage is unavailable the toggle still works for the current page.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::consts::{DARK_MODE_CLASS, DARK_MODE_STORAGE_KEY};
use crate::error::BehaviorError;
use crate::node::Node;
use crate::storage::PreferenceStore;

/// Persisted dark-mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Enabled,
    Disabled,
}

impl Preference {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }

    /// Unrecognised values are treated as no preference.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "enabled" => Some(Self::Enabled),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }
}

impl From<bool> for Preference {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

/// Dark-mode state bound to its persistence backend.
pub struct DarkMode<S> {
    store: S,
}

impl<S: PreferenceStore> DarkMode<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the stored preference, if any.
    pub fn read_preference(&self) -> Option<Preference> {
        self.store
            .get(DARK_MODE_STORAGE_KEY)
            .as_deref()
            .and_then(Preference::parse)
    }

    /// Apply a stored `enabled` preference to `body`. Returns whether dark
    /// mode was applied.
    pub fn restore<N: Node>(&self, body: &N) -> bool {
        if self.read_preference() == Some(Preference::Enabled) {
            body.add_class(DARK_MODE_CLASS);
            true
        } else {
            false
        }
    }

    /// Flip dark mode on `body` and persist the new state.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the preference could not be written; the
    /// class change on `body` has already happened.
    pub fn toggle<N: Node>(&self, body: &N) -> Result<bool, BehaviorError> {
        let enabled = body.toggle_class(DARK_MODE_CLASS);
        self.store.set(DARK_MODE_STORAGE_KEY, Preference::from(enabled).as_str())?;
        Ok(enabled)
    }
}

#[cfg(feature = "hydrate")]
pub fn attach(
    document: &web_sys::Document,
    _config: &crate::config::BehaviorConfig,
) -> Result<usize, crate::error::BehaviorError> {
    use crate::consts::DARK_MODE_TOGGLE_SELECTOR;
    use crate::dom;
    use crate::storage::browser_store;

    let window = dom::window()?;
    let body = dom::body(document)?;
    let dark_mode = DarkMode::new(browser_store(&window));

    if dark_mode.restore(&body) {
        log::debug!("restored dark mode preference");
    }

    let Some(toggle) = document.query_selector(DARK_MODE_TOGGLE_SELECTOR)? else {
        return Ok(0);
    };
    dom::listen(&toggle, "click", move |_| {
        if let Err(err) = dark_mode.toggle(&body) {
            log::warn!("dark mode preference not saved: {err}");
        }
    })?;
    Ok(1)
}
