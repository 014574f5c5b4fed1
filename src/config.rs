//! Runtime configuration for the page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages may override offsets and delays through a JSON object in the
//! `data-page-behaviors` attribute of the root element. Every field has a
//! default, so an absent attribute or a partial object is valid.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BehaviorError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorConfig {
    /// Distance above the viewport bottom a reveal element must cross.
    pub reveal_offset_px: f64,
    /// Lead applied to section tops before scroll-spy counts them as reached.
    pub scroll_spy_offset_px: f64,
    /// Space left above an anchor target after smooth scrolling.
    pub anchor_offset_px: f64,
    pub loader_reveal_delay_ms: u32,
    pub loader_remove_delay_ms: u32,
    pub transition_delay_ms: u32,
    pub required_message: String,
    pub log_level: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            reveal_offset_px: 100.0,
            scroll_spy_offset_px: 100.0,
            anchor_offset_px: 80.0,
            loader_reveal_delay_ms: 300,
            loader_remove_delay_ms: 500,
            transition_delay_ms: 300,
            required_message: "This field is required".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl BehaviorConfig {
    /// Parse a JSON object, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::Config`] if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, BehaviorError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse the config attribute value; absent or blank means defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::Config`] if a non-blank value fails to parse.
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, BehaviorError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => Self::from_json(raw),
        }
    }

    /// The configured console log level.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::InvalidLogLevel`] for unknown level names.
    pub fn level(&self) -> Result<log::Level, BehaviorError> {
        log::Level::from_str(self.log_level.trim())
            .map_err(|_| BehaviorError::InvalidLogLevel(self.log_level.clone()))
    }
}
