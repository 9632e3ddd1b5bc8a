//! Picker session configuration.
//!
//! A [`SessionConfig`] describes how a picking session starts: the initial
//! color and its alpha. It round-trips through JSON so hosts can keep it
//! alongside their own settings.

use crate::color::{hex_to_rgb, normalize_hex, rgb_to_hsv, Hsv, Rgb};
use crate::error::PickerError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Starting state for a [`PickerSession`](crate::session::PickerSession).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Initial color, serialized as bare hex (`"ff0000"`).
    pub initial_color: Rgb,
    /// Initial alpha in [0, 1].
    pub initial_alpha: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_color: Rgb::new(1.0, 0.0, 0.0),
            initial_alpha: 1.0,
        }
    }
}

impl SessionConfig {
    /// Config starting from a hex color at full alpha. Accepts the same forms
    /// as the JSON field: an optional `#` and `rgb` shorthand.
    pub fn from_hex(hex: &str) -> Result<Self, PickerError> {
        Ok(Self {
            initial_color: hex_to_rgb(&normalize_hex(hex)?)?,
            ..Self::default()
        })
    }

    /// Parses a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        let config: SessionConfig = serde_json::from_str(json)
            .map_err(|e| PickerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file. Errors name the file.
    pub fn load(path: &Path) -> Result<Self, PickerError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PickerError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&text).map_err(|e| match e {
            PickerError::InvalidConfig(msg) => {
                PickerError::InvalidConfig(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Checks that alpha lies in [0, 1].
    pub fn validate(&self) -> Result<(), PickerError> {
        if !(0.0..=1.0).contains(&self.initial_alpha) {
            return Err(PickerError::InvalidConfig(format!(
                "initial_alpha must be in [0, 1], got {}",
                self.initial_alpha
            )));
        }
        Ok(())
    }

    /// The initial color as HSV, carrying the configured alpha.
    pub fn initial_hsv(&self) -> Hsv {
        Hsv {
            a: self.initial_alpha.clamp(0.0, 1.0),
            ..rgb_to_hsv(self.initial_color, false, 0.0, 0.0)
        }
    }
}
