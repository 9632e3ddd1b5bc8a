//! Error types for the colorpick core.

use thiserror::Error;

/// Errors produced by color parsing, configuration and image export.
///
/// Color conversions between numeric types never fail; the only fallible
/// user-facing operation is hex parsing, which reports `InvalidFormat`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// A hex color string had the wrong length or contained non-hex characters.
    #[error("invalid hex color '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    /// A session configuration value was out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Image dimensions were zero or did not match the pixel buffer.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Writing an image or reading a config file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl PickerError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        PickerError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
