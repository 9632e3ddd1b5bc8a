#![deny(unsafe_code)]
//! Core types for the colorpick color picker.
//!
//! Provides the `Rgb`/`Hsv` color model with hex conversion, the
//! `ColorHistory` undo/redo stack, and `PickerSession`, which ties a current
//! color to its history for one picking session.

pub mod color;
pub mod config;
pub mod error;
pub mod history;
pub mod session;

pub use color::{
    hex_to_rgb, hsv_to_rgb, normalize_hex, rgb_to_hex, rgb_to_hsv, HsbComponent, Hsv, Rgb,
};
pub use config::SessionConfig;
pub use error::PickerError;
pub use history::ColorHistory;
pub use session::PickerSession;
