#![deny(unsafe_code)]
//! Gradient bitmaps for the colorpick surface: the saturation/brightness
//! square, the component bars, a cache that rebuilds them only when their
//! inputs change, and PNG snapshot export.
//!
//! The generators are pure functions of their inputs. Callers that repaint
//! often go through [`GradientCache`] instead of calling them directly.

pub mod bar;
pub mod bitmap;
pub mod cache;
pub mod pixel;
pub mod square;

#[cfg(feature = "png")]
pub mod snapshot;

pub use bar::{fixed_components, generate_bar};
pub use bitmap::{square_row_for_value, GradientImage, BYTES_PER_PIXEL, GRADIENT_SIZE};
pub use cache::GradientCache;
pub use pixel::bgrx_to_rgba;
pub use square::generate_square;
