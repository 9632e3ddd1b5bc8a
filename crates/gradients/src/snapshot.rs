//! PNG export of a [`GradientImage`].
//!
//! Feature-gated behind `png` (default on) so hosts that only need the raw
//! buffers do not pull in the `image` crate. The pixel conversion itself
//! lives in [`crate::pixel`].

use colorpick_core::PickerError;
use std::path::Path;

use crate::bitmap::GradientImage;
use crate::pixel::bgrx_to_rgba;

/// Writes a gradient as an opaque RGBA PNG.
///
/// Returns `PickerError::InvalidDimensions` if the dimensions overflow `u32`,
/// or `PickerError::Io` on write failure.
pub fn write_png(image: &GradientImage, path: &Path) -> Result<(), PickerError> {
    let invalid = || PickerError::InvalidDimensions {
        width: image.width(),
        height: image.height(),
    };
    let w = u32::try_from(image.width()).map_err(|_| invalid())?;
    let h = u32::try_from(image.height()).map_err(|_| invalid())?;
    let img = image::RgbaImage::from_raw(w, h, bgrx_to_rgba(image))
        .ok_or_else(|| PickerError::Io("RGBA buffer size mismatch".into()))?;
    log::debug!("writing {w}x{h} gradient to {}", path.display());
    img.save(path).map_err(|e| PickerError::Io(e.to_string()))
}
