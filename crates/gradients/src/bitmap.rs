//! Immutable BGRx pixel buffers produced by the gradient generators.

use colorpick_core::PickerError;

/// Side length of the square and width of the bar, in pixels.
pub const GRADIENT_SIZE: usize = 256;

/// Bytes per pixel: blue, green, red, unused.
pub const BYTES_PER_PIXEL: usize = 4;

/// A packed 8-bit-per-channel image, rows stored top first.
///
/// Each pixel is `[blue, green, red, unused]`. The unused byte is always 0;
/// alpha compositing, if any, is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GradientImage {
    /// Wraps a BGRx buffer, checking that it holds exactly `width * height` pixels.
    pub fn from_bgrx(width: usize, height: usize, data: Vec<u8>) -> Result<Self, PickerError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL));
        match expected {
            Some(len) if width > 0 && height > 0 && len == data.len() => Ok(Self {
                width,
                height,
                data,
            }),
            _ => Err(PickerError::InvalidDimensions { width, height }),
        }
    }

    /// Builds an image from a buffer a generator sized itself.
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * BYTES_PER_PIXEL);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row stride in bytes.
    pub fn bytes_per_row(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    /// The raw BGRx bytes.
    pub fn bgrx(&self) -> &[u8] {
        &self.data
    }

    /// The four bytes at column `x`, memory row `row` (0 = top).
    pub fn pixel(&self, x: usize, row: usize) -> Option<[u8; 4]> {
        if x >= self.width || row >= self.height {
            return None;
        }
        let i = row * self.bytes_per_row() + x * BYTES_PER_PIXEL;
        let px = &self.data[i..i + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// The pixel at `(x, row)` as `(r, g, b)`.
    pub fn rgb_at(&self, x: usize, row: usize) -> Option<(u8, u8, u8)> {
        self.pixel(x, row).map(|[b, g, r, _]| (r, g, b))
    }

    /// Resamples vertically (nearest row) to `height` rows.
    ///
    /// Used to turn a 256x1 bar into something tall enough to look at.
    /// Fails with `InvalidDimensions` for a zero height or one whose buffer
    /// cannot be sized or allocated.
    pub fn stretched(&self, height: usize) -> Result<GradientImage, PickerError> {
        let invalid = || PickerError::InvalidDimensions {
            width: self.width,
            height,
        };
        let stride = self.bytes_per_row();
        let len = stride
            .checked_mul(height)
            .filter(|_| height > 0)
            .ok_or_else(invalid)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| invalid())?;
        for y in 0..height {
            let src = (y as u128 * self.height as u128 / height as u128) as usize;
            data.extend_from_slice(&self.data[src * stride..(src + 1) * stride]);
        }
        GradientImage::from_bgrx(self.width, height, data)
    }
}

/// Memory row of the saturation/brightness square holding brightness `v`
/// (0..=255). Brightness 255 is the top row.
pub fn square_row_for_value(v: u8) -> usize {
    GRADIENT_SIZE - 1 - v as usize
}
