//! Pure-computation conversion from the generators' BGRx layout to RGBA8.
//!
//! Always available (no feature gate) so hosts that upload RGBA textures can
//! share it with the `png` snapshot path.

use crate::bitmap::{GradientImage, BYTES_PER_PIXEL};

/// Reorders each `[b, g, r, x]` pixel to `[r, g, b, 255]`.
///
/// The buffer length is `width * height * 4`.
pub fn bgrx_to_rgba(image: &GradientImage) -> Vec<u8> {
    image
        .bgrx()
        .chunks_exact(BYTES_PER_PIXEL)
        .flat_map(|px| [px[2], px[1], px[0], 255u8])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::generate_bar;
    use crate::square::generate_square;
    use colorpick_core::HsbComponent;

    #[test]
    fn bgrx_to_rgba_correct_length() {
        let img = generate_square(0.0);
        assert_eq!(bgrx_to_rgba(&img).len(), 256 * 256 * 4);
    }

    #[test]
    fn bgrx_to_rgba_alpha_always_255() {
        let buf = bgrx_to_rgba(&generate_bar(HsbComponent::Hue, [0.0, 1.0, 1.0]));
        for (i, &byte) in buf.iter().enumerate() {
            if i % 4 == 3 {
                assert_eq!(byte, 255, "alpha at pixel {} should be 255", i / 4);
            }
        }
    }

    #[test]
    fn bgrx_to_rgba_swaps_red_and_blue() {
        let img = GradientImage::from_bgrx(1, 1, vec![10, 20, 30, 0]).unwrap();
        assert_eq!(bgrx_to_rgba(&img), vec![30, 20, 10, 255]);
    }
}
