//! The 256x256 saturation/brightness square for a fixed hue.
//!
//! Saturation grows left to right, brightness grows bottom to top. The hue's
//! base color is computed once; every pixel after that is integer math.

use colorpick_core::Hsv;

use crate::bitmap::{GradientImage, BYTES_PER_PIXEL, GRADIENT_SIZE};

/// `value * percent / 255`, truncating.
fn blend(value: u32, percent_in_255: u32) -> u32 {
    value * percent_in_255 / 255
}

/// Generates the saturation/brightness square for `hue` in degrees.
///
/// Column `x` has saturation `x / 255`; memory row `row` has brightness
/// `(255 - row) / 255`. Channels are truncated to 8 bits. The caller should
/// pass a hue in [0, 360] and cache the result per hue.
pub fn generate_square(hue: f64) -> GradientImage {
    let base = Hsv::new(hue, 1.0, 1.0).hue_rgb();

    // How far each channel has to travel from white to the pure hue.
    let reach = |c: f64| ((1.0 - c) * 255.0) as u32;
    let (r_s, g_s, b_s) = (reach(base.r), reach(base.g), reach(base.b));

    // Per column: the full-brightness color at that saturation, in BGR order.
    let columns: Vec<[u32; 3]> = (0..GRADIENT_SIZE as u32)
        .map(|s| {
            [
                255 - blend(s, b_s),
                255 - blend(s, g_s),
                255 - blend(s, r_s),
            ]
        })
        .collect();

    let row_bytes = GRADIENT_SIZE * BYTES_PER_PIXEL;
    let mut data = vec![0u8; GRADIENT_SIZE * row_bytes];

    for (row, line) in data.chunks_exact_mut(row_bytes).enumerate() {
        let v = (GRADIENT_SIZE - 1 - row) as u32;
        for (px, [b, g, r]) in line.chunks_exact_mut(BYTES_PER_PIXEL).zip(&columns) {
            px[0] = blend(v, *b) as u8;
            px[1] = blend(v, *g) as u8;
            px[2] = blend(v, *r) as u8;
        }
    }

    GradientImage::from_parts(GRADIENT_SIZE, GRADIENT_SIZE, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::square_row_for_value;
    use colorpick_core::hsv_to_rgb;

    #[test]
    fn square_has_fixed_dimensions() {
        let img = generate_square(0.0);
        assert_eq!(img.width(), 256);
        assert_eq!(img.height(), 256);
        assert_eq!(img.bgrx().len(), 256 * 256 * 4);
    }

    #[test]
    fn zero_saturation_full_brightness_is_white() {
        for hue in [0.0, 120.0, 275.0] {
            let img = generate_square(hue);
            let top = square_row_for_value(255);
            assert_eq!(img.rgb_at(0, top), Some((255, 255, 255)), "hue {hue}");
        }
    }

    #[test]
    fn zero_brightness_row_is_black_for_every_column() {
        let img = generate_square(0.0);
        let bottom = square_row_for_value(0);
        for x in 0..256 {
            assert_eq!(img.rgb_at(x, bottom), Some((0, 0, 0)), "column {x}");
        }
    }

    #[test]
    fn full_saturation_full_brightness_is_the_pure_hue() {
        let top = square_row_for_value(255);
        assert_eq!(generate_square(0.0).rgb_at(255, top), Some((255, 0, 0)));
        assert_eq!(generate_square(120.0).rgb_at(255, top), Some((0, 255, 0)));
        assert_eq!(generate_square(240.0).rgb_at(255, top), Some((0, 0, 255)));
    }

    #[test]
    fn zero_saturation_column_is_a_gray_ramp() {
        let img = generate_square(200.0);
        for v in 0..=255u8 {
            let (r, g, b) = img.rgb_at(0, square_row_for_value(v)).unwrap();
            assert_eq!((r, g, b), (v, v, v), "brightness {v}");
        }
    }

    #[test]
    fn unused_byte_is_zero() {
        let img = generate_square(42.0);
        assert!(img.bgrx().chunks_exact(4).all(|px| px[3] == 0));
    }

    #[test]
    fn hue_360_matches_hue_0() {
        assert_eq!(generate_square(360.0), generate_square(0.0));
    }

    #[test]
    fn close_to_float_reference() {
        for hue in [0.0, 30.0, 200.0, 333.0] {
            let img = generate_square(hue);
            for x in (0..256).step_by(17) {
                for v in (0..256).step_by(15) {
                    let expected =
                        hsv_to_rgb(Hsv::new(hue, x as f64 / 255.0, v as f64 / 255.0));
                    let (r, g, b) = img.rgb_at(x, square_row_for_value(v as u8)).unwrap();
                    for (got, want) in [(r, expected.r), (g, expected.g), (b, expected.b)] {
                        let want = want * 255.0;
                        assert!(
                            (got as f64 - want).abs() <= 3.0,
                            "hue {hue} s {x} v {v}: got {got}, want {want}"
                        );
                    }
                }
            }
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn corners_hold_for_any_hue(hue in 0.0_f64..=360.0) {
                let img = generate_square(hue);
                let top = square_row_for_value(255);
                let bottom = square_row_for_value(0);
                prop_assert_eq!(img.rgb_at(0, top), Some((255, 255, 255)));
                prop_assert_eq!(img.rgb_at(0, bottom), Some((0, 0, 0)));
                prop_assert_eq!(img.rgb_at(255, bottom), Some((0, 0, 0)));
            }

            #[test]
            fn brightness_never_increases_downwards(hue in 0.0_f64..=360.0, x in 0usize..256) {
                let img = generate_square(hue);
                for row in 1..256 {
                    let (r0, g0, b0) = img.rgb_at(x, row - 1).unwrap();
                    let (r1, g1, b1) = img.rgb_at(x, row).unwrap();
                    prop_assert!(r1 <= r0 && g1 <= g0 && b1 <= b0, "column {} row {}", x, row);
                }
            }
        }
    }
}
