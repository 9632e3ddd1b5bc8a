//! The 256x1 component ramp shown under the square.

use colorpick_core::{hsv_to_rgb, HsbComponent, Hsv};

use crate::bitmap::{GradientImage, BYTES_PER_PIXEL, GRADIENT_SIZE};

fn channel_to_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Normalized `[h, s, v]` of a color, the form [`generate_bar`] takes.
pub fn fixed_components(color: Hsv) -> [f64; 3] {
    HsbComponent::ALL.map(|c| color.component(c))
}

/// Generates a bar where `component` runs from 0 to 1 across the 256 columns.
///
/// `fixed` holds normalized `[h, s, v]`: hue is a fraction of a full turn and
/// is scaled by 360 before conversion. The entry for `component` itself is
/// ignored.
pub fn generate_bar(component: HsbComponent, fixed: [f64; 3]) -> GradientImage {
    let data = (0..GRADIENT_SIZE)
        .flat_map(|x| {
            let mut hsv = fixed;
            hsv[component.index()] = x as f64 / 255.0;
            let rgb = hsv_to_rgb(Hsv {
                h: hsv[0] * 360.0,
                s: hsv[1],
                v: hsv[2],
                a: 1.0,
            });
            [
                channel_to_byte(rgb.b),
                channel_to_byte(rgb.g),
                channel_to_byte(rgb.r),
                0,
            ]
        })
        .collect::<Vec<u8>>();

    debug_assert_eq!(data.len(), GRADIENT_SIZE * BYTES_PER_PIXEL);
    GradientImage::from_parts(GRADIENT_SIZE, 1, data)
}
