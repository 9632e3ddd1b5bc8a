//! Color types and conversion functions for the picker.
//!
//! Provides `Rgb` and `Hsv` value types and pure conversions between them and
//! hex text. All conversions clamp their outputs to the declared ranges and
//! never produce NaN for finite input. Uses `f64` throughout.
//!
//! Hue is undefined for achromatic colors and saturation is undefined for
//! black. By convention both become 0, unless the caller passes
//! `preserve_hue = true` together with the values it is currently showing, in
//! which case those are carried through. This keeps the hue marker from
//! jumping to red while the user drags saturation or brightness to zero.

use crate::error::PickerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB color with components in [0, 1].
///
/// Serializes as a 6-digit lowercase hex string without a leading `#`.
/// The hex round-trip has 8-bit quantization (1/255 precision loss).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// HSV (a.k.a. HSB) color.
///
/// `h` is in degrees, `s`, `v` and `a` are in [0, 1]. Alpha plays no part in
/// the color math; it rides along so the picker can keep it with the color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

/// One of the three HSV axes a gradient bar can vary along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HsbComponent {
    Hue,
    Saturation,
    Brightness,
}

impl HsbComponent {
    /// All components in index order.
    pub const ALL: [HsbComponent; 3] = [
        HsbComponent::Hue,
        HsbComponent::Saturation,
        HsbComponent::Brightness,
    ];

    /// Position of this component in an `[h, s, v]` triple.
    pub fn index(self) -> usize {
        match self {
            HsbComponent::Hue => 0,
            HsbComponent::Saturation => 1,
            HsbComponent::Brightness => 2,
        }
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            HsbComponent::Hue => "hue",
            HsbComponent::Saturation => "saturation",
            HsbComponent::Brightness => "brightness",
        }
    }
}

/// Clamps to [0, 1], mapping NaN to 0.
fn clamp_unit(c: f64) -> f64 {
    if c.is_nan() {
        0.0
    } else {
        c.clamp(0.0, 1.0)
    }
}

/// Wraps a hue into [0, 360). Non-finite hues become 0.
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl Hsv {
    /// Creates an opaque color, wrapping the hue and clamping `s` and `v`.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self::with_alpha(h, s, v, 1.0)
    }

    /// Creates a color with explicit alpha, wrapping the hue and clamping the rest.
    pub fn with_alpha(h: f64, s: f64, v: f64, a: f64) -> Self {
        Hsv {
            h: normalize_hue(h),
            s: clamp_unit(s),
            v: clamp_unit(v),
            a: clamp_unit(a),
        }
    }

    /// Returns the same color with the hue rounded to a whole degree.
    pub fn rounded(self) -> Self {
        Hsv {
            h: normalize_hue(self.h.round()),
            ..self
        }
    }

    /// The fully saturated, full-value RGB for this color's hue.
    pub fn hue_rgb(self) -> Rgb {
        let (r, g, b) = hue_base(self.h);
        Rgb { r, g, b }
    }

    /// Converts to RGB. See [`hsv_to_rgb`].
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self)
    }

    /// Reads one component normalized to [0, 1] (hue divided by 360).
    pub fn component(self, component: HsbComponent) -> f64 {
        match component {
            HsbComponent::Hue => self.h / 360.0,
            HsbComponent::Saturation => self.s,
            HsbComponent::Brightness => self.v,
        }
    }

    /// Returns a copy with one component replaced by a normalized value.
    ///
    /// A normalized hue of 1.0 is kept as 360 degrees so a hue slider
    /// dragged to its right end stays there.
    pub fn with_component(self, component: HsbComponent, value: f64) -> Self {
        let value = clamp_unit(value);
        match component {
            HsbComponent::Hue => Hsv {
                h: value * 360.0,
                ..self
            },
            HsbComponent::Saturation => Hsv { s: value, ..self },
            HsbComponent::Brightness => Hsv { v: value, ..self },
        }
    }
}

impl Rgb {
    /// Creates a color with each channel clamped to [0, 1].
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
        }
    }

    /// Parses exactly six hex digits. See [`hex_to_rgb`].
    pub fn from_hex(hex: &str) -> Result<Rgb, PickerError> {
        hex_to_rgb(hex)
    }

    /// Formats as six lowercase hex digits. See [`rgb_to_hex`].
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// Converts to HSV without any hue preservation.
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self, false, 0.0, 0.0)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let hex = normalize_hex(&s).map_err(serde::de::Error::custom)?;
        hex_to_rgb(&hex).map_err(serde::de::Error::custom)
    }
}

/// Base (r, g, b) for a hue from the 60-degree sector table.
///
/// A hue of exactly 360 lands in the last sector and yields red, same as 0.
fn hue_base(h: f64) -> (f64, f64, f64) {
    let h_prime = h / 60.0;
    let x = 1.0 - ((h_prime % 2.0) - 1.0).abs();

    if h_prime < 1.0 {
        (1.0, x, 0.0)
    } else if h_prime < 2.0 {
        (x, 1.0, 0.0)
    } else if h_prime < 3.0 {
        (0.0, 1.0, x)
    } else if h_prime < 4.0 {
        (0.0, x, 1.0)
    } else if h_prime < 5.0 {
        (x, 0.0, 1.0)
    } else {
        (1.0, 0.0, x)
    }
}

/// Converts HSV to RGB.
///
/// Picks the base tuple for the hue's sector, then scales by chroma
/// (`v * s`) and lifts by `v - chroma`. The hue wraps into [0, 360) first, so
/// -30 and 330 give the same color. Output channels are clamped to [0, 1].
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let (r, g, b) = hue_base(normalize_hue(hsv.h));
    let s = clamp_unit(hsv.s);
    let v = clamp_unit(hsv.v);
    let c = v * s;
    let m = v - c;
    Rgb::new(r * c + m, g * c + m, b * c + m)
}

/// Converts RGB to HSV.
///
/// With `preserve_hue` unset, black gets saturation 0 and every achromatic
/// color gets hue 0. With it set, `prior_saturation` survives black,
/// `prior_hue` survives achromatic colors, and a prior hue of 360 is kept
/// rather than snapping to 0 when the new color is red. That is the only way
/// a hue of exactly 360 leaves this function; it denotes the same color as 0.
///
/// The returned alpha is always 1.
pub fn rgb_to_hsv(rgb: Rgb, preserve_hue: bool, prior_hue: f64, prior_saturation: f64) -> Hsv {
    let r = clamp_unit(rgb.r);
    let g = clamp_unit(rgb.g);
    let b = clamp_unit(rgb.b);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let v = max;

    let sat = if max != 0.0 { (max - min) / max } else { 0.0 };
    let s = if max != 0.0 {
        sat
    } else if preserve_hue {
        clamp_unit(prior_saturation)
    } else {
        0.0
    };

    let prior_hue = if prior_hue.is_finite() {
        prior_hue.clamp(0.0, 360.0)
    } else {
        0.0
    };

    let h = if sat == 0.0 {
        if preserve_hue {
            prior_hue
        } else {
            0.0
        }
    } else {
        let delta = max - min;
        let mut hue = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        hue /= 6.0;
        if hue < 0.0 {
            hue += 1.0;
        }

        // 0.0 and 1.0 are both red
        if preserve_hue && (hue - prior_hue / 360.0).abs() == 1.0 {
            prior_hue
        } else {
            normalize_hue(hue * 360.0)
        }
    };

    Hsv { h, s, v, a: 1.0 }
}

/// Quantizes a [0, 1] channel to 0..=255 with round-to-nearest.
fn channel_to_byte(c: f64) -> u8 {
    (clamp_unit(c) * 255.0).round() as u8
}

/// Formats a color as six lowercase hex digits, `rrggbb`, with no `#`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    let r = channel_to_byte(rgb.r);
    let g = channel_to_byte(rgb.g);
    let b = channel_to_byte(rgb.b);
    format!("{r:02x}{g:02x}{b:02x}")
}

/// Checks that `hex` is exactly six ASCII hex digits.
fn check_hex_digits(hex: &str) -> Result<(), String> {
    if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(format!("non-hex character '{bad}'"));
    }
    if hex.len() != 6 {
        return Err(format!("expected 6 hex digits, got {}", hex.len()));
    }
    Ok(())
}

/// Parses exactly six hex digits (either case) into a color.
///
/// A leading `#` or 3-digit shorthand is not accepted here; run the input
/// through [`normalize_hex`] first. Returns `PickerError::InvalidFormat` on
/// any other length or on a non-hex character.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, PickerError> {
    check_hex_digits(hex).map_err(|reason| PickerError::invalid_format(hex, reason))?;

    let channel = |range: std::ops::Range<usize>| -> Result<f64, PickerError> {
        u8::from_str_radix(&hex[range], 16)
            .map(|byte| byte as f64 / 255.0)
            .map_err(|e| PickerError::invalid_format(hex, e.to_string()))
    };

    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Normalizes user-typed hex into the form [`hex_to_rgb`] accepts.
///
/// Trims whitespace, strips one leading `#`, expands `rgb` shorthand to
/// `rrggbb`, and lowercases. Fails with `PickerError::InvalidFormat` if the
/// result is not six hex digits.
pub fn normalize_hex(input: &str) -> Result<String, PickerError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let expanded: String = if digits.len() == 3 && digits.is_ascii() {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    let lower = expanded.to_ascii_lowercase();

    check_hex_digits(&lower).map_err(|reason| PickerError::invalid_format(input, reason))?;
    Ok(lower)
}
