//! Per-session picker state.
//!
//! A [`PickerSession`] owns the current color, the "previous" swatch color
//! and the undo history for one picking session. Views that need them get a
//! reference to the session instead of looking up a shared instance.

use crate::color::{hex_to_rgb, normalize_hex, rgb_to_hsv, HsbComponent, Hsv, Rgb};
use crate::config::SessionConfig;
use crate::error::PickerError;
use crate::history::ColorHistory;

/// Current color, previous color and history for one picking session.
#[derive(Debug, Clone)]
pub struct PickerSession {
    color: Hsv,
    previous: Hsv,
    history: ColorHistory<Hsv>,
}

impl PickerSession {
    /// Starts a session at `initial`, which also seeds the history and the
    /// previous swatch.
    pub fn new(initial: Hsv) -> Self {
        Self {
            color: initial,
            previous: initial,
            history: ColorHistory::new(initial),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.initial_hsv())
    }

    pub fn color(&self) -> Hsv {
        self.color
    }

    pub fn rgb(&self) -> Rgb {
        self.color.to_rgb()
    }

    pub fn hex(&self) -> String {
        self.rgb().to_hex()
    }

    /// The color shown in the "previous" half of the swatch.
    pub fn previous(&self) -> Hsv {
        self.previous
    }

    pub fn history(&self) -> &ColorHistory<Hsv> {
        &self.history
    }

    /// Replaces the current color without committing it.
    pub fn set_color(&mut self, color: Hsv) {
        log::debug!("set color {color:?}");
        self.color = color;
    }

    /// Sets the color from RGB, e.g. after an edit in the RGB fields.
    ///
    /// The current hue and saturation are passed as priors so moving to a
    /// gray or to black leaves them where they were. Alpha is kept.
    pub fn set_rgb(&mut self, rgb: Rgb) {
        let hsv = rgb_to_hsv(rgb, true, self.color.h, self.color.s);
        self.set_color(Hsv {
            a: self.color.a,
            ..hsv
        });
    }

    /// Sets the color from user-typed hex (`#f80`, `FF8800`, ...).
    ///
    /// On `PickerError::InvalidFormat` the current color is left untouched.
    pub fn set_hex(&mut self, input: &str) -> Result<(), PickerError> {
        let hex = normalize_hex(input)?;
        let rgb = hex_to_rgb(&hex)?;
        self.set_rgb(rgb);
        Ok(())
    }

    /// Sets one component from a normalized [0, 1] value, as a bar drag does.
    pub fn set_component(&mut self, component: HsbComponent, value: f64) {
        let color = self.color.with_component(component, value);
        self.set_color(color);
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.color.a = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
    }

    /// Records the current color in the history.
    pub fn commit(&mut self) {
        self.history.commit(self.color);
    }

    /// Restores the previous history entry and returns it.
    pub fn undo(&mut self) -> Hsv {
        self.color = self.history.undo();
        self.color
    }

    /// Restores the next history entry and returns it.
    pub fn redo(&mut self) -> Hsv {
        self.color = self.history.redo();
        self.color
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Copies the current color into the previous swatch.
    pub fn mark_previous(&mut self) {
        self.previous = self.color;
    }
}
