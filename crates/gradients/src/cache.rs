//! Memoization for the generated gradients.
//!
//! Building the square costs 65536 pixels, so it is rebuilt only when the
//! hue changes, never on saturation or brightness drags. Bars are keyed by
//! their component and the two components they hold fixed; moving along the
//! bar's own axis reuses the cached image.

use std::sync::Arc;

use colorpick_core::HsbComponent;

use crate::bar::generate_bar;
use crate::bitmap::GradientImage;
use crate::square::generate_square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BarKey([u64; 3]);

impl BarKey {
    fn new(component: HsbComponent, fixed: [f64; 3]) -> Self {
        let mut bits = fixed.map(f64::to_bits);
        bits[component.index()] = 0;
        BarKey(bits)
    }
}

/// Owned cache of the last square and the last bar per component.
#[derive(Debug, Default)]
pub struct GradientCache {
    square: Option<(u64, Arc<GradientImage>)>,
    bars: [Option<(BarKey, Arc<GradientImage>)>; 3],
    square_builds: usize,
    bar_builds: usize,
}

impl GradientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The square for `hue`, rebuilt only if `hue` differs from the last call.
    pub fn square(&mut self, hue: f64) -> Arc<GradientImage> {
        let key = hue.to_bits();
        if let Some((cached, image)) = &self.square {
            if *cached == key {
                return Arc::clone(image);
            }
        }
        log::debug!("regenerating saturation/brightness square for hue {hue}");
        let image = Arc::new(generate_square(hue));
        self.square = Some((key, Arc::clone(&image)));
        self.square_builds += 1;
        image
    }

    /// The bar for `component`, rebuilt only if the fixed components changed.
    pub fn bar(&mut self, component: HsbComponent, fixed: [f64; 3]) -> Arc<GradientImage> {
        let key = BarKey::new(component, fixed);
        let slot = &mut self.bars[component.index()];
        if let Some((cached, image)) = slot {
            if *cached == key {
                return Arc::clone(image);
            }
        }
        log::debug!("regenerating {} bar for {fixed:?}", component.name());
        let image = Arc::new(generate_bar(component, fixed));
        *slot = Some((key, Arc::clone(&image)));
        self.bar_builds += 1;
        image
    }

    /// Drops every cached image; the next request rebuilds.
    pub fn invalidate(&mut self) {
        self.square = None;
        self.bars = [None, None, None];
    }

    /// How many times a square has been generated.
    pub fn square_builds(&self) -> usize {
        self.square_builds
    }

    /// How many times any bar has been generated.
    pub fn bar_builds(&self) -> usize {
        self.bar_builds
    }
}
