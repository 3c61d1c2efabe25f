//! Stamp factory - procedural brush stamps and the tinted stamp cache
//!
//! A stroke is built from many small "stamps": soft-edged circular alpha
//! masks with per-pixel grain, tinted to the current color. Tinted stamps
//! are cached per `(color, size)` so repeated strokes reuse the same image.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Color;
use crate::constants::{GRAIN_ALPHA_MIN, GRAIN_ALPHA_SPAN, STREAK_COUNT};
use crate::rng::StampRng;

/// How bristle grain is applied to a stamp.
///
/// `PerPixel` is the primary path. `Streaks` approximates the grain with
/// sparse vertical streaks and exists for rendering targets that cannot
/// hand out their pixel buffer; its visual fidelity against the primary
/// path is unverified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GrainStyle {
    #[default]
    PerPixel,
    Streaks,
}

/// An immutable square alpha mask for one brush application.
///
/// Opaque at the center, transparent at the edge, perturbed with random
/// grain so strokes read as bristles rather than airbrush.
#[derive(Debug, Clone)]
pub struct BrushStamp {
    size: u32,
    alpha: Vec<f32>,
}

impl BrushStamp {
    /// Generate a `size x size` stamp. Structure (radial falloff) is
    /// deterministic; texture comes from `rng`.
    pub fn generate(size: u32, style: GrainStyle, rng: &mut StampRng) -> Self {
        let size = size.max(1);
        let mut stamp = Self {
            size,
            alpha: vec![0.0; (size as usize) * (size as usize)],
        };

        stamp.paint_radial_falloff();
        match style {
            GrainStyle::PerPixel => stamp.grain_per_pixel(rng),
            GrainStyle::Streaks => stamp.grain_streaks(rng),
        }

        debug!("BrushStamp::generate: size={}, style={:?}", size, style);
        stamp
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Alpha at the given pixel, 0.0 if out of bounds.
    pub fn alpha_at(&self, x: u32, y: u32) -> f32 {
        if x >= self.size || y >= self.size {
            return 0.0;
        }
        self.alpha[(y as usize) * (self.size as usize) + (x as usize)]
    }

    /// Soft radial falloff: 1.0 at the center, 0.9 at 60% radius,
    /// 0.0 at the edge. Sampled at pixel centers.
    fn paint_radial_falloff(&mut self) {
        let center = self.size as f32 / 2.0;
        let radius = self.size as f32 / 2.0;

        for y in 0..self.size {
            for x in 0..self.size {
                let dx = (x as f32 + 0.5) - center;
                let dy = (y as f32 + 0.5) - center;
                let t = (dx * dx + dy * dy).sqrt() / radius;

                let a = if t <= 0.6 {
                    1.0 - (t / 0.6) * 0.1
                } else if t < 1.0 {
                    0.9 * (1.0 - (t - 0.6) / 0.4)
                } else {
                    0.0
                };

                let index = (y as usize) * (self.size as usize) + (x as usize);
                self.alpha[index] = a;
            }
        }
    }

    /// Multiply every pixel's alpha by a random factor to fake bristle
    /// grain. Factors above 1.0 saturate at full opacity.
    fn grain_per_pixel(&mut self, rng: &mut StampRng) {
        for a in &mut self.alpha {
            let factor = rng.range(GRAIN_ALPHA_MIN, GRAIN_ALPHA_MIN + GRAIN_ALPHA_SPAN);
            *a = (*a * factor).min(1.0);
        }
    }

    /// Degraded grain: short vertical semi-transparent streaks composited
    /// over the falloff.
    fn grain_streaks(&mut self, rng: &mut StampRng) {
        let size = self.size as f32;
        for _ in 0..STREAK_COUNT {
            let x0 = rng.next_f32() * size;
            let y0 = rng.next_f32() * size;
            let width = 1.0 + rng.next_f32() * 3.0;
            let height = size * 0.6;
            let streak_alpha = 0.08 + rng.next_f32() * 0.12;

            let x_min = x0.floor().max(0.0) as u32;
            let y_min = y0.floor().max(0.0) as u32;
            let x_max = ((x0 + width).ceil() as u32).min(self.size);
            let y_max = ((y0 + height).ceil() as u32).min(self.size);

            for y in y_min..y_max {
                for x in x_min..x_max {
                    let index = (y as usize) * (self.size as usize) + (x as usize);
                    let a = self.alpha[index];
                    self.alpha[index] = a + streak_alpha * (1.0 - a);
                }
            }
        }
    }
}

/// A brush stamp tinted with a solid color.
///
/// Source-in compositing: wherever the mask has alpha, the pixel takes the
/// fill color with the mask's alpha; everywhere else it is transparent.
#[derive(Debug, Clone)]
pub struct ColoredStamp {
    size: u32,
    color: Color,
    pixels: Vec<[f32; 4]>,
}

impl ColoredStamp {
    pub fn tint(stamp: &BrushStamp, color: Color) -> Self {
        let fill = color.to_rgba_f32();
        let pixels = stamp
            .alpha
            .iter()
            .map(|&a| {
                if a > 0.0 {
                    [fill[0], fill[1], fill[2], fill[3] * a]
                } else {
                    [0.0, 0.0, 0.0, 0.0]
                }
            })
            .collect();

        Self {
            size: stamp.size,
            color,
            pixels,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Pixel at the given coordinates, transparent if out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        if x >= self.size || y >= self.size {
            return [0.0, 0.0, 0.0, 0.0];
        }
        self.pixels[(y as usize) * (self.size as usize) + (x as usize)]
    }
}

/// Cache of tinted stamps keyed by `(color, size)`.
///
/// Grows without bound except for explicit invalidation via
/// [`StampCache::purge_color`]. Entries are shared via `Arc` so repeated
/// lookups return the same image.
#[derive(Debug, Default)]
pub struct StampCache {
    entries: HashMap<(Color, u32), Arc<ColoredStamp>>,
}

impl StampCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached stamp for `(color, size)`, generating and tinting
    /// one on a miss.
    pub fn get_or_tint(
        &mut self,
        color: Color,
        size: u32,
        style: GrainStyle,
        rng: &mut StampRng,
    ) -> Arc<ColoredStamp> {
        if let Some(stamp) = self.entries.get(&(color, size)) {
            return Arc::clone(stamp);
        }

        debug!("StampCache: miss for ({}, {}), tinting", color, size);
        let base = BrushStamp::generate(size, style, rng);
        let stamp = Arc::new(ColoredStamp::tint(&base, color));
        self.entries.insert((color, size), Arc::clone(&stamp));
        stamp
    }

    /// Remove every entry tinted with `color`, forcing re-generation on
    /// the next lookup.
    pub fn purge_color(&mut self, color: Color) {
        self.entries.retain(|(c, _), _| *c != color);
    }

    pub fn contains(&self, color: Color, size: u32) -> bool {
        self.entries.contains_key(&(color, size))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
