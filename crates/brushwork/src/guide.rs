//! Practice guide - a fixed five-point star outline
//!
//! The guide is a reference shape for users to paint inside. It is
//! derived from the current surface dimensions, redrawn on clear and on
//! first sizing, and is not part of the paintable content.

use glam::Vec2;

use crate::color::Color;
use crate::constants::{
    GUIDE_INNER_RATIO, GUIDE_LINE_RATIO, GUIDE_MIN_INNER, GUIDE_MIN_LINE, GUIDE_MIN_OUTER,
    GUIDE_OUTER_RATIO, GUIDE_POINTS,
};
use crate::surface::CanvasSurface;

/// Star outline geometry derived from surface dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeGuide {
    pub center: Vec2,
    pub outer_radius: u32,
    pub inner_radius: u32,
    pub line_width: u32,
}

impl PracticeGuide {
    /// Compute the guide for a surface of the given dimensions.
    pub fn for_surface(width: u32, height: u32) -> Self {
        let center = Vec2::new((width / 2) as f32, (height / 2) as f32);
        let outer_radius = ((width.min(height) as f32 * GUIDE_OUTER_RATIO).floor() as u32)
            .max(GUIDE_MIN_OUTER);
        let inner_radius =
            ((outer_radius as f32 * GUIDE_INNER_RATIO).floor() as u32).max(GUIDE_MIN_INNER);
        let line_width =
            ((outer_radius as f32 * GUIDE_LINE_RATIO).floor() as u32).max(GUIDE_MIN_LINE);

        Self {
            center,
            outer_radius,
            inner_radius,
            line_width,
        }
    }

    /// The star's vertices: outer and inner radius alternating at equal
    /// angular steps, starting pointing straight up.
    pub fn vertices(&self) -> Vec<Vec2> {
        let step = std::f32::consts::PI / GUIDE_POINTS as f32;
        let start = -std::f32::consts::FRAC_PI_2;

        (0..GUIDE_POINTS * 2)
            .map(|i| {
                let r = if i % 2 == 0 {
                    self.outer_radius as f32
                } else {
                    self.inner_radius as f32
                };
                let angle = start + i as f32 * step;
                self.center + Vec2::new(angle.cos() * r, angle.sin() * r)
            })
            .collect()
    }

    /// Stroke the closed outline onto the surface in solid black.
    pub fn draw(&self, surface: &mut CanvasSurface) {
        surface.stroke_polygon(
            &self.vertices(),
            self.line_width as f32,
            Color::BLACK.to_rgba_f32(),
        );
    }
}
