//! Brush stroke renderer
//!
//! Ties the pieces together the way a paint surface is actually driven:
//! 1. Pointer input comes in via `begin_stroke`, `stroke_to`, `end_stroke`
//!    (or raw events via [`BrushRenderer::handle_pointer`])
//! 2. The stroke brush interpolates placements along the pointer path
//! 3. Each placement composites a cached tinted stamp with per-stamp jitter
//! 4. The surface lifecycle (resize/clear/color changes) keeps drawn
//!    content and the practice guide consistent
//!
//! All state is owned by the renderer instance; multiple independent
//! surfaces can coexist, and a fixed seed makes a stroke sequence
//! reproducible.

mod lifecycle;
mod stroke;

use serde::{Deserialize, Serialize};

use crate::brush::StrokeBrush;
use crate::color::Color;
use crate::constants::{DEFAULT_BRUSH_SIZE, DEFAULT_RNG_SEED};
use crate::input::{PointerEvent, PointerPhase, SurfaceRect};
use crate::rng::StampRng;
use crate::stamp::{GrainStyle, StampCache};
use crate::surface::CanvasSurface;

/// Renderer configuration, loadable from JSON by hosts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrushConfig {
    /// Base brush diameter in pixels
    pub base_size: u32,
    /// Initial brush color
    pub color: Color,
    /// Stamp grain path
    pub grain: GrainStyle,
    /// Seed for jitter; a fixed default keeps behavior reproducible
    pub seed: Option<u32>,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            base_size: DEFAULT_BRUSH_SIZE,
            color: Color::PINK,
            grain: GrainStyle::default(),
            seed: None,
        }
    }
}

/// A complete brush renderer over one raster surface.
///
/// The surface starts at the given dimensions but hosts should call
/// [`BrushRenderer::resize_to_container`] once layout has settled (and on
/// every container resize after that); the practice guide is first drawn
/// there.
pub struct BrushRenderer {
    /// The paintable surface
    pub surface: CanvasSurface,
    pub(crate) brush: StrokeBrush,
    pub(crate) cache: StampCache,
    pub(crate) rng: StampRng,
    pub(crate) color: Color,
    pub(crate) grain: GrainStyle,
    pub(crate) guide_drawn: bool,
}

impl BrushRenderer {
    /// Create a renderer with default configuration.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, BrushConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: BrushConfig) -> Self {
        Self {
            surface: CanvasSurface::new(width, height),
            brush: StrokeBrush::new(config.base_size),
            cache: StampCache::new(),
            rng: StampRng::new(config.seed.unwrap_or(DEFAULT_RNG_SEED)),
            color: config.color,
            grain: config.grain,
            guide_drawn: false,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn brush(&self) -> &StrokeBrush {
        &self.brush
    }

    pub fn stamp_cache(&self) -> &StampCache {
        &self.cache
    }

    /// Whether the practice guide has been drawn since the last clear.
    pub fn guide_drawn(&self) -> bool {
        self.guide_drawn
    }

    pub fn set_base_size(&mut self, size: u32) {
        self.brush.set_base_size(size);
    }

    /// Dispatch a raw pointer event. Positions are normalized against the
    /// surface's on-screen origin; touch events without touches are
    /// ignored. Leave ends the stroke like Up.
    pub fn handle_pointer(&mut self, event: &PointerEvent, rect: SurfaceRect) {
        match event.phase {
            PointerPhase::Down => {
                if let Some(pos) = event.source.surface_position(rect) {
                    self.begin_stroke(pos);
                }
            }
            PointerPhase::Move => {
                if let Some(pos) = event.source.surface_position(rect) {
                    self.stroke_to(pos);
                }
            }
            PointerPhase::Up | PointerPhase::Leave => self.end_stroke(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_renderer_creation() {
        let renderer = BrushRenderer::new(256, 256);
        assert_eq!(renderer.surface.width, 256);
        assert_eq!(renderer.surface.height, 256);
        assert_eq!(renderer.color(), Color::PINK);
        assert!(!renderer.guide_drawn());
        assert!(renderer.stamp_cache().is_empty());
    }

    #[test]
    fn test_stroke_paints_along_path() {
        let mut renderer = BrushRenderer::new(256, 256);

        renderer.begin_stroke(Vec2::new(50.0, 100.0));
        renderer.stroke_to(Vec2::new(200.0, 100.0));
        renderer.end_stroke();

        // Stamps landed on and between the endpoints.
        for x in [50, 125, 200] {
            assert!(
                renderer.surface.get_pixel(x, 100).unwrap()[3] > 0.0,
                "expected paint at x={}",
                x
            );
        }
        // Far corner untouched.
        assert_eq!(renderer.surface.get_pixel(5, 5), Some([0.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_stroke_state_machine() {
        let mut renderer = BrushRenderer::new(128, 128);

        renderer.begin_stroke(Vec2::new(64.0, 64.0));
        assert!(renderer.brush().is_painting());
        assert_eq!(renderer.brush().active_size(), 14);

        renderer.end_stroke();
        assert!(!renderer.brush().is_painting());
        assert_eq!(renderer.brush().active_size(), 24);
        assert_eq!(renderer.brush().last_pos(), None);
    }

    #[test]
    fn test_move_ignored_when_idle() {
        let mut renderer = BrushRenderer::new(128, 128);
        renderer.stroke_to(Vec2::new(64.0, 64.0));
        assert!(renderer.stamp_cache().is_empty());
        assert_eq!(
            renderer.surface.get_pixel(64, 64),
            Some([0.0, 0.0, 0.0, 0.0])
        );
    }

    #[test]
    fn test_handle_pointer_mouse_sequence() {
        let mut renderer = BrushRenderer::new(256, 256);
        let rect = SurfaceRect {
            left: 10.0,
            top: 20.0,
        };

        renderer.handle_pointer(&PointerEvent::mouse(PointerPhase::Down, 60.0, 120.0), rect);
        assert!(renderer.brush().is_painting());
        assert_eq!(renderer.brush().last_pos(), Some(Vec2::new(50.0, 100.0)));

        renderer.handle_pointer(&PointerEvent::mouse(PointerPhase::Move, 160.0, 120.0), rect);
        assert_eq!(renderer.brush().last_pos(), Some(Vec2::new(150.0, 100.0)));

        renderer.handle_pointer(&PointerEvent::mouse(PointerPhase::Leave, 0.0, 0.0), rect);
        assert!(!renderer.brush().is_painting());
    }

    #[test]
    fn test_handle_pointer_empty_touch_ignored() {
        let mut renderer = BrushRenderer::new(256, 256);
        let rect = SurfaceRect::default();

        renderer.handle_pointer(&PointerEvent::touch(PointerPhase::Down, vec![]), rect);
        assert!(!renderer.brush().is_painting());
    }

    #[test]
    fn test_identical_seeds_render_identically() {
        let config = BrushConfig {
            seed: Some(1234),
            ..Default::default()
        };
        let mut a = BrushRenderer::with_config(128, 128, config.clone());
        let mut b = BrushRenderer::with_config(128, 128, config);

        for renderer in [&mut a, &mut b] {
            renderer.begin_stroke(Vec2::new(20.0, 20.0));
            renderer.stroke_to(Vec2::new(100.0, 90.0));
            renderer.end_stroke();
        }

        assert_eq!(a.surface.as_bytes(), b.surface.as_bytes());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = BrushConfig {
            base_size: 32,
            color: Color::rgb(0x22, 0xd3, 0xee),
            grain: GrainStyle::Streaks,
            seed: Some(7),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: BrushConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.base_size, 32);
        assert_eq!(back.color, config.color);
        assert_eq!(back.grain, GrainStyle::Streaks);
        assert_eq!(back.seed, Some(7));
    }
}
