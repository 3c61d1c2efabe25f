//! Surface lifecycle for the brush renderer - resize, clear, color changes

use tracing::debug;

use crate::color::Color;
use crate::guide::PracticeGuide;

use super::BrushRenderer;

impl BrushRenderer {
    /// Resize the surface to its container's content dimensions,
    /// preserving drawn content.
    ///
    /// Rapid resize bursts are fine: each call starts from the surface's
    /// current content, so redundant cycles are idempotent. The practice
    /// guide is drawn here if it has not been drawn since the last clear.
    pub fn resize_to_container(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        if !self.guide_drawn {
            self.draw_practice_guide();
            self.guide_drawn = true;
        }
    }

    /// Switch the active brush color.
    ///
    /// Purges any cache entry tinted with the new color (entries should
    /// not exist yet for an unused color, but stale matches are swept
    /// regardless), then pre-tints the stamp for the base size so the
    /// first stroke does not pay generation latency.
    pub fn change_color(&mut self, color: Color) {
        debug!("change_color: {} -> {}", self.color, color);
        self.color = color;
        self.cache.purge_color(color);
        let base = self.brush.base_size();
        self.cache.get_or_tint(color, base, self.grain, &mut self.rng);
    }

    /// Erase all pixel content, then redraw the practice guide.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.draw_practice_guide();
        self.guide_drawn = true;
    }

    /// Stroke the practice guide star for the current surface dimensions.
    pub fn draw_practice_guide(&mut self) {
        if self.surface.width == 0 || self.surface.height == 0 {
            return;
        }
        let guide = PracticeGuide::for_surface(self.surface.width, self.surface.height);
        guide.draw(&mut self.surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::renderer::BrushConfig;

    fn seeded(width: u32, height: u32) -> BrushRenderer {
        BrushRenderer::with_config(
            width,
            height,
            BrushConfig {
                seed: Some(99),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_first_resize_draws_guide() {
        let mut renderer = seeded(0, 0);
        assert!(!renderer.guide_drawn());

        renderer.resize_to_container(400, 300);
        assert!(renderer.guide_drawn());
        // Topmost star point: outer radius 75 above center (200, 150).
        assert!(renderer.surface.get_pixel(200, 75).unwrap()[3] > 0.0);
    }

    #[test]
    fn test_resize_preserves_painting() {
        let mut renderer = seeded(0, 0);
        renderer.resize_to_container(100, 100);

        renderer.begin_stroke(Vec2::new(10.0, 10.0));
        renderer.end_stroke();
        assert!(renderer.surface.get_pixel(10, 10).unwrap()[3] > 0.0);

        renderer.resize_to_container(200, 200);
        // Painted pixel persists at the proportionally mapped location.
        assert!(renderer.surface.get_pixel(20, 20).unwrap()[3] > 0.0);
    }

    #[test]
    fn test_resize_does_not_redraw_guide_twice() {
        let mut renderer = seeded(0, 0);
        renderer.resize_to_container(400, 300);
        let top_point = renderer.surface.get_pixel(200, 75).unwrap();

        // Same dimensions: content is copied 1:1 and the guide flag is
        // already set, so nothing darkens.
        renderer.resize_to_container(400, 300);
        let after = renderer.surface.get_pixel(200, 75).unwrap();
        assert_eq!(top_point, after);
    }

    #[test]
    fn test_clear_leaves_only_guide() {
        let mut renderer = seeded(400, 300);
        renderer.begin_stroke(Vec2::new(40.0, 40.0));
        renderer.stroke_to(Vec2::new(120.0, 40.0));
        renderer.end_stroke();

        renderer.clear();
        assert!(renderer.guide_drawn());
        // Paint is gone...
        assert_eq!(
            renderer.surface.get_pixel(40, 40),
            Some([0.0, 0.0, 0.0, 0.0])
        );
        // ...but the guide stroke is back.
        assert!(renderer.surface.get_pixel(200, 75).unwrap()[3] > 0.0);
    }

    #[test]
    fn test_change_color_pregenerates_one_entry() {
        let mut renderer = seeded(256, 256);
        let cyan = Color::rgb(0x22, 0xd3, 0xee);

        renderer.change_color(cyan);
        assert_eq!(renderer.color(), cyan);
        // Exactly one entry for the new color, at the base size.
        assert_eq!(renderer.stamp_cache().len(), 1);
        assert!(renderer.stamp_cache().contains(cyan, 24));
    }

    #[test]
    fn test_change_color_keeps_other_colors() {
        let mut renderer = seeded(256, 256);
        renderer.begin_stroke(Vec2::new(64.0, 64.0));
        renderer.end_stroke();
        assert!(renderer.stamp_cache().contains(Color::PINK, 14));

        renderer.change_color(Color::BLACK);
        assert!(renderer.stamp_cache().contains(Color::PINK, 14));
        assert!(renderer.stamp_cache().contains(Color::BLACK, 24));
        assert_eq!(renderer.stamp_cache().len(), 2);
    }

    #[test]
    fn test_change_color_purges_stale_entries() {
        let mut renderer = seeded(256, 256);
        let cyan = Color::rgb(0x22, 0xd3, 0xee);

        // Paint with cyan so entries for it exist, switch away and back.
        renderer.change_color(cyan);
        renderer.begin_stroke(Vec2::new(64.0, 64.0));
        renderer.end_stroke();
        renderer.change_color(Color::BLACK);
        renderer.change_color(cyan);

        // The stale cyan entries were swept; only the pre-tinted base
        // size remains.
        assert!(renderer.stamp_cache().contains(cyan, 24));
        assert!(!renderer.stamp_cache().contains(cyan, 14));
    }

    #[test]
    fn test_clear_on_empty_surface_does_not_panic() {
        let mut renderer = seeded(0, 0);
        renderer.clear();
        assert!(renderer.guide_drawn());
    }
}
