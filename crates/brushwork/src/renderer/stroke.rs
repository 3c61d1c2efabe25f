//! Stroke handling for the brush renderer

use glam::Vec2;
use tracing::debug;

use crate::constants::{
    ROTATION_JITTER, SCALE_JITTER, SMEAR_CHANCE, SMEAR_OPACITY, SMEAR_WIDTH_FACTOR, STAMP_OPACITY,
};

use super::BrushRenderer;

impl BrushRenderer {
    /// Begin a stroke at `pos` (pointer down).
    ///
    /// Shrinks the brush to its active size and stamps once immediately.
    pub fn begin_stroke(&mut self, pos: Vec2) {
        let placement = self.brush.begin_stroke(pos);
        let size = self.brush.active_size();
        self.stamp_at(placement, size);
    }

    /// Continue the stroke to `pos` (pointer move).
    ///
    /// Ignored while idle. Stamps every interpolated placement between
    /// the previous position and `pos`, and occasionally overlays a faint
    /// smear line along the segment.
    pub fn stroke_to(&mut self, pos: Vec2) {
        if !self.brush.is_painting() {
            debug!("stroke_to: no active stroke, ignoring");
            return;
        }

        let prev = self.brush.last_pos();
        let placements = self.brush.stroke_to(pos);
        let size = self.brush.active_size();
        for placement in placements {
            self.stamp_at(placement, size);
        }

        if let Some(prev) = prev {
            if self.rng.chance(SMEAR_CHANCE) {
                let width = (self.brush.base_size() as f32 * SMEAR_WIDTH_FACTOR).max(1.0);
                debug!(
                    "stroke_to: smear line ({:.1}, {:.1}) -> ({:.1}, {:.1}), width={:.1}",
                    prev.x, prev.y, pos.x, pos.y, width
                );
                self.surface
                    .draw_line(prev, pos, width, self.color.to_rgba_f32(), SMEAR_OPACITY);
            }
        }
    }

    /// End the stroke (pointer up or leave). Restores the base brush size.
    pub fn end_stroke(&mut self) {
        self.brush.end_stroke();
    }

    /// Place one stamp centered at `pos`.
    ///
    /// Each stamp gets independent rotation and scale jitter so identical
    /// paths never produce pixel-identical strokes (unless the seed is
    /// fixed and the sequence repeated from scratch).
    pub(crate) fn stamp_at(&mut self, pos: Vec2, size: u32) {
        let stamp = self.cache.get_or_tint(self.color, size, self.grain, &mut self.rng);

        let scale = 1.0 + (self.rng.next_f32() - 0.5) * 2.0 * SCALE_JITTER;
        let angle = (self.rng.next_f32() - 0.5) * 2.0 * ROTATION_JITTER;
        let draw_size = size as f32 * scale;

        self.surface
            .draw_stamp(&stamp, pos, draw_size, angle, STAMP_OPACITY);
    }
}
