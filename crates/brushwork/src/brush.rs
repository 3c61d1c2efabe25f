//! Stroke interpolation - evenly spaced stamp placements along a pointer path
//!
//! Pointer events arrive at whatever rate the host samples them; fast
//! motion would leave visible gaps if each event placed a single stamp.
//! [`StrokeBrush`] interpolates between consecutive positions so stamp
//! density depends on distance, not sampling rate.

use glam::Vec2;
use tracing::debug;

use crate::constants::{
    ACTIVE_SHRINK, MIN_ACTIVE_BRUSH_SIZE, MIN_STAMP_SPACING, STAMP_SPACING_FACTOR,
};

/// Stroke state: whether painting is active, the base and active brush
/// sizes, and the last pointer position.
///
/// The brush shrinks to 60% of its base size while a stroke is held and
/// is restored exactly to the base size on release.
#[derive(Debug, Clone)]
pub struct StrokeBrush {
    base_size: u32,
    active_size: u32,
    last_pos: Option<Vec2>,
    painting: bool,
}

impl StrokeBrush {
    pub fn new(base_size: u32) -> Self {
        Self {
            base_size,
            active_size: base_size,
            last_pos: None,
            painting: false,
        }
    }

    pub fn base_size(&self) -> u32 {
        self.base_size
    }

    /// Size used for stamps right now (shrunk while painting).
    pub fn active_size(&self) -> u32 {
        self.active_size
    }

    pub fn is_painting(&self) -> bool {
        self.painting
    }

    pub fn last_pos(&self) -> Option<Vec2> {
        self.last_pos
    }

    /// Change the base brush size. Takes effect on the next stroke; the
    /// active size follows immediately when not painting.
    pub fn set_base_size(&mut self, size: u32) {
        self.base_size = size;
        if !self.painting {
            self.active_size = size;
        }
    }

    /// Spacing between interpolated stamps for the current active size.
    pub fn spacing(&self) -> u32 {
        ((self.active_size as f32 * STAMP_SPACING_FACTOR).floor() as u32).max(MIN_STAMP_SPACING)
    }

    /// Begin a stroke at `pos`. Returns the immediate first placement.
    pub fn begin_stroke(&mut self, pos: Vec2) -> Vec2 {
        self.painting = true;
        self.active_size =
            ((self.base_size as f32 * ACTIVE_SHRINK).floor() as u32).max(MIN_ACTIVE_BRUSH_SIZE);
        self.last_pos = Some(pos);
        debug!(
            "StrokeBrush::begin_stroke: pos=({:.1}, {:.1}), active_size={}",
            pos.x, pos.y, self.active_size
        );
        pos
    }

    /// Continue the stroke to `pos`, returning evenly spaced placements
    /// from the previous position to `pos` inclusive of both ends.
    ///
    /// Returns nothing when no stroke is active. If the previous position
    /// was somehow lost, places a single stamp at `pos` and re-anchors.
    pub fn stroke_to(&mut self, pos: Vec2) -> Vec<Vec2> {
        if !self.painting {
            debug!("StrokeBrush::stroke_to: no active stroke, ignoring");
            return Vec::new();
        }

        let Some(last) = self.last_pos else {
            self.last_pos = Some(pos);
            return vec![pos];
        };

        let delta = pos - last;
        let dist = delta.length();
        let spacing = self.spacing();
        let steps = ((dist / spacing as f32).floor() as u32).max(1);

        let mut placements = Vec::with_capacity(steps as usize + 1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            placements.push(last + delta * t);
        }

        debug!(
            "StrokeBrush::stroke_to: {} placements from ({:.1}, {:.1}) to ({:.1}, {:.1})",
            placements.len(),
            last.x,
            last.y,
            pos.x,
            pos.y
        );
        self.last_pos = Some(pos);
        placements
    }

    /// End the stroke: clears the anchor position and restores the brush
    /// to its base size.
    pub fn end_stroke(&mut self) {
        self.painting = false;
        self.last_pos = None;
        self.active_size = self.base_size;
    }
}
