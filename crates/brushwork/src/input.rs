//! Pointer input normalization
//!
//! Mouse and touch events arrive with client (viewport) coordinates; the
//! renderer works in surface-local coordinates. This module maps both
//! device kinds into a single `(x, y)` position relative to the surface's
//! on-screen origin.

use glam::Vec2;

/// On-screen origin of the paint surface, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
}

/// A raw pointer coordinate source.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerSource {
    Mouse { client_x: f32, client_y: f32 },
    /// Active touch points; the first one drives the stroke.
    Touch { touches: Vec<(f32, f32)> },
}

impl PointerSource {
    /// Resolve to a surface-local position. Returns None for a touch
    /// event with no active touches.
    pub fn surface_position(&self, rect: SurfaceRect) -> Option<Vec2> {
        match self {
            PointerSource::Mouse { client_x, client_y } => {
                Some(Vec2::new(client_x - rect.left, client_y - rect.top))
            }
            PointerSource::Touch { touches } => touches
                .first()
                .map(|&(x, y)| Vec2::new(x - rect.left, y - rect.top)),
        }
    }
}

/// Stroke phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// mousedown / touchstart
    Down,
    /// mousemove / touchmove
    Move,
    /// mouseup / touchend
    Up,
    /// mouseleave; ends the stroke like Up
    Leave,
}

/// A normalized pointer event for hosts forwarding raw input.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub source: PointerSource,
}

impl PointerEvent {
    pub fn mouse(phase: PointerPhase, client_x: f32, client_y: f32) -> Self {
        Self {
            phase,
            source: PointerSource::Mouse { client_x, client_y },
        }
    }

    pub fn touch(phase: PointerPhase, touches: Vec<(f32, f32)>) -> Self {
        Self {
            phase,
            source: PointerSource::Touch { touches },
        }
    }
}
