//! CPU raster surface for painting - straight-alpha RGBA f32 storage

use glam::Vec2;
use tracing::debug;

use crate::stamp::ColoredStamp;

/// The paintable pixel buffer.
///
/// Pixels are `[r, g, b, a]` as f32 in row-major order. All drawing goes
/// through source-over blending; the surface starts fully transparent.
pub struct CanvasSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    pixels: Vec<[f32; 4]>,
}

impl CanvasSurface {
    /// Create a new surface with the given dimensions, fully transparent.
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![[0.0, 0.0, 0.0, 0.0]; pixel_count],
        }
    }

    /// Erase all pixel content back to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill([0.0, 0.0, 0.0, 0.0]);
    }

    /// Get a pixel at the given coordinates.
    /// Returns None if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(self.pixels[index])
    }

    /// Set a pixel at the given coordinates.
    /// Does nothing if coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index] = color;
    }

    /// Blend a color onto an existing pixel using alpha compositing.
    /// Formula: out = src * alpha + dst * (1 - alpha)
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: [f32; 4], opacity: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        let dst = self.pixels[index];

        let src_alpha = color[3] * opacity;
        let inv_src_alpha = 1.0 - src_alpha;

        self.pixels[index] = [
            color[0] * src_alpha + dst[0] * inv_src_alpha,
            color[1] * src_alpha + dst[1] * inv_src_alpha,
            color[2] * src_alpha + dst[2] * inv_src_alpha,
            src_alpha + dst[3] * inv_src_alpha,
        ];
    }

    /// Composite a tinted stamp centered at `center`, scaled to
    /// `draw_size` pixels and rotated by `angle` radians.
    ///
    /// Sampling is nearest-neighbor at pixel centers; the affected
    /// bounding box is clamped to the surface.
    pub fn draw_stamp(
        &mut self,
        stamp: &ColoredStamp,
        center: Vec2,
        draw_size: f32,
        angle: f32,
        opacity: f32,
    ) {
        if draw_size <= 0.0 || opacity <= 0.0 {
            return;
        }

        let half = draw_size / 2.0;
        let (sin_a, cos_a) = angle.sin_cos();
        // Bounding box of the rotated square
        let extent = half * (cos_a.abs() + sin_a.abs());

        let x_min = ((center.x - extent).floor().max(0.0) as u32).min(self.width);
        let y_min = ((center.y - extent).floor().max(0.0) as u32).min(self.height);
        let x_max = ((center.x + extent).ceil().max(0.0) as u32).min(self.width);
        let y_max = ((center.y + extent).ceil().max(0.0) as u32).min(self.height);
        if x_min >= x_max || y_min >= y_max {
            debug!("draw_stamp: stamp outside surface bounds");
            return;
        }

        let stamp_size = stamp.size() as f32;
        for py in y_min..y_max {
            for px in x_min..x_max {
                let dx = (px as f32 + 0.5) - center.x;
                let dy = (py as f32 + 0.5) - center.y;

                // Rotate into the stamp's local frame
                let local_x = dx * cos_a + dy * sin_a;
                let local_y = -dx * sin_a + dy * cos_a;
                if local_x.abs() > half || local_y.abs() > half {
                    continue;
                }

                let sx = ((local_x / draw_size + 0.5) * stamp_size) as u32;
                let sy = ((local_y / draw_size + 0.5) * stamp_size) as u32;
                let src = stamp.pixel(sx.min(stamp.size() - 1), sy.min(stamp.size() - 1));
                if src[3] <= 0.0 {
                    continue;
                }

                self.blend_pixel(px, py, src, opacity);
            }
        }
    }

    /// Draw a line segment of the given width with round caps.
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4], opacity: f32) {
        if width <= 0.0 || opacity <= 0.0 {
            return;
        }
        let half = width / 2.0;

        let x_min = ((from.x.min(to.x) - half).floor().max(0.0) as u32).min(self.width);
        let y_min = ((from.y.min(to.y) - half).floor().max(0.0) as u32).min(self.height);
        let x_max = ((from.x.max(to.x) + half).ceil().max(0.0) as u32).min(self.width);
        let y_max = ((from.y.max(to.y) + half).ceil().max(0.0) as u32).min(self.height);

        let seg = to - from;
        let seg_len_sq = seg.length_squared();

        for py in y_min..y_max {
            for px in x_min..x_max {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let t = if seg_len_sq > 0.0 {
                    ((p - from).dot(seg) / seg_len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let dist = (p - (from + seg * t)).length();
                if dist <= half {
                    self.blend_pixel(px, py, color, opacity);
                }
            }
        }
    }

    /// Stroke a closed polygon outline.
    pub fn stroke_polygon(&mut self, points: &[Vec2], width: f32, color: [f32; 4]) {
        if points.len() < 2 {
            return;
        }
        for i in 0..points.len() {
            let from = points[i];
            let to = points[(i + 1) % points.len()];
            self.draw_line(from, to, width, color, 1.0);
        }
    }

    /// Resize the surface, preserving prior drawing.
    ///
    /// The fresh buffer starts transparent (the clear-on-resize platform
    /// behavior, reproduced explicitly) and the previous contents are
    /// scaled into it with nearest-neighbor sampling.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        let prev = std::mem::replace(self, Self::new(new_width, new_height));
        if prev.width == 0 || prev.height == 0 || new_width == 0 || new_height == 0 {
            return;
        }

        debug!(
            "CanvasSurface::resize: {}x{} -> {}x{}",
            prev.width, prev.height, new_width, new_height
        );
        for y in 0..new_height {
            let sy = ((y as u64) * (prev.height as u64) / (new_height as u64)) as u32;
            for x in 0..new_width {
                let sx = ((x as u64) * (prev.width as u64) / (new_width as u64)) as u32;
                if let Some(pixel) = prev.get_pixel(sx, sy) {
                    self.set_pixel(x, y, pixel);
                }
            }
        }
    }

    /// Get raw pixel data as bytes, suitable for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }
}
