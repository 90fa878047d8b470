use crate::core::color::blend_over;
use crate::core::math::transform::{apply_perspective_division, ndc_to_screen};
use crate::core::pipeline::VertexOutput;
use log::debug;
use nalgebra::Vector3;

/// Minimal point rasterizer for previewing shaded vertices.
///
/// Each vertex becomes a square of `point_size` pixels, depth tested
/// (nearest wins) and alpha blended over what is already there.
pub struct PointCanvas {
    pub width: usize,
    pub height: usize,
    background: Vector3<f32>,
    color_buffer: Vec<Vector3<f32>>,
    depth_buffer: Vec<f32>,
}

impl PointCanvas {
    pub fn new(width: usize, height: usize, background: Vector3<f32>) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            background,
            color_buffer: vec![background; size],
            depth_buffer: vec![f32::INFINITY; size],
        }
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Color at (x, y); the background outside the canvas.
    pub fn get_pixel(&self, x: usize, y: usize) -> Vector3<f32> {
        if x < self.width && y < self.height {
            self.color_buffer[self.index(x, y)]
        } else {
            self.background
        }
    }

    /// Splats one shaded vertex. Returns the number of pixels written.
    ///
    /// Vertices with w ~ 0, outside the depth range, or flagged for discard
    /// are skipped.
    pub fn splat(&mut self, vertex: &VertexOutput) -> usize {
        if vertex.discard {
            return 0;
        }
        let Some(ndc) = apply_perspective_division(&vertex.clip_position) else {
            return 0;
        };
        if !(-1.0..=1.0).contains(&ndc.z) {
            return 0;
        }

        let screen = ndc_to_screen(ndc.x, ndc.y, self.width as f32, self.height as f32);
        let half = vertex.point_size.max(1.0) * 0.5;
        let x0 = (screen.x - half).round().max(0.0) as usize;
        let y0 = (screen.y - half).round().max(0.0) as usize;
        let x1 = ((screen.x + half).round().max(0.0) as usize).min(self.width);
        let y1 = ((screen.y + half).round().max(0.0) as usize).min(self.height);

        let mut written = 0;
        for y in y0..y1 {
            for x in x0..x1 {
                let idx = self.index(x, y);
                if ndc.z < self.depth_buffer[idx] {
                    self.depth_buffer[idx] = ndc.z;
                    self.color_buffer[idx] = blend_over(&self.color_buffer[idx], &vertex.color);
                    written += 1;
                }
            }
        }
        written
    }

    pub fn splat_all(&mut self, vertices: &[VertexOutput]) {
        let written: usize = vertices.iter().map(|v| self.splat(v)).sum();
        debug!("Splatted {} vertices into {} pixels", vertices.len(), written);
    }
}
