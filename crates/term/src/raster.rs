//! Rasterizer: draws NDC vertex buffers into a terminal framebuffer.
//!
//! The sample grid has two samples per terminal cell (top and bottom half),
//! which are resolved into `▀` glyphs with the top sample as foreground and the
//! bottom sample as background. With typical 1:2 terminal glyphs this makes
//! samples roughly square, so the NDC square is mapped onto the largest square
//! of samples that fits the viewport, centered.
//!
//! This module is pure (no I/O). It can be unit-tested.

use farm_grid_mesh::vertices;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

const HALF_BLOCK: char = '▀';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Which samples a triangle covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Samples whose center lies inside the triangle.
    Center,
    /// Samples whose square overlaps the triangle's edges by any amount, so
    /// strips thinner than a sample still show up.
    Conservative,
}

/// Point in sample space: x to the right, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f32,
    y: f32,
}

#[inline(always)]
fn edge(a: Point, b: Point, p: Point) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Slack that turns a center test into an overlap test for a unit sample.
#[inline(always)]
fn edge_slack(a: Point, b: Point) -> f32 {
    0.5 * ((b.x - a.x).abs() + (b.y - a.y).abs())
}

#[derive(Debug, Clone)]
pub struct Rasterizer {
    width: usize,
    height: usize,
    samples: Vec<[f32; 3]>,
    clear_color: [f32; 3],
}

impl Rasterizer {
    pub fn new(clear_color: [f32; 3]) -> Self {
        Self {
            width: 0,
            height: 0,
            samples: Vec::new(),
            clear_color,
        }
    }

    /// Sample grid dimensions `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Size the sample grid for `viewport` and clear it.
    pub fn begin(&mut self, viewport: Viewport) {
        self.width = viewport.width as usize;
        self.height = viewport.height as usize * 2;
        self.samples.clear();
        self.samples.resize(self.width * self.height, self.clear_color);
    }

    /// Color of sample (x, y), `None` when outside the grid.
    pub fn sample(&self, x: usize, y: usize) -> Option<[f32; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.samples[y * self.width + x])
    }

    /// `(x0, y0, side)` of the square that NDC `[-1, 1]^2` maps onto.
    fn square(&self) -> (f32, f32, f32) {
        let side = self.width.min(self.height) as f32;
        let x0 = (self.width as f32 - side) / 2.0;
        let y0 = (self.height as f32 - side) / 2.0;
        (x0, y0, side)
    }

    #[inline]
    fn to_samples(&self, x: f32, y: f32) -> Point {
        let (x0, y0, side) = self.square();
        Point {
            x: x0 + (x + 1.0) / 2.0 * side,
            y: y0 + (1.0 - y) / 2.0 * side,
        }
    }

    /// Draw a flat `(x, y, r, g, b)` triangle list over the current contents.
    ///
    /// Triangles are flat shaded with their first vertex's color. A trailing
    /// incomplete triangle is ignored.
    pub fn draw_triangles(&mut self, buf: &[f32], coverage: Coverage) {
        let mut verts = vertices(buf);
        while let (Some(a), Some(b), Some(c)) = (verts.next(), verts.next(), verts.next()) {
            let tri = [
                self.to_samples(a.x, a.y),
                self.to_samples(b.x, b.y),
                self.to_samples(c.x, c.y),
            ];
            self.draw_triangle(tri, a.color, coverage);
        }
    }

    fn draw_triangle(&mut self, tri: [Point; 3], color: [f32; 3], coverage: Coverage) {
        let [mut p0, p1, mut p2] = tri;
        let area = edge(p0, p1, p2);
        if area == 0.0 || !area.is_finite() {
            return;
        }
        if area < 0.0 {
            std::mem::swap(&mut p0, &mut p2);
        }

        let (s12, s20, s01, pad) = match coverage {
            Coverage::Center => (0.0, 0.0, 0.0, 0.0),
            Coverage::Conservative => (
                edge_slack(p1, p2),
                edge_slack(p2, p0),
                edge_slack(p0, p1),
                0.5,
            ),
        };

        let min_x = p0.x.min(p1.x).min(p2.x) - pad;
        let max_x = p0.x.max(p1.x).max(p2.x) + pad;
        let min_y = p0.y.min(p1.y).min(p2.y) - pad;
        let max_y = p0.y.max(p1.y).max(p2.y) + pad;

        // Sample i covers [i, i + 1); its center is i + 0.5.
        let x_start = (min_x - 0.5).ceil().max(0.0) as usize;
        let y_start = (min_y - 0.5).ceil().max(0.0) as usize;
        let x_end = ((max_x - 0.5).floor() + 1.0).clamp(0.0, self.width as f32) as usize;
        let y_end = ((max_y - 0.5).floor() + 1.0).clamp(0.0, self.height as f32) as usize;

        for sy in y_start..y_end {
            for sx in x_start..x_end {
                let p = Point {
                    x: sx as f32 + 0.5,
                    y: sy as f32 + 0.5,
                };
                if edge(p1, p2, p) >= -s12 && edge(p2, p0, p) >= -s20 && edge(p0, p1, p) >= -s01 {
                    self.samples[sy * self.width + sx] = color;
                }
            }
        }
    }

    /// Resolve sample pairs into half-block cells.
    pub fn resolve_into(&self, fb: &mut FrameBuffer) {
        let rows = (self.height / 2) as u16;
        fb.resize(self.width as u16, rows);
        for y in 0..rows as usize {
            for x in 0..self.width {
                let top = self.samples[(2 * y) * self.width + x];
                let bottom = self.samples[(2 * y + 1) * self.width + x];
                fb.set(
                    x as u16,
                    y as u16,
                    Cell {
                        ch: HALF_BLOCK,
                        style: CellStyle {
                            fg: Rgb::from_unit(top),
                            bg: Rgb::from_unit(bottom),
                        },
                    },
                );
            }
        }
    }
}
