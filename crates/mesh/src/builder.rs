//! MeshBuilder: maps a grid and the farmer position into vertex buffers.
//!
//! This module is pure (no I/O, no hidden state). Output layout:
//!
//! - every vertex is 5 floats `(x, y, r, g, b)` in normalized device coordinates
//! - every quad is 2 triangles, 6 vertices
//! - the grid occupies a square of side `extent` centered at the origin,
//!   row 0 at the top, column 0 at the left

use crate::palette::{cell_color, Rgb, AGENT_COLOR, BORDER_COLOR};
use crate::{FLOATS_PER_VERTEX, VERTICES_PER_QUAD};
use farm_grid_core::Grid;

/// Side length of the square region the grid is drawn into (NDC units).
pub const GRID_EXTENT: f32 = 1.6;

/// Thickness of each cell border strip (NDC units).
pub const BORDER_THICKNESS: f32 = 0.008;

/// Fraction of the cell size trimmed from each side of the farmer marker.
pub const AGENT_INSET: f32 = 0.2;

/// Geometry parameters for mesh generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshLayout {
    /// Side of the square grid region.
    pub extent: f32,
    /// Empty space between neighbouring cells.
    pub gap: f32,
    /// Border strip thickness.
    pub border: f32,
    /// Marker inset as a fraction of the cell size.
    pub agent_inset: f32,
}

impl Default for MeshLayout {
    fn default() -> Self {
        Self {
            extent: GRID_EXTENT,
            gap: 0.0,
            border: BORDER_THICKNESS,
            agent_inset: AGENT_INSET,
        }
    }
}

impl MeshLayout {
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }
}

/// Axis-aligned rectangle in NDC. `top > bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.bottom && y <= self.top
    }

    fn inset(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            left: self.left + dx,
            right: self.right - dx,
            top: self.top - dy,
            bottom: self.bottom + dy,
        }
    }
}

/// A decoded vertex record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
}

/// Iterate vertex records in a flat buffer. A trailing partial record is ignored.
pub fn vertices(buf: &[f32]) -> impl Iterator<Item = Vertex> + '_ {
    buf.chunks_exact(FLOATS_PER_VERTEX).map(|v| Vertex {
        x: v[0],
        y: v[1],
        color: [v[2], v[3], v[4]],
    })
}

/// Number of vertex records in a flat buffer.
pub fn vertex_count(buf: &[f32]) -> usize {
    buf.len() / FLOATS_PER_VERTEX
}

/// The three per-frame vertex buffers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameMeshes {
    /// One quad per cell.
    pub tiles: Vec<f32>,
    /// Four strips per cell.
    pub borders: Vec<f32>,
    /// One inset quad at the farmer's cell.
    pub agent: Vec<f32>,
}

impl FrameMeshes {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.borders.clear();
        self.agent.clear();
    }
}

/// Builds [`FrameMeshes`] for a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeshBuilder {
    layout: MeshLayout,
}

impl MeshBuilder {
    pub fn new(layout: MeshLayout) -> Self {
        Self { layout }
    }

    /// `(width, height)` of one cell before the gap is removed.
    pub fn cell_size(&self, grid: &Grid) -> (f32, f32) {
        let extent = self.layout.extent.max(0.0);
        (extent / grid.width() as f32, extent / grid.height() as f32)
    }

    /// Rectangle covered by cell (x, y), after removing the gap.
    ///
    /// A gap as wide as the cell collapses it to a zero-size rect. A NaN gap
    /// counts as no gap.
    pub fn cell_rect(&self, grid: &Grid, x: i32, y: i32) -> Rect {
        let half = self.layout.extent.max(0.0) / 2.0;
        let (cell_w, cell_h) = self.cell_size(grid);
        let gap_x = self.layout.gap.max(0.0).min(cell_w) / 2.0;
        let gap_y = self.layout.gap.max(0.0).min(cell_h) / 2.0;

        let left = -half + x as f32 * cell_w;
        let top = half - y as f32 * cell_h;
        Rect {
            left,
            right: left + cell_w,
            top,
            bottom: top - cell_h,
        }
        .inset(gap_x, gap_y)
    }

    /// Build into freshly allocated buffers.
    pub fn build(&self, grid: &Grid, agent: (i32, i32)) -> FrameMeshes {
        let mut out = FrameMeshes::default();
        self.build_into(grid, agent, &mut out);
        out
    }

    /// Rebuild into existing buffers.
    ///
    /// This is the allocation-free hot path once `out` has been sized by a
    /// previous build for a grid of the same dimensions.
    pub fn build_into(&self, grid: &Grid, agent: (i32, i32), out: &mut FrameMeshes) {
        out.clear();
        let cells = (grid.width() as usize) * (grid.height() as usize);
        let quad_floats = VERTICES_PER_QUAD * FLOATS_PER_VERTEX;
        out.tiles.reserve(cells * quad_floats);
        out.borders.reserve(cells * 4 * quad_floats);
        out.agent.reserve(quad_floats);

        for (x, y, tile) in grid.iter() {
            let rect = self.cell_rect(grid, x, y);
            push_quad(&mut out.tiles, rect, cell_color(tile, x, y));
            self.push_borders(&mut out.borders, rect);
        }

        let (ax, ay) = grid.bounds().clamp(agent.0, agent.1);
        let rect = self.cell_rect(grid, ax, ay);
        let inset = self.layout.agent_inset.max(0.0).min(0.49);
        push_quad(
            &mut out.agent,
            rect.inset(rect.width() * inset, rect.height() * inset),
            AGENT_COLOR,
        );
    }

    fn push_borders(&self, buf: &mut Vec<f32>, rect: Rect) {
        // Rounding can leave a fully collapsed rect a hair below zero.
        let tx = self.layout.border.max(0.0).min(rect.width().max(0.0) / 2.0);
        let ty = self.layout.border.max(0.0).min(rect.height().max(0.0) / 2.0);

        // Top, bottom, left, right.
        push_quad(buf, Rect { bottom: rect.top - ty, ..rect }, BORDER_COLOR);
        push_quad(buf, Rect { top: rect.bottom + ty, ..rect }, BORDER_COLOR);
        push_quad(buf, Rect { right: rect.left + tx, ..rect }, BORDER_COLOR);
        push_quad(buf, Rect { left: rect.right - tx, ..rect }, BORDER_COLOR);
    }
}

/// Build the three meshes with the default layout.
pub fn build_meshes(grid: &Grid, agent: (i32, i32)) -> FrameMeshes {
    MeshBuilder::default().build(grid, agent)
}

#[inline]
fn push_vertex(buf: &mut Vec<f32>, x: f32, y: f32, c: Rgb) {
    buf.extend_from_slice(&[x, y, c[0], c[1], c[2]]);
}

/// Two triangles: (tl, tr, br) and (tl, br, bl).
fn push_quad(buf: &mut Vec<f32>, r: Rect, c: Rgb) {
    push_vertex(buf, r.left, r.top, c);
    push_vertex(buf, r.right, r.top, c);
    push_vertex(buf, r.right, r.bottom, c);

    push_vertex(buf, r.left, r.top, c);
    push_vertex(buf, r.right, r.bottom, c);
    push_vertex(buf, r.left, r.bottom, c);
}
