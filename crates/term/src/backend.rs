//! TerminalBackend: the render backend the frame loop talks to.
//!
//! Owns the terminal renderer, the framebuffer and the rasterizer, so all
//! output state lives in one value created at startup and passed to the loop.

use anyhow::{Context, Result};
use log::info;

use farm_grid_mesh::{FrameMeshes, RenderBackend};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::raster::{Coverage, Rasterizer, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::CLEAR_COLOR;

const STATUS_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(220, 220, 220),
    bg: Rgb::new(26, 51, 64),
};

/// Rasterize meshes into a framebuffer without touching the terminal.
///
/// Draw order is tiles, borders, agent. Borders use conservative coverage so
/// strips thinner than a sample stay visible.
pub fn rasterize_into(
    raster: &mut Rasterizer,
    meshes: &FrameMeshes,
    viewport: Viewport,
    fb: &mut FrameBuffer,
) {
    raster.begin(viewport);
    raster.draw_triangles(&meshes.tiles, Coverage::Center);
    raster.draw_triangles(&meshes.borders, Coverage::Conservative);
    raster.draw_triangles(&meshes.agent, Coverage::Center);
    raster.resolve_into(fb);
}

pub struct TerminalBackend {
    renderer: TerminalRenderer,
    raster: Rasterizer,
    fb: FrameBuffer,
    status: String,
}

impl Default for TerminalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            raster: Rasterizer::new(CLEAR_COLOR),
            fb: FrameBuffer::new(0, 0),
            status: String::new(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        info!("entering terminal");
        self.renderer.enter().context("failed to set up terminal")
    }

    pub fn exit(&mut self) -> Result<()> {
        info!("restoring terminal");
        self.renderer.exit().context("failed to restore terminal")
    }

    /// Force a full redraw on the next frame.
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
    }

    /// Text drawn over the top row of every frame.
    pub fn set_status(&mut self, status: &str) {
        self.status.clear();
        self.status.push_str(status);
    }

    fn viewport() -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }
}

impl RenderBackend for TerminalBackend {
    type Error = anyhow::Error;

    fn present(&mut self, meshes: &FrameMeshes) -> Result<()> {
        rasterize_into(&mut self.raster, meshes, Self::viewport(), &mut self.fb);
        if !self.status.is_empty() {
            self.fb.put_str(0, 0, &self.status, STATUS_STYLE);
        }
        self.renderer.draw_swap(&mut self.fb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farm_grid_core::Grid;
    use farm_grid_mesh::palette::AGENT_COLOR;
    use farm_grid_mesh::build_meshes;

    #[test]
    fn agent_marker_is_drawn_on_top() {
        let grid = Grid::new(2, 2).unwrap();
        let meshes = build_meshes(&grid, (1, 1));
        let mut raster = Rasterizer::new(CLEAR_COLOR);
        let mut fb = FrameBuffer::new(0, 0);

        // 40x40 samples; the grid square spans samples 4..36, cell (1,1) is 20..36.
        rasterize_into(&mut raster, &meshes, Viewport::new(40, 20), &mut fb);

        assert_eq!(raster.sample(28, 28), Some(AGENT_COLOR));
        assert_ne!(raster.sample(10, 10), Some(AGENT_COLOR));
        assert_eq!(raster.sample(1, 1), Some(CLEAR_COLOR));
        assert_eq!((fb.width(), fb.height()), (40, 20));
    }
}
