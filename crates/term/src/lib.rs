//! Terminal render backend.
//!
//! A small, game-oriented rendering layer for terminal play. It takes the
//! per-frame vertex buffers produced by `farm-grid-mesh`, rasterizes the
//! triangles into a framebuffer of half-block cells and flushes that
//! framebuffer to the terminal with crossterm.
//!
//! - [`raster`]: NDC triangles → color samples → framebuffer (pure)
//! - [`fb`]: framebuffer and style types
//! - [`renderer`]: raw-mode/alternate-screen handling and diffed output
//! - [`backend`]: [`TerminalBackend`], the `RenderBackend` implementation

pub mod backend;
pub mod fb;
pub mod raster;
pub mod renderer;

pub use farm_grid_types as types;

pub use backend::{rasterize_into, TerminalBackend};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use raster::{Coverage, Rasterizer, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
