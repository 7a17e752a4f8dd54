//! Procedural mesh generation for the farm grid.
//!
//! Turns a [`Grid`](farm_grid_core::Grid) and the farmer position into three
//! flat vertex buffers ready for a rasterizer:
//!
//! - **tiles**: one colored quad per cell, with a checker tint on cells where
//!   `x + y` is even
//! - **borders**: four thin dark strips outlining each cell
//! - **agent**: one inset accent quad at the farmer's cell
//!
//! Every vertex is `(x, y, r, g, b)` in normalized device coordinates, and
//! every quad is two triangles.
//!
//! # Example
//!
//! ```
//! use farm_grid_core::Grid;
//! use farm_grid_mesh::{build_meshes, vertex_count};
//!
//! let grid = Grid::new(3, 3).unwrap();
//! let meshes = build_meshes(&grid, (0, 0));
//! assert_eq!(vertex_count(&meshes.tiles), 6 * 9);
//! assert_eq!(vertex_count(&meshes.borders), 24 * 9);
//! assert_eq!(vertex_count(&meshes.agent), 6);
//! ```

pub mod backend;
pub mod builder;
pub mod palette;

pub use farm_grid_types as types;

pub use backend::RenderBackend;
pub use builder::{
    build_meshes, vertex_count, vertices, FrameMeshes, MeshBuilder, MeshLayout, Rect, Vertex,
    BORDER_THICKNESS, GRID_EXTENT,
};
pub use palette::{cell_color, checker_shade, tile_color, Rgb};

/// Floats per vertex record: x, y, r, g, b.
pub const FLOATS_PER_VERTEX: usize = 5;

/// Two triangles per quad.
pub const VERTICES_PER_QUAD: usize = 6;
