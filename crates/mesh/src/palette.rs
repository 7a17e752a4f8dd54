//! Fixed color table for tiles, borders and the farmer marker.
//!
//! Colors are linear RGB in `[0, 1]`, the same space the vertex buffers carry.

use crate::types::{GrowthStage, TerrainKind, Tile};

pub type Rgb = [f32; 3];

/// Untouched ground (dark teal-green).
pub const EMPTY_COLOR: Rgb = [0.12, 0.30, 0.26];
/// Tilled soil (brown).
pub const SOIL_COLOR: Rgb = [0.45, 0.29, 0.15];
/// Crop tile with nothing growing yet (medium green).
pub const CROP_BARE_COLOR: Rgb = [0.24, 0.52, 0.22];
pub const CROP_PLANTED_COLOR: Rgb = [0.32, 0.68, 0.28];
pub const CROP_GROWN_COLOR: Rgb = [0.44, 0.86, 0.34];
/// Any terrain/growth pair the table does not know.
pub const FALLBACK_COLOR: Rgb = [0.5, 0.5, 0.5];

pub const BORDER_COLOR: Rgb = [0.05, 0.07, 0.07];
pub const AGENT_COLOR: Rgb = [0.96, 0.78, 0.18];

/// Added to every channel of cells where `x + y` is even.
pub const CHECKER_OFFSET: f32 = 0.02;

/// Base color for a tile. Growth only matters on crop tiles.
pub fn tile_color(tile: &Tile) -> Rgb {
    match (tile.terrain, tile.growth) {
        (TerrainKind::Empty, _) => EMPTY_COLOR,
        (TerrainKind::Soil, _) => SOIL_COLOR,
        (TerrainKind::Crop, GrowthStage::Empty) => CROP_BARE_COLOR,
        (TerrainKind::Crop, GrowthStage::Planted) => CROP_PLANTED_COLOR,
        (TerrainKind::Crop, GrowthStage::Grown) => CROP_GROWN_COLOR,
        _ => FALLBACK_COLOR,
    }
}

/// Checkerboard brightness modifier for cell (x, y).
#[inline]
pub fn checker_shade(color: Rgb, x: i32, y: i32) -> Rgb {
    if (x + y) % 2 == 0 {
        [
            color[0] + CHECKER_OFFSET,
            color[1] + CHECKER_OFFSET,
            color[2] + CHECKER_OFFSET,
        ]
    } else {
        color
    }
}

/// Tile color with the checker modifier applied.
pub fn cell_color(tile: &Tile, x: i32, y: i32) -> Rgb {
    checker_shade(tile_color(tile), x, y)
}
