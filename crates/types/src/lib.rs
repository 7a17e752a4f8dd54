//! Core types module - shared data structures and constants
//!
//! This module defines the value types used throughout the workspace.
//! They are plain data with no behavior beyond parsing and small helpers, so
//! they can be shared by the core model, the mesh builder and the terminal glue.
//!
//! # Grid Defaults
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 10 rows (indexed 0-9, top to bottom)
//! - **Farmer spawn**: (0, 0), the top-left cell
//! - **Largest side accepted by the runner**: 256 cells
//!
//! # Frame Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Auto-release for terminals without release events |
//!
//! # Examples
//!
//! ```
//! use farm_grid_types::{Direction, GrowthStage, TerrainKind, Tile};
//!
//! let tile = Tile::default();
//! assert_eq!(tile.terrain, TerrainKind::Empty);
//! assert_eq!(tile.growth, GrowthStage::Empty);
//!
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert_eq!(Direction::Up.delta(), (0, -1));
//! ```

use serde::{Deserialize, Serialize};

/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: i32 = 10;

/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: i32 = 10;

/// Largest width or height the runner accepts from the command line
pub const MAX_GRID_SIDE: i32 = 256;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Held buttons are considered released after this long without a key event.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Background clear color (dark teal), RGB in `[0, 1]`.
pub const CLEAR_COLOR: [f32; 3] = [0.1, 0.2, 0.25];

/// Terrain of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum TerrainKind {
    #[default]
    Empty,
    Soil,
    Crop,
}

impl TerrainKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerrainKind::Empty => "empty",
            TerrainKind::Soil => "soil",
            TerrainKind::Crop => "crop",
        }
    }
}

/// Growth stage of a crop.
///
/// Only meaningful when the tile's terrain is [`TerrainKind::Crop`]; other
/// terrains carry whatever stage was last written and renderers ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum GrowthStage {
    #[default]
    Empty,
    Planted,
    Grown,
}

impl GrowthStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Empty => "empty",
            GrowthStage::Planted => "planted",
            GrowthStage::Grown => "grown",
        }
    }
}

/// One grid cell's terrain and crop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tile {
    pub terrain: TerrainKind,
    pub growth: GrowthStage,
}

impl Tile {
    pub const fn new(terrain: TerrainKind, growth: GrowthStage) -> Self {
        Self { terrain, growth }
    }

    /// True when the tile is a crop at the given stage.
    pub fn is_crop_at(&self, stage: GrowthStage) -> bool {
        self.terrain == TerrainKind::Crop && self.growth == stage
    }
}

/// Unit step directions for the farmer.
///
/// Screen convention: `Up` moves towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Up,
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Down,
        Direction::Right,
    ];

    /// `(dx, dy)` for a single step.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// ```
    /// use farm_grid_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Right => "right",
        }
    }
}

/// Actions the frame loop applies to the farm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmAction {
    /// Step the farmer one cell
    Move(Direction),
    /// Advance the tile under the farmer through till/plant/grow/harvest
    Tend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tile_is_empty_empty() {
        let tile = Tile::default();
        assert_eq!(tile, Tile::new(TerrainKind::Empty, GrowthStage::Empty));
        assert!(!tile.is_crop_at(GrowthStage::Empty));
    }

    #[test]
    fn directions_step_one_axis() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1, "{:?}", dir);
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn frame_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(DEFAULT_GRID_WIDTH, 10);
        assert_eq!(DEFAULT_GRID_HEIGHT, 10);
    }
}
