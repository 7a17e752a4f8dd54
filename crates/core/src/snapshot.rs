//! Serializable view of the farm state.

use serde::{Deserialize, Serialize};

use crate::farmer::Farmer;
use crate::grid::Grid;
use crate::types::Tile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmerSnapshot {
    pub x: i32,
    pub y: i32,
}

/// Grid dimensions, row-major tiles and the farmer position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmSnapshot {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<Tile>,
    pub farmer: FarmerSnapshot,
}

impl FarmSnapshot {
    pub fn capture(grid: &Grid, farmer: &Farmer) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            tiles: grid.tiles().to_vec(),
            farmer: FarmerSnapshot {
                x: farmer.x(),
                y: farmer.y(),
            },
        }
    }

    /// Tile at (x, y), `None` when out of bounds.
    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        let index = (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)?;
        self.tiles.get(index)
    }
}
