//! Farming actions on tiles.

use log::debug;

use crate::grid::{Grid, GridError};
use crate::types::{GrowthStage, TerrainKind, Tile};

/// The tile that tending `tile` produces.
///
/// Empty is tilled to soil, soil is planted, a planted crop grows, and a
/// grown crop is harvested back to bare soil. Growth on non-crop terrain is
/// ignored when deciding the next step. Unknown states are left as they are.
pub fn next_stage(tile: Tile) -> Tile {
    match (tile.terrain, tile.growth) {
        (TerrainKind::Empty, _) => Tile {
            terrain: TerrainKind::Soil,
            ..tile
        },
        (TerrainKind::Soil, _) => Tile::new(TerrainKind::Crop, GrowthStage::Planted),
        (TerrainKind::Crop, GrowthStage::Empty) => Tile::new(TerrainKind::Crop, GrowthStage::Planted),
        (TerrainKind::Crop, GrowthStage::Planted) => Tile::new(TerrainKind::Crop, GrowthStage::Grown),
        (TerrainKind::Crop, GrowthStage::Grown) => Tile::new(TerrainKind::Soil, GrowthStage::Empty),
        _ => tile,
    }
}

/// Tend the tile at (x, y), returning its new state.
pub fn tend(grid: &mut Grid, x: i32, y: i32) -> Result<Tile, GridError> {
    let tile = grid.tile_mut(x, y)?;
    let next = next_stage(*tile);
    debug!(
        "tended ({}, {}): {}/{} -> {}/{}",
        x,
        y,
        tile.terrain.as_str(),
        tile.growth.as_str(),
        next.terrain.as_str(),
        next.growth.as_str()
    );
    *tile = next;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_returns_to_soil() {
        let mut grid = Grid::new(2, 2).unwrap();
        let stages: Vec<Tile> = (0..5).map(|_| tend(&mut grid, 1, 0).unwrap()).collect();
        assert_eq!(
            stages,
            vec![
                Tile::new(TerrainKind::Soil, GrowthStage::Empty),
                Tile::new(TerrainKind::Crop, GrowthStage::Planted),
                Tile::new(TerrainKind::Crop, GrowthStage::Grown),
                Tile::new(TerrainKind::Soil, GrowthStage::Empty),
                Tile::new(TerrainKind::Crop, GrowthStage::Planted),
            ]
        );
    }

    #[test]
    fn crop_without_growth_gets_planted() {
        let tile = Tile::new(TerrainKind::Crop, GrowthStage::Empty);
        assert_eq!(next_stage(tile), Tile::new(TerrainKind::Crop, GrowthStage::Planted));
    }

    #[test]
    fn tend_out_of_bounds_fails_without_mutation() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(tend(&mut grid, 2, 0).is_err());
        assert!(grid.tiles().iter().all(|t| *t == Tile::default()));
    }
}
