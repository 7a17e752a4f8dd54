//! Grid module - owns the farm's tiles
//!
//! The grid is a fixed `width x height` array of [`Tile`]s stored as a flat
//! row-major vector (`y * width + x`).
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom).
//!
//! Coordinates are signed so that callers can ask about cells left of or above
//! the grid and get a bounds error instead of wrapping.

use thiserror::Error;

use crate::types::Tile;

/// Errors raised by grid construction and tile access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("tile ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Width and height of a grid, detached from its tiles.
///
/// Dimensions never change after construction, so this is all a farmer needs
/// to keep from the grid it is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridBounds {
    width: i32,
    height: i32,
}

impl GridBounds {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline(always)]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Clamp a position into `[0, width-1] x [0, height-1]`.
    pub fn clamp(&self, x: i32, y: i32) -> (i32, i32) {
        (x.clamp(0, self.width - 1), y.clamp(0, self.height - 1))
    }
}

/// The farm grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: GridBounds,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid of default tiles.
    ///
    /// Fails with [`GridError::InvalidDimensions`] if either dimension is not
    /// positive.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            bounds: GridBounds { width, height },
            tiles: vec![Tile::default(); len],
        })
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if !self.bounds.contains(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        Ok((y as usize) * (self.bounds.width as usize) + (x as usize))
    }

    /// Get the tile at (x, y).
    pub fn tile(&self, x: i32, y: i32) -> Result<&Tile, GridError> {
        let idx = self.index(x, y)?;
        Ok(&self.tiles[idx])
    }

    /// Get the tile at (x, y) for in-place mutation.
    ///
    /// Writing `terrain` does not touch `growth`; a tile moved off `Crop`
    /// keeps its last growth stage.
    pub fn tile_mut(&mut self, x: i32, y: i32) -> Result<&mut Tile, GridError> {
        let idx = self.index(x, y)?;
        Ok(&mut self.tiles[idx])
    }

    /// Row-major view of all tiles.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate `(x, y, tile)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &Tile)> + '_ {
        let width = self.bounds.width as usize;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| ((i % width) as i32, (i / width) as i32, tile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GrowthStage, TerrainKind};

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.index(0, 0), Ok(0));
        assert_eq!(grid.index(3, 0), Ok(3));
        assert_eq!(grid.index(0, 1), Ok(4));
        assert_eq!(grid.index(3, 2), Ok(11));
        assert!(grid.index(-1, 0).is_err());
        assert!(grid.index(4, 0).is_err());
        assert!(grid.index(0, 3).is_err());
    }

    #[test]
    fn test_grid_rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(-2, 3).is_err());
    }

    #[test]
    fn test_grid_mutation_persists() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.tile_mut(2, 0).unwrap().terrain = TerrainKind::Crop;
        grid.tile_mut(2, 0).unwrap().growth = GrowthStage::Planted;

        let tile = grid.tile(2, 0).unwrap();
        assert_eq!(tile.terrain, TerrainKind::Crop);
        assert_eq!(tile.growth, GrowthStage::Planted);
        assert_eq!(grid.tiles()[2], *tile);
    }

    #[test]
    fn test_terrain_change_keeps_stale_growth() {
        let mut grid = Grid::new(2, 2).unwrap();
        let tile = grid.tile_mut(1, 1).unwrap();
        tile.terrain = TerrainKind::Crop;
        tile.growth = GrowthStage::Grown;
        tile.terrain = TerrainKind::Soil;

        assert_eq!(grid.tile(1, 1).unwrap().growth, GrowthStage::Grown);
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = Grid::new(3, 2).unwrap();
        let coords: Vec<(i32, i32)> = grid.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = Grid::new(3, 4).unwrap().bounds();
        assert_eq!(bounds.clamp(-5, 10), (0, 3));
        assert_eq!(bounds.clamp(1, 2), (1, 2));
        assert!(bounds.contains(2, 3));
        assert!(!bounds.contains(3, 3));
    }
}
