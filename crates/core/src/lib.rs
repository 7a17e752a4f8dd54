//! Core farm model - pure, deterministic, and testable
//!
//! This crate holds the grid, the farmer and the farming rules. It has no
//! dependencies on terminals, rendering or input devices, so everything here
//! can be driven from tests or a headless loop.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size tile grid with bounds-checked access
//! - [`farmer`]: the movable agent with edge clamping
//! - [`farm`]: till/plant/grow/harvest cycle for a single tile
//! - [`snapshot`]: serializable copy of the farm state
//!
//! # Example
//!
//! ```
//! use farm_grid_core::{Farmer, Grid};
//! use farm_grid_types::{Direction, GrowthStage, TerrainKind};
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! grid.tile_mut(1, 1).unwrap().terrain = TerrainKind::Soil;
//!
//! let mut farmer = Farmer::new(&grid);
//! assert!(!farmer.move_dir(Direction::Up));
//! assert!(farmer.move_dir(Direction::Right));
//! assert!(farmer.move_dir(Direction::Down));
//! assert_eq!(farmer.position(), (1, 1));
//!
//! let tile = farm_grid_core::tend(&mut grid, farmer.x(), farmer.y()).unwrap();
//! assert_eq!(tile.terrain, TerrainKind::Crop);
//! assert_eq!(tile.growth, GrowthStage::Planted);
//! ```

pub mod farm;
pub mod farmer;
pub mod grid;
pub mod snapshot;

pub use farm_grid_types as types;

// Re-export commonly used types for convenience
pub use farm::{next_stage, tend};
pub use farmer::Farmer;
pub use grid::{Grid, GridBounds, GridError};
pub use snapshot::{FarmSnapshot, FarmerSnapshot};
