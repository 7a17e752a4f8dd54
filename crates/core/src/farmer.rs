//! Farmer module - the single movable agent
//!
//! The farmer lives on a grid and steps one cell at a time. Moves that would
//! leave the grid are pulled back onto the edge and reported as blocked.

use log::debug;

use crate::grid::{Grid, GridBounds};
use crate::types::Direction;

/// The farmer agent.
///
/// Binding keeps a copy of the grid's bounds rather than a borrow of the grid,
/// so the frame loop can keep mutating tiles while the farmer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Farmer {
    bounds: GridBounds,
    x: i32,
    y: i32,
}

impl Farmer {
    /// Bind a farmer to `grid`, starting at (0, 0).
    pub fn new(grid: &Grid) -> Self {
        Self {
            bounds: grid.bounds(),
            x: 0,
            y: 0,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Step one cell in `direction`.
    ///
    /// Returns true if the farmer moved, false if the grid edge blocked it.
    pub fn move_dir(&mut self, direction: Direction) -> bool {
        let old = (self.x, self.y);
        let (dx, dy) = direction.delta();
        self.x += dx;
        self.y += dy;

        // Over-shoot is at most one unit, so one step back lands on the edge.
        let max_x = self.bounds.width() - 1;
        let max_y = self.bounds.height() - 1;
        if self.y > max_y {
            self.y -= 1;
        } else if self.y < 0 {
            self.y += 1;
        }
        if self.x > max_x {
            self.x -= 1;
        } else if self.x < 0 {
            self.x += 1;
        }

        let moved = (self.x, self.y) != old;
        if moved {
            debug!("farmer moved {} to ({}, {})", direction.as_str(), self.x, self.y);
        } else {
            debug!("farmer blocked moving {} at ({}, {})", direction.as_str(), self.x, self.y);
        }
        moved
    }
}
