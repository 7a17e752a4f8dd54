//! Terminal input module (farm-facing).
//!
//! This module is intentionally independent of any UI framework beyond key
//! codes. It maps `crossterm` key events onto logical [`Button`]s, tracks which
//! buttons are held, and turns press transitions into
//! [`FarmAction`](crate::types::FarmAction)s.

pub mod edge;
pub mod map;

pub use farm_grid_types as types;

pub use edge::{Button, ButtonState, EdgeDetector, KeyTracker};
pub use map::{button_for_key, should_quit};
