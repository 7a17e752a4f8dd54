//! Farm grid (workspace facade crate).
//!
//! Re-exports the member crates under stable module names so the binary,
//! integration tests and benches can use `farm_grid::{core,input,mesh,term,types}`.

pub use farm_grid_core as core;
pub use farm_grid_input as input;
pub use farm_grid_mesh as mesh;
pub use farm_grid_term as term;
pub use farm_grid_types as types;
