//! Conway's Game of Life on a bounded, non-wrapping grid.
//!
//! A host creates the first generation once with [`create_grid`] and then
//! keeps replacing it with [`step`], drawing each generation in between.

pub mod board;
pub mod engine;
pub mod error;
pub mod factory;
pub mod pos;
pub mod rule;

pub use board::{CellState, Grid};
pub use engine::{Life, neighbor_count, step, step_parallel};
pub use error::{BoardError, Result};
pub use factory::{BoardSize, create as create_grid, create_seeded as create_grid_seeded};
pub use pos::Cell;
