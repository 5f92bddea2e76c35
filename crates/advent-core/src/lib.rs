//! **advent-core** — shared value types for puzzle solutions.
//!
//! Geometry primitives and a dense text grid used by the grid-based
//! puzzles and by the search helpers in `advent-paths`.

pub mod geom;
pub mod grid;

pub use geom::{Direction, Point};
pub use grid::Grid;
