//! Search and range utilities for puzzle solutions.
//!
//! - **Indexed priority queue** with decrease-key and lazy deletion
//!   ([`IndexedPriorityQueue`])
//! - **A\*** shortest-path search over any [`Optimizable`] node
//!   ([`astar_optimizable`]), or over plain values plus a heuristic and a
//!   neighbor function ([`astar`])
//! - **Range index** of merged, disjoint closed intervals ([`RangeIndex`])
//!
//! All structures are single-threaded and in-memory.

mod astar;
mod distance;
mod error;
mod intervals;
mod queue;
mod traits;

pub use astar::{OptimizeWrapper, astar, astar_optimizable};
pub use distance::{chebyshev, manhattan};
pub use error::{QueueError, SearchError};
pub use intervals::{Interval, RangeIndex};
pub use queue::IndexedPriorityQueue;
pub use traits::Optimizable;
