use std::hash::Hash;
use std::ops::Add;

/// A search state that A* can optimise over.
///
/// Two nodes are the same search state exactly when they compare equal, so
/// `Eq` and `Hash` must reflect domain equality only.
pub trait Optimizable: Clone + Eq + Hash {
    /// Path cost. `Default` must be the zero cost and edge costs must be
    /// non-negative.
    type Cost: Copy + Ord + Default + Add<Output = Self::Cost>;

    /// Whether this node satisfies the goal.
    fn is_finished(&self) -> bool;

    /// Estimated remaining cost to a goal. Must never overestimate
    /// (admissible) for the returned path to be optimal.
    fn heuristic(&self) -> Self::Cost;

    /// Append `(neighbor, edge_cost)` pairs into `buf`. The caller clears
    /// `buf` before calling.
    fn egress(&self, buf: &mut Vec<(Self, Self::Cost)>);
}
