use std::fmt;

/// Error returned by [`IndexedPriorityQueue::pop`](crate::IndexedPriorityQueue::pop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// No live entries remain.
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "pop from empty queue"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Error returned by the A* searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The open set was exhausted without reaching a goal node.
    NoPath,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoPath => write!(f, "no path found"),
        }
    }
}

impl std::error::Error for SearchError {}
