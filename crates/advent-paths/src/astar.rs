use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::rc::Rc;

use crate::error::SearchError;
use crate::queue::IndexedPriorityQueue;
use crate::traits::Optimizable;

/// Find the cheapest path from `start` to any node that
/// [`is_finished`](Optimizable::is_finished).
///
/// Returns every node on the path, `start` first and the goal last.
pub fn astar_optimizable<N: Optimizable>(start: N) -> Result<Vec<N>, SearchError> {
    let zero = N::Cost::default();

    let mut open: IndexedPriorityQueue<N, N::Cost> = IndexedPriorityQueue::new();
    // node -> (predecessor, best known cost from start)
    let mut best: HashMap<N, (Option<N>, N::Cost)> = HashMap::new();
    best.insert(start.clone(), (None, zero));
    open.push(start, zero);

    let mut nbuf = Vec::new();
    let mut expanded = 0usize;

    while let Ok(node) = open.pop() {
        let g = best.get(&node).map_or(zero, |&(_, cost)| cost);

        if node.is_finished() {
            log::debug!("astar: goal reached after expanding {expanded} nodes");
            return Ok(reconstruct(&best, node));
        }
        expanded += 1;

        nbuf.clear();
        node.egress(&mut nbuf);

        for (neighbor, weight) in nbuf.drain(..) {
            let tentative_g = g + weight;
            let improves = best
                .get(&neighbor)
                .is_none_or(|&(_, known)| tentative_g < known);
            if !improves {
                continue;
            }
            let f = tentative_g + neighbor.heuristic();
            best.insert(neighbor.clone(), (Some(node.clone()), tentative_g));
            open.push(neighbor, f);
        }
    }

    log::debug!("astar: open set exhausted after expanding {expanded} nodes");
    Err(SearchError::NoPath)
}

fn reconstruct<N: Optimizable>(best: &HashMap<N, (Option<N>, N::Cost)>, goal: N) -> Vec<N> {
    let mut path = vec![goal];
    while let Some((Some(prev), _)) = path.last().and_then(|n| best.get(n)) {
        path.push(prev.clone());
    }
    path.reverse();
    path
}

/// Find the cheapest path from `start` to `end` over plain values.
///
/// `heuristic(a, end)` estimates the remaining cost from `a`; `neighbors(a)`
/// yields `(neighbor, edge_cost)` pairs. The returned path includes both
/// endpoints.
pub fn astar<'a, T, C, H, E, I>(
    start: T,
    end: T,
    heuristic: H,
    neighbors: E,
) -> Result<Vec<T>, SearchError>
where
    T: Clone + Eq + Hash + 'a,
    C: Copy + Ord + Default + Add<Output = C> + 'a,
    H: Fn(&T, &T) -> C + 'a,
    E: Fn(&T) -> I + 'a,
    I: IntoIterator<Item = (T, C)> + 'a,
{
    let wrapped = OptimizeWrapper::new(start, end, heuristic, neighbors);
    let path = astar_optimizable(wrapped)?;
    Ok(path.into_iter().map(OptimizeWrapper::into_current).collect())
}

// ---------------------------------------------------------------------------
// OptimizeWrapper
// ---------------------------------------------------------------------------

struct Shared<'a, T, C> {
    end: T,
    heuristic: Box<dyn Fn(&T, &T) -> C + 'a>,
    egress: Box<dyn Fn(&T, &mut Vec<(T, C)>) + 'a>,
}

/// Adapts a plain value plus heuristic/neighbor functions into an
/// [`Optimizable`] node.
///
/// The goal is reached when the current value equals `end`. All wrappers
/// spawned from one root share the same `end` and functions.
pub struct OptimizeWrapper<'a, T, C> {
    current: T,
    shared: Rc<Shared<'a, T, C>>,
}

impl<'a, T, C> OptimizeWrapper<'a, T, C> {
    /// Wrap `start`, searching toward `end`.
    pub fn new<H, E, I>(start: T, end: T, heuristic: H, neighbors: E) -> Self
    where
        T: 'a,
        C: 'a,
        H: Fn(&T, &T) -> C + 'a,
        E: Fn(&T) -> I + 'a,
        I: IntoIterator<Item = (T, C)> + 'a,
    {
        Self {
            current: start,
            shared: Rc::new(Shared {
                end,
                heuristic: Box::new(heuristic),
                egress: Box::new(move |t: &T, buf: &mut Vec<(T, C)>| buf.extend(neighbors(t))),
            }),
        }
    }

    /// The wrapped value.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// The target value.
    pub fn end(&self) -> &T {
        &self.shared.end
    }

    pub fn into_current(self) -> T {
        self.current
    }
}

impl<T: Clone, C> Clone for OptimizeWrapper<'_, T, C> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: PartialEq, C> PartialEq for OptimizeWrapper<'_, T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current && self.shared.end == other.shared.end
    }
}

impl<T: Eq, C> Eq for OptimizeWrapper<'_, T, C> {}

impl<T: Hash, C> Hash for OptimizeWrapper<'_, T, C> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.current.hash(state);
        self.shared.end.hash(state);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OptimizeWrapper<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptimizeWrapper")
            .field("current", &self.current)
            .field("end", &self.shared.end)
            .finish_non_exhaustive()
    }
}

impl<T, C> Optimizable for OptimizeWrapper<'_, T, C>
where
    T: Clone + Eq + Hash,
    C: Copy + Ord + Default + Add<Output = C>,
{
    type Cost = C;

    fn is_finished(&self) -> bool {
        self.current == self.shared.end
    }

    fn heuristic(&self) -> C {
        (self.shared.heuristic)(&self.current, &self.shared.end)
    }

    fn egress(&self, buf: &mut Vec<(Self, C)>) {
        let mut values = Vec::new();
        (self.shared.egress)(&self.current, &mut values);
        buf.extend(values.into_iter().map(|(value, cost)| {
            (
                Self {
                    current: value,
                    shared: Rc::clone(&self.shared),
                },
                cost,
            )
        }));
    }
}
