//! Grid distance heuristics.
//!
//! Both take references so they can be passed straight to [`astar`](crate::astar)
//! as the heuristic.

use advent_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: &Point, b: &Point) -> i64 {
    a.manhattan_distance(*b)
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: &Point, b: &Point) -> i64 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar;

    #[test]
    fn distances() {
        let a = Point::new(1, 1);
        let b = Point::new(4, -3);
        assert_eq!(manhattan(&a, &b), 7);
        assert_eq!(chebyshev(&a, &b), 4);
    }

    #[test]
    fn manhattan_guides_open_grid_search() {
        let goal = Point::new(3, 2);
        let path = astar(Point::ZERO, goal, manhattan, |p: &Point| {
            p.neighbors_4()
                .into_iter()
                .filter(|n| (0..5).contains(&n.x) && (0..5).contains(&n.y))
                .map(|n| (n, 1))
                .collect::<Vec<_>>()
        })
        .unwrap();
        assert_eq!(path.len() as i64 - 1, manhattan(&Point::ZERO, &goal));
    }

    #[test]
    fn chebyshev_with_diagonal_moves() {
        let goal = Point::new(4, 2);
        let path = astar(Point::ZERO, goal, chebyshev, |p: &Point| {
            p.neighbors_8().into_iter().map(|n| (n, 1)).collect::<Vec<_>>()
        })
        .unwrap();
        assert_eq!(path.len(), 5);
    }
}
