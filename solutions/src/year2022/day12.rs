//! Hill Climbing Algorithm.
//!
//! Each step may climb at most one elevation level but descend any amount.

use std::hash::{Hash, Hasher};

use advent_core::{Grid, Point};
use advent_paths::{Optimizable, astar, astar_optimizable, manhattan};
use advent_runner::Answer;

fn elevation(b: u8) -> u8 {
    match b {
        b'S' => b'a',
        b'E' => b'z',
        other => other,
    }
}

struct HeightMap {
    grid: Grid<u8>,
    start: Point,
    summit: Point,
}

impl HeightMap {
    fn parse(text: &str) -> Option<Self> {
        let raw = Grid::parse(text)?;
        let start = raw.position(|&b| b == b'S')?;
        let summit = raw.position(|&b| b == b'E')?;
        let grid = Grid::parse_with(text, elevation)?;
        Some(Self {
            grid,
            start,
            summit,
        })
    }

    fn height(&self, p: Point) -> u8 {
        self.grid.get(p).copied().unwrap_or(u8::MAX)
    }

    fn climbable(&self, from: Point, to: Point) -> bool {
        self.height(to) <= self.height(from) + 1
    }
}

pub fn part1(text: &str) -> Option<Answer> {
    let map = HeightMap::parse(text)?;
    let path = astar(map.start, map.summit, manhattan, |p: &Point| {
        map.grid
            .neighbors_4(*p)
            .filter(|&n| map.climbable(*p, n))
            .map(|n| (n, 1))
            .collect::<Vec<_>>()
    })
    .ok()?;
    Some((path.len() - 1).into())
}

/// Walks downhill from the summit; any lowest square is a goal.
#[derive(Clone)]
struct Descent<'m> {
    pos: Point,
    map: &'m HeightMap,
}

impl PartialEq for Descent<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Descent<'_> {}

impl Hash for Descent<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl Optimizable for Descent<'_> {
    type Cost = i64;

    fn is_finished(&self) -> bool {
        self.map.height(self.pos) == b'a'
    }

    fn heuristic(&self) -> i64 {
        // Every lowest square may be adjacent.
        0
    }

    fn egress(&self, buf: &mut Vec<(Self, i64)>) {
        for n in self.map.grid.neighbors_4(self.pos) {
            if self.map.climbable(n, self.pos) {
                buf.push((Descent { pos: n, map: self.map }, 1));
            }
        }
    }
}

pub fn part2(text: &str) -> Option<Answer> {
    let map = HeightMap::parse(text)?;
    let path = astar_optimizable(Descent {
        pos: map.summit,
        map: &map,
    })
    .ok()?;
    Some((path.len() - 1).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE), Some(Answer::Number(31)));
    }

    #[test]
    fn example_part2() {
        assert_eq!(part2(EXAMPLE), Some(Answer::Number(29)));
    }

    #[test]
    fn walled_summit_has_no_answer() {
        assert_eq!(part1("Saz\naaE\n"), None);
    }

    #[test]
    fn missing_markers_have_no_answer() {
        assert_eq!(part1("abc\ndef\n"), None);
        assert_eq!(part2(""), None);
    }
}
