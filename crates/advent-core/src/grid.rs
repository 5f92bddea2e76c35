//! A dense rectangular grid parsed from puzzle text.

use crate::geom::Point;

/// A 2D grid of `T` values stored row-major.
///
/// Unlike a sparse map, every in-bounds point holds a value. The origin is
/// the top-left character of the parsed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i64,
    height: i64,
}

impl Grid<u8> {
    /// Parse a block of text into a byte grid, one row per line.
    ///
    /// Returns `None` when lines have differing widths.
    pub fn parse(text: &str) -> Option<Self> {
        Self::parse_with(text, |b| b)
    }
}

impl<T> Grid<T> {
    /// Parse text, mapping each byte through `f`.
    pub fn parse_with(text: &str, mut f: impl FnMut(u8) -> T) -> Option<Self> {
        let mut cells = Vec::with_capacity(text.len());
        let mut width = None;
        let mut height = 0;
        for line in text.lines().filter(|l| !l.is_empty()) {
            let w = line.len() as i64;
            if *width.get_or_insert(w) != w {
                return None;
            }
            cells.extend(line.bytes().map(&mut f));
            height += 1;
        }
        Some(Self {
            cells,
            width: width.unwrap_or(0),
            height,
        })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| (p.y * self.width + p.x) as usize)
    }

    /// Value at `p`, or `None` when out of bounds.
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Iterate `(point, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        let w = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (Point::new(i as i64 % w, i as i64 / w), v))
    }

    /// First point whose value satisfies `pred`.
    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.iter().find(|(_, v)| pred(v)).map(|(p, _)| p)
    }

    /// In-bounds cardinal neighbours of `p`.
    pub fn neighbors_4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.contains(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
####
#..#
#.E#
####";

    #[test]
    fn parse_and_size() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 4);
        assert_eq!(g.get(Point::new(1, 1)), Some(&b'.'));
        assert_eq!(g.get(Point::new(4, 0)), None);
        assert_eq!(g.get(Point::new(0, -1)), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Grid::parse("###\n##\n").is_none());
    }

    #[test]
    fn position_and_iter() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.position(|&b| b == b'E'), Some(Point::new(2, 2)));
        assert_eq!(g.iter().count(), 16);
        assert_eq!(g.iter().nth(5).map(|(p, _)| p), Some(Point::new(1, 1)));
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.neighbors_4(Point::ZERO).count(), 2);
        assert_eq!(g.neighbors_4(Point::new(1, 1)).count(), 4);
    }
}
