//! Beacon Exclusion Zone.
//!
//! Each sensor rules out a diamond around itself; one row of the diamonds
//! is a set of closed x-intervals, kept merged in a [`RangeIndex`].

use std::collections::HashSet;

use advent_core::Point;
use advent_paths::{Interval, RangeIndex, manhattan};
use advent_runner::Answer;

struct Sensor {
    pos: Point,
    beacon: Point,
    radius: i64,
}

fn parse(text: &str) -> Option<Vec<Sensor>> {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let nums: Vec<i64> = line
                .split(|c: char| !(c.is_ascii_digit() || c == '-'))
                .filter(|s| !s.is_empty())
                .map(str::parse)
                .collect::<Result<_, _>>()
                .ok()?;
            let &[sx, sy, bx, by] = nums.as_slice() else {
                return None;
            };
            let pos = Point::new(sx, sy);
            let beacon = Point::new(bx, by);
            Some(Sensor {
                pos,
                beacon,
                radius: manhattan(&pos, &beacon),
            })
        })
        .collect()
}

/// The example is scanned at a smaller row and search bound than real
/// inputs; small coordinates mean we were handed the example.
fn bounds(sensors: &[Sensor]) -> (i64, i64) {
    let small = sensors.iter().all(|s| {
        [s.pos.x, s.pos.y, s.beacon.x, s.beacon.y]
            .iter()
            .all(|v| v.abs() <= 100)
    });
    if small { (10, 20) } else { (2_000_000, 4_000_000) }
}

fn coverage(sensors: &[Sensor], row: i64) -> RangeIndex<i64> {
    let mut index = RangeIndex::new();
    for s in sensors {
        let reach = s.radius - (s.pos.y - row).abs();
        if reach >= 0 {
            index.insert(Interval::new(s.pos.x - reach, s.pos.x + reach));
        }
    }
    index
}

pub fn part1(text: &str) -> Option<Answer> {
    let sensors = parse(text)?;
    if sensors.is_empty() {
        return None;
    }
    let (row, _) = bounds(&sensors);
    let index = coverage(&sensors, row);

    let covered: i64 = index.iter().map(|iv| iv.high() - iv.low() + 1).sum();
    let beacons: HashSet<Point> = sensors
        .iter()
        .map(|s| s.beacon)
        .filter(|b| b.y == row && index.contains(b.x))
        .collect();
    Some((covered - beacons.len() as i64).into())
}

/// First x in `0..=limit` not covered on this row.
fn first_gap(index: &RangeIndex<i64>, limit: i64) -> Option<i64> {
    let mut next = 0;
    for iv in index {
        if iv.high() < next {
            continue;
        }
        if iv.low() > next {
            break;
        }
        next = iv.high() + 1;
    }
    (next <= limit).then_some(next)
}

pub fn part2(text: &str) -> Option<Answer> {
    let sensors = parse(text)?;
    if sensors.is_empty() {
        return None;
    }
    let (_, limit) = bounds(&sensors);
    (0..=limit).find_map(|y| {
        let x = first_gap(&coverage(&sensors, y), limit)?;
        log::debug!("distress beacon at ({x}, {y})");
        Some(Answer::from(x * 4_000_000 + y))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3";

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE), Some(Answer::Number(26)));
    }

    #[test]
    fn example_part2() {
        assert_eq!(part2(EXAMPLE), Some(Answer::Number(56_000_011)));
    }

    #[test]
    fn parses_negative_coordinates() {
        let sensors = parse(EXAMPLE).unwrap();
        assert_eq!(sensors.len(), 14);
        assert_eq!(sensors[0].beacon, Point::new(-2, 15));
        assert_eq!(sensors[0].radius, 7);
    }

    #[test]
    fn first_gap_scans_from_zero() {
        let index: RangeIndex<i64> = [(-5, 3), (5, 9)].into_iter().collect();
        assert_eq!(first_gap(&index, 20), Some(4));
        let full: RangeIndex<i64> = [(-5, 30)].into_iter().collect();
        assert_eq!(first_gap(&full, 20), None);
        let late: RangeIndex<i64> = [(2, 8)].into_iter().collect();
        assert_eq!(first_gap(&late, 20), Some(0));
    }

    #[test]
    fn garbage_has_no_answer() {
        assert_eq!(part1("Sensor at x=1: nowhere"), None);
        assert_eq!(part1(""), None);
    }
}
