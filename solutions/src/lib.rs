//! Daily puzzle solutions and the registry that lists them.

pub mod year2022;

use advent_runner::{Parts, Registry};

/// Every solved day.
pub fn registry() -> Registry {
    let mut reg = Registry::new();
    reg.register(2022, 12, Parts::new(year2022::day12::part1, year2022::day12::part2))
        .register(2022, 15, Parts::new(year2022::day15::part1, year2022::day15::part2));
    reg
}
