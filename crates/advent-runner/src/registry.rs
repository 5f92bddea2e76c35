use std::collections::BTreeMap;

use crate::solution::Solution;

/// Known solutions keyed by `(year, day)`.
#[derive(Default)]
pub struct Registry {
    days: BTreeMap<(u16, u8), Box<dyn Solution>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `solution` for a day, replacing any earlier one.
    pub fn register(&mut self, year: u16, day: u8, solution: impl Solution + 'static) -> &mut Self {
        self.days.insert((year, day), Box::new(solution));
        self
    }

    pub fn get(&self, year: u16, day: u8) -> Option<&dyn Solution> {
        self.days.get(&(year, day)).map(|s| s.as_ref())
    }

    /// Registered days of `year`, ascending.
    pub fn days(&self, year: u16) -> Vec<u8> {
        self.days
            .range((year, 0)..=(year, u8::MAX))
            .map(|(&(_, day), _)| day)
            .collect()
    }

    /// Registered years, ascending.
    pub fn years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.days.keys().map(|&(y, _)| y).collect();
        years.dedup();
        years
    }

    pub fn latest_year(&self) -> Option<u16> {
        self.days.keys().next_back().map(|&(y, _)| y)
    }

    pub fn latest_day(&self, year: u16) -> Option<u8> {
        self.days(year).last().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;
    use crate::solution::{Parts, unsolved};

    fn forty_two(_: &str) -> Option<Answer> {
        Some(42.into())
    }

    #[test]
    fn days_are_sorted_per_year() {
        let mut reg = Registry::new();
        reg.register(2022, 15, Parts::new(unsolved, unsolved))
            .register(2022, 3, Parts::new(unsolved, unsolved))
            .register(2021, 25, Parts::new(unsolved, unsolved))
            .register(2023, 1, Parts::new(forty_two, unsolved));

        assert_eq!(reg.days(2022), vec![3, 15]);
        assert_eq!(reg.years(), vec![2021, 2022, 2023]);
        assert_eq!(reg.latest_year(), Some(2023));
        assert_eq!(reg.latest_day(2022), Some(15));
        assert_eq!(reg.latest_day(2020), None);
        assert_eq!(reg.len(), 4);
    }

    #[test]
    fn get_returns_registered_solution() {
        let mut reg = Registry::new();
        reg.register(2023, 1, Parts::new(forty_two, unsolved));
        let sol = reg.get(2023, 1).unwrap();
        assert_eq!(sol.part1(""), Some(Answer::Number(42)));
        assert_eq!(sol.part2(""), None);
        assert!(reg.get(2023, 2).is_none());
    }
}
