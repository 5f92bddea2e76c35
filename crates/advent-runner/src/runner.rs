use std::fmt;

use crate::answer::Answer;
use crate::config::RunnerConfig;
use crate::error::RunnerError;
use crate::fixture::Fixture;
use crate::registry::Registry;

/// Answers produced by [`Runner::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub year: u16,
    pub day: u8,
    pub part1: Option<Answer>,
    /// Only computed when part 1 produced an answer.
    pub part2: Option<Answer>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show(a: &Option<Answer>) -> String {
            a.as_ref().map_or_else(|| "-".to_owned(), Answer::to_string)
        }
        writeln!(f, "Advent of Code {}: Day {}", self.year, self.day)?;
        writeln!(f, "Part 1:\n{}\n", show(&self.part1))?;
        write!(f, "Part 2:\n{}", show(&self.part2))
    }
}

/// Outcome of checking one part against its example answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartCheck {
    pub part: u8,
    pub expected: String,
    pub actual: Option<Answer>,
}

impl PartCheck {
    pub fn passed(&self) -> bool {
        self.actual
            .as_ref()
            .is_some_and(|a| a.to_string() == self.expected)
    }
}

impl fmt::Display for PartCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed() { "ok" } else { "FAILED" };
        match &self.actual {
            Some(actual) => write!(
                f,
                "part {}: {status} (expected {}, got {actual})",
                self.part, self.expected
            ),
            None => write!(
                f,
                "part {}: {status} (expected {}, got nothing)",
                self.part, self.expected
            ),
        }
    }
}

/// Runs registered solutions against puzzle inputs and example fixtures.
pub struct Runner {
    config: RunnerConfig,
    registry: Registry,
}

impl Runner {
    pub fn new(config: RunnerConfig, registry: Registry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolve an optional year/day to a registered day, defaulting to the
    /// latest registered year and its latest day.
    pub fn resolve(&self, year: Option<u16>, day: Option<u8>) -> Result<(u16, u8), RunnerError> {
        let year = match year {
            Some(y) => y,
            None => self
                .registry
                .latest_year()
                .ok_or(RunnerError::NoSolutions { year: None })?,
        };
        let day = match day {
            Some(d) => d,
            None => self
                .registry
                .latest_day(year)
                .ok_or(RunnerError::NoSolutions { year: Some(year) })?,
        };
        if self.registry.get(year, day).is_none() {
            return Err(RunnerError::UnknownDay { year, day });
        }
        Ok((year, day))
    }

    /// Read the puzzle input for a day. A missing file reads as empty.
    pub fn input(&self, year: u16, day: u8) -> Result<String, RunnerError> {
        let path = self.config.input_path(year, day);
        if !path.exists() {
            log::warn!("no puzzle input at {}", path.display());
            return Ok(String::new());
        }
        std::fs::read_to_string(&path).map_err(|source| RunnerError::Io { path, source })
    }

    pub fn fixture(&self, year: u16, day: u8) -> Result<Fixture, RunnerError> {
        Fixture::load(&self.config.fixture_path(year, day))
    }

    /// Solve a day on its puzzle input. Part 2 runs only if part 1 produced
    /// an answer.
    pub fn solve(&self, year: u16, day: u8) -> Result<Report, RunnerError> {
        let solution = self
            .registry
            .get(year, day)
            .ok_or(RunnerError::UnknownDay { year, day })?;
        let input = self.input(year, day)?;

        log::debug!("solving {year} day {day} part 1");
        let part1 = solution.part1(&input);
        let part2 = if part1.is_some() {
            log::debug!("solving {year} day {day} part 2");
            solution.part2(&input)
        } else {
            None
        };

        Ok(Report {
            year,
            day,
            part1,
            part2,
        })
    }

    /// Check each part that has an expected example answer.
    pub fn check(&self, year: u16, day: u8) -> Result<Vec<PartCheck>, RunnerError> {
        let solution = self
            .registry
            .get(year, day)
            .ok_or(RunnerError::UnknownDay { year, day })?;
        let fixture = self.fixture(year, day)?;

        let mut checks = Vec::new();
        for part in 1..=2u8 {
            let Some(expected) = fixture.answer_for(part) else {
                continue;
            };
            let actual = solution.part(part, fixture.input_for(part));
            let check = PartCheck {
                part,
                expected: expected.to_owned(),
                actual,
            };
            log::debug!("{year} day {day} {check}");
            checks.push(check);
        }
        Ok(checks)
    }
}
