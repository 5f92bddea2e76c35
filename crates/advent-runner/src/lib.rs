//! Day runner for puzzle solutions.
//!
//! A [`Registry`] maps `(year, day)` to a [`Solution`]. The [`Runner`]
//! solves a day on its puzzle input, or checks it against the example
//! answers recorded in its [`Fixture`].

pub mod answer;
pub mod config;
pub mod error;
pub mod fixture;
pub mod registry;
pub mod runner;
pub mod solution;

pub use answer::Answer;
pub use config::RunnerConfig;
pub use error::RunnerError;
pub use fixture::{Fixture, FixtureInput};
pub use registry::Registry;
pub use runner::{PartCheck, Report, Runner};
pub use solution::{PartFn, Parts, Solution, unsolved};
