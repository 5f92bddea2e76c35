//! `advent` — run puzzle solutions on their inputs or check them against
//! the example answers.

use clap::{Parser, Subcommand};
use log::error;

use advent_runner::{Runner, RunnerConfig, RunnerError};

#[derive(Parser)]
#[command(name = "advent")]
#[command(about = "Run and check daily puzzle solutions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a day on its puzzle input.
    Solve {
        /// Day to run, defaults to the latest solved day
        #[arg(long)]
        day: Option<u8>,
        /// Year to run, defaults to the latest solved year
        #[arg(long)]
        year: Option<u16>,
    },
    /// Check a day against its example answers.
    Check {
        #[arg(long)]
        day: Option<u8>,
        #[arg(long)]
        year: Option<u16>,
        /// Check every registered day
        #[arg(long, conflicts_with_all = ["day", "year"])]
        all: bool,
    },
}

fn main() {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when any example check failed.
fn run(cli: Cli) -> Result<bool, RunnerError> {
    let runner = Runner::new(RunnerConfig::from_env(), advent::registry());

    match cli.command {
        Command::Solve { day, year } => {
            let (year, day) = runner.resolve(year, day)?;
            println!("{}", runner.solve(year, day)?);
            Ok(true)
        }
        Command::Check { all: true, .. } => {
            let mut ok = true;
            for year in runner.registry().years() {
                for day in runner.registry().days(year) {
                    ok &= check_day(&runner, year, day)?;
                }
            }
            Ok(ok)
        }
        Command::Check { day, year, .. } => {
            let (year, day) = runner.resolve(year, day)?;
            check_day(&runner, year, day)
        }
    }
}

fn check_day(runner: &Runner, year: u16, day: u8) -> Result<bool, RunnerError> {
    let checks = runner.check(year, day)?;
    if checks.is_empty() {
        println!("{year} day {day}: no example answers");
    }
    for check in &checks {
        println!("{year} day {day} {check}");
    }
    Ok(checks.iter().all(|c| c.passed()))
}
