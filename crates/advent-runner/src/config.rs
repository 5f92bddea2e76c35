use std::path::{Path, PathBuf};

/// Environment variable overriding the project root.
pub const ROOT_ENV: &str = "ADVENT_ROOT";

/// Where puzzle inputs and example fixtures live on disk.
///
/// Inputs are read from `<inputs_dir>/<year>/<dd>.txt` and fixtures from
/// `<fixtures_dir>/<year>/<dd>.yaml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub inputs_dir: PathBuf,
    pub fixtures_dir: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::with_root(".")
    }
}

impl RunnerConfig {
    /// Standard layout under `root`.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            inputs_dir: root.join("inputs"),
            fixtures_dir: root.join("fixtures"),
        }
    }

    /// Standard layout under `$ADVENT_ROOT`, or the current directory.
    pub fn from_env() -> Self {
        match std::env::var_os(ROOT_ENV) {
            Some(root) if !root.is_empty() => Self::with_root(root),
            _ => Self::default(),
        }
    }

    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.inputs_dir
            .join(year.to_string())
            .join(format!("{day:02}.txt"))
    }

    pub fn fixture_path(&self, year: u16, day: u8) -> PathBuf {
        self.fixtures_dir
            .join(year.to_string())
            .join(format!("{day:02}.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_numbers_are_zero_padded() {
        let cfg = RunnerConfig::with_root("/aoc");
        assert_eq!(cfg.input_path(2022, 5), PathBuf::from("/aoc/inputs/2022/05.txt"));
        assert_eq!(
            cfg.fixture_path(2023, 12),
            PathBuf::from("/aoc/fixtures/2023/12.yaml")
        );
    }

    #[test]
    fn default_is_relative_to_cwd() {
        let cfg = RunnerConfig::default();
        assert_eq!(cfg.inputs_dir, PathBuf::from("./inputs"));
        assert_eq!(cfg.fixtures_dir, PathBuf::from("./fixtures"));
    }
}
