use std::fmt;
use std::path::PathBuf;

/// Errors that can occur when locating, loading or running a day.
#[derive(Debug)]
pub enum RunnerError {
    /// No solution is registered for the requested day.
    UnknownDay { year: u16, day: u8 },
    /// No solutions are registered for the requested year (or at all).
    NoSolutions { year: Option<u16> },
    /// A fixture or input file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// A fixture file is not valid YAML or has the wrong shape.
    Yaml(serde_yaml::Error),
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDay { year, day } => write!(f, "no solution yet for {year} day {day}"),
            Self::NoSolutions { year: Some(year) } => write!(f, "no solutions registered for {year}"),
            Self::NoSolutions { year: None } => write!(f, "no solutions registered"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Yaml(e) => write!(f, "invalid fixture: {e}"),
        }
    }
}

impl std::error::Error for RunnerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Yaml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for RunnerError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}
