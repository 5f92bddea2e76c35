//! Example fixtures: the sample input and expected answers for a day.
//!
//! Fixtures are YAML documents of the form
//!
//! ```yaml
//! input: |-
//!   ...
//! answers:
//! - 31
//! - 29
//! ```
//!
//! where `input` may instead be a list holding one input per part.

use std::path::Path;

use serde::Deserialize;

use crate::error::RunnerError;

/// The example input(s) of a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FixtureInput {
    /// Both parts use the same input.
    Shared(String),
    /// One input per part, in order.
    PerPart(Vec<String>),
}

impl Default for FixtureInput {
    fn default() -> Self {
        FixtureInput::Shared(String::new())
    }
}

#[derive(Deserialize)]
struct RawFixture {
    #[serde(default)]
    input: Option<FixtureInput>,
    #[serde(default)]
    answers: Option<Vec<serde_yaml::Value>>,
}

/// A day's example input and expected answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixture {
    pub input: FixtureInput,
    /// Expected answers as text, one per part. `None` marks an answer that
    /// has not been filled in yet.
    pub answers: Vec<Option<String>>,
}

impl Fixture {
    /// Load a fixture file. A missing file yields an empty fixture.
    pub fn load(path: &Path) -> Result<Self, RunnerError> {
        if !path.exists() {
            log::debug!("no fixture at {}", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| RunnerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse a fixture from YAML text. Blank text yields an empty fixture.
    pub fn from_yaml(yaml: &str) -> Result<Self, RunnerError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: Option<RawFixture> = serde_yaml::from_str(yaml)?;
        let Some(raw) = raw else {
            return Ok(Self::default());
        };
        let answers = raw
            .answers
            .unwrap_or_default()
            .into_iter()
            .map(answer_text)
            .collect::<Result<_, _>>()?;
        Ok(Self {
            input: raw.input.unwrap_or_default(),
            answers,
        })
    }

    /// Example input for `part` (1-based). Empty when the fixture has none.
    pub fn input_for(&self, part: u8) -> &str {
        match &self.input {
            FixtureInput::Shared(s) => s,
            FixtureInput::PerPart(inputs) => usize::from(part)
                .checked_sub(1)
                .and_then(|i| inputs.get(i))
                .map_or("", String::as_str),
        }
    }

    /// Expected answer for `part` (1-based), if filled in.
    pub fn answer_for(&self, part: u8) -> Option<&str> {
        let i = usize::from(part).checked_sub(1)?;
        self.answers.get(i)?.as_deref()
    }
}

/// `null` is an answer not filled in yet; lists and maps are rejected.
fn answer_text(value: serde_yaml::Value) -> Result<Option<String>, RunnerError> {
    use serde::de::Error as _;
    use serde_yaml::Value;
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s)),
        other @ (Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_)) => {
            Err(RunnerError::Yaml(serde_yaml::Error::custom(format!(
                "answer must be a number or a string, found {other:?}"
            ))))
        }
    }
}
