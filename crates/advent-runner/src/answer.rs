use std::fmt;

/// A puzzle answer.
///
/// Answers are compared as text, so `Answer::from(31)` matches an expected
/// answer of `31` in a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Answer {
    Number(i128),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{n}"),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! answer_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Answer {
                fn from(n: $t) -> Self {
                    Answer::Number(n as i128)
                }
            }
        )*
    };
}

answer_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, usize, isize);

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_plain_text() {
        assert_eq!(Answer::from(56_000_011u64).to_string(), "56000011");
        assert_eq!(Answer::from(-4i32).to_string(), "-4");
        assert_eq!(Answer::from("EZJAGRHF").to_string(), "EZJAGRHF");
    }
}
