//! Answer enum for the values a user can submit to a question.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A yes/no/unsure answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Answer {
    #[serde(rename = "si")]
    Yes,
    #[serde(rename = "no")]
    No,
    #[serde(rename = "nosé")]
    Unsure,
}

impl Answer {
    /// All answer values.
    pub const ALL: [Answer; 3] = [Answer::Yes, Answer::No, Answer::Unsure];

    /// Returns the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "si",
            Answer::No => "no",
            Answer::Unsure => "nosé",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Answer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Answer::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("answer", format!("'{}' is not si, no or nosé", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_values() {
        assert_eq!("si".parse::<Answer>().unwrap(), Answer::Yes);
        assert_eq!("no".parse::<Answer>().unwrap(), Answer::No);
        assert_eq!("nosé".parse::<Answer>().unwrap(), Answer::Unsure);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("yes".parse::<Answer>().is_err());
        assert!("SI".parse::<Answer>().is_err());
        assert!("nose".parse::<Answer>().is_err());
        assert!("".parse::<Answer>().is_err());
    }

    #[test]
    fn serde_uses_wire_values() {
        assert_eq!(serde_json::to_string(&Answer::Unsure).unwrap(), "\"nosé\"");
        let parsed: Answer = serde_json::from_str("\"si\"").unwrap();
        assert_eq!(parsed, Answer::Yes);
    }
}
