//! Strength verdict produced by the classifier.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Four-valued classification of a password.
///
/// The variants carry no ordering: a verdict is a category, not a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strength {
    #[default]
    Empty,
    Easy,
    Medium,
    Strong,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown password strength label: {0}")]
pub struct ParseStrengthError(pub String);

impl Strength {
    /// Lowercase label, suitable as a style class name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Strength::Empty => "empty",
            Strength::Easy => "easy",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strength {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(Strength::Empty),
            "easy" => Ok(Strength::Easy),
            "medium" => Ok(Strength::Medium),
            "strong" => Ok(Strength::Strong),
            other => Err(ParseStrengthError(other.to_string())),
        }
    }
}
