//! Completion status of a todo annotation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether an annotation is still open (`TODO`) or completed (`DONE`).
///
/// The source tokens are case-sensitive: only the exact uppercase words
/// `TODO` and `DONE` are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Open,
    Done,
}

/// Error returned when a string is not a status token.
#[derive(Debug, Clone)]
pub struct ParseStatusError(String);

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid status token '{}': expected TODO or DONE", self.0)
    }
}

impl std::error::Error for ParseStatusError {}

impl Status {
    /// Returns the literal token written in source files.
    pub fn token(self) -> &'static str {
        match self {
            Status::Open => "TODO",
            Status::Done => "DONE",
        }
    }

    /// Returns the opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Status::Open => Status::Done,
            Status::Done => Status::Open,
        }
    }

    pub fn is_done(self) -> bool {
        self == Status::Done
    }

    /// Parses an exact source token (`TODO` or `DONE`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "TODO" => Some(Status::Open),
            "DONE" => Some(Status::Done),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ParseStatusError(s.to_string()))
    }
}
