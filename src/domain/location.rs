//! File/line coordinate of an annotation.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where an annotation was found: a file path and a zero-based line index.
///
/// A location does not own the file content it points into. Line indices
/// shift whenever lines above are inserted or removed, so the line must be
/// re-read before any edit is computed from it.
///
/// The text form is `path:LINE` with a 1-based line number, the convention
/// editors and compilers use:
///
/// ```
/// use todoly::domain::Location;
///
/// let loc: Location = "src/app.ts:3".parse().unwrap();
/// assert_eq!(loc.line(), 2);
/// assert_eq!(loc.to_string(), "src/app.ts:3");
/// ```
///
/// The serialized form is `{"path": ..., "line": ...}`, also with a 1-based
/// line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    path: PathBuf,
    line: usize,
}

/// Error returned when parsing an invalid `path:LINE` selector.
#[derive(Debug, Clone)]
pub struct ParseLocationError(String);

impl fmt::Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseLocationError {}

impl Location {
    /// Creates a location from a path and a zero-based line index.
    pub fn new(path: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Zero-based line index.
    pub fn line(&self) -> usize {
        self.line
    }

    /// One-based line number, for display and editors.
    pub fn line_number(&self) -> usize {
        self.line + 1
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path.display(), self.line_number())
    }
}

impl FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (path, line) = s.rsplit_once(':').ok_or_else(|| {
            ParseLocationError(format!("invalid location '{}': expected PATH:LINE", s))
        })?;

        if path.is_empty() {
            return Err(ParseLocationError(format!(
                "invalid location '{}': path cannot be empty",
                s
            )));
        }

        let line_number: usize = line.parse().map_err(|_| {
            ParseLocationError(format!("invalid location '{}': bad line number '{}'", s, line))
        })?;

        if line_number == 0 {
            return Err(ParseLocationError(format!(
                "invalid location '{}': line numbers start at 1",
                s
            )));
        }

        Ok(Self::new(path, line_number - 1))
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Location", 2)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("line", &self.line_number())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            path: PathBuf,
            line: usize,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.line == 0 {
            return Err(serde::de::Error::custom("line numbers start at 1"));
        }
        Ok(Self::new(raw.path, raw.line - 1))
    }
}
