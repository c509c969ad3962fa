//! Lowercase tag type used to group annotations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A grouping label taken from a bracketed group such as `[UI]`.
///
/// Tags are normalized to lowercase, so `[UI]` and `[ui]` land in the same
/// group. Apart from case folding the text is kept verbatim, including any
/// inner whitespace, so the tag can be matched back against the source line.
///
/// # Validation Rules
/// - Non-empty
/// - Must not contain `]` (it would close the bracket group)
///
/// # Examples
///
/// ```
/// use todoly::domain::Tag;
///
/// let tag = Tag::new("Layout").unwrap();
/// assert_eq!(tag.as_str(), "layout");
/// assert!(Tag::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String); // Always stored lowercase

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag from the text between the brackets.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the text is empty or contains `]`.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        if s.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        if s.contains(']') {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags cannot contain ']'",
                s
            )));
        }

        Ok(Self(s.to_lowercase()))
    }

    /// Returns the normalized tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
