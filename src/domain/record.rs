//! A single parsed annotation occurrence.

use serde::Serialize;

use super::{Location, Status, Tag};

/// One annotation line, as it read at scan time.
///
/// A record is a snapshot: its fields are derived from the line text at
/// `location` and are never updated. Toggling a record produces new line
/// text, and the next scan produces a new record from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoRecord {
    status: Status,
    tags: Vec<Tag>,
    message: String,
    location: Location,
}

impl TodoRecord {
    /// Creates a record. Tags keep the order they appeared in on the line.
    pub fn new(
        location: Location,
        status: Status,
        tags: Vec<Tag>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            tags,
            message: message.into(),
            location,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// The first tag, which selects the top-level group.
    pub fn main_tag(&self) -> Option<&Tag> {
        self.tags.first()
    }

    /// The second tag, which selects the subgroup. Later tags are ignored for grouping.
    pub fn sub_tag(&self) -> Option<&Tag> {
        self.tags.get(1)
    }
}
