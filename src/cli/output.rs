//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Status, TodoRecord};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain `PATH:LINE` selectors, one per line
    Paths,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single annotation in listing output.
#[derive(Debug, Serialize)]
pub struct TodoListing {
    pub path: String,
    /// One-based line number.
    pub line: usize,
    pub status: Status,
    pub tags: Vec<String>,
    pub message: String,
}

impl From<&TodoRecord> for TodoListing {
    fn from(record: &TodoRecord) -> Self {
        Self {
            path: record.location().path().to_string_lossy().to_string(),
            line: record.location().line_number(),
            status: record.status(),
            tags: record.tags().iter().map(|t| t.to_string()).collect(),
            message: record.message().to_string(),
        }
    }
}

