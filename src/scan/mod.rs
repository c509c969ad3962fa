//! Scanning files for annotations and grouping them by tag

mod aggregator;
mod progress;

pub use aggregator::{Aggregator, group_records, parse_document};
pub use progress::{FileResult, NoopReporter, ProgressReporter};
