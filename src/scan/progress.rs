//! Progress reporting for scans.

use std::path::Path;

/// Result of scanning a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileResult {
    /// File was read; this many annotations were found.
    Scanned(usize),
    /// File could not be read and was left out of the result.
    Skipped(String),
}

/// Trait for receiving progress updates during a scan.
pub trait ProgressReporter {
    /// Called when a file is processed.
    fn on_file(&mut self, path: &Path, result: FileResult);
    /// Called when the scan is complete.
    fn on_complete(&mut self, records: usize, skipped: usize);
}

/// A no-op progress reporter.
#[derive(Default)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_file(&mut self, _path: &Path, _result: FileResult) {}
    fn on_complete(&mut self, _records: usize, _skipped: usize) {}
}
