//! Aggregator that turns file contents into a grouped [`ScanResult`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{FileResult, NoopReporter, ProgressReporter};
use crate::annotation::{lines, parse_line};
use crate::domain::{GroupNode, Location, ScanResult, TodoRecord};
use crate::infra::{FileSource, FsError};

/// Scans the files of a [`FileSource`] and groups the annotations found.
///
/// Every scan starts from scratch: nothing is carried over from a previous
/// result, so scanning unchanged content twice yields equal results.
///
/// Files that cannot be read are skipped; the scan continues with the
/// remaining files and no record is produced for the skipped file.
pub struct Aggregator<'a, S: FileSource> {
    source: &'a S,
}

impl<'a, S: FileSource> Aggregator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Enumerates the source's files and scans them.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file list itself cannot be produced.
    pub fn scan(&self) -> Result<ScanResult, FsError> {
        self.scan_with_progress(&mut NoopReporter)
    }

    /// Enumerates and scans with progress reporting.
    pub fn scan_with_progress<P: ProgressReporter>(
        &self,
        progress: &mut P,
    ) -> Result<ScanResult, FsError> {
        let files = self.source.list_files()?;
        Ok(self.scan_files_with_progress(&files, progress))
    }

    /// Scans the given files, in the given order.
    pub fn scan_files(&self, files: &[PathBuf]) -> ScanResult {
        self.scan_files_with_progress(files, &mut NoopReporter)
    }

    /// Scans the given files with progress reporting.
    pub fn scan_files_with_progress<P: ProgressReporter>(
        &self,
        files: &[PathBuf],
        progress: &mut P,
    ) -> ScanResult {
        let mut records = Vec::new();
        let mut skipped = 0;

        for path in files {
            match self.source.read_file(path) {
                Ok(content) => {
                    let found = parse_document(path, &content);
                    debug!(path = %path.display(), records = found.len(), "scanned file");
                    progress.on_file(path, FileResult::Scanned(found.len()));
                    records.extend(found);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable file");
                    progress.on_file(path, FileResult::Skipped(e.to_string()));
                    skipped += 1;
                }
            }
        }

        let total = records.len();
        let result = group_records(records);
        info!(
            files = files.len(),
            records = total,
            groups = result.groups().len(),
            skipped,
            "scan complete"
        );
        progress.on_complete(total, skipped);
        result
    }
}

/// Parses every annotation line of one document.
pub fn parse_document(path: &Path, content: &str) -> Vec<TodoRecord> {
    lines(content)
        .filter_map(|line| {
            parse_line(line.text).map(|parsed| {
                TodoRecord::new(
                    Location::new(path, line.index),
                    parsed.status,
                    parsed.tags,
                    parsed.message,
                )
            })
        })
        .collect()
}

/// Partitions records into the two-level tag tree plus the ungrouped list.
///
/// Records must be supplied in file order, then line order; that order is
/// kept within every group and in the ungrouped list.
///
/// - No tags: ungrouped.
/// - One tag: directly under the main-tag group.
/// - Two or more tags: under the main-tag group, in the sub-tag subgroup.
///
/// Groups and subgroups are sorted by label.
pub fn group_records(records: impl IntoIterator<Item = TodoRecord>) -> ScanResult {
    // main tag -> sub tag ("" for none) -> records
    let mut buckets: BTreeMap<String, BTreeMap<String, Vec<TodoRecord>>> = BTreeMap::new();
    let mut ungrouped = Vec::new();

    for record in records {
        let Some(main) = record.main_tag() else {
            ungrouped.push(record);
            continue;
        };

        let main = main.as_str().to_string();
        let sub = record
            .sub_tag()
            .map(|t| t.as_str().to_string())
            .unwrap_or_default();

        buckets
            .entry(main)
            .or_default()
            .entry(sub)
            .or_default()
            .push(record);
    }

    let groups = buckets
        .into_iter()
        .map(|(main, mut subs)| {
            let direct = subs.remove("").unwrap_or_default();
            let subgroups = subs
                .into_iter()
                .map(|(sub, records)| GroupNode::leaf(sub, records))
                .collect();
            GroupNode::main(main, direct, subgroups)
        })
        .collect();

    ScanResult::new(groups, ungrouped)
}
