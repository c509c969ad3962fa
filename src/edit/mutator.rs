//! Computes the edits that toggle or remove annotations.
//!
//! Records are snapshots, so every operation re-reads the file and works on
//! the line currently at the record's index. The status token is located by
//! the annotation parser, never by a plain word search, so `TODO`/`DONE`
//! inside a message is never touched.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::{EditBatch, TextEdit};
use crate::annotation::{Line, lines, parse_line};
use crate::domain::TodoRecord;
use crate::infra::FileSource;

/// Produces edits against the current content of a [`FileSource`].
///
/// Nothing is written here; the returned edits go to an
/// [`EditApplier`](super::EditApplier). An edit whose target can no longer
/// be read or resolved is dropped rather than failing the operation.
pub struct Mutator<'a, S: FileSource> {
    source: &'a S,
}

impl<'a, S: FileSource> Mutator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Flips the status token on the record's line (`TODO` <-> `DONE`).
    ///
    /// The flip is based on the status currently written on the line. The
    /// edit replaces the line's text, excluding its terminator.
    ///
    /// Returns `None` if the file is unreadable, the line no longer exists,
    /// or the line is no longer an annotation.
    pub fn toggle_status(&self, record: &TodoRecord) -> Option<TextEdit> {
        let location = record.location();
        let content = self.read(location.path())?;
        let line = find_line(&content, location.line())?;

        let Some(parsed) = parse_line(line.text) else {
            debug!(location = %location, "line is no longer an annotation; toggle dropped");
            return None;
        };

        let mut updated = String::with_capacity(line.text.len());
        updated.push_str(&line.text[..parsed.status_range.start]);
        updated.push_str(parsed.status.toggled().token());
        updated.push_str(&line.text[parsed.status_range.end..]);

        Some(TextEdit::replace(
            location.path(),
            line.index,
            line.range,
            updated,
        ))
    }

    /// Removes the record's whole line, including its terminator.
    ///
    /// Returns `None` if the file is unreadable, the line no longer exists,
    /// or the line is no longer an annotation.
    pub fn delete_record(&self, record: &TodoRecord) -> Option<TextEdit> {
        let location = record.location();
        let content = self.read(location.path())?;
        let line = find_line(&content, location.line())?;

        if parse_line(line.text).is_none() {
            debug!(location = %location, "line is no longer an annotation; delete dropped");
            return None;
        }

        Some(TextEdit::delete(
            location.path(),
            line.index,
            line.full_range,
        ))
    }

    /// Removes every line whose annotation status is `DONE`.
    ///
    /// Within a file the deletions are ordered from the last line to the
    /// first. Unreadable files contribute no edits. Lines are matched with
    /// the annotation parser, so code or strings that merely contain `DONE`
    /// are kept.
    pub fn delete_all_completed(&self, files: &[PathBuf]) -> EditBatch {
        let mut batch = EditBatch::new();

        for path in files {
            let Some(content) = self.read(path) else {
                continue;
            };

            let mut done: Vec<Line<'_>> = lines(&content)
                .filter(|line| parse_line(line.text).is_some_and(|p| p.status.is_done()))
                .collect();
            done.reverse();

            if !done.is_empty() {
                debug!(path = %path.display(), count = done.len(), "completed annotations");
            }

            batch.extend(
                done.into_iter()
                    .map(|line| TextEdit::delete(path, line.index, line.full_range)),
            );
        }

        batch
    }

    fn read(&self, path: &Path) -> Option<String> {
        match self.source.read_file(path) {
            Ok(content) => Some(content),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "file unreadable; edit dropped");
                None
            }
        }
    }
}

fn find_line(content: &str, index: usize) -> Option<Line<'_>> {
    let line = lines(content).nth(index);
    if line.is_none() {
        debug!(line = index, "line index past end of file; edit dropped");
    }
    line
}
