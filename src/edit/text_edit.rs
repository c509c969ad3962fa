//! Edit and batch types, and splicing edits into file content.

use indexmap::IndexMap;
use serde::Serialize;
use std::ops::Range;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::infra::FsError;

/// Errors applying an edit batch.
#[derive(Debug, Error)]
pub enum EditError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("edit range {start}..{end} is outside {path} ({len} bytes)")]
    OutOfBounds {
        path: PathBuf,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("edit range {start}..{end} in {path} does not fall on character boundaries")]
    NotCharBoundary {
        path: PathBuf,
        start: usize,
        end: usize,
    },

    #[error("overlapping edits in {path} at byte {offset}")]
    Overlap { path: PathBuf, offset: usize },

    #[error("workspace is read-only")]
    ReadOnly,
}

/// Replacement of a byte range in one file.
///
/// The range refers to the file content the edit was computed from. `line`
/// is the zero-based line the edit targets, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    path: PathBuf,
    line: usize,
    range: Range<usize>,
    replacement: String,
}

impl TextEdit {
    /// Replaces `range` with `text`.
    pub fn replace(
        path: impl Into<PathBuf>,
        line: usize,
        range: Range<usize>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            line,
            range,
            replacement: text.into(),
        }
    }

    /// Removes `range`.
    pub fn delete(path: impl Into<PathBuf>, line: usize, range: Range<usize>) -> Self {
        Self::replace(path, line, range, String::new())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn is_deletion(&self) -> bool {
        self.replacement.is_empty()
    }
}

/// A set of edits to be applied together, possibly across several files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditBatch {
    edits: Vec<TextEdit>,
}

impl EditBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edit: TextEdit) {
        self.edits.push(edit);
    }

    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Edits grouped per file, files in first-seen order.
    pub fn by_file(&self) -> IndexMap<&Path, Vec<&TextEdit>> {
        let mut grouped: IndexMap<&Path, Vec<&TextEdit>> = IndexMap::new();
        for edit in &self.edits {
            grouped.entry(edit.path()).or_default().push(edit);
        }
        grouped
    }
}

impl From<Vec<TextEdit>> for EditBatch {
    fn from(edits: Vec<TextEdit>) -> Self {
        Self { edits }
    }
}

impl From<Option<TextEdit>> for EditBatch {
    fn from(edit: Option<TextEdit>) -> Self {
        Self {
            edits: edit.into_iter().collect(),
        }
    }
}

impl Extend<TextEdit> for EditBatch {
    fn extend<I: IntoIterator<Item = TextEdit>>(&mut self, iter: I) {
        self.edits.extend(iter);
    }
}

/// Splices one file's edits into its content.
///
/// Edits are applied from the highest offset down so earlier ranges stay
/// valid. All ranges are checked before anything is changed.
///
/// # Errors
///
/// Returns `EditError::OutOfBounds`, `EditError::NotCharBoundary`, or
/// `EditError::Overlap` if any range cannot be applied.
pub fn apply_to_content(
    path: &Path,
    content: &str,
    edits: &[&TextEdit],
) -> Result<String, EditError> {
    let mut ordered: Vec<&TextEdit> = edits.to_vec();
    ordered.sort_by_key(|e| std::cmp::Reverse((e.range.start, e.range.end)));

    let mut floor = content.len();
    for edit in &ordered {
        let Range { start, end } = edit.range;
        if start > end || end > content.len() {
            return Err(EditError::OutOfBounds {
                path: path.into(),
                start,
                end,
                len: content.len(),
            });
        }
        if !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return Err(EditError::NotCharBoundary {
                path: path.into(),
                start,
                end,
            });
        }
        if end > floor {
            return Err(EditError::Overlap {
                path: path.into(),
                offset: end,
            });
        }
        floor = start;
    }

    let mut updated = content.to_string();
    for edit in ordered {
        updated.replace_range(edit.range.clone(), &edit.replacement);
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn path() -> &'static Path {
        Path::new("a.ts")
    }

    #[test]
    fn replaces_a_range() {
        let edit = TextEdit::replace("a.ts", 0, 3..7, "DONE");
        let out = apply_to_content(path(), "// TODO: x", &[&edit]).unwrap();
        assert_eq!(out, "// DONE: x");
    }

    #[test]
    fn applies_several_edits_regardless_of_input_order() {
        let content = "a\nb\nc\nd\n";
        let first = TextEdit::delete("a.ts", 0, 0..2);
        let third = TextEdit::delete("a.ts", 2, 4..6);
        let out = apply_to_content(path(), content, &[&first, &third]).unwrap();
        assert_eq!(out, "b\nd\n");
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let content = "a\nb\n";
        let first = TextEdit::delete("a.ts", 0, 0..2);
        let second = TextEdit::delete("a.ts", 1, 2..4);
        assert_eq!(apply_to_content(path(), content, &[&second, &first]).unwrap(), "");
    }

    #[test]
    fn rejects_overlap() {
        let a = TextEdit::delete("a.ts", 0, 0..3);
        let b = TextEdit::delete("a.ts", 0, 2..4);
        let result = apply_to_content(path(), "abcdef", &[&a, &b]);
        assert!(matches!(result, Err(EditError::Overlap { .. })));
    }

    #[test]
    fn rejects_out_of_bounds() {
        let edit = TextEdit::delete("a.ts", 9, 10..20);
        let result = apply_to_content(path(), "short", &[&edit]);
        assert!(matches!(result, Err(EditError::OutOfBounds { len: 5, .. })));
    }

    #[test]
    fn rejects_split_characters() {
        let edit = TextEdit::delete("a.ts", 0, 0..1);
        let result = apply_to_content(path(), "é", &[&edit]);
        assert!(matches!(result, Err(EditError::NotCharBoundary { .. })));
    }

    #[test]
    fn batch_groups_by_file_in_first_seen_order() {
        let batch = EditBatch::from(vec![
            TextEdit::delete("b.ts", 1, 0..1),
            TextEdit::delete("a.ts", 0, 0..1),
            TextEdit::delete("b.ts", 0, 0..1),
        ]);
        let grouped = batch.by_file();
        let files: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(files, vec![Path::new("b.ts"), Path::new("a.ts")]);
        assert_eq!(grouped[Path::new("b.ts")].len(), 2);
    }

    #[test]
    fn batch_from_none_is_empty() {
        assert!(EditBatch::from(None).is_empty());
        assert_eq!(EditBatch::from(Some(TextEdit::delete("a.ts", 0, 0..1))).len(), 1);
    }

    #[test]
    fn deletion_has_empty_replacement() {
        assert!(TextEdit::delete("a.ts", 0, 0..1).is_deletion());
        assert!(!TextEdit::replace("a.ts", 0, 0..1, "x").is_deletion());
    }
}
