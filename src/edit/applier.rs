//! Applying edit batches to workspaces.

use tracing::{debug, info};

use super::{EditBatch, EditError, apply_to_content};
use crate::infra::{FileSource, MemoryWorkspace, StagedFile, Workspace, read_text, stage_write};

/// Applies a batch of edits as one unit.
///
/// Implementations validate and prepare every file in the batch before
/// changing any of them, and make the result visible to subsequent reads
/// before returning `Ok`.
pub trait EditApplier {
    fn apply(&self, batch: &EditBatch) -> Result<(), EditError>;
}

impl<T: EditApplier + ?Sized> EditApplier for &T {
    fn apply(&self, batch: &EditBatch) -> Result<(), EditError> {
        (**self).apply(batch)
    }
}

impl EditApplier for Workspace {
    /// Rewrites each touched file through a temporary file and atomic rename.
    ///
    /// All files are read, edited, and staged first; only when every file
    /// staged cleanly are the renames performed. A failing rename after
    /// others succeeded is reported, but earlier renames are not undone.
    fn apply(&self, batch: &EditBatch) -> Result<(), EditError> {
        let mut staged: Vec<StagedFile> = Vec::new();

        for (path, edits) in batch.by_file() {
            let disk_path = self.resolve(path);
            let content = read_text(&disk_path)?;
            let updated = apply_to_content(path, &content, &edits)?;
            staged.push(stage_write(&disk_path, &updated)?);
            debug!(path = %path.display(), edits = edits.len(), "staged edits");
        }

        let files = staged.len();
        for file in staged {
            file.commit()?;
        }

        info!(files, edits = batch.len(), "applied edit batch");
        Ok(())
    }
}

impl EditApplier for MemoryWorkspace {
    fn apply(&self, batch: &EditBatch) -> Result<(), EditError> {
        if self.is_read_only() {
            return Err(EditError::ReadOnly);
        }

        let mut updates = Vec::new();
        for (path, edits) in batch.by_file() {
            let content = self.read_file(path)?;
            let updated = apply_to_content(path, &content, &edits)?;
            updates.push((path.to_path_buf(), updated));
        }

        self.replace_all(updates);
        Ok(())
    }
}
