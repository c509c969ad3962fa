//! The provider a host UI drives: tree queries plus mutations.

use tracing::{debug, info};

use super::ChangeNotifier;
use crate::domain::{ScanResult, TodoRecord, TreeNode};
use crate::edit::{EditApplier, EditBatch, EditError, Mutator};
use crate::infra::{FileSource, FsError};
use crate::scan::Aggregator;

/// What a mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// No record was given; nothing happened.
    NoTarget,
    /// The target no longer resolved, or there was nothing to change.
    Unchanged,
    /// This many edits were applied.
    Applied(usize),
}

/// Owns the last scan result and routes user actions to the mutator.
///
/// The cached result is recomputed lazily after [`refresh`](Self::refresh);
/// a successful mutation refreshes automatically. When applying edits fails
/// the cached result is kept as it was.
pub struct TodoProvider<S: FileSource, A: EditApplier> {
    source: S,
    applier: A,
    cached: Option<ScanResult>,
    notifier: ChangeNotifier,
}

impl<S: FileSource, A: EditApplier> TodoProvider<S, A> {
    pub fn new(source: S, applier: A) -> Self {
        Self {
            source,
            applier,
            cached: None,
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Subscribes to change notifications, replacing any previous listener.
    pub fn on_did_change(&mut self, listener: impl FnMut() + 'static) {
        self.notifier.subscribe(listener);
    }

    /// Drops the cached result and tells the listener to query again.
    pub fn refresh(&mut self) {
        self.invalidate();
        self.notifier.notify();
    }

    /// Drops the cached result without notifying.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Returns the current scan result, scanning if nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the file list cannot be produced.
    pub fn scan_result(&mut self) -> Result<&ScanResult, FsError> {
        let result = match self.cached.take() {
            Some(result) => result,
            None => self.recompute()?,
        };
        Ok(&*self.cached.insert(result))
    }

    /// Scans from scratch, bypassing the cache.
    pub fn recompute(&self) -> Result<ScanResult, FsError> {
        Aggregator::new(&self.source).scan()
    }

    /// Children of a node; `None` asks for the top level.
    pub fn children(&mut self, parent: Option<&TreeNode>) -> Result<Vec<TreeNode>, FsError> {
        match parent {
            None => Ok(self.scan_result()?.roots()),
            Some(node) => Ok(node.children().to_vec()),
        }
    }

    /// Toggles a record between `TODO` and `DONE`.
    pub fn toggle(&mut self, record: Option<&TodoRecord>) -> Result<MutationOutcome, EditError> {
        let Some(record) = record else {
            return Ok(MutationOutcome::NoTarget);
        };
        let edit = Mutator::new(&self.source).toggle_status(record);
        self.apply_batch(EditBatch::from(edit))
    }

    /// Deletes a record's line.
    pub fn delete(&mut self, record: Option<&TodoRecord>) -> Result<MutationOutcome, EditError> {
        let Some(record) = record else {
            return Ok(MutationOutcome::NoTarget);
        };
        let edit = Mutator::new(&self.source).delete_record(record);
        self.apply_batch(EditBatch::from(edit))
    }

    /// Deletes every completed annotation in the source.
    pub fn delete_all_completed(&mut self) -> Result<MutationOutcome, EditError> {
        let batch = self.completed_edits()?;
        self.apply_batch(batch)
    }

    /// The edits [`delete_all_completed`](Self::delete_all_completed) would apply.
    pub fn completed_edits(&self) -> Result<EditBatch, EditError> {
        let files = self.source.list_files()?;
        Ok(Mutator::new(&self.source).delete_all_completed(&files))
    }

    /// Applies a batch computed earlier, such as one from
    /// [`completed_edits`](Self::completed_edits), then refreshes.
    pub fn apply_batch(&mut self, batch: EditBatch) -> Result<MutationOutcome, EditError> {
        if batch.is_empty() {
            debug!("no edits to apply");
            return Ok(MutationOutcome::Unchanged);
        }

        self.applier.apply(&batch)?;
        info!(edits = batch.len(), "edits applied; refreshing");
        self.refresh();
        Ok(MutationOutcome::Applied(batch.len()))
    }
}
