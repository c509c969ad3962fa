//! In-memory workspace for hosts that keep documents open, and for tests.

use indexmap::{IndexMap, IndexSet};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use super::{FileSource, FsError};

/// A set of named documents held in memory.
///
/// Files are enumerated in insertion order. Individual files can be marked
/// unreadable, and the whole workspace can be made read-only, to exercise
/// failure paths.
#[derive(Debug, Default)]
pub struct MemoryWorkspace {
    files: RefCell<IndexMap<PathBuf, String>>,
    unreadable: RefCell<IndexSet<PathBuf>>,
    read_only: Cell<bool>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a document.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), content.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Returns a copy of a document's current content.
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Makes reads of `path` fail while it stays listed.
    pub fn mark_unreadable(&self, path: impl Into<PathBuf>) {
        self.unreadable.borrow_mut().insert(path.into());
    }

    /// When set, every edit batch is rejected.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only.get()
    }

    /// Replaces several documents at once.
    pub(crate) fn replace_all(&self, updates: Vec<(PathBuf, String)>) {
        let mut files = self.files.borrow_mut();
        for (path, content) in updates {
            files.insert(path, content);
        }
    }
}

impl FileSource for MemoryWorkspace {
    fn list_files(&self) -> Result<Vec<PathBuf>, FsError> {
        Ok(self.files.borrow().keys().cloned().collect())
    }

    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        if self.unreadable.borrow().contains(path) {
            return Err(FsError::PermissionDenied { path: path.into() });
        }
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound { path: path.into() })
    }
}
