//! File enumeration, reading, and writing

mod fs;
mod memory;

use std::path::{Path, PathBuf};

pub use fs::{
    DEFAULT_EXCLUDE, DEFAULT_EXTENSIONS, FsError, StagedFile, Workspace, read_text, stage_write,
};
pub use memory::MemoryWorkspace;

/// Supplies the files a scan covers and their current content.
pub trait FileSource {
    /// Enumerates candidate files. The order must be stable between calls
    /// while the underlying files are unchanged.
    fn list_files(&self) -> Result<Vec<PathBuf>, FsError>;

    /// Reads the full current text of a file.
    fn read_file(&self, path: &Path) -> Result<String, FsError>;
}

impl<T: FileSource + ?Sized> FileSource for &T {
    fn list_files(&self) -> Result<Vec<PathBuf>, FsError> {
        (**self).list_files()
    }

    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        (**self).read_file(path)
    }
}
