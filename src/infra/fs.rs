//! Workspace file enumeration, reading, and atomic writes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::FileSource;

/// Source file extensions scanned when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "cs"];

/// Directory names skipped when none are configured.
pub const DEFAULT_EXCLUDE: &[&str] = &["node_modules"];

/// Errors during file system operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    /// Returns the path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound { path }
            | FsError::PermissionDenied { path }
            | FsError::Io { path, .. }
            | FsError::AtomicWrite { path, .. }
            | FsError::NotADirectory { path }
            | FsError::InvalidEncoding { path, .. } => path,
        }
    }
}

/// Reads a text file as UTF-8.
///
/// The content is returned unchanged (a UTF-8 byte order mark is kept) so
/// that byte offsets computed from it remain valid for later edits.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::PermissionDenied` if access is denied.
/// Returns `FsError::InvalidEncoding` if the file is UTF-16 or not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    decode_text(bytes, path)
}

fn decode_text(bytes: Vec<u8>, path: &Path) -> Result<String, FsError> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 LE detected (byte order mark FF FE); convert to UTF-8".into(),
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 BE detected (byte order mark FE FF); convert to UTF-8".into(),
        });
    }

    String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })
}

/// Writes content to a temporary file beside `path` without replacing it yet.
///
/// A symlinked `path` is resolved first so the link survives and its
/// target is rewritten. The temporary file takes the permissions of the
/// existing file. Call [`StagedFile::commit`] to atomically move it into
/// place. Dropping a staged file removes the temporary file.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the parent directory doesn't exist.
/// Returns `FsError::Io` if the temporary file cannot be written.
pub fn stage_write(path: &Path, content: &str) -> Result<StagedFile, FsError> {
    let target = match std::fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(FsError::from_io(path, e)),
    };

    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if !parent.exists() {
        return Err(FsError::NotFound {
            path: parent.into(),
        });
    }

    let io_error = |e| FsError::Io {
        path: target.clone(),
        source: e,
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(io_error)?;
    temp.write_all(content.as_bytes()).map_err(io_error)?;

    if let Ok(metadata) = std::fs::metadata(&target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(io_error)?;
    }

    Ok(StagedFile { temp, target })
}

/// Content written to a temporary file, waiting to replace its target.
#[derive(Debug)]
pub struct StagedFile {
    temp: NamedTempFile,
    target: PathBuf,
}

impl StagedFile {
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Atomically renames the temporary file over the target.
    ///
    /// # Errors
    ///
    /// Returns `FsError::AtomicWrite` if the rename fails.
    pub fn commit(self) -> Result<(), FsError> {
        let target = self.target;
        self.temp.persist(&target).map_err(|e| FsError::AtomicWrite {
            path: target.clone(),
            source: e.error,
        })?;
        Ok(())
    }
}

/// A directory tree of source files, scanned for annotations.
///
/// Files are enumerated recursively in file-name order so the enumeration
/// is stable between scans. Hidden files and directories (leading `.`) and
/// directories named in the exclude list are skipped. Paths handed out are
/// relative to the root.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    extensions: Vec<String>,
    exclude: Vec<String>,
}

impl Workspace {
    /// Creates a workspace rooted at `root` with the default extensions.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replaces the scanned extensions (without leading dots).
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_string())
            .collect();
        self
    }

    /// Replaces the excluded directory names.
    pub fn with_exclude<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude = exclude.into_iter().map(|e| e.as_ref().to_string()).collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Resolves a workspace-relative path to a path on disk.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.exclude.iter().any(|e| e == name))
    }

    fn has_scanned_extension(&self, entry: &DirEntry) -> bool {
        entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

impl FileSource for Workspace {
    /// Enumerates matching files below the root.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` if the root doesn't exist.
    /// Returns `FsError::NotADirectory` if the root is not a directory.
    fn list_files(&self) -> Result<Vec<PathBuf>, FsError> {
        if !self.root.exists() {
            return Err(FsError::NotFound {
                path: self.root.clone(),
            });
        }
        if !self.root.is_dir() {
            return Err(FsError::NotADirectory {
                path: self.root.clone(),
            });
        }

        let files: Vec<PathBuf> = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !(is_hidden(e) || self.is_excluded(e)))
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.has_scanned_extension(e))
            .filter_map(|e| e.path().strip_prefix(&self.root).ok().map(Path::to_path_buf))
            .collect();

        debug!(root = %self.root.display(), count = files.len(), "enumerated files");
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        read_text(&self.resolve(path))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}
