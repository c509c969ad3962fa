//! Resolving `PATH:LINE` selectors to scanned records.

use std::path::{Component, PathBuf};

use crate::domain::{Location, ScanResult, TodoRecord};
use crate::infra::Workspace;

/// Rewrites a user-supplied location into the workspace-relative form the
/// scanner produces.
///
/// Absolute paths under the root lose the root prefix and `.` components
/// are dropped, so `./src/a.ts:3` and `/work/src/a.ts:3` both select
/// `src/a.ts:3` in a workspace rooted at `/work`.
pub fn normalize_target(workspace: &Workspace, target: &Location) -> Location {
    let path = target.path();
    let relative = path.strip_prefix(workspace.root()).unwrap_or(path);
    let cleaned: PathBuf = relative
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    Location::new(cleaned, target.line())
}

/// Finds the record a selector points at, reporting a miss on stderr.
pub(crate) fn find_record(
    result: &ScanResult,
    workspace: &Workspace,
    target: &Location,
) -> Option<TodoRecord> {
    let location = normalize_target(workspace, target);
    let record = result.find(&location).cloned();
    if record.is_none() {
        eprintln!("No annotation at {}", location);
    }
    record
}
