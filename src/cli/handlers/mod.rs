//! Command handlers for the CLI.

mod list;
mod mutate;
mod open;
mod resolve;


use std::path::Path;

use crate::scan::{FileResult, ProgressReporter};

// Re-export public items
pub use list::{handle_list, handle_tree};
pub use mutate::{handle_clean, handle_remove, handle_toggle};
pub use open::handle_open;
pub use resolve::normalize_target;

// ===========================================
// Shared Utilities
// ===========================================

/// Progress reporter that prints to stderr, keeping stdout for results.
pub(crate) struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub(crate) fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn on_file(&mut self, path: &Path, result: FileResult) {
        match result {
            FileResult::Scanned(count) if self.verbose => {
                eprintln!("  scanned: {} ({})", path.display(), count)
            }
            FileResult::Scanned(_) => {}
            FileResult::Skipped(reason) => eprintln!("  skipped: {}: {}", path.display(), reason),
        }
    }

    fn on_complete(&mut self, records: usize, skipped: usize) {
        if skipped > 0 {
            eprintln!("Found {} annotations; {} files skipped", records, skipped);
        } else if self.verbose {
            eprintln!("Found {} annotations", records);
        }
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
