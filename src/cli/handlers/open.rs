//! Open command handler.

use anyhow::{Context, Result, bail};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use super::resolve::find_record;
use crate::cli::TargetArgs;
use crate::cli::config::Config;
use crate::infra::Workspace;
use crate::scan::Aggregator;

/// Trait for launching an editor (allows mocking in tests).
pub(crate) trait EditorLauncher {
    fn open(&self, path: &Path, line_number: usize) -> Result<()>;
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_open_impl<E: EditorLauncher>(
    args: &TargetArgs,
    workspace: &Workspace,
    editor: &E,
) -> Result<()> {
    let result = Aggregator::new(workspace)
        .scan()
        .with_context(|| format!("failed to scan {}", workspace.root().display()))?;
    let Some(record) = find_record(&result, workspace, &args.target) else {
        return Ok(());
    };

    let location = record.location();
    editor.open(&workspace.resolve(location.path()), location.line_number())
}

pub fn handle_open(args: &TargetArgs, workspace: &Workspace, config: &Config) -> Result<()> {
    struct RealEditor<'a>(&'a Config);
    impl EditorLauncher for RealEditor<'_> {
        fn open(&self, path: &Path, line_number: usize) -> Result<()> {
            open_in_editor(&self.0.editor(), path, line_number)
        }
    }
    handle_open_impl(args, workspace, &RealEditor(config))
}

/// Builds the program and arguments that open `path` at a one-based line.
///
/// VS Code style editors (`code`, `code-insiders`) take `--goto PATH:LINE`;
/// everything else gets `+LINE PATH`.
pub(crate) fn editor_invocation(
    editor: &str,
    path: &Path,
    line_number: usize,
) -> Result<(String, Vec<OsString>)> {
    // Parse editor command (may include args like "code --wait")
    let parts: Vec<&str> = editor.split_whitespace().collect();
    let Some((cmd, extra)) = parts.split_first() else {
        bail!("editor command is empty");
    };

    let mut args: Vec<OsString> = extra.iter().map(OsString::from).collect();
    let is_code = Path::new(cmd)
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("code"));

    if is_code {
        let mut target = path.as_os_str().to_os_string();
        target.push(format!(":{}", line_number));
        args.push(OsString::from("--goto"));
        args.push(target);
    } else {
        args.push(OsString::from(format!("+{}", line_number)));
        args.push(path.as_os_str().to_os_string());
    }

    Ok((cmd.to_string(), args))
}

fn open_in_editor(editor: &str, path: &Path, line_number: usize) -> Result<()> {
    let (cmd, args) = editor_invocation(editor, path, line_number)?;

    let status = Command::new(&cmd)
        .args(&args)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}
