//! Toggle, remove, and clean command handlers.

use anyhow::{Context, Result};

use super::resolve::find_record;
use crate::cli::{CleanArgs, TargetArgs};
use crate::domain::Location;
use crate::infra::Workspace;
use crate::provider::{MutationOutcome, TodoProvider};

type WorkspaceProvider<'a> = TodoProvider<&'a Workspace, &'a Workspace>;

fn provider(workspace: &Workspace) -> WorkspaceProvider<'_> {
    TodoProvider::new(workspace, workspace)
}

pub fn handle_toggle(args: &TargetArgs, workspace: &Workspace) -> Result<()> {
    let mut provider = provider(workspace);
    let result = provider
        .scan_result()
        .with_context(|| format!("failed to scan {}", workspace.root().display()))?;
    let Some(record) = find_record(result, workspace, &args.target) else {
        return Ok(());
    };

    let outcome = provider
        .toggle(Some(&record))
        .with_context(|| format!("failed to toggle {}", record.location()))?;

    match outcome {
        MutationOutcome::Applied(_) => println!(
            "Toggled: {} ({} -> {})",
            record.location(),
            record.status().token(),
            record.status().toggled().token()
        ),
        _ => eprintln!("Nothing changed at {}", record.location()),
    }
    Ok(())
}

pub fn handle_remove(args: &TargetArgs, workspace: &Workspace) -> Result<()> {
    let mut provider = provider(workspace);
    let result = provider
        .scan_result()
        .with_context(|| format!("failed to scan {}", workspace.root().display()))?;
    let Some(record) = find_record(result, workspace, &args.target) else {
        return Ok(());
    };

    let outcome = provider
        .delete(Some(&record))
        .with_context(|| format!("failed to delete {}", record.location()))?;

    match outcome {
        MutationOutcome::Applied(_) => {
            println!("Removed: {} {}", record.location(), record.message())
        }
        _ => eprintln!("Nothing changed at {}", record.location()),
    }
    Ok(())
}

pub fn handle_clean(args: &CleanArgs, workspace: &Workspace) -> Result<()> {
    let mut provider = provider(workspace);
    let batch = provider
        .completed_edits()
        .context("failed to collect completed annotations")?;

    if batch.is_empty() {
        println!("No completed annotations.");
        return Ok(());
    }

    let mut targets: Vec<Location> = batch
        .edits()
        .iter()
        .map(|e| Location::new(e.path(), e.line()))
        .collect();
    targets.sort();

    if args.dry_run {
        for target in &targets {
            println!("Would remove: {}", target);
        }
        return Ok(());
    }

    let outcome = provider
        .apply_batch(batch)
        .context("failed to delete completed annotations")?;

    match outcome {
        MutationOutcome::Applied(count) => {
            for target in &targets {
                println!("Removed: {}", target);
            }
            println!("{} completed annotation(s) removed", count);
        }
        _ => println!("No completed annotations."),
    }
    Ok(())
}
