//! Tree and list command handlers.

use anyhow::{Context, Result};

use super::{ConsoleReporter, truncate_str};
use crate::cli::output::{Output, OutputFormat, TodoListing};
use crate::cli::{ListArgs, StatusFilter, TreeArgs};
use crate::domain::{ScanResult, Status, Tag, TodoRecord};
use crate::infra::Workspace;
use crate::provider::{TreeItem, to_tree_items};
use crate::scan::Aggregator;

fn scan(workspace: &Workspace, verbose: bool) -> Result<ScanResult> {
    Aggregator::new(workspace)
        .scan_with_progress(&mut ConsoleReporter::new(verbose))
        .with_context(|| format!("failed to scan {}", workspace.root().display()))
}

pub fn handle_tree(args: &TreeArgs, workspace: &Workspace, verbose: bool) -> Result<()> {
    let result = scan(workspace, verbose)?;

    match args.format {
        OutputFormat::Human => {
            if result.is_empty() {
                println!("No annotations found.");
            } else {
                print!("{}", render_tree(&to_tree_items(&result)));
            }
        }
        OutputFormat::Json => {
            let output = Output::new(to_tree_items(&result));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for record in result.records() {
                println!("{}", record.location());
            }
        }
    }

    Ok(())
}

pub fn handle_list(args: &ListArgs, workspace: &Workspace, verbose: bool) -> Result<()> {
    let result = scan(workspace, verbose)?;

    let tags = args
        .tags
        .iter()
        .map(|t| Tag::new(t).with_context(|| format!("invalid tag: {}", t)))
        .collect::<Result<Vec<_>>>()?;

    let mut records = filter_records(result.records(), args.status, &tags);
    records.sort_by(|a, b| a.location().cmp(b.location()));

    match args.format {
        OutputFormat::Human => {
            if records.is_empty() {
                println!("No annotations found.");
            } else {
                for record in &records {
                    println!(
                        "{:<30}  {:<4}  {:<20}  {}",
                        truncate_str(&record.location().to_string(), 30),
                        record.status().token(),
                        truncate_str(&format_tags(record), 20),
                        truncate_str(record.message(), 60)
                    );
                }

                println!();
                println!("{} annotation(s)", records.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TodoListing> =
                records.iter().map(|r| TodoListing::from(*r)).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for record in &records {
                println!("{}", record.location());
            }
        }
    }

    Ok(())
}

/// Keeps records with the given status (if any) that carry every given tag.
pub(crate) fn filter_records<'a>(
    records: Vec<&'a TodoRecord>,
    status: Option<StatusFilter>,
    tags: &[Tag],
) -> Vec<&'a TodoRecord> {
    let status = status.map(Status::from);
    records
        .into_iter()
        .filter(|r| status.is_none_or(|s| r.status() == s))
        .filter(|r| tags.iter().all(|t| r.tags().contains(t)))
        .collect()
}

/// Renders `[a][b]` for a record's tags.
pub(crate) fn format_tags(record: &TodoRecord) -> String {
    record.tags().iter().map(|t| format!("[{}]", t)).collect()
}

/// Renders tree items as an indented outline.
pub(crate) fn render_tree(items: &[TreeItem]) -> String {
    let mut out = String::new();
    render_level(items, 0, &mut out);
    out
}

fn render_level(items: &[TreeItem], depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for item in items {
        if item.is_folder() {
            out.push_str(&format!("{}{}\n", indent, item.label));
            render_level(&item.children, depth + 1, out);
        } else {
            let mark = if item.status == Some(Status::Done) { "x" } else { " " };
            match &item.location {
                Some(location) => {
                    out.push_str(&format!("{}[{}] {}  ({})\n", indent, mark, item.label, location))
                }
                None => out.push_str(&format!("{}[{}] {}\n", indent, mark, item.label)),
            }
        }
    }
}
