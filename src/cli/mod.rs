//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::{Location, Status};
use output::OutputFormat;

/// todoly - TODO/DONE annotations across a source tree, grouped by tag
#[derive(Parser, Debug)]
#[command(name = "todoly", version, about, long_about = None)]
pub struct Cli {
    /// Workspace root (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show annotations grouped by main and sub tag
    Tree(TreeArgs),

    /// List annotations, optionally filtered by status and tag
    #[command(name = "ls")]
    List(ListArgs),

    /// Flip an annotation between TODO and DONE
    Toggle(TargetArgs),

    /// Delete an annotation's line
    #[command(name = "rm")]
    Remove(TargetArgs),

    /// Delete every DONE annotation in the workspace
    Clean(CleanArgs),

    /// Open an annotation in your editor
    Open(TargetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `tree` command
#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show annotations with this status
    #[arg(short, long, value_enum)]
    pub status: Option<StatusFilter>,

    /// Filter by tag (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Status accepted by `ls --status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    Open,
    Done,
}

impl From<StatusFilter> for Status {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Open => Status::Open,
            StatusFilter::Done => Status::Done,
        }
    }
}

/// Arguments for commands that act on one annotation
#[derive(Parser, Debug)]
pub struct TargetArgs {
    /// Annotation location as PATH:LINE (line numbers start at 1)
    pub target: Location,
}

/// Arguments for the `clean` command
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Show what would be removed without changing files
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
