//! todoly - TODO/DONE annotations across a source tree, grouped by tag

pub mod annotation;
pub mod cli;
pub mod domain;
pub mod edit;
pub mod infra;
pub mod provider;
pub mod scan;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_clean, handle_list, handle_open, handle_remove, handle_toggle, handle_tree},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let config = Config::load()?;
    let workspace = config.workspace(cli.dir.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Tree(args) => handle_tree(args, &workspace, verbose),
        Command::List(args) => handle_list(args, &workspace, verbose),
        Command::Toggle(args) => handle_toggle(args, &workspace),
        Command::Remove(args) => handle_remove(args, &workspace),
        Command::Clean(args) => handle_clean(args, &workspace),
        Command::Open(args) => handle_open(args, &workspace, &config),
        Command::Completions(args) => {
            let mut command = Cli::command();
            clap_complete::generate(args.shell, &mut command, "todoly", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins over the `-v` count when set.
fn setup_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "todoly=warn",
            1 => "todoly=info",
            2 => "todoly=debug",
            _ => "todoly=trace",
        })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
