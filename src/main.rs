//! clasp-shell CLI - colorized clasp wrapper with a change-triggered watch mode
//!
//! Usage: clasp-shell <COMMAND>
//!
//! Commands:
//!   sync, push    Push local files (--watch to keep pushing on changes)
//!   fetch, pull   Pull remote files
//!   <anything>    Passed to clasp unchanged

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::GlobalArgs;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let args = GlobalArgs {
        json: cli.json,
        color: cli.color,
        no_animation: cli.no_animation,
    };

    let succeeded = match cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Sync { watch: true }) => commands::watch::cmd_watch(args)?,
        Some(Commands::Sync { watch: false }) => commands::sync::cmd_push(args)?,
        Some(Commands::Fetch) => commands::sync::cmd_pull(args)?,
        Some(Commands::Passthrough(tool_args)) => {
            commands::sync::cmd_passthrough(args, tool_args)?
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Diagnostic logging to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
