//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --no-animation, --verbose) are inherited
//! by all subcommands. Unknown subcommands are forwarded to the tool.

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// clasp-shell - colorized clasp wrapper with a change-triggered watch mode
#[derive(Parser, Debug)]
#[command(name = "clasp-shell")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Any other command is passed to clasp unchanged.")]
pub struct Cli {
    /// Output one JSON event per line
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Disable the progress spinner
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Push all local files to the remote project
    #[command(visible_alias = "push")]
    Sync {
        /// Watch for file changes and push every update
        #[arg(short, long)]
        watch: bool,
    },

    /// Replace local files with the remote project's files
    #[command(visible_alias = "pull")]
    Fetch,

    #[command(external_subcommand)]
    Passthrough(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_push() {
        let cli = Cli::try_parse_from(["clasp-shell", "push"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Sync { watch: false })));
    }

    #[test]
    fn test_cli_parse_sync_watch() {
        let cli = Cli::try_parse_from(["clasp-shell", "sync", "--watch"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Sync { watch: true })));

        let cli = Cli::try_parse_from(["clasp-shell", "push", "-w"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Sync { watch: true })));
    }

    #[test]
    fn test_cli_parse_pull_and_fetch() {
        for name in ["pull", "fetch"] {
            let cli = Cli::try_parse_from(["clasp-shell", name]).unwrap();
            assert!(matches!(cli.command, Some(Commands::Fetch)), "{name}");
        }
    }

    #[test]
    fn test_cli_parse_passthrough_keeps_args() {
        let cli = Cli::try_parse_from(["clasp-shell", "deployments", "--json-out", "x"]).unwrap();
        if let Some(Commands::Passthrough(args)) = cli.command {
            assert_eq!(args, vec!["deployments", "--json-out", "x"]);
        } else {
            panic!("Expected Passthrough command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "clasp-shell",
            "--json",
            "--color",
            "never",
            "-vv",
            "--no-animation",
            "pull",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(cli.no_animation);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
    }

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::try_parse_from(["clasp-shell"]).unwrap();
        assert!(cli.command.is_none());
    }
}
