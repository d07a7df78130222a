//! Operations forwarded to the external sync tool

use std::fmt;

use serde::Serialize;

/// Sync direction relative to the remote project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Push,
    Pull,
}

impl Direction {
    /// Subcommand understood by the external tool
    pub fn subcommand(&self) -> &'static str {
        match self {
            Direction::Push => "push",
            Direction::Pull => "pull",
        }
    }

    /// Past tense used in the success banner ("pushed 3 files")
    pub fn past_tense(&self) -> &'static str {
        match self {
            Direction::Push => "pushed",
            Direction::Pull => "pulled",
        }
    }

    /// Progress text shown while the invocation runs
    pub fn progressive(&self) -> &'static str {
        match self {
            Direction::Push => "pushing...",
            Direction::Pull => "pulling...",
        }
    }
}

/// One invocation of the external tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    /// `push` or `pull`, with parsed output
    Sync { direction: Direction },
    /// Any other subcommand, forwarded verbatim
    Passthrough { args: Vec<String> },
}

impl Operation {
    pub fn push() -> Self {
        Operation::Sync {
            direction: Direction::Push,
        }
    }

    pub fn pull() -> Self {
        Operation::Sync {
            direction: Direction::Pull,
        }
    }

    pub fn passthrough(args: Vec<String>) -> Self {
        Operation::Passthrough { args }
    }

    /// Arguments handed to the external tool
    pub fn args(&self) -> Vec<String> {
        match self {
            Operation::Sync { direction } => vec![direction.subcommand().to_string()],
            Operation::Passthrough { args } => args.clone(),
        }
    }

    /// Human-readable command text ("push", "deployments list")
    pub fn command_text(&self) -> String {
        self.args().join(" ")
    }

    pub fn progress_label(&self) -> String {
        match self {
            Operation::Sync { direction } => direction.progressive().to_string(),
            Operation::Passthrough { .. } => format!("running \"{}\"...", self.command_text()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_args_are_single_subcommand() {
        assert_eq!(Operation::push().args(), vec!["push"]);
        assert_eq!(Operation::pull().args(), vec!["pull"]);
    }

    #[test]
    fn passthrough_args_are_forwarded_verbatim() {
        let op = Operation::passthrough(vec!["deployments".into(), "--json".into()]);
        assert_eq!(op.args(), vec!["deployments", "--json"]);
        assert_eq!(op.command_text(), "deployments --json");
    }

    #[test]
    fn progress_labels() {
        assert_eq!(Operation::push().progress_label(), "pushing...");
        assert_eq!(Operation::pull().progress_label(), "pulling...");
        assert_eq!(
            Operation::passthrough(vec!["status".into()]).progress_label(),
            "running \"status\"..."
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&Operation::push()).unwrap();
        assert_eq!(json, r#"{"kind":"sync","direction":"push"}"#);
    }
}
