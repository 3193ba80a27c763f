use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "issuedeck", about = "Issue payloads, highlight segments, and issue actions", version)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress human-readable output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Config file (default: ./issuedeck.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// JSON-lines file receiving dispatched actions (default: stdout)
    #[arg(long, global = true)]
    pub outbox: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a raw issue payload
    Parse {
        /// Payload file ("-" or omitted for stdin)
        file: Option<PathBuf>,
    },

    /// Print the per-line highlight segments of an issue's text range
    Locations {
        /// Payload file ("-" or omitted for stdin)
        file: Option<PathBuf>,
    },

    /// Assign an issue, or unassign when no login is given
    Assign {
        /// Issue key
        key: String,
        /// Assignee login
        assignee: Option<String>,
    },

    /// Attach an issue to an action plan, or detach when no plan is given
    Plan {
        /// Issue key
        key: String,
        /// Action plan identifier
        plan: Option<String>,
    },

    /// Change the severity of an issue
    Severity {
        /// Issue key
        key: String,
        /// Severity level (e.g. BLOCKER); not checked locally
        severity: Option<String>,
    },
}
