mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Command};
use context::DeckContext;
use libissuedeck_core::{DeckError, IssueAction};
use output::OutputMode;

fn main() {
    let cli = Cli::parse();

    let out = OutputMode::from_cli(&cli);
    let result = run_command(&cli, out);

    if let Err(e) = result {
        out.error(&e);
        std::process::exit(e.exit_code());
    }
}

fn run_command(cli: &Cli, out: OutputMode) -> Result<(), DeckError> {
    let ctx = DeckContext::resolve(cli)?;
    ctx.init_logging(cli);
    if let Some(path) = &ctx.config_path {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    let outbox = ctx.outbox_path(cli);
    match &cli.command {
        Command::Parse { file } => commands::parse::run(out, file.as_deref()),
        Command::Locations { file } => commands::locations::run(out, file.as_deref()),
        Command::Assign { key, assignee } => {
            commands::action::run(out, outbox, key, IssueAction::Assign(assignee.clone()))
        }
        Command::Plan { key, plan } => {
            commands::action::run(out, outbox, key, IssueAction::Plan(plan.clone()))
        }
        Command::Severity { key, severity } => {
            commands::action::run(out, outbox, key, IssueAction::SetSeverity(severity.clone()))
        }
    }
}
