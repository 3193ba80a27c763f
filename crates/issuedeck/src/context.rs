//! Per-invocation context: resolved config and logging

use std::path::PathBuf;

use libissuedeck_core::{config::CONFIG_FILE_NAME, load_config, DeckConfig, DeckError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;

/// Settings for one command run
pub struct DeckContext {
    pub config: DeckConfig,
    pub config_path: Option<PathBuf>,
}

impl DeckContext {
    /// Load config from --config, or ./issuedeck.toml when present
    pub fn resolve(cli: &Cli) -> Result<Self, DeckError> {
        if let Some(path) = &cli.config {
            let config = load_config(path)?.ok_or_else(|| {
                DeckError::NotFound(format!("config file {}", path.display()))
            })?;
            return Ok(Self {
                config,
                config_path: Some(path.clone()),
            });
        }

        let default_path = PathBuf::from(CONFIG_FILE_NAME);
        match load_config(&default_path)? {
            Some(config) => Ok(Self {
                config,
                config_path: Some(default_path),
            }),
            None => Ok(Self {
                config: DeckConfig::default(),
                config_path: None,
            }),
        }
    }

    /// Outbox for dispatched actions: --outbox, then config, else stdout
    pub fn outbox_path(&self, cli: &Cli) -> Option<PathBuf> {
        cli.outbox
            .clone()
            .or_else(|| self.config.dispatch.outbox.clone())
    }

    /// Install the stderr subscriber. RUST_LOG wins over flags and config.
    pub fn init_logging(&self, cli: &Cli) {
        let level = cli
            .log_level
            .as_deref()
            .or(self.config.log_level.as_deref())
            .unwrap_or("warn");

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
