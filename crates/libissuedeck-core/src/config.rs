use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::DeckError;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "issuedeck.toml";

/// Tool configuration stored as TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Log filter used when RUST_LOG is not set (e.g. "debug")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Where dispatched actions go
    #[serde(default, skip_serializing_if = "DispatchConfig::is_empty")]
    pub dispatch: DispatchConfig,
}

/// Action dispatch configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// JSON-lines file receiving action requests; stdout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbox: Option<PathBuf>,
}

impl DispatchConfig {
    pub fn is_empty(&self) -> bool {
        self.outbox.is_none()
    }
}

/// Load config from `path`, `None` if the file does not exist
pub fn load_config(path: &Path) -> Result<Option<DeckConfig>, DeckError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let config: DeckConfig = toml::from_str(&content)?;
    Ok(Some(config))
}

/// Save config to `path`, creating parent directories
pub fn save_config(path: &Path, config: &DeckConfig) -> Result<(), DeckError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
