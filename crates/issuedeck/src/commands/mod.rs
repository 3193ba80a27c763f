pub mod action;
pub mod locations;
pub mod parse;

use std::io::Read;
use std::path::Path;

use libissuedeck_core::{Attributes, DeckError, Issue};
use serde_json::Value;
use tracing::debug;

/// Read a JSON payload from `file`, or stdin for `None` / "-"
pub fn read_payload(file: Option<&Path>) -> Result<Value, DeckError> {
    let content = match file {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(DeckError::NotFound(format!("payload file {}", path.display())));
            }
            debug!(path = %path.display(), "reading payload");
            std::fs::read_to_string(path)?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let value = serde_json::from_str(&content)?;
    Ok(value)
}

/// Read and normalize a payload
pub fn load_attributes(file: Option<&Path>) -> Result<Attributes, DeckError> {
    Issue::parse(read_payload(file)?)
}
