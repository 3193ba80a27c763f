use thiserror::Error;

/// Main error type for issuedeck operations
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("malformed text range: start line {start_line}, end line {end_line}")]
    MalformedRange { start_line: u32, end_line: u32 },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DeckError {
    /// Get the error code for JSON output
    pub fn error_code(&self) -> &'static str {
        match self {
            DeckError::InvalidArgs(_) => "invalid_args",
            DeckError::InvalidPayload(_) => "invalid_payload",
            DeckError::MalformedRange { .. } => "malformed_range",
            DeckError::NotFound(_) => "not_found",
            DeckError::Io(_) => "io_error",
            DeckError::Json(_) => "invalid_payload",
            DeckError::TomlParse(_) => "invalid_args",
            DeckError::TomlSerialize(_) => "internal_error",
            DeckError::Internal(_) => "internal_error",
        }
    }

    /// Get the exit code for CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            DeckError::InvalidArgs(_) => 2,
            DeckError::TomlParse(_) => 2,
            DeckError::NotFound(_) => 3,
            DeckError::InvalidPayload(_) => 4,
            DeckError::MalformedRange { .. } => 4,
            DeckError::Json(_) => 4,
            DeckError::Io(_) => 5,
            _ => 1,
        }
    }

    /// Get actionable suggestions for fixing the error
    pub fn suggestions(&self) -> Vec<&'static str> {
        match self {
            DeckError::InvalidPayload(_) | DeckError::Json(_) => vec![
                "Payloads must be a JSON object, either bare or wrapped as {\"issue\": {...}}",
            ],
            DeckError::MalformedRange { .. } => vec![
                "Text ranges need 1-based lines with startLine <= endLine",
            ],
            DeckError::NotFound(msg) if msg.contains("config") => vec![
                "Pass --config with an existing file, or omit it to use defaults",
            ],
            DeckError::TomlParse(_) => vec!["Check the config file for TOML syntax errors"],
            _ => vec![],
        }
    }

    /// Create a MalformedRange error for the given line pair
    pub fn malformed_range(start_line: u32, end_line: u32) -> Self {
        DeckError::MalformedRange {
            start_line,
            end_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DeckError::malformed_range(5, 4).error_code(), "malformed_range");
        assert_eq!(
            DeckError::InvalidPayload("array".to_string()).error_code(),
            "invalid_payload"
        );
        assert_eq!(DeckError::Internal("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_malformed_range_message() {
        let err = DeckError::malformed_range(7, 3);
        assert_eq!(
            err.to_string(),
            "malformed text range: start line 7, end line 3"
        );
        assert_eq!(err.exit_code(), 4);
        assert!(!err.suggestions().is_empty());
    }
}
