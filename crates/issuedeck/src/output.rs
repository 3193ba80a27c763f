//! Rendering of command results and errors for the three output modes

use libissuedeck_core::DeckError;
use serde::Serialize;

use crate::cli::Cli;

/// Version of the `--json` response envelope
pub const RESPONSE_SCHEMA_VERSION: u32 = 1;

/// How results reach the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One response envelope per command
    Json,
    /// Tables, messages, pretty-printed data
    Human,
    /// Errors only
    Quiet,
}

/// `--json` envelope; exactly one of `data` and `error` is set
#[derive(Serialize)]
struct Response<T: Serialize> {
    schema_version: u32,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody>,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    exit_code: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<&'static str>,
}

impl ErrorBody {
    fn from_error(err: &DeckError) -> Self {
        Self {
            code: err.error_code(),
            message: err.to_string(),
            exit_code: err.exit_code(),
            suggestions: err.suggestions(),
        }
    }
}

impl OutputMode {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputMode::Json
        } else if cli.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Human
        }
    }

    pub fn is_json(self) -> bool {
        self == OutputMode::Json
    }

    /// Emit a command result: wrapped in JSON mode, pretty-printed for humans
    pub fn success<T: Serialize>(self, data: &T) {
        match self {
            OutputMode::Json => println!("{}", success_response(data)),
            OutputMode::Human => println!("{}", to_pretty(data)),
            OutputMode::Quiet => {}
        }
    }

    /// Emit a line meant for humans only
    pub fn human(self, text: &str) {
        if self == OutputMode::Human {
            println!("{}", text);
        }
    }

    /// Emit an error to stderr; errors are shown in every mode
    pub fn error(self, err: &DeckError) {
        if self.is_json() {
            eprintln!("{}", error_response(err));
            return;
        }
        eprintln!("error: {}", err);
        let suggestions = err.suggestions();
        if !suggestions.is_empty() {
            eprintln!();
            eprintln!("Suggestions:");
            for suggestion in suggestions {
                eprintln!("  - {}", suggestion);
            }
        }
    }
}

fn success_response<T: Serialize>(data: &T) -> String {
    to_pretty(&Response {
        schema_version: RESPONSE_SCHEMA_VERSION,
        ok: true,
        data: Some(data),
        error: None,
    })
}

fn error_response(err: &DeckError) -> String {
    to_pretty(&Response::<()> {
        schema_version: RESPONSE_SCHEMA_VERSION,
        ok: false,
        data: None,
        error: Some(ErrorBody::from_error(err)),
    })
}

fn to_pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"ok\":false,\"error\":{{\"message\":\"{}\"}}}}", e))
}
