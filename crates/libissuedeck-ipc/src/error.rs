//! IPC error types

use thiserror::Error;

/// Errors that can occur while handing off or reading back actions
#[derive(Error, Debug)]
pub enum IpcError {
    /// The receiving side of a channel is gone
    #[error("Action channel closed")]
    ChannelClosed,

    /// Envelope written by an incompatible version
    #[error("Schema version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: u32, actual: u32 },

    /// Malformed outbox line
    #[error("Invalid outbox line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
