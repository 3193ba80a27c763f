//! Action executors for issuedeck
//!
//! This crate provides:
//! - The wire envelope for dispatched actions (ActionEnvelope)
//! - An in-process executor backed by a tokio channel (ChannelExecutor)
//! - A JSON-lines outbox executor (OutboxExecutor)

pub mod channel;
pub mod error;
pub mod messages;
pub mod outbox;

pub use channel::{ActionReceiver, ChannelExecutor};
pub use error::IpcError;
pub use messages::ActionEnvelope;
pub use outbox::{read_outbox, OutboxExecutor};

/// Current envelope schema version
pub const IPC_SCHEMA_VERSION: u32 = 1;
