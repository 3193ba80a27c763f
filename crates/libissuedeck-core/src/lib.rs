//! Core library for issuedeck
//!
//! This crate provides:
//! - Text ranges and their decomposition into per-line highlight segments
//! - The canonical issue attribute set, with closed-issue suppression
//! - Payload parsing for bare and `issue`-wrapped server responses
//! - Issue actions (assign, plan, set severity) and the executor port
//! - TOML configuration

pub mod config;
pub mod error;
pub mod model;
pub mod types;

pub use config::{load_config, save_config, DeckConfig, DispatchConfig};
pub use error::DeckError;
pub use model::Issue;
pub use types::action::{ActionExecutor, ActionRequest, DiscardExecutor, IssueAction};
pub use types::attributes::{Attributes, IssueStatus};
pub use types::payload::RawPayload;
pub use types::range::{decompose, LineSegment, TextRange, UNBOUNDED_COLUMN};
