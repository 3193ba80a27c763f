pub mod action;
pub mod attributes;
pub mod payload;
pub mod range;

pub use action::{ActionExecutor, ActionRequest, DiscardExecutor, IssueAction};
pub use attributes::{Attributes, IssueStatus, CLOSED_STATUS};
pub use payload::RawPayload;
pub use range::{decompose, LineSegment, TextRange, UNBOUNDED_COLUMN};
