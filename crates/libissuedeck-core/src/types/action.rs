use std::sync::Arc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Collection root all issue endpoints hang from
pub const ISSUES_URL_ROOT: &str = "/api/issues";

pub const ASSIGN_URL: &str = "/api/issues/assign";
pub const PLAN_URL: &str = "/api/issues/plan";
pub const SET_SEVERITY_URL: &str = "/api/issues/set_severity";

/// A mutating intent against one issue. `None` clears the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "value")]
pub enum IssueAction {
    Assign(Option<String>),
    Plan(Option<String>),
    SetSeverity(Option<String>),
}

impl IssueAction {
    pub fn endpoint(&self) -> &'static str {
        match self {
            IssueAction::Assign(_) => ASSIGN_URL,
            IssueAction::Plan(_) => PLAN_URL,
            IssueAction::SetSeverity(_) => SET_SEVERITY_URL,
        }
    }

    /// Name of the data member carrying the value
    pub fn field(&self) -> &'static str {
        match self {
            IssueAction::Assign(_) => "assignee",
            IssueAction::Plan(_) => "plan",
            IssueAction::SetSeverity(_) => "severity",
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            IssueAction::Assign(v) | IssueAction::Plan(v) | IssueAction::SetSeverity(v) => {
                v.as_deref()
            }
        }
    }
}

/// The message handed to an [`ActionExecutor`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub url: String,
    pub data: Map<String, Value>,
}

impl ActionRequest {
    /// Build the request for `action` on the issue identified by `issue_key`.
    ///
    /// Absent values are sent as an explicit `null`, never omitted.
    pub fn new(issue_key: Option<&str>, action: &IssueAction) -> Self {
        let mut data = Map::new();
        data.insert("issue".to_string(), optional_string(issue_key));
        data.insert(action.field().to_string(), optional_string(action.value()));
        Self {
            url: action.endpoint().to_string(),
            data,
        }
    }

    /// The issue key carried in `data`, if any
    pub fn issue_key(&self) -> Option<&str> {
        self.data.get("issue").and_then(Value::as_str)
    }
}

fn optional_string(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |v| Value::String(v.to_string()))
}

/// Capability that performs a remote issue action.
///
/// Fire-and-forget: completion, retries and failures belong to the
/// implementation and whoever observes it.
pub trait ActionExecutor: Send + Sync {
    fn execute(&self, request: ActionRequest);
}

impl<T: ActionExecutor + ?Sized> ActionExecutor for Arc<T> {
    fn execute(&self, request: ActionRequest) {
        (**self).execute(request)
    }
}

impl<T: ActionExecutor + ?Sized> ActionExecutor for Box<T> {
    fn execute(&self, request: ActionRequest) {
        (**self).execute(request)
    }
}

/// Executor for a model with nowhere to send actions
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardExecutor;

impl ActionExecutor for DiscardExecutor {
    fn execute(&self, request: ActionRequest) {
        tracing::warn!(url = %request.url, "no action executor attached, dropping request");
    }
}
