//! The issue model: canonical attributes plus action dispatch

use std::sync::Arc;
use serde_json::Value;
use tracing::debug;

use crate::error::DeckError;
use crate::types::action::{ActionExecutor, ActionRequest, DiscardExecutor, IssueAction, ISSUES_URL_ROOT};
use crate::types::attributes::{Attributes, IssueStatus};
use crate::types::payload::RawPayload;
use crate::types::range::{decompose, LineSegment, TextRange};

/// One issue as seen by the UI layer.
///
/// Attributes only change through [`Issue::reset`] and [`Issue::refresh`];
/// actions go out through the injected executor and leave local state as is.
pub struct Issue {
    attributes: Attributes,
    executor: Arc<dyn ActionExecutor>,
}

impl Issue {
    /// An empty issue dispatching through `executor`
    pub fn new(executor: Arc<dyn ActionExecutor>) -> Self {
        Self::with_attributes(Attributes::default(), executor)
    }

    /// An issue seeded with `attributes`; closed-issue suppression applies
    pub fn with_attributes(mut attributes: Attributes, executor: Arc<dyn ActionExecutor>) -> Self {
        attributes.suppress_closed();
        Self {
            attributes,
            executor,
        }
    }

    /// An issue with no executor; actions are logged and dropped
    pub fn detached(attributes: Attributes) -> Self {
        Self::with_attributes(attributes, Arc::new(DiscardExecutor))
    }

    /// Collection root the action endpoints live under
    pub fn url_root() -> &'static str {
        ISSUES_URL_ROOT
    }

    /// Normalize a raw server payload, bare or wrapped under `issue`
    pub fn parse(payload: Value) -> Result<Attributes, DeckError> {
        let raw = RawPayload::from_value(payload)?;
        debug!(wrapped = raw.is_wrapped(), "parsing issue payload");
        raw.into_attributes()
    }

    /// Replace every attribute with `attributes`
    pub fn reset(&mut self, mut attributes: Attributes) {
        attributes.suppress_closed();
        debug!(key = ?attributes.key, "resetting issue attributes");
        self.attributes = attributes;
    }

    /// Parse a freshly fetched payload and reset to it
    pub fn refresh(&mut self, payload: Value) -> Result<(), DeckError> {
        let attributes = Self::parse(payload)?;
        self.reset(attributes);
        Ok(())
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn key(&self) -> Option<&str> {
        self.attributes.key.as_deref()
    }

    pub fn status(&self) -> Option<&IssueStatus> {
        self.attributes.status.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.attributes.is_closed()
    }

    pub fn text_range(&self) -> Option<&TextRange> {
        self.attributes.text_range.as_ref()
    }

    pub fn flows(&self) -> &[Value] {
        self.attributes.flows.as_deref().unwrap_or(&[])
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.attributes.get(name)
    }

    pub fn to_json(&self) -> Value {
        self.attributes.to_value()
    }

    /// Per-line highlight segments of the issue's text range
    pub fn linear_locations(&self) -> Vec<LineSegment> {
        decompose(self.text_range())
    }

    /// Assign to `assignee`, or unassign with `None`
    pub fn assign(&self, assignee: Option<&str>) {
        self.dispatch(IssueAction::Assign(assignee.map(str::to_string)));
    }

    /// Attach to `plan`, or unplan with `None`
    pub fn plan(&self, plan: Option<&str>) {
        self.dispatch(IssueAction::Plan(plan.map(str::to_string)));
    }

    /// Change severity; the value is not checked locally
    pub fn set_severity(&self, severity: Option<&str>) {
        self.dispatch(IssueAction::SetSeverity(severity.map(str::to_string)));
    }

    /// Send `action` for this issue to the executor, exactly once
    pub fn dispatch(&self, action: IssueAction) {
        let request = ActionRequest::new(self.key(), &action);
        debug!(url = %request.url, key = ?self.key(), "dispatching issue action");
        self.executor.execute(request);
    }
}

impl std::fmt::Debug for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Issue")
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

impl Default for Issue {
    fn default() -> Self {
        Self::detached(Attributes::default())
    }
}
