use serde_json::{Map, Value};
use crate::error::DeckError;
use super::attributes::{json_kind, Attributes};

/// Member under which servers may wrap a single issue
pub const ROOT_KEY: &str = "issue";

/// A raw issue payload, classified once at the parse boundary
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    /// The object is the attribute set itself
    Bare(Map<String, Value>),
    /// The attribute set sat under `issue`; sibling members are dropped
    Wrapped(Map<String, Value>),
}

impl RawPayload {
    /// Classify a payload.
    ///
    /// Only an object whose `issue` member is itself an object counts as
    /// wrapped. Every other object is taken as bare, `issue` member and all.
    pub fn from_value(value: Value) -> Result<Self, DeckError> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(DeckError::InvalidPayload(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        if matches!(map.get(ROOT_KEY), Some(Value::Object(_))) {
            if let Some(Value::Object(inner)) = map.remove(ROOT_KEY) {
                return Ok(RawPayload::Wrapped(inner));
            }
        }
        Ok(RawPayload::Bare(map))
    }

    pub fn from_str(json: &str) -> Result<Self, DeckError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, RawPayload::Wrapped(_))
    }

    /// Unwrapped attribute members, before normalization
    pub fn into_members(self) -> Map<String, Value> {
        match self {
            RawPayload::Bare(map) | RawPayload::Wrapped(map) => map,
        }
    }

    /// Normalize into the canonical attribute set
    pub fn into_attributes(self) -> Result<Attributes, DeckError> {
        Attributes::from_map(self.into_members())
    }
}
