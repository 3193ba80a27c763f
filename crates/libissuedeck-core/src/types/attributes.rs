use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::error::DeckError;
use super::range::TextRange;

/// Status value after which an issue stops exposing location data
pub const CLOSED_STATUS: &str = "CLOSED";

/// Issue lifecycle state. Opaque apart from the closed terminal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueStatus(String);

impl IssueStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn closed() -> Self {
        Self(CLOSED_STATUS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_closed(&self) -> bool {
        self.0 == CLOSED_STATUS
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wire names of the promoted attributes
pub const RESERVED_NAMES: [&str; 4] = ["key", "status", "textRange", "flows"];

/// Canonical attribute set of an issue.
///
/// `key`, `status`, `textRange` and `flows` are promoted to typed fields;
/// every other member of the payload is kept in `extra` untouched and
/// merged back in on read. A reserved name may only appear in `extra` as an
/// explicit `null` standing in for its empty typed field; any other value
/// stored there under a reserved name is never read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    pub key: Option<String>,
    pub status: Option<IssueStatus>,
    pub text_range: Option<TextRange>,
    /// Flow annotations, opaque to the model
    pub flows: Option<Vec<Value>>,
    pub extra: Map<String, Value>,
}

impl Attributes {
    /// Build an attribute set from an already unwrapped JSON object.
    ///
    /// Closed-issue suppression runs on the raw members first, so whatever
    /// a closed payload carries under `textRange` is discarded unread.
    /// Explicit `null`s on promoted attributes are kept.
    pub fn from_map(mut map: Map<String, Value>) -> Result<Self, DeckError> {
        suppress_closed_members(&mut map);

        let mut nulls = Vec::new();
        for name in RESERVED_NAMES {
            if map.get(name).is_some_and(Value::is_null) {
                map.remove(name);
                nulls.push(name);
            }
        }

        let key = map.remove("key").map(|v| expect_string("key", v)).transpose()?;
        let status = map
            .remove("status")
            .map(|v| expect_string("status", v).map(IssueStatus::new))
            .transpose()?;
        let text_range = map
            .remove("textRange")
            .map(|v| {
                serde_json::from_value::<TextRange>(v).map_err(|e| {
                    DeckError::InvalidPayload(format!("attribute `textRange`: {}", e))
                })
            })
            .transpose()?;
        let flows = match map.remove("flows") {
            Some(Value::Array(flows)) => Some(flows),
            Some(other) => return Err(invalid_attribute("flows", "an array", &other)),
            None => None,
        };

        let mut extra = map;
        for name in nulls {
            extra.insert(name.to_string(), Value::Null);
        }

        Ok(Self {
            key,
            status,
            text_range,
            flows,
            extra,
        })
    }

    /// Same as [`Attributes::from_map`] for an arbitrary JSON value
    pub fn from_value(value: Value) -> Result<Self, DeckError> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(DeckError::InvalidPayload(format!(
                "attributes must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.status.as_ref().is_some_and(IssueStatus::is_closed)
    }

    /// Drop location data when the issue is closed, wherever it is stored
    pub fn suppress_closed(&mut self) {
        if self.is_closed() {
            self.text_range = None;
            self.flows = Some(Vec::new());
            self.extra.remove("textRange");
            self.extra.remove("flows");
        }
    }

    /// Read one attribute by its wire name, promoted or not
    pub fn get(&self, name: &str) -> Option<Value> {
        let typed = match name {
            "key" => self.key.clone().map(Value::String),
            "status" => self.status.as_ref().map(|s| Value::String(s.as_str().to_string())),
            "textRange" => self.text_range.as_ref().map(text_range_to_value),
            "flows" => self.flows.clone().map(Value::Array),
            _ => return self.extra.get(name).cloned(),
        };
        typed.or_else(|| self.explicit_null(name))
    }

    /// Merged view of all attributes, as the wire would carry them
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for name in RESERVED_NAMES {
            if let Some(value) = self.get(name) {
                map.insert(name.to_string(), value);
            }
        }
        for (name, value) in &self.extra {
            if !is_reserved(name) {
                map.insert(name.clone(), value.clone());
            }
        }
        map
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }

    pub fn is_empty(&self) -> bool {
        self.to_map().is_empty()
    }

    fn explicit_null(&self, name: &str) -> Option<Value> {
        self.extra
            .get(name)
            .filter(|v| v.is_null())
            .map(|_| Value::Null)
    }
}

impl Serialize for Attributes {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::deserialize(deserializer)?;
        Attributes::from_map(map).map_err(serde::de::Error::custom)
    }
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// Raw-member form of [`Attributes::suppress_closed`]
pub(crate) fn suppress_closed_members(map: &mut Map<String, Value>) {
    if map.get("status").and_then(Value::as_str) == Some(CLOSED_STATUS) {
        map.remove("textRange");
        map.insert("flows".to_string(), Value::Array(Vec::new()));
    }
}

fn expect_string(name: &str, value: Value) -> Result<String, DeckError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(invalid_attribute(name, "a string", &other)),
    }
}

fn invalid_attribute(name: &str, expected: &str, found: &Value) -> DeckError {
    DeckError::InvalidPayload(format!(
        "attribute `{}` must be {}, got {}",
        name,
        expected,
        json_kind(found)
    ))
}

fn text_range_to_value(range: &TextRange) -> Value {
    serde_json::json!({
        "startLine": range.start_line(),
        "endLine": range.end_line(),
        "startOffset": range.start_offset(),
        "endOffset": range.end_offset(),
    })
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_keys_pass_through() {
        let attrs = Attributes::from_value(json!({ "a": 1, "severity": "MAJOR" })).unwrap();
        assert_eq!(attrs.extra.get("a"), Some(&json!(1)));
        assert_eq!(attrs.to_value(), json!({ "a": 1, "severity": "MAJOR" }));
    }

    #[test]
    fn test_promoted_fields() {
        let attrs = Attributes::from_value(json!({
            "key": "issue-key",
            "status": "OPEN",
            "textRange": { "startLine": 1, "endLine": 2, "startOffset": 0, "endOffset": 4 },
            "flows": [{ "locations": [] }],
            "assignee": "admin"
        }))
        .unwrap();
        assert_eq!(attrs.key.as_deref(), Some("issue-key"));
        assert_eq!(attrs.status, Some(IssueStatus::new("OPEN")));
        assert_eq!(attrs.text_range.map(|r| r.end_line()), Some(2));
        assert_eq!(attrs.flows.as_ref().map(Vec::len), Some(1));
        assert_eq!(attrs.extra.len(), 1);
        assert_eq!(attrs.get("assignee"), Some(json!("admin")));
        assert_eq!(attrs.get("status"), Some(json!("OPEN")));
        assert_eq!(attrs.get("missing"), None);
    }

    #[test]
    fn test_closed_suppresses_partial_range() {
        let attrs = Attributes::from_value(json!({
            "status": "CLOSED",
            "textRange": { "startLine": 5 },
            "flows": [1, 2, 3]
        }))
        .unwrap();
        assert!(attrs.is_closed());
        assert!(attrs.text_range.is_none());
        assert_eq!(attrs.flows, Some(Vec::new()));
        assert_eq!(attrs.to_value(), json!({ "status": "CLOSED", "flows": [] }));
    }

    #[test]
    fn test_other_statuses_keep_locations() {
        for status in ["OPEN", "RESOLVED", "closed", "REOPENED"] {
            let attrs = Attributes::from_value(json!({ "status": status, "flows": [1] })).unwrap();
            assert_eq!(attrs.flows, Some(vec![json!(1)]), "status {status}");
        }
    }

    #[test]
    fn test_typed_suppression() {
        let mut attrs = Attributes {
            status: Some(IssueStatus::closed()),
            text_range: Some(TextRange::new(1, 1, 0, 1).unwrap()),
            flows: Some(vec![json!(1)]),
            ..Default::default()
        };
        attrs.suppress_closed();
        assert!(attrs.text_range.is_none());
        assert_eq!(attrs.flows, Some(Vec::new()));
    }

    #[test]
    fn test_open_issue_with_bad_range_is_error() {
        let result = Attributes::from_value(json!({
            "status": "OPEN",
            "textRange": { "startLine": 9, "endLine": 2, "startOffset": 0, "endOffset": 0 }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_object_rejected() {
        let err = Attributes::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, DeckError::InvalidPayload(_)));
    }

    #[test]
    fn test_explicit_nulls_pass_through() {
        let payload = json!({ "key": null, "status": null, "textRange": null, "flows": null, "a": 1 });
        let attrs = Attributes::from_value(payload.clone()).unwrap();
        assert!(attrs.key.is_none());
        assert!(attrs.status.is_none());
        assert_eq!(attrs.get("status"), Some(Value::Null));
        assert_eq!(attrs.get("missing"), None);
        assert_eq!(attrs.to_value(), payload);
        assert!(!attrs.is_empty());
    }

    #[test]
    fn test_closed_drops_null_text_range() {
        let attrs =
            Attributes::from_value(json!({ "status": "CLOSED", "textRange": null, "flows": null }))
                .unwrap();
        assert_eq!(attrs.to_value(), json!({ "status": "CLOSED", "flows": [] }));
    }

    #[test]
    fn test_reserved_names_in_extra_are_not_read() {
        let mut extra = Map::new();
        extra.insert("key".to_string(), json!("shadow"));
        extra.insert("textRange".to_string(), json!({ "startLine": 1 }));
        extra.insert("rule".to_string(), json!("js:S100"));
        let attrs = Attributes {
            key: Some("real".to_string()),
            extra,
            ..Default::default()
        };
        assert_eq!(attrs.get("key"), Some(json!("real")));
        assert_eq!(attrs.get("textRange"), None);
        assert_eq!(attrs.to_value(), json!({ "key": "real", "rule": "js:S100" }));
    }

    #[test]
    fn test_non_string_key_names_attribute() {
        let err = Attributes::from_value(json!({ "key": 42 })).unwrap_err();
        match err {
            DeckError::InvalidPayload(msg) => {
                assert_eq!(msg, "attribute `key` must be a string, got a number")
            }
            other => panic!("unexpected error: {other}"),
        }
        let err = Attributes::from_value(json!({ "flows": "x" })).unwrap_err();
        assert!(err.to_string().contains("attribute `flows` must be an array"));
    }

    #[test]
    fn test_bad_range_names_attribute() {
        let err = Attributes::from_value(json!({
            "textRange": { "startLine": 9, "endLine": 2, "startOffset": 0, "endOffset": 0 }
        }))
        .unwrap_err();
        assert!(matches!(&err, DeckError::InvalidPayload(msg) if msg.starts_with("attribute `textRange`")));
    }

    #[test]
    fn test_serde_goes_through_normalization() {
        let attrs: Attributes =
            serde_json::from_value(json!({ "status": "CLOSED", "flows": [1], "a": null })).unwrap();
        assert_eq!(attrs.flows, Some(Vec::new()));
        assert_eq!(
            serde_json::to_value(&attrs).unwrap(),
            json!({ "status": "CLOSED", "flows": [], "a": null })
        );
    }
}
