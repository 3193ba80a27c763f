//! JSON-lines outbox: one envelope per line, appended as actions go out

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Mutex;

use libissuedeck_core::{ActionExecutor, ActionRequest};
use tracing::{debug, warn};

use crate::error::IpcError;
use crate::messages::ActionEnvelope;

/// Executor writing each request as a JSON line to a writer
pub struct OutboxExecutor {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl OutboxExecutor {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Append to the file at `path`, creating it if needed
    pub fn open(path: &Path) -> Result<Self, IpcError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(Box::new(file)))
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    /// Write one request, returning its envelope
    pub fn try_execute(&self, request: ActionRequest) -> Result<ActionEnvelope, IpcError> {
        let envelope = ActionEnvelope::new(request);
        let line = serde_json::to_string(&envelope)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| IpcError::Io(std::io::Error::other("outbox writer poisoned")))?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(envelope)
    }
}

impl ActionExecutor for OutboxExecutor {
    fn execute(&self, request: ActionRequest) {
        let url = request.url.clone();
        match self.try_execute(request) {
            Ok(envelope) => debug!(%url, request_id = %envelope.request_id, "action written"),
            Err(e) => warn!(%url, error = %e, "failed to write action"),
        }
    }
}

/// Read every envelope from an outbox file, skipping blank lines
pub fn read_outbox(path: &Path) -> Result<Vec<ActionEnvelope>, IpcError> {
    let file = std::fs::File::open(path)?;
    let mut envelopes = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let envelope: ActionEnvelope = serde_json::from_str(&line)
            .map_err(|source| IpcError::InvalidLine {
                line: index + 1,
                source,
            })?;
        envelope.check_version()?;
        envelopes.push(envelope);
    }
    Ok(envelopes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use libissuedeck_core::IssueAction;
    use tempfile::tempdir;

    #[test]
    fn test_outbox_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("actions.jsonl");

        let outbox = OutboxExecutor::open(&path).unwrap();
        outbox.execute(ActionRequest::new(Some("k"), &IssueAction::Assign(Some("admin".into()))));
        drop(outbox);

        let reopened = OutboxExecutor::open(&path).unwrap();
        reopened.execute(ActionRequest::new(Some("k"), &IssueAction::Plan(None)));

        let envelopes = read_outbox(&path).unwrap();
        assert_eq!(envelopes.len(), 2);
        assert_eq!(envelopes[0].request.url, "/api/issues/assign");
        assert_eq!(envelopes[1].request.url, "/api/issues/plan");
    }

    #[test]
    fn test_invalid_line_reports_position() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("actions.jsonl");
        std::fs::write(&path, "\n{not json}\n").unwrap();
        assert!(matches!(
            read_outbox(&path),
            Err(IpcError::InvalidLine { line: 2, .. })
        ));
    }
}
