use std::path::PathBuf;
use std::sync::Arc;

use libissuedeck_core::{ActionExecutor, Attributes, DeckError, Issue, IssueAction};
use libissuedeck_ipc::{ActionEnvelope, ChannelExecutor, IpcError, OutboxExecutor};
use serde::Serialize;
use tracing::info;

use crate::output::OutputMode;

#[derive(Serialize)]
struct ActionOutput {
    key: String,
    url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    outbox: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    envelope: Option<ActionEnvelope>,
}

/// Dispatch `action` for `key`.
///
/// With an outbox the request is appended there. Without one, JSON mode
/// reports the request inside the response envelope and the other modes
/// write the bare request line to stdout.
pub fn run(
    out: OutputMode,
    outbox: Option<PathBuf>,
    key: &str,
    action: IssueAction,
) -> Result<(), DeckError> {
    if key.trim().is_empty() {
        return Err(DeckError::InvalidArgs("issue key must not be empty".to_string()));
    }
    let url = action.endpoint();

    match outbox {
        Some(path) => {
            let executor = OutboxExecutor::open(&path).map_err(ipc_error)?;
            dispatch(key, action, Arc::new(executor));
            info!(%url, outbox = %path.display(), "action dispatched");

            let outbox = path.to_string_lossy().to_string();
            if out.is_json() {
                out.success(&ActionOutput {
                    key: key.to_string(),
                    url,
                    outbox: Some(outbox),
                    envelope: None,
                });
            } else {
                out.human(&format!("{} {} -> {}", url, key, outbox));
            }
        }
        None if out.is_json() => {
            let (executor, mut receiver) = ChannelExecutor::new();
            dispatch(key, action, Arc::new(executor));
            let envelope = receiver
                .try_recv()
                .ok_or_else(|| DeckError::Internal("action was not dispatched".to_string()))?;
            out.success(&ActionOutput {
                key: key.to_string(),
                url,
                outbox: None,
                envelope: Some(envelope),
            });
        }
        None => dispatch(key, action, Arc::new(OutboxExecutor::stdout())),
    }
    Ok(())
}

fn dispatch(key: &str, action: IssueAction, executor: Arc<dyn ActionExecutor>) {
    let attributes = Attributes {
        key: Some(key.to_string()),
        ..Default::default()
    };
    Issue::with_attributes(attributes, executor).dispatch(action);
}

fn ipc_error(e: IpcError) -> DeckError {
    match e {
        IpcError::Io(io) => DeckError::Io(io),
        IpcError::Json(json) => DeckError::Json(json),
        other => DeckError::Internal(other.to_string()),
    }
}
