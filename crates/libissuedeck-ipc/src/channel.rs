//! In-process executor: actions are pushed onto a tokio channel and the
//! owner of the receiver decides when and how they complete

use libissuedeck_core::{ActionExecutor, ActionRequest};
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::error::IpcError;
use crate::messages::ActionEnvelope;

/// Executor that forwards every request to an [`ActionReceiver`]
#[derive(Debug, Clone)]
pub struct ChannelExecutor {
    sender: UnboundedSender<ActionEnvelope>,
}

impl ChannelExecutor {
    /// Create an executor and the receiver observing its requests
    pub fn new() -> (Self, ActionReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, ActionReceiver { receiver })
    }

    /// Whether the receiver has been dropped
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Send one request, reporting a closed channel
    pub fn try_execute(&self, request: ActionRequest) -> Result<String, IpcError> {
        let envelope = ActionEnvelope::new(request);
        let request_id = envelope.request_id.clone();
        self.sender
            .send(envelope)
            .map_err(|_| IpcError::ChannelClosed)?;
        Ok(request_id)
    }
}

impl ActionExecutor for ChannelExecutor {
    fn execute(&self, request: ActionRequest) {
        let url = request.url.clone();
        match self.try_execute(request) {
            Ok(request_id) => debug!(%url, %request_id, "action queued"),
            Err(e) => warn!(%url, error = %e, "dropping action"),
        }
    }
}

/// Receiving end of a [`ChannelExecutor`]
#[derive(Debug)]
pub struct ActionReceiver {
    receiver: UnboundedReceiver<ActionEnvelope>,
}

impl ActionReceiver {
    /// Wait for the next action; `None` once every executor is dropped
    pub async fn recv(&mut self) -> Option<ActionEnvelope> {
        self.receiver.recv().await
    }

    /// Take an already queued action without waiting
    pub fn try_recv(&mut self) -> Option<ActionEnvelope> {
        match self.receiver.try_recv() {
            Ok(envelope) => Some(envelope),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Take everything queued so far
    pub fn drain(&mut self) -> Vec<ActionEnvelope> {
        let mut envelopes = Vec::new();
        while let Some(envelope) = self.try_recv() {
            envelopes.push(envelope);
        }
        envelopes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libissuedeck_core::IssueAction;

    #[test]
    fn test_closed_channel_is_reported() {
        let (executor, receiver) = ChannelExecutor::new();
        drop(receiver);
        assert!(executor.is_closed());
        let request = ActionRequest::new(Some("k"), &IssueAction::Assign(None));
        assert!(matches!(
            executor.try_execute(request.clone()),
            Err(IpcError::ChannelClosed)
        ));
        // The trait entry point swallows the failure
        executor.execute(request);
    }

    #[test]
    fn test_drain_in_order() {
        let (executor, mut receiver) = ChannelExecutor::new();
        executor.execute(ActionRequest::new(Some("a"), &IssueAction::Plan(None)));
        executor.execute(ActionRequest::new(Some("b"), &IssueAction::Plan(None)));
        let keys: Vec<_> = receiver
            .drain()
            .into_iter()
            .map(|e| e.request.issue_key().map(str::to_string))
            .collect();
        assert_eq!(keys, vec![Some("a".to_string()), Some("b".to_string())]);
        assert!(receiver.try_recv().is_none());
    }
}
