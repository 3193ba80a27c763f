//! Wire envelope for dispatched actions

use libissuedeck_core::ActionRequest;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::IpcError;
use crate::IPC_SCHEMA_VERSION;

/// One action request as handed to a consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    /// Schema version for compatibility checking
    pub schema_version: u32,
    /// Unique request ID for correlation
    pub request_id: String,
    /// The request itself
    pub request: ActionRequest,
}

impl ActionEnvelope {
    /// Wrap a request with a fresh request ID and the current schema version
    pub fn new(request: ActionRequest) -> Self {
        Self {
            schema_version: IPC_SCHEMA_VERSION,
            request_id: Uuid::new_v4().to_string(),
            request,
        }
    }

    /// Reject envelopes from another schema version
    pub fn check_version(&self) -> Result<(), IpcError> {
        if self.schema_version != IPC_SCHEMA_VERSION {
            return Err(IpcError::VersionMismatch {
                expected: IPC_SCHEMA_VERSION,
                actual: self.schema_version,
            });
        }
        Ok(())
    }
}
