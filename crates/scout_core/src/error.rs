use std::fmt;

use thiserror::Error;

/// The remote call a [`SyncFailure`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOp {
    ListTasks,
    CreateTask,
    FetchLeads,
}

impl fmt::Display for RemoteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteOp::ListTasks => write!(f, "list tasks"),
            RemoteOp::CreateTask => write!(f, "create task"),
            RemoteOp::FetchLeads => write!(f, "fetch leads"),
        }
    }
}

/// A remote call failed. Network errors, bad statuses and malformed payloads
/// all collapse into this; the message keeps the detail for the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {message}")]
pub struct SyncFailure {
    pub operation: RemoteOp,
    pub message: String,
}

impl SyncFailure {
    pub fn new(operation: RemoteOp, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}
