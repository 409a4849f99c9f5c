use std::fmt;

use thiserror::Error;

use crate::{LeadRecord, TaskRecord};

pub type RequestId = u64;

/// Completion of a command submitted to [`crate::EngineHandle`].
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    TasksListed {
        request_id: RequestId,
        result: Result<Vec<TaskRecord>, ApiError>,
    },
    TaskCreated {
        request_id: RequestId,
        result: Result<(), ApiError>,
    },
    LeadsFetched {
        request_id: RequestId,
        task_id: String,
        result: Result<Vec<LeadRecord>, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed payload"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
