//! Lead scout engine: backend HTTP client and remote-call execution.
mod api;
mod engine;
mod types;
mod wire;

pub use api::{ApiSettings, ReqwestApi, TaskApi, DEFAULT_BASE_URL};
pub use engine::{EngineHandle, EngineStartError};
pub use types::{ApiError, EngineEvent, FailureKind, RequestId};
pub use wire::{LeadRecord, TaskRecord, WireId, WireScalar, WireStatus};
