use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use scout_logging::scout_trace;

use crate::{ApiError, ApiSettings, EngineEvent, RequestId, ReqwestApi, TaskApi};

enum EngineCommand {
    ListTasks { request_id: RequestId },
    CreateTask { request_id: RequestId, www: String },
    FetchLeads { request_id: RequestId, task_id: String },
}

/// Runs remote calls off the caller's thread.
///
/// Every command is spawned as its own task, so calls overlap and complete
/// in whatever order the backend answers. Nothing is cancelled; callers tell
/// fresh results from stale ones by the echoed request id.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn TaskApi>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("scout-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let api = api.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        let event = handle_command(api.as_ref(), command).await;
                        let _ = event_tx.send(event);
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    /// Engine backed by the HTTP client.
    pub fn with_settings(settings: ApiSettings) -> Result<Self, EngineStartError> {
        let api = ReqwestApi::new(settings)?;
        Ok(Self::new(Arc::new(api))?)
    }

    pub fn list_tasks(&self, request_id: RequestId) {
        self.submit(EngineCommand::ListTasks { request_id });
    }

    pub fn create_task(&self, request_id: RequestId, www: impl Into<String>) {
        self.submit(EngineCommand::CreateTask {
            request_id,
            www: www.into(),
        });
    }

    pub fn fetch_leads(&self, request_id: RequestId, task_id: impl Into<String>) {
        self.submit(EngineCommand::FetchLeads {
            request_id,
            task_id: task_id.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn submit(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineStartError {
    #[error("invalid api settings: {0}")]
    Api(#[from] ApiError),
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
}

async fn handle_command(api: &dyn TaskApi, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::ListTasks { request_id } => {
            scout_trace!("list_tasks request_id={}", request_id);
            EngineEvent::TasksListed {
                request_id,
                result: api.list_tasks().await,
            }
        }
        EngineCommand::CreateTask { request_id, www } => {
            scout_trace!("create_task request_id={}", request_id);
            EngineEvent::TaskCreated {
                request_id,
                result: api.create_task(&www).await,
            }
        }
        EngineCommand::FetchLeads {
            request_id,
            task_id,
        } => {
            scout_trace!("get_leads request_id={} task_id={}", request_id, task_id);
            let result = api.get_leads(&task_id).await;
            EngineEvent::LeadsFetched {
                request_id,
                task_id,
                result,
            }
        }
    }
}
