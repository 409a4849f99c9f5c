use crate::{Lead, RequestId, SyncFailure, Task, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application start; performs the initial load.
    Started,
    /// User asked to re-fetch tasks and the primary task's leads.
    RefreshClicked,
    /// User edited the search URL input.
    InputChanged(String),
    /// User submitted the current input as a new task.
    SubmitClicked,
    /// User clicked a task row.
    TaskSelected { task_id: TaskId },
    /// A task list request settled.
    TasksLoaded {
        request_id: RequestId,
        result: Result<Vec<Task>, SyncFailure>,
    },
    /// A task creation request settled.
    TaskCreated {
        request_id: RequestId,
        result: Result<(), SyncFailure>,
    },
    /// A lead request for `task_id` settled.
    LeadsLoaded {
        request_id: RequestId,
        task_id: TaskId,
        result: Result<Vec<Lead>, SyncFailure>,
    },
}
