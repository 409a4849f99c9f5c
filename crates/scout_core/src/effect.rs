use crate::{RequestId, TaskId};

/// Remote calls requested by [`crate::update`]. Each carries the id its
/// completion message must echo back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ListTasks { request_id: RequestId },
    CreateTask { request_id: RequestId, www: String },
    FetchLeads { request_id: RequestId, task_id: TaskId },
}
