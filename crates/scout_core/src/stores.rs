use crate::{Lead, Task, TaskId};

/// The task list as last reported by the backend, plus the active selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    active: Option<TaskId>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a complete new task list. The active id is left alone; it is
    /// a lookup key, not a reference into the list.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// First completed task in backend order.
    pub fn find_primary(&self) -> Option<&Task> {
        self.tasks.iter().find(|task| task.status.is_complete())
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn set_active(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&TaskId> {
        self.active.as_ref()
    }

    /// Makes `id` active if it names a completed task.
    ///
    /// Returns `false`, leaving the selection untouched, for unknown or
    /// unfinished tasks.
    pub fn select(&mut self, id: &TaskId) -> bool {
        let selectable = self
            .get(id)
            .is_some_and(|task| task.status.is_complete());
        if selectable {
            self.active = Some(id.clone());
        }
        selectable
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Leads of whichever task the controller last fetched for.
///
/// The store does not know which task that was; callers only replace its
/// contents with a response that still matches the active selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadStore {
    leads: Vec<Lead>,
}

impl LeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, leads: Vec<Lead>) {
        self.leads = leads;
    }

    pub fn clear(&mut self) {
        self.leads.clear();
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}
