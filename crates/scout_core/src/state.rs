use std::collections::BTreeSet;

use crate::view_model::{AppViewModel, LeadRowView, TaskRowView};
use crate::{parse_search_term, Lead, LeadStore, SyncFailure, Task, TaskId, TaskStore};

/// Tags every remote call so its completion can be matched to the request
/// that is still current.
pub type RequestId = u64;

/// What to do once a task list arrives.
///
/// Ordered so that `max` keeps the stronger follow-up when requests overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum ListFollowUp {
    TasksOnly,
    LoadPrimaryLeads,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingList {
    request_id: RequestId,
    follow_up: ListFollowUp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingLeads {
    request_id: RequestId,
    task_id: TaskId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    tasks: TaskStore,
    leads: LeadStore,
    leads_task: Option<TaskId>,
    input: String,
    next_request_id: RequestId,
    pending_list: Option<PendingList>,
    pending_leads: Option<PendingLeads>,
    pending_creates: BTreeSet<RequestId>,
    last_failure: Option<SyncFailure>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let active = self.tasks.active();
        let search_term = if self.input.is_empty() {
            None
        } else {
            parse_search_term(&self.input)
        };

        AppViewModel {
            input: self.input.clone(),
            search_term,
            tasks: self
                .tasks
                .tasks()
                .iter()
                .enumerate()
                .map(|(index, task)| TaskRowView::new(index + 1, task, active))
                .collect(),
            leads: self.leads.leads().iter().map(LeadRowView::from).collect(),
            active_task: active.cloned(),
            leads_task: self.leads_task.clone(),
            tasks_loading: self.tasks_loading(),
            leads_loading: self.leads_loading(),
            creating: self.creating(),
            last_failure: self.last_failure.as_ref().map(ToString::to_string),
        }
    }

    /// Returns whether anything visible changed since the last call, and
    /// resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn leads(&self) -> &LeadStore {
        &self.leads
    }

    pub fn active_task(&self) -> Option<&TaskId> {
        self.tasks.active()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn tasks_loading(&self) -> bool {
        self.pending_list.is_some()
    }

    pub fn leads_loading(&self) -> bool {
        self.pending_leads.is_some()
    }

    pub fn creating(&self) -> bool {
        !self.pending_creates.is_empty()
    }

    pub fn is_busy(&self) -> bool {
        self.tasks_loading() || self.leads_loading() || self.creating()
    }

    pub fn last_failure(&self) -> Option<&SyncFailure> {
        self.last_failure.as_ref()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn allocate_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Starts a task list request; it supersedes any list request in flight.
    pub(crate) fn begin_task_list(&mut self, follow_up: ListFollowUp) -> RequestId {
        let follow_up = self
            .pending_list
            .as_ref()
            .map_or(follow_up, |pending| pending.follow_up.max(follow_up));
        let request_id = self.allocate_request_id();
        self.pending_list = Some(PendingList {
            request_id,
            follow_up,
        });
        self.mark_dirty();
        request_id
    }

    /// Settles the current list request. `None` means the completion is
    /// stale and must be ignored.
    pub(crate) fn finish_task_list(&mut self, request_id: RequestId) -> Option<ListFollowUp> {
        let follow_up = match &self.pending_list {
            Some(pending) if pending.request_id == request_id => pending.follow_up,
            _ => return None,
        };
        self.pending_list = None;
        self.mark_dirty();
        Some(follow_up)
    }

    /// Starts a lead request for `task_id`; earlier lead requests become stale.
    pub(crate) fn begin_lead_fetch(&mut self, task_id: TaskId) -> RequestId {
        let request_id = self.allocate_request_id();
        self.pending_leads = Some(PendingLeads {
            request_id,
            task_id,
        });
        self.mark_dirty();
        request_id
    }

    /// Settles a lead request if it is the latest one and still targets the
    /// active task. Returns `false` for stale completions.
    pub(crate) fn finish_lead_fetch(&mut self, request_id: RequestId, task_id: &TaskId) -> bool {
        let is_latest = matches!(
            &self.pending_leads,
            Some(pending) if pending.request_id == request_id && &pending.task_id == task_id
        );
        if !is_latest || self.tasks.active() != Some(task_id) {
            return false;
        }
        self.pending_leads = None;
        self.mark_dirty();
        true
    }

    pub(crate) fn abandon_lead_fetch(&mut self) {
        if self.pending_leads.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_create(&mut self) -> RequestId {
        let request_id = self.allocate_request_id();
        self.pending_creates.insert(request_id);
        self.mark_dirty();
        request_id
    }

    pub(crate) fn finish_create(&mut self, request_id: RequestId) -> bool {
        let known = self.pending_creates.remove(&request_id);
        if known {
            self.mark_dirty();
        }
        known
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut TaskStore {
        &mut self.tasks
    }

    pub(crate) fn apply_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks.replace_all(tasks);
        self.mark_dirty();
    }

    pub(crate) fn apply_leads(&mut self, task_id: TaskId, leads: Vec<Lead>) {
        self.leads.replace_all(leads);
        self.leads_task = Some(task_id);
        self.mark_dirty();
    }

    pub(crate) fn clear_leads(&mut self) {
        self.leads.clear();
        self.leads_task = None;
        self.mark_dirty();
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.mark_dirty();
        }
    }

    pub(crate) fn clear_input(&mut self) {
        self.set_input(String::new());
    }

    pub(crate) fn record_failure(&mut self, failure: SyncFailure) {
        self.last_failure = Some(failure);
        self.mark_dirty();
    }

    pub(crate) fn clear_failure(&mut self) {
        if self.last_failure.take().is_some() {
            self.mark_dirty();
        }
    }
}
