use scout_logging::{scout_debug, scout_warn};

use crate::state::ListFollowUp;
use crate::{AppState, Effect, Msg, RequestId, SyncFailure, Task, TaskId};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started | Msg::RefreshClicked => {
            let request_id = state.begin_task_list(ListFollowUp::LoadPrimaryLeads);
            vec![Effect::ListTasks { request_id }]
        }
        Msg::InputChanged(input) => {
            state.set_input(input);
            Vec::new()
        }
        Msg::SubmitClicked => {
            let www = state.input().trim().to_string();
            if www.is_empty() {
                return (state, Vec::new());
            }
            let request_id = state.begin_create();
            vec![Effect::CreateTask { request_id, www }]
        }
        Msg::TaskSelected { task_id } => {
            if !state.tasks_mut().select(&task_id) {
                return (state, Vec::new());
            }
            state.mark_dirty();
            let request_id = state.begin_lead_fetch(task_id.clone());
            vec![Effect::FetchLeads {
                request_id,
                task_id,
            }]
        }
        Msg::TasksLoaded { request_id, result } => on_tasks_loaded(&mut state, request_id, result),
        Msg::TaskCreated { request_id, result } => {
            if !state.finish_create(request_id) {
                scout_debug!("Ignoring unknown create completion request_id={}", request_id);
                return (state, Vec::new());
            }
            state.clear_input();
            match result {
                Ok(()) => state.clear_failure(),
                Err(failure) => {
                    scout_warn!("{}", failure);
                    state.record_failure(failure);
                }
            }
            let request_id = state.begin_task_list(ListFollowUp::TasksOnly);
            vec![Effect::ListTasks { request_id }]
        }
        Msg::LeadsLoaded {
            request_id,
            task_id,
            result,
        } => {
            if !state.finish_lead_fetch(request_id, &task_id) {
                scout_debug!(
                    "Discarding stale leads request_id={} task_id={}",
                    request_id,
                    task_id
                );
                return (state, Vec::new());
            }
            match result {
                Ok(leads) => {
                    state.apply_leads(task_id, leads);
                    state.clear_failure();
                }
                Err(failure) => {
                    scout_warn!("{}", failure);
                    state.record_failure(failure);
                }
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn on_tasks_loaded(
    state: &mut AppState,
    request_id: RequestId,
    result: Result<Vec<Task>, SyncFailure>,
) -> Vec<Effect> {
    let Some(follow_up) = state.finish_task_list(request_id) else {
        scout_debug!("Discarding stale task list request_id={}", request_id);
        return Vec::new();
    };

    let tasks = match result {
        Ok(tasks) => tasks,
        Err(failure) => {
            scout_warn!("{}", failure);
            state.record_failure(failure);
            return Vec::new();
        }
    };
    state.apply_tasks(tasks);
    state.clear_failure();

    if follow_up == ListFollowUp::TasksOnly {
        return Vec::new();
    }

    let primary: Option<TaskId> = state.tasks().find_primary().map(|task| task.id.clone());
    match primary {
        Some(task_id) => {
            state.tasks_mut().set_active(task_id.clone());
            let request_id = state.begin_lead_fetch(task_id.clone());
            vec![Effect::FetchLeads {
                request_id,
                task_id,
            }]
        }
        None => {
            state.tasks_mut().clear_active();
            state.abandon_lead_fetch();
            state.clear_leads();
            Vec::new()
        }
    }
}
