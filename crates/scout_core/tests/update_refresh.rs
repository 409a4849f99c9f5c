use std::sync::Once;

use pretty_assertions::assert_eq;
use scout_core::{
    update, AppState, Effect, Lead, LeadId, Msg, RemoteOp, RequestId, SyncFailure, Task, TaskId,
    TaskStatus,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scout_logging::initialize_for_tests);
}

fn task(id: u64, status: i64) -> Task {
    Task {
        id: TaskId::from(id),
        www: format!("https://www.google.com/maps/search/bar+{id}/@1,2,3z"),
        status: TaskStatus::from_ordinal(status),
        date_created: Some(1_700_000_000),
    }
}

fn lead(id: &str, name: &str) -> Lead {
    Lead {
        id: LeadId::new(id),
        name: Some(name.to_string()),
        emails: vec!["Info@Example.com".to_string()],
        ..Lead::default()
    }
}

fn list_request(effects: &[Effect]) -> RequestId {
    match effects {
        [Effect::ListTasks { request_id }] => *request_id,
        other => panic!("expected a single ListTasks effect, got {other:?}"),
    }
}

fn lead_request(effects: &[Effect]) -> (RequestId, TaskId) {
    match effects {
        [Effect::FetchLeads {
            request_id,
            task_id,
        }] => (*request_id, task_id.clone()),
        other => panic!("expected a single FetchLeads effect, got {other:?}"),
    }
}

#[test]
fn initial_load_fetches_primary_leads() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::Started);
    let list_id = list_request(&effects);
    assert!(state.view().tasks_loading);
    assert!(state.consume_dirty());

    let (state, effects) = update(
        state,
        Msg::TasksLoaded {
            request_id: list_id,
            result: Ok(vec![task(1, 1)]),
        },
    );
    let (lead_id, target) = lead_request(&effects);
    assert_eq!(target, TaskId::from(1));
    assert_eq!(state.active_task(), Some(&TaskId::from(1)));
    assert!(!state.tasks_loading());
    assert!(state.leads_loading());

    let (state, effects) = update(
        state,
        Msg::LeadsLoaded {
            request_id: lead_id,
            task_id: target,
            result: Ok(vec![lead("a", "Bar One"), lead("b", "Bar Two")]),
        },
    );
    assert!(effects.is_empty());
    assert!(!state.is_busy());

    let view = state.view();
    assert_eq!(view.leads.len(), 2);
    assert_eq!(view.leads[0].emails, vec!["info@example.com".to_string()]);
    assert_eq!(view.leads_task, Some(TaskId::from(1)));
    assert_eq!(view.tasks[0].name.as_deref(), Some("bar 1"));
    assert_eq!(view.tasks[0].status, "Complete");
    assert_eq!(view.tasks[0].created, "2023-11-14 22:13:20");
    assert!(view.tasks[0].active);
}

#[test]
fn primary_is_first_complete_task_in_response_order() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::RefreshClicked);
    let list_id = list_request(&effects);

    let (state, effects) = update(
        state,
        Msg::TasksLoaded {
            request_id: list_id,
            result: Ok(vec![task(5, 0), task(6, 2), task(7, 1), task(8, 1)]),
        },
    );

    let (_, target) = lead_request(&effects);
    assert_eq!(target, TaskId::from(7));
    assert_eq!(state.active_task(), Some(&TaskId::from(7)));
}

#[test]
fn refresh_without_complete_task_clears_selection_and_leads() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    let (state, effects) = update(
        state,
        Msg::TasksLoaded {
            request_id: list_request(&effects),
            result: Ok(vec![task(1, 1)]),
        },
    );
    let (lead_id, target) = lead_request(&effects);
    let (state, _) = update(
        state,
        Msg::LeadsLoaded {
            request_id: lead_id,
            task_id: target,
            result: Ok(vec![lead("a", "A")]),
        },
    );
    assert_eq!(state.leads().len(), 1);

    let (state, effects) = update(state, Msg::RefreshClicked);
    let (state, effects) = update(
        state,
        Msg::TasksLoaded {
            request_id: list_request(&effects),
            result: Ok(vec![task(2, 0), task(3, 2)]),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.active_task(), None);
    assert!(state.leads().is_empty());
    assert!(!state.is_busy());
}

#[test]
fn refresh_replaces_previous_task_list() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    let (state, _) = update(
        state,
        Msg::TasksLoaded {
            request_id: list_request(&effects),
            result: Ok(vec![task(1, 0), task(2, 0)]),
        },
    );
    let (state, effects) = update(state, Msg::RefreshClicked);
    let (state, _) = update(
        state,
        Msg::TasksLoaded {
            request_id: list_request(&effects),
            result: Ok(vec![task(3, 0)]),
        },
    );

    let ids: Vec<_> = state.view().tasks.into_iter().map(|row| row.task_id).collect();
    assert_eq!(ids, vec![TaskId::from(3)]);
}

#[test]
fn failed_task_list_keeps_last_known_state() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    let (state, _) = update(
        state,
        Msg::TasksLoaded {
            request_id: list_request(&effects),
            result: Ok(vec![task(1, 0)]),
        },
    );

    let (state, effects) = update(state, Msg::RefreshClicked);
    let (state, effects) = update(
        state,
        Msg::TasksLoaded {
            request_id: list_request(&effects),
            result: Err(SyncFailure::new(RemoteOp::ListTasks, "connection refused")),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.tasks_loading());
    assert_eq!(state.tasks().len(), 1);
    assert_eq!(
        state.view().last_failure.as_deref(),
        Some("list tasks failed: connection refused")
    );
}

#[test]
fn failure_on_first_load_leaves_empty_state() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    let (state, _) = update(
        state,
        Msg::TasksLoaded {
            request_id: list_request(&effects),
            result: Err(SyncFailure::new(RemoteOp::ListTasks, "timeout")),
        },
    );

    let view = state.view();
    assert!(view.tasks.is_empty());
    assert!(view.leads.is_empty());
    assert!(!view.is_busy());
}

#[test]
fn only_latest_task_list_is_applied() {
    init_logging();
    let (state, first) = update(AppState::new(), Msg::Started);
    let (state, second) = update(state, Msg::RefreshClicked);
    let first_id = list_request(&first);
    let second_id = list_request(&second);

    let (state, effects) = update(
        state,
        Msg::TasksLoaded {
            request_id: second_id,
            result: Ok(vec![task(2, 1)]),
        },
    );
    assert_eq!(lead_request(&effects).1, TaskId::from(2));

    let (state, effects) = update(
        state,
        Msg::TasksLoaded {
            request_id: first_id,
            result: Ok(vec![task(1, 1)]),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.tasks().tasks()[0].id, TaskId::from(2));
    assert_eq!(state.active_task(), Some(&TaskId::from(2)));
}

#[test]
fn failed_lead_fetch_keeps_previous_leads() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    let (state, effects) = update(
        state,
        Msg::TasksLoaded {
            request_id: list_request(&effects),
            result: Ok(vec![task(1, 1)]),
        },
    );
    let (lead_id, target) = lead_request(&effects);
    let (state, _) = update(
        state,
        Msg::LeadsLoaded {
            request_id: lead_id,
            task_id: target.clone(),
            result: Ok(vec![lead("a", "A")]),
        },
    );

    let (state, effects) = update(state, Msg::TaskSelected { task_id: target });
    let (lead_id, target) = lead_request(&effects);
    let (state, _) = update(
        state,
        Msg::LeadsLoaded {
            request_id: lead_id,
            task_id: target,
            result: Err(SyncFailure::new(RemoteOp::FetchLeads, "http status 500")),
        },
    );

    assert_eq!(state.leads().len(), 1);
    assert!(!state.leads_loading());
    assert!(state.last_failure().is_some());
}
