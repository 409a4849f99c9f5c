use scout_core::{Effect, Lead, LeadId, Msg, RemoteOp, SyncFailure, Task, TaskId, TaskStatus};
use scout_engine::{
    ApiError, EngineEvent, EngineHandle, LeadRecord, TaskRecord, WireScalar, WireStatus,
};
use scout_logging::{scout_info, scout_warn};

/// Bridges core effects to the engine and engine events back to core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ListTasks { request_id } => {
                    scout_info!("ListTasks request_id={}", request_id);
                    self.engine.list_tasks(request_id);
                }
                Effect::CreateTask { request_id, www } => {
                    scout_info!(
                        "CreateTask request_id={} url_len={} url={}",
                        request_id,
                        www.len(),
                        www
                    );
                    self.engine.create_task(request_id, www);
                }
                Effect::FetchLeads {
                    request_id,
                    task_id,
                } => {
                    scout_info!("FetchLeads request_id={} task_id={}", request_id, task_id);
                    self.engine.fetch_leads(request_id, task_id.as_str());
                }
            }
        }
    }

    /// Collects every completion that has arrived so far.
    pub fn drain(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::TasksListed { request_id, result } => Msg::TasksLoaded {
            request_id,
            result: result
                .map(|records| records.into_iter().map(map_task).collect())
                .map_err(|err| map_failure(RemoteOp::ListTasks, err)),
        },
        EngineEvent::TaskCreated { request_id, result } => Msg::TaskCreated {
            request_id,
            result: result.map_err(|err| map_failure(RemoteOp::CreateTask, err)),
        },
        EngineEvent::LeadsFetched {
            request_id,
            task_id,
            result,
        } => Msg::LeadsLoaded {
            request_id,
            task_id: TaskId::new(task_id),
            result: result
                .map(|records| records.into_iter().map(map_lead).collect())
                .map_err(|err| map_failure(RemoteOp::FetchLeads, err)),
        },
    }
}

fn map_failure(operation: RemoteOp, err: ApiError) -> SyncFailure {
    SyncFailure::new(operation, err.to_string())
}

fn map_task(record: TaskRecord) -> Task {
    let id = TaskId::new(record.id.into_string());
    let status = map_status(record.status);
    if let TaskStatus::Unrecognized(raw) = &status {
        scout_warn!("Task {} has unrecognized status {:?}", id, raw);
    }
    Task {
        id,
        www: record.www.unwrap_or_default(),
        status,
        date_created: record.date_created,
    }
}

fn map_status(status: Option<WireStatus>) -> TaskStatus {
    match status {
        Some(WireStatus::Ordinal(code)) => TaskStatus::from_ordinal(code),
        Some(WireStatus::Name(name)) => TaskStatus::from_name(&name),
        None => TaskStatus::Unrecognized(String::new()),
    }
}

fn map_lead(record: LeadRecord) -> Lead {
    Lead {
        id: LeadId::new(record.id.into_string()),
        www: text(record.www),
        name: text(record.name),
        rating: text(record.rating),
        reviews: text(record.reviews),
        category: text(record.category),
        address: text(record.address),
        phone: text(record.phone),
        emails: record.emails,
    }
}

fn text(scalar: Option<WireScalar>) -> Option<String> {
    scalar.and_then(WireScalar::into_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scout_engine::{FailureKind, WireId};

    fn task_record(id: WireId, status: Option<WireStatus>) -> TaskRecord {
        TaskRecord {
            id,
            www: Some("https://google.com/maps/search/bar+x/".to_string()),
            status,
            date_created: Some(0),
        }
    }

    #[test]
    fn task_list_maps_ids_and_statuses() {
        let msg = map_event(EngineEvent::TasksListed {
            request_id: 3,
            result: Ok(vec![
                task_record(WireId::Integer(1), Some(WireStatus::Ordinal(1))),
                task_record(WireId::Text("b".into()), Some(WireStatus::Name("Error".into()))),
                task_record(WireId::Integer(3), Some(WireStatus::Ordinal(12))),
                task_record(WireId::Integer(4), None),
            ]),
        });

        let Msg::TasksLoaded { request_id, result } = msg else {
            panic!("expected TasksLoaded");
        };
        let tasks = result.unwrap();
        assert_eq!(request_id, 3);
        assert_eq!(tasks[0].id, TaskId::from(1));
        assert_eq!(tasks[0].status, TaskStatus::Complete);
        assert_eq!(tasks[1].id, TaskId::from("b"));
        assert_eq!(tasks[1].status, TaskStatus::Error);
        assert_eq!(tasks[2].status, TaskStatus::Unrecognized("12".to_string()));
        assert!(!tasks[3].status.is_complete());
    }

    #[test]
    fn lead_fields_become_display_text() {
        let record = LeadRecord {
            id: WireId::Integer(9),
            www: Some(WireScalar::Text("https://shop.example.com".into())),
            name: Some(WireScalar::Text("Shop".into())),
            rating: Some(WireScalar::Float(4.5)),
            reviews: Some(WireScalar::Integer(31)),
            category: None,
            address: Some(WireScalar::Text("2 Side St".into())),
            phone: Some(WireScalar::Flag(false)),
            emails: vec!["a@b.c".into()],
        };

        let msg = map_event(EngineEvent::LeadsFetched {
            request_id: 4,
            task_id: "1".into(),
            result: Ok(vec![record]),
        });

        let Msg::LeadsLoaded {
            task_id, result, ..
        } = msg
        else {
            panic!("expected LeadsLoaded");
        };
        let leads = result.unwrap();
        let lead = &leads[0];
        assert_eq!(task_id, TaskId::from(1));
        assert_eq!(lead.id, LeadId::new("9"));
        assert_eq!(lead.rating.as_deref(), Some("4.5"));
        assert_eq!(lead.reviews.as_deref(), Some("31"));
        assert_eq!(lead.category, None);
        assert_eq!(lead.address.as_deref(), Some("2 Side St"));
        assert_eq!(lead.phone.as_deref(), Some("false"));
        assert_eq!(lead.emails, vec!["a@b.c".to_string()]);
    }

    #[test]
    fn failures_keep_operation_and_reason() {
        let msg = map_event(EngineEvent::TaskCreated {
            request_id: 2,
            result: Err(ApiError::new(FailureKind::HttpStatus(503), "503 Service Unavailable")),
        });

        assert_eq!(
            msg,
            Msg::TaskCreated {
                request_id: 2,
                result: Err(SyncFailure::new(
                    RemoteOp::CreateTask,
                    "http status 503: 503 Service Unavailable"
                )),
            }
        );
    }
}
