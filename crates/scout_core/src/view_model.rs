use crate::{format_created, parse_search_term, Lead, LeadId, Task, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    /// Search term parsed from `input`, for the "showing results" hint.
    pub search_term: Option<String>,
    pub tasks: Vec<TaskRowView>,
    pub leads: Vec<LeadRowView>,
    pub active_task: Option<TaskId>,
    /// Task the displayed leads were fetched for.
    pub leads_task: Option<TaskId>,
    pub tasks_loading: bool,
    pub leads_loading: bool,
    pub creating: bool,
    pub last_failure: Option<String>,
}

impl AppViewModel {
    pub fn is_busy(&self) -> bool {
        self.tasks_loading || self.leads_loading || self.creating
    }

    /// Task shown at a 1-based table row.
    pub fn task_at_row(&self, row: usize) -> Option<&TaskRowView> {
        row.checked_sub(1).and_then(|index| self.tasks.get(index))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRowView {
    /// 1-based position in the table.
    pub row: usize,
    pub task_id: TaskId,
    pub name: Option<String>,
    pub status: &'static str,
    pub created: String,
    pub selectable: bool,
    pub active: bool,
}

impl TaskRowView {
    pub(crate) fn new(row: usize, task: &Task, active: Option<&TaskId>) -> Self {
        Self {
            row,
            task_id: task.id.clone(),
            name: parse_search_term(&task.www),
            status: task.status.label(),
            created: format_created(task.date_created),
            selectable: task.status.is_complete(),
            active: active == Some(&task.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRowView {
    pub lead_id: LeadId,
    pub name: Option<String>,
    pub www: Option<String>,
    pub rating: Option<String>,
    pub reviews: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Lowercased, in backend order.
    pub emails: Vec<String>,
}

impl From<&Lead> for LeadRowView {
    fn from(lead: &Lead) -> Self {
        Self {
            lead_id: lead.id.clone(),
            name: lead.name.clone(),
            www: lead.www.clone(),
            rating: lead.rating.clone(),
            reviews: lead.reviews.clone(),
            category: lead.category.clone(),
            address: lead.address.clone(),
            phone: lead.phone.clone(),
            emails: lead.emails.iter().map(|email| email.to_lowercase()).collect(),
        }
    }
}
