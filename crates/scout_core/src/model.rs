use std::fmt;

/// Backend-assigned task identifier, kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LeadId(String);

impl LeadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of a scrape task as reported by the backend.
///
/// `Unrecognized` keeps the raw wire value of anything this client does not
/// know, so a backend that grows a new state is flagged instead of being
/// mislabelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Complete,
    Processing,
    Scraping,
    Error,
    Unrecognized(String),
}

impl TaskStatus {
    /// Maps the legacy positional status code.
    pub fn from_ordinal(code: i64) -> Self {
        match code {
            0 => TaskStatus::Pending,
            1 => TaskStatus::Complete,
            2 => TaskStatus::Processing,
            3 => TaskStatus::Scraping,
            4 => TaskStatus::Error,
            other => TaskStatus::Unrecognized(other.to_string()),
        }
    }

    /// Maps a symbolic status name, ignoring ASCII case and surrounding space.
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        const KNOWN: [(&str, TaskStatus); 5] = [
            ("pending", TaskStatus::Pending),
            ("complete", TaskStatus::Complete),
            ("processing", TaskStatus::Processing),
            ("scraping", TaskStatus::Scraping),
            ("error", TaskStatus::Error),
        ];
        KNOWN
            .into_iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(trimmed))
            .map(|(_, status)| status)
            .unwrap_or_else(|| TaskStatus::Unrecognized(trimmed.to_string()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Complete => "Complete",
            TaskStatus::Processing => "Processing",
            TaskStatus::Scraping => "Scraping",
            TaskStatus::Error => "Error",
            TaskStatus::Unrecognized(_) => "Unknown",
        }
    }

    /// Only completed tasks have leads worth showing.
    pub fn is_complete(&self) -> bool {
        matches!(self, TaskStatus::Complete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// The search URL the task was submitted with.
    pub www: String,
    pub status: TaskStatus,
    /// Creation time in epoch seconds (UTC); `None` when the backend sent
    /// something that is not a timestamp.
    pub date_created: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lead {
    pub id: LeadId,
    pub www: Option<String>,
    pub name: Option<String>,
    pub rating: Option<String>,
    pub reviews: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub emails: Vec<String>,
}
