//! Lead scout core: task/lead synchronization state machine and display helpers.
mod effect;
mod error;
mod model;
mod msg;
mod state;
mod stores;
mod time_format;
mod update;
mod url_term;
mod view_model;

pub use effect::Effect;
pub use error::{RemoteOp, SyncFailure};
pub use model::{Lead, LeadId, Task, TaskId, TaskStatus};
pub use msg::Msg;
pub use state::{AppState, RequestId};
pub use stores::{LeadStore, TaskStore};
pub use time_format::{format_created, format_epoch_seconds, INVALID_DATE};
pub use update::update;
pub use url_term::parse_search_term;
pub use view_model::{AppViewModel, LeadRowView, TaskRowView};
