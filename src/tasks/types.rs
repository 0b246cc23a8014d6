use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::TranslationRequest;

/// Lifecycle states a stored task can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Pending,
    Completed,
    Failed,
}

/// What the result store remembers about one dispatched translation.
#[derive(Debug, Clone)]
pub struct TaskRecord {
    pub id: String,
    pub state: TaskState,
    pub answer: Option<String>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// One unit of work travelling from the router to a worker.
#[derive(Debug, Clone)]
pub struct TranslationJob {
    pub task_id: String,
    pub request: TranslationRequest,
}
