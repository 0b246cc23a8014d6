use chrono::{Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use super::types::{TaskRecord, TaskState};

/// Result backend: a concurrent map of task records with a retention
/// window. Records past the window read as absent, which the status
/// endpoint reports as `unknown`.
pub struct TaskStore {
    tasks: DashMap<String, TaskRecord>,
    ttl_secs: i64,
}

impl TaskStore {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            tasks: DashMap::new(),
            ttl_secs: ttl_secs as i64,
        }
    }

    /// Insert a fresh pending record and return its handle.
    pub fn create(&self) -> String {
        self.evict_expired();
        let id = Uuid::new_v4().to_string();
        let record = TaskRecord {
            id: id.clone(),
            state: TaskState::Pending,
            answer: None,
            error: None,
            created_at: Utc::now(),
            completed_at: None,
        };
        self.tasks.insert(id.clone(), record);
        id
    }

    pub fn complete(&self, id: &str, answer: String) {
        if let Some(mut record) = self.tasks.get_mut(id) {
            record.state = TaskState::Completed;
            record.answer = Some(answer);
            record.completed_at = Some(Utc::now());
        }
    }

    pub fn fail(&self, id: &str, error: String) {
        if let Some(mut record) = self.tasks.get_mut(id) {
            record.state = TaskState::Failed;
            record.error = Some(error);
            record.completed_at = Some(Utc::now());
        }
    }

    /// Drop a record that never made it onto the queue.
    pub fn discard(&self, id: &str) {
        self.tasks.remove(id);
    }

    /// Read a record; expired records read as absent.
    pub fn get(&self, id: &str) -> Option<TaskRecord> {
        let record = self.tasks.get(id)?.value().clone();
        if self.expired(&record) {
            self.tasks.remove(id);
            return None;
        }
        Some(record)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn expired(&self, record: &TaskRecord) -> bool {
        Utc::now() - record.created_at > Duration::seconds(self.ttl_secs)
    }

    fn evict_expired(&self) {
        let cutoff = Utc::now() - Duration::seconds(self.ttl_secs);
        self.tasks.retain(|_, record| record.created_at >= cutoff);
    }
}
