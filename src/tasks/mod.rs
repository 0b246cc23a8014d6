//! In-process task execution: a bounded queue feeding a worker pool, and a
//! result store polled by the status endpoint. The rest of the gateway only
//! sees the capability pair `enqueue -> handle` / `status(handle) -> record`.

mod store;
mod types;
mod worker;

pub use store::TaskStore;
pub use types::{TaskRecord, TaskState, TranslationJob};

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::error;

use crate::error::TranslateError;
use crate::executor::TranslationExecutor;
use crate::model::TranslationRequest;

const QUEUE_DEPTH: usize = 256;

pub struct TaskService {
    sender: mpsc::Sender<TranslationJob>,
    store: Arc<TaskStore>,
}

impl TaskService {
    /// Start the queue and worker pool against the given executor.
    pub fn start(executor: Arc<TranslationExecutor>, workers: usize, result_ttl_secs: u64) -> Self {
        let store = Arc::new(TaskStore::new(result_ttl_secs));
        let (sender, receiver) = mpsc::channel(QUEUE_DEPTH);
        worker::spawn_workers(workers.max(1), receiver, executor, Arc::clone(&store));
        Self { sender, store }
    }

    /// Enqueue a validated request; returns the handle for later polling.
    /// Once enqueued a job cannot be cancelled, only ignored.
    pub fn enqueue(&self, request: TranslationRequest) -> Result<String, TranslateError> {
        let task_id = self.store.create();
        let job = TranslationJob {
            task_id: task_id.clone(),
            request,
        };
        if let Err(err) = self.sender.try_send(job) {
            error!("failed to enqueue task {}: {}", task_id, err);
            self.store.discard(&task_id);
            return Err(TranslateError::Infrastructure(err.to_string()));
        }
        Ok(task_id)
    }

    /// Current state of a handle, or `None` for unseen/expired handles.
    /// Pure read, safe to call repeatedly.
    pub fn status(&self, task_id: &str) -> Option<TaskRecord> {
        self.store.get(task_id)
    }

    pub fn task_count(&self) -> usize {
        self.store.len()
    }
}
