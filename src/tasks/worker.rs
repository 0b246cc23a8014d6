use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::{error, info};

use super::store::TaskStore;
use super::types::TranslationJob;
use crate::executor::TranslationExecutor;

/// Spawn `count` workers draining the shared job queue. Each worker runs
/// at most one job at a time; jobs are independent and unordered.
pub(super) fn spawn_workers(
    count: usize,
    receiver: mpsc::Receiver<TranslationJob>,
    executor: Arc<TranslationExecutor>,
    store: Arc<TaskStore>,
) {
    let receiver = Arc::new(Mutex::new(receiver));
    for worker_id in 0..count {
        let receiver = Arc::clone(&receiver);
        let executor = Arc::clone(&executor);
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            loop {
                let job = {
                    let mut rx = receiver.lock().await;
                    rx.recv().await
                };
                let Some(job) = job else {
                    info!("worker {} shutting down: queue closed", worker_id);
                    break;
                };
                run_job(worker_id, job, &executor, &store).await;
            }
        });
    }
}

async fn run_job(
    worker_id: usize,
    job: TranslationJob,
    executor: &TranslationExecutor,
    store: &TaskStore,
) {
    info!(
        "worker {} picked up task {} ({})",
        worker_id, job.task_id, job.request.model
    );
    match executor.translate(&job.request).await {
        Ok(answer) => {
            store.complete(&job.task_id, answer);
            info!("task {} completed", job.task_id);
        }
        Err(err) => {
            error!("task {} failed: {}", job.task_id, err);
            store.fail(&job.task_id, err.to_string());
        }
    }
}
