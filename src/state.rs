use std::sync::Arc;

use crate::config::Config;
use crate::executor::TranslationExecutor;
use crate::tasks::TaskService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub executor: Arc<TranslationExecutor>,
    pub tasks: Arc<TaskService>,
}

impl AppState {
    /// Build the state with real provider adapters. Must run inside a tokio
    /// runtime: starting the task service spawns the worker pool.
    pub fn new(config: Config) -> Self {
        let executor = Arc::new(TranslationExecutor::from_config(&config));
        Self::with_executor(config, executor)
    }

    /// Build the state around a preconstructed executor, letting tests
    /// inject canned providers.
    pub fn with_executor(config: Config, executor: Arc<TranslationExecutor>) -> Self {
        let tasks = Arc::new(TaskService::start(
            Arc::clone(&executor),
            config.workers,
            config.result_ttl_secs,
        ));
        Self {
            config,
            executor,
            tasks,
        }
    }
}
