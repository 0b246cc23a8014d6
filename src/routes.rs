use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::error::TranslateError;
use crate::model::{Model, TranslationRequest};
use crate::state::AppState;
use crate::tasks::TaskState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/translate", post(submit_translation))
        .route("/translate/status/:task_id", get(translation_status))
        .route("/translate/onlygpt", post(translate_sync))
}

#[derive(Debug, Deserialize)]
pub struct TranslatePayload {
    text: String,
    #[serde(default = "default_source_lang")]
    source_lang: String,
    #[serde(default = "default_target_lang")]
    target_lang: String,
    model: String,
}

fn default_source_lang() -> String {
    "ko".to_string()
}

fn default_target_lang() -> String {
    "en".to_string()
}

impl TranslatePayload {
    fn into_request(self) -> Result<TranslationRequest, TranslateError> {
        let model: Model = self.model.parse()?;
        Ok(TranslationRequest {
            text: self.text,
            source_lang: self.source_lang,
            target_lang: self.target_lang,
            model,
        })
    }
}

fn rejection_detail(err: &TranslateError) -> String {
    format!("{}. Supported models: {}", err, Model::SUPPORTED.join(", "))
}

type ApiError = (StatusCode, Json<Value>);

fn bad_request(detail: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": detail })))
}

fn server_error(status: StatusCode, detail: String) -> ApiError {
    (status, Json(json!({ "error": detail })))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Translation gateway is running" }))
}

/// Validate and enqueue; the caller polls the returned handle.
async fn submit_translation(
    State(state): State<AppState>,
    Json(payload): Json<TranslatePayload>,
) -> Result<Json<Value>, ApiError> {
    let request = payload.into_request().map_err(|e| {
        warn!("rejected translation request: {}", e);
        bad_request(rejection_detail(&e))
    })?;

    info!(
        "queueing translation {} -> {} via {}",
        request.source_lang, request.target_lang, request.model
    );

    let task_id = state
        .tasks
        .enqueue(request)
        .map_err(|e| server_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(json!({
        "task_id": task_id,
        "message": "Translation request queued."
    })))
}

async fn translation_status(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Json<Value> {
    match state.tasks.status(&task_id) {
        Some(record) => match record.state {
            TaskState::Pending => Json(json!({
                "status": "pending",
                "message": "Translation is not finished yet."
            })),
            TaskState::Completed => Json(json!({
                "status": "completed",
                "result": { "answer": record.answer.unwrap_or_default() }
            })),
            TaskState::Failed => Json(json!({
                "status": "failed",
                "message": record
                    .error
                    .unwrap_or_else(|| "translation task failed".to_string())
            })),
        },
        None => Json(json!({
            "status": "unknown",
            "message": "No task found for this id."
        })),
    }
}

/// Synchronous variant: runs the executor inline, no queue involved.
async fn translate_sync(
    State(state): State<AppState>,
    Json(payload): Json<TranslatePayload>,
) -> Result<Json<Value>, ApiError> {
    let request = payload.into_request().map_err(|e| {
        warn!("rejected translation request: {}", e);
        bad_request(rejection_detail(&e))
    })?;

    match state.executor.translate(&request).await {
        Ok(answer) => Ok(Json(json!({ "answer": answer }))),
        Err(err @ (TranslateError::Provider(_) | TranslateError::EmptyTranslation)) => {
            warn!("synchronous translation failed: {}", err);
            Err(server_error(StatusCode::BAD_GATEWAY, err.to_string()))
        }
        Err(err) => Err(server_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            err.to_string(),
        )),
    }
}
