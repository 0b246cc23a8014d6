use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use gorani_gateway::config::Config;
use gorani_gateway::error::ProviderError;
use gorani_gateway::executor::TranslationExecutor;
use gorani_gateway::model::TranslationRequest;
use gorani_gateway::providers::TranslationProvider;
use gorani_gateway::routes;
use gorani_gateway::state::AppState;

struct Canned(&'static str);

#[async_trait]
impl TranslationProvider for Canned {
    fn name(&self) -> &str {
        "canned"
    }

    async fn translate(&self, _request: &TranslationRequest) -> Result<String, ProviderError> {
        Ok(self.0.to_string())
    }
}

struct Refusing;

#[async_trait]
impl TranslationProvider for Refusing {
    fn name(&self) -> &str {
        "refusing"
    }

    async fn translate(&self, _request: &TranslationRequest) -> Result<String, ProviderError> {
        Err(ProviderError::Status {
            provider: "Gorani server".to_string(),
            status: 500,
        })
    }
}

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        gorani_server_url: "http://localhost:8000".to_string(),
        lang_gorani_server_url: "http://localhost:8001".to_string(),
        openai_api_key: String::new(),
        openai_base_url: "https://api.openai.com/v1".to_string(),
        openai_model: "gpt-4o-mini".to_string(),
        model_server_timeout_secs: 30,
        llm_timeout_secs: 60,
        workers: 2,
        result_ttl_secs: 3600,
    }
}

fn test_state(
    openai: impl TranslationProvider + 'static,
    gorani: impl TranslationProvider + 'static,
) -> AppState {
    let executor = Arc::new(TranslationExecutor::new(
        Arc::new(openai),
        Arc::new(gorani),
        Arc::new(Refusing),
    ));
    AppState::with_executor(test_config(), executor)
}

fn app(state: AppState) -> axum::Router {
    routes::create_routes().with_state(state)
}

async fn send_json(app: &axum::Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn poll_until_terminal(app: &axum::Router, task_id: &str) -> Value {
    let uri = format!("/translate/status/{}", task_id);
    for _ in 0..100 {
        let (status, body) = get_json(app, &uri).await;
        assert_eq!(status, StatusCode::OK);
        if body["status"] != "pending" {
            return body;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("task {} never left pending", task_id);
}

#[tokio::test]
async fn unsupported_model_is_rejected_without_side_effects() {
    let state = test_state(Refusing, Canned("Hello"));
    let app = app(state.clone());

    let (status, body) = send_json(
        &app,
        "POST",
        "/translate",
        json!({ "text": "안녕", "source_lang": "ko", "target_lang": "en", "model": "Papago" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let detail = body["error"].as_str().unwrap();
    assert!(detail.contains("unsupported model"));
    assert!(
        detail.contains("OpenAI") && detail.contains("Gorani") && detail.contains("LangGorani"),
        "rejection should list the supported models, got: {}",
        detail
    );
    assert_eq!(state.tasks.task_count(), 0);
}

#[tokio::test]
async fn submitted_task_completes_with_the_model_server_answer() {
    let state = test_state(Refusing, Canned("Hello"));
    let app = app(state);

    let (status, body) = send_json(
        &app,
        "POST",
        "/translate",
        json!({ "text": "안녕", "source_lang": "ko", "target_lang": "en", "model": "Gorani" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Translation request queued.");
    let task_id = body["task_id"].as_str().unwrap().to_string();

    let result = poll_until_terminal(&app, &task_id).await;
    assert_eq!(result["status"], "completed");
    assert_eq!(result["result"]["answer"], "Hello");
}

#[tokio::test]
async fn failed_provider_yields_a_failed_status() {
    let state = test_state(Refusing, Refusing);
    let app = app(state);

    let (_, body) = send_json(
        &app,
        "POST",
        "/translate",
        json!({ "text": "안녕", "model": "Gorani" }),
    )
    .await;
    let task_id = body["task_id"].as_str().unwrap().to_string();

    let result = poll_until_terminal(&app, &task_id).await;
    assert_eq!(result["status"], "failed");
    assert!(result["message"].as_str().unwrap().contains("HTTP 500"));
}

#[tokio::test]
async fn unknown_task_id_maps_to_unknown_status() {
    let state = test_state(Refusing, Canned("Hello"));
    let app = app(state);

    let (status, body) = get_json(&app, "/translate/status/not-a-real-task").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "unknown");
}

#[tokio::test]
async fn synchronous_path_normalizes_the_llm_completion() {
    let state = test_state(
        Canned(r#"Sure thing! The text translates to: "Hello""#),
        Refusing,
    );
    let app = app(state);

    let (status, body) = send_json(
        &app,
        "POST",
        "/translate/onlygpt",
        json!({ "text": "안녕", "source_lang": "ko", "target_lang": "en", "model": "OpenAI" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], "Hello");
}

#[tokio::test]
async fn synchronous_provider_failure_surfaces_as_bad_gateway() {
    let state = test_state(Refusing, Refusing);
    let app = app(state);

    let (status, body) = send_json(
        &app,
        "POST",
        "/translate/onlygpt",
        json!({ "text": "안녕", "model": "Gorani" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn root_reports_liveness() {
    let state = test_state(Refusing, Canned("Hello"));
    let app = app(state);

    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("running"));
}
