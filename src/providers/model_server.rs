use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

use super::interface::TranslationProvider;
use crate::error::ProviderError;
use crate::model::TranslationRequest;

/// Client for a remote model server speaking the `/translate/{model}` path
/// convention. Instantiated once per hosted model.
pub struct ModelServerProvider {
    name: String,
    client: Client,
    base_url: String,
    model_name: String,
    timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct ModelServerResponse {
    answer: Option<String>,
}

impl ModelServerProvider {
    pub fn new(
        name: impl Into<String>,
        base_url: &str,
        model_name: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            name: name.into(),
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name: model_name.into(),
            timeout_secs,
        }
    }
}

#[async_trait]
impl TranslationProvider for ModelServerProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let url = format!("{}/translate/{}", self.base_url, self.model_name);
        let payload = json!({
            "text": request.text,
            "source_lang": request.source_lang,
            "target_lang": request.target_lang,
            "model": self.model_name,
        });

        debug!(
            "POST {} ({} -> {})",
            url, request.source_lang, request.target_lang
        );

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .timeout(Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| super::classify_request_error(&self.name, self.timeout_secs, e))?;

        let status = response.status();
        if !status.is_success() {
            error!("{} returned HTTP {}", self.name, status);
            return Err(ProviderError::Status {
                provider: self.name.clone(),
                status: status.as_u16(),
            });
        }

        let body: ModelServerResponse =
            response.json().await.map_err(|e| ProviderError::Malformed {
                provider: self.name.clone(),
                detail: e.to_string(),
            })?;

        body.answer.ok_or_else(|| ProviderError::Malformed {
            provider: self.name.clone(),
            detail: "missing `answer` field".to_string(),
        })
    }
}
