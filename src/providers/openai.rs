use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info};

use super::interface::TranslationProvider;
use crate::error::ProviderError;
use crate::model::TranslationRequest;

const PROVIDER_NAME: &str = "OpenAI";
const ERROR_DETAIL_LIMIT: usize = 200;

/// Adapter for the hosted chat-completion API, prompt-engineered to act as
/// a translator. The raw completion still goes through the normalizer
/// before it becomes a task result.
pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl OpenAiProvider {
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        let model = model.into();
        info!("Initialized OpenAI provider: model={}", model);
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key: api_key.into(),
            timeout_secs,
        }
    }
}

#[async_trait]
impl TranslationProvider for OpenAiProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let system = format!(
            "You are a translation engine. Translate the user's message from {} to {}. \
             Reply with the translation only.",
            request.source_lang, request.target_lang
        );
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": request.text },
            ],
        });

        debug!(
            "chat completion via {} ({} -> {})",
            self.model, request.source_lang, request.target_lang
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .timeout(Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| super::classify_request_error(PROVIDER_NAME, self.timeout_secs, e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("OpenAI API returned HTTP {}: {}", status, detail);
            return Err(ProviderError::Api {
                provider: PROVIDER_NAME.to_string(),
                detail: format!("HTTP {}: {}", status, truncate_detail(&detail)),
            });
        }

        let completion: ChatCompletion =
            response.json().await.map_err(|e| ProviderError::Malformed {
                provider: PROVIDER_NAME.to_string(),
                detail: e.to_string(),
            })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::Malformed {
                provider: PROVIDER_NAME.to_string(),
                detail: "completion contained no choices".to_string(),
            })?;

        Ok(content.trim().to_string())
    }
}

fn truncate_detail(detail: &str) -> String {
    if detail.len() <= ERROR_DETAIL_LIMIT {
        return detail.to_string();
    }
    let mut end = ERROR_DETAIL_LIMIT;
    while !detail.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &detail[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_error_bodies() {
        let long = "x".repeat(500);
        let out = truncate_detail(&long);
        assert!(out.len() <= ERROR_DETAIL_LIMIT + 3);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn short_error_bodies_pass_through() {
        assert_eq!(truncate_detail("nope"), "nope");
    }
}
