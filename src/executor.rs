use std::sync::Arc;

use crate::config::Config;
use crate::error::TranslateError;
use crate::model::{Model, TranslationRequest};
use crate::normalize;
use crate::providers::{ModelServerProvider, OpenAiProvider, TranslationProvider};

/// Dispatches a validated request to exactly one provider adapter.
///
/// Adapters are injected at construction; there are no process-global
/// clients. LLM completions pass through the normalizer, model-server
/// answers are returned verbatim.
pub struct TranslationExecutor {
    openai: Arc<dyn TranslationProvider>,
    gorani: Arc<dyn TranslationProvider>,
    lang_gorani: Arc<dyn TranslationProvider>,
}

impl TranslationExecutor {
    pub fn new(
        openai: Arc<dyn TranslationProvider>,
        gorani: Arc<dyn TranslationProvider>,
        lang_gorani: Arc<dyn TranslationProvider>,
    ) -> Self {
        Self {
            openai,
            gorani,
            lang_gorani,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(OpenAiProvider::new(
                &config.openai_base_url,
                &config.openai_model,
                &config.openai_api_key,
                config.llm_timeout_secs,
            )),
            Arc::new(ModelServerProvider::new(
                "Gorani server",
                &config.gorani_server_url,
                "Gorani",
                config.model_server_timeout_secs,
            )),
            Arc::new(ModelServerProvider::new(
                "LangGorani server",
                &config.lang_gorani_server_url,
                "LangGorani",
                config.model_server_timeout_secs,
            )),
        )
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        match request.model {
            Model::OpenAi => {
                let raw = self.openai.translate(request).await?;
                normalize::extract_translation(&raw)
            }
            Model::Gorani => Ok(self.gorani.translate(request).await?),
            Model::LangGorani => Ok(self.lang_gorani.translate(request).await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use async_trait::async_trait;

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

    struct Failing;

    #[async_trait]
    impl TranslationProvider for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn translate(&self, _request: &TranslationRequest) -> Result<String, ProviderError> {
            Err(ProviderError::Status {
                provider: "failing".to_string(),
                status: 500,
            })
        }
    }

    fn request(model: Model) -> TranslationRequest {
        TranslationRequest {
            text: "안녕".to_string(),
            source_lang: "ko".to_string(),
            target_lang: "en".to_string(),
            model,
        }
    }

    fn executor(
        openai: impl TranslationProvider + 'static,
        gorani: impl TranslationProvider + 'static,
    ) -> TranslationExecutor {
        TranslationExecutor::new(Arc::new(openai), Arc::new(gorani), Arc::new(Failing))
    }

    #[tokio::test]
    async fn model_server_answer_is_returned_verbatim() {
        let exec = executor(Failing, Canned("Hello"));
        let answer = exec.translate(&request(Model::Gorani)).await.unwrap();
        assert_eq!(answer, "Hello");
    }

    #[tokio::test]
    async fn llm_completion_is_normalized() {
        let exec = executor(
            Canned(r#"Sure! The text translates to: "Hello""#),
            Failing,
        );
        let answer = exec.translate(&request(Model::OpenAi)).await.unwrap();
        assert_eq!(answer, "Hello");
    }

    #[tokio::test]
    async fn llm_completion_without_quotes_fails_extraction() {
        let exec = executor(Canned("I cannot translate that."), Failing);
        let err = exec.translate(&request(Model::OpenAi)).await.unwrap_err();
        assert_eq!(err, TranslateError::EmptyTranslation);
    }

    #[tokio::test]
    async fn provider_failure_propagates_tagged() {
        let exec = executor(Failing, Failing);
        let err = exec.translate(&request(Model::Gorani)).await.unwrap_err();
        assert!(matches!(err, TranslateError::Provider(_)));
        assert!(!err.to_string().is_empty());
    }
}
