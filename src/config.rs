use std::env;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::warn;

/// Runtime settings, sourced from the environment. No file-based state.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the Gorani model server.
    pub gorani_server_url: String,
    /// Base URL of the LangGorani model server.
    pub lang_gorani_server_url: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    /// Fixed per-call timeout for the model servers.
    pub model_server_timeout_secs: u64,
    /// Upper bound on a single LLM chat-completion call.
    pub llm_timeout_secs: u64,
    /// Number of workers draining the translation queue.
    pub workers: usize,
    /// Retention window for task results; expired handles read as unknown.
    pub result_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_parse("PORT", 8080)?,
            gorani_server_url: env_or("GORANI_SERVER_URL", "http://localhost:8000"),
            lang_gorani_server_url: env_or("LANG_GORANI_SERVER_URL", "http://localhost:8001"),
            openai_api_key: env_or("OPENAI_API_KEY", ""),
            openai_base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            openai_model: env_or("OPENAI_MODEL", "gpt-4o-mini"),
            model_server_timeout_secs: env_parse("MODEL_SERVER_TIMEOUT_SECS", 30)?,
            llm_timeout_secs: env_parse("LLM_TIMEOUT_SECS", 60)?,
            workers: env_parse("TRANSLATE_WORKERS", 2)?,
            result_ttl_secs: env_parse("RESULT_TTL_SECS", 3600)?,
        };

        if config.openai_api_key.is_empty() {
            warn!("OPENAI_API_KEY is not set; OpenAI translations will fail with an auth error");
        }

        Ok(config)
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("invalid value for {key}")),
        Err(_) => Ok(default),
    }
}
