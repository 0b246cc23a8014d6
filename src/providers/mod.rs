pub mod interface;
pub mod model_server;
pub mod openai;

pub use interface::TranslationProvider;
pub use model_server::ModelServerProvider;
pub use openai::OpenAiProvider;

use crate::error::ProviderError;

/// Map a transport-level reqwest failure onto the provider error taxonomy.
pub(crate) fn classify_request_error(
    provider: &str,
    timeout_secs: u64,
    err: reqwest::Error,
) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout {
            provider: provider.to_string(),
            timeout_secs,
        }
    } else if err.is_connect() {
        ProviderError::Connection {
            provider: provider.to_string(),
            detail: err.to_string(),
        }
    } else {
        ProviderError::Api {
            provider: provider.to_string(),
            detail: err.to_string(),
        }
    }
}
