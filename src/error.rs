use thiserror::Error;

/// A failure from one of the upstream translation backends.
///
/// Every call is at-most-one-attempt: none of these variants trigger a retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("{provider} request timed out after {timeout_secs}s")]
    Timeout { provider: String, timeout_secs: u64 },

    #[error("failed to connect to {provider}: {detail}")]
    Connection { provider: String, detail: String },

    #[error("{provider} returned HTTP {status}")]
    Status { provider: String, status: u16 },

    #[error("{provider} returned a malformed response: {detail}")]
    Malformed { provider: String, detail: String },

    #[error("{provider} request failed: {detail}")]
    Api { provider: String, detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// Rejected at the boundary before any task is enqueued.
    #[error("unsupported model: {0}")]
    UnsupportedModel(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The normalizer found no usable translation in the completion.
    #[error("no translation found in model output")]
    EmptyTranslation,

    /// Queue or result store unavailable.
    #[error("task service unavailable: {0}")]
    Infrastructure(String),
}
