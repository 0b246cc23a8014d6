use async_trait::async_trait;

use crate::error::ProviderError;
use crate::model::TranslationRequest;

/// A backend capable of translating a single request.
///
/// Implementations make exactly one attempt; a failure is terminal for the
/// task that issued it.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Human-readable name used in logs and error details.
    fn name(&self) -> &str;

    /// Translate the request, returning the raw provider output.
    async fn translate(&self, request: &TranslationRequest) -> Result<String, ProviderError>;
}
