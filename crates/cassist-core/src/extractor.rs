//! Seam between the assistant and the natural-language service

use anyhow::Result;
use cassist_types::ExtractorOutput;

/// Maps free text to one of the operation functions, or to plain guidance.
///
/// Implementations perform at most one outbound call per invocation and do
/// not retry; failures are reported to the caller as errors.
#[async_trait::async_trait]
pub trait IntentExtractor: Send + Sync {
    async fn extract_intent(&self, text: &str) -> Result<ExtractorOutput>;
}

#[async_trait::async_trait]
impl<T: IntentExtractor + ?Sized> IntentExtractor for std::sync::Arc<T> {
    async fn extract_intent(&self, text: &str) -> Result<ExtractorOutput> {
        (**self).extract_intent(text).await
    }
}
