//! Remote text-generation service access

pub mod client;

use async_trait::async_trait;

use crate::core::models::{SummaryRequest, SummaryResult};

// Re-export main types for convenience
pub use client::{GeminiClient, NO_SUMMARY_PLACEHOLDER, SAMPLING_TEMPERATURE};

/// Anything that can turn a `SummaryRequest` into a `SummaryResult` with a
/// single round trip.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, request: &SummaryRequest) -> SummaryResult;
}

#[async_trait]
impl Summarizer for GeminiClient {
    async fn summarize(&self, request: &SummaryRequest) -> SummaryResult {
        GeminiClient::summarize(self, request).await
    }
}
