//! Gemini `generateContent` client
//!
//! Builds the prompt for a summary request, performs exactly one POST to the
//! model endpoint and reduces the response to plain text.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use crate::core::config::AppConfig;
use crate::core::models::{SummaryRequest, SummaryResult};
use crate::errors::{GENERIC_REMOTE_FAILURE, SummarizerError};
use crate::prompt::build_prompt;

pub const SAMPLING_TEMPERATURE: f64 = 0.3;

/// Returned in place of a summary when a successful response carries no text.
pub const NO_SUMMARY_PLACEHOLDER: &str = "No summary available.";

/// Client for the Gemini text-generation endpoint
pub struct GeminiClient {
    http: Client,
    api_base: String,
    model: String,
}

impl GeminiClient {
    #[must_use]
    pub fn new(api_base: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.into(),
            model: model.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.gemini_api_base.clone(), config.gemini_model.clone())
    }

    /// Full request URL with the credential in the `key` query parameter.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured base does not form a valid URL.
    pub fn endpoint_url(&self, credential: &str) -> Result<Url, SummarizerError> {
        let raw = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        );
        let mut url = Url::parse(&raw)?;
        url.query_pairs_mut().append_pair("key", credential);
        Ok(url)
    }

    #[must_use]
    pub fn request_body(prompt: &str) -> Value {
        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": SAMPLING_TEMPERATURE }
        })
    }

    /// Sends one summarization request and returns the summary text.
    ///
    /// The credential is assumed to have been validated by the caller.
    ///
    /// # Errors
    ///
    /// Returns `TransportFailure` if the request cannot be sent or its body
    /// cannot be read, `RemoteFailure` for a non-success status and
    /// `MalformedBody` if a success body is not JSON.
    pub async fn generate_summary(&self, request: &SummaryRequest) -> Result<String, SummarizerError> {
        let prompt = build_prompt(&request.article_text, request.style);

        #[cfg(feature = "debug-logs")]
        debug!("Using Gemini prompt:\n{}", prompt);

        debug!(
            model = %self.model,
            style = %request.style,
            prompt_chars = prompt.chars().count(),
            "Dispatching summary request"
        );

        let url = self.endpoint_url(&request.credential)?;
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&Self::request_body(&prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .map(|v| extract_error_message(&v))
                .unwrap_or_else(|_| GENERIC_REMOTE_FAILURE.to_string());
            return Err(SummarizerError::RemoteFailure(message));
        }

        let response_json: Value = serde_json::from_str(&body)?;
        Ok(extract_summary_text(&response_json))
    }

    /// Infallible form of `generate_summary`: exactly one arm of the result
    /// is populated.
    pub async fn summarize(&self, request: &SummaryRequest) -> SummaryResult {
        match self.generate_summary(request).await {
            Ok(text) => SummaryResult::Success(text),
            Err(e) => SummaryResult::Failure(e.user_message()),
        }
    }
}

/// First text part of the first candidate, or the placeholder when any level
/// of that path is missing or the text is empty.
#[must_use]
pub fn extract_summary_text(response: &Value) -> String {
    response
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_SUMMARY_PLACEHOLDER)
        .to_string()
}

/// `error.message` from an error payload, or the generic failure message.
#[must_use]
pub fn extract_error_message(response: &Value) -> String {
    response
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(GENERIC_REMOTE_FAILURE)
        .to_string()
}
