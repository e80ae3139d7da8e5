use thiserror::Error;

/// Message returned when the remote service fails without saying why.
pub const GENERIC_REMOTE_FAILURE: &str = "Gemini API request failed";

/// Catch-all message shown when a summary could not be produced.
pub const GENERIC_SUMMARY_FAILURE: &str = "Failed to generate summary.";

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("API key not found")]
    MissingCredential,

    #[error("Could not extract article text")]
    ExtractionFailure,

    #[error("Gemini API error: {0}")]
    RemoteFailure(String),

    #[error("Failed to parse Gemini response: {0}")]
    MalformedBody(String),

    #[error("Failed to send HTTP request: {0}")]
    TransportFailure(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to access settings: {0}")]
    StorageError(String),

    #[error("Failed to write to clipboard: {0}")]
    ClipboardError(String),
}

impl SummarizerError {
    /// The text a caller should render for this error.
    ///
    /// Remote failures carry the service's own message verbatim; transport
    /// faults collapse to the generic summary failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SummarizerError::RemoteFailure(msg) => msg.clone(),
            SummarizerError::TransportFailure(_) => GENERIC_SUMMARY_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::TransportFailure(error.to_string())
    }
}

impl From<serde_json::Error> for SummarizerError {
    fn from(error: serde_json::Error) -> Self {
        SummarizerError::MalformedBody(error.to_string())
    }
}

impl From<std::io::Error> for SummarizerError {
    fn from(error: std::io::Error) -> Self {
        SummarizerError::StorageError(error.to_string())
    }
}

impl From<url::ParseError> for SummarizerError {
    fn from(error: url::ParseError) -> Self {
        SummarizerError::ConfigError(format!("invalid endpoint URL: {error}"))
    }
}

impl From<anyhow::Error> for SummarizerError {
    fn from(error: anyhow::Error) -> Self {
        SummarizerError::ConfigError(error.to_string())
    }
}
