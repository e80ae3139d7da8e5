use serde::{Deserialize, Serialize};

use crate::prompt::SummaryStyle;

/// One summarization call: built per invocation and dropped once rendered.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub article_text: String,
    pub style: SummaryStyle,
    pub credential: String,
}

impl SummaryRequest {
    pub fn new(
        article_text: impl Into<String>,
        style: SummaryStyle,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            article_text: article_text.into(),
            style,
            credential: credential.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryResult {
    Success(String),
    Failure(String),
}

impl SummaryResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, SummaryResult::Success(_))
    }

    /// The text to render, whichever arm is populated.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            SummaryResult::Success(text) | SummaryResult::Failure(text) => text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark_mode(enabled: bool) -> Self {
        if enabled { Theme::Dark } else { Theme::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persisted user preferences. Field names match the keys the browser
/// extension kept in synced storage so existing exports load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    #[serde(default)]
    pub dark_mode_enabled: bool,
    /// Keys this crate does not manage, written back unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
