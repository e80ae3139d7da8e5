use tracing::{error, info, warn};

use super::view::ResultView;
use super::{COPY_FAILED_MESSAGE, EXTRACTION_FAILED_MESSAGE, MISSING_KEY_MESSAGE};
use crate::adapters::{Clipboard, CredentialStore, PageTextExtractor, ThemeStore};
use crate::ai::Summarizer;
use crate::core::models::{SummaryRequest, SummaryResult, Theme};
use crate::errors::{GENERIC_SUMMARY_FAILURE, SummarizerError};
use crate::prompt::SummaryStyle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    NothingToCopy,
    Failed(String),
}

/// Drives the popup's result area and theme from user actions.
///
/// Each handler is independent; nothing guards against overlapping
/// summarize calls and the last one to finish owns the view.
pub struct PopupController {
    summarizer: Box<dyn Summarizer>,
    credentials: Box<dyn CredentialStore>,
    themes: Box<dyn ThemeStore>,
    extractor: Box<dyn PageTextExtractor>,
    clipboard: Box<dyn Clipboard>,
    view: ResultView,
    theme: Theme,
}

impl PopupController {
    pub fn new(
        summarizer: Box<dyn Summarizer>,
        credentials: Box<dyn CredentialStore>,
        themes: Box<dyn ThemeStore>,
        extractor: Box<dyn PageTextExtractor>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self {
            summarizer,
            credentials,
            themes,
            extractor,
            clipboard,
            view: ResultView::Empty,
            theme: Theme::Light,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ResultView {
        &self.view
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Applies the persisted theme. A store that cannot be read leaves the
    /// default light theme in place.
    pub async fn load_theme(&mut self) -> Theme {
        match self.themes.load_theme().await {
            Ok(theme) => self.theme = theme,
            Err(e) => warn!("Failed to load theme preference: {}", e),
        }
        self.theme
    }

    /// # Errors
    ///
    /// Returns an error if the new preference cannot be persisted. The
    /// in-memory theme is flipped either way.
    pub async fn toggle_theme(&mut self) -> Result<Theme, SummarizerError> {
        self.theme = self.theme.toggled();
        self.themes.save_theme(self.theme).await?;
        info!("Theme switched to {:?}", self.theme);
        Ok(self.theme)
    }

    /// # Errors
    ///
    /// Returns `MissingCredential` for a blank key, or a storage error.
    pub async fn save_api_key(&self, key: &str) -> Result<(), SummarizerError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(SummarizerError::MissingCredential);
        }
        self.credentials.set_api_key(key).await
    }

    pub async fn handle_summarize(&mut self, style_selector: Option<&str>) -> ResultView {
        let style = SummaryStyle::from_selector(style_selector);
        self.view = ResultView::Loading;

        self.view = match self.prepare_request(style).await {
            Ok(request) => match self.summarizer.summarize(&request).await {
                SummaryResult::Success(text) => ResultView::Summary(text),
                SummaryResult::Failure(message) => {
                    error!("Summarization error: {}", message);
                    ResultView::Error(message)
                }
            },
            Err(SummarizerError::MissingCredential) => {
                ResultView::Error(MISSING_KEY_MESSAGE.to_string())
            }
            Err(SummarizerError::ExtractionFailure) => {
                ResultView::Error(EXTRACTION_FAILED_MESSAGE.to_string())
            }
            Err(e) => {
                error!("Summarization error: {}", e);
                let message = e.user_message();
                ResultView::Error(if message.is_empty() {
                    GENERIC_SUMMARY_FAILURE.to_string()
                } else {
                    message
                })
            }
        };

        self.view.clone()
    }

    async fn prepare_request(&self, style: SummaryStyle) -> Result<SummaryRequest, SummarizerError> {
        let credential = self
            .credentials
            .get_api_key()
            .await?
            .filter(|k| !k.trim().is_empty())
            .ok_or(SummarizerError::MissingCredential)?;

        let text = self
            .extractor
            .extract()
            .await?
            .filter(|t| !t.is_empty())
            .ok_or(SummarizerError::ExtractionFailure)?;

        Ok(SummaryRequest::new(text, style, credential))
    }

    /// Copies whatever the result area shows.
    pub async fn handle_copy(&self) -> CopyOutcome {
        let text = self.view.rendered_text().trim();
        if text.is_empty() {
            return CopyOutcome::NothingToCopy;
        }

        match self.clipboard.write_text(text).await {
            Ok(()) => CopyOutcome::Copied,
            Err(e) => {
                error!("Clipboard error: {}", e);
                CopyOutcome::Failed(COPY_FAILED_MESSAGE.to_string())
            }
        }
    }
}
