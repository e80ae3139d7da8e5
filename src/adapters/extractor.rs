//! Article text extraction from local sources

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

use super::PageTextExtractor;
use crate::errors::SummarizerError;

/// Line width used when rendering HTML to plain text
const HTML_RENDER_WIDTH: usize = 120;

#[derive(Debug, Clone)]
pub enum TextSource {
    Stdin,
    File(PathBuf),
}

/// Reads the page from a saved file or stdin. HTML documents are rendered to
/// plain text; anything else is passed through.
#[derive(Debug, Clone)]
pub struct FileTextExtractor {
    source: TextSource,
}

impl FileTextExtractor {
    #[must_use]
    pub fn new(source: TextSource) -> Self {
        Self { source }
    }

    async fn read_raw(&self) -> Result<String, SummarizerError> {
        match &self.source {
            TextSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                warn!("Failed to read {}: {}", path.display(), e);
                SummarizerError::ExtractionFailure
            }),
            TextSource::Stdin => {
                let mut raw = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut raw)
                    .await
                    .map_err(|e| {
                        warn!("Failed to read stdin: {}", e);
                        SummarizerError::ExtractionFailure
                    })?;
                Ok(raw)
            }
        }
    }
}

#[async_trait]
impl PageTextExtractor for FileTextExtractor {
    async fn extract(&self) -> Result<Option<String>, SummarizerError> {
        let raw = self.read_raw().await?;
        let text = if looks_like_html(&raw) {
            debug!("Rendering HTML input to plain text");
            html_to_text(&raw)?
        } else {
            raw
        };

        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(text))
    }
}

#[must_use]
pub fn looks_like_html(raw: &str) -> bool {
    let head: String = raw.trim_start().chars().take(512).collect::<String>().to_ascii_lowercase();
    head.starts_with("<!doctype html") || head.starts_with("<html") || head.contains("<body")
}

/// # Errors
///
/// Returns `ExtractionFailure` if the document cannot be rendered.
pub fn html_to_text(html: &str) -> Result<String, SummarizerError> {
    html2text::from_read(html.as_bytes(), HTML_RENDER_WIDTH).map_err(|e| {
        warn!("Failed to render HTML: {}", e);
        SummarizerError::ExtractionFailure
    })
}
