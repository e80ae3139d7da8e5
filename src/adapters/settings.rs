//! File-backed preference storage

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::{CredentialStore, ThemeStore};
use crate::core::models::{Settings, Theme};
use crate::errors::SummarizerError;

/// Stores `Settings` as a JSON object on disk. Every write reads the current
/// file first so keys it does not touch are preserved.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<Settings, SummarizerError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(Settings::default()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                SummarizerError::StorageError(format!("{}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Settings::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn update<F>(&self, apply: F) -> Result<(), SummarizerError>
    where
        F: FnOnce(&mut Settings) + Send,
    {
        let mut settings = self.load().await?;
        apply(&mut settings);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let value = serde_json::to_string_pretty(&settings)
            .map_err(|e| SummarizerError::StorageError(format!("settings serialize: {e}")))?;
        tokio::fs::write(&self.path, value).await?;

        debug!("Wrote settings to {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileSettingsStore {
    async fn get_api_key(&self) -> Result<Option<String>, SummarizerError> {
        Ok(self.load().await?.gemini_api_key)
    }

    async fn set_api_key(&self, key: &str) -> Result<(), SummarizerError> {
        let key = key.to_string();
        self.update(move |s| s.gemini_api_key = Some(key)).await
    }
}

#[async_trait]
impl ThemeStore for FileSettingsStore {
    async fn load_theme(&self) -> Result<Theme, SummarizerError> {
        Ok(Theme::from_dark_mode(self.load().await?.dark_mode_enabled))
    }

    async fn save_theme(&self, theme: Theme) -> Result<(), SummarizerError> {
        self.update(move |s| s.dark_mode_enabled = theme.is_dark()).await
    }
}
