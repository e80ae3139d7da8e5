/// Adapter layer for the popup's external collaborators.
///
/// The controller only sees the traits below; concrete implementations live
/// in the submodules:
/// - `settings` keeps the API key and theme flag in a JSON file
/// - `extractor` reads article text from a file or stdin
/// - `clipboard` pipes copied text into a system clipboard command
pub mod clipboard;
pub mod extractor;
pub mod settings;

use async_trait::async_trait;

use crate::core::models::Theme;
use crate::errors::SummarizerError;

pub use clipboard::CommandClipboard;
pub use extractor::FileTextExtractor;
pub use settings::FileSettingsStore;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn get_api_key(&self) -> Result<Option<String>, SummarizerError>;
    async fn set_api_key(&self, key: &str) -> Result<(), SummarizerError>;
}

#[async_trait]
pub trait ThemeStore: Send + Sync {
    async fn load_theme(&self) -> Result<Theme, SummarizerError>;
    async fn save_theme(&self, theme: Theme) -> Result<(), SummarizerError>;
}

/// Source of the article text for the current page. `None` means nothing
/// usable could be extracted.
#[async_trait]
pub trait PageTextExtractor: Send + Sync {
    async fn extract(&self) -> Result<Option<String>, SummarizerError>;
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), SummarizerError>;
}
