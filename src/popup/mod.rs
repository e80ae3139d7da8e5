//! Popup behaviour: the handlers behind the summarize, copy and theme
//! controls, expressed over injected collaborators.

pub mod controller;
pub mod view;

pub use controller::{CopyOutcome, PopupController};
pub use view::ResultView;

pub const MISSING_KEY_MESSAGE: &str = "API key not found. Set it in the extension options.";
pub const EXTRACTION_FAILED_MESSAGE: &str = "Could not extract article text from this page.";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy summary.";
