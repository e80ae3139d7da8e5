use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pagesum::adapters::{Clipboard, CredentialStore, PageTextExtractor, ThemeStore};
use pagesum::ai::Summarizer;
use pagesum::core::models::{SummaryRequest, SummaryResult, Theme};
use pagesum::errors::SummarizerError;
use pagesum::popup::{
    CopyOutcome, EXTRACTION_FAILED_MESSAGE, MISSING_KEY_MESSAGE, PopupController, ResultView,
};
use pagesum::prompt::SummaryStyle;

#[derive(Clone, Default)]
struct FakeSummarizer {
    calls: Arc<AtomicUsize>,
    last_style: Arc<Mutex<Option<SummaryStyle>>>,
    result: Option<SummaryResult>,
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(&self, request: &SummaryRequest) -> SummaryResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_style.lock().unwrap() = Some(request.style);
        self.result
            .clone()
            .unwrap_or_else(|| SummaryResult::Success(format!("summary of {}", request.article_text)))
    }
}

#[derive(Clone, Default)]
struct MemoryStore {
    key: Arc<Mutex<Option<String>>>,
    dark: Arc<Mutex<bool>>,
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn get_api_key(&self) -> Result<Option<String>, SummarizerError> {
        Ok(self.key.lock().unwrap().clone())
    }

    async fn set_api_key(&self, key: &str) -> Result<(), SummarizerError> {
        *self.key.lock().unwrap() = Some(key.to_string());
        Ok(())
    }
}

#[async_trait]
impl ThemeStore for MemoryStore {
    async fn load_theme(&self) -> Result<Theme, SummarizerError> {
        Ok(Theme::from_dark_mode(*self.dark.lock().unwrap()))
    }

    async fn save_theme(&self, theme: Theme) -> Result<(), SummarizerError> {
        *self.dark.lock().unwrap() = theme.is_dark();
        Ok(())
    }
}

struct FixedText(Option<String>);

#[async_trait]
impl PageTextExtractor for FixedText {
    async fn extract(&self) -> Result<Option<String>, SummarizerError> {
        Ok(self.0.clone())
    }
}

#[derive(Clone, Default)]
struct RecordingClipboard {
    written: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), SummarizerError> {
        if self.fail {
            return Err(SummarizerError::ClipboardError("denied".to_string()));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn controller(
    summarizer: FakeSummarizer,
    store: MemoryStore,
    text: Option<&str>,
    clipboard: RecordingClipboard,
) -> PopupController {
    PopupController::new(
        Box::new(summarizer),
        Box::new(store.clone()),
        Box::new(store),
        Box::new(FixedText(text.map(str::to_string))),
        Box::new(clipboard),
    )
}

fn store_with_key(key: &str) -> MemoryStore {
    let store = MemoryStore::default();
    *store.key.lock().unwrap() = Some(key.to_string());
    store
}

#[tokio::test]
async fn test_missing_key_short_circuits() {
    let summarizer = FakeSummarizer::default();
    let mut popup = controller(
        summarizer.clone(),
        MemoryStore::default(),
        Some("article"),
        RecordingClipboard::default(),
    );

    let view = popup.handle_summarize(Some("brief")).await;

    assert_eq!(view, ResultView::Error(MISSING_KEY_MESSAGE.to_string()));
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_blank_key_counts_as_missing() {
    let summarizer = FakeSummarizer::default();
    let mut popup = controller(
        summarizer.clone(),
        store_with_key("   "),
        Some("article"),
        RecordingClipboard::default(),
    );

    let view = popup.handle_summarize(None).await;

    assert_eq!(view, ResultView::Error(MISSING_KEY_MESSAGE.to_string()));
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_text_short_circuits() {
    let summarizer = FakeSummarizer::default();
    let mut popup = controller(
        summarizer.clone(),
        store_with_key("k"),
        None,
        RecordingClipboard::default(),
    );

    let view = popup.handle_summarize(Some("detailed")).await;

    assert_eq!(view, ResultView::Error(EXTRACTION_FAILED_MESSAGE.to_string()));
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_summary_is_rendered_with_selected_style() {
    let summarizer = FakeSummarizer::default();
    let mut popup = controller(
        summarizer.clone(),
        store_with_key("k"),
        Some("article"),
        RecordingClipboard::default(),
    );

    let view = popup.handle_summarize(Some("bullets")).await;

    assert_eq!(view, ResultView::Summary("summary of article".to_string()));
    assert_eq!(popup.view(), &view);
    assert_eq!(*summarizer.last_style.lock().unwrap(), Some(SummaryStyle::Bullets));
}

#[tokio::test]
async fn test_unknown_style_falls_back_to_brief() {
    let summarizer = FakeSummarizer::default();
    let mut popup = controller(
        summarizer.clone(),
        store_with_key("k"),
        Some("article"),
        RecordingClipboard::default(),
    );

    popup.handle_summarize(Some("epic-poem")).await;

    assert_eq!(*summarizer.last_style.lock().unwrap(), Some(SummaryStyle::Brief));
}

#[tokio::test]
async fn test_remote_failure_is_rendered_as_error() {
    let summarizer = FakeSummarizer {
        result: Some(SummaryResult::Failure("Bad key".to_string())),
        ..Default::default()
    };
    let mut popup = controller(
        summarizer,
        store_with_key("k"),
        Some("article"),
        RecordingClipboard::default(),
    );

    let view = popup.handle_summarize(Some("brief")).await;

    assert_eq!(view, ResultView::Error("Bad key".to_string()));
    assert!(view.is_error());
}

#[tokio::test]
async fn test_copy_writes_trimmed_rendered_text() {
    let clipboard = RecordingClipboard::default();
    let summarizer = FakeSummarizer {
        result: Some(SummaryResult::Success("  - one\n- two\n".to_string())),
        ..Default::default()
    };
    let mut popup = controller(summarizer, store_with_key("k"), Some("a"), clipboard.clone());

    popup.handle_summarize(Some("bullets")).await;

    assert_eq!(popup.handle_copy().await, CopyOutcome::Copied);
    assert_eq!(*clipboard.written.lock().unwrap(), vec!["- one\n- two".to_string()]);
}

#[tokio::test]
async fn test_copy_with_empty_result_does_nothing() {
    let clipboard = RecordingClipboard::default();
    let popup = controller(
        FakeSummarizer::default(),
        store_with_key("k"),
        Some("a"),
        clipboard.clone(),
    );

    assert_eq!(popup.handle_copy().await, CopyOutcome::NothingToCopy);
    assert!(clipboard.written.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_copy_failure_is_reported() {
    let clipboard = RecordingClipboard {
        fail: true,
        ..Default::default()
    };
    let mut popup = controller(FakeSummarizer::default(), store_with_key("k"), Some("a"), clipboard);

    popup.handle_summarize(None).await;

    assert_eq!(
        popup.handle_copy().await,
        CopyOutcome::Failed("Failed to copy summary.".to_string())
    );
}

#[tokio::test]
async fn test_theme_load_and_toggle_persist() {
    let store = MemoryStore::default();
    *store.dark.lock().unwrap() = true;
    let mut popup = controller(
        FakeSummarizer::default(),
        store.clone(),
        None,
        RecordingClipboard::default(),
    );

    assert_eq!(popup.load_theme().await, Theme::Dark);
    assert_eq!(popup.toggle_theme().await.unwrap(), Theme::Light);
    assert!(!*store.dark.lock().unwrap());
    assert_eq!(popup.toggle_theme().await.unwrap(), Theme::Dark);
    assert!(*store.dark.lock().unwrap());
}

#[tokio::test]
async fn test_save_api_key_trims_and_rejects_blank() {
    let store = MemoryStore::default();
    let popup = controller(
        FakeSummarizer::default(),
        store.clone(),
        None,
        RecordingClipboard::default(),
    );

    assert!(matches!(
        popup.save_api_key("  ").await,
        Err(SummarizerError::MissingCredential)
    ));
    popup.save_api_key("  new-key \n").await.unwrap();
    assert_eq!(store.key.lock().unwrap().as_deref(), Some("new-key"));
}

struct BrokenStore;

#[async_trait]
impl CredentialStore for BrokenStore {
    async fn get_api_key(&self) -> Result<Option<String>, SummarizerError> {
        Err(SummarizerError::StorageError("disk unreadable".to_string()))
    }

    async fn set_api_key(&self, _key: &str) -> Result<(), SummarizerError> {
        Err(SummarizerError::StorageError("disk unreadable".to_string()))
    }
}

#[tokio::test]
async fn test_store_error_is_rendered_without_calling_service() {
    let summarizer = FakeSummarizer::default();
    let mut popup = PopupController::new(
        Box::new(summarizer.clone()),
        Box::new(BrokenStore),
        Box::new(MemoryStore::default()),
        Box::new(FixedText(Some("article".to_string()))),
        Box::new(RecordingClipboard::default()),
    );

    let view = popup.handle_summarize(Some("brief")).await;

    assert_eq!(
        view,
        ResultView::Error("Failed to access settings: disk unreadable".to_string())
    );
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 0);
}

struct FailingExtractor;

#[async_trait]
impl PageTextExtractor for FailingExtractor {
    async fn extract(&self) -> Result<Option<String>, SummarizerError> {
        Err(SummarizerError::StorageError("tab closed".to_string()))
    }
}

#[tokio::test]
async fn test_extractor_error_is_rendered_without_calling_service() {
    let summarizer = FakeSummarizer::default();
    let store = store_with_key("k");
    let mut popup = PopupController::new(
        Box::new(summarizer.clone()),
        Box::new(store.clone()),
        Box::new(store),
        Box::new(FailingExtractor),
        Box::new(RecordingClipboard::default()),
    );

    let view = popup.handle_summarize(None).await;

    assert_eq!(
        view,
        ResultView::Error("Failed to access settings: tab closed".to_string())
    );
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 0);
}
