/// pagesum - summarizes article text with Gemini.
///
/// This crate is the logic behind a "summarize this page" popup:
/// 1. A core client that turns article text, a summary style and an API key
///    into one `generateContent` call and a plain-text result
/// 2. A popup controller that wires the client to its collaborators
///    (credential store, page text extractor, clipboard, theme preference)
///
/// # Architecture
///
/// The system uses:
/// - reqwest for the single outbound HTTPS request
/// - `serde_json` for the request body and response parsing
/// - html2text for rendering saved pages to plain text
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use pagesum::ai::GeminiClient;
/// use pagesum::core::config::AppConfig;
/// use pagesum::core::models::{SummaryRequest, SummaryResult};
/// use pagesum::prompt::SummaryStyle;
///
/// #[tokio::main]
/// async fn main() {
///     pagesum::setup_logging();
///
///     let config = AppConfig::default();
///     let client = GeminiClient::from_config(&config);
///
///     let request = SummaryRequest::new(
///         "Rust 1.0 was released in May 2015 ...",
///         SummaryStyle::from_selector(Some("bullets")),
///         "dummy_api_key",
///     );
///
///     match client.summarize(&request).await {
///         SummaryResult::Success(summary) => println!("{summary}"),
///         SummaryResult::Failure(message) => eprintln!("Error: {message}"),
///     }
/// }
/// ```
// Module declarations
pub mod adapters;
pub mod ai;
pub mod core;
pub mod errors;
pub mod popup;
pub mod prompt;

pub use errors::SummarizerError;

/// Configure structured logging with JSON format on stderr.
///
/// Stdout is left to the summary itself. The level comes from `RUST_LOG`
/// and defaults to `info`. Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// pagesum::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
