use std::borrow::Cow;
use std::fmt;

/// Maximum number of characters of article text sent to the model
pub const MAX_ARTICLE_CHARS: usize = 20_000;

/// Suffix appended to article text cut at `MAX_ARTICLE_CHARS`
pub const TRUNCATION_MARKER: &str = "...";

/// The summary format requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryStyle {
    #[default]
    Brief,
    Detailed,
    Bullets,
}

impl SummaryStyle {
    /// Resolves a selector value from the UI. Unknown or absent values fall
    /// back to `Brief`.
    #[must_use]
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("detailed") => SummaryStyle::Detailed,
            Some("bullets") => SummaryStyle::Bullets,
            _ => SummaryStyle::Brief,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Brief => "brief",
            SummaryStyle::Detailed => "detailed",
            SummaryStyle::Bullets => "bullets",
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            SummaryStyle::Brief => "Provide a concise summary (2-3 sentences) of this article:",
            SummaryStyle::Detailed => {
                "Provide a detailed summary of this article, covering key points and insights:"
            }
            SummaryStyle::Bullets => {
                "Summarize this article in 5–7 bullet points. Use '- ' before each point:"
            }
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cuts article text to `MAX_ARTICLE_CHARS` characters and appends the
/// truncation marker. Text within the limit is returned untouched.
#[must_use]
pub fn truncate_article(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_ARTICLE_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}{TRUNCATION_MARKER}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Wraps the (possibly truncated) article text in the instruction template
/// for `style`.
#[must_use]
pub fn build_prompt(text: &str, style: SummaryStyle) -> String {
    format!("{}\n\n{}", style.instruction(), truncate_article(text))
}
