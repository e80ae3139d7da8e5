/// What the result area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultView {
    #[default]
    Empty,
    Loading,
    Summary(String),
    Error(String),
}

impl ResultView {
    /// Visible text of the result area. The loading indicator has none.
    #[must_use]
    pub fn rendered_text(&self) -> &str {
        match self {
            ResultView::Empty | ResultView::Loading => "",
            ResultView::Summary(text) | ResultView::Error(text) => text,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, ResultView::Error(_))
    }
}
