//! Shared query parameter types for API handlers.

use quintet_core::pagination::PageWindow;
use serde::Deserialize;

/// Trivia pagination parameter (`?page=`).
///
/// Kept as a raw string so a non-numeric page falls back to page 1 instead
/// of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn window(&self) -> PageWindow {
        PageWindow::questions(self.page.as_deref())
    }
}

/// Body of the fyyur name searches (`POST /venues/search`, `POST /artists/search`).
///
/// A missing or blank term matches everything.
#[derive(Debug, Default, Deserialize)]
pub struct NameSearch {
    #[serde(default)]
    pub search_term: Option<String>,
}

/// Body of `POST /questions/search`.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionSearch {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}
