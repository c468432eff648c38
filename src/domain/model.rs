use serde::{Deserialize, Serialize};

pub const AUTHOR_UNAVAILABLE: &str = "Author name unavailable";

/// One catalog entry as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub author: String,
    pub title: String,
}

impl BookRecord {
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
        }
    }
}

/// Result of one search cycle.
///
/// `NoResults` is the absent result: the fetch or the parse failed. A search
/// that succeeded with zero matches is `Books(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Books(Vec<BookRecord>),
    NoResults,
}

impl SearchOutcome {
    pub fn books(&self) -> Option<&[BookRecord]> {
        match self {
            SearchOutcome::Books(books) => Some(books),
            SearchOutcome::NoResults => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, SearchOutcome::NoResults)
    }
}
