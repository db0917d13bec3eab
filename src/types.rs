use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default page size when the caller does not ask for one.
pub const DEFAULT_ROWS: i64 = 10;

/// Fields of the backing collection that the query builder knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Category,
    Published,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Category => "category",
            Field::Published => "published",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured filter request, built per call from caller input.
///
/// Every filter is optional; an absent (or empty) filter contributes no
/// clause. `rows` and `start` are forwarded to the backend as given, negative
/// values included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub free_text: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
    pub rows: i64,
    pub start: i64,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            free_text: None,
            category: None,
            author: None,
            published: None,
            rows: DEFAULT_ROWS,
            start: 0,
        }
    }
}

impl SearchRequest {
    pub fn with_free_text(mut self, text: impl Into<String>) -> Self {
        self.free_text = Some(text.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn with_page(mut self, rows: i64, start: i64) -> Self {
        self.rows = rows;
        self.start = start;
        self
    }
}

/// Autocomplete request. An empty prefix yields no suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestRequest {
    pub prefix: String,
}

/// Distinct values per faceted field, in backend order, counts discarded.
pub type FacetResult = IndexMap<String, Vec<String>>;
