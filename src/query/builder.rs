use super::clause::{Clause, QueryExpression};
use crate::types::{Field, SearchRequest};

/// Rows returned by a suggestion lookup unless configured otherwise.
pub const DEFAULT_SUGGEST_ROWS: u32 = 5;

/// A query expression plus the parameters that travel with it to `/select`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    q: QueryExpression,
    extra: Vec<(&'static str, String)>,
}

impl SelectQuery {
    pub fn new(q: QueryExpression) -> Self {
        Self {
            q,
            extra: Vec::new(),
        }
    }

    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.extra.push((key, value.to_string()));
        self
    }

    pub fn expression(&self) -> &QueryExpression {
        &self.q
    }

    /// Ordered wire parameters: `q`, `wt=json`, then the request-specific ones.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(self.extra.len() + 2);
        params.push(("q", self.q.to_string()));
        params.push(("wt", "json".to_string()));
        params.extend(self.extra.iter().cloned());
        params
    }

    /// Value of the first parameter named `key`, `q` and `wt` included.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "q" => Some(self.q.to_string()),
            "wt" => Some("json".to_string()),
            _ => self
                .extra
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone()),
        }
    }
}

/// Outcome of planning an autocomplete lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggest {
    /// Nothing to look up; answer with an empty list.
    NoSuggestions,
    Lookup(SelectQuery),
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Map a [`SearchRequest`] onto a query expression.
///
/// Clause order is fixed: free text, category, author, published.
pub fn build_search_query(req: &SearchRequest) -> QueryExpression {
    let mut expr = QueryExpression::new();

    match non_blank(&req.free_text) {
        Some(text) => expr.push(Clause::prefix(&[Field::Title, Field::Author], text)),
        None => expr.push(Clause::MatchAll),
    }

    if let Some(category) = non_blank(&req.category) {
        expr.push(Clause::term(Field::Category, category));
    }

    if let Some(author) = non_blank(&req.author) {
        expr.push(Clause::phrase(Field::Author, author));
    }

    if let Some(published) = req.published {
        expr.push(Clause::flag(Field::Published, published));
    }

    expr
}

pub fn build_search_select(req: &SearchRequest) -> SelectQuery {
    SelectQuery::new(build_search_query(req))
        .param("rows", req.rows)
        .param("start", req.start)
}

pub fn build_suggest_query(prefix: Option<&str>) -> Suggest {
    build_suggest_query_with_rows(prefix, DEFAULT_SUGGEST_ROWS)
}

pub fn build_suggest_query_with_rows(prefix: Option<&str>, rows: u32) -> Suggest {
    let prefix = match prefix.map(str::trim) {
        Some(p) if !p.is_empty() => p,
        _ => return Suggest::NoSuggestions,
    };

    let q = QueryExpression::new().and(Clause::prefix(&[Field::Title], prefix));
    Suggest::Lookup(
        SelectQuery::new(q)
            .param("rows", rows)
            .param("fl", Field::Title.as_str()),
    )
}

/// Facet-only lookup: every document, no rows, all distinct values of `field`.
pub fn build_facet_query(field: &str) -> SelectQuery {
    SelectQuery::new(QueryExpression::match_all())
        .param("facet", "true")
        .param("facet.field", field)
        .param("facet.limit", -1)
        .param("rows", 0)
}
