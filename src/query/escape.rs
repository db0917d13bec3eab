//! Escaping of user-supplied text before it enters a query clause.
//!
//! [`EscapedTerm`] and [`EscapedPhrase`] can only be built through the
//! escaping constructors, so a [`super::Clause`] never holds raw input.

use std::fmt;

/// Characters with meaning to the standard Lucene/Solr query parser.
const SYNTAX_CHARS: &[char] = &[
    '\\', '+', '-', '!', '(', ')', ':', '^', '[', ']', '"', '{', '}', '~', '*', '?', '|', '&',
    '/',
];

const OPERATORS: &[&str] = &["AND", "OR", "NOT"];

/// A single query term with every syntax character and all whitespace
/// backslash-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EscapedTerm(String);

impl EscapedTerm {
    pub fn new(raw: &str) -> Self {
        Self(escape_term(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EscapedTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text destined for the inside of a double-quoted phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EscapedPhrase(String);

impl EscapedPhrase {
    pub fn new(raw: &str) -> Self {
        Self(escape_phrase(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EscapedPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn escape_term(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    // A bare operator word would otherwise be read as boolean syntax.
    if OPERATORS.contains(&raw) {
        out.push('\\');
    }
    for c in raw.chars() {
        if SYNTAX_CHARS.contains(&c) || c.is_whitespace() {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub fn escape_phrase(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    for c in raw.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
