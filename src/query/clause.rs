use std::fmt;

use super::escape::{EscapedPhrase, EscapedTerm};
use crate::types::Field;

/// One self-contained boolean term of a [`QueryExpression`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// `*:*`
    MatchAll,
    /// `field:value*`, or `(f1:value* OR f2:value*)` over several fields.
    Prefix {
        fields: Vec<Field>,
        prefix: EscapedTerm,
    },
    /// `field:value`
    Term { field: Field, value: EscapedTerm },
    /// `field:"value"`
    Phrase { field: Field, value: EscapedPhrase },
    /// `field:true` / `field:false`
    Flag { field: Field, value: bool },
}

impl Clause {
    pub fn prefix(fields: &[Field], raw: &str) -> Self {
        Clause::Prefix {
            fields: fields.to_vec(),
            prefix: EscapedTerm::new(raw),
        }
    }

    pub fn term(field: Field, raw: &str) -> Self {
        Clause::Term {
            field,
            value: EscapedTerm::new(raw),
        }
    }

    pub fn phrase(field: Field, raw: &str) -> Self {
        Clause::Phrase {
            field,
            value: EscapedPhrase::new(raw),
        }
    }

    pub fn flag(field: Field, value: bool) -> Self {
        Clause::Flag { field, value }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::MatchAll => f.write_str("*:*"),
            Clause::Prefix { fields, prefix } => match fields.as_slice() {
                [] => f.write_str("*:*"),
                [single] => write!(f, "{}:{}*", single, prefix),
                many => {
                    f.write_str("(")?;
                    for (i, field) in many.iter().enumerate() {
                        if i > 0 {
                            f.write_str(" OR ")?;
                        }
                        write!(f, "{}:{}*", field, prefix)?;
                    }
                    f.write_str(")")
                }
            },
            Clause::Term { field, value } => write!(f, "{}:{}", field, value),
            Clause::Phrase { field, value } => write!(f, "{}:\"{}\"", field, value),
            Clause::Flag { field, value } => write!(f, "{}:{}", field, value),
        }
    }
}

/// Clauses joined by ` AND `, in insertion order. Never empty: an expression
/// with no clauses renders as match-all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryExpression {
    clauses: Vec<Clause>,
}

impl QueryExpression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn match_all() -> Self {
        Self {
            clauses: vec![Clause::MatchAll],
        }
    }

    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}

impl fmt::Display for QueryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clauses.is_empty() {
            return f.write_str("*:*");
        }
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}
