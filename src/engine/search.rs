use std::collections::BTreeSet;
use serde::Serialize;
use tracing::debug;
use crate::index::InvertedIndex;
use crate::preprocessing::tokenizer;

/// How a query term's matches combine with the results so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// No prefix: union.
    Unmodified,
    /// `+term`: intersection.
    Require,
    /// `-term`: difference.
    Exclude,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerm {
    pub modifier: Modifier,
    /// Normalized term, `None` when the word has no indexable content.
    pub token: Option<String>,
}

/// A query together with the documents it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub query: String,
    pub count: usize,
    pub matches: BTreeSet<String>,
}

impl SearchResult {
    pub fn new(query: &str, matches: BTreeSet<String>) -> Self {
        SearchResult {
            query: query.to_string(),
            count: matches.len(),
            matches,
        }
    }
}

pub fn parse_term(word: &str) -> QueryTerm {
    let (modifier, rest) = if let Some(rest) = word.strip_prefix('+') {
        (Modifier::Require, rest)
    } else if let Some(rest) = word.strip_prefix('-') {
        (Modifier::Exclude, rest)
    } else {
        (Modifier::Unmodified, word)
    };

    QueryTerm {
        modifier,
        token: tokenizer::normalize(rest),
    }
}

/// Splits a query on ASCII whitespace into terms, keeping their order.
pub fn parse_query(query: &str) -> Vec<QueryTerm> {
    query.split_ascii_whitespace().map(parse_term).collect()
}

/// Evaluates a boolean query against `index`.
///
/// Terms fold left to right into a set that starts empty. The first term's
/// modifier is honoured like any other, so a leading `+` or `-` term leaves
/// the results empty.
pub fn evaluate(index: &InvertedIndex, query: &str) -> BTreeSet<String> {
    parse_query(query)
        .into_iter()
        .fold(BTreeSet::new(), |results, term| {
            let term_matches = index.matches(term.token.as_deref());
            debug!(?term, hits = term_matches.len(), "applying query term");

            match term.modifier {
                Modifier::Unmodified => &results | &term_matches,
                Modifier::Require => &results & &term_matches,
                Modifier::Exclude => &results - &term_matches,
            }
        })
}

pub fn search(index: &InvertedIndex, query: &str) -> SearchResult {
    SearchResult::new(query, evaluate(index, query))
}
