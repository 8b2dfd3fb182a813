use chrono::{NaiveDate, NaiveDateTime};

use super::bag::BagOfWords;
use crate::collections::{hash_table, HashSet, HashTable};
use crate::types::identifiers::DocumentId;

/// A single preprocessed text and, when known, the day it was written.
///
/// Immutable once built. Token counts are derived from the body at
/// construction and the body itself is not retained.
#[derive(Debug, Clone)]
pub struct Document {
    id: Option<DocumentId>,
    date: Option<NaiveDate>,
    frequencies: HashTable<String, usize>,
    total_tokens: usize,
}

impl Document {
    /// Build a document from a space-separated token string.
    ///
    /// The date, if any, is truncated to its day.
    pub fn new(date: Option<NaiveDateTime>, body: &str) -> Self {
        Self::build(date.map(|moment| moment.date()), body)
    }

    pub fn dated(day: NaiveDate, body: &str) -> Self {
        Self::build(Some(day), body)
    }

    pub fn undated(body: &str) -> Self {
        Self::build(None, body)
    }

    /// Attach the identifier of the record this document came from.
    pub fn with_id(mut self, id: DocumentId) -> Self {
        self.id = Some(id);
        self
    }

    fn build(date: Option<NaiveDate>, body: &str) -> Self {
        let mut frequencies = HashTable::new();
        let mut total_tokens = 0;

        for token in split_tokens(body) {
            total_tokens += 1;
            if let Some(count) = frequencies.get_mut(token) {
                *count += 1;
            } else {
                frequencies.put(token.to_string(), 1);
            }
        }

        Document {
            id: None,
            date,
            frequencies,
            total_tokens,
        }
    }

    pub fn id(&self) -> Option<&DocumentId> {
        self.id.as_ref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Each distinct token with its count, in table order.
    pub fn frequencies(&self) -> hash_table::Iter<'_, String, usize> {
        self.frequencies.iter()
    }
}

impl BagOfWords for Document {
    fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    fn frequency(&self, token: &str) -> usize {
        self.frequencies.get(token).copied().unwrap_or(0)
    }

    fn unique_tokens(&self) -> HashSet<String> {
        self.frequencies.keys().cloned().collect()
    }

    fn contains_token(&self, token: &str) -> bool {
        self.frequencies.contains_key(token)
    }
}

/// Split on single spaces. Trailing separators produce no empty tokens, but
/// an empty body is a single empty token.
fn split_tokens(body: &str) -> impl Iterator<Item = &str> {
    let trimmed = body.trim_end_matches(' ');
    let source = if body.is_empty() || !trimmed.is_empty() {
        Some(trimmed)
    } else {
        None
    };
    source.into_iter().flat_map(|text| text.split(' '))
}
