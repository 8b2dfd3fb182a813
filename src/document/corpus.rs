use std::rc::Rc;

use chrono::NaiveDate;
use tracing::trace;

use super::bag::BagOfWords;
use super::document::Document;
use crate::collections::{CollectionError, DynamicArray, HashSet, HashTable};

/// An ordered collection of shared documents with cached aggregate
/// statistics.
///
/// The aggregates (token totals, per-token frequencies, document containment
/// counts and date bounds) are only recomputed by [`Corpus::refresh_stats`].
/// [`Corpus::add`] and [`Corpus::remove`] leave them stale until then.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: DynamicArray<Rc<Document>>,
    stats: CorpusStats,
}

#[derive(Debug, Clone, Default)]
struct CorpusStats {
    total_tokens: usize,
    frequencies: HashTable<String, usize>,
    containing: HashTable<String, usize>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl CorpusStats {
    fn absorb(&mut self, document: &Document) {
        if let Some(date) = document.date() {
            match self.start_date {
                Some(start) if start <= date => {}
                _ => self.start_date = Some(date),
            }
            match self.end_date {
                Some(end) if end >= date => {}
                _ => self.end_date = Some(date),
            }
        }

        for (token, &count) in document.frequencies() {
            add_count(&mut self.frequencies, token, count);
            add_count(&mut self.containing, token, 1);
        }

        self.total_tokens += document.total_tokens();
    }
}

fn add_count(table: &mut HashTable<String, usize>, token: &str, amount: usize) {
    if let Some(count) = table.get_mut(token) {
        *count += amount;
    } else {
        table.put(token.to_string(), amount);
    }
}

impl Corpus {
    /// An empty corpus. Its statistics are trivially fresh.
    pub fn new() -> Self {
        Self::default()
    }

    /// A corpus over `documents`, with statistics already refreshed.
    pub fn from_documents<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = Rc<Document>>,
    {
        let mut corpus = Corpus {
            documents: documents.into_iter().collect(),
            stats: CorpusStats::default(),
        };
        corpus.refresh_stats();
        corpus
    }

    /// Append a document. Does not refresh statistics.
    pub fn add(&mut self, document: Rc<Document>) {
        self.documents.append(document);
    }

    /// Append documents. Does not refresh statistics.
    pub fn add_all<I>(&mut self, documents: I)
    where
        I: IntoIterator<Item = Rc<Document>>,
    {
        self.documents.extend(documents);
    }

    pub fn get(&self, index: usize) -> Option<&Rc<Document>> {
        self.documents.get(index).ok()
    }

    /// Remove the document at `index`. Does not refresh statistics.
    pub fn remove(&mut self, index: usize) -> Result<Rc<Document>, CollectionError> {
        self.documents.remove(index)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &DynamicArray<Rc<Document>> {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rc<Document>> {
        self.documents.iter()
    }

    /// Recompute every aggregate from the member documents, in order.
    pub fn refresh_stats(&mut self) {
        let mut stats = CorpusStats::default();
        for document in &self.documents {
            stats.absorb(document);
        }
        self.stats = stats;

        trace!(
            documents = self.documents.len(),
            tokens = self.stats.total_tokens,
            distinct = self.stats.frequencies.len(),
            "Refreshed corpus statistics"
        );
    }

    /// Number of member documents containing `token` at least once.
    pub fn docs_containing(&self, token: &str) -> usize {
        self.stats.containing.get(token).copied().unwrap_or(0)
    }

    /// Earliest document date, if any document is dated.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.stats.start_date
    }

    /// Latest document date, if any document is dated.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.stats.end_date
    }

    pub fn undated_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|document| document.date().is_none())
            .count()
    }

    /// A refreshed sub-corpus of the documents dated within `[start, end]`.
    ///
    /// Undated documents belong to no time partition and are never included.
    pub fn time_partition(&self, start: NaiveDate, end: NaiveDate) -> Corpus {
        let mut partition = Corpus::new();
        for document in &self.documents {
            match document.date() {
                Some(date) if start <= date && date <= end => partition.add(Rc::clone(document)),
                _ => {}
            }
        }
        partition.refresh_stats();
        partition
    }
}

impl BagOfWords for Corpus {
    fn total_tokens(&self) -> usize {
        self.stats.total_tokens
    }

    fn frequency(&self, token: &str) -> usize {
        self.stats.frequencies.get(token).copied().unwrap_or(0)
    }

    /// Union of the member documents' tokens. Computed from the documents,
    /// not the cached statistics.
    fn unique_tokens(&self) -> HashSet<String> {
        let mut tokens = HashSet::new();
        for document in &self.documents {
            for (token, _) in document.frequencies() {
                tokens.add(token.clone());
            }
        }
        tokens
    }

    fn contains_token(&self, token: &str) -> bool {
        self.stats.frequencies.contains_key(token)
    }
}

impl FromIterator<Rc<Document>> for Corpus {
    fn from_iter<I: IntoIterator<Item = Rc<Document>>>(iter: I) -> Self {
        Corpus::from_documents(iter)
    }
}
