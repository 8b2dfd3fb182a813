//! Estimating when an undated document was written.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::document::{Corpus, Document};
use crate::partition::{
    partition_corpus, time_partitions, Partition, SpanLength, TimeSpan, TimeSpanError,
};
use crate::selection::{NllrScorer, SelectionError, TopKSelector};

/// The best-scoring partition for a query document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Calendar window the winning partition was cut with.
    pub span: TimeSpan,
    /// Earliest document date inside the winning partition.
    pub start: NaiveDate,
    /// Latest document date inside the winning partition.
    pub end: NaiveDate,
    pub score: f64,
}

impl Prediction {
    /// Whether `date` lies in the predicted window, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Scores query documents against the time partitions of a reference
/// corpus.
#[derive(Debug)]
pub struct DateEstimator<'a> {
    scorer: NllrScorer<'a>,
    partitions: Vec<Partition>,
}

impl<'a> DateEstimator<'a> {
    /// Partition `reference` starting from `first` and bind a scorer to it.
    ///
    /// `reference` must have fresh statistics.
    pub fn new(reference: &'a Corpus, first: TimeSpan) -> Result<Self, TimeSpanError> {
        Ok(DateEstimator {
            scorer: NllrScorer::new(reference),
            partitions: time_partitions(reference, first)?,
        })
    }

    /// Partition `reference` into windows of `length` aligned at its own
    /// earliest date.
    pub fn with_length(reference: &'a Corpus, length: SpanLength) -> Result<Self, TimeSpanError> {
        Ok(DateEstimator {
            scorer: NllrScorer::new(reference),
            partitions: partition_corpus(reference, length)?,
        })
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Pick the partition with the highest NLLR for `query`.
    ///
    /// Fails with [`SelectionError::EmptyCandidates`] when the reference
    /// corpus produced no partitions.
    pub fn estimate(&self, query: &Document) -> Result<Prediction, SelectionError> {
        let best = TopKSelector::single(&self.partitions, |partition| {
            self.scorer.score(query, &partition.corpus)
        })?;

        let partition = best.candidate;
        // Partitions are never empty, so their date bounds are always set.
        let (start, end) = match (partition.corpus.start_date(), partition.corpus.end_date()) {
            (Some(start), Some(end)) => (start, end),
            _ => (partition.span.start(), partition.span.end()),
        };

        let prediction = Prediction {
            span: partition.span,
            start,
            end,
            score: best.score,
        };
        trace!(
            actual = ?query.date(),
            start = %prediction.start,
            end = %prediction.end,
            score = prediction.score,
            "Dated document"
        );
        Ok(prediction)
    }
}
