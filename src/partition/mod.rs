//! Slicing a corpus into consecutive calendar windows.

pub mod timespan;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, trace};

use crate::document::Corpus;
pub use timespan::{SpanLength, TimeSpan};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSpanError {
    #[error("Date arithmetic out of range near {0}")]
    OutOfRange(NaiveDate),

    #[error("Unknown time span length: {0}")]
    UnknownLength(String),
}

/// A non-empty sub-corpus and the window it was cut with.
#[derive(Debug, Clone)]
pub struct Partition {
    pub span: TimeSpan,
    pub corpus: Corpus,
}

/// Cut `corpus` into consecutive windows starting at `first`, keeping the
/// non-empty ones in chronological order.
///
/// Stops once a window starts after the corpus's last document date. The
/// corpus statistics must be fresh. Undated documents land in no partition.
pub fn time_partitions(corpus: &Corpus, first: TimeSpan) -> Result<Vec<Partition>, TimeSpanError> {
    let Some(last) = corpus.end_date() else {
        debug!("Corpus has no dated documents, no partitions built");
        return Ok(Vec::new());
    };

    let mut partitions = Vec::new();
    let mut span = first;
    while span.start() <= last {
        let partition = corpus.time_partition(span.start(), span.end());
        if partition.is_empty() {
            trace!(start = %span.start(), end = %span.end(), "Partition was empty, skipping");
        } else {
            trace!(
                start = %span.start(),
                end = %span.end(),
                documents = partition.len(),
                "Created time partition"
            );
            partitions.push(Partition {
                span,
                corpus: partition,
            });
        }
        span = span.next()?;
    }

    debug!(
        length = %first.length(),
        partitions = partitions.len(),
        "Built time partitions"
    );
    Ok(partitions)
}

/// Partition `corpus` with windows aligned to its own earliest date.
pub fn partition_corpus(corpus: &Corpus, length: SpanLength) -> Result<Vec<Partition>, TimeSpanError> {
    match corpus.start_date() {
        Some(start) => time_partitions(corpus, TimeSpan::aligned(start, length)?),
        None => Ok(Vec::new()),
    }
}
