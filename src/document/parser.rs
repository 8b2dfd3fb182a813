use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;
use tracing::{debug, warn};

use super::corpus::Corpus;
use super::document::Document;
use crate::preprocess::PreProcessor;
use crate::types::identifiers::DocumentId;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const FIELD_SEPARATOR: char = ';';

/// Parse one `id;date;body...` record into a dated document.
///
/// Body fields after the date are concatenated as-is and run through the
/// preprocessor. Returns `None` for records with fewer than three fields or
/// a date that does not match `date_format` (a `chrono` format string).
pub fn parse_record<P>(line: &str, date_format: &str, preprocessor: &P) -> Option<Document>
where
    P: PreProcessor + ?Sized,
{
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let fields = trim_trailing_empty(&fields);
    if fields.len() < 3 {
        return None;
    }

    let date = parse_date(fields[1], date_format)?;
    let body: String = fields[2..].concat();
    let processed = preprocessor.process(&body);

    Some(Document::dated(date, &processed).with_id(DocumentId::new(fields[0])))
}

fn trim_trailing_empty<'a, 'b>(fields: &'b [&'a str]) -> &'b [&'a str] {
    let keep = fields
        .iter()
        .rposition(|field| !field.is_empty())
        .map_or(0, |last| last + 1);
    &fields[..keep]
}

/// Dates may be written with or without a time of day; the time is dropped.
fn parse_date(raw: &str, date_format: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, date_format)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, date_format).map(|moment| moment.date()))
        .ok()
}

/// Read a corpus with one record per line. Malformed records are skipped.
/// The returned corpus has fresh statistics.
pub fn read_corpus<P>(
    path: &Path,
    date_format: &str,
    preprocessor: &P,
) -> Result<Corpus, ParseError>
where
    P: PreProcessor + ?Sized,
{
    let reader = BufReader::new(File::open(path)?);

    let mut corpus = Corpus::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        match parse_record(&line?, date_format, preprocessor) {
            Some(document) => corpus.add(Rc::new(document)),
            None => skipped += 1,
        }
    }
    corpus.refresh_stats();

    if skipped > 0 {
        warn!(path = %path.display(), skipped, "Skipped malformed corpus records");
    }
    debug!(
        path = %path.display(),
        documents = corpus.len(),
        "Read corpus"
    );

    Ok(corpus)
}
