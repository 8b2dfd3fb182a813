//! Scoring functions and best-candidate selection.

pub mod argmax;
pub mod nllr;
pub mod tfidf;

use thiserror::Error;

use crate::document::{Corpus, Document};
use crate::partition::Partition;
pub use argmax::TopKSelector;
pub use nllr::NllrScorer;
pub use tfidf::Tfidf;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Cannot select from an empty candidate list")]
    EmptyCandidates,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// One positional argument to a [`Scorer`].
#[derive(Debug, Clone, Copy)]
pub enum Argument<'a> {
    Token(&'a str),
    Document(&'a Document),
    Corpus(&'a Corpus),
}

impl Argument<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Argument::Token(_) => "token",
            Argument::Document(_) => "document",
            Argument::Corpus(_) => "corpus",
        }
    }
}

impl<'a> From<&'a str> for Argument<'a> {
    fn from(token: &'a str) -> Self {
        Argument::Token(token)
    }
}

impl<'a> From<&'a String> for Argument<'a> {
    fn from(token: &'a String) -> Self {
        Argument::Token(token)
    }
}

impl<'a> From<&'a Document> for Argument<'a> {
    fn from(document: &'a Document) -> Self {
        Argument::Document(document)
    }
}

impl<'a> From<&'a Corpus> for Argument<'a> {
    fn from(corpus: &'a Corpus) -> Self {
        Argument::Corpus(corpus)
    }
}

impl<'a> From<&'a Partition> for Argument<'a> {
    fn from(partition: &'a Partition) -> Self {
        Argument::Corpus(&partition.corpus)
    }
}

/// A scoring function taking positional arguments.
///
/// Arguments are checked at call time: a wrong count or a wrong kind in any
/// position is an [`SelectionError::InvalidArgument`].
pub trait Scorer {
    /// Number of arguments [`Scorer::calculate`] expects.
    fn arity(&self) -> usize;

    fn calculate(&self, args: &[Argument<'_>]) -> Result<f64, SelectionError>;
}

pub(crate) fn check_arity(expected: usize, args: &[Argument<'_>]) -> Result<(), SelectionError> {
    if args.len() != expected {
        return Err(SelectionError::InvalidArgument(format!(
            "expected {expected} arguments, got {}",
            args.len()
        )));
    }
    Ok(())
}

pub(crate) fn wrong_kinds(expected: &str, args: &[Argument<'_>]) -> SelectionError {
    let found: Vec<&str> = args.iter().map(Argument::kind).collect();
    SelectionError::InvalidArgument(format!("expected ({expected}), got ({})", found.join(", ")))
}
