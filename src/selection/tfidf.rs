use super::{check_arity, wrong_kinds, Argument, Scorer, SelectionError};
use crate::document::{BagOfWords, Corpus, Document};

/// Term frequency times inverse document frequency.
///
/// The term frequency is the raw in-document count, not normalized by the
/// document's length.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tfidf;

impl Tfidf {
    /// `ln(documents / documents containing token)`.
    ///
    /// A token no reference document contains has an infinite idf.
    pub fn idf(reference: &Corpus, token: &str) -> f64 {
        let total = reference.len() as f64;
        let containing = reference.docs_containing(token) as f64;
        (total / containing).ln()
    }

    pub fn tfidf(token: &str, query: &Document, reference: &Corpus) -> f64 {
        query.frequency(token) as f64 * Self::idf(reference, token)
    }
}

impl Scorer for Tfidf {
    fn arity(&self) -> usize {
        3
    }

    /// Arguments: `(token, query document, reference corpus)`.
    fn calculate(&self, args: &[Argument<'_>]) -> Result<f64, SelectionError> {
        check_arity(self.arity(), args)?;
        match args {
            [Argument::Token(token), Argument::Document(query), Argument::Corpus(reference)] => {
                Ok(Self::tfidf(token, query, reference))
            }
            _ => Err(wrong_kinds("token, document, corpus", args)),
        }
    }
}
