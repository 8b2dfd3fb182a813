use tracing::trace;

use super::{check_arity, wrong_kinds, Argument, Scorer, SelectionError, Tfidf, TopKSelector};
use crate::document::{BagOfWords, Corpus, Document};
use crate::types::scored::ScoredCandidate;

/// Stand-in for a zero probability, keeping logarithms and ratios finite.
pub const NONZERO: f64 = 1e-7;

/// How many of the query's most discriminative tokens enter the score.
pub const TOKENS_TO_ANALYZE: usize = 10;

/// Normalized log-likelihood ratio scorer bound to a reference corpus.
///
/// Scores how much better a candidate sub-corpus explains a query document
/// than the reference corpus as a whole does, over the query's top
/// [`TOKENS_TO_ANALYZE`] tokens by tf-idf.
#[derive(Debug, Clone, Copy)]
pub struct NllrScorer<'a> {
    reference: &'a Corpus,
}

impl<'a> NllrScorer<'a> {
    pub fn new(reference: &'a Corpus) -> Self {
        NllrScorer { reference }
    }

    pub fn reference(&self) -> &'a Corpus {
        self.reference
    }

    /// `frequency / total tokens`, with zero replaced by [`NONZERO`].
    ///
    /// A bag without tokens has probability [`NONZERO`] for every token.
    pub fn token_probability<B>(token: &str, bag: &B) -> f64
    where
        B: BagOfWords + ?Sized,
    {
        let total = bag.total_tokens();
        if total == 0 {
            return NONZERO;
        }
        let probability = bag.frequency(token) as f64 / total as f64;
        if probability == 0.0 || !probability.is_finite() {
            NONZERO
        } else {
            probability
        }
    }

    /// The query's highest tf-idf tokens against the reference corpus.
    pub fn discriminative_tokens(&self, query: &Document) -> Vec<ScoredCandidate<String>> {
        TopKSelector::multiple(TOKENS_TO_ANALYZE, query.unique_tokens().to_sequence(), |token| {
            Tfidf::tfidf(token, query, self.reference)
        })
    }

    /// NLLR of `query` against `candidate`.
    ///
    /// `candidate` must be a sub-corpus of the reference corpus; this is not
    /// checked.
    pub fn score(&self, query: &Document, candidate: &Corpus) -> f64 {
        let mut nllr = 0.0;
        for selected in self.discriminative_tokens(query) {
            let token = selected.candidate.as_str();

            let in_query = Self::token_probability(token, query);
            let in_candidate = Self::token_probability(token, candidate);
            let in_reference = Self::token_probability(token, self.reference);

            nllr += in_query * (in_candidate / in_reference).ln();
        }

        trace!(
            candidate_documents = candidate.len(),
            score = nllr,
            "Scored candidate partition"
        );
        nllr
    }
}

impl Scorer for NllrScorer<'_> {
    fn arity(&self) -> usize {
        2
    }

    /// Arguments: `(candidate corpus, query document)`.
    fn calculate(&self, args: &[Argument<'_>]) -> Result<f64, SelectionError> {
        check_arity(self.arity(), args)?;
        match args {
            [Argument::Corpus(candidate), Argument::Document(query)] => {
                Ok(self.score(query, candidate))
            }
            _ => Err(wrong_kinds("corpus, document", args)),
        }
    }
}
