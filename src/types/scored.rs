use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A candidate paired with the score a scoring function gave it.
///
/// Equality and ordering look at the score only; two different candidates
/// with the same score compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoredCandidate<T> {
    pub candidate: T,
    pub score: f64,
}

impl<T> ScoredCandidate<T> {
    pub fn new(candidate: T, score: f64) -> Self {
        Self { candidate, score }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ScoredCandidate<U> {
        ScoredCandidate {
            candidate: f(self.candidate),
            score: self.score,
        }
    }
}

impl<T> PartialEq for ScoredCandidate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl<T> PartialOrd for ScoredCandidate<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.score.partial_cmp(&other.score)
    }
}
