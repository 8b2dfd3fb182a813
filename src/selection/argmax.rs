use super::{Argument, Scorer, SelectionError};
use crate::types::scored::ScoredCandidate;

/// Best-of and best-k selection over a scoring function.
pub struct TopKSelector;

impl TopKSelector {
    /// The highest-scoring candidate. Ties keep the earliest candidate.
    pub fn single<T, I, F>(candidates: I, mut score: F) -> Result<ScoredCandidate<T>, SelectionError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> f64,
    {
        Self::try_single(candidates, |candidate| Ok(score(candidate)))
    }

    pub fn try_single<T, I, F>(candidates: I, mut score: F) -> Result<ScoredCandidate<T>, SelectionError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> Result<f64, SelectionError>,
    {
        let mut candidates = candidates.into_iter();
        let first = candidates.next().ok_or(SelectionError::EmptyCandidates)?;

        let first_score = score(&first)?;
        let mut best = ScoredCandidate::new(first, first_score);
        for candidate in candidates {
            let value = score(&candidate)?;
            if best.score < value {
                best = ScoredCandidate::new(candidate, value);
            }
        }
        Ok(best)
    }

    /// Up to `k` candidates, highest score first.
    ///
    /// Once `k` candidates are held a newcomer only gets in by beating the
    /// lowest held score outright, so among equal scores the earliest wins.
    pub fn multiple<T, I, F>(k: usize, candidates: I, mut score: F) -> Vec<ScoredCandidate<T>>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> f64,
    {
        let mut best = Vec::with_capacity(k);
        if k == 0 {
            return best;
        }

        for candidate in candidates {
            let value = score(&candidate);
            insert_bounded(&mut best, k, ScoredCandidate::new(candidate, value));
        }
        best
    }

    pub fn try_multiple<T, I, F>(
        k: usize,
        candidates: I,
        mut score: F,
    ) -> Result<Vec<ScoredCandidate<T>>, SelectionError>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> Result<f64, SelectionError>,
    {
        let mut best = Vec::with_capacity(k);
        if k == 0 {
            return Ok(best);
        }

        for candidate in candidates {
            let value = score(&candidate)?;
            insert_bounded(&mut best, k, ScoredCandidate::new(candidate, value));
        }
        Ok(best)
    }

    /// [`TopKSelector::single`] over a [`Scorer`], called as
    /// `scorer(candidate, constants...)`.
    pub fn single_with<'a, S, T>(
        scorer: &S,
        candidates: &'a [T],
        constants: &[Argument<'a>],
    ) -> Result<ScoredCandidate<&'a T>, SelectionError>
    where
        S: Scorer + ?Sized,
        &'a T: Into<Argument<'a>>,
    {
        let mut args = Vec::with_capacity(constants.len() + 1);
        Self::try_single(candidates, |&candidate| {
            args.clear();
            args.push(candidate.into());
            args.extend_from_slice(constants);
            scorer.calculate(&args)
        })
    }

    /// [`TopKSelector::multiple`] over a [`Scorer`], called as
    /// `scorer(candidate, constants...)`.
    pub fn multiple_with<'a, S, T>(
        scorer: &S,
        k: usize,
        candidates: &'a [T],
        constants: &[Argument<'a>],
    ) -> Result<Vec<ScoredCandidate<&'a T>>, SelectionError>
    where
        S: Scorer + ?Sized,
        &'a T: Into<Argument<'a>>,
    {
        let mut args = Vec::with_capacity(constants.len() + 1);
        Self::try_multiple(k, candidates, |&candidate| {
            args.clear();
            args.push(candidate.into());
            args.extend_from_slice(constants);
            scorer.calculate(&args)
        })
    }
}

fn insert_bounded<T>(best: &mut Vec<ScoredCandidate<T>>, k: usize, entry: ScoredCandidate<T>) {
    if best.len() < k {
        best.push(entry);
    } else if best[k - 1].score < entry.score {
        best.pop();
        best.push(entry);
    } else {
        return;
    }
    sort_descending(best);
}

/// Stable insertion sort, highest score first.
fn sort_descending<T>(entries: &mut [ScoredCandidate<T>]) {
    for i in 1..entries.len() {
        let mut j = i;
        while j > 0 && entries[j - 1].score < entries[j].score {
            entries.swap(j - 1, j);
            j -= 1;
        }
    }
}
