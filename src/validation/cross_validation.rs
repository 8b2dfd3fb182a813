use std::rc::Rc;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::collections::DynamicArray;
use crate::document::{Corpus, Document};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("Cannot split a corpus into zero folds")]
    ZeroFolds,
}

/// k-fold splitting for cross-validation.
pub struct CrossValidationSplitter;

impl CrossValidationSplitter {
    /// Shuffle the documents of `corpus` and deal them into `folds` disjoint
    /// corpora whose sizes differ by at most one.
    ///
    /// Each fold first takes `n / folds` consecutive shuffled documents; the
    /// `n % folds` leftovers then go one each to the first folds. With more
    /// folds than documents some folds stay empty. The input corpus is not
    /// reordered. Every fold has fresh statistics.
    pub fn split<R>(corpus: &Corpus, folds: usize, rng: &mut R) -> Result<Vec<Corpus>, SplitError>
    where
        R: Rng + ?Sized,
    {
        if folds == 0 {
            return Err(SplitError::ZeroFolds);
        }

        let mut shuffled: DynamicArray<Rc<Document>> = corpus.iter().cloned().collect();
        shuffled.as_mut_slice().shuffle(rng);
        let documents = shuffled.as_slice();

        let per_fold = documents.len() / folds;
        let dealt = folds * per_fold;
        let mut parts: Vec<Corpus> = (0..folds)
            .map(|fold| {
                let mut part = Corpus::new();
                part.add_all(documents[fold * per_fold..(fold + 1) * per_fold].iter().cloned());
                part
            })
            .collect();

        for (part, leftover) in parts.iter_mut().zip(&documents[dealt..]) {
            part.add(Rc::clone(leftover));
        }

        for part in &mut parts {
            part.refresh_stats();
        }

        debug!(
            documents = documents.len(),
            folds,
            per_fold,
            leftovers = documents.len() - dealt,
            "Split corpus into folds"
        );
        Ok(parts)
    }

    /// Every document of `folds` except those of `excluded`, which is
    /// matched by identity, not by content. The result has fresh statistics.
    pub fn build_training_corpus(folds: &[Corpus], excluded: &Corpus) -> Corpus {
        folds
            .iter()
            .filter(|fold| !std::ptr::eq(*fold, excluded))
            .flat_map(|fold| fold.iter().cloned())
            .collect()
    }
}
