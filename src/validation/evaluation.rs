use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use super::{CrossValidationSplitter, EvaluationConfig, EvaluationError};
use crate::dating::DateEstimator;
use crate::document::Corpus;
use crate::partition::TimeSpan;
use crate::types::report::{EvaluationReport, FoldOutcome, RunOutcome};

/// Repeated k-fold evaluation of [`DateEstimator`] on a dated corpus.
///
/// Every fold in turn is the test set; the union of the others is the
/// reference corpus it is dated against. A prediction is correct when the
/// document's true date lies inside the predicted window.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluationConfig,
}

impl Evaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Evaluator { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// [`Evaluator::run`] with a ChaCha generator seeded from the
    /// configuration, so the same corpus and config give the same report.
    pub fn run_seeded(&self, corpus: &Corpus) -> Result<EvaluationReport, EvaluationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.run(corpus, &mut rng)
    }

    /// Run every configured repetition, drawing fold shuffles from `rng`.
    ///
    /// Windows are aligned at the first document date of the whole corpus,
    /// so every fold sees the same calendar grid.
    pub fn run<R>(&self, corpus: &Corpus, rng: &mut R) -> Result<EvaluationReport, EvaluationError>
    where
        R: Rng + ?Sized,
    {
        let start = corpus.start_date().ok_or(EvaluationError::UndatedCorpus)?;
        let first = TimeSpan::aligned(start, self.config.span)?;

        info!(
            documents = corpus.len(),
            folds = self.config.folds,
            repetitions = self.config.repetitions,
            span = %self.config.span,
            first = %first.start(),
            "Starting cross-validation"
        );

        let mut runs = Vec::with_capacity(self.config.repetitions);
        for round in 0..self.config.repetitions {
            let run = self.run_once(round, corpus, first, rng)?;
            info!(
                round,
                correct = run.correct,
                wrong = run.wrong,
                other = run.other,
                accuracy = ?run.accuracy(),
                "Finished cross-validation round"
            );
            runs.push(run);
        }

        Ok(EvaluationReport {
            config: self.config.clone(),
            corpus_documents: corpus.len(),
            created_at: Utc::now(),
            runs,
        })
    }

    fn run_once<R>(
        &self,
        round: usize,
        corpus: &Corpus,
        first: TimeSpan,
        rng: &mut R,
    ) -> Result<RunOutcome, EvaluationError>
    where
        R: Rng + ?Sized,
    {
        let folds = CrossValidationSplitter::split(corpus, self.config.folds, rng)?;

        let mut outcomes = Vec::with_capacity(folds.len());
        for (index, test) in folds.iter().enumerate() {
            let training = CrossValidationSplitter::build_training_corpus(&folds, test);
            let outcome = evaluate_fold(test, &training, first)?;
            debug!(
                round,
                fold = index,
                correct = outcome.correct,
                wrong = outcome.wrong,
                other = outcome.other,
                "Evaluated fold"
            );
            outcomes.push(outcome);
        }

        Ok(RunOutcome::new(round, outcomes))
    }
}

/// Date every document of `test` against the partitions of `training`.
pub fn evaluate_fold(
    test: &Corpus,
    training: &Corpus,
    first: TimeSpan,
) -> Result<FoldOutcome, EvaluationError> {
    let estimator = DateEstimator::new(training, first)?;

    let mut outcome = FoldOutcome {
        test_documents: test.len(),
        training_documents: training.len(),
        partitions: estimator.partitions().len(),
        ..FoldOutcome::default()
    };

    if estimator.partitions().is_empty() {
        if !test.is_empty() {
            warn!(
                test = test.len(),
                training = training.len(),
                "Training folds have no dated documents, fold left unjudged"
            );
        }
        outcome.other = test.len();
        return Ok(outcome);
    }

    for document in test.iter() {
        let Some(date) = document.date() else {
            outcome.other += 1;
            continue;
        };
        if estimator.estimate(document)?.contains(date) {
            outcome.correct += 1;
        } else {
            outcome.wrong += 1;
        }
    }

    Ok(outcome)
}
