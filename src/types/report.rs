use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::EvaluationConfig;

/// Tally of one test fold.
///
/// `other` counts test documents that could not be judged: undated ones,
/// and all of them when the training folds produced no partitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldOutcome {
    pub test_documents: usize,
    pub training_documents: usize,
    pub partitions: usize,
    pub correct: usize,
    pub wrong: usize,
    pub other: usize,
}

impl FoldOutcome {
    /// Share of judged documents dated correctly, `None` when nothing was
    /// judged.
    pub fn accuracy(&self) -> Option<f64> {
        accuracy(self.correct, self.wrong)
    }
}

/// One full pass of k-fold cross-validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub round: usize,
    pub folds: Vec<FoldOutcome>,
    pub correct: usize,
    pub wrong: usize,
    pub other: usize,
}

impl RunOutcome {
    pub fn new(round: usize, folds: Vec<FoldOutcome>) -> Self {
        let (correct, wrong, other) = folds.iter().fold((0, 0, 0), |(c, w, o), fold| {
            (c + fold.correct, w + fold.wrong, o + fold.other)
        });
        RunOutcome {
            round,
            folds,
            correct,
            wrong,
            other,
        }
    }

    pub fn accuracy(&self) -> Option<f64> {
        accuracy(self.correct, self.wrong)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub config: EvaluationConfig,
    pub corpus_documents: usize,
    pub created_at: DateTime<Utc>, // informational only
    pub runs: Vec<RunOutcome>,
}

impl EvaluationReport {
    /// Mean of the per-run accuracies, skipping runs that judged nothing.
    pub fn mean_accuracy(&self) -> Option<f64> {
        let accuracies: Vec<f64> = self.runs.iter().filter_map(RunOutcome::accuracy).collect();
        if accuracies.is_empty() {
            return None;
        }
        Some(accuracies.iter().sum::<f64>() / accuracies.len() as f64)
    }
}

fn accuracy(correct: usize, wrong: usize) -> Option<f64> {
    let judged = correct + wrong;
    (judged > 0).then(|| correct as f64 / judged as f64)
}
