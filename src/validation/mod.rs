//! Cross-validated evaluation of the dating pipeline.

pub mod config;
pub mod cross_validation;
pub mod evaluation;

use thiserror::Error;

use crate::document::ParseError;
use crate::partition::TimeSpanError;
use crate::selection::SelectionError;

pub use config::EvaluationConfig;
pub use cross_validation::{CrossValidationSplitter, SplitError};
pub use evaluation::{evaluate_fold, Evaluator};

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("Corpus has no dated documents")]
    UndatedCorpus,

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Split(#[from] SplitError),

    #[error(transparent)]
    TimeSpan(#[from] TimeSpanError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}
