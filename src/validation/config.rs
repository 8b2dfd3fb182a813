use std::path::Path;

use serde::{Deserialize, Serialize};

use super::EvaluationError;
use crate::document::{read_corpus, Corpus};
use crate::partition::SpanLength;
use crate::preprocess::{PreProcessor, PreprocessorKind, StemmerLanguage};

// Serializable, comparable, explicit defaults.
// Missing JSON fields fall back to `EvaluationConfig::v0()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Number of cross-validation folds.
    pub folds: usize,
    /// How many times the whole cross-validation is repeated.
    pub repetitions: usize,
    /// Length of the time partitions.
    pub span: SpanLength,
    /// Seed of the fold shuffler.
    pub seed: u64,
    /// `chrono` format of the date field in corpus records.
    pub date_format: String,
    pub preprocessor: PreprocessorKind,
    pub language: StemmerLanguage,
}

impl EvaluationConfig {
    pub fn v0() -> Self {
        Self {
            folds: 10,
            repetitions: 1,
            span: SpanLength::Biweekly,
            seed: 0,
            date_format: "%d-%b-%Y".into(),
            preprocessor: PreprocessorKind::Snowball,
            language: StemmerLanguage::Finnish,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, EvaluationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build_preprocessor(&self) -> Box<dyn PreProcessor> {
        self.preprocessor.build(self.language)
    }

    /// Read a record file with this configuration's date format and
    /// preprocessor.
    pub fn read_corpus(&self, path: &Path) -> Result<Corpus, EvaluationError> {
        let preprocessor = self.build_preprocessor();
        Ok(read_corpus(path, &self.date_format, preprocessor.as_ref())?)
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self::v0()
    }
}
