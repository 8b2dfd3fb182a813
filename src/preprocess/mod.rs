//! Raw text to space-separated normalized tokens.
//!
//! The statistics layer never tokenizes on its own beyond splitting on single
//! spaces; everything else (punctuation, numerals, case, stemming) happens
//! here.

pub mod normalize;
pub mod simple;
pub mod snowball;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use simple::SimplePreprocessor;
pub use snowball::{SnowballPreprocessor, StemmerLanguage};

/// Token written in place of every run of digits.
pub const NUMERAL_TOKEN: &str = "NUMERAL";

pub trait PreProcessor {
    /// Turn raw text into a space-separated token string.
    fn process(&self, input: &str) -> String;

    /// Human-readable name of the language this preprocessor targets.
    fn language(&self) -> &str;
}

impl<P: PreProcessor + ?Sized> PreProcessor for Box<P> {
    fn process(&self, input: &str) -> String {
        (**self).process(input)
    }

    fn language(&self) -> &str {
        (**self).language()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreprocessorKind {
    Simple,
    Snowball,
}

impl PreprocessorKind {
    pub fn build(self, language: StemmerLanguage) -> Box<dyn PreProcessor> {
        match self {
            PreprocessorKind::Simple => Box::new(SimplePreprocessor),
            PreprocessorKind::Snowball => Box::new(SnowballPreprocessor::new(language)),
        }
    }
}

impl FromStr for PreprocessorKind {
    type Err = UnknownPreprocessor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(PreprocessorKind::Simple),
            "snowball" => Ok(PreprocessorKind::Snowball),
            other => Err(UnknownPreprocessor(other.to_string())),
        }
    }
}

impl fmt::Display for PreprocessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreprocessorKind::Simple => f.write_str("simple"),
            PreprocessorKind::Snowball => f.write_str("snowball"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown preprocessor: {0}")]
pub struct UnknownPreprocessor(pub String);
