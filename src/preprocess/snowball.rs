use std::fmt;
use std::str::FromStr;

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::normalize::{replace_numerals, strip_punctuation};
use super::{PreProcessor, NUMERAL_TOKEN};

/// Languages with a Snowball stemmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StemmerLanguage {
    Arabic,
    Danish,
    Dutch,
    #[default]
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Tamil,
    Turkish,
}

impl StemmerLanguage {
    pub const ALL: [StemmerLanguage; 18] = [
        StemmerLanguage::Arabic,
        StemmerLanguage::Danish,
        StemmerLanguage::Dutch,
        StemmerLanguage::English,
        StemmerLanguage::Finnish,
        StemmerLanguage::French,
        StemmerLanguage::German,
        StemmerLanguage::Greek,
        StemmerLanguage::Hungarian,
        StemmerLanguage::Italian,
        StemmerLanguage::Norwegian,
        StemmerLanguage::Portuguese,
        StemmerLanguage::Romanian,
        StemmerLanguage::Russian,
        StemmerLanguage::Spanish,
        StemmerLanguage::Swedish,
        StemmerLanguage::Tamil,
        StemmerLanguage::Turkish,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StemmerLanguage::Arabic => "Arabic",
            StemmerLanguage::Danish => "Danish",
            StemmerLanguage::Dutch => "Dutch",
            StemmerLanguage::English => "English",
            StemmerLanguage::Finnish => "Finnish",
            StemmerLanguage::French => "French",
            StemmerLanguage::German => "German",
            StemmerLanguage::Greek => "Greek",
            StemmerLanguage::Hungarian => "Hungarian",
            StemmerLanguage::Italian => "Italian",
            StemmerLanguage::Norwegian => "Norwegian",
            StemmerLanguage::Portuguese => "Portuguese",
            StemmerLanguage::Romanian => "Romanian",
            StemmerLanguage::Russian => "Russian",
            StemmerLanguage::Spanish => "Spanish",
            StemmerLanguage::Swedish => "Swedish",
            StemmerLanguage::Tamil => "Tamil",
            StemmerLanguage::Turkish => "Turkish",
        }
    }

    fn algorithm(self) -> Algorithm {
        match self {
            StemmerLanguage::Arabic => Algorithm::Arabic,
            StemmerLanguage::Danish => Algorithm::Danish,
            StemmerLanguage::Dutch => Algorithm::Dutch,
            StemmerLanguage::English => Algorithm::English,
            StemmerLanguage::Finnish => Algorithm::Finnish,
            StemmerLanguage::French => Algorithm::French,
            StemmerLanguage::German => Algorithm::German,
            StemmerLanguage::Greek => Algorithm::Greek,
            StemmerLanguage::Hungarian => Algorithm::Hungarian,
            StemmerLanguage::Italian => Algorithm::Italian,
            StemmerLanguage::Norwegian => Algorithm::Norwegian,
            StemmerLanguage::Portuguese => Algorithm::Portuguese,
            StemmerLanguage::Romanian => Algorithm::Romanian,
            StemmerLanguage::Russian => Algorithm::Russian,
            StemmerLanguage::Spanish => Algorithm::Spanish,
            StemmerLanguage::Swedish => Algorithm::Swedish,
            StemmerLanguage::Tamil => Algorithm::Tamil,
            StemmerLanguage::Turkish => Algorithm::Turkish,
        }
    }

    /// Resolve a language name, falling back to English for unknown names.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(language = name, "Unknown stemmer language, using English");
            StemmerLanguage::default()
        })
    }
}

impl FromStr for StemmerLanguage {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StemmerLanguage::ALL
            .into_iter()
            .find(|language| language.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownLanguage(wanted.to_string()))
    }
}

impl fmt::Display for StemmerLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No stemmer for language: {0}")]
pub struct UnknownLanguage(pub String);

/// Normalizes like [`super::SimplePreprocessor`] and stems every word with
/// the Snowball stemmer of the chosen language.
pub struct SnowballPreprocessor {
    language: StemmerLanguage,
    stemmer: Stemmer,
}

impl SnowballPreprocessor {
    pub fn new(language: StemmerLanguage) -> Self {
        SnowballPreprocessor {
            language,
            stemmer: Stemmer::create(language.algorithm()),
        }
    }

    pub fn set_language(&mut self, language: StemmerLanguage) {
        self.language = language;
        self.stemmer = Stemmer::create(language.algorithm());
    }

    pub fn stemmer_language(&self) -> StemmerLanguage {
        self.language
    }

    fn stem_words(&self, sentence: &str) -> String {
        let mut output = String::with_capacity(sentence.len() + 1);
        for word in sentence.split(' ') {
            if word == NUMERAL_TOKEN {
                output.push_str(word);
            } else {
                // Snowball stemmers only recognize lowercase suffixes.
                output.push_str(&self.stemmer.stem(&word.to_lowercase()));
            }
            output.push(' ');
        }
        output
    }
}

impl Default for SnowballPreprocessor {
    fn default() -> Self {
        Self::new(StemmerLanguage::default())
    }
}

impl fmt::Debug for SnowballPreprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballPreprocessor")
            .field("language", &self.language)
            .finish()
    }
}

impl PreProcessor for SnowballPreprocessor {
    fn process(&self, input: &str) -> String {
        let output = strip_punctuation(input);
        let output = replace_numerals(&output, NUMERAL_TOKEN);
        let output = self.stem_words(&output);
        output.trim().to_uppercase()
    }

    fn language(&self) -> &str {
        self.language.name()
    }
}
