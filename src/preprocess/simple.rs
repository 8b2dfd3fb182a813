use super::normalize::{replace_numerals, strip_punctuation};
use super::{PreProcessor, NUMERAL_TOKEN};

/// Language-independent fallback: no stemming.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePreprocessor;

impl PreProcessor for SimplePreprocessor {
    fn process(&self, input: &str) -> String {
        let output = strip_punctuation(input);
        let output = replace_numerals(&output, NUMERAL_TOKEN);
        output.trim().to_uppercase()
    }

    fn language(&self) -> &str {
        "language independent"
    }
}
