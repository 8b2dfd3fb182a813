use std::sync::OnceLock;

use regex::Regex;

static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
static DIGITS: OnceLock<Regex> = OnceLock::new();

fn punctuation() -> &'static Regex {
    PUNCTUATION.get_or_init(|| Regex::new(r"[[:punct:]]+").expect("valid regex"))
}

fn digits() -> &'static Regex {
    DIGITS.get_or_init(|| Regex::new(r"[[:digit:]]+").expect("valid regex"))
}

/// Delete every run of ASCII punctuation.
pub fn strip_punctuation(input: &str) -> String {
    punctuation().replace_all(input, "").into_owned()
}

/// Replace every run of ASCII digits with `replacement`.
pub fn replace_numerals(input: &str, replacement: &str) -> String {
    digits().replace_all(input, replacement).into_owned()
}
