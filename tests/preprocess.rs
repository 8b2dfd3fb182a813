use nllr_core::preprocess::{
    PreProcessor, PreprocessorKind, SimplePreprocessor, SnowballPreprocessor, StemmerLanguage,
    NUMERAL_TOKEN,
};

#[test]
fn golden_simple_normalization() {
    let processed = SimplePreprocessor.process("  Hello, world! It's 2014-02-19.  ");
    assert_eq!(processed, "HELLO WORLD ITS NUMERAL");
}

#[test]
fn invariant_digit_runs_become_one_token() {
    let processed = SimplePreprocessor.process("a 12345 b 6");
    assert_eq!(processed, format!("A {NUMERAL_TOKEN} B {NUMERAL_TOKEN}"));
}

#[test]
fn golden_english_stemming() {
    let preprocessor = SnowballPreprocessor::new(StemmerLanguage::English);
    assert_eq!(preprocessor.process("Running cats, 42 jumps!"), "RUN CAT NUMERAL JUMP");
    assert_eq!(preprocessor.language(), "English");
}

#[test]
fn invariant_stemming_is_deterministic() {
    let preprocessor = SnowballPreprocessor::new(StemmerLanguage::Finnish);
    let first = preprocessor.process("Autot ajoivat kaduilla.");
    let second = preprocessor.process("Autot ajoivat kaduilla.");
    assert_eq!(first, second);
    assert_eq!(first, first.to_uppercase());
    assert_eq!(first.split(' ').count(), 3);
}

#[test]
fn set_language_switches_stemmer() {
    let mut preprocessor = SnowballPreprocessor::default();
    assert_eq!(preprocessor.stemmer_language(), StemmerLanguage::English);

    preprocessor.set_language(StemmerLanguage::Finnish);
    assert_eq!(preprocessor.stemmer_language(), StemmerLanguage::Finnish);
    assert_eq!(preprocessor.language(), "Finnish");
}

#[test]
fn language_names_resolve_case_insensitively() {
    assert_eq!("finnish".parse::<StemmerLanguage>(), Ok(StemmerLanguage::Finnish));
    assert_eq!(" GERMAN ".parse::<StemmerLanguage>(), Ok(StemmerLanguage::German));
    assert!("klingon".parse::<StemmerLanguage>().is_err());

    assert_eq!(StemmerLanguage::from_name_or_default("Swedish"), StemmerLanguage::Swedish);
    assert_eq!(StemmerLanguage::from_name_or_default("klingon"), StemmerLanguage::English);

    for language in StemmerLanguage::ALL {
        assert_eq!(language.name().parse::<StemmerLanguage>(), Ok(language));
    }
}

#[test]
fn preprocessor_kinds_build_boxed_preprocessors() {
    let simple = PreprocessorKind::Simple.build(StemmerLanguage::Finnish);
    assert_eq!(simple.language(), "language independent");

    let snowball: PreprocessorKind = "Snowball".parse().unwrap();
    assert_eq!(snowball, PreprocessorKind::Snowball);
    assert_eq!(snowball.to_string(), "snowball");
    let built = snowball.build(StemmerLanguage::English);
    assert_eq!(built.process("cats"), "CAT");

    assert!("porter".parse::<PreprocessorKind>().is_err());
}
