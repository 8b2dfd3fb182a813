use std::fs;
use std::rc::Rc;

use chrono::NaiveDate;
use nllr_core::document::{Corpus, Document};
use nllr_core::partition::{SpanLength, TimeSpan};
use nllr_core::preprocess::PreprocessorKind;
use nllr_core::validation::{evaluate_fold, EvaluationConfig, EvaluationError, Evaluator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use tempfile::tempdir;

const WINTER: &str = "talvi lumi pakkanen";
const SUMMER: &str = "kesä aurinko uimaranta";

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_doc(date: NaiveDate, body: &str) -> Rc<Document> {
    Rc::new(Document::dated(date, body))
}

/// Six winter and six summer documents, one summer-dated document written
/// in winter words, and one undated document.
fn seasons() -> Corpus {
    let mut documents = Vec::new();
    for _ in 0..6 {
        documents.push(make_doc(day(2014, 1, 15), WINTER));
        documents.push(make_doc(day(2014, 7, 15), SUMMER));
    }
    documents.push(make_doc(day(2014, 7, 15), WINTER));
    documents.push(Rc::new(Document::undated(SUMMER)));
    Corpus::from_documents(documents)
}

fn monthly_config() -> EvaluationConfig {
    EvaluationConfig {
        folds: 3,
        repetitions: 2,
        span: SpanLength::Monthly,
        seed: 7,
        ..EvaluationConfig::v0()
    }
}

#[test]
fn golden_cross_validation_counts() {
    let corpus = seasons();
    let report = Evaluator::new(monthly_config()).run_seeded(&corpus).unwrap();

    assert_eq!(report.corpus_documents, 14);
    assert_eq!(report.runs.len(), 2);
    for (round, run) in report.runs.iter().enumerate() {
        assert_eq!(run.round, round);
        assert_eq!(run.folds.len(), 3);
        assert_eq!((run.correct, run.wrong, run.other), (12, 1, 1));

        let tested: usize = run.folds.iter().map(|fold| fold.test_documents).sum();
        assert_eq!(tested, 14);
        for fold in &run.folds {
            assert_eq!(fold.test_documents + fold.training_documents, 14);
            assert_eq!(fold.partitions, 2);
        }
        assert!((run.accuracy().unwrap() - 12.0 / 13.0).abs() < 1e-8);
    }
    assert!((report.mean_accuracy().unwrap() - 12.0 / 13.0).abs() < 1e-8);
}

#[test]
fn invariant_seeded_runs_are_reproducible() {
    let corpus = seasons();
    let evaluator = Evaluator::new(monthly_config());

    let first = evaluator.run_seeded(&corpus).unwrap();
    let second = evaluator.run_seeded(&corpus).unwrap();
    assert_eq!(first.runs, second.runs);

    let mut rng = ChaCha8Rng::seed_from_u64(monthly_config().seed);
    let explicit = evaluator.run(&corpus, &mut rng).unwrap();
    assert_eq!(first.runs, explicit.runs);
}

#[test]
fn golden_report_json_structure() {
    let corpus = seasons();
    let report = Evaluator::new(monthly_config()).run_seeded(&corpus).unwrap();
    let json: Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["config"]["folds"], 3);
    assert_eq!(json["config"]["span"], "monthly");
    assert_eq!(json["config"]["preprocessor"], "snowball");
    assert_eq!(json["config"]["language"], "Finnish");
    assert_eq!(json["corpus_documents"], 14);
    assert!(json["created_at"].is_string());

    let fold = &json["runs"][0]["folds"][0];
    for key in ["test_documents", "training_documents", "partitions", "correct", "wrong", "other"] {
        assert!(fold[key].is_u64(), "fold field {key} missing");
    }
}

#[test]
fn invariant_untrainable_fold_is_unjudged() {
    let test = Corpus::from_documents(vec![make_doc(day(2014, 1, 15), WINTER)]);
    let training = Corpus::from_documents(vec![Rc::new(Document::undated(WINTER))]);
    let first = TimeSpan::aligned(day(2014, 1, 1), SpanLength::Monthly).unwrap();

    let outcome = evaluate_fold(&test, &training, first).unwrap();
    assert_eq!(outcome.partitions, 0);
    assert_eq!((outcome.correct, outcome.wrong, outcome.other), (0, 0, 1));
    assert_eq!(outcome.accuracy(), None);
}

#[test]
fn invariant_undated_corpus_is_rejected() {
    let corpus = Corpus::from_documents(vec![Rc::new(Document::undated(WINTER))]);
    let result = Evaluator::default().run_seeded(&corpus);
    assert!(matches!(result, Err(EvaluationError::UndatedCorpus)));
}

#[test]
fn invariant_zero_folds_surface_as_split_error() {
    let config = EvaluationConfig {
        folds: 0,
        ..monthly_config()
    };
    let result = Evaluator::new(config).run_seeded(&seasons());
    assert!(matches!(result, Err(EvaluationError::Split(_))));
}

#[test]
fn golden_evaluation_from_record_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("seasons.csv");

    let mut records = String::new();
    for i in 0..6 {
        records.push_str(&format!("w{i};15-Jan-2014;Talvi, lumi ja pakkanen!\n"));
        records.push_str(&format!("s{i};15-Jul-2014;Kesä; aurinko ja uimaranta.\n"));
    }
    records.push_str("odd;15-Jul-2014;Talvi, lumi ja pakkanen!\n");
    records.push_str("this line is not a record\n");
    fs::write(&path, records).unwrap();

    let config = EvaluationConfig::from_json(
        r#"{ "folds": 3, "span": "monthly", "seed": 11, "preprocessor": "simple" }"#,
    )
    .unwrap();
    assert_eq!(config.preprocessor, PreprocessorKind::Simple);
    assert_eq!(config.repetitions, 1);

    let corpus = config.read_corpus(&path).unwrap();
    assert_eq!(corpus.len(), 13);

    let report = Evaluator::new(config).run_seeded(&corpus).unwrap();
    let run = &report.runs[0];
    assert_eq!((run.correct, run.wrong, run.other), (12, 1, 0));
}
