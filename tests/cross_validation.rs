use std::collections::HashSet;
use std::rc::Rc;

use chrono::{Days, NaiveDate};
use nllr_core::document::{BagOfWords, Corpus, Document};
use nllr_core::validation::{CrossValidationSplitter, SplitError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn make_corpus(n: u64) -> Corpus {
    let base = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
    (0..n)
        .map(|i| Rc::new(Document::dated(base + Days::new(i), &format!("doc {i}"))))
        .collect()
}

fn pointers(corpus: &Corpus) -> Vec<*const Document> {
    corpus.iter().map(Rc::as_ptr).collect()
}

fn assert_partition_of(folds: &[Corpus], corpus: &Corpus) {
    let total: usize = folds.iter().map(Corpus::len).sum();
    assert_eq!(total, corpus.len());

    let mut seen = HashSet::new();
    for fold in folds {
        for document in pointers(fold) {
            assert!(seen.insert(document), "document appears in two folds");
        }
    }
    let expected: HashSet<_> = pointers(corpus).into_iter().collect();
    assert_eq!(seen, expected);

    let min = folds.iter().map(Corpus::len).min().unwrap();
    let max = folds.iter().map(Corpus::len).max().unwrap();
    assert!(max - min <= 1);
}

#[test]
fn golden_twenty_into_ten() {
    let corpus = make_corpus(20);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let folds = CrossValidationSplitter::split(&corpus, 10, &mut rng).unwrap();

    assert_eq!(folds.len(), 10);
    assert!(folds.iter().all(|fold| fold.len() == 2));
    assert_partition_of(&folds, &corpus);
}

#[test]
fn golden_twenty_five_into_ten() {
    let corpus = make_corpus(25);
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let folds = CrossValidationSplitter::split(&corpus, 10, &mut rng).unwrap();

    let sizes: Vec<usize> = folds.iter().map(Corpus::len).collect();
    assert_eq!(sizes, vec![3, 3, 3, 3, 3, 2, 2, 2, 2, 2]);
    assert_partition_of(&folds, &corpus);
}

#[test]
fn golden_more_folds_than_documents() {
    let corpus = make_corpus(5);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let folds = CrossValidationSplitter::split(&corpus, 10, &mut rng).unwrap();

    assert_eq!(folds.len(), 10);
    assert!(folds.iter().all(|fold| fold.len() <= 1));
    assert_partition_of(&folds, &corpus);
}

#[test]
fn invariant_zero_folds_rejected() {
    let corpus = make_corpus(3);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        CrossValidationSplitter::split(&corpus, 0, &mut rng).unwrap_err(),
        SplitError::ZeroFolds
    );
}

#[test]
fn invariant_same_seed_same_folds() {
    let corpus = make_corpus(30);
    let first = CrossValidationSplitter::split(&corpus, 4, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
    let second = CrossValidationSplitter::split(&corpus, 4, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();

    let first: Vec<_> = first.iter().map(pointers).collect();
    let second: Vec<_> = second.iter().map(pointers).collect();
    assert_eq!(first, second);
}

#[test]
fn invariant_input_order_untouched_and_folds_refreshed() {
    let corpus = make_corpus(12);
    let before = pointers(&corpus);
    let folds = CrossValidationSplitter::split(&corpus, 3, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();

    assert_eq!(pointers(&corpus), before);
    for fold in &folds {
        assert_eq!(fold.len(), 4);
        assert!(fold.start_date().is_some());
        assert_eq!(fold.total_tokens(), 8);
    }
}

#[test]
fn invariant_training_corpus_excludes_by_identity() {
    // Two folds with identical content must still be told apart.
    let shared = Rc::new(Document::undated("same"));
    let folds = vec![
        Corpus::from_documents(vec![Rc::clone(&shared)]),
        Corpus::from_documents(vec![Rc::clone(&shared)]),
        Corpus::from_documents(vec![Rc::new(Document::undated("other"))]),
    ];

    let training = CrossValidationSplitter::build_training_corpus(&folds, &folds[0]);
    assert_eq!(training.len(), 2);
    assert!(Rc::ptr_eq(training.get(0).unwrap(), &shared));

    let outsider = Corpus::from_documents(vec![Rc::clone(&shared)]);
    let everything = CrossValidationSplitter::build_training_corpus(&folds, &outsider);
    assert_eq!(everything.len(), 3);
}
