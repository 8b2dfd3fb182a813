//! Dating text documents by their vocabulary.
//!
//! `nllr-core` slices a dated reference corpus into consecutive calendar
//! windows and estimates when a query document was written by picking the
//! window whose word statistics explain it best, scored with a normalized
//! log-likelihood ratio over the query's most discriminative tokens.
//! Preprocessing, record ingestion, and a seeded k-fold cross-validation
//! harness are included. Given the same seed, evaluations are reproducible.

pub mod collections;
pub mod dating;
pub mod document;
pub mod partition;
pub mod preprocess;
pub mod selection;
pub mod types;
pub mod validation;
