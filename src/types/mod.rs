pub mod identifiers;
pub mod report;
pub mod scored;

pub use identifiers::DocumentId;
pub use report::{EvaluationReport, FoldOutcome, RunOutcome};
pub use scored::ScoredCandidate;
