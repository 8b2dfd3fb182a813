pub mod bag;
pub mod corpus;
pub mod document;
pub mod parser;

pub use crate::types::identifiers::DocumentId;
pub use bag::BagOfWords;
pub use corpus::Corpus;
pub use document::Document;
pub use parser::{parse_record, read_corpus, ParseError};
