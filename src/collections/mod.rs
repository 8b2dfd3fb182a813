//! Owning containers the statistics layer is built on.
//!
//! All three containers count structural modifications in a generation
//! counter. Their cursors capture that counter and fail fast when it moves
//! under them.

pub mod dynamic_array;
pub mod hash_table;
pub mod hash_set;

use thiserror::Error;

pub use dynamic_array::{Cursor, DynamicArray};
pub use hash_set::{HashSet, SetCursor};
pub use hash_table::{spread, HashTable, KeyCursor};

/// Structural modification counter.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Container modified during iteration (expected generation {expected}, found {found})")]
    ConcurrentModification { expected: Generation, found: Generation },

    #[error("Cursor has no current element to remove")]
    NoCurrentElement,
}
