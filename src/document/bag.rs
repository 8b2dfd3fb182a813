use crate::collections::HashSet;

/// An unordered multiset of tokens.
pub trait BagOfWords {
    /// Number of tokens in the bag, counting repeats.
    fn total_tokens(&self) -> usize;

    /// Occurrences of `token`, zero when absent.
    fn frequency(&self, token: &str) -> usize;

    fn unique_tokens(&self) -> HashSet<String>;

    fn contains_token(&self, token: &str) -> bool;
}
