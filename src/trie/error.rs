//! Error types for the wildcard trie.
//!
//! This module defines the errors that can occur during trie insertion.
//! Lookups never fail; an unmatched term is an empty result, not an error.

/// Result type for wildcard trie operations.
pub type TrieResult<T> = Result<T, InvalidWordError>;

/// Errors raised when a word cannot be inserted into the trie.
///
/// An invalid word is fatal to that single insertion only; the trie is never
/// left in a corrupted state.
#[derive(Debug, thiserror::Error)]
pub enum InvalidWordError {
    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    Empty,

    /// Error when a word contains the configured wildcard character.
    #[error("Word '{word}' contains the wildcard character '{wildcard}'")]
    ContainsWildcard {
        /// The offending word.
        word: String,
        /// The configured wildcard character.
        wildcard: char,
    },
}
