//! Error module for the wildcard trie crate.
//!
//! This module provides the crate-level error surface, following Rust's
//! idiomatic error handling patterns with explicit error types and proper
//! error propagation. Component-specific errors live next to their
//! components and are wrapped here for callers that cross component
//! boundaries (the dictionary loader and the binary).

use thiserror::Error;

use crate::trie::InvalidWordError;

/// Result type alias used at the crate surface.
pub type WordIndexResult<T> = Result<T, WordIndexError>;

/// Core error enum for the wildcard trie crate.
#[derive(Error, Debug)]
pub enum WordIndexError {
    /// Errors raised by trie insertion.
    #[error("Trie error: {0}")]
    Trie(#[from] InvalidWordError),

    /// IO errors that may occur while reading a dictionary file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are
    /// not defined.
    #[error("{0}")]
    Custom(String),
}
