//! Wildcard Trie Library
//!
//! This library contains the core components of the wildcard word index:
//! the trie itself, the dictionary-file collaborator that feeds it, and the
//! crate-level error surface. The library is designed to be used by the
//! binary crate, but can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! The crate is designed with the following principles in mind:
//! - One owner: the trie exclusively owns its node tree, so `&mut self`
//!   insertion and `&self` search rule out concurrent mutation at compile
//!   time
//! - Comprehensive error handling and propagation
//! - One shared walking algorithm behind every search operation

// Re-export public modules
pub mod dictionary;
pub mod error;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the wildcard trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
