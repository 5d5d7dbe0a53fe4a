//! Test utilities and fixtures for the wildcard trie crate.
//!
//! This module provides reusable fixtures and proptest strategies shared by
//! the unit and property-based tests.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};

use crate::trie::WildcardTrie;

/// Maximum word length for generated test data.
const MAX_WORD_LENGTH: usize = 12;

/// The reference vocabulary used by the scenario tests.
///
/// Chosen so that words are prefixes of other words ("fun" < "fund" <
/// "funds"), a word exists that is not a prefix of anything ("tunafish"),
/// and one entry contains a space ("fun farm").
pub const TEST_WORDS: [&str; 8] = [
    "fun",
    "fund",
    "funds",
    "funding",
    "farm",
    "tunafish",
    "crowdfunding",
    "fun farm",
];

/// Creates a trie loaded with the reference vocabulary.
pub fn populated_trie() -> WildcardTrie {
    let mut trie = WildcardTrie::new();
    trie.insert_all(TEST_WORDS).expect("reference vocabulary is valid");
    trie
}

/// Generate a strategy for lowercase ASCII words valid for insertion.
pub fn word_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(proptest::char::range('a', 'z'), 1..=MAX_WORD_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate a strategy for small non-empty vocabularies of valid words.
pub fn vocabulary_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::hash_set(word_strategy(), 1..20)
        .prop_map(|words| words.into_iter().collect())
        .boxed()
}

/// Masks the given positions of a word with the wildcard character.
pub fn mask_positions(word: &str, positions: &[usize], wildcard: char) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| if positions.contains(&i) { wildcard } else { c })
        .collect()
}
