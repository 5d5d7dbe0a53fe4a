//! Integration tests for the wildcard trie.
//!
//! Exercises the public library surface end to end: building an index from a
//! dictionary file on disk and running the three search operations against it.

use std::collections::HashSet;
use std::io::Write;

use wildcard_trie_lib::dictionary;
use wildcard_trie_lib::trie::{InvalidWordError, WildcardTrie};

const WORDS: [&str; 8] = [
    "fun",
    "fund",
    "funds",
    "funding",
    "farm",
    "tunafish",
    "crowdfunding",
    "fun farm",
];

#[test]
fn test_trie_built_from_dictionary_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for word in WORDS {
        writeln!(file, "{word}").unwrap();
    }
    file.flush().unwrap();

    let mut trie = WildcardTrie::new();
    let inserted = dictionary::load_into(&mut trie, file.path()).unwrap();

    assert_eq!(inserted, WORDS.len());
    assert_eq!(trie.word_count(), WORDS.len());

    // Exact, prefix, and wildcard lookups against the loaded file.
    assert!(trie.is_word("crowdfunding"));
    assert!(trie.is_prefix("crowd"));
    assert_eq!(
        trie.matching_words("****"),
        HashSet::from(["fund".to_string(), "farm".to_string()])
    );
}

#[test]
fn test_dictionary_with_malformed_lines_still_loads() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "fun").unwrap();
    writeln!(file).unwrap(); // blank line
    writeln!(file, "wild*card").unwrap(); // contains the wildcard
    writeln!(file, "farm").unwrap();
    file.flush().unwrap();

    let mut trie = WildcardTrie::new();
    let inserted = dictionary::load_into(&mut trie, file.path()).unwrap();

    assert_eq!(inserted, 2);
    assert!(trie.is_word("fun"));
    assert!(trie.is_word("farm"));
    assert!(!trie.is_word("wild*card"));
}

#[test]
fn test_search_term_wildcards_fan_out_over_branches() {
    let mut trie = WildcardTrie::new();
    trie.insert_all(WORDS).unwrap();

    // "fun*" forks over the children of "fun": 'd' (fund) and ' ' (fun farm
    // path), but only "fund" is terminal at length four.
    assert_eq!(
        trie.matching_words("fun*"),
        HashSet::from(["fund".to_string()])
    );

    // Every word is reachable through an all-wildcard term of its length.
    for word in WORDS {
        let term = "*".repeat(word.chars().count());
        assert!(
            trie.matching_words(&term).contains(word),
            "all-wildcard term failed to reach {word}"
        );
    }
}

#[test]
fn test_insert_contract_is_enforced_at_the_surface() {
    let mut trie = WildcardTrie::new();

    assert!(matches!(trie.insert(""), Err(InvalidWordError::Empty)));
    assert!(matches!(
        trie.insert("**"),
        Err(InvalidWordError::ContainsWildcard { .. })
    ));
    assert!(trie.is_empty());

    // A failed batch keeps its earlier words.
    let result = trie.insert_all(["ham", "sand*wich"]);
    assert!(result.is_err());
    assert!(trie.is_word("ham"));
    assert_eq!(trie.word_count(), 1);
}

#[test]
fn test_display_renders_level_order_diagnostics() {
    let mut trie = WildcardTrie::new();
    trie.insert_all(["tuna", "tune"]).unwrap();

    let rendered = trie.to_string();

    // The shared prefix appears once per node, the branch point lists both
    // continuations.
    for c in ['t', 'u', 'n', 'a', 'e'] {
        assert!(rendered.contains(c));
    }
    assert!(rendered.starts_with("[_ ->"));
}
