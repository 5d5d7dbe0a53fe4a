//! Wildcard trie implementation.
//!
//! This module provides an in-memory word index supporting exact lookup,
//! prefix lookup, and single-character-wildcard lookup. A configured wildcard
//! character (default `*`) in a search term matches exactly one arbitrary
//! character at that position.
//!
//! Key properties:
//! * Words are inserted incrementally and never removed.
//! * Insertion is idempotent; repeated inserts change nothing observable.
//! * All three searches share one recursive walk that forks over every child
//!   whenever a wildcard is encountered, so the fan-out is bounded by the
//!   trie's branching factor at that node, not by the alphabet.
//!
//! # Example
//!
//! ```
//! use wildcard_trie_lib::trie::WildcardTrie;
//!
//! let mut trie = WildcardTrie::new();
//! trie.insert_all(["fund", "farm", "fun"]).unwrap();
//!
//! assert!(trie.is_word("f*nd"));
//! assert!(trie.is_prefix("fun"));
//!
//! let matches = trie.matching_words("****");
//! assert!(matches.contains("fund"));
//! assert!(matches.contains("farm"));
//! ```

mod error;
mod node;

use std::collections::{HashSet, VecDeque};
use std::fmt::{self, Display, Formatter};

pub use error::{InvalidWordError, TrieResult};
pub use node::TrieNode;

/// The wildcard character used when none is configured explicitly.
pub const DEFAULT_WILDCARD: char = '*';

/// Configuration options for the wildcard trie.
#[derive(Debug, Clone)]
pub struct WildcardTrieConfig {
    /// The character treated as a single-character wildcard in search terms.
    /// `None` disables wildcard matching entirely: every term character is
    /// matched literally and insertion only rejects empty words.
    pub wildcard: Option<char>,
}

impl Default for WildcardTrieConfig {
    fn default() -> Self {
        Self {
            wildcard: Some(DEFAULT_WILDCARD),
        }
    }
}

/// An in-memory word index with exact, prefix, and wildcard lookup.
///
/// The trie owns its root node and, transitively, the whole tree. Insertion
/// takes `&mut self` and searches take `&self`, so the borrow checker rules
/// out concurrent mutation; callers needing shared access must synchronize
/// externally.
#[derive(Debug, Default)]
pub struct WildcardTrie {
    /// The root node, representing the empty prefix.
    root: TrieNode,

    /// Configuration, immutable for the trie's lifetime.
    config: WildcardTrieConfig,
}

impl WildcardTrie {
    /// Creates a new empty trie with the default configuration (wildcard `*`).
    pub fn new() -> Self {
        Self::with_config(WildcardTrieConfig::default())
    }

    /// Creates a new empty trie with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: WildcardTrieConfig) -> Self {
        Self {
            root: TrieNode::root(),
            config,
        }
    }

    /// Creates a new empty trie using `wildcard` as the wildcard character.
    pub fn with_wildcard(wildcard: char) -> Self {
        Self::with_config(WildcardTrieConfig {
            wildcard: Some(wildcard),
        })
    }

    /// The configured wildcard character, if any.
    pub fn wildcard(&self) -> Option<char> {
        self.config.wildcard
    }

    /// Inserts a word into the trie.
    ///
    /// Walks the node path for the word from the root, creating children on
    /// demand, and marks the final node terminal. Inserting the same word
    /// again is a no-op.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert. Must be non-empty and may not contain
    ///   the configured wildcard character.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidWordError`] if the word is empty or contains the
    /// wildcard character. A failed insert leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) -> TrieResult<()> {
        if word.is_empty() {
            return Err(InvalidWordError::Empty);
        }

        if let Some(wildcard) = self.config.wildcard {
            if word.contains(wildcard) {
                return Err(InvalidWordError::ContainsWildcard {
                    word: word.to_string(),
                    wildcard,
                });
            }
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_insert_with(|| TrieNode::new(c));
        }
        node.is_terminal = true;

        Ok(())
    }

    /// Inserts every word from an iterator into the trie.
    ///
    /// An empty iterator is a no-op. Batch insertion is fail-fast: the first
    /// invalid word aborts the batch with its error, and words inserted
    /// earlier in the batch remain in place.
    ///
    /// # Errors
    ///
    /// Returns the [`InvalidWordError`] of the first word that cannot be
    /// inserted.
    pub fn insert_all<I, S>(&mut self, words: I) -> TrieResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref())?;
        }
        Ok(())
    }

    /// Checks whether the term resolves to a strict prefix of a stored word.
    ///
    /// Returns `true` iff at least one resolution of the term (expanding each
    /// wildcard to some concrete character) lands on a node with at least one
    /// child. A resolved string that is a complete word with no extensions
    /// does not count; one that is both a complete word and a strict prefix
    /// of a longer word does.
    ///
    /// An empty term is not a prefix.
    pub fn is_prefix(&self, term: &str) -> bool {
        let mut found = false;
        self.walk_term(term, &mut |node, _| {
            if node.has_children() {
                found = true;
            }
        });
        found
    }

    /// Checks whether the term resolves to at least one stored word.
    ///
    /// Returns `true` iff some resolution of the term lands on a terminal
    /// node. An empty term is not a word.
    pub fn is_word(&self, term: &str) -> bool {
        let mut found = false;
        self.walk_term(term, &mut |node, _| {
            if node.is_terminal {
                found = true;
            }
        });
        found
    }

    /// Gets the set of stored words that match the term.
    ///
    /// Every returned word is produced by substituting each wildcard
    /// occurrence with some single character and following the literal
    /// characters exactly; the emitted strings are the resolved paths, never
    /// the raw term. The result is empty for an empty term or an empty trie.
    pub fn matching_words(&self, term: &str) -> HashSet<String> {
        let mut matches = HashSet::new();
        self.walk_term(term, &mut |node, path| {
            if node.is_terminal {
                matches.insert(path.to_string());
            }
        });
        matches
    }

    /// The number of words stored in the trie.
    ///
    /// Counts terminal nodes, so this is an O(n) traversal of the tree.
    pub fn word_count(&self) -> usize {
        Self::count_terminals(&self.root)
    }

    /// Whether the trie contains no words.
    pub fn is_empty(&self) -> bool {
        !self.root.is_terminal && self.root.children.is_empty()
    }

    /// Renders a diagnostic string form of the trie.
    ///
    /// Performs a breadth-first, level-order traversal from the root and
    /// concatenates each node's rendering (symbol plus child symbols). No
    /// ordering guarantee exists among nodes of the same level or among
    /// children of the same node.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut queue = VecDeque::new();

        queue.push_back(&self.root);
        while let Some(node) = queue.pop_front() {
            out.push_str(&node.to_string());
            queue.extend(node.children.values());
        }

        out
    }

    /// Walks the trie for a term, invoking `visit` with every reached node
    /// and the resolved path of characters consumed to reach it.
    ///
    /// This is the single descent shared by [`is_prefix`](Self::is_prefix),
    /// [`is_word`](Self::is_word), and
    /// [`matching_words`](Self::matching_words). An empty term visits
    /// nothing.
    fn walk_term(&self, term: &str, visit: &mut dyn FnMut(&TrieNode, &str)) {
        if term.is_empty() {
            return;
        }
        let term: Vec<char> = term.chars().collect();
        let mut path = String::with_capacity(term.len());
        self.walk(&self.root, &term, 0, &mut path, visit);
    }

    /// Recursive step of the shared walk.
    ///
    /// A literal character follows the single matching child or ends the
    /// branch; a wildcard forks into one continuation per existing child.
    /// Recursion depth is bounded by the term length.
    fn walk(
        &self,
        node: &TrieNode,
        term: &[char],
        depth: usize,
        path: &mut String,
        visit: &mut dyn FnMut(&TrieNode, &str),
    ) {
        // Base case: the term is exhausted and `node` is a result of the walk.
        if depth == term.len() {
            visit(node, path);
            return;
        }

        let current = term[depth];

        if self.config.wildcard != Some(current) {
            if let Some(child) = node.children.get(&current) {
                path.push(current);
                self.walk(child, term, depth + 1, path, visit);
                path.pop();
            }
            return;
        }

        // Wildcard: fork into every existing child and union the results.
        for (&key, child) in &node.children {
            path.push(key);
            self.walk(child, term, depth + 1, path, visit);
            path.pop();
        }
    }

    fn count_terminals(node: &TrieNode) -> usize {
        let mut count = usize::from(node.is_terminal);
        for child in node.children.values() {
            count += Self::count_terminals(child);
        }
        count
    }
}

impl Display for WildcardTrie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
