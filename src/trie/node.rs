//! Node implementation for the wildcard trie.
//!
//! Nodes are the fundamental building blocks of the trie: each one represents
//! a single character along a path from the root, owns its children outright,
//! and carries a terminal flag marking the end of a stored word.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

/// A node in the wildcard trie.
///
/// The root is the only node with `symbol == None`; it stands for the empty
/// prefix. Every other node represents exactly one character. A terminal node
/// may still have children, since a stored word may be a strict prefix of
/// another stored word.
#[derive(Debug)]
pub struct TrieNode {
    /// The character this node represents; `None` exactly for the root.
    pub symbol: Option<char>,

    /// Whether the path from the root to this node spells a complete word.
    pub is_terminal: bool,

    /// Map of characters to child nodes. A character maps to at most one
    /// child under the same parent.
    pub children: HashMap<char, TrieNode>,
}

impl TrieNode {
    /// Creates the root node: no symbol, no children.
    pub fn root() -> Self {
        Self {
            symbol: None,
            is_terminal: false,
            children: HashMap::new(),
        }
    }

    /// Creates an empty node representing the given character.
    pub fn new(symbol: char) -> Self {
        Self {
            symbol: Some(symbol),
            is_terminal: false,
            children: HashMap::new(),
        }
    }

    /// Whether this node has at least one child, i.e. whether its path is a
    /// strict prefix of some stored word.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::root()
    }
}

impl Display for TrieNode {
    /// Renders the node as its symbol followed by its children's symbols,
    /// e.g. `[f -> u a]`. Child order is unspecified.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        match self.symbol {
            Some(symbol) => write!(f, "{symbol}")?,
            None => write!(f, "_")?,
        }
        write!(f, " ->")?;
        for key in self.children.keys() {
            write!(f, " {key}")?;
        }
        write!(f, "]")
    }
}
