//! Line-oriented dictionary loading.
//!
//! A dictionary file supplies one candidate word per line (the UNIX words
//! file format). The loader feeds each line to the trie through its `insert`
//! contract; lines the trie rejects are skipped with a warning rather than
//! aborting the load, so one malformed line cannot spoil a vocabulary.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::WordIndexResult;
use crate::trie::WildcardTrie;

/// Loads the words from a line-oriented dictionary file into the trie.
///
/// # Arguments
///
/// * `trie` - The trie to load words into.
/// * `path` - Path to the dictionary file.
///
/// # Returns
///
/// The number of words inserted. Lines that violate the trie's insertion
/// contract (empty lines, lines containing the wildcard character) are
/// skipped and logged.
///
/// # Errors
///
/// Returns [`WordIndexError::Io`](crate::error::WordIndexError::Io) if the
/// file cannot be opened or read.
pub fn load_into<P: AsRef<Path>>(trie: &mut WildcardTrie, path: P) -> WordIndexResult<usize> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut inserted = 0;
    for line in reader.lines() {
        let word = line?;
        match trie.insert(&word) {
            Ok(()) => inserted += 1,
            Err(e) => warn!(word = %word, error = %e, "Skipping dictionary line"),
        }
    }

    debug!(path = %path.display(), inserted, "Dictionary loaded");
    Ok(inserted)
}
