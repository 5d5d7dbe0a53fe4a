//! Wildcard Trie - Main entrypoint.
//!
//! This is the command-line driver for the wildcard word index. It
//! initializes the logging system, loads a line-oriented dictionary file into
//! the trie, runs a single search term against it, and prints the matching
//! words.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;

use wildcard_trie_lib::dictionary;
use wildcard_trie_lib::error::{WordIndexError, WordIndexResult};
use wildcard_trie_lib::trie::{WildcardTrie, WildcardTrieConfig};

/// Command line arguments for the wildcard trie driver.
#[derive(Parser, Debug)]
#[clap(name = "wildcard_trie", version, author, about)]
struct Args {
    /// Path to a line-oriented dictionary file (one word per line)
    dictionary: PathBuf,

    /// Search term; may contain the wildcard character, each occurrence
    /// matching exactly one arbitrary character
    term: String,

    /// Wildcard character to use in search terms
    #[clap(short, long, default_value_t = wildcard_trie_lib::trie::DEFAULT_WILDCARD)]
    wildcard: char,

    /// Disable wildcard matching entirely; every term character is literal
    #[clap(long, conflicts_with = "wildcard")]
    no_wildcard: bool,
}

/// Initialize the logging system.
fn init_logging() -> WordIndexResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| WordIndexError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> WordIndexResult<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    let args = Args::parse();

    let config = WildcardTrieConfig {
        wildcard: if args.no_wildcard {
            None
        } else {
            Some(args.wildcard)
        },
    };
    let mut trie = WildcardTrie::with_config(config);

    let inserted = match dictionary::load_into(&mut trie, &args.dictionary) {
        Ok(inserted) => inserted,
        Err(e) => {
            tracing::error!("Failed to load dictionary {:?}: {}", args.dictionary, e);
            process::exit(1);
        }
    };
    info!(
        "Loaded {} words from {:?}",
        inserted, args.dictionary
    );

    let matches = trie.matching_words(&args.term);
    let mut matches: Vec<String> = matches.into_iter().collect();
    matches.sort();

    println!(
        "{} words match {} in provided dict:\n{}",
        matches.len(),
        args.term,
        matches.join("\n")
    );

    Ok(())
}
