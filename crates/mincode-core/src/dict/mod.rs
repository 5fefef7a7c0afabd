//! Word-to-code dictionaries.
//!
//! `CodeDictionary` maps each word to its set of candidate codes. The loader
//! parses tab-separated dictionary files and resolves code collisions before
//! the encoder ever sees them.

mod code_dict;
mod loader;
#[cfg(test)]
mod tests;

pub use code_dict::CodeDictionary;
pub use loader::{load_dict, load_text, parse_dict, LoadStats};

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("dictionary is empty")]
    Empty,
}

/// A dictionary word found at the start of a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatch<'a> {
    /// Length of the matched word in chars.
    pub len: usize,
    pub word: &'a str,
    pub codes: &'a [String],
}

pub trait Dictionary: Send + Sync {
    /// Codes for an exact word.
    fn lookup(&self, word: &str) -> Option<&[String]>;

    /// Every word that is a prefix of `query`, shortest first.
    fn common_prefix_search(&self, query: &str) -> Vec<PrefixMatch<'_>>;
}
