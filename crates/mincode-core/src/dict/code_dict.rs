use std::collections::HashMap;

use super::{Dictionary, PrefixMatch};

/// In-memory word → codes map.
///
/// Prefix search walks the query one char at a time up to the longest word in
/// the dictionary, so lookups at a text position cost at most `max_word_chars`
/// hash probes.
#[derive(Debug, Clone, Default)]
pub struct CodeDictionary {
    words: HashMap<String, Vec<String>>,
    max_word_chars: usize,
}

impl CodeDictionary {
    /// Build a dictionary from `(word, codes)` pairs.
    ///
    /// Codes are deduplicated and sorted per word; empty words and empty codes
    /// are dropped, as are words left without any code.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        let mut words: HashMap<String, Vec<String>> = HashMap::new();
        for (word, codes) in entries {
            if word.is_empty() {
                continue;
            }
            words
                .entry(word)
                .or_default()
                .extend(codes.into_iter().filter(|c| !c.is_empty()));
        }
        words.retain(|_, codes| {
            codes.sort();
            codes.dedup();
            !codes.is_empty()
        });
        let max_word_chars = words.keys().map(|w| w.chars().count()).max().unwrap_or(0);
        Self {
            words,
            max_word_chars,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length in chars of the longest word.
    pub fn max_word_chars(&self) -> usize {
        self.max_word_chars
    }

    /// Returns (word_count, code_count).
    pub fn stats(&self) -> (usize, usize) {
        let codes = self.words.values().map(|v| v.len()).sum();
        (self.words.len(), codes)
    }
}

impl Dictionary for CodeDictionary {
    fn lookup(&self, word: &str) -> Option<&[String]> {
        self.words.get(word).map(|c| c.as_slice())
    }

    fn common_prefix_search(&self, query: &str) -> Vec<PrefixMatch<'_>> {
        let mut matches = Vec::new();
        for (len, (offset, ch)) in query
            .char_indices()
            .take(self.max_word_chars)
            .enumerate()
        {
            let end = offset + ch.len_utf8();
            if let Some((word, codes)) = self.words.get_key_value(&query[..end]) {
                matches.push(PrefixMatch {
                    len: len + 1,
                    word: word.as_str(),
                    codes: codes.as_slice(),
                });
            }
        }
        matches
    }
}
