use std::collections::BTreeSet;

use tracing::{debug, debug_span};

use super::join::{join, JoinMode};
use super::lattice::Lattice;

/// Accumulated codes ending at one text position.
///
/// Only codes of the smallest key count seen so far are kept. A join adds at
/// most one key more to one head than to another, so a longer prefix never
/// leads to a shorter total.
#[derive(Debug, Default)]
struct Bucket {
    keys: usize,
    codes: BTreeSet<String>,
}

impl Bucket {
    fn insert(&mut self, code: String, keys: usize) {
        if self.codes.is_empty() || keys < self.keys {
            self.codes.clear();
            self.keys = keys;
            self.codes.insert(code);
        } else if keys == self.keys {
            self.codes.insert(code);
        }
    }
}

/// Find every minimal-length encoding of the lattice's text.
///
/// Sweeps positions left to right, extending the shortest prefixes at each
/// position by every edge leaving it. When more than `breadth_limit` prefixes
/// tie at a position, only the lexicographically first `breadth_limit` are
/// extended, so the returned set can be incomplete (never longer) once the
/// number of ties exceeds the limit. A limit of 0 behaves like 1.
///
/// An empty text has exactly one encoding, the empty string.
pub fn search_shortest(
    lattice: &Lattice,
    mode: JoinMode,
    breadth_limit: usize,
) -> BTreeSet<String> {
    let char_count = lattice.char_count;
    let limit = breadth_limit.max(1);
    let _span = debug_span!("search_shortest", char_count, limit, %mode).entered();

    // buckets[i] = shortest codes covering the first i chars
    let mut buckets: Vec<Bucket> = Vec::with_capacity(char_count + 1);
    buckets.resize_with(char_count + 1, Bucket::default);
    buckets[0].insert(String::new(), 0);

    let mut pruned = 0usize;
    for pos in 0..char_count {
        let bucket = std::mem::take(&mut buckets[pos]);
        if bucket.codes.is_empty() {
            // Only reachable from inside a multi-char edge.
            continue;
        }
        pruned += bucket.codes.len().saturating_sub(limit);

        for edge in lattice.edges_at(pos) {
            let edge_keys = edge.code.chars().count();
            let target = &mut buckets[edge.end()];
            for head in bucket.codes.iter().take(limit) {
                let joined = join(mode, head, &edge.code);
                // Joins only add or drop ASCII spaces, so the byte delta is the key delta.
                let keys = bucket.keys + edge_keys + joined.len() - head.len() - edge.code.len();
                target.insert(joined, keys);
            }
        }
    }

    let last = std::mem::take(&mut buckets[char_count]);
    let min_len = last.codes.iter().map(|c| c.chars().count()).min();
    let result: BTreeSet<String> = match min_len {
        Some(min_len) => last
            .codes
            .into_iter()
            .filter(|c| c.chars().count() == min_len)
            .collect(),
        None => BTreeSet::new(),
    };

    debug!(
        result_count = result.len(),
        keys = min_len.unwrap_or(0),
        pruned
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::CodeDictionary;
    use crate::encoder::build_lattice;
    use crate::encoder::testutil::{dict_of, weather_dict};

    fn run(dict: &CodeDictionary, text: &str, mode: JoinMode, limit: usize) -> Vec<String> {
        let lattice = build_lattice(dict, text);
        search_shortest(&lattice, mode, limit).into_iter().collect()
    }

    #[test]
    fn test_empty_text() {
        let dict = weather_dict();
        for mode in [JoinMode::Space, JoinMode::None, JoinMode::Scheme] {
            assert_eq!(run(&dict, "", mode, 10), vec![String::new()]);
        }
    }

    #[test]
    fn test_ties_collapse_to_one_string() {
        let dict = dict_of(&[("天", &["t"]), ("天气", &["tq"]), ("气", &["q"])]);
        assert_eq!(run(&dict, "天气", JoinMode::None, 10), vec!["tq"]);
    }

    #[test]
    fn test_literal_fallback_only() {
        let dict = CodeDictionary::default();
        assert_eq!(run(&dict, "ab", JoinMode::None, 10), vec!["ab"]);
        assert_eq!(run(&dict, "ab", JoinMode::Space, 10), vec![" a b"]);
    }

    #[test]
    fn test_space_mode_prefers_fewer_words() {
        let dict = dict_of(&[("天", &["t"]), ("天气", &["tq"]), ("气", &["q"])]);
        assert_eq!(run(&dict, "天气", JoinMode::Space, 10), vec![" tq"]);
    }

    #[test]
    fn test_all_ties_are_returned() {
        let dict = dict_of(&[("天", &["ta", "tb"]), ("气", &["qa", "qb"])]);
        let result = run(&dict, "天气", JoinMode::None, 10);
        assert_eq!(result, vec!["taqa", "taqb", "tbqa", "tbqb"]);
    }

    #[test]
    fn test_breadth_limit_keeps_lexicographic_prefix() {
        let dict = dict_of(&[("天", &["ta", "tb"]), ("气", &["qa", "qb"])]);
        let result = run(&dict, "天气", JoinMode::None, 1);
        assert_eq!(result, vec!["taqa", "taqb"]);
        // 0 behaves like 1
        assert_eq!(run(&dict, "天气", JoinMode::None, 0), result);
    }

    #[test]
    fn test_longer_codes_are_discarded() {
        let dict = dict_of(&[("天", &["t", "tian"]), ("气", &["q", "qi"])]);
        assert_eq!(run(&dict, "天气", JoinMode::None, 10), vec!["tq"]);
    }

    #[test]
    fn test_skipped_positions() {
        // Position 1 is only ever inside "天气", nothing ends there.
        let dict = dict_of(&[("天气", &["tq"]), ("气", &["q"]), ("预报", &["yb"])]);
        assert_eq!(run(&dict, "天气预报", JoinMode::None, 10), vec!["tqyb"]);
    }

    #[test]
    fn test_scheme_mode() {
        let dict = dict_of(&[("天", &["tk"]), ("气", &["aiou"])]);
        // "tk" is short and ends on a sound key, so it is terminated by a space;
        // the shape code then follows without another separator.
        assert_eq!(run(&dict, "天气", JoinMode::Scheme, 10), vec!["tk aiou"]);
    }

    #[test]
    fn test_scheme_punctuation_absorbs_space() {
        let dict = dict_of(&[("天", &["tk"])]);
        assert_eq!(run(&dict, "天，", JoinMode::Scheme, 10), vec!["tk，"]);
    }
}
