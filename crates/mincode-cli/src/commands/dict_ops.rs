use std::path::Path;

use mincode_core::dict::{load_dict, Dictionary};

use crate::die;

pub fn info(dict_file: &str) {
    let (dict, stats) = die!(
        load_dict(Path::new(dict_file)),
        "Error loading dictionary: {}"
    );
    let (words, codes) = dict.stats();
    println!("Words:          {words}");
    println!("Codes:          {codes}");
    println!("Longest word:   {} chars", dict.max_word_chars());
    println!("Disambiguated:  {}", stats.disambiguated);
    println!("Skipped lines:  {}", stats.skipped_lines);
}

pub fn prefix(dict_file: &str, query: &str) {
    let (dict, _) = die!(
        load_dict(Path::new(dict_file)),
        "Error loading dictionary: {}"
    );
    let matches = dict.common_prefix_search(query);
    if matches.is_empty() {
        println!("No word is a prefix of \"{query}\"");
        return;
    }
    for m in &matches {
        println!("{}\t{}", m.word, m.codes.join(" "));
    }
}
