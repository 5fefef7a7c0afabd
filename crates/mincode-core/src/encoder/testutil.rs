#![cfg(test)]

use crate::dict::CodeDictionary;

/// Build a dictionary from `(word, codes)` literals.
pub fn dict_of(entries: &[(&str, &[&str])]) -> CodeDictionary {
    CodeDictionary::from_entries(entries.iter().map(|(word, codes)| {
        (
            word.to_string(),
            codes.iter().map(|c| c.to_string()).collect(),
        )
    }))
}

pub fn weather_dict() -> CodeDictionary {
    dict_of(&[
        ("天", &["t"]),
        ("天气", &["tq"]),
        ("气", &["q"]),
        ("今天", &["jt"]),
        ("预报", &["yb"]),
    ])
}
