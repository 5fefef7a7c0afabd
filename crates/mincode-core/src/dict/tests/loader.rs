use std::io::Write;

use crate::dict::{load_dict, load_text, parse_dict, DictError, Dictionary};
use crate::encoder::{encode, JoinMode};

#[test]
fn test_parse_basic() {
    let (dict, stats) = parse_dict("天\tt\n天气\ttq\n气\tq\n").unwrap();
    assert_eq!(dict.lookup("天气"), Some(&["tq".to_string()][..]));
    assert_eq!(stats.entries, 3);
    assert_eq!(stats.disambiguated, 0);
}

#[test]
fn test_comments_and_malformed_lines() {
    let content = "# header\n天\tt # trailing\n\n只有一列\n气\tq\tnot_a_number\n人\tr\t1\textra\n";
    let (dict, stats) = parse_dict(content).unwrap();
    assert_eq!(dict.lookup("天"), Some(&["t".to_string()][..]));
    assert_eq!(dict.lookup("气"), None);
    assert_eq!(dict.lookup("人"), None);
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.skipped_lines, 3);
}

#[test]
fn test_collision_lower_priority_loses() {
    let content = "的\td\t1\n地\td\t5\n得\td\n";
    let (dict, stats) = parse_dict(content).unwrap();
    assert_eq!(dict.lookup("地"), Some(&["d".to_string()][..]));
    assert_eq!(dict.lookup("的"), Some(&["d2".to_string()][..]));
    assert_eq!(dict.lookup("得"), Some(&["d3".to_string()][..]));
    assert_eq!(stats.disambiguated, 2);
}

#[test]
fn test_collision_ties_keep_file_order() {
    let (dict, _) = parse_dict("甲\tab\n乙\tab\n").unwrap();
    assert_eq!(dict.lookup("甲"), Some(&["ab".to_string()][..]));
    assert_eq!(dict.lookup("乙"), Some(&["ab2".to_string()][..]));
}

#[test]
fn test_duplicate_pair_keeps_highest_priority() {
    let (dict, stats) = parse_dict("甲\tab\t1\n乙\tab\t2\n甲\tab\t3\n").unwrap();
    assert_eq!(stats.entries, 2);
    assert_eq!(dict.lookup("甲"), Some(&["ab".to_string()][..]));
    assert_eq!(dict.lookup("乙"), Some(&["ab2".to_string()][..]));
}

#[test]
fn test_word_with_several_codes() {
    let (dict, _) = parse_dict("天\tt\n天\ttian\n").unwrap();
    assert_eq!(
        dict.lookup("天"),
        Some(&["t".to_string(), "tian".to_string()][..])
    );
}

#[test]
fn test_empty_dictionary_is_rejected() {
    assert!(matches!(parse_dict(""), Err(DictError::Empty)));
    assert!(matches!(parse_dict("# only\n\n"), Err(DictError::Empty)));
}

#[test]
fn test_load_from_files() {
    let mut dict_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(dict_file, "天气\ttq").unwrap();
    let mut text_file = tempfile::NamedTempFile::new().unwrap();
    write!(text_file, "天气\n好").unwrap();

    let (dict, _) = load_dict(dict_file.path()).unwrap();
    assert_eq!(dict.stats(), (1, 1));
    assert_eq!(load_text(text_file.path()).unwrap(), "天气\n好");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_dict(&dir.path().join("missing.tsv")).unwrap_err();
    assert!(matches!(err, DictError::Io(_)));
}

#[test]
fn test_load_strips_byte_order_mark() {
    let mut dict_file = tempfile::NamedTempFile::new().unwrap();
    write!(dict_file, "\u{feff}天气\ttq\n预报\tyb\n").unwrap();
    let mut text_file = tempfile::NamedTempFile::new().unwrap();
    write!(text_file, "\u{feff}天气预报").unwrap();

    let (dict, _) = load_dict(dict_file.path()).unwrap();
    assert_eq!(dict.lookup("天气"), Some(&["tq".to_string()][..]));
    assert_eq!(dict.lookup("\u{feff}天气"), None);

    let text = load_text(text_file.path()).unwrap();
    assert_eq!(text, "天气预报");
    let encodings = encode(&dict, &text, JoinMode::None, 10);
    assert_eq!(encodings.codes, vec!["tqyb".to_string()]);
}

#[test]
fn test_fields_are_trimmed() {
    let (dict, _) = parse_dict(" 天 \tt \n气\t q\t 2 \n").unwrap();
    assert_eq!(dict.lookup("天"), Some(&["t".to_string()][..]));
    assert_eq!(dict.lookup("气"), Some(&["q".to_string()][..]));
    assert_eq!(dict.lookup(" 天 "), None);
}
