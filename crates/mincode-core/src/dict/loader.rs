use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::{CodeDictionary, DictError};

/// Counters gathered while loading a dictionary file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Distinct `(word, code)` entries read.
    pub entries: usize,
    /// Entries whose code was suffixed with a disambiguation index.
    pub disambiguated: usize,
    /// Non-empty lines that were not entries.
    pub skipped_lines: usize,
}

const BOM: char = '\u{feff}';

fn strip_bom(content: &str) -> &str {
    content.strip_prefix(BOM).unwrap_or(content)
}

struct RawEntry {
    word: String,
    code: String,
    priority: i64,
}

/// Load a tab-separated dictionary file.
pub fn load_dict(path: &Path) -> Result<(CodeDictionary, LoadStats), DictError> {
    let content = fs::read_to_string(path)?;
    let loaded = parse_dict(strip_bom(&content))?;
    info!(
        path = %path.display(),
        entries = loaded.1.entries,
        disambiguated = loaded.1.disambiguated,
        "dictionary loaded"
    );
    Ok(loaded)
}

/// Parse dictionary text.
///
/// Each line is `word<TAB>code` or `word<TAB>code<TAB>priority`; `#` starts a
/// comment. When two entries share a code, the higher-priority one (earlier
/// line on ties) keeps it and the other gets the first free `code2`, `code3`, ...
pub fn parse_dict(content: &str) -> Result<(CodeDictionary, LoadStats), DictError> {
    let mut stats = LoadStats::default();
    let mut entries: Vec<RawEntry> = Vec::new();
    let mut seen: HashMap<(String, String), usize> = HashMap::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.split_once('#').map_or(line, |(before, _)| before);
        if line.trim().is_empty() {
            continue;
        }
        let Some(entry) = parse_line(line, line_no + 1) else {
            stats.skipped_lines += 1;
            continue;
        };
        match seen.get(&(entry.word.clone(), entry.code.clone())) {
            Some(&idx) => {
                let kept = &mut entries[idx];
                kept.priority = kept.priority.max(entry.priority);
            }
            None => {
                seen.insert((entry.word.clone(), entry.code.clone()), entries.len());
                entries.push(entry);
            }
        }
    }

    if entries.is_empty() {
        return Err(DictError::Empty);
    }
    stats.entries = entries.len();

    // Stable sort keeps file order among equal priorities.
    entries.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut assigned: HashSet<String> = HashSet::with_capacity(entries.len());
    let mut words: HashMap<String, Vec<String>> = HashMap::new();
    for entry in entries {
        let mut code = entry.code.clone();
        let mut index = 2;
        while assigned.contains(&code) {
            code = format!("{}{}", entry.code, index);
            index += 1;
        }
        if index > 2 {
            stats.disambiguated += 1;
            debug!(word = %entry.word, code = %code, "code disambiguated");
        }
        assigned.insert(code.clone());
        words.entry(entry.word).or_default().push(code);
    }

    Ok((CodeDictionary::from_entries(words), stats))
}

fn parse_line(line: &str, line_no: usize) -> Option<RawEntry> {
    let fields: Vec<&str> = line.split('\t').collect();
    let priority = match fields.len() {
        2 => 0,
        3 => match fields[2].trim().parse::<i64>() {
            Ok(p) => p,
            Err(_) => {
                warn!(line = line_no, priority = fields[2], "unrecognized priority");
                return None;
            }
        },
        _ => return None,
    };
    let (word, code) = (fields[0].trim(), fields[1].trim());
    if word.is_empty() || code.is_empty() {
        return None;
    }
    Some(RawEntry {
        word: word.to_string(),
        code: code.to_string(),
        priority,
    })
}

/// Read the whole text file. Apart from a leading byte-order mark, no
/// normalization is applied.
pub fn load_text(path: &Path) -> Result<String, DictError> {
    let mut text = fs::read_to_string(path)?;
    if text.starts_with(BOM) {
        text.drain(..BOM.len_utf8());
    }
    info!(path = %path.display(), chars = text.chars().count(), "text loaded");
    Ok(text)
}
