//! Keystroke statistics of a finished encoding.

use serde::Serialize;

use crate::layout::{Finger, KeyLayout, Row};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Total keys in the encoding
    pub keys: usize,
    /// Chars in the encoded text
    pub chars: usize,
    /// `keys / chars`, absent for an empty text
    pub keys_per_char: Option<f64>,
    pub space_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingers: Option<FingerUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<RowUsage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FingerUsage {
    pub left_hand: f64,
    pub right_hand: f64,
    pub per_finger: Vec<FingerRate>,
    /// Keys not assigned to any finger (space, punctuation, ...)
    pub other: f64,
    /// `|left - right| / (left + right)`, only when both hands are used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FingerRate {
    pub finger: Finger,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowUsage {
    pub per_row: Vec<RowRate>,
    pub other: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowRate {
    pub row: Row,
    pub rate: f64,
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Compute statistics for `code`, the encoding of `text`.
///
/// All rates are fractions of the encoding's key count. Finger and row usage
/// are only computed when a layout is given.
pub fn analyze(text: &str, code: &str, layout: Option<&KeyLayout>) -> Analysis {
    let keys = code.chars().count();
    let chars = text.chars().count();
    let spaces = code.chars().filter(|&c| c == ' ').count();

    Analysis {
        keys,
        chars,
        keys_per_char: (chars > 0).then(|| keys as f64 / chars as f64),
        space_rate: rate(spaces, keys),
        fingers: layout.map(|l| finger_usage(code, keys, l)),
        rows: layout.map(|l| row_usage(code, keys, l)),
    }
}

fn finger_usage(code: &str, keys: usize, layout: &KeyLayout) -> FingerUsage {
    let mut counts = [0usize; Finger::ALL.len()];
    for finger in code.chars().filter_map(|c| layout.finger_of(c)) {
        counts[finger as usize] += 1;
    }
    let assigned: usize = counts.iter().sum();
    let (mut left, mut right) = (0usize, 0usize);
    for (finger, &count) in Finger::ALL.iter().zip(&counts) {
        if finger.is_left() {
            left += count;
        } else {
            right += count;
        }
    }

    FingerUsage {
        left_hand: rate(left, keys),
        right_hand: rate(right, keys),
        per_finger: Finger::ALL
            .iter()
            .zip(&counts)
            .map(|(&finger, &count)| FingerRate {
                finger,
                rate: rate(count, keys),
            })
            .collect(),
        other: rate(keys - assigned, keys),
        bias: (left > 0 && right > 0)
            .then(|| left.abs_diff(right) as f64 / (left + right) as f64),
    }
}

fn row_usage(code: &str, keys: usize, layout: &KeyLayout) -> RowUsage {
    let mut counts = [0usize; Row::ALL.len()];
    for row in code.chars().filter_map(|c| layout.row_of(c)) {
        counts[row as usize] += 1;
    }
    let assigned: usize = counts.iter().sum();

    RowUsage {
        per_row: Row::ALL
            .iter()
            .zip(&counts)
            .map(|(&row, &count)| RowRate {
                row,
                rate: rate(count, keys),
            })
            .collect(),
        other: rate(keys - assigned, keys),
    }
}
