//! Rendering and writing of encoding reports.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use mincode_core::analysis::{Analysis, FingerRate};
use mincode_core::encoder::JoinMode;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One shortest encoding with its statistics.
#[derive(Debug, Serialize)]
pub struct EncodingReport {
    pub code: String,
    pub analysis: Analysis,
}

/// Everything produced by one `encode` run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub mode: JoinMode,
    pub breadth_limit: usize,
    pub encodings: Vec<EncodingReport>,
}

impl Report {
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text report, one block per encoding separated by blank lines.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, enc) in self.encodings.iter().enumerate() {
            let mut lines = vec![format!("Shortest encoding #{}:", i + 1), enc.code.clone()];
            lines.extend(analysis_lines(&enc.analysis));
            for line in lines {
                out.push_str(&line);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }
}

fn analysis_lines(a: &Analysis) -> Vec<String> {
    let mut lines = vec![format!("keys\t{}", a.keys), format!("chars\t{}", a.chars)];
    if let Some(kpc) = a.keys_per_char {
        lines.push(format!("keys_per_char\t{kpc}"));
    }
    if let Some(f) = &a.fingers {
        let (left, right): (Vec<&FingerRate>, Vec<&FingerRate>) =
            f.per_finger.iter().partition(|r| r.finger.is_left());
        lines.push(format!("left_hand\t{}", f.left_hand));
        lines.extend(left.iter().map(|r| format!("{}\t{}", r.finger.name(), r.rate)));
        lines.push(format!("right_hand\t{}", f.right_hand));
        lines.extend(right.iter().map(|r| format!("{}\t{}", r.finger.name(), r.rate)));
        lines.push(format!("other_finger\t{}", f.other));
        if let Some(bias) = f.bias {
            lines.push(format!("hand_bias\t{bias}"));
        }
    }
    if let Some(rows) = &a.rows {
        lines.extend(
            rows.per_row
                .iter()
                .map(|r| format!("{}_row\t{}", r.row.name(), r.rate)),
        );
        lines.push(format!("other_row\t{}", rows.other));
    }
    lines.push(format!("space_rate\t{}", a.space_rate));
    lines
}

/// `<dir>/<stem>.<suffix>` next to the input text.
pub fn sibling_path(text_path: &Path, suffix: &str) -> PathBuf {
    let stem = text_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "text".to_string());
    text_path.with_file_name(format!("{stem}.{suffix}"))
}

/// Numbered list of encodings, as written by `--write-codes`.
pub fn codes_text(codes: &[String]) -> String {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| format!("Shortest encoding #{}:\n{code}\n", i + 1))
        .collect()
}

/// Overwrite `path` with `content`.
pub fn write_file(path: &Path, content: &str) -> Result<(), ReportError> {
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "written");
    Ok(())
}
