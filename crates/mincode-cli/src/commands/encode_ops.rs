use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use mincode_core::analysis::analyze;
use mincode_core::dict::{load_dict, load_text, DictError};
use mincode_core::encoder::{encode, JoinMode};
use mincode_core::layout::{parse_layout_toml, KeyLayout, LayoutError};
use mincode_core::settings::{init_custom, settings, SettingsError};

use crate::die;
use crate::report::{
    codes_text, sibling_path, write_file, EncodingReport, Report, ReportError,
};

/// Options of the `encode` subcommand.
pub struct EncodeArgs<'a> {
    pub dict_file: &'a str,
    pub text_file: &'a str,
    pub mode: Option<JoinMode>,
    pub limit: Option<usize>,
    pub settings_file: Option<&'a str>,
    pub layout_file: Option<&'a str>,
    pub no_layout: bool,
    pub json: bool,
    pub stdout: bool,
    pub write_codes: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("error reading {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("error in settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("error in layout: {0}")]
    Layout(#[from] LayoutError),

    #[error("error loading {path}: {source}")]
    Load { path: String, source: DictError },

    #[error("error rendering report: {0}")]
    Report(#[from] ReportError),
}

/// Result of one encoding run, before anything is written.
#[derive(Debug)]
pub struct EncodeRun {
    pub report: Report,
    pub codes: Vec<String>,
    /// The report rendered as text or JSON.
    pub rendered: String,
}

impl EncodeRun {
    /// Write the encodings to `<text>.codes.txt`.
    pub fn write_codes(&self, text_path: &Path) -> Result<PathBuf, ReportError> {
        let path = sibling_path(text_path, "codes.txt");
        write_file(&path, &codes_text(&self.codes))?;
        Ok(path)
    }

    /// Write the rendered report to `<text>.report.txt` or `<text>.report.json`.
    pub fn write_report(&self, text_path: &Path, json: bool) -> Result<PathBuf, ReportError> {
        let suffix = if json { "report.json" } else { "report.txt" };
        let path = sibling_path(text_path, suffix);
        write_file(&path, &self.rendered)?;
        Ok(path)
    }
}

fn read(path: &str) -> Result<String, EncodeError> {
    fs::read_to_string(path).map_err(|source| EncodeError::Read {
        path: path.to_string(),
        source,
    })
}

fn resolve_layout(args: &EncodeArgs<'_>) -> Result<Option<KeyLayout>, EncodeError> {
    if args.no_layout {
        return Ok(None);
    }
    match args.layout_file {
        Some(path) => Ok(Some(parse_layout_toml(&read(path)?)?)),
        None => Ok(Some(KeyLayout::qwerty())),
    }
}

/// Load the inputs, encode the text and analyze every shortest encoding.
pub fn run_encode(args: &EncodeArgs<'_>) -> Result<EncodeRun, EncodeError> {
    if let Some(path) = args.settings_file {
        init_custom(read(path)?)?;
    }
    let mode = args.mode.unwrap_or_else(|| settings().join.mode);
    let limit = args.limit.unwrap_or_else(|| settings().search.breadth_limit);
    let layout = resolve_layout(args)?;

    let (dict, stats) =
        load_dict(Path::new(args.dict_file)).map_err(|source| EncodeError::Load {
            path: args.dict_file.to_string(),
            source,
        })?;
    let (words, _) = dict.stats();
    eprintln!(
        "Dictionary: {words} words ({} codes disambiguated)",
        stats.disambiguated
    );
    let text = load_text(Path::new(args.text_file)).map_err(|source| EncodeError::Load {
        path: args.text_file.to_string(),
        source,
    })?;
    eprintln!(
        "Encoding {} chars (mode: {mode}, breadth limit: {limit})...",
        text.chars().count()
    );

    let start = Instant::now();
    let encodings = encode(&dict, &text, mode, limit);
    eprintln!(
        "Found {} shortest encodings of {} keys in {:.2?}",
        encodings.codes.len(),
        encodings.keys,
        start.elapsed()
    );

    let report = Report {
        mode,
        breadth_limit: limit,
        encodings: encodings
            .codes
            .iter()
            .map(|code| EncodingReport {
                code: code.clone(),
                analysis: analyze(&text, code, layout.as_ref()),
            })
            .collect(),
    };
    let rendered = if args.json {
        report.to_json()?
    } else {
        report.to_text()
    };
    Ok(EncodeRun {
        report,
        codes: encodings.codes,
        rendered,
    })
}

pub fn encode_cmd(args: &EncodeArgs<'_>) {
    let run = die!(run_encode(args), "Error: {}");
    let text_path = Path::new(args.text_file);

    if args.write_codes {
        match run.write_codes(text_path) {
            Ok(path) => eprintln!("Encodings written to {}", path.display()),
            Err(e) => eprintln!("Error writing encodings: {e}"),
        }
    }

    if args.stdout {
        print!("{}", run.rendered);
        return;
    }
    match run.write_report(text_path, args.json) {
        Ok(path) => eprintln!("Report written to {}", path.display()),
        Err(e) => {
            eprintln!("Error writing report: {e}");
            eprintln!("Printing the report instead.");
            print!("{}", run.rendered);
        }
    }
}
