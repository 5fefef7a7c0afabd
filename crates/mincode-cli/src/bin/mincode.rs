use clap::{Parser, Subcommand};

use mincode_cli::commands::encode_ops::EncodeArgs;
use mincode_cli::commands::{config_ops, dict_ops, encode_ops};
use mincode_cli::trace_init::init_tracing;
use mincode_core::encoder::JoinMode;

#[derive(Parser)]
#[command(name = "mincode", about = "Shortest encodings of a text under a code dictionary")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find every shortest encoding of a text and analyze it
    Encode {
        /// Dictionary file (word<TAB>code[<TAB>priority] per line)
        dict_file: String,
        /// Text file to encode
        text_file: String,
        /// Join mode: space, none or scheme (numeric ids: 1 none, 2 scheme, others space)
        #[arg(short, long)]
        mode: Option<JoinMode>,
        /// Tied shortest prefixes kept per position
        #[arg(short, long)]
        limit: Option<usize>,
        /// Custom settings TOML
        #[arg(long)]
        settings: Option<String>,
        /// Keyboard layout TOML for finger/row statistics
        #[arg(long, conflicts_with = "no_layout")]
        layout: Option<String>,
        /// Skip finger/row statistics
        #[arg(long)]
        no_layout: bool,
        /// Write the report as JSON
        #[arg(long)]
        json: bool,
        /// Print the report instead of writing it next to the text
        #[arg(long)]
        stdout: bool,
        /// Also write the encodings to <text>.codes.txt
        #[arg(long)]
        write_codes: bool,
    },
    /// Show dictionary statistics
    Info {
        /// Dictionary file
        dict_file: String,
    },
    /// List dictionary words that are prefixes of a query
    Prefix {
        /// Dictionary file
        dict_file: String,
        /// Query text
        query: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export the default keyboard layout as TOML
    LayoutExport,
    /// Validate a custom keyboard layout TOML file
    LayoutValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode {
            dict_file,
            text_file,
            mode,
            limit,
            settings,
            layout,
            no_layout,
            json,
            stdout,
            write_codes,
        } => encode_ops::encode_cmd(&EncodeArgs {
            dict_file: &dict_file,
            text_file: &text_file,
            mode,
            limit,
            settings_file: settings.as_deref(),
            layout_file: layout.as_deref(),
            no_layout,
            json,
            stdout,
            write_codes,
        }),
        Command::Info { dict_file } => dict_ops::info(&dict_file),
        Command::Prefix { dict_file, query } => dict_ops::prefix(&dict_file, &query),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::LayoutExport => config_ops::layout_export(),
        Command::LayoutValidate { file } => config_ops::layout_validate(&file),
    }
}
