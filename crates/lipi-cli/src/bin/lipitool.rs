use clap::{Parser, Subcommand};

use lipi_cli::commands::{annotate_ops, config_ops, read_text, text_ops};

#[derive(Parser)]
#[command(name = "lipitool", about = "Devanagari/IAST conversion and prosody diagnostics")]
struct Cli {
    /// Settings TOML to use instead of the embedded defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the normalized form of the text
    Normalize {
        /// Input text (default: stdin)
        text: Option<String>,
    },
    /// Transliterate Devanagari to IAST
    ToIast {
        /// Devanagari text (default: stdin)
        text: Option<String>,
    },
    /// Transliterate IAST to Devanagari
    ToDevanagari {
        /// IAST text (default: stdin)
        text: Option<String>,
    },
    /// Locate holdings (consonant clusters) in IAST text
    Holdings {
        /// IAST text (default: stdin)
        text: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Locate sandhi and om pauses in IAST text
    Pauses {
        /// IAST text (default: stdin)
        text: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Normalized text with holdings and pauses, as JSON
    Annotate {
        /// IAST text (default: stdin)
        text: Option<String>,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn input(text: Option<String>) -> String {
    read_text(text).unwrap_or_else(|e| {
        eprintln!("Error reading input: {e}");
        std::process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Normalize { text } => text_ops::normalize_cmd(&input(text)),
        Command::ToIast { text } => text_ops::to_iast_cmd(&input(text)),
        Command::ToDevanagari { text } => text_ops::to_devanagari_cmd(&input(text)),
        Command::Holdings { text, json } => annotate_ops::holdings_cmd(&input(text), json),
        Command::Pauses { text, json } => annotate_ops::pauses_cmd(&input(text), json),
        Command::Annotate { text } => annotate_ops::annotate_cmd(&input(text)),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
