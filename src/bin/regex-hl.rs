//! Command-line interface for regex-highlight
//!
//! Usage:
//!   regex-hl parse `<pattern>` [--format `<format>`]  - Highlight one pattern body
//!   regex-hl scan `<path>`                          - Highlight every regex constructor in a file
//!
//! Both commands accept `--config <file>` to layer a TOML file over the defaults.

use clap::{Parser, Subcommand};
use crossterm::tty::IsTty;
use std::path::{Path, PathBuf};

use regex_highlight::config::{HighlightConfig, Loader, OutputFormat};
use regex_highlight::extract::extract_patterns;
use regex_highlight::formats::{render_ansi, to_json, to_token_listing, to_treeviz_str};
use regex_highlight::style::Palette;
use regex_highlight::{flatten_all, parse_regex, primitive_tokens};

#[derive(Parser)]
#[command(name = "regex-hl")]
#[command(version)]
#[command(about = "Highlight the structure of regular-expression literals")]
struct Cli {
    /// Configuration file layered over the built-in defaults
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a single pattern body
    Parse {
        /// The pattern, without surrounding quotes
        pattern: String,

        /// Output format (defaults to the configured one)
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Find and highlight regex constructor calls in a source file
    Scan {
        /// Path to the source file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });
    let palette = Palette::from_config(&config.palette).unwrap_or_else(|e| {
        eprintln!("Error in palette: {}", e);
        std::process::exit(1);
    });
    // Redirected output stays free of escape codes
    let palette = if std::io::stdout().is_tty() {
        palette
    } else {
        Palette::default()
    };

    match cli.command {
        Command::Parse { pattern, format } => {
            let format = format.unwrap_or(config.output.format);
            handle_parse_command(&pattern, format, &config, &palette);
        }
        Command::Scan { path } => handle_scan_command(&path, &palette),
    }
}

fn load_config(path: Option<&Path>) -> Result<HighlightConfig, config::ConfigError> {
    let loader = Loader::new();
    match path {
        Some(path) => loader.with_file(path).build(),
        None => loader.build(),
    }
}

/// Handle the parse command
fn handle_parse_command(
    pattern: &str,
    format: OutputFormat,
    config: &HighlightConfig,
    palette: &Palette,
) {
    let tokens = parse_regex(pattern).unwrap_or_else(|failure| {
        eprintln!("Error: {}", failure);
        if !failure.expected.is_empty() {
            eprintln!("Expected one of: {}", failure.expected.join(", "));
        }
        std::process::exit(1);
    });

    let output = match format {
        OutputFormat::Ansi => format!("{}\n", render_ansi(pattern, &flatten_all(&tokens), palette)),
        OutputFormat::Tokens => {
            to_token_listing(pattern, &flatten_all(&tokens), config.output.show_offsets)
        }
        OutputFormat::Json => match to_json(&flatten_all(&tokens)) {
            Ok(json) => format!("{}\n", json),
            Err(e) => {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            }
        },
        OutputFormat::Tree => to_treeviz_str(&tokens),
    };

    print!("{}", output);
}

/// Handle the scan command
fn handle_scan_command(path: &Path, palette: &Palette) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    for found in extract_patterns(&source) {
        let tokens = primitive_tokens(&found.pattern);
        println!(
            "{}:{}: {}",
            found.line + 1,
            found.column + 1,
            render_ansi(&found.pattern, &tokens, palette)
        );
    }
}
