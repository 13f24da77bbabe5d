//! Layered settings for palettes and CLI output.
//!
//! The built-in palette lives in `defaults/regex-highlight.default.toml` and is
//! compiled into the crate. A [`Loader`] starts from it, stacks TOML files and
//! single-key overrides on top (later layers win), then produces a
//! [`HighlightConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::style::HighlightClass;

const DEFAULT_TOML: &str = include_str!("../defaults/regex-highlight.default.toml");

/// Everything a highlighting front end needs: colors and output choices.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    pub palette: PaletteConfig,
    pub output: OutputConfig,
}

/// Color specification per highlight class.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteConfig {
    pub character_list: String,
    pub repetition: String,
    pub list_character: String,
    pub literal_string: String,
    pub group: String,
    pub non_capturing_group: String,
    pub alternation: String,
    pub any_char: String,
    pub escape: String,
    pub digit: String,
    pub not_digit: String,
    pub whitespace: String,
    pub word_boundary: String,
    pub word_character: String,
}

impl PaletteConfig {
    /// Every class paired with its configured color
    pub fn entries(&self) -> [(HighlightClass, &str); 14] {
        [
            (HighlightClass::CharacterList, self.character_list.as_str()),
            (HighlightClass::Repetition, self.repetition.as_str()),
            (HighlightClass::ListCharacter, self.list_character.as_str()),
            (HighlightClass::LiteralString, self.literal_string.as_str()),
            (HighlightClass::Group, self.group.as_str()),
            (HighlightClass::NonCapturingGroup, self.non_capturing_group.as_str()),
            (HighlightClass::Alternation, self.alternation.as_str()),
            (HighlightClass::AnyChar, self.any_char.as_str()),
            (HighlightClass::Escape, self.escape.as_str()),
            (HighlightClass::Digit, self.digit.as_str()),
            (HighlightClass::NotDigit, self.not_digit.as_str()),
            (HighlightClass::Whitespace, self.whitespace.as_str()),
            (HighlightClass::WordBoundary, self.word_boundary.as_str()),
            (HighlightClass::WordCharacter, self.word_character.as_str()),
        ]
    }
}

/// Controls what the command-line tool prints.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_offsets: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Pattern painted with terminal colors
    Ansi,
    /// One primitive token per line
    Tokens,
    /// Primitive tokens as JSON
    Json,
    /// AST as an indented tree
    Tree,
}

/// Builds a [`HighlightConfig`] from the embedded palette plus user layers.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader holding only the built-in palette and output settings.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path)
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Stack a TOML file given on the command line; `build` fails if it is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Stack a TOML file from a well-known location, skipped when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Replace one dotted key, e.g. `palette.group` or `output.format`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and deserialize it.
    pub fn build(self) -> Result<HighlightConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in settings with no user layers.
pub fn load_defaults() -> Result<HighlightConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.format, OutputFormat::Ansi);
        assert!(config.output.show_offsets);
        assert_eq!(config.palette.literal_string, "none");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "json")
            .unwrap()
            .set_override("palette.group", "red")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.palette.group, "red");
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\nshow_offsets = false").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert!(!config.output.show_offsets);
        assert_eq!(config.output.format, OutputFormat::Ansi);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/regex-highlight.toml")
            .build()
            .unwrap();
        assert_eq!(config.palette.any_char, "dark_magenta");
    }

    #[test]
    fn required_file_must_exist() {
        let result = Loader::new()
            .with_file("/nonexistent/regex-highlight.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn overrides_win_over_files() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[palette]\ngroup = \"red\"").unwrap();

        let config = Loader::new()
            .with_file(file.path())
            .set_override("palette.group", "blue")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.palette.group, "blue");
        assert_eq!(config.palette.any_char, "dark_magenta");
    }
}
