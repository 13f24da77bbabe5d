//! Highlight classes and terminal colors for primitive tokens
//!
//! Every primitive kind belongs to one class, including kinds the grammar
//! never produces, so renderers never meet an unknown kind. Classes are
//! resolved to colors through a [`Palette`] built from configuration.

use crossterm::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::ast::PrimitiveTokenKind;
use crate::config::PaletteConfig;

/// Groups of primitive kinds that share one presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightClass {
    CharacterList,
    Repetition,
    ListCharacter,
    LiteralString,
    Group,
    NonCapturingGroup,
    Alternation,
    AnyChar,
    Escape,
    Digit,
    NotDigit,
    Whitespace,
    WordBoundary,
    WordCharacter,
}

impl From<PrimitiveTokenKind> for HighlightClass {
    fn from(kind: PrimitiveTokenKind) -> Self {
        match kind {
            PrimitiveTokenKind::OpenSquareBracket
            | PrimitiveTokenKind::CloseSquareBracket
            | PrimitiveTokenKind::CharacterListNegation => HighlightClass::CharacterList,
            PrimitiveTokenKind::RepetitionsCount => HighlightClass::Repetition,
            PrimitiveTokenKind::RangeStart
            | PrimitiveTokenKind::RangeSymbol
            | PrimitiveTokenKind::RangeEnd
            | PrimitiveTokenKind::LiteralCharacter => HighlightClass::ListCharacter,
            PrimitiveTokenKind::LiteralString => HighlightClass::LiteralString,
            PrimitiveTokenKind::GroupStart | PrimitiveTokenKind::GroupEnd => HighlightClass::Group,
            PrimitiveTokenKind::NonCapturingGroup => HighlightClass::NonCapturingGroup,
            PrimitiveTokenKind::Alternation => HighlightClass::Alternation,
            PrimitiveTokenKind::AnyChar => HighlightClass::AnyChar,
            PrimitiveTokenKind::Escape => HighlightClass::Escape,
            PrimitiveTokenKind::Digit => HighlightClass::Digit,
            PrimitiveTokenKind::NotDigit => HighlightClass::NotDigit,
            PrimitiveTokenKind::Whitespace | PrimitiveTokenKind::NotWhitespace => {
                HighlightClass::Whitespace
            }
            PrimitiveTokenKind::WordBoundary | PrimitiveTokenKind::NotWordBoundary => {
                HighlightClass::WordBoundary
            }
            PrimitiveTokenKind::WordCharacter | PrimitiveTokenKind::NotWordCharacter => {
                HighlightClass::WordCharacter
            }
        }
    }
}

/// A color specification that could not be understood
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {value:?} for {class:?}")]
pub struct ColorError {
    pub class: HighlightClass,
    pub value: String,
}

/// Parse `none`, a crossterm color name (`dark_magenta`) or `#rrggbb`.
///
/// `none` resolves to `Some(None)`: the token is left unstyled. Unknown
/// specifications resolve to `None`.
pub fn parse_color(value: &str) -> Option<Option<Color>> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Some(Color::Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        }));
    }
    Color::try_from(value).ok().map(Some)
}

/// Resolved colors per highlight class
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: HashMap<HighlightClass, Color>,
}

impl Palette {
    pub fn from_config(config: &PaletteConfig) -> Result<Self, ColorError> {
        let mut colors = HashMap::new();
        for (class, value) in config.entries() {
            match parse_color(value) {
                Some(Some(color)) => {
                    colors.insert(class, color);
                }
                Some(None) => {}
                None => {
                    return Err(ColorError {
                        class,
                        value: value.to_string(),
                    })
                }
            }
        }
        Ok(Self { colors })
    }

    /// Color for a primitive kind, `None` when it stays unstyled
    pub fn color_for(&self, kind: PrimitiveTokenKind) -> Option<Color> {
        self.colors.get(&HighlightClass::from(kind)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_class() {
        for kind in PrimitiveTokenKind::ALL {
            let _ = HighlightClass::from(kind);
        }
        assert_eq!(
            HighlightClass::from(PrimitiveTokenKind::NotWordBoundary),
            HighlightClass::WordBoundary
        );
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("none"), Some(None));
        assert_eq!(parse_color("dark_magenta"), Some(Some(Color::DarkMagenta)));
        assert_eq!(
            parse_color("#6495ed"),
            Some(Some(Color::Rgb {
                r: 0x64,
                g: 0x95,
                b: 0xed
            }))
        );
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn test_palette_skips_none() {
        let config = crate::config::load_defaults().unwrap();
        let palette = Palette::from_config(&config.palette).unwrap();
        assert_eq!(palette.color_for(PrimitiveTokenKind::LiteralString), None);
        assert!(palette.color_for(PrimitiveTokenKind::GroupStart).is_some());
        assert_eq!(
            palette.color_for(PrimitiveTokenKind::GroupStart),
            palette.color_for(PrimitiveTokenKind::GroupEnd)
        );
    }
}
