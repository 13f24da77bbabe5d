//! Primitive decoration tokens
//!
//! Flattening an AST produces a sequence of these: a kind from a fixed
//! vocabulary plus the exact characters it decorates.

use serde::Serialize;
use std::fmt;

use super::span::Span;

/// The decoration vocabulary understood by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PrimitiveTokenKind {
    OpenSquareBracket,
    CharacterListNegation,
    CloseSquareBracket,
    RangeStart,
    RangeSymbol,
    RangeEnd,
    RepetitionsCount,
    LiteralCharacter,
    LiteralString,
    GroupStart,
    NonCapturingGroup,
    GroupEnd,
    Alternation,
    AnyChar,
    Escape,
    // No grammar rule produces the kinds below yet; renderers still style them.
    Digit,
    NotDigit,
    Whitespace,
    NotWhitespace,
    WordBoundary,
    NotWordBoundary,
    WordCharacter,
    NotWordCharacter,
}

impl PrimitiveTokenKind {
    pub const ALL: [PrimitiveTokenKind; 23] = [
        PrimitiveTokenKind::OpenSquareBracket,
        PrimitiveTokenKind::CharacterListNegation,
        PrimitiveTokenKind::CloseSquareBracket,
        PrimitiveTokenKind::RangeStart,
        PrimitiveTokenKind::RangeSymbol,
        PrimitiveTokenKind::RangeEnd,
        PrimitiveTokenKind::RepetitionsCount,
        PrimitiveTokenKind::LiteralCharacter,
        PrimitiveTokenKind::LiteralString,
        PrimitiveTokenKind::GroupStart,
        PrimitiveTokenKind::NonCapturingGroup,
        PrimitiveTokenKind::GroupEnd,
        PrimitiveTokenKind::Alternation,
        PrimitiveTokenKind::AnyChar,
        PrimitiveTokenKind::Escape,
        PrimitiveTokenKind::Digit,
        PrimitiveTokenKind::NotDigit,
        PrimitiveTokenKind::Whitespace,
        PrimitiveTokenKind::NotWhitespace,
        PrimitiveTokenKind::WordBoundary,
        PrimitiveTokenKind::NotWordBoundary,
        PrimitiveTokenKind::WordCharacter,
        PrimitiveTokenKind::NotWordCharacter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveTokenKind::OpenSquareBracket => "OpenSquareBracket",
            PrimitiveTokenKind::CharacterListNegation => "CharacterListNegation",
            PrimitiveTokenKind::CloseSquareBracket => "CloseSquareBracket",
            PrimitiveTokenKind::RangeStart => "RangeStart",
            PrimitiveTokenKind::RangeSymbol => "RangeSymbol",
            PrimitiveTokenKind::RangeEnd => "RangeEnd",
            PrimitiveTokenKind::RepetitionsCount => "RepetitionsCount",
            PrimitiveTokenKind::LiteralCharacter => "LiteralCharacter",
            PrimitiveTokenKind::LiteralString => "LiteralString",
            PrimitiveTokenKind::GroupStart => "GroupStart",
            PrimitiveTokenKind::NonCapturingGroup => "NonCapturingGroup",
            PrimitiveTokenKind::GroupEnd => "GroupEnd",
            PrimitiveTokenKind::Alternation => "Alternation",
            PrimitiveTokenKind::AnyChar => "AnyChar",
            PrimitiveTokenKind::Escape => "Escape",
            PrimitiveTokenKind::Digit => "Digit",
            PrimitiveTokenKind::NotDigit => "NotDigit",
            PrimitiveTokenKind::Whitespace => "Whitespace",
            PrimitiveTokenKind::NotWhitespace => "NotWhitespace",
            PrimitiveTokenKind::WordBoundary => "WordBoundary",
            PrimitiveTokenKind::NotWordBoundary => "NotWordBoundary",
            PrimitiveTokenKind::WordCharacter => "WordCharacter",
            PrimitiveTokenKind::NotWordCharacter => "NotWordCharacter",
        }
    }
}

impl fmt::Display for PrimitiveTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single decoration: what it is and which characters it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PrimitiveRegexToken {
    pub kind: PrimitiveTokenKind,
    pub start: usize,
    pub length: usize,
}

impl PrimitiveRegexToken {
    pub fn new(kind: PrimitiveTokenKind, start: usize, length: usize) -> Self {
        Self {
            kind,
            start,
            length,
        }
    }

    /// A token covering exactly one character
    pub fn single(kind: PrimitiveTokenKind, start: usize) -> Self {
        Self::new(kind, start, 1)
    }

    /// A token covering a whole node span
    pub fn spanning(kind: PrimitiveTokenKind, span: Span) -> Self {
        Self::new(kind, span.offset, span.length)
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.length)
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

impl fmt::Display for PrimitiveRegexToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.span())
    }
}
