//! Flattening: AST to ordered primitive decoration tokens
//!
//! Children are always visited left to right, so the resulting sequence is
//! ordered by start offset and no two tokens overlap.

use super::nodes::{
    Alternations, AtomicKind, AtomicSpecial, CharList, CharRange, Group, ListItem, Quantifier,
    RegexToken, SingleChar, VerbatimString,
};
use super::primitive::{PrimitiveRegexToken, PrimitiveTokenKind};
use super::traits::{AstNode, Flatten};

/// Flatten a sequence of sibling tokens into one primitive sequence
pub fn flatten_all(tokens: &[RegexToken]) -> Vec<PrimitiveRegexToken> {
    let mut out = Vec::new();
    for token in tokens {
        token.flatten_into(&mut out);
    }
    out
}

/// Index of the closing character of a bracketed node
fn closing_offset(node: &impl AstNode) -> usize {
    node.span().last().unwrap_or(node.offset())
}

impl Flatten for RegexToken {
    fn flatten_into(&self, out: &mut Vec<PrimitiveRegexToken>) {
        match self {
            RegexToken::Verbatim(v) => v.flatten_into(out),
            RegexToken::Atomic(a) => a.flatten_into(out),
            RegexToken::CharList(l) => l.flatten_into(out),
            RegexToken::Quantifier(q) => q.flatten_into(out),
            RegexToken::Group(g) => g.flatten_into(out),
            RegexToken::Alternations(a) => a.flatten_into(out),
        }
    }
}

impl Flatten for ListItem {
    fn flatten_into(&self, out: &mut Vec<PrimitiveRegexToken>) {
        match self {
            ListItem::Single(c) => c.flatten_into(out),
            ListItem::Range(r) => r.flatten_into(out),
        }
    }
}

impl Flatten for VerbatimString {
    fn flatten_into(&self, out: &mut Vec<PrimitiveRegexToken>) {
        out.push(PrimitiveRegexToken::spanning(
            PrimitiveTokenKind::LiteralString,
            self.span(),
        ));
    }
}

impl From<AtomicKind> for PrimitiveTokenKind {
    fn from(kind: AtomicKind) -> Self {
        match kind {
            AtomicKind::AnyChar => PrimitiveTokenKind::AnyChar,
            AtomicKind::Escape => PrimitiveTokenKind::Escape,
            AtomicKind::Digit => PrimitiveTokenKind::Digit,
            AtomicKind::NotDigit => PrimitiveTokenKind::NotDigit,
            AtomicKind::Whitespace => PrimitiveTokenKind::Whitespace,
            AtomicKind::NotWhitespace => PrimitiveTokenKind::NotWhitespace,
            AtomicKind::WordBoundary => PrimitiveTokenKind::WordBoundary,
            AtomicKind::NotWordBoundary => PrimitiveTokenKind::NotWordBoundary,
            AtomicKind::WordCharacter => PrimitiveTokenKind::WordCharacter,
            AtomicKind::NotWordCharacter => PrimitiveTokenKind::NotWordCharacter,
        }
    }
}

impl Flatten for AtomicSpecial {
    fn flatten_into(&self, out: &mut Vec<PrimitiveRegexToken>) {
        out.push(PrimitiveRegexToken::spanning(self.kind.into(), self.span()));
    }
}

impl Flatten for Quantifier {
    fn flatten_into(&self, out: &mut Vec<PrimitiveRegexToken>) {
        out.push(PrimitiveRegexToken::spanning(
            PrimitiveTokenKind::RepetitionsCount,
            self.span(),
        ));
    }
}

impl Flatten for CharList {
    fn flatten_into(&self, out: &mut Vec<PrimitiveRegexToken>) {
        let start = self.offset();
        out.push(PrimitiveRegexToken::single(
            PrimitiveTokenKind::OpenSquareBracket,
            start,
        ));
        if self.exclude {
            out.push(PrimitiveRegexToken::single(
                PrimitiveTokenKind::CharacterListNegation,
                start + 1,
            ));
        }
        for item in &self.items {
            item.flatten_into(out);
        }
        out.push(PrimitiveRegexToken::single(
            PrimitiveTokenKind::CloseSquareBracket,
            closing_offset(self),
        ));
    }
}

impl Flatten for SingleChar {
    fn flatten_into(&self, out: &mut Vec<PrimitiveRegexToken>) {
        out.push(PrimitiveRegexToken::spanning(
            PrimitiveTokenKind::LiteralCharacter,
            self.span(),
        ));
    }
}

impl Flatten for CharRange {
    fn flatten_into(&self, out: &mut Vec<PrimitiveRegexToken>) {
        let start = self.offset();
        out.push(PrimitiveRegexToken::single(
            PrimitiveTokenKind::RangeStart,
            start,
        ));
        out.push(PrimitiveRegexToken::single(
            PrimitiveTokenKind::RangeSymbol,
            start + 1,
        ));
        out.push(PrimitiveRegexToken::single(
            PrimitiveTokenKind::RangeEnd,
            start + 2,
        ));
    }
}

impl Flatten for Group {
    fn flatten_into(&self, out: &mut Vec<PrimitiveRegexToken>) {
        let start = self.offset();
        out.push(PrimitiveRegexToken::single(
            PrimitiveTokenKind::GroupStart,
            start,
        ));
        if self.non_capturing {
            // covers the `?:` marker
            out.push(PrimitiveRegexToken::new(
                PrimitiveTokenKind::NonCapturingGroup,
                start + 1,
                2,
            ));
        }
        for child in &self.children {
            child.flatten_into(out);
        }
        out.push(PrimitiveRegexToken::single(
            PrimitiveTokenKind::GroupEnd,
            closing_offset(self),
        ));
    }
}

impl Flatten for Alternations {
    fn flatten_into(&self, out: &mut Vec<PrimitiveRegexToken>) {
        let last = self.children.len().saturating_sub(1);
        for (i, child) in self.children.iter().enumerate() {
            child.flatten_into(out);
            if i < last {
                out.push(PrimitiveRegexToken::single(
                    PrimitiveTokenKind::Alternation,
                    child.span().end(),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::span::Span;
    use crate::ast::traits::Positioned;

    fn stamped<T: Positioned>(mut node: T, offset: usize, length: usize) -> T {
        node.set_span(Span::new(offset, length));
        node
    }

    fn kinds(tokens: &[PrimitiveRegexToken]) -> Vec<PrimitiveTokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_verbatim_spans_whole_node() {
        let node = stamped(VerbatimString::new("abc"), 4, 3);
        assert_eq!(
            node.flatten(),
            vec![PrimitiveRegexToken::new(
                PrimitiveTokenKind::LiteralString,
                4,
                3
            )]
        );
    }

    #[test]
    fn test_char_list_with_range() {
        // [^a-cx]
        let range = stamped(CharRange::new('a', 'c'), 2, 3);
        let single = stamped(SingleChar::new('x'), 5, 1);
        let list = stamped(
            CharList::new(vec![ListItem::Range(range), ListItem::Single(single)], true),
            0,
            7,
        );

        let tokens = list.flatten();
        assert_eq!(
            kinds(&tokens),
            vec![
                PrimitiveTokenKind::OpenSquareBracket,
                PrimitiveTokenKind::CharacterListNegation,
                PrimitiveTokenKind::RangeStart,
                PrimitiveTokenKind::RangeSymbol,
                PrimitiveTokenKind::RangeEnd,
                PrimitiveTokenKind::LiteralCharacter,
                PrimitiveTokenKind::CloseSquareBracket,
            ]
        );
        let starts: Vec<usize> = tokens.iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_non_capturing_group_marks_marker() {
        // (?:a)
        let child = stamped(VerbatimString::new("a"), 3, 1);
        let group = stamped(
            Group::new(vec![RegexToken::Verbatim(child)], true, None),
            0,
            5,
        );

        assert_eq!(
            group.flatten(),
            vec![
                PrimitiveRegexToken::new(PrimitiveTokenKind::GroupStart, 0, 1),
                PrimitiveRegexToken::new(PrimitiveTokenKind::NonCapturingGroup, 1, 2),
                PrimitiveRegexToken::new(PrimitiveTokenKind::LiteralString, 3, 1),
                PrimitiveRegexToken::new(PrimitiveTokenKind::GroupEnd, 4, 1),
            ]
        );
    }

    #[test]
    fn test_alternation_between_children_only() {
        // a|b|c
        let children = vec![
            RegexToken::Verbatim(stamped(VerbatimString::new("a"), 0, 1)),
            RegexToken::Verbatim(stamped(VerbatimString::new("b"), 2, 1)),
            RegexToken::Verbatim(stamped(VerbatimString::new("c"), 4, 1)),
        ];
        let alternations = stamped(Alternations::new(children), 0, 5);

        let bars: Vec<usize> = alternations
            .flatten()
            .iter()
            .filter(|t| t.kind == PrimitiveTokenKind::Alternation)
            .map(|t| t.start)
            .collect();
        assert_eq!(bars, vec![1, 3]);
    }

    #[test]
    fn test_reserved_atomic_kinds_flatten() {
        let digit = stamped(AtomicSpecial::new(AtomicKind::Digit), 0, 2);
        assert_eq!(
            digit.flatten(),
            vec![PrimitiveRegexToken::new(PrimitiveTokenKind::Digit, 0, 2)]
        );
    }

    #[test]
    fn test_flatten_is_repeatable() {
        let node = RegexToken::Quantifier(stamped(Quantifier::new(1, None), 1, 1));
        assert_eq!(node.flatten(), node.flatten());
        assert_eq!(flatten_all(std::slice::from_ref(&node)), node.flatten());
    }
}
