//! Grammar rules for the supported regex dialect
//!
//! Alternatives are tried in the listed order and the first success wins, so
//! rule order is how ambiguities are resolved:
//!
//! ```text
//! Pattern     := (Quantifiable Quantifier?)*
//! Quantifiable:= Atom ('|' Atom)*            (two or more -> Alternations)
//! Atom        := AnyChar | Escape | CharList | Verbatim | Group
//! CharList    := '[' '^'? (Range | SingleChar)+ ']'
//! Quantifier  := '*?' | '+?' | '+' | '*' | '?' | '{' int? ',' int? '}'
//! Group       := '(' '?:'? ('?<' name '>')? Pattern ')'
//! ```
//!
//! Every rule that introduces a node stamps its span as soon as it succeeds.

use chumsky::prelude::*;

use super::combinators::{char_except, char_outside, integer, run_except, ParserError, PositionedExt};
use crate::ast::{
    Alternations, AtomicKind, AtomicSpecial, CharList, CharRange, Group, ListItem, Quantifier,
    RegexToken, SingleChar, VerbatimString,
};

/// Characters that carry meaning outside a character list
pub const ESCAPE_SIGNIFICANT: &[char] = &[
    '.', '$', '^', '{', '[', '(', '|', ')', '*', '+', '?', '\\',
];

/// Name of the construct whose rule begins with `c`, if any.
///
/// Verbatim runs and list members start with "anything else", so they are
/// never named here.
pub(crate) fn construct_starting_with(c: char) -> Option<&'static str> {
    match c {
        '(' => Some("group"),
        '.' => Some("any character"),
        '[' => Some("character list"),
        '\\' => Some("escape"),
        '*' | '+' | '{' => Some("quantifier"),
        '|' => Some("alternation"),
        _ => None,
    }
}

/// Maximal run of characters without special meaning
pub fn verbatim() -> impl Parser<char, RegexToken, Error = ParserError> + Clone {
    char_outside(ESCAPE_SIGNIFICANT)
        .repeated()
        .at_least(1)
        .map(|chars: Vec<char>| VerbatimString::new(chars.into_iter().collect::<String>()))
        .positioned()
        .map(RegexToken::Verbatim)
        .labelled("verbatim")
}

pub fn any_char() -> impl Parser<char, RegexToken, Error = ParserError> + Clone {
    atomic('.', AtomicKind::AnyChar).labelled("any character")
}

/// A bare backslash. The escaped character is left to the following rules.
pub fn escape() -> impl Parser<char, RegexToken, Error = ParserError> + Clone {
    atomic('\\', AtomicKind::Escape).labelled("escape")
}

fn atomic(
    symbol: char,
    kind: AtomicKind,
) -> impl Parser<char, RegexToken, Error = ParserError> + Clone {
    just(symbol)
        .to(AtomicSpecial::new(kind))
        .positioned()
        .map(RegexToken::Atomic)
}

/// `x-y` inside a character list
pub fn range() -> impl Parser<char, ListItem, Error = ParserError> + Clone {
    any()
        .then_ignore(just('-'))
        .then(any())
        .map(|(start, end)| CharRange::new(start, end))
        .positioned()
        .map(ListItem::Range)
        .labelled("range")
}

fn single_char() -> impl Parser<char, ListItem, Error = ParserError> + Clone {
    char_except(']')
        .map(SingleChar::new)
        .positioned()
        .map(ListItem::Single)
}

/// A range has to be attempted first so `a-b` binds as one item
pub fn list_item() -> impl Parser<char, ListItem, Error = ParserError> + Clone {
    range().or(single_char())
}

pub fn char_list() -> impl Parser<char, RegexToken, Error = ParserError> + Clone {
    just('[')
        .ignore_then(just('^').or_not().map(|caret| caret.is_some()))
        .then(list_item().repeated().at_least(1))
        .then_ignore(just(']'))
        .map(|(exclude, items)| CharList::new(items, exclude))
        .positioned()
        .map(RegexToken::CharList)
        .labelled("character list")
}

/// Repetition operator. Lazy forms must precede their greedy prefixes.
pub fn quantifier() -> impl Parser<char, RegexToken, Error = ParserError> + Clone {
    let bounded = just('{')
        .ignore_then(integer().or_not())
        .then_ignore(just(','))
        .then(integer().or_not())
        .then_ignore(just('}'))
        .map(|(min, max)| Quantifier::new(min.unwrap_or(0), max));

    choice((
        just("*?").to(Quantifier::lazy(0, None)),
        just("+?").to(Quantifier::lazy(1, None)),
        just('+').to(Quantifier::new(1, None)),
        just('*').to(Quantifier::new(0, None)),
        just('?').to(Quantifier::new(0, Some(1))),
        bounded,
    ))
    .positioned()
    .map(RegexToken::Quantifier)
    .labelled("quantifier")
}

/// Parenthesized group around a nested pattern
pub fn group<P>(pattern: P) -> impl Parser<char, RegexToken, Error = ParserError> + Clone
where
    P: Parser<char, Vec<RegexToken>, Error = ParserError> + Clone,
{
    let name = just("?<")
        .ignore_then(run_except('>'))
        .then_ignore(just('>'))
        .labelled("group name");

    just('(')
        .ignore_then(just("?:").or_not().map(|marker| marker.is_some()))
        .then(name.or_not())
        .then(pattern)
        .then_ignore(just(')'))
        .map(|((non_capturing, name), children)| Group::new(children, non_capturing, name))
        .positioned()
        .map(RegexToken::Group)
        .labelled("group")
}

/// One atom, or several separated by `|`. A single alternative stays bare.
pub fn quantifiable<G>(group: G) -> impl Parser<char, RegexToken, Error = ParserError> + Clone
where
    G: Parser<char, RegexToken, Error = ParserError> + Clone,
{
    choice((any_char(), escape(), char_list(), verbatim(), group))
        .separated_by(just('|'))
        .at_least(1)
        .map(|alternatives: Vec<RegexToken>| {
            match <[RegexToken; 1]>::try_from(alternatives) {
                Ok([single]) => single,
                Err(alternatives) => RegexToken::Alternations(Alternations::new(alternatives)),
            }
        })
        .positioned()
}

/// A quantifiable followed by an optional quantifier.
///
/// The quantifier is a sibling of its atom, never a wrapper around it.
pub fn quantifiable_with_optional_quantifier<G>(
    group: G,
) -> impl Parser<char, Vec<RegexToken>, Error = ParserError> + Clone
where
    G: Parser<char, RegexToken, Error = ParserError> + Clone,
{
    quantifiable(group)
        .then(quantifier().or_not())
        .map(|(atom, quantifier)| {
            let mut tokens = vec![atom];
            tokens.extend(quantifier);
            tokens
        })
}

/// A possibly empty sequence of quantified atoms; groups recurse into it
pub fn pattern() -> impl Parser<char, Vec<RegexToken>, Error = ParserError> + Clone {
    recursive(|pattern| {
        quantifiable_with_optional_quantifier(group(pattern))
            .repeated()
            .map(|runs: Vec<Vec<RegexToken>>| runs.into_iter().flatten().collect())
    })
}

/// The complete grammar: a pattern that must consume the whole input
pub fn regex() -> impl Parser<char, Vec<RegexToken>, Error = ParserError> + Clone {
    pattern().then_ignore(end())
}
