//! Parser combinator building blocks for the regex grammar.
//!
//! chumsky supplies sequencing, ordered choice, repetition and recursion over
//! a `char` stream. This module adds the pieces the grammar needs on top:
//! span stamping for any `Positioned` node, single-character predicates and
//! repetition counts.

use chumsky::prelude::*;
use chumsky::text;
use std::ops::Range;

use crate::ast::{Positioned, Span};

/// Type alias for parser error
pub type ParserError = Simple<char>;

/// Wrap a parser so the produced node receives the span it matched.
///
/// The span is the start offset before parsing plus the number of characters
/// consumed. Failures pass through untouched.
pub fn positioned<P, O>(parser: P) -> impl Parser<char, O, Error = ParserError> + Clone
where
    P: Parser<char, O, Error = ParserError> + Clone,
    O: Positioned,
{
    parser.map_with_span(|mut node: O, span: Range<usize>| {
        node.set_span(Span::from(span));
        node
    })
}

/// Method form of [`positioned`], available on every parser of positioned nodes
pub trait PositionedExt<O>: Parser<char, O, Error = ParserError> + Clone + Sized
where
    O: Positioned,
{
    fn positioned(self) -> impl Parser<char, O, Error = ParserError> + Clone {
        positioned(self)
    }
}

impl<P, O> PositionedExt<O> for P
where
    P: Parser<char, O, Error = ParserError> + Clone,
    O: Positioned,
{
}

/// Match one character that is not in `set`
pub fn char_outside(set: &'static [char]) -> impl Parser<char, char, Error = ParserError> + Clone {
    filter(move |c: &char| !set.contains(c))
}

/// Match one character other than `excluded`
pub fn char_except(excluded: char) -> impl Parser<char, char, Error = ParserError> + Clone {
    filter(move |c: &char| *c != excluded)
}

/// Match a non-empty run of characters other than `excluded`
pub fn run_except(excluded: char) -> impl Parser<char, String, Error = ParserError> + Clone {
    char_except(excluded)
        .repeated()
        .at_least(1)
        .map(|chars: Vec<char>| chars.into_iter().collect::<String>())
}

/// Decimal repetition count. Values that do not fit in `u32` are a parse error.
pub fn integer() -> impl Parser<char, u32, Error = ParserError> + Clone {
    text::digits(10).try_map(|digits: String, span: Range<usize>| {
        digits.parse::<u32>().map_err(|err| {
            Simple::custom(span, format!("invalid repetition count {}: {}", digits, err))
        })
    })
}
