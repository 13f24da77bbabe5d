//! Public API for parsing regex patterns.

use chumsky::{BoxedParser, Parser};

use super::combinators::ParserError;
use super::error::ParseFailure;
use super::grammar::regex;
use crate::ast::{flatten_all, PrimitiveRegexToken, RegexToken};

thread_local! {
    // Built once per thread; chumsky's recursive parsers are not `Send`.
    static GRAMMAR: BoxedParser<'static, char, Vec<RegexToken>, ParserError> = regex().boxed();
}

/// Parse a pattern body into its top-level tokens.
///
/// The tokens cover the whole input contiguously. Any unrecognized input
/// fails the whole parse.
pub fn parse_regex(pattern: &str) -> Result<Vec<RegexToken>, ParseFailure> {
    match GRAMMAR.with(|grammar| grammar.parse(pattern)) {
        Ok(tokens) => {
            tracing::trace!(nodes = tokens.len(), "parsed regex pattern");
            Ok(tokens)
        }
        Err(errors) => {
            let failure = ParseFailure::from_errors(errors);
            tracing::debug!(
                position = failure.position,
                expected = ?failure.expected,
                "regex pattern rejected: {}",
                failure.message
            );
            Err(failure)
        }
    }
}

/// Best-effort parse: `None` when the pattern is not recognizable
pub fn try_parse_regex(pattern: &str) -> Option<Vec<RegexToken>> {
    parse_regex(pattern).ok()
}

/// Primitive decoration tokens for a pattern.
///
/// An unrecognizable pattern yields no tokens, so callers render nothing.
pub fn primitive_tokens(pattern: &str) -> Vec<PrimitiveRegexToken> {
    match try_parse_regex(pattern) {
        Some(tokens) => flatten_all(&tokens),
        None => {
            tracing::debug!("no decorations for unrecognized pattern");
            Vec::new()
        }
    }
}
