//! # regex-highlight
//!
//! Structural highlighting for regular-expression literals.
//!
//! A pattern body is parsed into a span-aware token tree, and the tree is
//! flattened into an ordered sequence of primitive decoration tokens (kind
//! plus exact character span) that a renderer can paint directly.
//!
//! ```text
//! pattern -> parsing::grammar -> [RegexToken] -> flatten -> [PrimitiveRegexToken]
//! ```
//!
//! ## Modules
//!
//! - [`parsing`] - chumsky grammar for the supported dialect
//! - [`ast`] - token model and flattening
//! - [`style`] - highlight classes and palettes
//! - [`formats`] - tree, token listing, JSON and ANSI output
//! - [`extract`] - finding regex literals in host source lines
//! - [`config`] - layered configuration
//! - [`testing`] - fluent assertions for parsed patterns

pub mod ast;
pub mod config;
pub mod extract;
pub mod formats;
pub mod parsing;
pub mod style;
pub mod testing;

pub use ast::{
    flatten_all, AstNode, Flatten, PrimitiveRegexToken, PrimitiveTokenKind, RegexToken, Span,
};
pub use parsing::{parse_regex, primitive_tokens, try_parse_regex, ParseFailure};
