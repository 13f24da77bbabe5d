//! Regex dialect parser
//!
//! Converts a raw pattern body into a span-aware token tree using chumsky
//! combinators.
//!
//! ## Modules
//!
//! - `combinators` - Span stamping and small building blocks
//! - `grammar` - The rule set for the supported dialect
//! - `error` - Parse failure reporting
//! - `api` - Entry points

pub mod api;
pub mod combinators;
pub mod error;
pub mod grammar;

pub use api::{parse_regex, primitive_tokens, try_parse_regex};
pub use combinators::{positioned, ParserError, PositionedExt};
pub use error::ParseFailure;
