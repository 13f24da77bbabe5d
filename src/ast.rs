//! AST definitions for regex patterns
//!
//! ## Modules
//!
//! - `span` - Character spans attached to every node
//! - `nodes` - The closed set of node kinds
//! - `primitive` - Primitive decoration tokens and their vocabulary
//! - `flatten` - Projection from nodes to primitive tokens
//! - `traits` - Uniform node access

pub mod flatten;
pub mod nodes;
pub mod primitive;
pub mod span;
pub mod traits;

pub use flatten::flatten_all;
pub use nodes::{
    Alternations, AtomicKind, AtomicSpecial, CharList, CharRange, Group, ListItem, Quantifier,
    RegexToken, SingleChar, VerbatimString,
};
pub use primitive::{PrimitiveRegexToken, PrimitiveTokenKind};
pub use span::Span;
pub use traits::{AstNode, Flatten, Positioned};
