//! AST traits - Common interfaces for uniform node access

use super::primitive::PrimitiveRegexToken;
use super::span::Span;

/// Common interface for all AST nodes and list items
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    fn span(&self) -> Span;

    /// Zero-based character offset of the node in the pattern
    fn offset(&self) -> usize {
        self.span().offset
    }

    /// Number of characters the node covers
    fn length(&self) -> usize {
        self.span().length
    }
}

/// Nodes that receive their span from the rule that matched them.
///
/// Parsers stamp the span exactly once, when the rule succeeds.
pub trait Positioned {
    fn set_span(&mut self, span: Span);
}

/// Projection of a node onto primitive decoration tokens
pub trait Flatten {
    /// Append this node's primitive tokens, left to right
    fn flatten_into(&self, out: &mut Vec<PrimitiveRegexToken>);

    /// Collect this node's primitive tokens. Pure and repeatable.
    fn flatten(&self) -> Vec<PrimitiveRegexToken> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }
}
