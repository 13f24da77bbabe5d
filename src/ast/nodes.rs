//! Regex AST node definitions
//!
//! The set of node kinds is closed: `RegexToken` for pattern-level nodes and
//! `ListItem` for the members of a character list. Every node carries the
//! span stamped by the grammar rule that produced it.

use std::fmt;

use super::span::Span;
use super::traits::{AstNode, Positioned};

/// A top-level or nested element of a parsed pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexToken {
    Verbatim(VerbatimString),
    Atomic(AtomicSpecial),
    CharList(CharList),
    Quantifier(Quantifier),
    Group(Group),
    Alternations(Alternations),
}

/// A member of a character list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Single(SingleChar),
    Range(CharRange),
}

/// Maximal run of characters with no special meaning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbatimString {
    pub value: String,
    span: Span,
}

/// One-construct tokens that mean a single thing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomicKind {
    AnyChar,
    Escape,
    // Reserved: recognized by renderers, not produced by the grammar.
    Digit,
    NotDigit,
    Whitespace,
    NotWhitespace,
    WordBoundary,
    NotWordBoundary,
    WordCharacter,
    NotWordCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicSpecial {
    pub kind: AtomicKind,
    span: Span,
}

/// Bracketed character list, `[...]` or `[^...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharList {
    pub items: Vec<ListItem>,
    pub exclude: bool,
    span: Span,
}

/// Repetition operator following an atom. `max_amount == None` is unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantifier {
    pub min_amount: u32,
    pub max_amount: Option<u32>,
    pub is_lazy: bool,
    span: Span,
}

/// Parenthesized sub-pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub children: Vec<RegexToken>,
    pub non_capturing: bool,
    pub name: Option<String>,
    span: Span,
}

/// Two or more alternatives separated by `|`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternations {
    pub children: Vec<RegexToken>,
    span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleChar {
    pub value: char,
    span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharRange {
    pub start: char,
    pub end: char,
    span: Span,
}

// ============================================================================
// Constructors
// ============================================================================

impl VerbatimString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            span: Span::default(),
        }
    }
}

impl AtomicSpecial {
    pub fn new(kind: AtomicKind) -> Self {
        Self {
            kind,
            span: Span::default(),
        }
    }
}

impl CharList {
    pub fn new(items: Vec<ListItem>, exclude: bool) -> Self {
        Self {
            items,
            exclude,
            span: Span::default(),
        }
    }
}

impl Quantifier {
    pub fn new(min_amount: u32, max_amount: Option<u32>) -> Self {
        Self {
            min_amount,
            max_amount,
            is_lazy: false,
            span: Span::default(),
        }
    }

    pub fn lazy(min_amount: u32, max_amount: Option<u32>) -> Self {
        Self {
            is_lazy: true,
            ..Self::new(min_amount, max_amount)
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_amount.is_none()
    }
}

impl Group {
    pub fn new(children: Vec<RegexToken>, non_capturing: bool, name: Option<String>) -> Self {
        Self {
            children,
            non_capturing,
            name,
            span: Span::default(),
        }
    }
}

impl Alternations {
    pub fn new(children: Vec<RegexToken>) -> Self {
        Self {
            children,
            span: Span::default(),
        }
    }
}

impl SingleChar {
    pub fn new(value: char) -> Self {
        Self {
            value,
            span: Span::default(),
        }
    }
}

impl CharRange {
    pub fn new(start: char, end: char) -> Self {
        Self {
            start,
            end,
            span: Span::default(),
        }
    }
}

impl AtomicKind {
    pub fn name(&self) -> &'static str {
        match self {
            AtomicKind::AnyChar => "any character",
            AtomicKind::Escape => "escape",
            AtomicKind::Digit => "digit",
            AtomicKind::NotDigit => "not digit",
            AtomicKind::Whitespace => "whitespace",
            AtomicKind::NotWhitespace => "not whitespace",
            AtomicKind::WordBoundary => "word boundary",
            AtomicKind::NotWordBoundary => "not word boundary",
            AtomicKind::WordCharacter => "word character",
            AtomicKind::NotWordCharacter => "not word character",
        }
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl RegexToken {
    /// Nested tokens of groups and alternations; empty for leaves
    pub fn children(&self) -> &[RegexToken] {
        match self {
            RegexToken::Group(group) => &group.children,
            RegexToken::Alternations(alternations) => &alternations.children,
            _ => &[],
        }
    }

    pub fn as_verbatim(&self) -> Option<&VerbatimString> {
        match self {
            RegexToken::Verbatim(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_char_list(&self) -> Option<&CharList> {
        match self {
            RegexToken::CharList(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_quantifier(&self) -> Option<&Quantifier> {
        match self {
            RegexToken::Quantifier(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            RegexToken::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_alternations(&self) -> Option<&Alternations> {
        match self {
            RegexToken::Alternations(alternations) => Some(alternations),
            _ => None,
        }
    }
}

// ============================================================================
// Span stamping
// ============================================================================

macro_rules! impl_positioned {
    ($($node:ty),* $(,)?) => {
        $(
            impl Positioned for $node {
                fn set_span(&mut self, span: Span) {
                    self.span = span;
                }
            }
        )*
    };
}

impl_positioned!(
    VerbatimString,
    AtomicSpecial,
    CharList,
    Quantifier,
    Group,
    Alternations,
    SingleChar,
    CharRange,
);

impl Positioned for RegexToken {
    fn set_span(&mut self, span: Span) {
        match self {
            RegexToken::Verbatim(v) => v.set_span(span),
            RegexToken::Atomic(a) => a.set_span(span),
            RegexToken::CharList(l) => l.set_span(span),
            RegexToken::Quantifier(q) => q.set_span(span),
            RegexToken::Group(g) => g.set_span(span),
            RegexToken::Alternations(a) => a.set_span(span),
        }
    }
}

impl Positioned for ListItem {
    fn set_span(&mut self, span: Span) {
        match self {
            ListItem::Single(c) => c.set_span(span),
            ListItem::Range(r) => r.set_span(span),
        }
    }
}

// ============================================================================
// AstNode
// ============================================================================

impl AstNode for VerbatimString {
    fn node_type(&self) -> &'static str {
        "VerbatimString"
    }

    fn display_label(&self) -> String {
        format!("{:?}", self.value)
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl AstNode for AtomicSpecial {
    fn node_type(&self) -> &'static str {
        "AtomicSpecial"
    }

    fn display_label(&self) -> String {
        self.kind.name().to_string()
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl AstNode for CharList {
    fn node_type(&self) -> &'static str {
        "CharList"
    }

    fn display_label(&self) -> String {
        let items: Vec<String> = self.items.iter().map(|i| i.to_string()).collect();
        if self.exclude {
            format!("not [{}]", items.join(" "))
        } else {
            format!("[{}]", items.join(" "))
        }
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl AstNode for Quantifier {
    fn node_type(&self) -> &'static str {
        "Quantifier"
    }

    fn display_label(&self) -> String {
        let max = match self.max_amount {
            Some(max) => max.to_string(),
            None => "inf".to_string(),
        };
        if self.is_lazy {
            format!("{}..{} lazy", self.min_amount, max)
        } else {
            format!("{}..{}", self.min_amount, max)
        }
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl AstNode for Group {
    fn node_type(&self) -> &'static str {
        "Group"
    }

    fn display_label(&self) -> String {
        match (&self.name, self.non_capturing) {
            (Some(name), _) => format!("named {:?}", name),
            (None, true) => "non-capturing".to_string(),
            (None, false) => "capturing".to_string(),
        }
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl AstNode for Alternations {
    fn node_type(&self) -> &'static str {
        "Alternations"
    }

    fn display_label(&self) -> String {
        format!("{} alternatives", self.children.len())
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl AstNode for SingleChar {
    fn node_type(&self) -> &'static str {
        "SingleChar"
    }

    fn display_label(&self) -> String {
        format!("{:?}", self.value)
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl AstNode for CharRange {
    fn node_type(&self) -> &'static str {
        "CharRange"
    }

    fn display_label(&self) -> String {
        format!("{:?}-{:?}", self.start, self.end)
    }

    fn span(&self) -> Span {
        self.span
    }
}

impl AstNode for RegexToken {
    fn node_type(&self) -> &'static str {
        match self {
            RegexToken::Verbatim(v) => v.node_type(),
            RegexToken::Atomic(a) => a.node_type(),
            RegexToken::CharList(l) => l.node_type(),
            RegexToken::Quantifier(q) => q.node_type(),
            RegexToken::Group(g) => g.node_type(),
            RegexToken::Alternations(a) => a.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            RegexToken::Verbatim(v) => v.display_label(),
            RegexToken::Atomic(a) => a.display_label(),
            RegexToken::CharList(l) => l.display_label(),
            RegexToken::Quantifier(q) => q.display_label(),
            RegexToken::Group(g) => g.display_label(),
            RegexToken::Alternations(a) => a.display_label(),
        }
    }

    fn span(&self) -> Span {
        match self {
            RegexToken::Verbatim(v) => v.span(),
            RegexToken::Atomic(a) => a.span(),
            RegexToken::CharList(l) => l.span(),
            RegexToken::Quantifier(q) => q.span(),
            RegexToken::Group(g) => g.span(),
            RegexToken::Alternations(a) => a.span(),
        }
    }
}

impl AstNode for ListItem {
    fn node_type(&self) -> &'static str {
        match self {
            ListItem::Single(c) => c.node_type(),
            ListItem::Range(r) => r.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            ListItem::Single(c) => c.display_label(),
            ListItem::Range(r) => r.display_label(),
        }
    }

    fn span(&self) -> Span {
        match self {
            ListItem::Single(c) => c.span(),
            ListItem::Range(r) => r.span(),
        }
    }
}

impl fmt::Display for RegexToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.node_type(), self.display_label())
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListItem::Single(c) => write!(f, "{}", c.value),
            ListItem::Range(r) => write!(f, "{}-{}", r.start, r.end),
        }
    }
}
