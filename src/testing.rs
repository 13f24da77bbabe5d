//! Fluent assertion API for parsed patterns
//!
//! # Example
//!
//! ```rust,ignore
//! let tokens = parse_regex("(a|b)+").unwrap();
//!
//! assert_tokens(&tokens)
//!     .count(2)
//!     .token(0, |t| {
//!         t.assert_group().children(|c| {
//!             c.count(1).token(0, |t| {
//!                 t.assert_alternations().count(2);
//!             });
//!         });
//!     })
//!     .token(1, |t| {
//!         t.assert_quantifier().bounds(1, None);
//!     });
//! ```

use crate::ast::{
    AstNode, AtomicKind, CharList, Group, ListItem, PrimitiveRegexToken, Quantifier, RegexToken,
    Span,
};

// ============================================================================
// Entry Points
// ============================================================================

/// Create an assertion builder for a sequence of sibling tokens
pub fn assert_tokens(tokens: &[RegexToken]) -> TokensAssertion<'_> {
    TokensAssertion {
        tokens,
        context: "tokens".to_string(),
    }
}

/// Assert that primitive tokens are ordered by start and never overlap
pub fn assert_well_ordered(tokens: &[PrimitiveRegexToken]) {
    for pair in tokens.windows(2) {
        assert!(
            pair[0].start <= pair[1].start,
            "Primitive tokens out of order: {} before {}",
            pair[0],
            pair[1]
        );
        assert!(
            pair[0].end() <= pair[1].start,
            "Primitive tokens overlap: {} and {}",
            pair[0],
            pair[1]
        );
    }
}

fn summarize(tokens: &[RegexToken]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Sequence Assertions
// ============================================================================

pub struct TokensAssertion<'a> {
    tokens: &'a [RegexToken],
    context: String,
}

impl<'a> TokensAssertion<'a> {
    /// Assert the number of tokens
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.tokens.len(),
            expected,
            "{}: Expected {} tokens, found {}: [{}]",
            self.context,
            expected,
            self.tokens.len(),
            summarize(self.tokens)
        );
        self
    }

    /// Assert on a specific token by index
    pub fn token<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TokenAssertion<'a>),
    {
        assert!(
            index < self.tokens.len(),
            "{}: Token index {} out of bounds ({} tokens)",
            self.context,
            index,
            self.tokens.len()
        );
        assertion(TokenAssertion {
            token: &self.tokens[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Assert on the sibling covering character `offset`
    pub fn token_at<F>(self, offset: usize, assertion: F) -> Self
    where
        F: FnOnce(TokenAssertion<'a>),
    {
        let Some(token) = self.tokens.iter().find(|t| t.span().contains(offset)) else {
            panic!(
                "{}: No token covers offset {}: [{}]",
                self.context,
                offset,
                summarize(self.tokens)
            )
        };
        assertion(TokenAssertion {
            token,
            context: format!("{}@{}", self.context, offset),
        });
        self
    }

    /// Assert that sibling spans are contiguous, starting at `offset`
    pub fn contiguous_from(self, offset: usize) -> Self {
        let mut expected = offset;
        for (i, token) in self.tokens.iter().enumerate() {
            assert_eq!(
                token.offset(),
                expected,
                "{}[{}]: Expected to start at {}, found {}",
                self.context,
                i,
                expected,
                token
            );
            expected = token.span().end();
        }
        self
    }
}

// ============================================================================
// Token Assertions
// ============================================================================

pub struct TokenAssertion<'a> {
    token: &'a RegexToken,
    context: String,
}

impl<'a> TokenAssertion<'a> {
    /// Assert the token's span
    pub fn span(self, offset: usize, length: usize) -> Self {
        assert_eq!(
            self.token.span(),
            Span::new(offset, length),
            "{}: Wrong span for {}",
            self.context,
            self.token
        );
        self
    }

    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context, expected, self.token
        )
    }

    /// Assert this token is a verbatim string with the given value
    pub fn assert_verbatim(self, value: &str) -> Self {
        match self.token {
            RegexToken::Verbatim(v) => assert_eq!(
                v.value, value,
                "{}: Verbatim value mismatch",
                self.context
            ),
            _ => self.mismatch("VerbatimString"),
        }
        self
    }

    /// Assert this token is an atomic special of the given kind
    pub fn assert_atomic(self, kind: AtomicKind) -> Self {
        match self.token {
            RegexToken::Atomic(a) => assert_eq!(a.kind, kind, "{}: Atomic kind", self.context),
            _ => self.mismatch("AtomicSpecial"),
        }
        self
    }

    pub fn assert_char_list(self) -> CharListAssertion<'a> {
        match self.token {
            RegexToken::CharList(list) => CharListAssertion {
                list,
                context: self.context,
            },
            _ => self.mismatch("CharList"),
        }
    }

    pub fn assert_quantifier(self) -> QuantifierAssertion<'a> {
        match self.token {
            RegexToken::Quantifier(quantifier) => QuantifierAssertion {
                quantifier,
                context: self.context,
            },
            _ => self.mismatch("Quantifier"),
        }
    }

    pub fn assert_group(self) -> GroupAssertion<'a> {
        match self.token {
            RegexToken::Group(group) => GroupAssertion {
                group,
                context: self.context,
            },
            _ => self.mismatch("Group"),
        }
    }

    /// Assert this token is an alternation and return assertions on its branches
    pub fn assert_alternations(self) -> TokensAssertion<'a> {
        match self.token.as_alternations() {
            Some(alternations) => TokensAssertion {
                tokens: &alternations.children,
                context: format!("{}.alternatives", self.context),
            },
            None => self.mismatch("Alternations"),
        }
    }
}

// ============================================================================
// Node-specific Assertions
// ============================================================================

pub struct CharListAssertion<'a> {
    list: &'a CharList,
    context: String,
}

impl<'a> CharListAssertion<'a> {
    pub fn exclude(self, expected: bool) -> Self {
        assert_eq!(
            self.list.exclude, expected,
            "{}: CharList exclude flag",
            self.context
        );
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.list.items.len(),
            expected,
            "{}: CharList item count",
            self.context
        );
        self
    }

    /// Assert item `index` is the single character `value`
    pub fn single(self, index: usize, value: char) -> Self {
        match self.list.items.get(index) {
            Some(ListItem::Single(c)) if c.value == value => {}
            other => panic!(
                "{}: Expected item {} to be {:?}, found {:?}",
                self.context, index, value, other
            ),
        }
        self
    }

    /// Assert item `index` is the range `start-end`
    pub fn range(self, index: usize, start: char, end: char) -> Self {
        match self.list.items.get(index) {
            Some(ListItem::Range(r)) if r.start == start && r.end == end => {}
            other => panic!(
                "{}: Expected item {} to be {:?}-{:?}, found {:?}",
                self.context, index, start, end, other
            ),
        }
        self
    }
}

pub struct QuantifierAssertion<'a> {
    quantifier: &'a Quantifier,
    context: String,
}

impl<'a> QuantifierAssertion<'a> {
    pub fn bounds(self, min: u32, max: Option<u32>) -> Self {
        assert_eq!(
            (self.quantifier.min_amount, self.quantifier.max_amount),
            (min, max),
            "{}: Quantifier bounds",
            self.context
        );
        self
    }

    pub fn unbounded(self, expected: bool) -> Self {
        assert_eq!(
            self.quantifier.is_unbounded(),
            expected,
            "{}: Quantifier unbounded",
            self.context
        );
        self
    }

    pub fn lazy(self, expected: bool) -> Self {
        assert_eq!(
            self.quantifier.is_lazy, expected,
            "{}: Quantifier laziness",
            self.context
        );
        self
    }
}

pub struct GroupAssertion<'a> {
    group: &'a Group,
    context: String,
}

impl<'a> GroupAssertion<'a> {
    pub fn non_capturing(self, expected: bool) -> Self {
        assert_eq!(
            self.group.non_capturing, expected,
            "{}: Group non-capturing flag",
            self.context
        );
        self
    }

    pub fn name(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.group.name.as_deref(),
            expected,
            "{}: Group name",
            self.context
        );
        self
    }

    /// Assert on the group's children
    pub fn children<F>(self, assertion: F) -> Self
    where
        F: FnOnce(TokensAssertion<'a>),
    {
        assertion(TokensAssertion {
            tokens: &self.group.children,
            context: format!("{}.children", self.context),
        });
        self
    }
}
