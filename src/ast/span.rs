//! Character spans for regex AST nodes
//!
//! Offsets count characters, not bytes, from the start of the pattern body.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A contiguous run of characters in the pattern (offset and length)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub offset: usize,
    pub length: usize,
}

impl Span {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// One past the last character covered
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Index of the last character covered, if the span is not empty
    pub fn last(&self) -> Option<usize> {
        self.end().checked_sub(1).filter(|_| self.length > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Check if a character index falls inside this span
    pub fn contains(&self, index: usize) -> bool {
        index >= self.offset && index < self.end()
    }

    /// Check if another span lies entirely within this one
    pub fn encloses(&self, other: Span) -> bool {
        other.offset >= self.offset && other.end() <= self.end()
    }

    /// Check if two spans share at least one character
    pub fn overlaps(&self, other: Span) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }

    pub fn as_range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            offset: range.start,
            length: range.end.saturating_sub(range.start),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.offset, self.end())
    }
}
