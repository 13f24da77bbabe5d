//! Locating regex literals in host source text
//!
//! Recognizes `new Regex("...")` constructor calls, optionally namespace
//! qualified, with either a regular or an `@"..."` verbatim string literal.
//! The pattern body is returned exactly as written in the source; literal
//! escapes are not decoded.

use once_cell::sync::Lazy;
use regex::Regex;

static CONSTRUCTOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"new\s*(?:System\.Text\.RegularExpressions\.|global::System\.Text\.RegularExpressions\.)?Regex\s*\(\s*(?:@"(?P<verbatim>(?:[^"]|"")*)"|"(?P<regular>(?:[^"\\]|\\.)*)")\s*[^)]*\)"#,
    )
    .expect("constructor regex is valid")
});

/// A pattern body found in one line of source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPattern {
    /// Zero-based line index
    pub line: usize,
    /// Character offset of the pattern body within its line
    pub column: usize,
    pub pattern: String,
}

/// Find every regex constructor call in a single line
pub fn extract_from_line(line: &str) -> Vec<(usize, String)> {
    CONSTRUCTOR_REGEX
        .captures_iter(line)
        .filter_map(|captures| {
            captures
                .name("verbatim")
                .or_else(|| captures.name("regular"))
        })
        .map(|body| {
            let column = line[..body.start()].chars().count();
            (column, body.as_str().to_string())
        })
        .collect()
}

/// Find every regex constructor call in a source text, line by line
pub fn extract_patterns(source: &str) -> Vec<ExtractedPattern> {
    source
        .lines()
        .enumerate()
        .flat_map(|(line, text)| {
            extract_from_line(text)
                .into_iter()
                .map(move |(column, pattern)| ExtractedPattern {
                    line,
                    column,
                    pattern,
                })
        })
        .collect()
}
