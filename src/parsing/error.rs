//! Parse failure reporting

use chumsky::error::SimpleReason;

use super::combinators::ParserError;
use super::grammar::construct_starting_with;

/// Why a pattern could not be recognized.
///
/// Parsing is all-or-nothing: a failure never comes with a partial tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at offset {position}")]
pub struct ParseFailure {
    pub message: String,
    /// Character offset where recognition stopped
    pub position: usize,
    /// Names of the constructs that would have been accepted at `position`
    pub expected: Vec<String>,
}

impl ParseFailure {
    pub fn new(message: impl Into<String>, position: usize, expected: Vec<String>) -> Self {
        Self {
            message: message.into(),
            position,
            expected,
        }
    }

    /// Collapse chumsky's error list into one failure, keeping the error that
    /// got furthest into the input.
    pub(crate) fn from_errors(errors: Vec<ParserError>) -> Self {
        errors
            .into_iter()
            .max_by_key(|error| error.span().start)
            .map(Self::from_error)
            .unwrap_or_else(|| Self::new("pattern not recognized", 0, Vec::new()))
    }

    fn from_error(error: ParserError) -> Self {
        let position = error.span().start;

        let mut message = match error.reason() {
            SimpleReason::Custom(msg) => msg.clone(),
            SimpleReason::Unclosed { delimiter, .. } => {
                format!("unclosed delimiter {}", describe(Some(delimiter)))
            }
            SimpleReason::Unexpected => format!("unexpected {}", describe(error.found())),
        };
        if let Some(label) = error.label() {
            message.push_str(&format!(" while parsing {}", label));
        }

        let mut expected: Vec<String> = error
            .expected()
            .map(|expected| match expected {
                Some(c) => construct_starting_with(*c)
                    .map(str::to_string)
                    .unwrap_or_else(|| describe(Some(c))),
                None => describe(None),
            })
            .collect();
        // A verbatim run can start wherever any other atom can
        if expected.iter().any(|name| ATOM_NAMES.contains(&name.as_str())) {
            expected.push("verbatim".to_string());
        }
        expected.sort();
        expected.dedup();
        if let Some(label) = error.label() {
            if !expected.iter().any(|name| name == label) {
                expected.push(label.to_string());
            }
        }

        Self {
            message,
            position,
            expected,
        }
    }
}

const ATOM_NAMES: &[&str] = &["any character", "character list", "escape", "group"];

fn describe(c: Option<&char>) -> String {
    match c {
        Some(c) => format!("{:?}", c),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chumsky::prelude::*;

    #[test]
    fn test_unexpected_char() {
        let errors = just::<char, char, ParserError>('a')
            .then_ignore(end())
            .parse("ab")
            .unwrap_err();
        let failure = ParseFailure::from_errors(errors);

        assert_eq!(failure.position, 1);
        assert_eq!(failure.message, "unexpected 'b'");
        assert_eq!(failure.expected, vec!["end of input".to_string()]);
    }

    #[test]
    fn test_unexpected_end_of_input() {
        let errors = just::<char, _, ParserError>("ab").parse("a").unwrap_err();
        let failure = ParseFailure::from_errors(errors);

        assert!(failure.message.starts_with("unexpected "));
        assert!(failure.expected.iter().any(|e| e == "'a'" || e == "'b'"));
    }

    #[test]
    fn test_display() {
        let failure = ParseFailure::new("unexpected ')'", 3, vec!["'a'".to_string()]);
        assert_eq!(failure.to_string(), "unexpected ')' at offset 3");
    }

    #[test]
    fn test_empty_error_list() {
        let failure = ParseFailure::from_errors(Vec::new());
        assert_eq!(failure.position, 0);
        assert!(failure.expected.is_empty());
    }

    #[test]
    fn test_expected_lists_construct_names() {
        let failure = crate::parsing::parse_regex("a||b").unwrap_err();

        assert_eq!(failure.position, 2);
        for name in ["any character", "character list", "escape", "group", "verbatim"] {
            assert!(
                failure.expected.iter().any(|e| e == name),
                "{} missing from {:?}",
                name,
                failure.expected
            );
        }
        assert!(!failure.expected.iter().any(|e| e == "'('"));
    }

    #[test]
    fn test_unclosed_group_expects_more_pattern() {
        let failure = crate::parsing::parse_regex("(a").unwrap_err();

        assert_eq!(failure.position, 2);
        assert!(failure.expected.iter().any(|e| e == "verbatim"));
        assert!(failure.expected.iter().any(|e| e == "')'"));
    }
}
