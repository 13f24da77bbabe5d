//! Property-based tests for parsing and flattening

use proptest::prelude::*;
use regex_highlight::testing::assert_well_ordered;
use regex_highlight::{flatten_all, parse_regex, AstNode, RegexToken};

/// Characters that never start a construct
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _=!@#%,;:<>\\]}-]{1,30}"
}

fn atom() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,3}",
        Just(".".to_string()),
        Just("\\".to_string()),
        "\\[\\^?[a-z0-9]{1,3}\\]",
        "\\[[a-c]-[x-z]\\]",
    ]
}

fn quantifier() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("*".to_string()),
        Just("+".to_string()),
        Just("?".to_string()),
        Just("*?".to_string()),
        Just("+?".to_string()),
        (proptest::option::of(0u32..20), proptest::option::of(0u32..20)).prop_map(
            |(min, max)| {
                let show = |n: Option<u32>| n.map(|n| n.to_string()).unwrap_or_default();
                format!("{{{},{}}}", show(min), show(max))
            }
        ),
    ]
}

/// Patterns the grammar accepts by construction
fn valid_pattern() -> impl Strategy<Value = String> {
    let alternation = prop::collection::vec(atom(), 1..4).prop_map(|atoms| atoms.join("|"));
    let leaf = (alternation, quantifier()).prop_map(|(a, q)| a + &q);

    leaf.prop_recursive(3, 32, 4, |inner| {
        let alternative = prop_oneof![atom(), inner.clone().prop_map(|p| format!("({})", p))];
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(|parts| parts.concat()),
            (prop::collection::vec(alternative, 2..4), quantifier())
                .prop_map(|(alternatives, q)| alternatives.join("|") + &q),
            (
                prop_oneof![Just("("), Just("(?:"), Just("(?<name>")],
                prop::collection::vec(inner, 0..3),
                quantifier(),
            )
                .prop_map(|(open, parts, q)| format!("{}{}){}", open, parts.concat(), q)),
        ]
    })
}

/// Arbitrary strings over the dialect's alphabet, mostly invalid
fn noisy_pattern() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'a', 'b', '.', '\\', '[', ']', '^', '-', '(', ')', '|', '*', '+', '?', '{', '}', ',',
            '1', ':', '<', '>',
        ]),
        0..24,
    )
    .prop_map(String::from_iter)
}

fn assert_children_enclosed(tokens: &[RegexToken]) {
    for token in tokens {
        for child in token.children() {
            assert!(
                token.span().encloses(child.span()),
                "{} does not enclose {}",
                token,
                child
            );
        }
        assert_children_enclosed(token.children());
    }
}

fn assert_covers_input(pattern: &str, tokens: &[RegexToken]) {
    let chars: Vec<char> = pattern.chars().collect();
    let mut rebuilt = String::new();
    let mut cursor = 0;
    for token in tokens {
        assert_eq!(token.offset(), cursor, "gap before {}", token);
        rebuilt.extend(&chars[token.span().as_range()]);
        cursor = token.span().end();
    }
    assert_eq!(rebuilt, pattern);
}

proptest! {
    #[test]
    fn test_plain_text_is_single_verbatim(text in plain_text()) {
        let tokens = parse_regex(&text).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].offset(), 0);
        prop_assert_eq!(tokens[0].length(), text.chars().count());
        prop_assert_eq!(&tokens[0].as_verbatim().unwrap().value, &text);
    }

    #[test]
    fn test_valid_patterns_parse(pattern in valid_pattern()) {
        let tokens = parse_regex(&pattern);
        prop_assert!(tokens.is_ok(), "{:?} rejected: {:?}", pattern, tokens);
    }

    #[test]
    fn test_top_level_spans_rebuild_input(pattern in valid_pattern()) {
        let tokens = parse_regex(&pattern).unwrap();
        assert_covers_input(&pattern, &tokens);
        assert_children_enclosed(&tokens);
    }

    #[test]
    fn test_flattening_is_well_ordered(pattern in valid_pattern()) {
        let tokens = parse_regex(&pattern).unwrap();
        let primitives = flatten_all(&tokens);
        assert_well_ordered(&primitives);
        let len = pattern.chars().count();
        prop_assert!(primitives.iter().all(|t| t.end() <= len));
    }

    #[test]
    fn test_accepted_noise_is_consistent(pattern in noisy_pattern()) {
        if let Ok(tokens) = parse_regex(&pattern) {
            assert_covers_input(&pattern, &tokens);
            assert_children_enclosed(&tokens);
            assert_well_ordered(&flatten_all(&tokens));
        }
    }

    #[test]
    fn test_failure_position_is_in_bounds(pattern in noisy_pattern()) {
        if let Err(failure) = parse_regex(&pattern) {
            prop_assert!(failure.position <= pattern.chars().count());
        }
    }
}
