//! Snapshot tests for the textual output formats and the CLI

use regex_highlight::formats::{to_token_listing, to_treeviz_str};
use regex_highlight::{flatten_all, parse_regex};
use std::process::Command;

fn tree(pattern: &str) -> String {
    to_treeviz_str(&parse_regex(pattern).expect("pattern parses"))
}

#[test]
fn test_tree_nested_groups() {
    insta::assert_snapshot!(tree("(a(b))"), @r#"
    └─ Group: capturing @0..6
      ├─ VerbatimString: "a" @1..2
      └─ Group: capturing @2..5
        └─ VerbatimString: "b" @3..4
    "#);
}

#[test]
fn test_tree_lists_quantifiers_and_alternations() {
    insta::assert_snapshot!(tree("[^0-9]+(?:x|y)*?"), @r#"
    ├─ CharList: not [0-9] @0..6
    │ └─ CharRange: '0'-'9' @2..5
    ├─ Quantifier: 1..inf @6..7
    ├─ Group: non-capturing @7..14
    │ └─ Alternations: 2 alternatives @10..13
    │   ├─ VerbatimString: "x" @10..11
    │   └─ VerbatimString: "y" @12..13
    └─ Quantifier: 0..inf lazy @14..16
    "#);
}

#[test]
fn test_tree_named_group_with_escape() {
    insta::assert_snapshot!(tree(r"(?<y>\d)"), @r#"
    └─ Group: named "y" @0..8
      ├─ AtomicSpecial: escape @5..6
      └─ VerbatimString: "d" @6..7
    "#);
}

#[test]
fn test_token_listing_char_list() {
    let pattern = "[^0-9]+";
    let tokens = flatten_all(&parse_regex(pattern).unwrap());
    insta::assert_snapshot!(to_token_listing(pattern, &tokens, true), @r#"
    0..1 OpenSquareBracket "["
    1..2 CharacterListNegation "^"
    2..3 RangeStart "0"
    3..4 RangeSymbol "-"
    4..5 RangeEnd "9"
    5..6 CloseSquareBracket "]"
    6..7 RepetitionsCount "+"
    "#);
}

#[test]
fn test_cli_parse_tree() {
    let output = Command::new(env!("CARGO_BIN_EXE_regex-hl"))
        .args(["parse", "a|b", "--format", "tree"])
        .output()
        .expect("failed to run regex-hl");

    assert!(output.status.success());
    insta::assert_snapshot!(String::from_utf8_lossy(&output.stdout), @r#"
    └─ Alternations: 2 alternatives @0..3
      ├─ VerbatimString: "a" @0..1
      └─ VerbatimString: "b" @2..3
    "#);
}

#[test]
fn test_cli_parse_rejects_invalid_pattern() {
    let output = Command::new(env!("CARGO_BIN_EXE_regex-hl"))
        .args(["parse", "(a", "--format", "tokens"])
        .output()
        .expect("failed to run regex-hl");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at offset 2"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_cli_scan_reports_locations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Sample.cs");
    std::fs::write(&path, "// header\nvar r = new Regex(\"a+\");\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_regex-hl"))
        .arg("scan")
        .arg(&path)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run regex-hl");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2:20: a+\n");
}

#[test]
fn test_cli_ansi_is_plain_when_redirected() {
    let output = Command::new(env!("CARGO_BIN_EXE_regex-hl"))
        .args(["parse", "[a-c]+(x|y)", "--format", "ansi"])
        .env_remove("NO_COLOR")
        .output()
        .expect("failed to run regex-hl");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[a-c]+(x|y)\n");
}
