//! Output formats for parsed patterns
//!
//! - `to_treeviz_str` - the AST as a box-drawing tree
//! - `to_token_listing` - one primitive token per line
//! - `to_json` - primitive tokens as a JSON array
//! - `render_ansi` - the pattern painted with terminal colors

use crossterm::style::{style, Colored, Stylize};

use crate::ast::{AstNode, ListItem, PrimitiveRegexToken, RegexToken};
use crate::style::Palette;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(tokens: &[RegexToken]) -> String {
    let mut result = String::new();
    append_tokens(&mut result, tokens, "");
    result
}

fn append_line(result: &mut String, node: &impl AstNode, prefix: &str, is_last: bool) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&node.display_label(), 30);

    result.push_str(&format!(
        "{}{} {}: {} @{}\n",
        prefix,
        connector,
        node.node_type(),
        display_label,
        node.span()
    ));

    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn append_tokens(result: &mut String, tokens: &[RegexToken], prefix: &str) {
    for (i, token) in tokens.iter().enumerate() {
        let is_last = i == tokens.len() - 1;
        let new_prefix = append_line(result, token, prefix, is_last);

        match token {
            RegexToken::CharList(list) => append_list_items(result, &list.items, &new_prefix),
            RegexToken::Group(_) | RegexToken::Alternations(_) => {
                append_tokens(result, token.children(), &new_prefix)
            }
            RegexToken::Verbatim(_) | RegexToken::Atomic(_) | RegexToken::Quantifier(_) => {}
        }
    }
}

fn append_list_items(result: &mut String, items: &[ListItem], prefix: &str) {
    for (i, item) in items.iter().enumerate() {
        append_line(result, item, prefix, i == items.len() - 1);
    }
}

/// Characters of `pattern` covered by `token`, clamped to the pattern
fn covered_text(chars: &[char], token: &PrimitiveRegexToken) -> String {
    let start = token.start.min(chars.len());
    let end = token.end().min(chars.len());
    chars[start..end].iter().collect()
}

pub fn to_token_listing(
    pattern: &str,
    tokens: &[PrimitiveRegexToken],
    show_offsets: bool,
) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut result = String::new();
    for token in tokens {
        let text = covered_text(&chars, token);
        if show_offsets {
            result.push_str(&format!("{} {} {:?}\n", token.span(), token.kind, text));
        } else {
            result.push_str(&format!("{} {:?}\n", token.kind, text));
        }
    }
    result
}

pub fn to_json(tokens: &[PrimitiveRegexToken]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

/// Paint each primitive token with its palette color.
///
/// Characters no token covers are copied through unstyled. Tokens must be in
/// flattening order; a token overlapping one already painted is skipped.
/// With `NO_COLOR` set the pattern comes back as plain text.
pub fn render_ansi(pattern: &str, tokens: &[PrimitiveRegexToken], palette: &Palette) -> String {
    paint(pattern, tokens, palette, !Colored::ansi_color_disabled())
}

fn paint(
    pattern: &str,
    tokens: &[PrimitiveRegexToken],
    palette: &Palette,
    colors_enabled: bool,
) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut result = String::new();
    let mut cursor = 0;

    for token in tokens {
        let start = token.start.min(chars.len());
        if start < cursor {
            continue;
        }
        result.extend(&chars[cursor..start]);

        let text = covered_text(&chars, token);
        match palette.color_for(token.kind) {
            Some(color) if colors_enabled => {
                result.push_str(&style(text).on(color).to_string())
            }
            _ => result.push_str(&text),
        }
        cursor = token.end().min(chars.len());
    }

    result.extend(&chars[cursor..]);
    result
}
