//! Byte-cursor matchers: primitive scanners tried in priority order by [`super::engine`].
//!
//! Per SPEC_FULL.md §9's regex-usage note, every matcher here is a hand-written scan over
//! the remaining input except the disable-region scanner and the `OPERATOR(...)` keyword
//! form, which use a fixed, compile-once [`regex::Regex`] (see [`super::engine::DISABLE_REGION`]
//! and [`super::engine::OPERATOR_KEYWORD_FORM`]).

use crate::dialect::{IdentChars, QuoteForm};

/// Consumes a maximal run of Unicode whitespace from the start of `input`. Returns the byte
/// length consumed.
pub fn match_whitespace(input: &str) -> usize {
    input
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

/// A nested `/* ... */` block comment: any `/*` inside increments a depth counter, any `*/`
/// decrements it, and the match succeeds only when depth returns to zero. An unterminated
/// comment does not match at all (SPEC_FULL.md §9's intentional open question: the `/` is
/// later re-lexed as an operator).
pub fn match_nested_block_comment(input: &str) -> Option<usize> {
    if !input.starts_with("/*") {
        return None;
    }
    let bytes = input.as_bytes();
    let mut i = 2;
    let mut depth = 1;
    while i < bytes.len() {
        if input[i..].starts_with("/*") {
            depth += 1;
            i += 2;
        } else if input[i..].starts_with("*/") {
            depth -= 1;
            i += 2;
            if depth == 0 {
                return Some(i);
            }
        } else {
            i += next_char_len(input, i);
        }
    }
    None
}

fn next_char_len(input: &str, at: usize) -> usize {
    input[at..].chars().next().map(|c| c.len_utf8()).unwrap_or(1)
}

/// A line comment with one of the configured prefixes, running to (not including) `\r`/`\n`
/// or end of input.
pub fn match_line_comment<'a>(input: &str, prefixes: &[&'a str]) -> Option<usize> {
    for prefix in prefixes {
        if input.starts_with(prefix) {
            let rest = &input[prefix.len()..];
            let body_len = rest
                .find(['\r', '\n'])
                .unwrap_or(rest.len());
            return Some(prefix.len() + body_len);
        }
    }
    None
}

/// A number literal: optional leading `-`, then hex (`0x...`), binary (`0b...`), or decimal
/// with optional fraction and exponent. Must not be immediately followed by an identifier
/// continuation byte (so `1a` is not `1` then `a`, but a lex failure falls through to the
/// identifier matcher instead).
pub fn match_number(input: &str, underscores_allowed: bool) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i += 1;
        while i < bytes.len() && matches!(bytes[i], b' ' | b'\t' | b'\n' | b'\r') {
            i += 1;
        }
    }
    let start_digits = i;

    let is_digit_or_underscore = |b: u8| b.is_ascii_digit() || (underscores_allowed && b == b'_');

    if input[i..].starts_with("0x") || input[i..].starts_with("0X") {
        i += 2;
        let hex_start = i;
        while i < bytes.len() && (bytes[i].is_ascii_hexdigit() || (underscores_allowed && bytes[i] == b'_')) {
            i += 1;
        }
        if i == hex_start {
            return None;
        }
        return finish_number(input, i, start_digits);
    }
    if input[i..].starts_with("0b") || input[i..].starts_with("0B") {
        i += 2;
        let bin_start = i;
        while i < bytes.len() && (bytes[i] == b'0' || bytes[i] == b'1' || (underscores_allowed && bytes[i] == b'_')) {
            i += 1;
        }
        if i == bin_start {
            return None;
        }
        return finish_number(input, i, start_digits);
    }

    let mut saw_digit = false;
    while i < bytes.len() && is_digit_or_underscore(bytes[i]) {
        if bytes[i].is_ascii_digit() {
            saw_digit = true;
        }
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && is_digit_or_underscore(bytes[i]) {
            if bytes[i].is_ascii_digit() {
                saw_digit = true;
            }
            i += 1;
        }
    }
    if !saw_digit {
        return None;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    finish_number(input, i, start_digits)
}

fn finish_number(input: &str, end: usize, start_digits: usize) -> Option<usize> {
    if end == start_digits {
        return None;
    }
    if let Some(next) = input[end..].chars().next() {
        if next.is_alphabetic() || next == '_' || next == '$' {
            return None;
        }
    }
    Some(end)
}

/// An identifier: first codepoint from the dialect's `first` set (letter, underscore, mark,
/// or a configured extra codepoint), rest from `rest` plus digits; interior dashes allowed
/// when `dashes` is set, but an identifier may not end with one.
pub fn match_identifier(input: &str, chars: &IdentChars) -> Option<usize> {
    let mut it = input.char_indices().peekable();
    let (_, first) = *it.peek()?;
    if !is_ident_start(first, chars) {
        return None;
    }
    let mut end = 0;
    let mut last_was_dash = false;
    for (i, c) in input.char_indices() {
        if i == 0 {
            end = c.len_utf8();
            last_was_dash = c == '-';
            continue;
        }
        if is_ident_part(c, chars) {
            end = i + c.len_utf8();
            last_was_dash = c == '-';
        } else {
            break;
        }
    }
    if last_was_dash {
        // trim trailing dash(es): an identifier may not end with one.
        while end > 0 && input[..end].ends_with('-') {
            end -= 1;
        }
    }
    if end == 0 { None } else { Some(end) }
}

fn is_ident_start(c: char, chars: &IdentChars) -> bool {
    c.is_alphabetic() || c == '_' || chars.first.contains(c) || (chars.allow_first_char_number && c.is_ascii_digit())
}

fn is_ident_part(c: char, chars: &IdentChars) -> bool {
    c.is_alphanumeric() || c == '_' || chars.rest.contains(c) || (chars.dashes && c == '-')
}

/// A quoted form from `forms`: the first form whose opening delimiter matches wins. Returns
/// `(kind_index, total_byte_len)`, where `kind_index` is the index into `forms` that matched
/// (callers use it to tell prefixed-with-E strings apart from plain ones, etc., if needed).
pub fn match_quoted(input: &str, forms: &[QuoteForm]) -> Option<(usize, usize)> {
    for (idx, form) in forms.iter().enumerate() {
        if let Some(len) = match_one_quoted(input, form) {
            return Some((idx, len));
        }
    }
    None
}

fn match_one_quoted(input: &str, form: &QuoteForm) -> Option<usize> {
    match form {
        QuoteForm::Plain {
            quote,
            doubled_quote_escape,
            backslash_escape,
        } => match_plain_quoted(input, 0, quote, *doubled_quote_escape, *backslash_escape),
        QuoteForm::Prefixed {
            quote,
            prefixes,
            require_prefix,
            doubled_quote_escape,
            backslash_escape,
        } => {
            for prefix in *prefixes {
                if input.len() >= prefix.len() && input[..prefix.len()].eq_ignore_ascii_case(prefix) {
                    if let Some(len) =
                        match_plain_quoted(input, prefix.len(), quote, *doubled_quote_escape, *backslash_escape)
                    {
                        return Some(len);
                    }
                }
            }
            if *require_prefix {
                None
            } else {
                match_plain_quoted(input, 0, quote, *doubled_quote_escape, *backslash_escape)
            }
        }
        QuoteForm::DollarTag => match_dollar_quoted(input),
    }
}

fn match_plain_quoted(
    input: &str,
    prefix_len: usize,
    quote: &str,
    doubled_quote_escape: bool,
    backslash_escape: bool,
) -> Option<usize> {
    if !input[prefix_len..].starts_with(quote) {
        return None;
    }
    let mut i = prefix_len + quote.len();
    let bytes = input.as_bytes();
    loop {
        if i >= bytes.len() {
            return None;
        }
        if backslash_escape && input[i..].starts_with('\\') {
            i += 1;
            i += next_char_len(input, i);
            continue;
        }
        if input[i..].starts_with(quote) {
            if doubled_quote_escape && input[i + quote.len()..].starts_with(quote) {
                i += quote.len() * 2;
                continue;
            }
            return Some(i + quote.len());
        }
        i += next_char_len(input, i);
    }
}

fn match_dollar_quoted(input: &str) -> Option<usize> {
    if !input.starts_with('$') {
        return None;
    }
    let mut i = 1;
    let bytes = input.as_bytes();
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
        i += 1;
    }
    if i >= bytes.len() || bytes[i] != b'$' {
        return None;
    }
    i += 1;
    let tag = &input[..i];
    let body_start = i;
    let rel = input[body_start..].find(tag)?;
    Some(body_start + rel + tag.len())
}

/// The longest operator from `operators` (plus the fixed base set) matching at the start of
/// `input`.
pub fn match_operator(input: &str, extra_operators: &[&str]) -> Option<usize> {
    const BASE: &[&str] = &["<>", "<=", ">=", "!=", "+", "-", "/", ">", "<", "="];
    let mut best: Option<usize> = None;
    for op in BASE.iter().chain(extra_operators.iter()) {
        if input.starts_with(op) {
            let len = op.len();
            if best.map(|b| len > b).unwrap_or(true) {
                best = Some(len);
            }
        }
    }
    best
}

/// An open/close paren: `(`/`)`, or one of the dialect's `extra_parens` pairs (e.g. `[`/`]`).
pub fn match_open_paren(input: &str, extra: &[(&str, &str)]) -> Option<(&'static str, usize)> {
    if input.starts_with('(') {
        return Some(("(", 1));
    }
    for (open, _) in extra {
        if input.starts_with(open) {
            return Some((leak_paren(open), open.len()));
        }
    }
    None
}

pub fn match_close_paren(input: &str, extra: &[(&str, &str)]) -> Option<(&'static str, usize)> {
    if input.starts_with(')') {
        return Some((")", 1));
    }
    for (_, close) in extra {
        if input.starts_with(close) {
            return Some((leak_paren(close), close.len()));
        }
    }
    None
}

/// `extra_parens` is always one of a small fixed set of static strings (`[`, `]`, `{`, `}`)
/// declared in the dialect table, so matching on them and returning the canonical `'static`
/// spelling is just as correct and a good deal simpler than threading a lifetime through
/// every token.
fn leak_paren(s: &str) -> &'static str {
    match s {
        "[" => "[",
        "]" => "]",
        "{" => "{",
        "}" => "}",
        _ => "(",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_simple_number() {
        assert_eq!(match_number("123 ", false), Some(3));
        assert_eq!(match_number("1.5e-3x", false), Some(6));
        assert_eq!(match_number("0x1F ", false), Some(4));
    }

    #[test]
    fn rejects_number_followed_by_ident_char() {
        assert_eq!(match_number("1a", false), None);
    }

    #[test]
    fn matches_nested_block_comment() {
        assert_eq!(match_nested_block_comment("/* a /* b */ c */ rest"), Some(17));
        assert_eq!(match_nested_block_comment("/* unterminated"), None);
    }

    #[test]
    fn matches_dollar_quoted_string() {
        assert_eq!(match_dollar_quoted("$tag$hello$tag$rest"), Some(15));
    }
}
