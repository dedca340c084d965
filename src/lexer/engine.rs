//! Drives the matchers in fixed priority order, assembling the raw token stream.
//!
//! Mirrors the distilled source's `Tokenizer`/`TokenizerEngine` split: a dialect's
//! [`crate::dialect::TokenizerOptions`] describes *what* to match, this module supplies the
//! *order* in which rules are tried and turns a non-match into a parse error with line/column.

use std::sync::LazyLock;

use regex::Regex;

use crate::dialect::{Dialect, ParamTypesOverride};
use crate::error::Error;
use crate::token::{to_canonical, Token, TokenKind};

use super::matchers::{
    match_close_paren, match_identifier, match_line_comment, match_nested_block_comment,
    match_number, match_open_paren, match_operator, match_quoted, match_whitespace,
};

/// `/* sql-formatter-disable */ ... /* sql-formatter-enable */` (or end of input), dot
/// matching newline. One of the two fixed, compile-once regexes this crate uses
/// (SPEC_FULL.md §9).
static DISABLE_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^/\* *sql-formatter-disable *\*/.*?(?:/\* *sql-formatter-enable *\*/|$)").unwrap()
});

/// PostgreSQL's `OPERATOR(...)` keyword form, e.g. `OPERATOR(pg_catalog.+)`.
static OPERATOR_KEYWORD_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^OPERATOR *\([^)]+\)").unwrap());

/// Tokenizes `input` under `dialect`, with `param_overrides` merged over the dialect's
/// default parameter-type configuration.
pub fn tokenize(
    input: &str,
    dialect: &Dialect,
    param_overrides: &ParamTypesOverride,
) -> Result<Vec<Token>, Error> {
    let opts = &dialect.tokenizer_options;
    let param_types = opts.param_types.merged_with(param_overrides);
    for custom in &param_types.custom {
        if custom.regex.is_empty() {
            return Err(Error::config(
                "Empty regex given in custom paramTypes.".to_string(),
            ));
        }
    }
    let custom_patterns: Vec<Regex> = param_types
        .custom
        .iter()
        .map(|c| Regex::new(&format!("^(?:{})", c.regex)).expect("validated custom paramTypes regex"))
        .collect();

    let mut tokens = Vec::new();
    let mut rest = input;
    let mut offset = 0usize;

    loop {
        let ws_len = match_whitespace(rest);
        let preceding_whitespace = rest[..ws_len].to_string();
        rest = &rest[ws_len..];
        offset += ws_len;

        if rest.is_empty() {
            break;
        }

        let Some((kind, raw_len, key)) =
            try_match_one(rest, opts, &param_types, &custom_patterns)
        else {
            return Err(make_parse_error(input, offset, dialect.name));
        };

        let raw = &rest[..raw_len];
        let text = canonical_text(kind, raw);
        tokens.push(Token {
            kind,
            raw: raw.to_string(),
            text,
            key,
            start: offset,
            preceding_whitespace,
        });
        log::debug!("lexed {:?} {:?} at byte {}", kind, raw, offset);

        rest = &rest[raw_len..];
        offset += raw_len;
    }

    tokens.push(Token::eof(offset));
    Ok(tokens)
}

fn canonical_text(kind: TokenKind, raw: &str) -> String {
    match kind {
        TokenKind::String
        | TokenKind::QuotedIdentifier
        | TokenKind::Variable
        | TokenKind::LineComment
        | TokenKind::BlockComment
        | TokenKind::DisableComment
        | TokenKind::Number
        | TokenKind::NamedParameter
        | TokenKind::QuotedParameter
        | TokenKind::NumberedParameter
        | TokenKind::PositionalParameter
        | TokenKind::CustomParameter => raw.to_string(),
        _ => to_canonical(raw),
    }
}

/// Tries every lexer rule in priority order (SPEC_FULL.md §4.1). Returns the matched kind,
/// byte length, and (for parameter tokens) the extracted substitution key.
fn try_match_one(
    rest: &str,
    opts: &crate::dialect::TokenizerOptions,
    param_types: &crate::dialect::ParamTypes,
    custom_patterns: &[Regex],
) -> Option<(TokenKind, usize, Option<String>)> {
    if let Some(m) = DISABLE_REGION.find(rest) {
        return Some((TokenKind::DisableComment, m.end(), None));
    }
    if opts.nested_block_comments {
        if let Some(len) = match_nested_block_comment(rest) {
            return Some((TokenKind::BlockComment, len, None));
        }
    }
    if let Some(len) = match_line_comment(rest, opts.line_comment_types) {
        return Some((TokenKind::LineComment, len, None));
    }
    if let Some((_, len)) = match_quoted(rest, opts.ident_types) {
        return Some((TokenKind::QuotedIdentifier, len, None));
    }
    if let Some(len) = match_number(rest, opts.underscores_in_numbers) {
        return Some((TokenKind::Number, len, None));
    }
    if opts.operator_keyword {
        if let Some(m) = OPERATOR_KEYWORD_FORM.find(rest) {
            return Some((TokenKind::Operator, m.end(), None));
        }
    }
    if let Some(result) = try_match_parameter(rest, param_types, custom_patterns) {
        return Some(result);
    }
    if let Some((_, len)) = match_quoted(rest, opts.variable_types) {
        return Some((TokenKind::Variable, len, None));
    }
    if let Some((_, len)) = match_quoted(rest, opts.string_types) {
        return Some((TokenKind::String, len, None));
    }
    if let Some(len) = match_identifier(rest, &opts.ident_chars) {
        return Some((TokenKind::Identifier, len, None));
    }
    if rest.starts_with(';') {
        return Some((TokenKind::Delimiter, 1, None));
    }
    if rest.starts_with(',') {
        return Some((TokenKind::Comma, 1, None));
    }
    if let Some((_, len)) = match_open_paren(rest, opts.extra_parens) {
        return Some((TokenKind::OpenParen, len, None));
    }
    if let Some((_, len)) = match_close_paren(rest, opts.extra_parens) {
        return Some((TokenKind::CloseParen, len, None));
    }
    if let Some(len) = match_operator(rest, opts.operators) {
        return Some((TokenKind::Operator, len, None));
    }
    if rest.starts_with('*') {
        return Some((TokenKind::Asterisk, 1, None));
    }
    for op in std::iter::once(&".").chain(opts.property_access_operators.iter()) {
        if rest.starts_with(*op) {
            return Some((TokenKind::PropertyAccessOperator, op.len(), None));
        }
    }
    None
}

fn try_match_parameter(
    rest: &str,
    param_types: &crate::dialect::ParamTypes,
    custom_patterns: &[Regex],
) -> Option<(TokenKind, usize, Option<String>)> {
    for prefix in &param_types.named {
        if rest.starts_with(prefix) {
            let body = &rest[prefix.len()..];
            let ident_len = body
                .char_indices()
                .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
                .last()
                .map(|(i, c)| i + c.len_utf8())
                .unwrap_or(0);
            if ident_len > 0 {
                let key = body[..ident_len].to_string();
                return Some((TokenKind::NamedParameter, prefix.len() + ident_len, Some(key)));
            }
        }
    }
    for prefix in &param_types.quoted {
        if rest.starts_with(prefix) {
            let body = &rest[prefix.len()..];
            if body.starts_with('"') {
                if let Some(end) = body[1..].find('"') {
                    let raw_len = prefix.len() + 1 + end + 1;
                    let key = body[1..1 + end].to_string();
                    return Some((TokenKind::QuotedParameter, raw_len, Some(key)));
                }
            }
        }
    }
    for prefix in &param_types.numbered {
        if rest.starts_with(prefix) {
            let body = &rest[prefix.len()..];
            let digit_len = body.bytes().take_while(|b| b.is_ascii_digit()).count();
            if digit_len > 0 {
                let key = body[..digit_len].to_string();
                return Some((TokenKind::NumberedParameter, prefix.len() + digit_len, Some(key)));
            }
        }
    }
    if param_types.positional && rest.starts_with('?') {
        return Some((TokenKind::PositionalParameter, 1, None));
    }
    for pattern in custom_patterns {
        if let Some(m) = pattern.find(rest) {
            if m.start() == 0 {
                let key = m.as_str().to_string();
                return Some((TokenKind::CustomParameter, m.end(), Some(key)));
            }
        }
    }
    None
}

fn make_parse_error(input: &str, byte_offset: usize, dialect_name: &str) -> Error {
    let (line, column) = line_col_from_index(input, byte_offset);
    let rest = &input[byte_offset..];
    let excerpt: String = rest.chars().take(10).collect();
    let hint = format!("SQL dialect used: \"{dialect_name}\".");
    Error::Parse {
        message: format!("Unexpected {excerpt:?}"),
        line,
        column,
        hint,
    }
}

/// 1-based line/column, counted in codepoints from the start of `input`, for the byte offset
/// `index`.
pub(crate) fn line_col_from_index(input: &str, index: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for ch in input[..index].chars() {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
