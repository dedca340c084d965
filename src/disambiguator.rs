//! Context-sensitive token disambiguation, run once after classification
//! (SPEC_FULL.md §4.3). Each pass is a pure per-token rewrite that looks only at its
//! immediate non-comment neighbors, ported from the distilled source's
//! `disambiguate_tokens.go`.

use crate::token::{Token, TokenKind};

/// Runs every disambiguation pass in order and returns the rewritten stream.
pub fn disambiguate(tokens: Vec<Token>) -> Vec<Token> {
    let mut tokens = tokens;
    property_name_keyword_to_ident(&mut tokens);
    func_name_to_ident(&mut tokens);
    tokens = map_tokens(tokens, data_type_to_parameterized_data_type);
    tokens = map_tokens(tokens, ident_to_array_ident);
    tokens = map_tokens(tokens, data_type_to_array_keyword);
    clause_after_join_to_ident(&mut tokens);
    tokens
}

fn map_tokens(tokens: Vec<Token>, f: impl Fn(&Token, usize, &[Token]) -> Option<TokenKind>) -> Vec<Token> {
    let mut out = tokens.clone();
    for (i, tok) in tokens.iter().enumerate() {
        if let Some(kind) = f(tok, i, &tokens) {
            out[i].kind = kind;
        }
    }
    out
}

/// Demoting a reserved-word token back to a plain identifier also restores its original
/// spelling: `text` was canonicalized (upper-cased) by the classifier on the assumption the
/// word was reserved, but a demoted token needs `text` to read like any other identifier's,
/// i.e. equal to `raw`.
fn reset_to_identifier(tokens: &mut [Token], i: usize) {
    tokens[i].kind = TokenKind::Identifier;
    tokens[i].text = tokens[i].raw.clone();
}

/// A reserved word immediately before or after `.` is actually a property name, e.g.
/// `t.select` or `select.t` where `select` is someone's column name.
fn property_name_keyword_to_ident(tokens: &mut Vec<Token>) {
    for i in 0..tokens.len() {
        if !tokens[i].kind.is_reserved() {
            continue;
        }
        let touches_dot = prev_non_comment(tokens, i).map(|t| t.kind) == Some(TokenKind::PropertyAccessOperator)
            || next_non_comment(tokens, i).map(|t| t.kind) == Some(TokenKind::PropertyAccessOperator);
        if touches_dot {
            reset_to_identifier(tokens, i);
        }
    }
}

/// A reserved function name not immediately followed by `(` is being used as a plain
/// identifier (e.g. a column literally named `count`).
fn func_name_to_ident(tokens: &mut Vec<Token>) {
    for i in 0..tokens.len() {
        if tokens[i].kind != TokenKind::ReservedFunctionName {
            continue;
        }
        let followed_by_paren = matches!(next_non_comment(tokens, i), Some(next) if is_open_paren(next));
        if !followed_by_paren {
            reset_to_identifier(tokens, i);
        }
    }
}

/// A reserved data type immediately followed by `(` is parameterized, e.g. `NUMERIC(10, 2)`.
fn data_type_to_parameterized_data_type(token: &Token, i: usize, tokens: &[Token]) -> Option<TokenKind> {
    if token.kind != TokenKind::ReservedDataType {
        return None;
    }
    match next_non_comment(tokens, i) {
        Some(next) if is_open_paren(next) => Some(TokenKind::ReservedParameterizedDataType),
        _ => None,
    }
}

/// An identifier immediately followed by `[` is an array reference, e.g. `tags[1]`.
fn ident_to_array_ident(token: &Token, i: usize, tokens: &[Token]) -> Option<TokenKind> {
    if token.kind != TokenKind::Identifier {
        return None;
    }
    match next_non_comment(tokens, i) {
        Some(next) if is_open_bracket(next) => Some(TokenKind::ArrayIdentifier),
        _ => None,
    }
}

/// A reserved data type immediately followed by `[` is the `ARRAY`-suffix form, e.g. `INT[]`.
fn data_type_to_array_keyword(token: &Token, i: usize, tokens: &[Token]) -> Option<TokenKind> {
    if token.kind != TokenKind::ReservedDataType {
        return None;
    }
    match next_non_comment(tokens, i) {
        Some(next) if is_open_bracket(next) => Some(TokenKind::ArrayKeyword),
        _ => None,
    }
}

/// Rust-native addition (not present in the distilled source): a reserved clause keyword
/// immediately after a reserved join keyword is an identifier, e.g. a table literally named
/// `using` in `JOIN using ON ...` — `USING` was classified as a clause keyword but here names
/// a table.
fn clause_after_join_to_ident(tokens: &mut Vec<Token>) {
    for i in 0..tokens.len() {
        if tokens[i].kind != TokenKind::ReservedClause {
            continue;
        }
        let after_join = matches!(prev_non_comment(tokens, i), Some(prev) if prev.kind == TokenKind::ReservedJoin);
        if after_join {
            reset_to_identifier(tokens, i);
        }
    }
}

fn prev_non_comment(tokens: &[Token], index: usize) -> Option<&Token> {
    let mut i = index;
    while i > 0 {
        i -= 1;
        if !tokens[i].kind.is_comment() {
            return Some(&tokens[i]);
        }
    }
    None
}

fn next_non_comment(tokens: &[Token], index: usize) -> Option<&Token> {
    let mut i = index;
    while i + 1 < tokens.len() {
        i += 1;
        if !tokens[i].kind.is_comment() {
            return Some(&tokens[i]);
        }
    }
    None
}

fn is_open_paren(t: &Token) -> bool {
    t.kind == TokenKind::OpenParen && t.text == "("
}

fn is_open_bracket(t: &Token) -> bool {
    t.kind == TokenKind::OpenParen && t.text == "["
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token {
            kind,
            raw: text.to_string(),
            text: text.to_string(),
            key: None,
            start: 0,
            preceding_whitespace: String::new(),
        }
    }

    #[test]
    fn reserved_word_after_dot_becomes_identifier() {
        let tokens = vec![
            tok(TokenKind::Identifier, "t"),
            tok(TokenKind::PropertyAccessOperator, "."),
            tok(TokenKind::ReservedClause, "SELECT"),
        ];
        let out = disambiguate(tokens);
        assert_eq!(out[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn function_name_without_paren_becomes_identifier() {
        let tokens = vec![tok(TokenKind::ReservedFunctionName, "COUNT"), tok(TokenKind::Comma, ",")];
        let out = disambiguate(tokens);
        assert_eq!(out[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn data_type_before_paren_is_parameterized() {
        let tokens = vec![tok(TokenKind::ReservedDataType, "NUMERIC"), tok(TokenKind::OpenParen, "(")];
        let out = disambiguate(tokens);
        assert_eq!(out[0].kind, TokenKind::ReservedParameterizedDataType);
    }

    #[test]
    fn clause_immediately_after_join_is_identifier() {
        let tokens = vec![tok(TokenKind::ReservedJoin, "JOIN"), tok(TokenKind::ReservedClause, "USING")];
        let out = disambiguate(tokens);
        assert_eq!(out[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn demoted_reserved_word_keeps_its_original_spelling() {
        let mut update_kw = tok(TokenKind::ReservedKeyword, "update");
        update_kw.text = "UPDATE".to_string(); // canonicalized upper-case, as the classifier leaves it
        let tokens = vec![tok(TokenKind::Identifier, "t"), tok(TokenKind::PropertyAccessOperator, "."), update_kw];
        let out = disambiguate(tokens);
        assert_eq!(out[2].kind, TokenKind::Identifier);
        assert_eq!(out[2].text, "update");
    }
}
