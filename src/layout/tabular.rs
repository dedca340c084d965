//! Tabular-style keyword padding (SPEC_FULL.md §4.6): in `TabularLeft`/`TabularRight` indent
//! styles, a clause/join/logical-operator/limit keyword's first word is padded to 9 columns so
//! the following tokens line up across clauses.

use crate::options::IndentStyle;
use crate::token::TokenKind;

const PAD_WIDTH: usize = 9;

/// Pads `token_text` per `indent_style`. `Standard` style passes the text through unchanged.
pub fn to_tabular_format(token_text: &str, indent_style: IndentStyle) -> String {
    if indent_style == IndentStyle::Standard {
        return token_text.to_string();
    }
    let (head, tail) = if token_text.len() >= 10 && token_text.contains(' ') {
        let mut parts = token_text.splitn(2, ' ');
        (parts.next().unwrap().to_string(), parts.next().unwrap_or("").to_string())
    } else {
        (token_text.to_string(), String::new())
    };

    let padded = if indent_style == IndentStyle::TabularLeft {
        let pad = PAD_WIDTH.saturating_sub(head.len());
        format!("{head}{}", " ".repeat(pad))
    } else if head.len() < PAD_WIDTH {
        format!("{}{head}", " ".repeat(PAD_WIDTH - head.len()))
    } else {
        head
    };

    if tail.is_empty() {
        padded
    } else {
        format!("{padded} {tail}")
    }
}

/// Whether this token kind gets tabular padding at all: clauses, select, set-ops, joins,
/// `LIMIT`, and the logical operators.
pub fn is_tabular_token(kind: TokenKind) -> bool {
    kind.is_logical_operator()
        || matches!(
            kind,
            TokenKind::ReservedClause
                | TokenKind::ReservedSelect
                | TokenKind::ReservedSetOperation
                | TokenKind::ReservedJoin
                | TokenKind::Limit
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_style_passes_through() {
        assert_eq!(to_tabular_format("SELECT", IndentStyle::Standard), "SELECT");
    }

    #[test]
    fn left_style_pads_short_head() {
        assert_eq!(to_tabular_format("AND", IndentStyle::TabularLeft), "AND      ");
    }

    #[test]
    fn right_style_pads_short_head() {
        assert_eq!(to_tabular_format("AND", IndentStyle::TabularRight), "      AND");
    }

    #[test]
    fn long_multiword_clause_keeps_first_word_then_tail() {
        assert_eq!(
            to_tabular_format("LEFT OUTER JOIN", IndentStyle::TabularLeft),
            "LEFT      OUTER JOIN"
        );
    }
}
