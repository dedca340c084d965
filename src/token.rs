//! The token closed set, ported from the distilled source's `TokenType` string constants.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of token kinds this pipeline ever produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    QuotedIdentifier,
    Identifier,
    String,
    Variable,
    ReservedDataType,
    ReservedParameterizedDataType,
    ReservedKeyword,
    ReservedFunctionName,
    ReservedKeywordPhrase,
    ReservedDataTypePhrase,
    ReservedSetOperation,
    ReservedClause,
    ReservedSelect,
    ReservedJoin,
    ArrayIdentifier,
    ArrayKeyword,
    Case,
    End,
    When,
    Else,
    Then,
    Limit,
    Between,
    And,
    Or,
    Xor,
    Operator,
    Comma,
    Asterisk,
    PropertyAccessOperator,
    OpenParen,
    CloseParen,
    LineComment,
    BlockComment,
    DisableComment,
    Number,
    NamedParameter,
    QuotedParameter,
    NumberedParameter,
    PositionalParameter,
    CustomParameter,
    Delimiter,
    Eof,
}

impl TokenKind {
    /// Whether this kind denotes one of the dialect's reserved-word categories, as opposed to
    /// a literal, an identifier, a comment, or punctuation.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::ReservedDataType
                | TokenKind::ReservedKeyword
                | TokenKind::ReservedFunctionName
                | TokenKind::ReservedKeywordPhrase
                | TokenKind::ReservedDataTypePhrase
                | TokenKind::ReservedClause
                | TokenKind::ReservedSelect
                | TokenKind::ReservedSetOperation
                | TokenKind::ReservedJoin
                | TokenKind::ArrayKeyword
                | TokenKind::Case
                | TokenKind::End
                | TokenKind::When
                | TokenKind::Else
                | TokenKind::Then
                | TokenKind::Limit
                | TokenKind::Between
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Xor
        )
    }

    pub fn is_logical_operator(self) -> bool {
        matches!(self, TokenKind::And | TokenKind::Or | TokenKind::Xor)
    }

    pub fn is_parameter(self) -> bool {
        matches!(
            self,
            TokenKind::NamedParameter
                | TokenKind::QuotedParameter
                | TokenKind::NumberedParameter
                | TokenKind::PositionalParameter
                | TokenKind::CustomParameter
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::LineComment | TokenKind::BlockComment | TokenKind::DisableComment
        )
    }
}

/// A single lexed token.
///
/// `raw` is the original source spelling; `text` is the canonical (upper-cased,
/// whitespace-collapsed) form used for reserved-word comparisons and emitted when the
/// formatter's casing mode is not `preserve`. `key` is set only on parameter tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
    pub text: String,
    pub key: Option<String>,
    pub start: usize,
    pub preceding_whitespace: String,
}

impl Token {
    pub fn eof(start: usize) -> Token {
        Token {
            kind: TokenKind::Eof,
            raw: "«EOF»".to_string(),
            text: "«EOF»".to_string(),
            key: None,
            start,
            preceding_whitespace: String::new(),
        }
    }
}

/// Upper-case, then collapse runs of ASCII whitespace to a single space. Used to build the
/// canonical `text` of reserved words and merged phrases.
pub fn to_canonical(raw: &str) -> String {
    let upper = raw.to_ascii_uppercase();
    let mut out = String::with_capacity(upper.len());
    let mut last_was_space = false;
    for ch in upper.chars() {
        if ch.is_whitespace() {
            if !last_was_space && !out.is_empty() {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}
