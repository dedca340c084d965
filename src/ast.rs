//! The tagged AST produced by [`crate::parser`] and consumed by [`crate::formatter`]
//! (SPEC_FULL.md §3, §4.4).
//!
//! Every node is a [`Node`]: a shared `comments` slot plus a [`NodeKind`] payload. The
//! distilled source instead embeds a `LeadingComments`/`TrailingComments` pair into every one
//! of its two dozen node structs via a `BaseNode` it manually re-declares per type; wrapping
//! once here removes that duplication entirely (see DESIGN.md).

use crate::token::TokenKind;

/// Comments immediately preceding or following a node, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comments {
    pub leading: Vec<Node>,
    pub trailing: Vec<Node>,
}

impl Comments {
    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub comments: Comments,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(kind: NodeKind) -> Node {
        Node { comments: Comments::default(), kind }
    }

    pub fn with_leading(mut self, comments: Vec<Node>) -> Node {
        self.comments.leading = comments;
        self
    }

    pub fn with_trailing(mut self, comments: Vec<Node>) -> Node {
        self.comments.trailing = comments;
        self
    }
}

/// A single reserved-word or punctuation leaf: carries both the token kind it was classified
/// as and its raw/canonical spellings, so the formatter can apply casing without re-deriving
/// it from `kind` alone.
///
/// Unlike the other node shapes, a `KeywordNode` often lives embedded directly in a parent
/// variant (`Clause::name_keyword`, `LimitClause::limit_kw`, ...) rather than wrapped in a
/// `Node`, so it carries its own `comments` slot instead of relying on a wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordNode {
    pub token_kind: TokenKind,
    pub text: String,
    pub raw: String,
    pub comments: Comments,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Statement { children: Vec<Node>, has_semicolon: bool },
    Clause { name_keyword: KeywordNode, children: Vec<Node> },
    SetOperation { name_keyword: KeywordNode, children: Vec<Node> },
    FunctionCall { name_keyword: KeywordNode, parenthesis: Box<Node> },
    ParameterizedDataType { data_type: KeywordNode, parenthesis: Box<Node> },
    ArraySubscript { array: Box<Node>, parenthesis: Box<Node> },
    PropertyAccess { object: Box<Node>, operator: String, property: Box<Node> },
    Parenthesis { children: Vec<Node>, open: &'static str, close: &'static str },
    BetweenPredicate { between_kw: KeywordNode, expr1: Vec<Node>, and_kw: KeywordNode, expr2: Vec<Node> },
    CaseExpression { case_kw: KeywordNode, end_kw: KeywordNode, expr: Vec<Node>, clauses: Vec<Node> },
    CaseWhen { when_kw: KeywordNode, condition: Vec<Node>, then_kw: KeywordNode, result: Vec<Node> },
    CaseElse { else_kw: KeywordNode, result: Vec<Node> },
    LimitClause { limit_kw: KeywordNode, count: Vec<Node>, offset: Option<Vec<Node>> },
    AllColumnsAsterisk,
    Literal { text: String },
    Identifier { text: String, quoted: bool },
    DataType { text: String, raw: String },
    Keyword(KeywordNode),
    Parameter { key: Option<String>, text: String },
    Operator { text: String },
    Comma,
    LineComment { text: String, preceding_whitespace: String },
    BlockComment { text: String, preceding_whitespace: String },
    DisableComment { text: String, preceding_whitespace: String },
}

impl NodeKind {
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            NodeKind::LineComment { .. } | NodeKind::BlockComment { .. } | NodeKind::DisableComment { .. }
        )
    }
}
