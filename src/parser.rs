//! The recursive-descent parser: token stream → tagged statement tree (SPEC_FULL.md §4.4).
//!
//! Ported close to line-for-line from the distilled source's `parser.go`, with one structural
//! change: every node is a [`crate::ast::Node`] wrapper instead of one Go struct per node
//! shape, so the many `addLeadingComments`/`addTrailingComments` type-switches collapse into a
//! couple of free functions operating on `Node::comments` directly.

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ast::{KeywordNode, Node, NodeKind};
use crate::error::Error;
use crate::token::{Token, TokenKind};

const DEFAULT_REMAINING_DEPTH: usize = 128;

/// An `Rc`-shared counter decremented on entry to any production that can recurse, incremented
/// again on drop.
struct RecursionCounter {
    remaining_depth: Rc<AtomicUsize>,
}

impl RecursionCounter {
    fn new(remaining_depth: usize) -> RecursionCounter {
        RecursionCounter { remaining_depth: Rc::new(remaining_depth.into()) }
    }

    fn try_decrease(&self) -> Result<DepthGuard, Error> {
        let old = self.remaining_depth.fetch_sub(1, Ordering::SeqCst);
        if old == 0 {
            self.remaining_depth.fetch_add(1, Ordering::SeqCst);
            Err(Error::RecursionLimitExceeded)
        } else {
            Ok(DepthGuard { remaining_depth: Rc::clone(&self.remaining_depth) })
        }
    }
}

struct DepthGuard {
    remaining_depth: Rc<AtomicUsize>,
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        self.remaining_depth.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Parser<'a> {
    tokens: Vec<Token>,
    index: usize,
    recursion: RecursionCounter,
    source: &'a str,
}

/// Parses an already classified-and-disambiguated token stream (with a trailing EOF token)
/// into the statement list. `source` is the original query text, kept around only so a parse
/// failure can be annotated with the offending token's line/column. Drops a trailing empty,
/// semicolon-less statement per SPEC_FULL.md §3's invariant.
pub fn parse(tokens: Vec<Token>, source: &str) -> Result<Vec<Node>, Error> {
    let mut parser =
        Parser { tokens, index: 0, recursion: RecursionCounter::new(DEFAULT_REMAINING_DEPTH), source };
    parser.parse_main()
}

impl<'a> Parser<'a> {
    /// Every production that aborts does so on its current token; that token's position is
    /// what "Invalid SQL" gets annotated with.
    fn invalid_sql(&self) -> Error {
        let tok = self.peek();
        let (line, column) = crate::lexer::engine::line_col_from_index(self.source, tok.start);
        log::warn!("parser fell through to Invalid SQL at {:?} (line {} column {})", tok.kind, line, column);
        Error::Parse { message: "Invalid SQL".to_string(), line, column, hint: String::new() }
    }

    fn parse_main(&mut self) -> Result<Vec<Node>, Error> {
        let mut statements = Vec::new();
        loop {
            if self.peek().kind == TokenKind::Eof {
                break;
            }
            statements.push(self.parse_statement()?);
            if self.peek().kind == TokenKind::Eof {
                break;
            }
        }
        if let Some(last) = statements.last() {
            if let NodeKind::Statement { children, has_semicolon } = &last.kind {
                if !*has_semicolon && children.is_empty() {
                    statements.pop();
                }
            }
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Node, Error> {
        let start = self.peek().start;
        let children = self.parse_expressions_or_clauses(&[TokenKind::Delimiter, TokenKind::Eof])?;
        let has_semicolon = if self.peek().kind == TokenKind::Delimiter {
            self.consume();
            true
        } else if self.peek().kind == TokenKind::Eof {
            false
        } else {
            return Err(self.invalid_sql());
        };
        log::debug!(
            "parsed statement at byte {} ({} children, semicolon: {})",
            start,
            children.len(),
            has_semicolon
        );
        Ok(Node::new(NodeKind::Statement { children, has_semicolon }))
    }

    fn parse_expressions_or_clauses(&mut self, stop: &[TokenKind]) -> Result<Vec<Node>, Error> {
        let mut expressions = Vec::new();
        loop {
            if self.is_stop(stop) || self.is_clause_start(&self.peek()) {
                break;
            }
            match self.parse_free_form_sql()? {
                Some(node) => expressions.push(node),
                None => break,
            }
        }
        let mut clauses = Vec::new();
        loop {
            if self.is_stop(stop) {
                break;
            }
            match self.parse_clause()? {
                Some(node) => clauses.push(node),
                None => break,
            }
        }
        expressions.extend(clauses);
        Ok(expressions)
    }

    fn parse_clause(&mut self) -> Result<Option<Node>, Error> {
        match self.peek().kind {
            TokenKind::Limit => Ok(Some(self.parse_limit_clause()?)),
            TokenKind::ReservedSelect => Ok(Some(self.parse_select_clause()?)),
            TokenKind::ReservedClause => Ok(Some(self.parse_other_clause()?)),
            TokenKind::ReservedSetOperation => Ok(Some(self.parse_set_operation()?)),
            _ => Ok(None),
        }
    }

    fn parse_limit_clause(&mut self) -> Result<Node, Error> {
        let limit_tok = self.consume();
        let trailing = self.parse_comments();
        let limit_kw = bare_keyword(&limit_tok).with_trailing_keyword(trailing);

        let expr1 = self.parse_expression_chain_trailing()?;
        let mut offset = None;
        let mut count = expr1;
        if self.peek().kind == TokenKind::Comma {
            self.consume();
            let mut expr2 = Vec::new();
            while let Some(node) = self.parse_free_form_sql()? {
                expr2.push(node);
            }
            offset = Some(count);
            count = expr2;
        }
        Ok(Node::new(NodeKind::LimitClause { limit_kw, count, offset }))
    }

    fn parse_select_clause(&mut self) -> Result<Node, Error> {
        let select_tok = self.consume();
        let name_keyword = bare_keyword(&select_tok);
        let mut children = Vec::new();
        if self.peek().kind == TokenKind::Asterisk {
            self.consume();
            children.push(Node::new(NodeKind::AllColumnsAsterisk));
            while let Some(node) = self.parse_free_form_sql()? {
                children.push(node);
            }
        } else if !self.is_clause_start(&self.peek())
            && !self.is_stop(&[TokenKind::Delimiter, TokenKind::Eof, TokenKind::CloseParen])
        {
            if let Some(node) = self.parse_asteriskless_free_form_sql()? {
                children.push(node);
                while let Some(next) = self.parse_free_form_sql()? {
                    children.push(next);
                }
            }
        }
        Ok(Node::new(NodeKind::Clause { name_keyword, children }))
    }

    fn parse_other_clause(&mut self) -> Result<Node, Error> {
        let clause_tok = self.consume();
        let name_keyword = bare_keyword(&clause_tok);
        let mut children = Vec::new();
        loop {
            if self.is_clause_start(&self.peek())
                || self.is_stop(&[TokenKind::Delimiter, TokenKind::Eof, TokenKind::CloseParen])
            {
                break;
            }
            match self.parse_free_form_sql()? {
                Some(node) => children.push(node),
                None => break,
            }
        }
        Ok(Node::new(NodeKind::Clause { name_keyword, children }))
    }

    fn parse_set_operation(&mut self) -> Result<Node, Error> {
        let op_tok = self.consume();
        let name_keyword = bare_keyword(&op_tok);
        let mut children = Vec::new();
        loop {
            if self.is_clause_start(&self.peek())
                || self.is_stop(&[TokenKind::Delimiter, TokenKind::Eof, TokenKind::CloseParen])
            {
                break;
            }
            match self.parse_free_form_sql()? {
                Some(node) => children.push(node),
                None => break,
            }
        }
        Ok(Node::new(NodeKind::SetOperation { name_keyword, children }))
    }

    fn parse_expression_chain_trailing(&mut self) -> Result<Vec<Node>, Error> {
        let mut items = Vec::new();
        loop {
            let Some(mut expr) = self.parse_expression()? else { break };
            let trailing = self.parse_comments();
            expr.comments.trailing.extend(trailing);
            items.push(expr);
            if !self.can_start_expression(&self.peek()) {
                break;
            }
        }
        Ok(items)
    }

    fn parse_expression(&mut self) -> Result<Option<Node>, Error> {
        if matches!(self.peek().kind, TokenKind::And | TokenKind::Or | TokenKind::Xor) {
            let kw = self.consume();
            return Ok(Some(Node::new(NodeKind::Keyword(bare_keyword(&kw)))));
        }
        self.parse_andless_expression()
    }

    fn parse_andless_expression(&mut self) -> Result<Option<Node>, Error> {
        if self.peek().kind == TokenKind::Asterisk {
            let tok = self.consume();
            return Ok(Some(Node::new(NodeKind::Operator { text: tok.text })));
        }
        self.parse_asteriskless_andless_expression()
    }

    fn parse_asteriskless_andless_expression(&mut self) -> Result<Option<Node>, Error> {
        if self.peek().kind == TokenKind::Between {
            return Ok(Some(self.parse_between_predicate()?));
        }
        if self.peek().kind == TokenKind::Case {
            return Ok(Some(self.parse_case_expression()?));
        }
        self.parse_atomic_expression()
    }

    fn parse_free_form_sql(&mut self) -> Result<Option<Node>, Error> {
        if self.peek().kind == TokenKind::Asterisk {
            self.consume();
            return Ok(Some(Node::new(NodeKind::Operator { text: "*".to_string() })));
        }
        self.parse_asteriskless_free_form_sql()
    }

    fn parse_asteriskless_free_form_sql(&mut self) -> Result<Option<Node>, Error> {
        if matches!(self.peek().kind, TokenKind::And | TokenKind::Or | TokenKind::Xor) {
            let kw = self.consume();
            return Ok(Some(Node::new(NodeKind::Keyword(bare_keyword(&kw)))));
        }
        if self.peek().kind == TokenKind::Comma {
            self.consume();
            return Ok(Some(Node::new(NodeKind::Comma)));
        }
        if self.peek().kind.is_comment() {
            return Ok(Some(self.parse_comment_node()));
        }
        if matches!(
            self.peek().kind,
            TokenKind::When | TokenKind::Then | TokenKind::Else | TokenKind::End
        ) {
            let kw = self.consume();
            return Ok(Some(Node::new(NodeKind::Keyword(bare_keyword(&kw)))));
        }
        self.parse_asteriskless_andless_expression()
    }

    fn parse_atomic_expression(&mut self) -> Result<Option<Node>, Error> {
        let _guard = self.recursion.try_decrease()?;
        let peek_kind = self.peek().kind;

        let mut base = if matches!(peek_kind, TokenKind::ArrayIdentifier | TokenKind::ArrayKeyword) {
            match self.parse_array_subscript()? {
                Some(node) => node,
                None => return Ok(None),
            }
        } else if peek_kind == TokenKind::ReservedFunctionName {
            match self.parse_function_call()? {
                Some(node) => node,
                None => return Ok(None),
            }
        } else if peek_kind == TokenKind::ReservedParameterizedDataType {
            let Some(mut node) = self.parse_parameterized_data_type()? else { return Ok(None) };
            if self.peek().kind == TokenKind::OpenParen && self.peek().text == "[" {
                let parens = self.parse_square_brackets()?;
                node = Node::new(NodeKind::ArraySubscript { array: Box::new(node), parenthesis: Box::new(parens) });
            }
            return Ok(Some(self.parse_property_access_chain(node)?));
        } else if peek_kind == TokenKind::OpenParen {
            self.parse_parenthesis()?
        } else if peek_kind == TokenKind::Operator {
            let tok = self.consume();
            Node::new(NodeKind::Operator { text: tok.text })
        } else if matches!(peek_kind, TokenKind::Identifier | TokenKind::QuotedIdentifier | TokenKind::Variable) {
            let tok = self.consume();
            let quoted = tok.kind != TokenKind::Identifier;
            Node::new(NodeKind::Identifier { text: tok.text, quoted })
        } else if peek_kind.is_parameter() {
            let tok = self.consume();
            Node::new(NodeKind::Parameter { key: tok.key.clone(), text: tok.text })
        } else if matches!(peek_kind, TokenKind::Number | TokenKind::String) {
            let tok = self.consume();
            Node::new(NodeKind::Literal { text: tok.text })
        } else if matches!(peek_kind, TokenKind::ReservedDataType | TokenKind::ReservedDataTypePhrase) {
            let tok = self.consume();
            let node = Node::new(NodeKind::DataType { text: tok.text, raw: tok.raw });
            return Ok(Some(self.wrap_array_suffix_then_property(node)?));
        } else if matches!(
            peek_kind,
            TokenKind::ReservedKeyword | TokenKind::ReservedKeywordPhrase | TokenKind::ReservedJoin
        ) {
            let tok = self.consume();
            let node = Node::new(NodeKind::Keyword(bare_keyword(&tok)));
            return Ok(Some(self.wrap_array_suffix_then_property(node)?));
        } else {
            return Ok(None);
        };

        base = self.parse_property_access_chain(base)?;
        Ok(Some(base))
    }

    /// Data types and bare keywords (unlike the other atomic bases) may take an `[...]` array
    /// suffix before the usual property-access chain.
    fn wrap_array_suffix_then_property(&mut self, node: Node) -> Result<Node, Error> {
        self.parse_property_access_chain(node)
    }

    fn parse_property_access_chain(&mut self, mut node: Node) -> Result<Node, Error> {
        loop {
            let (next, comment_count) = self.peek_after_comments();
            if next.kind != TokenKind::PropertyAccessOperator {
                break;
            }
            let trailing = self.consume_comments(comment_count);
            if !trailing.is_empty() {
                node.comments.trailing.extend(trailing);
            }
            let op_tok = self.consume();
            let leading = self.parse_comments();
            let mut prop = self.parse_property_access_property()?;
            prop.comments.leading.splice(0..0, leading);
            node = Node::new(NodeKind::PropertyAccess {
                object: Box::new(node),
                operator: op_tok.text,
                property: Box::new(prop),
            });
        }
        Ok(node)
    }

    fn parse_property_access_property(&mut self) -> Result<Node, Error> {
        let tok = self.peek();
        match tok.kind {
            TokenKind::Asterisk => {
                self.consume();
                Ok(Node::new(NodeKind::AllColumnsAsterisk))
            }
            TokenKind::ArrayIdentifier | TokenKind::ArrayKeyword => {
                self.parse_array_subscript()?.ok_or_else(|| self.invalid_sql())
            }
            TokenKind::ReservedFunctionName => self.parse_function_call()?.ok_or_else(|| self.invalid_sql()),
            TokenKind::Identifier | TokenKind::QuotedIdentifier | TokenKind::Variable => {
                self.consume();
                let quoted = tok.kind != TokenKind::Identifier;
                Ok(Node::new(NodeKind::Identifier { text: tok.text, quoted }))
            }
            k if k.is_parameter() => {
                self.consume();
                Ok(Node::new(NodeKind::Parameter { key: tok.key, text: tok.text }))
            }
            _ => Err(self.invalid_sql()),
        }
    }

    fn parse_array_subscript(&mut self) -> Result<Option<Node>, Error> {
        let tok = self.consume();
        let trailing = self.parse_comments();
        let mut array = match tok.kind {
            TokenKind::ArrayIdentifier => Node::new(NodeKind::Identifier { text: tok.text, quoted: false }),
            TokenKind::ArrayKeyword => Node::new(NodeKind::Keyword(bare_keyword(&tok))),
            _ => return Ok(None),
        };
        array.comments.trailing.extend(trailing);
        let parens = self.parse_square_brackets()?;
        Ok(Some(Node::new(NodeKind::ArraySubscript { array: Box::new(array), parenthesis: Box::new(parens) })))
    }

    fn parse_function_call(&mut self) -> Result<Option<Node>, Error> {
        let name_tok = self.consume();
        let trailing = self.parse_comments();
        let name_keyword = bare_keyword(&name_tok).with_trailing_keyword(trailing);
        let parenthesis = self.parse_parenthesis()?;
        Ok(Some(Node::new(NodeKind::FunctionCall {
            name_keyword,
            parenthesis: Box::new(parenthesis),
        })))
    }

    fn parse_parameterized_data_type(&mut self) -> Result<Option<Node>, Error> {
        let name_tok = self.consume();
        let trailing = self.parse_comments();
        let data_type = bare_keyword(&name_tok).with_trailing_keyword(trailing);
        let parenthesis = self.parse_parenthesis()?;
        Ok(Some(Node::new(NodeKind::ParameterizedDataType {
            data_type,
            parenthesis: Box::new(parenthesis),
        })))
    }

    fn parse_parenthesis(&mut self) -> Result<Node, Error> {
        let _guard = self.recursion.try_decrease()?;
        let open_tok = self.consume();
        match open_tok.text.as_str() {
            "(" => {
                let children = self.parse_expressions_or_clauses(&[TokenKind::CloseParen])?;
                if self.peek().kind != TokenKind::CloseParen || self.peek().text != ")" {
                    return Err(self.invalid_sql());
                }
                self.consume();
                Ok(Node::new(NodeKind::Parenthesis { children, open: "(", close: ")" }))
            }
            "{" => {
                let children = self.parse_free_form_list_until_close("}")?;
                Ok(Node::new(NodeKind::Parenthesis { children, open: "{", close: "}" }))
            }
            "[" => {
                let children = self.parse_free_form_list_until_close("]")?;
                Ok(Node::new(NodeKind::Parenthesis { children, open: "[", close: "]" }))
            }
            _ => Err(self.invalid_sql()),
        }
    }

    fn parse_square_brackets(&mut self) -> Result<Node, Error> {
        if self.peek().kind != TokenKind::OpenParen || self.peek().text != "[" {
            return Err(self.invalid_sql());
        }
        self.parse_parenthesis()
    }

    fn parse_free_form_list_until_close(&mut self, close: &str) -> Result<Vec<Node>, Error> {
        let mut children = Vec::new();
        loop {
            if self.peek().kind == TokenKind::CloseParen && self.peek().text == close {
                self.consume();
                break;
            }
            match self.parse_free_form_sql()? {
                Some(node) => children.push(node),
                None => return Err(self.invalid_sql()),
            }
        }
        Ok(children)
    }

    fn parse_between_predicate(&mut self) -> Result<Node, Error> {
        let between_tok = self.consume();
        let leading = self.parse_comments();
        let mut expr1 = self.parse_andless_expression_chain()?;
        let trail = self.parse_comments();
        let and_tok = self.expect(TokenKind::And);
        let Some(and_tok) = and_tok else { return Err(self.invalid_sql()) };
        let leading2 = self.parse_comments();
        let Some(mut expr2) = self.parse_andless_expression()? else { return Err(self.invalid_sql()) };

        let between_kw = bare_keyword(&between_tok).with_trailing_keyword(leading.clone());
        if let Some(first) = expr1.first_mut() {
            first.comments.leading.splice(0..0, leading);
        }
        if let Some(last) = expr1.last_mut() {
            last.comments.trailing.extend(trail);
        }
        let and_kw = bare_keyword(&and_tok);
        expr2.comments.leading.splice(0..0, leading2);
        Ok(Node::new(NodeKind::BetweenPredicate { between_kw, expr1, and_kw, expr2: vec![expr2] }))
    }

    fn parse_andless_expression_chain(&mut self) -> Result<Vec<Node>, Error> {
        let Some(first) = self.parse_andless_expression()? else { return Err(self.invalid_sql()) };
        let mut items = vec![first];
        loop {
            let (next, comment_count) = self.peek_after_comments();
            if !self.can_start_andless_expression(&next) {
                break;
            }
            let leading = self.consume_comments(comment_count);
            let Some(mut expr) = self.parse_andless_expression()? else { break };
            expr.comments.leading.splice(0..0, leading);
            items.push(expr);
        }
        Ok(items)
    }

    fn parse_case_expression(&mut self) -> Result<Node, Error> {
        let _guard = self.recursion.try_decrease()?;
        let case_tok = self.consume();
        let trailing = self.parse_comments();
        let case_kw = bare_keyword(&case_tok).with_trailing_keyword(trailing);

        let expr = if self.can_start_expression(&self.peek()) {
            self.parse_expression_chain_trailing()?
        } else {
            Vec::new()
        };

        let mut clauses = Vec::new();
        loop {
            if self.peek().kind == TokenKind::When {
                clauses.push(self.parse_case_when()?);
                continue;
            }
            if self.peek().kind == TokenKind::Else {
                clauses.push(self.parse_case_else()?);
                continue;
            }
            break;
        }
        let Some(end_tok) = self.expect(TokenKind::End) else { return Err(self.invalid_sql()) };
        let end_kw = bare_keyword(&end_tok);
        Ok(Node::new(NodeKind::CaseExpression { case_kw, end_kw, expr, clauses }))
    }

    fn parse_case_when(&mut self) -> Result<Node, Error> {
        let when_tok = self.consume();
        let trailing = self.parse_comments();
        let condition = self.parse_expression_chain_trailing()?;
        let Some(then_tok) = self.expect(TokenKind::Then) else { return Err(self.invalid_sql()) };
        let then_trailing = self.parse_comments();
        let result = self.parse_expression_chain_trailing()?;
        let when_kw = bare_keyword(&when_tok).with_trailing_keyword(trailing);
        let then_kw = bare_keyword(&then_tok).with_trailing_keyword(then_trailing);
        Ok(Node::new(NodeKind::CaseWhen { when_kw, condition, then_kw, result }))
    }

    fn parse_case_else(&mut self) -> Result<Node, Error> {
        let else_tok = self.consume();
        let trailing = self.parse_comments();
        let result = self.parse_expression_chain_trailing()?;
        let else_kw = bare_keyword(&else_tok).with_trailing_keyword(trailing);
        Ok(Node::new(NodeKind::CaseElse { else_kw, result }))
    }

    fn parse_comment_node(&mut self) -> Node {
        let tok = self.consume();
        match tok.kind {
            TokenKind::LineComment => Node::new(NodeKind::LineComment {
                text: tok.text,
                preceding_whitespace: tok.preceding_whitespace,
            }),
            TokenKind::DisableComment => Node::new(NodeKind::DisableComment {
                text: tok.text,
                preceding_whitespace: tok.preceding_whitespace,
            }),
            _ => Node::new(NodeKind::BlockComment {
                text: tok.text,
                preceding_whitespace: tok.preceding_whitespace,
            }),
        }
    }

    fn parse_comments(&mut self) -> Vec<Node> {
        let mut comments = Vec::new();
        while self.peek().kind.is_comment() {
            comments.push(self.parse_comment_node());
        }
        comments
    }

    fn peek_after_comments(&self) -> (Token, usize) {
        let mut idx = self.index;
        let mut count = 0;
        while idx < self.tokens.len() && self.tokens[idx].kind.is_comment() {
            idx += 1;
            count += 1;
        }
        (self.tokens.get(idx).cloned().unwrap_or_else(|| Token::eof(0)), count)
    }

    fn consume_comments(&mut self, count: usize) -> Vec<Node> {
        let mut comments = Vec::with_capacity(count);
        for _ in 0..count {
            if !self.peek().kind.is_comment() {
                break;
            }
            comments.push(self.parse_comment_node());
        }
        comments
    }

    fn can_start_expression(&self, tok: &Token) -> bool {
        matches!(
            tok.kind,
            TokenKind::And
                | TokenKind::Or
                | TokenKind::Xor
                | TokenKind::Asterisk
                | TokenKind::ArrayIdentifier
                | TokenKind::ArrayKeyword
                | TokenKind::ReservedFunctionName
                | TokenKind::ReservedParameterizedDataType
                | TokenKind::OpenParen
                | TokenKind::Operator
                | TokenKind::Identifier
                | TokenKind::QuotedIdentifier
                | TokenKind::Variable
                | TokenKind::NamedParameter
                | TokenKind::QuotedParameter
                | TokenKind::NumberedParameter
                | TokenKind::PositionalParameter
                | TokenKind::CustomParameter
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::ReservedDataType
                | TokenKind::ReservedDataTypePhrase
                | TokenKind::ReservedKeyword
                | TokenKind::ReservedKeywordPhrase
                | TokenKind::ReservedJoin
                | TokenKind::Between
                | TokenKind::Case
                | TokenKind::When
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::End
                | TokenKind::Comma
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::DisableComment
        )
    }

    fn can_start_andless_expression(&self, tok: &Token) -> bool {
        self.can_start_expression(tok) && !matches!(tok.kind, TokenKind::And | TokenKind::Or | TokenKind::Xor)
    }

    fn is_clause_start(&self, tok: &Token) -> bool {
        matches!(
            tok.kind,
            TokenKind::Limit | TokenKind::ReservedSelect | TokenKind::ReservedClause | TokenKind::ReservedSetOperation
        )
    }

    fn is_stop(&self, stop: &[TokenKind]) -> bool {
        stop.iter().any(|k| self.peek().kind == *k)
    }

    fn peek(&self) -> Token {
        self.tokens.get(self.index).cloned().unwrap_or_else(|| Token::eof(0))
    }

    fn consume(&mut self) -> Token {
        let tok = self.peek();
        if self.index < self.tokens.len() {
            self.index += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        if self.peek().kind != kind {
            return None;
        }
        Some(self.consume())
    }
}

fn bare_keyword(tok: &Token) -> KeywordNode {
    KeywordNode {
        token_kind: tok.kind,
        text: tok.text.clone(),
        raw: tok.raw.clone(),
        comments: crate::ast::Comments::default(),
    }
}

trait KeywordNodeExt {
    fn with_trailing_keyword(self, trailing: Vec<Node>) -> Self;
}

impl KeywordNodeExt for KeywordNode {
    /// Mirrors `addTrailingCommentsKeyword`: attaches directly to this keyword's own comment
    /// slot, since a `KeywordNode` is usually embedded in its parent rather than wrapped.
    fn with_trailing_keyword(mut self, trailing: Vec<Node>) -> KeywordNode {
        self.comments.trailing.extend(trailing);
        self
    }
}
