//! The expression formatter: tagged AST → [`Layout`] buffer (SPEC_FULL.md §4.6).
//!
//! Ported from the distilled source's `expression_formatter.go`, with one change the Layout
//! module already set up for: a speculative inline render that can overflow signals that via
//! `Result<_, InlineOverflow>` instead of a `panic`/deferred `recover()` pair. Everything else —
//! the per-node-shape rules, the casing dispatch, the comment/doc-comment handling — follows the
//! distilled source line for line.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{KeywordNode, Node, NodeKind};
use crate::dialect::Dialect;
use crate::layout::tabular::{is_tabular_token, to_tabular_format};
use crate::layout::{InlineLayout, Item, Layout, Ws};
use crate::options::{Case, FormatOptions, LogicalOperatorNewline};
use crate::params::Params;
use crate::token::TokenKind;

static DOC_COMMENT_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/\*\*?$").unwrap());
static DOC_COMMENT_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*").unwrap());
static DOC_COMMENT_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*/$").unwrap());

fn is_multiline(text: &str) -> bool {
    text.contains('\n')
}

fn equalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_tabular_style(cfg: &FormatOptions) -> bool {
    cfg.indent_style.is_tabular()
}

/// Formats one statement's children into a freshly-indented [`Layout`], returning its rendered
/// text. `params` is threaded in so positional-parameter indices persist across statements in
/// the same query (and so a statement's speculative inline attempts can snapshot/restore it).
pub fn format_statement(children: &[Node], cfg: &FormatOptions, dialect: &Dialect, params: &mut Params) -> Layout {
    let mut layout = Layout::new(crate::layout::Indentation::new(single_indent(cfg)));
    let mut formatter = Formatter { cfg, dialect, params, inline: false };
    formatter.format_nodes(&mut layout, children);
    layout
}

fn single_indent(cfg: &FormatOptions) -> String {
    if cfg.use_tabs {
        "\t".to_string()
    } else {
        " ".repeat(cfg.tab_width as usize)
    }
}

struct Formatter<'a> {
    cfg: &'a FormatOptions,
    dialect: &'a Dialect,
    params: &'a mut Params,
    inline: bool,
}

impl<'a> Formatter<'a> {
    fn format_nodes(&mut self, layout: &mut Layout, nodes: &[Node]) {
        for node in nodes {
            self.format_node(layout, node);
        }
    }

    fn format_node(&mut self, layout: &mut Layout, node: &Node) {
        self.format_comments(layout, &node.comments.leading);
        self.format_node_without_comments(layout, node);
        self.format_comments(layout, &node.comments.trailing);
    }

    fn format_node_without_comments(&mut self, layout: &mut Layout, node: &Node) {
        match &node.kind {
            NodeKind::Statement { children, .. } => self.format_nodes(layout, children),
            NodeKind::Clause { name_keyword, children } => {
                self.format_clause(layout, name_keyword, children)
            }
            NodeKind::SetOperation { name_keyword, children } => {
                self.format_set_operation(layout, name_keyword, children)
            }
            NodeKind::FunctionCall { name_keyword, parenthesis } => {
                self.with_comments_keyword(layout, name_keyword, |f, layout| {
                    layout.add(vec![Item::from(f.show_function_kw(name_keyword))]);
                });
                self.format_node(layout, parenthesis);
            }
            NodeKind::ParameterizedDataType { data_type, parenthesis } => {
                self.with_comments_keyword(layout, data_type, |f, layout| {
                    layout.add(vec![Item::from(f.show_data_type(data_type))]);
                });
                self.format_node(layout, parenthesis);
            }
            NodeKind::ArraySubscript { array, parenthesis } => {
                self.format_array_subscript(layout, array, parenthesis)
            }
            NodeKind::PropertyAccess { object, operator, property } => {
                self.format_node(layout, object);
                layout.add(vec![Item::from(Ws::NoSpace), Item::from(operator.as_str())]);
                self.format_node(layout, property);
            }
            NodeKind::Parenthesis { children, open, close } => {
                self.format_parenthesis(layout, children, open, close)
            }
            NodeKind::BetweenPredicate { between_kw, expr1, and_kw, expr2 } => {
                self.format_between_predicate(layout, between_kw, expr1, and_kw, expr2)
            }
            NodeKind::CaseExpression { case_kw, end_kw, expr, clauses } => {
                self.format_case_expression(layout, case_kw, end_kw, expr, clauses)
            }
            NodeKind::CaseWhen { when_kw, condition, then_kw, result } => {
                self.format_case_when(layout, when_kw, condition, then_kw, result)
            }
            NodeKind::CaseElse { else_kw, result } => self.format_case_else(layout, else_kw, result),
            NodeKind::LimitClause { limit_kw, count, offset } => {
                self.format_limit_clause(layout, limit_kw, count, offset)
            }
            NodeKind::AllColumnsAsterisk => {
                layout.add(vec![Item::from("*"), Item::from(Ws::Space)]);
            }
            NodeKind::Literal { text } => {
                layout.add(vec![Item::from(text.as_str()), Item::from(Ws::Space)]);
            }
            NodeKind::Identifier { text, quoted } => {
                let shown = self.show_identifier(text, *quoted);
                layout.add(vec![Item::from(shown), Item::from(Ws::Space)]);
            }
            NodeKind::DataType { text, raw } => {
                let shown = self.show_data_type(&KeywordNode {
                    token_kind: TokenKind::ReservedDataType,
                    text: text.clone(),
                    raw: raw.clone(),
                    comments: crate::ast::Comments::default(),
                });
                layout.add(vec![Item::from(shown), Item::from(Ws::Space)]);
            }
            NodeKind::Keyword(kw) => self.format_keyword_node(layout, kw),
            NodeKind::Parameter { key, text } => self.format_parameter(layout, key.as_deref(), text),
            NodeKind::Operator { text } => self.format_operator(layout, text),
            NodeKind::Comma => self.format_comma(layout),
            NodeKind::LineComment { text, preceding_whitespace } => {
                self.format_line_comment(layout, text, preceding_whitespace)
            }
            NodeKind::BlockComment { text, preceding_whitespace } => {
                self.format_block_comment(layout, text, preceding_whitespace)
            }
            NodeKind::DisableComment { text, preceding_whitespace } => {
                self.format_disable_comment(layout, text, preceding_whitespace)
            }
        }
    }

    fn format_array_subscript(&mut self, layout: &mut Layout, array: &Node, parenthesis: &Node) {
        let (formatted, space_before_bracket) = match &array.kind {
            NodeKind::DataType { text, raw } => (
                self.show_data_type(&KeywordNode {
                    token_kind: TokenKind::ReservedDataType,
                    text: text.clone(),
                    raw: raw.clone(),
                    comments: crate::ast::Comments::default(),
                }),
                false,
            ),
            NodeKind::ParameterizedDataType { .. } => {
                (self.show_parameterized_data_type_inline(layout, array), true)
            }
            NodeKind::Keyword(kw) => (self.show_kw(kw), false),
            NodeKind::Identifier { text, quoted } => (self.show_identifier(text, *quoted), false),
            _ => (String::new(), false),
        };
        self.format_comments(layout, &array.comments.leading);
        if space_before_bracket {
            layout.add(vec![Item::from(formatted), Item::from(Ws::Space)]);
        } else {
            layout.add(vec![Item::from(formatted)]);
        }
        self.format_comments(layout, &array.comments.trailing);
        self.format_node(layout, parenthesis);
    }

    fn show_parameterized_data_type_inline(&mut self, layout: &Layout, node: &Node) -> String {
        if let Some(inline) = self.format_inline_expression(std::slice::from_ref(node)) {
            return inline.to_string().trim_end_matches(' ').to_string();
        }
        let mut sub = Layout::new(crate::layout::Indentation::new(
            layout.indentation.single_indent().to_string(),
        ));
        let mut formatter =
            Formatter { cfg: self.cfg, dialect: self.dialect, params: &mut *self.params, inline: true };
        formatter.format_node(&mut sub, node);
        sub.to_string().trim_end_matches(' ').to_string()
    }

    fn format_parenthesis(&mut self, layout: &mut Layout, children: &[Node], open: &str, close: &str) {
        if let Some(inline) = self.format_inline_expression(children) {
            layout.add(vec![Item::from(open)]);
            layout.add(inline.into_items());
            layout.add(vec![Item::from(Ws::NoSpace), Item::from(close), Item::from(Ws::Space)]);
            return;
        }
        layout.add(vec![Item::from(open), Item::from(Ws::Newline)]);
        if is_tabular_style(self.cfg) {
            layout.add(vec![Item::from(Ws::Indent)]);
            self.format_nodes(layout, children);
        } else {
            layout.indentation.increase_block_level();
            layout.add(vec![Item::from(Ws::Indent)]);
            self.format_nodes(layout, children);
            layout.indentation.decrease_block_level();
        }
        layout.add(vec![
            Item::from(Ws::Newline),
            Item::from(Ws::Indent),
            Item::from(close),
            Item::from(Ws::Space),
        ]);
    }

    fn format_between_predicate(
        &mut self,
        layout: &mut Layout,
        between_kw: &KeywordNode,
        expr1: &[Node],
        and_kw: &KeywordNode,
        expr2: &[Node],
    ) {
        let shown = self.show_kw(between_kw);
        layout.add(vec![Item::from(shown), Item::from(Ws::Space)]);
        self.format_nodes(layout, expr1);
        let and_shown = self.show_non_tabular_kw(and_kw);
        layout.add(vec![
            Item::from(Ws::NoSpace),
            Item::from(Ws::Space),
            Item::from(and_shown),
            Item::from(Ws::Space),
        ]);
        self.format_nodes(layout, expr2);
        layout.add(vec![Item::from(Ws::Space)]);
    }

    fn format_case_expression(
        &mut self,
        layout: &mut Layout,
        case_kw: &KeywordNode,
        end_kw: &KeywordNode,
        expr: &[Node],
        clauses: &[Node],
    ) {
        self.format_keyword_node(layout, case_kw);
        layout.indentation.increase_block_level();
        self.format_nodes(layout, expr);
        self.format_nodes(layout, clauses);
        layout.indentation.decrease_block_level();
        layout.add(vec![Item::from(Ws::Newline), Item::from(Ws::Indent)]);
        self.format_keyword_node(layout, end_kw);
    }

    fn format_case_when(
        &mut self,
        layout: &mut Layout,
        when_kw: &KeywordNode,
        condition: &[Node],
        then_kw: &KeywordNode,
        result: &[Node],
    ) {
        layout.add(vec![Item::from(Ws::Newline), Item::from(Ws::Indent)]);
        self.format_keyword_node(layout, when_kw);
        self.format_nodes(layout, condition);
        self.format_keyword_node(layout, then_kw);
        self.format_nodes(layout, result);
    }

    fn format_case_else(&mut self, layout: &mut Layout, else_kw: &KeywordNode, result: &[Node]) {
        layout.add(vec![Item::from(Ws::Newline), Item::from(Ws::Indent)]);
        self.format_keyword_node(layout, else_kw);
        self.format_nodes(layout, result);
    }

    fn format_clause(&mut self, layout: &mut Layout, name_keyword: &KeywordNode, children: &[Node]) {
        if self.is_oneline_clause(name_keyword) {
            self.format_clause_in_oneline_style(layout, name_keyword, children);
        } else if is_tabular_style(self.cfg) {
            self.format_clause_in_tabular_style(layout, name_keyword, children);
        } else {
            self.format_clause_in_indented_style(layout, name_keyword, children);
        }
    }

    fn is_oneline_clause(&self, name_keyword: &KeywordNode) -> bool {
        let table = &self.dialect.format_options;
        if is_tabular_style(self.cfg) {
            table.tabular_oneline_clauses.contains(name_keyword.text.as_str())
        } else {
            table.oneline_clauses.contains(name_keyword.text.as_str())
        }
    }

    fn format_clause_in_indented_style(
        &mut self,
        layout: &mut Layout,
        name_keyword: &KeywordNode,
        children: &[Node],
    ) {
        let shown = self.show_kw(name_keyword);
        layout.add(vec![
            Item::from(Ws::Newline),
            Item::from(Ws::Indent),
            Item::from(shown),
            Item::from(Ws::Newline),
        ]);
        layout.indentation.increase_top_level();
        layout.add(vec![Item::from(Ws::Indent)]);
        self.format_nodes(layout, children);
        layout.indentation.decrease_top_level();
    }

    fn format_clause_in_oneline_style(
        &mut self,
        layout: &mut Layout,
        name_keyword: &KeywordNode,
        children: &[Node],
    ) {
        let shown = self.show_kw(name_keyword);
        layout.add(vec![
            Item::from(Ws::Newline),
            Item::from(Ws::Indent),
            Item::from(shown),
            Item::from(Ws::Space),
        ]);
        self.format_nodes(layout, children);
    }

    fn format_clause_in_tabular_style(
        &mut self,
        layout: &mut Layout,
        name_keyword: &KeywordNode,
        children: &[Node],
    ) {
        let shown = self.show_kw(name_keyword);
        layout.add(vec![
            Item::from(Ws::Newline),
            Item::from(Ws::Indent),
            Item::from(shown),
            Item::from(Ws::Space),
        ]);
        layout.indentation.increase_top_level();
        self.format_nodes(layout, children);
        layout.indentation.decrease_top_level();
    }

    fn format_set_operation(&mut self, layout: &mut Layout, name_keyword: &KeywordNode, children: &[Node]) {
        let shown = self.show_kw(name_keyword);
        layout.add(vec![
            Item::from(Ws::Newline),
            Item::from(Ws::Indent),
            Item::from(shown),
            Item::from(Ws::Newline),
        ]);
        layout.add(vec![Item::from(Ws::Indent)]);
        self.format_nodes(layout, children);
    }

    fn format_limit_clause(
        &mut self,
        layout: &mut Layout,
        limit_kw: &KeywordNode,
        count: &[Node],
        offset: &Option<Vec<Node>>,
    ) {
        self.with_comments_keyword(layout, limit_kw, |f, layout| {
            let shown = f.show_kw(limit_kw);
            layout.add(vec![Item::from(Ws::Newline), Item::from(Ws::Indent), Item::from(shown)]);
        });
        layout.indentation.increase_top_level();
        if is_tabular_style(self.cfg) {
            layout.add(vec![Item::from(Ws::Space)]);
        } else {
            layout.add(vec![Item::from(Ws::Newline), Item::from(Ws::Indent)]);
        }
        if let Some(offset) = offset {
            self.format_nodes(layout, offset);
            layout.add(vec![Item::from(Ws::NoSpace), Item::from(","), Item::from(Ws::Space)]);
            self.format_nodes(layout, count);
        } else {
            self.format_nodes(layout, count);
        }
        layout.indentation.decrease_top_level();
    }

    fn format_parameter(&mut self, layout: &mut Layout, key: Option<&str>, text: &str) {
        let value = match key {
            Some(key) => self.params.get_keyed(key, text),
            None => self.params.get_positional(text),
        };
        layout.add(vec![Item::from(value), Item::from(Ws::Space)]);
    }

    fn format_operator(&mut self, layout: &mut Layout, text: &str) {
        if self.cfg.dense_operators
            || self.dialect.format_options.always_dense_operators.iter().any(|op| *op == text)
        {
            layout.add(vec![Item::from(Ws::NoSpace), Item::from(text)]);
        } else if text == ":" {
            layout.add(vec![Item::from(Ws::NoSpace), Item::from(text), Item::from(Ws::Space)]);
        } else {
            layout.add(vec![Item::from(text), Item::from(Ws::Space)]);
        }
    }

    fn format_comma(&mut self, layout: &mut Layout) {
        if !self.inline {
            layout.add(vec![
                Item::from(Ws::NoSpace),
                Item::from(","),
                Item::from(Ws::Newline),
                Item::from(Ws::Indent),
            ]);
        } else {
            layout.add(vec![Item::from(Ws::NoSpace), Item::from(","), Item::from(Ws::Space)]);
        }
    }

    fn format_comments(&mut self, layout: &mut Layout, comments: &[Node]) {
        for comment in comments {
            match &comment.kind {
                NodeKind::LineComment { text, preceding_whitespace } => {
                    self.format_line_comment(layout, text, preceding_whitespace)
                }
                NodeKind::BlockComment { text, preceding_whitespace } => {
                    self.format_block_comment(layout, text, preceding_whitespace)
                }
                NodeKind::DisableComment { text, preceding_whitespace } => {
                    self.format_disable_comment(layout, text, preceding_whitespace)
                }
                _ => {}
            }
        }
    }

    fn format_disable_comment(&mut self, layout: &mut Layout, text: &str, preceding_whitespace: &str) {
        if is_multiline(text) || is_multiline(preceding_whitespace) {
            layout.add(vec![
                Item::from(Ws::Newline),
                Item::from(Ws::Indent),
                Item::from(text),
                Item::from(Ws::Newline),
                Item::from(Ws::Indent),
            ]);
        } else {
            layout.add(vec![Item::from(text), Item::from(Ws::Space)]);
        }
    }

    fn format_line_comment(&mut self, layout: &mut Layout, text: &str, preceding_whitespace: &str) {
        if is_multiline(preceding_whitespace) {
            layout.add(vec![
                Item::from(Ws::Newline),
                Item::from(Ws::Indent),
                Item::from(text),
                Item::from(Ws::MandatoryNewline),
                Item::from(Ws::Indent),
            ]);
        } else if !layout.items().is_empty() {
            layout.add(vec![
                Item::from(Ws::NoNewline),
                Item::from(Ws::Space),
                Item::from(text),
                Item::from(Ws::MandatoryNewline),
                Item::from(Ws::Indent),
            ]);
        } else {
            layout.add(vec![
                Item::from(text),
                Item::from(Ws::MandatoryNewline),
                Item::from(Ws::Indent),
            ]);
        }
    }

    fn format_block_comment(&mut self, layout: &mut Layout, text: &str, preceding_whitespace: &str) {
        if is_multiline(text) || is_multiline(preceding_whitespace) {
            for line in split_block_comment(text) {
                layout.add(vec![Item::from(Ws::Newline), Item::from(Ws::Indent), Item::from(line)]);
            }
            layout.add(vec![Item::from(Ws::Newline), Item::from(Ws::Indent)]);
        } else {
            layout.add(vec![Item::from(text), Item::from(Ws::Space)]);
        }
    }

    fn format_keyword_node(&mut self, layout: &mut Layout, node: &KeywordNode) {
        self.format_comments(layout, &node.comments.leading);
        match node.token_kind {
            TokenKind::ReservedJoin => self.format_join(layout, node),
            TokenKind::And | TokenKind::Or | TokenKind::Xor => self.format_logical_operator(layout, node),
            _ => self.format_keyword(layout, node),
        }
        self.format_comments(layout, &node.comments.trailing);
    }

    fn format_join(&mut self, layout: &mut Layout, node: &KeywordNode) {
        let shown = self.show_kw(node);
        if is_tabular_style(self.cfg) {
            layout.indentation.decrease_top_level();
            layout.add(vec![
                Item::from(Ws::Newline),
                Item::from(Ws::Indent),
                Item::from(shown),
                Item::from(Ws::Space),
            ]);
            layout.indentation.increase_top_level();
        } else {
            layout.add(vec![
                Item::from(Ws::Newline),
                Item::from(Ws::Indent),
                Item::from(shown),
                Item::from(Ws::Space),
            ]);
        }
    }

    fn format_keyword(&mut self, layout: &mut Layout, node: &KeywordNode) {
        let shown = self.show_kw(node);
        layout.add(vec![Item::from(shown), Item::from(Ws::Space)]);
    }

    fn format_logical_operator(&mut self, layout: &mut Layout, node: &KeywordNode) {
        let shown = self.show_kw(node);
        if self.cfg.logical_operator_newline == LogicalOperatorNewline::Before {
            if is_tabular_style(self.cfg) {
                layout.indentation.decrease_top_level();
                layout.add(vec![
                    Item::from(Ws::Newline),
                    Item::from(Ws::Indent),
                    Item::from(shown),
                    Item::from(Ws::Space),
                ]);
                layout.indentation.increase_top_level();
            } else {
                layout.add(vec![
                    Item::from(Ws::Newline),
                    Item::from(Ws::Indent),
                    Item::from(shown),
                    Item::from(Ws::Space),
                ]);
            }
        } else {
            layout.add(vec![Item::from(shown), Item::from(Ws::Newline), Item::from(Ws::Indent)]);
        }
    }

    fn with_comments_keyword(
        &mut self,
        layout: &mut Layout,
        node: &KeywordNode,
        f: impl FnOnce(&mut Self, &mut Layout),
    ) {
        self.format_comments(layout, &node.comments.leading);
        f(self, layout);
        self.format_comments(layout, &node.comments.trailing);
    }

    fn show_kw(&self, node: &KeywordNode) -> String {
        if is_tabular_token(node.token_kind) {
            to_tabular_format(&self.show_non_tabular_kw(node), self.cfg.indent_style)
        } else {
            self.show_non_tabular_kw(node)
        }
    }

    fn show_non_tabular_kw(&self, node: &KeywordNode) -> String {
        match self.cfg.keyword_case {
            Case::Preserve => equalize_whitespace(&node.raw),
            Case::Upper => node.text.clone(),
            Case::Lower => node.text.to_lowercase(),
        }
    }

    fn show_function_kw(&self, node: &KeywordNode) -> String {
        if is_tabular_token(node.token_kind) {
            to_tabular_format(&self.show_non_tabular_function_kw(node), self.cfg.indent_style)
        } else {
            self.show_non_tabular_function_kw(node)
        }
    }

    fn show_non_tabular_function_kw(&self, node: &KeywordNode) -> String {
        match self.cfg.function_case {
            Case::Preserve => equalize_whitespace(&node.raw),
            Case::Upper => node.text.clone(),
            Case::Lower => node.text.to_lowercase(),
        }
    }

    fn show_identifier(&self, text: &str, quoted: bool) -> String {
        if quoted {
            return text.to_string();
        }
        match self.cfg.identifier_case {
            Case::Preserve => text.to_string(),
            Case::Upper => text.to_uppercase(),
            Case::Lower => text.to_lowercase(),
        }
    }

    fn show_data_type(&self, node: &KeywordNode) -> String {
        match self.cfg.data_type_case {
            Case::Preserve => equalize_whitespace(&node.raw),
            Case::Upper => node.text.clone(),
            Case::Lower => node.text.to_lowercase(),
        }
    }

    /// Speculatively renders `nodes` into a width-bounded [`InlineLayout`]. Returns `None` (and
    /// rewinds the positional-parameter index) the moment the render would need a newline or
    /// exceed `cfg.expression_width` — callers fall back to the multi-line render in that case.
    fn format_inline_expression(&mut self, nodes: &[Node]) -> Option<InlineLayout> {
        let old_index = self.params.positional_index();
        let mut inline = InlineLayout::new(self.cfg.expression_width as usize);
        let mut formatter =
            Formatter { cfg: self.cfg, dialect: self.dialect, params: &mut *self.params, inline: true };
        if formatter.format_nodes_inline(&mut inline, nodes).is_err() {
            self.params.set_positional_index(old_index);
            log::trace!("inline attempt over {} nodes overflowed, falling back to multi-line", nodes.len());
            return None;
        }
        log::trace!("inline attempt over {} nodes fits", nodes.len());
        Some(inline)
    }

    fn format_nodes_inline(&mut self, inline: &mut InlineLayout, nodes: &[Node]) -> Result<(), crate::layout::InlineOverflow> {
        let mut scratch = Layout::new(crate::layout::Indentation::new(String::new()));
        self.format_nodes(&mut scratch, nodes);
        inline.add(scratch.items().iter().cloned())
    }
}

fn split_block_comment(comment: &str) -> Vec<String> {
    let lines: Vec<&str> = comment.split('\n').collect();
    if is_doc_comment(comment) {
        lines
            .iter()
            .map(|line| {
                if DOC_COMMENT_LINE.is_match(line) {
                    format!(" {}", line.trim_start_matches([' ', '\t']))
                } else {
                    line.to_string()
                }
            })
            .collect()
    } else {
        lines.iter().map(|line| line.trim_start_matches([' ', '\t']).to_string()).collect()
    }
}

fn is_doc_comment(comment: &str) -> bool {
    let lines: Vec<&str> = comment.split('\n').collect();
    let Some((first, rest)) = lines.split_first() else { return false };
    if !DOC_COMMENT_OPEN.is_match(first) {
        return false;
    }
    let Some((last, middle)) = rest.split_last() else { return false };
    if !middle.iter().all(|line| DOC_COMMENT_LINE.is_match(line)) {
        return false;
    }
    DOC_COMMENT_CLOSE.is_match(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Comments;

    fn dialect() -> &'static Dialect {
        crate::dialect::postgresql()
    }

    fn kw(kind: TokenKind, text: &str) -> KeywordNode {
        KeywordNode { token_kind: kind, text: text.to_string(), raw: text.to_string(), comments: Comments::default() }
    }

    #[test]
    fn formats_literal_and_identifier() {
        let cfg = FormatOptions::default();
        let mut params = Params::new(None);
        let nodes = vec![
            Node::new(NodeKind::Literal { text: "1".to_string() }),
            Node::new(NodeKind::Identifier { text: "foo".to_string(), quoted: false }),
        ];
        let layout = format_statement(&nodes, &cfg, dialect(), &mut params);
        assert_eq!(layout.to_string(), "1 foo ");
    }

    #[test]
    fn uppercase_identifier_case_applies() {
        let cfg = FormatOptions::default().with_keyword_case(Case::Upper);
        let mut params = Params::new(None);
        let nodes = vec![Node::new(NodeKind::Keyword(kw(TokenKind::ReservedKeyword, "SELECT")))];
        let layout = format_statement(&nodes, &cfg, dialect(), &mut params);
        assert_eq!(layout.to_string(), "SELECT ");
    }

    #[test]
    fn comma_breaks_a_line_outside_inline_mode() {
        let cfg = FormatOptions::default();
        let mut params = Params::new(None);
        let nodes = vec![
            Node::new(NodeKind::Identifier { text: "a".to_string(), quoted: false }),
            Node::new(NodeKind::Comma),
            Node::new(NodeKind::Identifier { text: "b".to_string(), quoted: false }),
        ];
        let layout = format_statement(&nodes, &cfg, dialect(), &mut params);
        assert_eq!(layout.to_string(), "a,\nb ");
    }

    #[test]
    fn doc_comment_detection() {
        assert!(is_doc_comment("/**\n * hello\n */"));
        assert!(!is_doc_comment("/* hello */"));
    }

    #[test]
    fn parenthesis_renders_inline_when_it_fits() {
        let cfg = FormatOptions::default();
        let mut params = Params::new(None);
        let nodes = vec![Node::new(NodeKind::Parenthesis {
            children: vec![Node::new(NodeKind::Identifier { text: "a".to_string(), quoted: false })],
            open: "(",
            close: ")",
        })];
        let layout = format_statement(&nodes, &cfg, dialect(), &mut params);
        assert_eq!(layout.to_string(), "(a) ");
    }
}
