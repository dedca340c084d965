//! A width-aware pretty-printer for PostgreSQL-dialect SQL (SPEC_FULL.md §1, §2).
//!
//! The pipeline is four stages, each its own module: [`lexer`] turns source text into a raw
//! token stream, [`classifier`] merges reserved-word phrases and promotes bare identifiers to
//! their reserved kind, [`disambiguator`] resolves the handful of contextual ambiguities that
//! classification alone can't, and [`parser`] builds the tagged [`ast::Node`] tree that
//! [`formatter`] walks to produce the final text. [`format`] drives all four in order.

pub mod ast;
pub mod classifier;
pub mod dialect;
pub mod disambiguator;
pub mod error;
pub mod formatter;
pub mod layout;
pub mod lexer;
pub mod options;
pub mod params;
pub mod parser;
pub mod token;

pub use ast::{Node, NodeKind};
pub use error::Error;
pub use options::{Case, FormatOptions, IndentStyle, Language, LogicalOperatorNewline};
pub use params::ParamValues;

use ast::NodeKind as AstNodeKind;
use layout::{Item, Layout, Ws};
use params::Params;

/// Formats `query` under `cfg`, returning the pretty-printed text.
///
/// Runs the full pipeline — tokenize, classify, disambiguate, parse, format — once per
/// statement found in `query`, then joins the results with `cfg.lines_between_queries + 1`
/// newlines, exactly as the distilled source's top-level `Format` does.
pub fn format(query: &str, cfg: &FormatOptions) -> Result<String, Error> {
    cfg.validate()?;
    let dialect = dialect::by_name(cfg.language.name()).expect("validated above");

    let tokens = lexer::tokenize(query, dialect, &cfg.param_types)?;
    let classifier = classifier::TokenClassifier::new(&dialect.tokenizer_options);
    let tokens = classifier.classify(tokens);
    let tokens = disambiguator::disambiguate(tokens);
    let statements = parser::parse(tokens, query)?;

    let mut params = Params::new(cfg.params.clone());
    let parts: Vec<String> = statements
        .iter()
        .map(|statement| format_statement(statement, cfg, dialect, &mut params))
        .collect();

    let separator = "\n".repeat((cfg.lines_between_queries + 1) as usize);
    Ok(parts.join(&separator).trim_end_matches([' ', '\t', '\n', '\r']).to_string())
}

fn format_statement(statement: &Node, cfg: &FormatOptions, dialect: &dialect::Dialect, params: &mut Params) -> String {
    let AstNodeKind::Statement { children, has_semicolon } = &statement.kind else {
        unreachable!("parser::parse only ever produces NodeKind::Statement at the top level")
    };
    let mut layout = formatter::format_statement(children, cfg, dialect, params);
    if *has_semicolon {
        let ws = if cfg.newline_before_semicolon { Ws::Newline } else { Ws::NoNewline };
        layout.add(vec![Item::from(ws), Item::from(";")]);
    }
    layout.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_a_simple_select() {
        let cfg = FormatOptions::default().with_keyword_case(Case::Upper);
        let out = format("select a, b from foo where a = 1", &cfg).unwrap();
        assert_eq!(out, "SELECT\n  a,\n  b\nFROM\n  foo\nWHERE\n  a = 1");
    }

    #[test]
    fn rejects_zero_expression_width() {
        let cfg = FormatOptions::default().with_expression_width(0);
        assert!(format("select 1", &cfg).is_err());
    }

    #[test]
    fn joins_multiple_statements_with_configured_blank_lines() {
        let cfg = FormatOptions::default().with_keyword_case(Case::Upper);
        let out = format("select 1; select 2;", &cfg).unwrap();
        assert_eq!(out, "SELECT\n  1;\n\nSELECT\n  2;");
    }
}
