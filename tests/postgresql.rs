//! End-to-end formatting scenarios against the public `format()` entry point.

use pg_pretty::{format, Case, FormatOptions, IndentStyle};
use pretty_assertions::assert_eq;

fn upper() -> FormatOptions {
    FormatOptions::default().with_keyword_case(Case::Upper)
}

#[test]
fn simple_select() {
    let out = format("SELECT a FROM b;", &upper()).unwrap();
    assert_eq!(out, "SELECT\n  a\nFROM\n  b;");
}

#[test]
fn multiple_projected_columns_wrap_one_per_line() {
    let out = format("select a, b from foo where a = 1", &upper()).unwrap();
    assert_eq!(out, "SELECT\n  a,\n  b\nFROM\n  foo\nWHERE\n  a = 1");
}

#[test]
fn property_access_demotes_reserved_word_to_plain_identifier() {
    let out = format("SELECT t.update FROM t", &upper()).unwrap();
    assert_eq!(out, "SELECT\n  t.update\nFROM\n  t");
}

#[test]
fn limit_with_mysql_style_offset_comma() {
    let out = format("SELECT * FROM t LIMIT 5, 10", &upper()).unwrap();
    assert_eq!(out, "SELECT\n  *\nFROM\n  t\nLIMIT\n  5, 10");
}

#[test]
fn case_expression_inside_between_always_breaks_onto_its_own_lines() {
    let out = format("foo BETWEEN CASE x WHEN 1 THEN 2 END AND 3", &upper()).unwrap();
    assert_eq!(out, "foo BETWEEN CASE x\n  WHEN 1 THEN 2\nEND AND 3");
}

#[test]
fn disable_region_is_preserved_byte_for_byte() {
    let input = "/* sql-formatter-disable */\nSELECT\n  foo\n    FROM\n      bar;\n/* sql-formatter-enable */";
    let out = format(input, &upper()).unwrap();
    assert_eq!(out, input);
}

#[test]
fn quoted_identifiers_are_never_recased() {
    let out = format(r#"select "MixedCase" from t"#, &upper()).unwrap();
    assert_eq!(out, "SELECT\n  \"MixedCase\"\nFROM\n  t");
}

#[test]
fn idempotent_on_its_own_output() {
    let cfg = upper();
    let once = format("select a, b from foo where a = 1", &cfg).unwrap();
    let twice = format(&once, &cfg).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn parenthesized_subquery_inlines_when_it_fits_the_expression_width() {
    let out = format("SELECT ((foo = 'bar'))", &upper()).unwrap();
    assert_eq!(out, "SELECT\n  ((foo = 'bar'))");
}

#[test]
fn parenthesized_subquery_wraps_once_it_exceeds_the_expression_width() {
    let out = format(
        "SELECT ((foo = '0123456789-0123456789-0123456789-0123456789'))",
        &upper(),
    )
    .unwrap();
    assert_eq!(
        out,
        "SELECT\n  (\n    (\n      foo = '0123456789-0123456789-0123456789-0123456789'\n    )\n  )"
    );
}

#[test]
fn tabular_left_style_pads_clause_and_join_keywords_to_a_common_column() {
    let cfg = upper().with_indent_style(IndentStyle::TabularLeft);
    let out = format("SELECT a FROM x JOIN y", &cfg).unwrap();
    assert_eq!(out, "SELECT    a\nFROM      x\nJOIN      y");
}

#[test]
fn tabular_left_style_pads_join_keywords_ahead_of_an_on_condition() {
    let cfg = upper().with_indent_style(IndentStyle::TabularLeft);
    let out = format("SELECT a FROM x JOIN y ON x.id=y.id", &cfg).unwrap();
    assert_eq!(out, "SELECT    a\nFROM      x\nJOIN      y ON x.id = y.id");
}
