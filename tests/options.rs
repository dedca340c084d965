//! Coverage for the `FormatOptions` surface: casing, dense operators, parameters, and the
//! config-validation error contract (SPEC_FULL.md §8, scenario 8).

use matches::assert_matches;
use pg_pretty::{format, Case, Error, FormatOptions, ParamValues};
use pretty_assertions::assert_eq;

#[test]
fn zero_expression_width_is_a_config_error_with_a_stable_message() {
    let cfg = FormatOptions::default().with_expression_width(0);
    let err = format("select 1", &cfg).unwrap_err();
    assert_matches!(err, Error::Config(_));
    assert_eq!(err.to_string(), "expressionWidth config must be positive number. Received 0 instead.");
}

#[test]
fn keyword_case_lower_downcases_canonical_keywords() {
    let cfg = FormatOptions::default().with_keyword_case(Case::Lower);
    let out = format("SELECT a FROM b", &cfg).unwrap();
    assert_eq!(out, "select\n  a\nfrom\n  b");
}

#[test]
fn keyword_case_preserve_keeps_original_spelling() {
    let cfg = FormatOptions::default();
    let out = format("SeLeCt a FrOm b", &cfg).unwrap();
    assert_eq!(out, "SeLeCt\n  a\nFrOm\n  b");
}

#[test]
fn identifier_case_is_independent_of_keyword_case() {
    let cfg = FormatOptions { identifier_case: Case::Upper, ..FormatOptions::default().with_keyword_case(Case::Lower) };
    let out = format("select a from b", &cfg).unwrap();
    assert_eq!(out, "select\n  A\nfrom\n  B");
}

#[test]
fn dense_operators_drops_the_surrounding_spaces() {
    let cfg = FormatOptions { dense_operators: true, ..FormatOptions::default().with_keyword_case(Case::Upper) };
    let out = format("select a+b", &cfg).unwrap();
    assert_eq!(out, "SELECT\n  a+b");
}

#[test]
fn positional_parameter_is_substituted_from_the_supplied_list() {
    let cfg = FormatOptions::default()
        .with_keyword_case(Case::Upper)
        .with_params(ParamValues::List(vec!["5".to_string()]));
    let out = format("select a = ?", &cfg).unwrap();
    assert_eq!(out, "SELECT\n  a = 5");
}

#[test]
fn unmatched_placeholder_falls_back_to_its_own_spelling() {
    let cfg = FormatOptions::default().with_keyword_case(Case::Upper);
    let out = format("select a = ?", &cfg).unwrap();
    assert_eq!(out, "SELECT\n  a = ?");
}
