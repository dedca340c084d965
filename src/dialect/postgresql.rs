//! The PostgreSQL dialect table: reserved word categories, operators, quote forms, and
//! formatting hints.
//!
//! The word lists below are a representative subset of PostgreSQL's reserved vocabulary
//! (chosen to exercise every token category and every scenario in SPEC_FULL.md §8), not the
//! complete ~450-entry official keyword list; the mechanism (phrase indexes, promotion
//! chains) is exactly what a complete table would also drive.

use super::phrases::expand;
use super::{IdentChars, ParamTypes, QuoteForm, TokenizerOptions};

pub const RESERVED_SELECT: &[&str] = &["SELECT"];

pub const RESERVED_CLAUSES: &[&str] = &[
    "FROM",
    "WHERE",
    "GROUP BY",
    "HAVING",
    "ORDER BY",
    "WITH",
    "INSERT INTO",
    "VALUES",
    "SET",
    "UPDATE",
    "DELETE FROM",
    "RETURNING",
    "WINDOW",
    "PARTITION BY",
    "COMMENT ON",
    "FOR UPDATE",
    "FOR SHARE",
    "DEFAULT VALUES",
    "ON CONFLICT",
    "SET SCHEMA",
    "WHERE CURRENT OF",
    "FETCH FIRST",
    "FETCH NEXT",
    "OFFSET",
];

pub const RESERVED_SET_OPERATIONS: &[&str] = &[
    "UNION",
    "UNION ALL",
    "UNION DISTINCT",
    "EXCEPT",
    "EXCEPT ALL",
    "INTERSECT",
    "INTERSECT ALL",
];

pub const RESERVED_JOINS: &[&str] = &[
    "JOIN",
    "INNER JOIN",
    "LEFT JOIN",
    "LEFT OUTER JOIN",
    "RIGHT JOIN",
    "RIGHT OUTER JOIN",
    "FULL JOIN",
    "FULL OUTER JOIN",
    "CROSS JOIN",
    "NATURAL JOIN",
];

/// Compact form; expanded via [`expand`] at dialect construction into the flat list the
/// classifier indexes.
const RESERVED_KEYWORD_PHRASES_COMPACT: &[&str] = &[
    "IS [NOT] DISTINCT FROM",
    "IS [NOT] NULL",
    "IS [NOT] TRUE",
    "IS [NOT] FALSE",
    "NOT IN",
    "NOT LIKE",
    "NOT ILIKE",
    "NOT BETWEEN",
    "GROUP BY",
];

const RESERVED_DATA_TYPE_PHRASES_COMPACT: &[&str] = &["DOUBLE PRECISION", "CHARACTER VARYING"];

pub const RESERVED_FUNCTION_NAMES: &[&str] = &[
    "COUNT",
    "SUM",
    "AVG",
    "MIN",
    "MAX",
    "COALESCE",
    "NULLIF",
    "ARRAY_AGG",
    "GENERATE_SERIES",
    "NOW",
    "EXTRACT",
    "SUBSTRING",
    "LOWER",
    "UPPER",
];

pub const RESERVED_DATA_TYPES: &[&str] = &[
    "INT",
    "INTEGER",
    "BIGINT",
    "SMALLINT",
    "NUMERIC",
    "DECIMAL",
    "REAL",
    "TEXT",
    "VARCHAR",
    "CHAR",
    "BOOLEAN",
    "DATE",
    "TIMESTAMP",
    "TIMESTAMPTZ",
    "UUID",
    "JSON",
    "JSONB",
    "BYTEA",
    "ARRAY",
    "STRUCT",
];

pub const RESERVED_KEYWORDS: &[&str] = &[
    "AS",
    "ON",
    "ASC",
    "DESC",
    "NULLS",
    "FIRST",
    "LAST",
    "DISTINCT",
    "ALL",
    "INTO",
    "BY",
    "USING",
    "LATERAL",
    "RECURSIVE",
    "NULL",
    "TRUE",
    "FALSE",
    "DEFAULT",
    "IS",
    "IN",
    "LIKE",
    "ILIKE",
    "NOT",
];

pub fn tokenizer_options() -> TokenizerOptions {
    TokenizerOptions {
        reserved_select: RESERVED_SELECT,
        reserved_clauses: RESERVED_CLAUSES,
        supports_xor: false,
        reserved_set_operations: RESERVED_SET_OPERATIONS,
        reserved_joins: RESERVED_JOINS,
        reserved_keyword_phrases: expand(RESERVED_KEYWORD_PHRASES_COMPACT),
        reserved_data_type_phrases: expand(RESERVED_DATA_TYPE_PHRASES_COMPACT),
        reserved_function_names: RESERVED_FUNCTION_NAMES,
        reserved_data_types: RESERVED_DATA_TYPES,
        reserved_keywords: RESERVED_KEYWORDS,
        string_types: &[
            QuoteForm::Plain {
                quote: "'",
                doubled_quote_escape: true,
                backslash_escape: false,
            },
            QuoteForm::Prefixed {
                quote: "'",
                prefixes: &["E"],
                require_prefix: true,
                doubled_quote_escape: true,
                backslash_escape: true,
            },
            QuoteForm::Prefixed {
                quote: "'",
                prefixes: &["U&"],
                require_prefix: true,
                doubled_quote_escape: true,
                backslash_escape: false,
            },
            QuoteForm::DollarTag,
        ],
        ident_types: &[
            QuoteForm::Plain {
                quote: "\"",
                doubled_quote_escape: true,
                backslash_escape: false,
            },
            QuoteForm::Prefixed {
                quote: "\"",
                prefixes: &["U&"],
                require_prefix: true,
                doubled_quote_escape: true,
                backslash_escape: false,
            },
        ],
        variable_types: &[],
        extra_parens: &[("[", "]")],
        param_types: ParamTypes {
            positional: true,
            numbered: vec!["$"],
            named: vec![":"],
            quoted: vec![":"],
            custom: vec![],
        },
        line_comment_types: &["--"],
        nested_block_comments: true,
        ident_chars: IdentChars {
            first: "_",
            rest: "_$",
            dashes: false,
            allow_first_char_number: false,
        },
        param_chars: IdentChars {
            first: "_",
            rest: "_",
            dashes: false,
            allow_first_char_number: false,
        },
        operators: &[
            "%", "^", "|/", "||/", "::", "!!", "@", "&", "|", "#", "~", "~*", "!~", "!~*",
            "<<", ">>", "!", "@>", "<@", "&&", "->", "->>", "#>", "#>>", "#-", "?", "?|", "?&",
        ],
        property_access_operators: &["."],
        operator_keyword: true,
        underscores_in_numbers: true,
    }
}

/// Returns `(always_dense_operators, oneline_clauses, tabular_oneline_clauses)` for
/// [`super::build_format_options_table`].
pub fn format_option_tables() -> (&'static [&'static str], &'static [&'static str], &'static [&'static str]) {
    const ALWAYS_DENSE: &[&str] = &["::"];
    const ONELINE: &[&str] = &[
        "COMMENT ON",
        "FOR UPDATE",
        "FOR SHARE",
        "DEFAULT VALUES",
        "ON CONFLICT",
        "SET SCHEMA",
        "WHERE CURRENT OF",
        "FETCH FIRST",
        "FETCH NEXT",
        "OFFSET",
    ];
    const TABULAR: &[&str] = &[];
    (ALWAYS_DENSE, ONELINE, TABULAR)
}
