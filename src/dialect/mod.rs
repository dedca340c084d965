//! Dialect data: the frozen, immutable bundle of reserved words, operators, quote forms, and
//! formatting hints for a SQL variant.
//!
//! Dialects here are data rather than behavior: a single `Dialect` struct holds static tables,
//! matching the distilled source's `DialectOptions`/`ProcessedDialectFormatOptions` split. See
//! DESIGN.md for the rationale. Modules are laid out one file per dialect.

pub mod phrases;
pub mod postgresql;

use std::collections::HashSet;
use std::sync::OnceLock;

/// The shape of a quoted form: string/identifier literals, and PostgreSQL's dollar-quoted
/// strings.
#[derive(Debug, Clone, Copy)]
pub enum QuoteForm {
    /// A plain `quote ... quote` form, e.g. `'...'` or `"..."`.
    Plain {
        quote: &'static str,
        /// Doubled-quote escaping allowed inside the body (`''` means a literal `'`).
        doubled_quote_escape: bool,
        /// Backslash escaping allowed inside the body.
        backslash_escape: bool,
    },
    /// A form with an optional or mandatory case-insensitive prefix, e.g. `E'...'`, `U&"..."`.
    Prefixed {
        quote: &'static str,
        prefixes: &'static [&'static str],
        require_prefix: bool,
        doubled_quote_escape: bool,
        backslash_escape: bool,
    },
    /// PostgreSQL dollar-quoted strings: `$tag$ ... $tag$`, where `tag` is alphanumeric/underscore.
    DollarTag,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdentChars {
    pub first: &'static str,
    pub rest: &'static str,
    pub dashes: bool,
    pub allow_first_char_number: bool,
}

/// A user-supplied custom parameter pattern (from `FormatOptions::param_types.custom`).
#[derive(Debug, Clone)]
pub struct CustomParameter {
    pub regex: String,
    /// Computes the substitution key from the matched raw text; `None` means identity
    /// (the whole match, verbatim).
    pub key: Option<fn(&str) -> String>,
}

/// The parameter-kind configuration consulted by the lexer's parameter matchers.
#[derive(Debug, Clone, Default)]
pub struct ParamTypes {
    pub positional: bool,
    pub numbered: Vec<&'static str>,
    pub named: Vec<&'static str>,
    pub quoted: Vec<&'static str>,
    pub custom: Vec<CustomParameter>,
}

impl ParamTypes {
    /// Field-by-field override: any field set (non-empty / true) on `overrides` replaces the
    /// corresponding field of `self`, mirroring `mergeParamTypes` in the distilled source.
    pub fn merged_with(&self, overrides: &ParamTypesOverride) -> ParamTypes {
        ParamTypes {
            positional: overrides.positional.unwrap_or(self.positional),
            numbered: overrides
                .numbered
                .clone()
                .unwrap_or_else(|| self.numbered.clone()),
            named: overrides
                .named
                .clone()
                .unwrap_or_else(|| self.named.clone()),
            quoted: overrides
                .quoted
                .clone()
                .unwrap_or_else(|| self.quoted.clone()),
            custom: overrides
                .custom
                .clone()
                .unwrap_or_else(|| self.custom.clone()),
        }
    }
}

/// A caller-supplied override for the dialect's default [`ParamTypes`]. Every field is
/// `Option`-wrapped so "not provided" and "provided as empty" are distinguishable, the same
/// distinction the distilled source needs its `*Set`-flag family for elsewhere (see
/// SPEC_FULL.md §9, §4.10).
#[derive(Debug, Clone, Default)]
pub struct ParamTypesOverride {
    pub positional: Option<bool>,
    pub numbered: Option<Vec<&'static str>>,
    pub named: Option<Vec<&'static str>>,
    pub quoted: Option<Vec<&'static str>>,
    pub custom: Option<Vec<CustomParameter>>,
}

/// Raw tokenizer configuration for one dialect: reserved-word lists, quote forms, operators,
/// and parameter conventions. Lists that are never overridden per-call are `&'static` slices;
/// only `param_types` is owned, since callers may override it.
#[derive(Debug, Clone)]
pub struct TokenizerOptions {
    pub reserved_select: &'static [&'static str],
    pub reserved_clauses: &'static [&'static str],
    pub supports_xor: bool,
    pub reserved_set_operations: &'static [&'static str],
    pub reserved_joins: &'static [&'static str],
    /// Flat, already-expanded phrase lists (e.g. `"IS NOT DISTINCT FROM"`, one entry per
    /// alternative). Built once from a compact form via [`phrases::expand`] when the dialect
    /// is constructed; owned because expansion allocates, even though the containing
    /// [`Dialect`] itself lives for the process via [`OnceLock`].
    pub reserved_keyword_phrases: Vec<String>,
    pub reserved_data_type_phrases: Vec<String>,
    pub reserved_function_names: &'static [&'static str],
    pub reserved_data_types: &'static [&'static str],
    pub reserved_keywords: &'static [&'static str],
    pub string_types: &'static [QuoteForm],
    pub ident_types: &'static [QuoteForm],
    pub variable_types: &'static [QuoteForm],
    pub extra_parens: &'static [(&'static str, &'static str)],
    pub param_types: ParamTypes,
    pub line_comment_types: &'static [&'static str],
    pub nested_block_comments: bool,
    pub ident_chars: IdentChars,
    pub param_chars: IdentChars,
    pub operators: &'static [&'static str],
    pub property_access_operators: &'static [&'static str],
    pub operator_keyword: bool,
    pub underscores_in_numbers: bool,
}

/// Which clauses render on a single line regardless of width, post-processed into sets.
#[derive(Debug, Clone)]
pub struct FormatOptionsTable {
    pub always_dense_operators: &'static [&'static str],
    pub oneline_clauses: HashSet<&'static str>,
    pub tabular_oneline_clauses: HashSet<&'static str>,
}

fn build_format_options_table(
    always_dense_operators: &'static [&'static str],
    oneline_clauses: &'static [&'static str],
    tabular_oneline_clauses: &'static [&'static str],
) -> FormatOptionsTable {
    let oneline: HashSet<&'static str> = oneline_clauses.iter().copied().collect();
    let tabular = if tabular_oneline_clauses.is_empty() {
        oneline.clone()
    } else {
        tabular_oneline_clauses.iter().copied().collect()
    };
    FormatOptionsTable {
        always_dense_operators,
        oneline_clauses: oneline,
        tabular_oneline_clauses: tabular,
    }
}

/// An immutable, process-lifetime bundle of lexer and formatter data for one SQL dialect.
#[derive(Debug, Clone)]
pub struct Dialect {
    pub name: &'static str,
    pub tokenizer_options: TokenizerOptions,
    pub format_options: FormatOptionsTable,
}

impl Dialect {
    fn postgresql() -> Dialect {
        let (always_dense, oneline, tabular) = postgresql::format_option_tables();
        Dialect {
            name: "postgresql",
            tokenizer_options: postgresql::tokenizer_options(),
            format_options: build_format_options_table(always_dense, oneline, tabular),
        }
    }
}

static POSTGRESQL: OnceLock<Dialect> = OnceLock::new();

/// Returns the cached PostgreSQL dialect, building it on first use.
///
/// Mirrors the distilled source's per-name `sync.Map` dialect cache (`CreateDialect`), using
/// `std::sync::OnceLock` so no extra dependency is needed for a single-dialect cache.
pub fn postgresql() -> &'static Dialect {
    POSTGRESQL.get_or_init(Dialect::postgresql)
}

/// The [`crate::options::Language`] selector's dialect lookup. Returns `None` for any
/// unrecognized name, which the caller turns into a `Config` error
/// (`"Unsupported SQL dialect: <name>"`).
pub fn by_name(name: &str) -> Option<&'static Dialect> {
    match name {
        "postgresql" => Some(postgresql()),
        _ => None,
    }
}
