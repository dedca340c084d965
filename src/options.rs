//! The public configuration surface: [`FormatOptions`] and its validation.

use crate::dialect::ParamTypesOverride;
use crate::error::Error;
use crate::params::ParamValues;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The SQL dialect to format. Currently only `Postgresql` is implemented; the enum exists (as
/// opposed to a bare string) so an unsupported value is a compile error rather than a runtime
/// one, while still leaving room for a `Custom` variant later without breaking callers who
/// match exhaustively today (adding a variant is this crate's job to do, not a breaking
/// requirement on its own call sites).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Language {
    #[default]
    Postgresql,
}

impl Language {
    pub fn name(self) -> &'static str {
        match self {
            Language::Postgresql => "postgresql",
        }
    }
}

/// A casing mode applied to keywords, unquoted identifiers, data types, or function names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Case {
    /// Emit the canonical (upper-cased, whitespace-collapsed) `text`.
    #[default]
    Preserve,
    Upper,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndentStyle {
    #[default]
    Standard,
    TabularLeft,
    TabularRight,
}

impl IndentStyle {
    pub fn is_tabular(self) -> bool {
        matches!(self, IndentStyle::TabularLeft | IndentStyle::TabularRight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LogicalOperatorNewline {
    #[default]
    Before,
    After,
}

/// Every option `format()` recognizes. Construct with [`FormatOptions::default`] and the
/// builder-style `with_*` setters.
///
/// Unlike the distilled source's `FormatOptions`, there is no shadow `ExpressionWidthSet`/
/// `LinesBetweenQueriesSet` flag pair: `expression_width`/`lines_between_queries` simply
/// default to their documented values and are validated directly, since this type is always
/// fully-populated (never a partial overlay) once constructed. See DESIGN.md.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    pub language: Language,
    pub tab_width: u32,
    pub use_tabs: bool,
    pub keyword_case: Case,
    pub identifier_case: Case,
    pub data_type_case: Case,
    pub function_case: Case,
    pub indent_style: IndentStyle,
    pub logical_operator_newline: LogicalOperatorNewline,
    pub expression_width: u32,
    pub lines_between_queries: u32,
    pub dense_operators: bool,
    pub newline_before_semicolon: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub params: Option<ParamValues>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub param_types: ParamTypesOverride,
}

impl Default for FormatOptions {
    fn default() -> FormatOptions {
        FormatOptions {
            language: Language::default(),
            tab_width: 2,
            use_tabs: false,
            keyword_case: Case::default(),
            identifier_case: Case::default(),
            data_type_case: Case::default(),
            function_case: Case::default(),
            indent_style: IndentStyle::default(),
            logical_operator_newline: LogicalOperatorNewline::default(),
            expression_width: 50,
            lines_between_queries: 1,
            dense_operators: false,
            newline_before_semicolon: false,
            params: None,
            param_types: ParamTypesOverride::default(),
        }
    }
}

impl FormatOptions {
    pub fn with_expression_width(mut self, width: u32) -> FormatOptions {
        self.expression_width = width;
        self
    }

    pub fn with_indent_style(mut self, style: IndentStyle) -> FormatOptions {
        self.indent_style = style;
        self
    }

    pub fn with_keyword_case(mut self, case: Case) -> FormatOptions {
        self.keyword_case = case;
        self
    }

    pub fn with_params(mut self, params: ParamValues) -> FormatOptions {
        self.params = Some(params);
        self
    }

    /// Raised before any lexing happens: unsupported language, non-positive expression width,
    /// empty custom regex. Message text is exactly stable (SPEC_FULL.md §7, §8).
    pub fn validate(&self) -> Result<(), Error> {
        if self.expression_width == 0 {
            return Err(Error::config(format!(
                "expressionWidth config must be positive number. Received {} instead.",
                self.expression_width
            )));
        }
        if let Some(custom) = &self.param_types.custom {
            for param in custom {
                if param.regex.is_empty() {
                    return Err(Error::config(
                        "Empty regex given in custom paramTypes.".to_string(),
                    ));
                }
            }
        }
        if crate::dialect::by_name(self.language.name()).is_none() {
            return Err(Error::config(format!(
                "Unsupported SQL dialect: {}",
                self.language.name()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_is_config_error() {
        let opts = FormatOptions::default().with_expression_width(0);
        let err = opts.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "expressionWidth config must be positive number. Received 0 instead."
        );
    }

    #[test]
    fn default_options_are_valid() {
        assert!(FormatOptions::default().validate().is_ok());
    }
}
