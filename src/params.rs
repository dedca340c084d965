//! Parameter-placeholder substitution, consulted by the expression formatter when rendering
//! a [`crate::token::TokenKind::NamedParameter`]/`QuotedParameter`/`NumberedParameter`/
//! `PositionalParameter`/`CustomParameter` leaf.

use std::collections::HashMap;

/// The substitution values supplied through `FormatOptions::params`.
#[derive(Debug, Clone)]
pub enum ParamValues {
    /// Positional substitutions, consumed in order by `POSITIONAL_PARAMETER` (`?`) tokens.
    List(Vec<String>),
    /// Keyed substitutions, consulted by named/numbered/quoted parameters via their `key`.
    Map(HashMap<String, String>),
}

/// Tracks substitution lookups across one `format()` call, including the running index used
/// by positional parameters.
///
/// The positional index must be explicitly snapshotted before a speculative inline-layout
/// attempt and restored if that attempt overflows, so the eventual multi-line render consumes
/// the same positions the aborted attempt would have (SPEC_FULL.md §9).
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: Option<ParamValues>,
    index: usize,
}

impl Params {
    pub fn new(values: Option<ParamValues>) -> Params {
        Params { values, index: 0 }
    }

    /// Look up a substitution for a keyed parameter (named/numbered/quoted/custom). Falls
    /// back to `text` (the placeholder's own canonical spelling) when there is no match.
    pub fn get_keyed(&self, key: &str, text: &str) -> String {
        match &self.values {
            Some(ParamValues::Map(map)) => map.get(key).cloned().unwrap_or_else(|| text.to_string()),
            _ => text.to_string(),
        }
    }

    /// Look up a substitution for a positional parameter (`?`), consuming the next position
    /// regardless of whether a value was found there.
    pub fn get_positional(&mut self, text: &str) -> String {
        let result = match &self.values {
            Some(ParamValues::List(list)) => list
                .get(self.index)
                .cloned()
                .unwrap_or_else(|| text.to_string()),
            Some(ParamValues::Map(map)) => map
                .get(&(self.index + 1).to_string())
                .cloned()
                .unwrap_or_else(|| text.to_string()),
            None => text.to_string(),
        };
        self.index += 1;
        result
    }

    pub fn positional_index(&self) -> usize {
        self.index
    }

    pub fn set_positional_index(&mut self, index: usize) {
        self.index = index;
    }
}
