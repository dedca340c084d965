//! The token classifier: phrase-merging and identifier→reserved-kind promotion
//! (SPEC_FULL.md §4.2), ported close to line-for-line from the distilled source's
//! `token_classifier.go`.

use std::collections::HashMap;

use crate::dialect::TokenizerOptions;
use crate::token::{to_canonical, Token, TokenKind};

struct PhraseEntry {
    words: Vec<String>,
    kind: TokenKind,
    text: String,
}

type PhraseIndex = HashMap<String, Vec<PhraseEntry>>;

/// Built once per `format()` call from the dialect's phrase lists (themselves built once per
/// process — see `dialect::postgresql`), then applied to one statement's token vector.
pub struct TokenClassifier {
    keyword_phrases: PhraseIndex,
    data_type_phrases: PhraseIndex,
    data_type_word_phrases: PhraseIndex,
    clause_phrases: PhraseIndex,
    select_phrases: PhraseIndex,
    set_op_phrases: PhraseIndex,
    join_phrases: PhraseIndex,

    reserved_clauses: HashMap<String, ()>,
    reserved_select: HashMap<String, ()>,
    reserved_set_operations: HashMap<String, ()>,
    reserved_joins: HashMap<String, ()>,
    reserved_keywords: HashMap<String, ()>,
    reserved_data_types: HashMap<String, ()>,
    reserved_function_names: HashMap<String, ()>,

    has_limit: bool,
    supports_xor: bool,
}

impl TokenClassifier {
    pub fn new(cfg: &TokenizerOptions) -> TokenClassifier {
        let data_type_phrase_items: Vec<&str> =
            cfg.reserved_data_type_phrases.iter().map(String::as_str).collect();
        let data_type_word_phrase_items = dedupe(multi_word_items(cfg.reserved_data_types));

        TokenClassifier {
            keyword_phrases: build_phrase_index(
                &cfg.reserved_keyword_phrases.iter().map(String::as_str).collect::<Vec<_>>(),
                TokenKind::ReservedKeywordPhrase,
            ),
            data_type_phrases: build_phrase_index(&data_type_phrase_items, TokenKind::ReservedDataTypePhrase),
            data_type_word_phrases: build_phrase_index(&data_type_word_phrase_items, TokenKind::ReservedDataType),
            clause_phrases: build_phrase_index(cfg.reserved_clauses, TokenKind::ReservedClause),
            select_phrases: build_phrase_index(cfg.reserved_select, TokenKind::ReservedSelect),
            set_op_phrases: build_phrase_index(cfg.reserved_set_operations, TokenKind::ReservedSetOperation),
            join_phrases: build_phrase_index(cfg.reserved_joins, TokenKind::ReservedJoin),
            reserved_clauses: build_word_set(cfg.reserved_clauses),
            reserved_select: build_word_set(cfg.reserved_select),
            reserved_set_operations: build_word_set(cfg.reserved_set_operations),
            reserved_joins: build_word_set(cfg.reserved_joins),
            reserved_keywords: build_word_set(cfg.reserved_keywords),
            reserved_data_types: build_word_set(cfg.reserved_data_types),
            reserved_function_names: build_word_set(cfg.reserved_function_names),
            has_limit: cfg.reserved_clauses.iter().any(|s| s.eq_ignore_ascii_case("LIMIT")),
            supports_xor: cfg.supports_xor,
        }
    }

    pub fn classify(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        if tokens.is_empty() {
            return tokens;
        }
        tokens = merge_phrases(tokens, &self.keyword_phrases);
        tokens = merge_phrases(tokens, &self.data_type_word_phrases);
        tokens = merge_phrases(tokens, &self.data_type_phrases);
        tokens = merge_phrases(tokens, &self.clause_phrases);
        tokens = merge_phrases(tokens, &self.select_phrases);
        tokens = merge_phrases(tokens, &self.set_op_phrases);
        tokens = merge_phrases(tokens, &self.join_phrases);

        for tok in tokens.iter_mut() {
            if tok.kind != TokenKind::Identifier {
                continue;
            }
            let word = tok.text.to_ascii_uppercase();
            let promoted = match word.as_str() {
                "CASE" => Some(TokenKind::Case),
                "END" => Some(TokenKind::End),
                "BETWEEN" => Some(TokenKind::Between),
                "WHEN" => Some(TokenKind::When),
                "ELSE" => Some(TokenKind::Else),
                "THEN" => Some(TokenKind::Then),
                "AND" => Some(TokenKind::And),
                "OR" => Some(TokenKind::Or),
                "XOR" if self.supports_xor => Some(TokenKind::Xor),
                "LIMIT" if self.has_limit => Some(TokenKind::Limit),
                _ => None,
            };
            if let Some(kind) = promoted {
                promote(tok, kind);
                continue;
            }
            if matches!(word.as_str(), "XOR" | "LIMIT") {
                // Listed above but not supported/declared by this dialect: leave as identifier.
                continue;
            }

            let fallthrough = [
                (&self.reserved_clauses, TokenKind::ReservedClause),
                (&self.reserved_select, TokenKind::ReservedSelect),
                (&self.reserved_set_operations, TokenKind::ReservedSetOperation),
                (&self.reserved_joins, TokenKind::ReservedJoin),
                (&self.reserved_function_names, TokenKind::ReservedFunctionName),
                (&self.reserved_data_types, TokenKind::ReservedDataType),
                (&self.reserved_keywords, TokenKind::ReservedKeyword),
            ];
            for (set, kind) in fallthrough {
                if set.contains_key(&word) {
                    promote(tok, kind);
                    break;
                }
            }
        }
        tokens
    }
}

fn promote(tok: &mut Token, kind: TokenKind) {
    tok.text = to_canonical(&tok.raw);
    tok.kind = kind;
    log::debug!("classifier promoted {:?} -> {:?}", tok.raw, kind);
}

fn build_phrase_index(phrases: &[&str], kind: TokenKind) -> PhraseIndex {
    let mut index: PhraseIndex = HashMap::new();
    for phrase in phrases {
        let words: Vec<String> = phrase.split_whitespace().map(|w| w.to_ascii_uppercase()).collect();
        if words.len() < 2 {
            continue;
        }
        let entry = PhraseEntry {
            text: to_canonical(phrase),
            words: words.clone(),
            kind,
        };
        index.entry(words[0].clone()).or_default().push(entry);
    }
    for entries in index.values_mut() {
        entries.sort_by(|a, b| b.words.len().cmp(&a.words.len()));
    }
    index
}

fn build_word_set(items: &[&str]) -> HashMap<String, ()> {
    let mut set = HashMap::new();
    for item in items {
        let words: Vec<&str> = item.split_whitespace().collect();
        if words.len() == 1 {
            set.insert(words[0].to_ascii_uppercase(), ());
        }
    }
    set
}

fn multi_word_items(items: &[&str]) -> Vec<&str> {
    items.iter().copied().filter(|s| s.split_whitespace().count() > 1).collect()
}

fn dedupe(items: Vec<&str>) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    items.into_iter().filter(|s| seen.insert(*s)).collect()
}

fn merge_phrases(tokens: Vec<Token>, index: &PhraseIndex) -> Vec<Token> {
    if index.is_empty() {
        return tokens;
    }
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let tok = &tokens[i];
        if tok.kind != TokenKind::Identifier {
            out.push(tokens[i].clone());
            i += 1;
            continue;
        }
        let key = tok.text.to_ascii_uppercase();
        let mut matched_len = 0;
        let mut matched_entry: Option<&PhraseEntry> = None;
        if let Some(entries) = index.get(&key) {
            for entry in entries {
                if matches_phrase(&tokens, i, &entry.words) {
                    matched_len = entry.words.len();
                    matched_entry = Some(entry);
                    break;
                }
            }
        }
        if let Some(entry) = matched_entry {
            out.push(merge_tokens(&tokens, i, matched_len, entry));
            i += matched_len;
        } else {
            out.push(tokens[i].clone());
            i += 1;
        }
    }
    out
}

fn matches_phrase(tokens: &[Token], start: usize, words: &[String]) -> bool {
    if start + words.len() > tokens.len() {
        return false;
    }
    for (offset, word) in words.iter().enumerate() {
        let tok = &tokens[start + offset];
        if tok.kind != TokenKind::Identifier {
            return false;
        }
        if !tok.text.eq_ignore_ascii_case(word) {
            return false;
        }
    }
    true
}

fn merge_tokens(tokens: &[Token], start: usize, len: usize, entry: &PhraseEntry) -> Token {
    let raw = tokens[start..start + len]
        .iter()
        .map(|t| t.raw.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    log::debug!("classifier merged phrase {:?} -> {:?}", raw, entry.kind);
    Token {
        kind: entry.kind,
        raw,
        text: entry.text.clone(),
        key: None,
        start: tokens[start].start,
        preceding_whitespace: tokens[start].preceding_whitespace.clone(),
    }
}
