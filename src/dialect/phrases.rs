//! A tiny compact-phrase grammar for authoring dialect phrase tables once and expanding them
//! at static-init time into the flat phrase lists the token classifier indexes.
//!
//! Grammar: `{a|b}` is a mandatory choice among alternatives, `[a|b]` is the same choice but
//! also allows omitting it entirely, bare words (which may contain interior spaces) are
//! literal, and juxtaposition is concatenation. For example `"IS [NOT] DISTINCT FROM"` expands
//! to `["IS DISTINCT FROM", "IS NOT DISTINCT FROM"]`.
//!
//! This expander has exactly one caller: dialect table construction, which runs once per
//! process via [`std::sync::OnceLock`]. It is never invoked on user-supplied SQL text, so a
//! malformed compact phrase (an authoring bug in this crate's own tables) is reported by
//! panicking rather than by a `Result` — there is no caller who could recover from it.

#[derive(Debug, Clone)]
enum Node {
    Word(String),
    Conc(Vec<Node>),
    Mandatory(Vec<Node>),
    Optional(Vec<Node>),
}

/// Expand every compact phrase in `phrases` into its full set of literal alternatives.
pub fn expand(phrases: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    for phrase in phrases {
        out.extend(expand_one(phrase));
    }
    out
}

fn expand_one(phrase: &str) -> Vec<String> {
    let chars: Vec<char> = phrase.chars().collect();
    let (items, index) = parse_alternation(&chars, 0, None);
    assert_eq!(index, chars.len(), "trailing input in phrase: {phrase}");
    let node = Node::Mandatory(items);
    build_combinations(&node)
        .into_iter()
        .map(|s| strip_extra_whitespace(&s))
        .collect()
}

fn strip_extra_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_alternation(chars: &[char], mut index: usize, expect_closing: Option<char>) -> (Vec<Node>, usize) {
    let mut alternatives = Vec::new();
    loop {
        if index >= chars.len() {
            if expect_closing.is_some() {
                panic!("unbalanced bracket in phrase");
            }
            return (alternatives, index);
        }
        let (term, new_index) = parse_concatenation(chars, index);
        alternatives.push(term);
        index = new_index;
        if index < chars.len() && chars[index] == '|' {
            index += 1;
            continue;
        }
        if index < chars.len() && (chars[index] == '}' || chars[index] == ']') {
            if let Some(expected) = expect_closing {
                assert_eq!(chars[index], expected, "mismatched bracket in phrase");
            }
            index += 1;
            return (alternatives, index);
        }
        if index == chars.len() {
            if expect_closing.is_some() {
                panic!("unbalanced bracket in phrase");
            }
            return (alternatives, index);
        }
        panic!("unexpected character {:?} in phrase", chars[index]);
    }
}

fn parse_concatenation(chars: &[char], mut index: usize) -> (Node, usize) {
    let mut items = Vec::new();
    loop {
        match parse_term(chars, index) {
            Some((term, new_index)) => {
                items.push(term);
                index = new_index;
            }
            None => break,
        }
    }
    if items.len() == 1 {
        (items.into_iter().next().unwrap(), index)
    } else {
        (Node::Conc(items), index)
    }
}

fn parse_term(chars: &[char], index: usize) -> Option<(Node, usize)> {
    if index >= chars.len() {
        return None;
    }
    match chars[index] {
        '{' => {
            let (items, new_index) = parse_alternation(chars, index + 1, Some('}'));
            Some((Node::Mandatory(items), new_index))
        }
        '[' => {
            let (items, new_index) = parse_alternation(chars, index + 1, Some(']'));
            Some((Node::Optional(items), new_index))
        }
        _ => {
            let mut end = index;
            while end < chars.len() {
                let ch = chars[end];
                if ch.is_ascii_alphanumeric() || ch == '_' || ch == ' ' {
                    end += 1;
                } else {
                    break;
                }
            }
            if end == index {
                None
            } else {
                let word: String = chars[index..end].iter().collect();
                Some((Node::Word(word), end))
            }
        }
    }
}

fn build_combinations(node: &Node) -> Vec<String> {
    match node {
        Node::Word(w) => vec![w.clone()],
        Node::Conc(items) => {
            let mut out = vec![String::new()];
            for item in items {
                out = cross(&out, &build_combinations(item));
            }
            out
        }
        Node::Mandatory(items) => items.iter().flat_map(build_combinations).collect(),
        Node::Optional(items) => {
            let mut out = vec![String::new()];
            for item in items {
                out.extend(build_combinations(item));
            }
            out
        }
    }
}

fn cross(xs: &[String], ys: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(xs.len() * ys.len());
    for x in xs {
        for y in ys {
            out.push(format!("{x}{y}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_optional_block() {
        let mut got = expand(&["IS [NOT] DISTINCT FROM"]);
        got.sort();
        assert_eq!(got, vec!["IS DISTINCT FROM", "IS NOT DISTINCT FROM"]);
    }

    #[test]
    fn expands_mandatory_alternation() {
        let mut got = expand(&["UNION {ALL|DISTINCT}"]);
        got.sort();
        assert_eq!(got, vec!["UNION ALL", "UNION DISTINCT"]);
    }

    #[test]
    fn plain_phrase_passes_through() {
        assert_eq!(expand(&["LEFT OUTER JOIN"]), vec!["LEFT OUTER JOIN"]);
    }
}
