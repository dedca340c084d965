//! The layout buffer: literal strings plus whitespace directives, with fix-up rules applied
//! as each item is appended (SPEC_FULL.md §4.5).

pub mod indentation;
pub mod inline;
pub mod tabular;

pub use indentation::Indentation;
pub use inline::{InlineLayout, InlineOverflow};

/// A whitespace directive understood by [`Layout::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ws {
    Space,
    NoSpace,
    NoNewline,
    Newline,
    MandatoryNewline,
    Indent,
    SingleIndent,
}

/// One appended unit: either a literal string or a whitespace directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Str(String),
    Ws(Ws),
}

impl From<&str> for Item {
    fn from(s: &str) -> Item {
        Item::Str(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Item {
        Item::Str(s)
    }
}

impl From<Ws> for Item {
    fn from(ws: Ws) -> Item {
        Item::Ws(ws)
    }
}

/// Builds up one statement's output. Each of its six whitespace directives is normalized
/// against the buffer's current tail as it's added, so callers never need to reason about
/// redundant spaces/newlines themselves.
#[derive(Debug, Clone)]
pub struct Layout {
    items: Vec<Item>,
    pub indentation: Indentation,
}

/// Appends a run of items to a [`Layout`], converting each argument via `Into<Item>` — mirrors
/// the distilled source's variadic `Layout.Add(items ...interface{})`.
#[macro_export]
macro_rules! layout_add {
    ($layout:expr $(, $item:expr)* $(,)?) => {
        $layout.add(vec![$(::core::convert::Into::<$crate::layout::Item>::into($item)),*])
    };
}

impl Layout {
    pub fn new(indentation: Indentation) -> Layout {
        Layout { items: Vec::new(), indentation }
    }

    pub fn add(&mut self, items: impl IntoIterator<Item = Item>) {
        for item in items {
            match item {
                Item::Ws(ws) => self.add_ws(ws),
                Item::Str(s) => self.items.push(Item::Str(s)),
            }
        }
    }

    fn add_ws(&mut self, ws: Ws) {
        match ws {
            Ws::Space => self.items.push(Item::Ws(Ws::Space)),
            Ws::NoSpace => self.trim_horizontal_whitespace(),
            Ws::NoNewline => self.trim_whitespace(),
            Ws::Newline => {
                self.trim_horizontal_whitespace();
                self.add_newline(Ws::Newline);
            }
            Ws::MandatoryNewline => {
                self.trim_horizontal_whitespace();
                self.add_newline(Ws::MandatoryNewline);
            }
            Ws::Indent => self.add_indentation(),
            Ws::SingleIndent => self.items.push(Item::Ws(Ws::SingleIndent)),
        }
    }

    fn trim_horizontal_whitespace(&mut self) {
        while let Some(Item::Ws(Ws::Space | Ws::SingleIndent)) = self.items.last() {
            self.items.pop();
        }
    }

    fn trim_whitespace(&mut self) {
        while let Some(Item::Ws(Ws::Space | Ws::SingleIndent | Ws::Newline)) = self.items.last() {
            self.items.pop();
        }
    }

    fn add_newline(&mut self, newline: Ws) {
        match self.items.last() {
            None => {}
            Some(Item::Ws(Ws::Newline)) => {
                *self.items.last_mut().unwrap() = Item::Ws(newline);
            }
            Some(Item::Ws(Ws::MandatoryNewline)) => {}
            _ => self.items.push(Item::Ws(newline)),
        }
    }

    fn add_indentation(&mut self) {
        for _ in 0..self.indentation.level() {
            self.items.push(Item::Ws(Ws::SingleIndent));
        }
    }

    pub fn to_string(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                Item::Str(s) => out.push_str(s),
                Item::Ws(Ws::Space) => out.push(' '),
                Item::Ws(Ws::Newline | Ws::MandatoryNewline) => out.push('\n'),
                Item::Ws(Ws::SingleIndent) => out.push_str(self.indentation.single_indent()),
                Item::Ws(Ws::NoSpace | Ws::NoNewline | Ws::Indent) => {}
            }
        }
        out
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_space_trims_trailing_space() {
        let mut layout = Layout::new(Indentation::new("  ".to_string()));
        layout_add!(layout, "a", Ws::Space, Ws::NoSpace, "b");
        assert_eq!(layout.to_string(), "ab");
    }

    #[test]
    fn newline_is_idempotent_and_mandatory_wins() {
        let mut layout = Layout::new(Indentation::new("  ".to_string()));
        layout_add!(layout, "a", Ws::Newline, Ws::Newline, Ws::MandatoryNewline, Ws::Newline, "b");
        assert_eq!(layout.to_string(), "a\nb");
    }

    #[test]
    fn indent_emits_one_single_indent_per_level() {
        let mut layout = Layout::new(Indentation::new("  ".to_string()));
        layout.indentation.increase_top_level();
        layout.indentation.increase_top_level();
        layout_add!(layout, Ws::Indent, "x");
        assert_eq!(layout.to_string(), "    x");
    }
}
