//! The width-bounded inline variant of [`super::Layout`] (SPEC_FULL.md §4.5).
//!
//! The distilled source signals overflow by `panic(InlineLayoutError{})` and a deferred
//! `recover()` at the call site that attempted the inline render. SPEC_FULL.md §9's design
//! note calls for replacing that with "an unwindable local status value (e.g. a tagged result
//! type propagated with the `?`/early-return idiom)" — this module is that replacement:
//! [`InlineLayout::add`] returns `Result<(), InlineOverflow>` instead of panicking, and the
//! formatter's inline attempt simply propagates it with `?` and catches it one level up.

use super::{Indentation, Item, Layout, Ws};

/// Sentinel: the inline attempt's running length exceeded its budget, or it needed a newline
/// it isn't allowed to emit. Carries no data — callers only care that it happened, not why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineOverflow;

pub struct InlineLayout {
    layout: Layout,
    expression_width: usize,
    length: usize,
    trailing_space: bool,
}

impl InlineLayout {
    pub fn new(expression_width: usize) -> InlineLayout {
        InlineLayout {
            layout: Layout::new(Indentation::new(String::new())),
            expression_width,
            length: 0,
            trailing_space: false,
        }
    }

    pub fn add(&mut self, items: impl IntoIterator<Item = Item>) -> Result<(), InlineOverflow> {
        let items: Vec<Item> = items.into_iter().collect();
        for item in &items {
            self.add_to_length(item)?;
            if self.length > self.expression_width {
                return Err(InlineOverflow);
            }
        }
        self.layout.add(items);
        Ok(())
    }

    fn add_to_length(&mut self, item: &Item) -> Result<(), InlineOverflow> {
        match item {
            Item::Str(s) => {
                self.length += s.chars().count();
                self.trailing_space = false;
            }
            Item::Ws(Ws::MandatoryNewline | Ws::Newline) => return Err(InlineOverflow),
            Item::Ws(Ws::Indent | Ws::SingleIndent | Ws::Space) => {
                if !self.trailing_space {
                    self.length += 1;
                    self.trailing_space = true;
                }
            }
            Item::Ws(Ws::NoNewline | Ws::NoSpace) => {
                if self.trailing_space {
                    self.trailing_space = false;
                    self.length = self.length.saturating_sub(1);
                }
            }
        }
        Ok(())
    }

    pub fn to_string(&self) -> String {
        self.layout.to_string()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.layout.items().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout_add;

    #[test]
    fn fits_within_budget() {
        let mut inline = InlineLayout::new(10);
        assert!(inline.add(vec![Item::from("abc")]).is_ok());
        assert_eq!(inline.to_string(), "abc");
    }

    #[test]
    fn overflow_is_reported() {
        let mut inline = InlineLayout::new(3);
        let err = inline.add(vec![Item::from("abcd")]);
        assert_eq!(err, Err(InlineOverflow));
    }

    #[test]
    fn newline_always_overflows() {
        let mut inline = InlineLayout::new(100);
        let err = layout_add!(inline, "a", Ws::Newline);
        assert_eq!(err, Err(InlineOverflow));
    }
}
