//! Input abstraction for failure records and error contexts
//!
//! The matching engine owns the real reader; this module defines only the
//! seam the diagnostic types need from it:
//! - [`Input`] - the cursor and token types of an input
//! - [`RootInput`] - resolution of a nested sub-parse to its outermost input
//!
//! Two concrete inputs ship with the crate so it is usable on its own:
//! [`StrInput`] over a borrowed `&str` (byte-offset cursors via
//! [`TextSize`]), and [`SubInput`] for a sub-parse nested in a parent input.

use std::fmt;

use text_size::TextSize;

/// An input an error can point into.
///
/// Implementations carry no data requirements here; the diagnostic types only
/// need to know the cursor and token types so records can hold positions and
/// borrow expected-token sequences.
pub trait Input {
    /// A stable, comparable, copyable position handle into the input.
    ///
    /// A cursor is a value, not a reference into engine-owned memory.
    type Cursor: Copy + Eq + Ord + fmt::Debug;

    /// The character/byte type of the input's sequence.
    type Token: Copy + PartialEq + fmt::Debug;
}

/// Resolution of an input to the outermost input it is nested in.
///
/// Positions are reported against the root input, so error contexts need a
/// way from any sub-parse view back to it. A standalone input is its own
/// root; a nested input delegates to its parent's `root_input()`, which
/// resolves the chain transitively. The delegation is re-derived on every
/// call rather than cached, so a change anywhere in the parent chain is
/// always reflected.
///
/// Whether an input is nested is decided by which impl the type provides.
/// There is no runtime "has parent" check.
pub trait RootInput: Input {
    /// The outermost input type of the chain.
    type Root: Input + ?Sized;

    /// The root input. For a standalone input this is `self`.
    fn root_input(&self) -> &Self::Root;
}

/// A standalone input over a borrowed `&str`.
///
/// Cursors are byte offsets ([`TextSize`]); tokens are bytes. The text is
/// borrowed, never copied, and must outlive every record pointing into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrInput<'s> {
    text: &'s str,
}

impl<'s> StrInput<'s> {
    pub fn new(text: &'s str) -> Self {
        Self { text }
    }

    /// The underlying text.
    pub fn text(&self) -> &'s str {
        self.text
    }

    /// Cursor at the start of the input.
    pub fn start(&self) -> TextSize {
        TextSize::new(0)
    }

    /// Cursor one past the last byte.
    pub fn end(&self) -> TextSize {
        TextSize::of(self.text)
    }
}

impl Input for StrInput<'_> {
    type Cursor = TextSize;
    type Token = u8;
}

impl RootInput for StrInput<'_> {
    type Root = Self;

    fn root_input(&self) -> &Self {
        self
    }
}

/// A sub-parse view nested in a parent input.
///
/// Created by the engine when a rule re-parses a slice of an outer input
/// (e.g. the content of a string literal). Cursors and tokens are the
/// parent's, so positions recorded inside the sub-parse stay meaningful
/// against the root. `root_input()` resolves through the parent, however
/// deep the nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubInput<'p, I: Input> {
    parent: &'p I,
    begin: I::Cursor,
    end: I::Cursor,
}

impl<'p, I: Input> SubInput<'p, I> {
    /// Create a view of `parent` covering `[begin, end)`.
    ///
    /// `end >= begin` is a caller-guaranteed precondition, as everywhere in
    /// this crate.
    pub fn new(parent: &'p I, begin: I::Cursor, end: I::Cursor) -> Self {
        Self { parent, begin, end }
    }

    /// The input this view is nested in (one level up, not the root).
    pub fn parent(&self) -> &'p I {
        self.parent
    }

    /// Start of the viewed range, as a cursor into the parent.
    pub fn begin(&self) -> I::Cursor {
        self.begin
    }

    /// End of the viewed range, as a cursor into the parent.
    pub fn end(&self) -> I::Cursor {
        self.end
    }
}

impl<I: Input> Input for SubInput<'_, I> {
    type Cursor = I::Cursor;
    type Token = I::Token;
}

impl<'p, I: RootInput> RootInput for SubInput<'p, I> {
    type Root = I::Root;

    fn root_input(&self) -> &Self::Root {
        self.parent.root_input()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_input_cursors() {
        let input = StrInput::new("digit");
        assert_eq!(input.start(), TextSize::new(0));
        assert_eq!(input.end(), TextSize::new(5));
        assert_eq!(input.text(), "digit");
    }

    #[test]
    fn test_standalone_input_is_its_own_root() {
        let input = StrInput::new("x + y");
        assert!(std::ptr::eq(input.root_input(), &input));
    }

    #[test]
    fn test_sub_input_resolves_to_parent_root() {
        let root = StrInput::new("\"escaped \\n text\"");
        let sub = SubInput::new(&root, TextSize::new(1), TextSize::new(16));
        assert!(std::ptr::eq(sub.root_input(), &root));
    }

    #[test]
    fn test_nested_sub_inputs_resolve_transitively() {
        let root = StrInput::new("outer [ inner [ leaf ] ]");
        let mid = SubInput::new(&root, TextSize::new(8), TextSize::new(22));
        let leaf = SubInput::new(&mid, TextSize::new(16), TextSize::new(20));

        // The chain resolves to the outermost input, not one level up.
        assert!(std::ptr::eq(leaf.root_input(), &root));
        assert!(!std::ptr::eq(
            leaf.root_input() as *const _ as *const (),
            leaf.parent() as *const _ as *const (),
        ));
    }

    #[test]
    fn test_sub_input_keeps_parent_cursor_space() {
        let root = StrInput::new("abcdef");
        let sub = SubInput::new(&root, TextSize::new(2), TextSize::new(4));
        assert_eq!(sub.begin(), TextSize::new(2));
        assert_eq!(sub.end(), TextSize::new(4));
    }
}
