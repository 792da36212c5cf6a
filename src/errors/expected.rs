//! Expectation failures with structured payloads
//!
//! These kinds stay outside the generic erasure on purpose: their payload is
//! a borrowed token sequence or class name, not a plain message, and erasing
//! that would lose the structure reporting code renders from.

use std::fmt;

use crate::input::Input;

/// The matcher expected a specific literal token sequence.
///
/// `index` identifies the first token that mismatched; the failure itself is
/// a point at `position()`. The expected sequence is borrowed from the
/// grammar, never copied, and must outlive the record's use.
pub struct ExpectedLiteral<'s, I: Input> {
    pos: I::Cursor,
    literal: &'s [I::Token],
    index: usize,
}

impl<'s, I: Input> ExpectedLiteral<'s, I> {
    /// Record a mismatch at `pos`: `literal[index]` was expected next.
    ///
    /// `index < literal.len()` is a caller-guaranteed precondition.
    pub fn new(pos: I::Cursor, literal: &'s [I::Token], index: usize) -> Self {
        Self {
            pos,
            literal,
            index,
        }
    }

    pub fn position(&self) -> I::Cursor {
        self.pos
    }

    pub fn begin(&self) -> I::Cursor {
        self.pos
    }

    pub fn end(&self) -> I::Cursor {
        self.pos
    }

    /// The expected token sequence.
    pub fn string(&self) -> &'s [I::Token] {
        self.literal
    }

    /// Index of the first mismatched token.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Length of the expected sequence.
    pub fn length(&self) -> usize {
        self.literal.len()
    }

    /// The token that was expected at the mismatch.
    ///
    /// # Panics
    ///
    /// Panics if the `index < length` precondition was violated at
    /// construction. The engine guarantees it by construction (matching
    /// stopped *inside* the literal), so there is no checked variant.
    pub fn character(&self) -> I::Token {
        self.literal[self.index]
    }
}

impl<I: Input> Clone for ExpectedLiteral<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Input> Copy for ExpectedLiteral<'_, I> {}

impl<I: Input> PartialEq for ExpectedLiteral<'_, I> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.literal == other.literal && self.index == other.index
    }
}

impl<I: Input> Eq for ExpectedLiteral<'_, I> where I::Token: Eq {}

impl<I: Input> fmt::Debug for ExpectedLiteral<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpectedLiteral")
            .field("pos", &self.pos)
            .field("literal", &self.literal)
            .field("index", &self.index)
            .finish()
    }
}

impl<I: Input> fmt::Display for ExpectedLiteral<'_, I>
where
    I::Token: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected '")?;
        for token in self.literal {
            write!(f, "{token}")?;
        }
        f.write_str("'")
    }
}

impl<I: Input> std::error::Error for ExpectedLiteral<'_, I> where I::Token: fmt::Display {}

/// The matcher expected a keyword.
///
/// Unlike [`ExpectedLiteral`] the mismatch is discovered only after also
/// inspecting trailing characters (the keyword boundary check), so a range
/// is recorded rather than a point.
pub struct ExpectedKeyword<'s, I: Input> {
    begin: I::Cursor,
    end: I::Cursor,
    keyword: &'s [I::Token],
}

impl<'s, I: Input> ExpectedKeyword<'s, I> {
    /// Record a keyword mismatch spanning `[begin, end)`.
    ///
    /// `end >= begin` is a caller-guaranteed precondition.
    pub fn new(begin: I::Cursor, end: I::Cursor, keyword: &'s [I::Token]) -> Self {
        Self {
            begin,
            end,
            keyword,
        }
    }

    /// The anchor position: the start of the range.
    pub fn position(&self) -> I::Cursor {
        self.begin
    }

    pub fn begin(&self) -> I::Cursor {
        self.begin
    }

    pub fn end(&self) -> I::Cursor {
        self.end
    }

    /// The expected keyword.
    pub fn string(&self) -> &'s [I::Token] {
        self.keyword
    }

    /// Length of the expected keyword.
    pub fn length(&self) -> usize {
        self.keyword.len()
    }
}

impl<I: Input> Clone for ExpectedKeyword<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Input> Copy for ExpectedKeyword<'_, I> {}

impl<I: Input> PartialEq for ExpectedKeyword<'_, I> {
    fn eq(&self, other: &Self) -> bool {
        self.begin == other.begin && self.end == other.end && self.keyword == other.keyword
    }
}

impl<I: Input> Eq for ExpectedKeyword<'_, I> where I::Token: Eq {}

impl<I: Input> fmt::Debug for ExpectedKeyword<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpectedKeyword")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .field("keyword", &self.keyword)
            .finish()
    }
}

impl<I: Input> fmt::Display for ExpectedKeyword<'_, I>
where
    I::Token: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected keyword '")?;
        for token in self.keyword {
            write!(f, "{token}")?;
        }
        f.write_str("'")
    }
}

impl<I: Input> std::error::Error for ExpectedKeyword<'_, I> where I::Token: fmt::Display {}

/// The matcher expected any character of a named class (e.g. "digit") and
/// found none. Always a point failure.
#[derive(thiserror::Error)]
#[error("expected {name}")]
pub struct ExpectedCharClass<I: Input> {
    pos: I::Cursor,
    name: &'static str,
}

impl<I: Input> ExpectedCharClass<I> {
    pub fn new(pos: I::Cursor, name: &'static str) -> Self {
        Self { pos, name }
    }

    pub fn position(&self) -> I::Cursor {
        self.pos
    }

    pub fn begin(&self) -> I::Cursor {
        self.pos
    }

    pub fn end(&self) -> I::Cursor {
        self.pos
    }

    /// The name of the expected character class.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<I: Input> Clone for ExpectedCharClass<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Input> Copy for ExpectedCharClass<I> {}

impl<I: Input> PartialEq for ExpectedCharClass<I> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.name == other.name
    }
}

impl<I: Input> Eq for ExpectedCharClass<I> {}

impl<I: Input> fmt::Debug for ExpectedCharClass<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpectedCharClass")
            .field("pos", &self.pos)
            .field("name", &self.name)
            .finish()
    }
}
