//! Generic failure records and compile-time tags
//!
//! [`GenericError`] is the type-erased shape every generic failure reduces
//! to: `(begin, end, message)`. [`TaggedError`] shares that shape exactly and
//! adds nothing but a zero-sized tag: the tag's type identity supplies the
//! message at construction, so reporting code that only wants
//! `(position, message)` can read any tagged record through the erased shape
//! with no conversion, while the tag still distinguishes failures at compile
//! time.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use crate::input::Input;

/// A compile-time identity for a generic failure.
///
/// The tag maps to its description through an associated constant, so a tag
/// without a description is a compile error, never a runtime condition. Tags
/// are zero-sized; they never appear in a record's memory layout.
pub trait ErrorTag {
    /// The static message reported for this failure.
    const MESSAGE: &'static str;
}

/// The end of input was expected but more input remained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedEof;

impl ErrorTag for ExpectedEof {
    const MESSAGE: &'static str = "expected end of input";
}

/// Every branch of a choice failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustedChoice;

impl ErrorTag for ExhaustedChoice {
    const MESSAGE: &'static str = "exhausted choice";
}

/// Input remained after the entry production finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnexpectedTrailing;

impl ErrorTag for UnexpectedTrailing {
    const MESSAGE: &'static str = "unexpected trailing input";
}

/// Type-erased generic failure: a plain description anchored at a position
/// or spanning a range.
///
/// `begin == end` denotes a point failure. `end >= begin` is a
/// caller-guaranteed precondition of [`GenericError::spanning`].
#[derive(thiserror::Error)]
#[error("{message}")]
pub struct GenericError<I: Input> {
    begin: I::Cursor,
    end: I::Cursor,
    message: &'static str,
}

impl<I: Input> GenericError<I> {
    /// A point failure at `pos`.
    pub fn new(pos: I::Cursor, message: &'static str) -> Self {
        Self {
            begin: pos,
            end: pos,
            message,
        }
    }

    /// A failure spanning `[begin, end)`.
    pub fn spanning(begin: I::Cursor, end: I::Cursor, message: &'static str) -> Self {
        Self {
            begin,
            end,
            message,
        }
    }

    /// The anchor position (the start, for a range failure).
    pub fn position(&self) -> I::Cursor {
        self.begin
    }

    pub fn begin(&self) -> I::Cursor {
        self.begin
    }

    pub fn end(&self) -> I::Cursor {
        self.end
    }

    /// The human-readable description of the failure.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

// Derives would bound `I` itself; the fields only need `I::Cursor`, which the
// `Input` trait already constrains. Hence manual impls.
impl<I: Input> Clone for GenericError<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Input> Copy for GenericError<I> {}

impl<I: Input> PartialEq for GenericError<I> {
    fn eq(&self, other: &Self) -> bool {
        self.begin == other.begin && self.end == other.end && self.message == other.message
    }
}

impl<I: Input> Eq for GenericError<I> {}

impl<I: Input> fmt::Debug for GenericError<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericError")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .field("message", &self.message)
            .finish()
    }
}

/// Generic failure identified by a tag type.
///
/// Physically a [`GenericError`] whose message was derived from `T::MESSAGE`
/// at construction; the tag survives only in the type. `TaggedError` derefs
/// to the erased record, so every accessor of [`GenericError`] is available
/// directly and reading a tagged record through the erased shape is free.
#[repr(transparent)]
pub struct TaggedError<I: Input, T: ErrorTag> {
    inner: GenericError<I>,
    _tag: PhantomData<T>,
}

impl<I: Input, T: ErrorTag> TaggedError<I, T> {
    /// A point failure at `pos`, described by the tag's message.
    pub fn new(pos: I::Cursor) -> Self {
        Self {
            inner: GenericError::new(pos, T::MESSAGE),
            _tag: PhantomData,
        }
    }

    /// A failure spanning `[begin, end)`, described by the tag's message.
    pub fn spanning(begin: I::Cursor, end: I::Cursor) -> Self {
        Self {
            inner: GenericError::spanning(begin, end, T::MESSAGE),
            _tag: PhantomData,
        }
    }

    /// The erased view of this record.
    pub fn as_error(&self) -> &GenericError<I> {
        &self.inner
    }

    /// Discard the tag, keeping the erased record.
    pub fn into_error(self) -> GenericError<I> {
        self.inner
    }
}

impl<I: Input, T: ErrorTag> Deref for TaggedError<I, T> {
    type Target = GenericError<I>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<I: Input, T: ErrorTag> From<TaggedError<I, T>> for GenericError<I> {
    fn from(error: TaggedError<I, T>) -> Self {
        error.inner
    }
}

impl<I: Input, T: ErrorTag> Clone for TaggedError<I, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Input, T: ErrorTag> Copy for TaggedError<I, T> {}

impl<I: Input, T: ErrorTag> PartialEq for TaggedError<I, T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<I: Input, T: ErrorTag> Eq for TaggedError<I, T> {}

impl<I: Input, T: ErrorTag> fmt::Debug for TaggedError<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedError")
            .field("begin", &self.inner.begin)
            .field("end", &self.inner.end)
            .field("message", &self.inner.message)
            .finish()
    }
}

impl<I: Input, T: ErrorTag> fmt::Display for TaggedError<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<I: Input, T: ErrorTag> std::error::Error for TaggedError<I, T> {}

#[cfg(test)]
mod tests {
    use text_size::TextSize;

    use super::*;
    use crate::input::StrInput;

    type Generic = GenericError<StrInput<'static>>;

    #[test]
    fn test_point_failure_collapses_range() {
        let err = Generic::new(TextSize::new(4), "unterminated comment");
        assert_eq!(err.begin(), err.end());
        assert_eq!(err.position(), TextSize::new(4));
        assert_eq!(err.message(), "unterminated comment");
    }

    #[test]
    fn test_range_failure_anchors_at_begin() {
        let err = Generic::spanning(TextSize::new(2), TextSize::new(9), "malformed escape");
        assert_eq!(err.position(), err.begin());
        assert!(err.end() >= err.begin());
        assert_eq!(err.end(), TextSize::new(9));
    }

    #[test]
    fn test_tagged_record_reads_as_erased_record() {
        let tagged = TaggedError::<StrInput, ExpectedEof>::new(TextSize::new(7));
        let direct = Generic::new(TextSize::new(7), ExpectedEof::MESSAGE);

        // Observationally identical through the erased shape.
        assert_eq!(*tagged.as_error(), direct);
        assert_eq!(tagged.message(), direct.message());
        assert_eq!(tagged.begin(), direct.begin());
        assert_eq!(tagged.end(), direct.end());
    }

    #[test]
    fn test_tagged_range_failure() {
        let tagged =
            TaggedError::<StrInput, UnexpectedTrailing>::spanning(TextSize::new(10), TextSize::new(14));
        assert_eq!(tagged.position(), TextSize::new(10));
        assert_eq!(tagged.end(), TextSize::new(14));
        assert_eq!(tagged.message(), "unexpected trailing input");
    }

    #[test]
    fn test_into_error_preserves_fields() {
        let tagged = TaggedError::<StrInput, ExhaustedChoice>::new(TextSize::new(0));
        let erased: Generic = tagged.into_error();
        assert_eq!(erased.message(), "exhausted choice");
        assert_eq!(erased.begin(), TextSize::new(0));
    }

    #[test]
    fn test_display_is_the_message() {
        let err = Generic::new(TextSize::new(1), "expected operand");
        assert_eq!(err.to_string(), "expected operand");

        let tagged = TaggedError::<StrInput, ExpectedEof>::new(TextSize::new(1));
        assert_eq!(tagged.to_string(), "expected end of input");
    }
}
