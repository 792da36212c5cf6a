//! The failure record family
//!
//! One concrete type per failure kind, each holding exactly the data needed
//! to describe that kind of failure:
//! - [`GenericError`] - free-form failure, type-erased to `(begin, end, message)`
//! - [`TaggedError`] - same physical shape, message derived from a tag type
//!   at compile time; usable *as* a [`GenericError`] without conversion
//! - [`ExpectedLiteral`] - a specific literal token was expected
//! - [`ExpectedKeyword`] - like a literal, but discovered after inspecting
//!   trailing characters, so a range is recorded
//! - [`ExpectedCharClass`] - any character of a named class was expected
//!
//! Records are flat, immutable `Copy` values. All accessors are pure and
//! non-panicking, with one documented exception
//! ([`ExpectedLiteral::character`]). Invariants such as `end >= begin` are
//! caller-guaranteed contracts, not runtime checks.

mod expected;
mod generic;

pub use expected::{ExpectedCharClass, ExpectedKeyword, ExpectedLiteral};
pub use generic::{
    ErrorTag, ExhaustedChoice, ExpectedEof, GenericError, TaggedError, UnexpectedTrailing,
};
