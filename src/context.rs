//! Error context: which production, against which input
//!
//! When the engine unwinds a failure out of a production boundary it binds
//! the failure's position to the production that was active and the input it
//! was searching. Reporting code receives that binding here, in one of two
//! forms:
//! - [`ErrorContext`] - type-erased, the production name captured as a
//!   string from a [`ProductionInfo`] descriptor value
//! - [`ProductionContext`] - statically typed, the name derived from the
//!   production's type with no instance and no runtime lookup
//!
//! Both forms agree on the name for the same production, always; the static
//! form exists purely to skip the descriptor.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use tracing::trace;

use crate::input::{Input, RootInput};

/// A named grammar production.
///
/// The name is an associated constant, so the statically-typed context can
/// derive it from the type alone. It is an attribution label for reporting,
/// never control flow.
pub trait Production {
    /// The production's display name.
    const NAME: &'static str;
}

/// Type-erased production descriptor.
///
/// Carries the name as a runtime value for code paths that cannot name the
/// production type. Built via [`ProductionInfo::of`], which captures
/// [`Production::NAME`], so the erased and static forms cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductionInfo {
    name: &'static str,
}

impl ProductionInfo {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// The descriptor of production `P`.
    pub const fn of<P: Production>() -> Self {
        Self { name: P::NAME }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Context of an error, production type-erased.
///
/// A flat value: it borrows the input and owns no heap data, so it must not
/// outlive the input. Immutable after construction.
pub struct ErrorContext<'i, I: Input> {
    input: &'i I,
    pos: I::Cursor,
    production: &'static str,
}

impl<'i, I: Input> ErrorContext<'i, I> {
    /// Bind `pos` to the production described by `production`, searched in
    /// `input`.
    pub fn new(production: ProductionInfo, input: &'i I, pos: I::Cursor) -> Self {
        trace!(production = production.name, ?pos, "failure unwound out of production");
        Self {
            input,
            pos,
            production: production.name,
        }
    }

    /// The name of the production where the error occurred.
    pub fn production(&self) -> &'static str {
        self.production
    }

    /// The position bound at construction.
    ///
    /// Reported as-is: it is never recomputed relative to the root input.
    /// Callers needing that translation do it outside this type.
    pub fn position(&self) -> I::Cursor {
        self.pos
    }
}

impl<'i, I: RootInput> ErrorContext<'i, I> {
    /// The input, resolved to the root of its parent chain.
    ///
    /// Delegates to [`RootInput::root_input`] on every call instead of
    /// storing a pre-resolved reference, so the parent chain is always
    /// reflected as it currently is.
    pub fn input(&self) -> &'i I::Root {
        self.input.root_input()
    }
}

impl<I: Input> Clone for ErrorContext<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Input> Copy for ErrorContext<'_, I> {}

impl<I: Input> fmt::Debug for ErrorContext<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorContext")
            .field("pos", &self.pos)
            .field("production", &self.production)
            .finish_non_exhaustive()
    }
}

impl<I: Input> fmt::Display for ErrorContext<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "while parsing {}", self.production)
    }
}

/// Context of an error, typed by its production.
///
/// Same physical shape as [`ErrorContext`] (it derefs to one), but the
/// production name is also available with no instance through the associated
/// [`ProductionContext::production`] function, resolved at compile time.
pub struct ProductionContext<'i, P: Production, I: Input> {
    inner: ErrorContext<'i, I>,
    _production: PhantomData<P>,
}

impl<'i, P: Production, I: Input> ProductionContext<'i, P, I> {
    /// Bind `pos` to production `P`, searched in `input`. No descriptor
    /// value is needed.
    pub fn new(input: &'i I, pos: I::Cursor) -> Self {
        Self {
            inner: ErrorContext::new(ProductionInfo::of::<P>(), input, pos),
            _production: PhantomData,
        }
    }

    /// The production's name, derived from `P` alone.
    ///
    /// Shadowed by the deref'd method when called on a value; both return
    /// the same string by construction.
    pub const fn production() -> &'static str {
        P::NAME
    }

    /// The erased view of this context.
    pub fn as_context(&self) -> &ErrorContext<'i, I> {
        &self.inner
    }

    /// Discard the production type, keeping the erased context.
    pub fn into_context(self) -> ErrorContext<'i, I> {
        self.inner
    }
}

impl<'i, P: Production, I: Input> Deref for ProductionContext<'i, P, I> {
    type Target = ErrorContext<'i, I>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<'i, P: Production, I: Input> From<ProductionContext<'i, P, I>> for ErrorContext<'i, I> {
    fn from(context: ProductionContext<'i, P, I>) -> Self {
        context.inner
    }
}

impl<P: Production, I: Input> Clone for ProductionContext<'_, P, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Production, I: Input> Copy for ProductionContext<'_, P, I> {}

impl<P: Production, I: Input> fmt::Debug for ProductionContext<'_, P, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductionContext")
            .field("pos", &self.inner.pos)
            .field("production", &self.inner.production)
            .finish_non_exhaustive()
    }
}

impl<P: Production, I: Input> fmt::Display for ProductionContext<'_, P, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
