//! # faultline
//!
//! Diagnostic core for parsing engines: the representation used to capture,
//! classify, and attribute parse failures, independent of the matching
//! algorithms that detect them.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! context   → ErrorContext/ProductionContext (production attribution)
//!   ↓
//! errors    → the failure record family (generic, tagged, expected-*)
//!   ↓
//! input     → Input/RootInput traits, StrInput, SubInput
//! ```
//!
//! Two requirements shape the design:
//!
//! - Zero cost on the success path: failure records are flat `Copy` values,
//!   their shape is resolved at compile time through tag types, and nothing
//!   here allocates or dispatches virtually.
//! - Uniform views for reporting code: a tagged record is usable *as* the
//!   type-erased generic record ([`TaggedError`] derefs to [`GenericError`]),
//!   and a statically-typed context is usable as the erased one
//!   ([`ProductionContext`] derefs to [`ErrorContext`]), both without copying
//!   or boxing.

// ============================================================================
// MODULES (dependency order: input → errors → context)
// ============================================================================

/// Input seam: cursor/token abstraction and parent-chain resolution
pub mod input;

/// Failure records: one concrete type per failure kind
pub mod errors;

/// Error context: binds a position to the active production and its input
pub mod context;

// Re-export the full diagnostic surface at the crate root
pub use context::{ErrorContext, Production, ProductionContext, ProductionInfo};
pub use errors::{
    ErrorTag, ExhaustedChoice, ExpectedCharClass, ExpectedEof, ExpectedKeyword, ExpectedLiteral,
    GenericError, TaggedError, UnexpectedTrailing,
};
pub use input::{Input, RootInput, StrInput, SubInput};

// Re-export the position type used by the shipped inputs
pub use text_size::{TextRange, TextSize};
