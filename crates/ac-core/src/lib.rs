//! # ac-core
//!
//! Error types and shared aliases for the academy calendar workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and the `ensure!` precondition macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A four-digit calendar year.
pub type Year = i32;

/// A non-negative count of business days.
pub type DayCount = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
