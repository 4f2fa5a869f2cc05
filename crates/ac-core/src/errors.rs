//! Error types for the academy calendar workspace.
//!
//! A single `thiserror`-derived enum covers every crate in the workspace.
//! The `ensure!` macro is the shorthand for argument preconditions.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date-related error (invalid component, out-of-range arithmetic).
    #[error("date error: {0}")]
    Date(String),

    /// A wire payload or date string could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// A holiday lookup against the external source failed.
    ///
    /// Never escapes `lookup_year`; the fallback list is substituted there.
    #[error("holiday lookup failed: {0}")]
    Lookup(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ac_core::ensure;
/// fn weeks(n: u32) -> ac_core::Result<u32> {
///     ensure!(n > 0, "weeks must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(weeks(4).is_ok());
/// assert!(weeks(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}
