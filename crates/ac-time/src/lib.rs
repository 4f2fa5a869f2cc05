//! # ac-time
//!
//! Date, weekday, clock, and business-day calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait and the business-day arithmetic built on it.
pub mod calendar;

/// `Clock` — injectable "today" source.
pub mod clock;

/// `Date` type.
pub mod date;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekOffOnly};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::Date;
pub use weekday::Weekday;
