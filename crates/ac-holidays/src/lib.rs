//! # ac-holidays
//!
//! Holiday records and sets, the lookup seam with its fixed fallback list,
//! the caller-owned per-year cache, and the enrollment-pass helpers built on
//! the [`Calendar`](ac_time::Calendar) arithmetic.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Caller-owned per-year holiday cache and lookup provenance.
pub mod cache;

/// Enrollment-pass end-date and remaining-day helpers.
pub mod enrollment;

/// Fixed fallback holiday list used when the lookup is unavailable.
pub mod fallback;

/// `HolidayRecord`, `HolidaySet`, and the set-backed `HolidayCalendar`.
pub mod record;

/// The `HolidaySource` lookup seam and wire-payload parsing.
pub mod source;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cache::{lookup_year, HolidayCache, Provenance, YearHolidays};
pub use enrollment::{
    end_date_with_lookup, pass_end_date, pass_remaining_days, remaining_with_lookup,
    BUSINESS_DAYS_PER_WEEK,
};
pub use fallback::fallback_holidays;
pub use record::{HolidayCalendar, HolidayRecord, HolidaySet};
pub use source::{normalize_records, parse_payload, HolidaySource, RawHoliday, StaticSource};
