//! # acadcal
//!
//! Business-day and holiday calendar arithmetic for academy enrollment
//! management.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `ac-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use acadcal::holidays::{fallback_holidays, HolidayCalendar};
//! use acadcal::time::{Calendar, Date};
//!
//! let cal = HolidayCalendar::new("2025 (approximate)", fallback_holidays(2025));
//! let start = Date::from_ymd(2025, 1, 2)?;
//! // A four-week pass: 20 business days, start date included.
//! let end = cal.add_business_days(start, 20)?;
//! assert_eq!(end.to_string(), "2025-01-24");
//! # Ok::<(), acadcal::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and shared aliases.
pub use ac_core as core;

/// Holiday sets, lookup, cache, and enrollment helpers.
pub use ac_holidays as holidays;

/// Date, weekday, clock, and calendar types.
pub use ac_time as time;
