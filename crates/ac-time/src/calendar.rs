//! `Calendar` trait and the business-day arithmetic built on it.
//!
//! A calendar knows which dates the academy is open and can walk business
//! days forward from a start date or count the business days left in an
//! enrollment window.

use ac_core::ensure;
use ac_core::errors::Result;
use ac_core::DayCount;

use crate::date::Date;
use crate::weekday::Weekday;

/// An academy calendar.
///
/// Implementors supply [`is_holiday`](Calendar::is_holiday); the
/// classification predicates and the day-walking arithmetic are provided on
/// top of it.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"enrollment window 2025"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a recorded holiday in this calendar.
    ///
    /// Weekly closure days are not holidays; they are handled by
    /// [`is_weekend`](Calendar::is_weekend).
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` falls on the weekly closure day.
    ///
    /// Only Sunday: the academy holds Saturday classes.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday() == Weekday::Sunday
    }

    /// Return `true` if `date` is a business day — neither the weekly
    /// closure day nor a recorded holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Return the date reached by counting `count` business days forward
    /// from `start`, **inclusive of `start` itself when it is a business
    /// day** (it then counts as day 1).
    ///
    /// # Errors
    /// `InvalidArgument` if `count` is zero; a date error if the walk leaves
    /// the supported date range.
    fn add_business_days(&self, start: Date, count: DayCount) -> Result<Date> {
        ensure!(count > 0, "business-day count must be positive, got {count}");
        let mut reached: DayCount = if self.is_business_day(start) { 1 } else { 0 };
        let mut date = start;
        while reached < count {
            date = date.add_days(1)?;
            if self.is_business_day(date) {
                reached += 1;
            }
        }
        Ok(date)
    }

    /// Count the business days from `max(today, start)` through `end`,
    /// both ends inclusive.
    ///
    /// Returns 0 when `today > end` (the window has fully elapsed) and,
    /// by the same rule, when `end < start`.  `today` is a parameter on
    /// purpose: resolve it from a [`Clock`](crate::Clock) at the call site
    /// so the count stays deterministic under test.
    fn remaining_business_days(&self, start: Date, end: Date, today: Date) -> DayCount {
        if today > end {
            return 0;
        }
        let mut date = start.max(today);
        let mut count: DayCount = 0;
        while date <= end {
            if self.is_business_day(date) {
                count += 1;
            }
            match date.add_days(1) {
                Ok(next) => date = next,
                Err(_) => break, // end == Date::MAX
            }
        }
        count
    }
}

/// A calendar with no recorded holidays — only the weekly closure day is
/// non-business.
///
/// This is also the degraded behavior when no holiday data is available at
/// all.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekOffOnly;

impl Calendar for WeekOffOnly {
    fn name(&self) -> &str {
        "Week-off only"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}
