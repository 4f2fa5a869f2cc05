//! Enrollment-pass helpers.
//!
//! A pass is sold in weeks and consumed in business days, five per week.
//! The end-date walk is inclusive of the start date, so a one-week pass
//! starting on a business-day Monday ends that Friday.

use ac_core::ensure;
use ac_core::errors::{Error, Result};
use ac_core::DayCount;
use ac_time::{Calendar, Clock, Date};

use crate::cache::HolidayCache;
use crate::record::HolidayCalendar;
use crate::source::HolidaySource;

/// Business days per enrollment week.
pub const BUSINESS_DAYS_PER_WEEK: DayCount = 5;

fn pass_length_days(weeks: u32) -> Result<DayCount> {
    ensure!(weeks > 0, "pass length must be at least one week, got {weeks}");
    weeks
        .checked_mul(BUSINESS_DAYS_PER_WEEK)
        .ok_or_else(|| Error::InvalidArgument(format!("pass length {weeks} weeks overflows")))
}

/// End date of a pass of `weeks` weeks starting at `start`, on the given
/// calendar.
pub fn pass_end_date(calendar: &dyn Calendar, start: Date, weeks: u32) -> Result<Date> {
    calendar.add_business_days(start, pass_length_days(weeks)?)
}

/// Business days left on a pass as of the clock's today.
pub fn pass_remaining_days(
    calendar: &dyn Calendar,
    start: Date,
    end: Date,
    clock: &dyn Clock,
) -> DayCount {
    calendar.remaining_business_days(start, end, clock.today())
}

/// End date of a pass, assembling the holiday window through the cache.
///
/// The window spans the start year and the next one, which covers any pass
/// of up to a year; holidays beyond the window would count as business days,
/// exactly as in the degraded fallback mode.
pub fn end_date_with_lookup(
    cache: &mut HolidayCache,
    source: &dyn HolidaySource,
    start: Date,
    weeks: u32,
) -> Result<Date> {
    let count = pass_length_days(weeks)?;
    let set = cache.span(source, start.year(), start.year() + 1);
    let calendar = HolidayCalendar::new(format!("enrollment window {}", start.year()), set);
    calendar.add_business_days(start, count)
}

/// Business days left on a pass as of today, assembling the holiday window
/// through the cache.
///
/// An elapsed window returns 0 without touching the source at all.
pub fn remaining_with_lookup(
    cache: &mut HolidayCache,
    source: &dyn HolidaySource,
    start: Date,
    end: Date,
    clock: &dyn Clock,
) -> DayCount {
    let today = clock.today();
    if today > end {
        return 0;
    }
    let set = cache.span(source, today.year(), today.year() + 1);
    let calendar = HolidayCalendar::new(format!("enrollment window {}", today.year()), set);
    calendar.remaining_business_days(start, end, today)
}
