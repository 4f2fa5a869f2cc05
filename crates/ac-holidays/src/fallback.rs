//! Fixed fallback holiday list.
//!
//! When the lookup is unavailable the calendar still has to produce an
//! answer, so these eight fixed-date national holidays stand in.  The
//! lunar-calendar holidays (Seollal, Buddha's Birthday, Chuseok) shift
//! yearly and are deliberately absent; degraded mode may undercount, and
//! callers can tell through [`Provenance`](crate::Provenance).

use ac_core::Year;
use ac_time::Date;

use crate::record::{HolidayRecord, HolidaySet};

/// (month, day, name) of the fixed-date national holidays.
const FALLBACK_HOLIDAYS: [(u8, u8, &str); 8] = [
    (1, 1, "New Year's Day"),
    (3, 1, "Independence Movement Day"),
    (5, 5, "Children's Day"),
    (6, 6, "Memorial Day"),
    (8, 15, "Liberation Day"),
    (10, 3, "National Foundation Day"),
    (10, 9, "Hangul Day"),
    (12, 25, "Christmas Day"),
];

/// The fallback set for `year`: exactly eight fixed-date records, all within
/// that year.
///
/// Never fails; a year outside the supported 1–9999 range yields an empty
/// set.
pub fn fallback_holidays(year: Year) -> HolidaySet {
    FALLBACK_HOLIDAYS
        .iter()
        .filter_map(|&(month, day, name)| {
            Date::from_ymd(year, month, day)
                .ok()
                .map(|date| HolidayRecord::new(date, name))
        })
        .collect()
}
