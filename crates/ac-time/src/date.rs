//! `Date` type.
//!
//! A calendar day with no time component, stored as a serial number of days
//! since the Unix epoch (serial 0 = 1970-01-01, negative before it).  Any
//! time-of-day on caller input is shed at the conversion boundary, so date
//! comparisons can never pick up an off-by-one from timezone or millisecond
//! drift.
//!
//! Supported years are 1 through 9999.

use ac_core::errors::{Error, Result};
use chrono::Datelike;

use crate::weekday::Weekday;

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum supported date: 0001-01-01.
    pub const MIN: Date = Date(serial_from_ymd(1, 1, 1));

    /// Maximum supported date: 9999-12-31.
    pub const MAX: Date = Date(serial_from_ymd(9999, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a serial day number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Parse an 8-digit `YYYYMMDD` string, the compact wire form used by the
    /// holiday lookup payloads.
    pub fn from_compact(s: &str) -> Result<Self> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Parse(format!("expected YYYYMMDD, got {s:?}")));
        }
        let year = s[..4]
            .parse::<i32>()
            .map_err(|e| Error::Parse(format!("bad year in {s:?}: {e}")))?;
        let month = s[4..6]
            .parse::<u8>()
            .map_err(|e| Error::Parse(format!("bad month in {s:?}: {e}")))?;
        let day = s[6..]
            .parse::<u8>()
            .map_err(|e| Error::Parse(format!("bad day in {s:?}: {e}")))?;
        Date::from_ymd(year, month, day)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial day number (days since 1970-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 0 (1970-01-01) is a Thursday, ordinal 4.
        let ordinal = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(ordinal).expect("rem_euclid always lands in 1..=7")
    }

    /// Format as the compact 8-digit `YYYYMMDD` wire form.
    pub fn compact(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{y:04}{m:02}{d:02}")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` calendar days.  Returns an error if the result leaves
    /// the supported range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic overflow: {self} + {n}")))?;
        Date::from_serial(serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_until(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition out of range");
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl std::str::FromStr for Date {
    type Err = Error;

    /// Accepts ISO `YYYY-MM-DD` or compact `YYYYMMDD`.
    fn from_str(s: &str) -> Result<Self> {
        let b = s.as_bytes();
        match b.len() {
            8 => Date::from_compact(s),
            10 if b[4] == b'-' && b[7] == b'-' => {
                let compact: String = s.chars().filter(|c| *c != '-').collect();
                Date::from_compact(&compact)
            }
            _ => Err(Error::Parse(format!("unrecognised date string {s:?}"))),
        }
    }
}

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(value: chrono::NaiveDate) -> Result<Self> {
        Date::from_ymd(value.year(), value.month() as u8, value.day() as u8)
    }
}

impl From<Date> for chrono::NaiveDate {
    fn from(value: Date) -> Self {
        let (y, m, d) = ymd_from_serial(value.0);
        chrono::NaiveDate::from_ymd_opt(y, m as u32, d as u32)
            .expect("every supported Date is a valid chrono date")
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to days since 1970-01-01.
///
/// Standard Gregorian era decomposition: years are grouped into 400-year
/// eras of exactly 146 097 days, and months are counted from March so the
/// leap day lands at the end of the era year.
const fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400; // [0, 399]
    let mp = (month as i32 + 9) % 12; // March-based month [0, 11]
    let doy = (153 * mp + 2) / 5 + day as i32 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Decompose days since 1970-01-01 into (year, month, day).
const fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = serial + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // March-based month [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = if month <= 2 { era * 400 + yoe + 1 } else { era * 400 + yoe };
    (year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
