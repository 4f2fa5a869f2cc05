//! `Clock` — injectable "today" source.
//!
//! `remaining_business_days` reports "as of now", so something has to say
//! what "now" is.  That read happens here, at the call site, never inside
//! the arithmetic itself; tests pin the date with [`FixedClock`].

use crate::date::Date;

/// Source of the current calendar date.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// The current date, local time.
    fn today(&self) -> Date;
}

/// The wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        let now = chrono::Local::now().date_naive();
        Date::try_from(now).expect("system date is within the supported year range")
    }
}

/// A clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_date() {
        let d = Date::from_ymd(2025, 1, 15).unwrap();
        assert_eq!(FixedClock(d).today(), d);
    }

    #[test]
    fn system_clock_yields_a_plausible_date() {
        let today = SystemClock.today();
        assert!(today.year() >= 2024);
    }
}
