//! Holiday records, sets, and the set-backed calendar.

use std::collections::BTreeMap;

use ac_time::{Calendar, Date};

/// A single holiday: a date and a display-only name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    /// The calendar day.
    pub date: Date,
    /// Human-readable label.  Plays no part in any calculation.
    pub name: String,
}

impl HolidayRecord {
    /// Convenience constructor.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// A collection of holidays keyed by date, at most one record per date.
///
/// Typically assembled by merging per-year lookups for the current and next
/// calendar year.  The set holds no cache and performs no I/O; see
/// [`HolidayCache`](crate::HolidayCache) for the caching discipline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    entries: BTreeMap<Date, String>,
}

impl HolidaySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record.  The first record for a date wins; returns `false`
    /// if the date was already present.
    pub fn insert(&mut self, record: HolidayRecord) -> bool {
        match self.entries.entry(record.date) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(record.name);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Return `true` if `date` is in the set (calendar-day equality).
    pub fn contains(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }

    /// Return the display name recorded for `date`, if any.
    pub fn name_of(&self, date: Date) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    /// Number of holidays in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge `other` into `self`.  Existing dates win over incoming ones.
    pub fn merge(&mut self, other: HolidaySet) {
        for (date, name) in other.entries {
            self.entries.entry(date).or_insert(name);
        }
    }

    /// Iterate over the holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &str)> {
        self.entries.iter().map(|(date, name)| (*date, name.as_str()))
    }
}

impl FromIterator<HolidayRecord> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = HolidayRecord>>(iter: I) -> Self {
        let mut set = HolidaySet::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

/// A calendar whose holidays come from a [`HolidaySet`] assembled at run
/// time, usually out of the per-year lookup results.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    name: String,
    holidays: HolidaySet,
}

impl HolidayCalendar {
    /// Create a calendar over the given holiday set.
    pub fn new(name: impl Into<String>, holidays: HolidaySet) -> Self {
        Self {
            name: name.into(),
            holidays,
        }
    }

    /// The holiday set backing this calendar.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn one_record_per_date() {
        let mut set = HolidaySet::new();
        assert!(set.insert(HolidayRecord::new(date(2025, 1, 1), "New Year's Day")));
        assert!(!set.insert(HolidayRecord::new(date(2025, 1, 1), "duplicate")));
        assert_eq!(set.len(), 1);
        assert_eq!(set.name_of(date(2025, 1, 1)), Some("New Year's Day"));
    }

    #[test]
    fn merge_keeps_existing_entries() {
        let mut a: HolidaySet = [HolidayRecord::new(date(2025, 1, 1), "kept")]
            .into_iter()
            .collect();
        let b: HolidaySet = [
            HolidayRecord::new(date(2025, 1, 1), "ignored"),
            HolidayRecord::new(date(2025, 3, 1), "added"),
        ]
        .into_iter()
        .collect();
        a.merge(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.name_of(date(2025, 1, 1)), Some("kept"));
        assert_eq!(a.name_of(date(2025, 3, 1)), Some("added"));
    }

    #[test]
    fn holiday_calendar_excludes_set_dates() {
        let set: HolidaySet = [HolidayRecord::new(date(2025, 5, 5), "Children's Day")]
            .into_iter()
            .collect();
        let cal = HolidayCalendar::new("test", set);
        assert_eq!(cal.name(), "test");
        assert_eq!(cal.holidays().len(), 1);
        // 2025-05-05 is a Monday; only the holiday makes it non-business.
        assert!(cal.is_holiday(date(2025, 5, 5)));
        assert!(!cal.is_weekend(date(2025, 5, 5)));
        assert!(!cal.is_business_day(date(2025, 5, 5)));
        assert!(cal.is_business_day(date(2025, 5, 6)));
    }

    #[test]
    fn sunday_excluded_regardless_of_set() {
        let cal = HolidayCalendar::new("empty", HolidaySet::new());
        // 2025-05-04 is a Sunday.
        assert!(!cal.is_business_day(date(2025, 5, 4)));
    }
}
