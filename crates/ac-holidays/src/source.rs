//! The `HolidaySource` lookup seam and wire-payload parsing.
//!
//! Transport lives outside this crate: whatever fetches the per-year payload
//! (the REST gateway in production) implements [`HolidaySource`] and hands
//! the records over.  This module owns the wire format and the defensive
//! normalization into a [`HolidaySet`].

use std::collections::HashMap;

use ac_core::errors::{Error, Result};
use ac_core::Year;
use serde::Deserialize;

use crate::record::{HolidayRecord, HolidaySet};

/// One holiday as it appears on the wire.
///
/// The date is either ISO `YYYY-MM-DD` (the REST gateway) or compact
/// `YYYYMMDD` (the upstream special-day API reports `locdate` that way).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawHoliday {
    /// Date string in one of the two accepted forms.
    pub date: String,
    /// Display name.
    pub name: String,
}

/// Parse a per-year lookup payload: a JSON array of `{date, name}` records.
pub fn parse_payload(json: &str) -> Result<Vec<RawHoliday>> {
    serde_json::from_str(json).map_err(|e| Error::Parse(format!("holiday payload: {e}")))
}

/// Normalize raw records into a [`HolidaySet`].
///
/// Records whose date does not parse are dropped rather than failing the
/// whole set; a skipped record is worth at most one miscounted day, a failed
/// computation blocks the screen.
pub fn normalize_records(raw: Vec<RawHoliday>) -> HolidaySet {
    let mut set = HolidaySet::new();
    for record in raw {
        match record.date.parse() {
            Ok(date) => {
                set.insert(HolidayRecord::new(date, record.name));
            }
            Err(err) => {
                log::debug!("skipping malformed holiday record {:?}: {err}", record.date);
            }
        }
    }
    set
}

/// Source of per-year holiday records.
///
/// The single I/O boundary of the workspace.  Implementations may hit the
/// network; everything downstream of [`lookup_year`](crate::lookup_year) is
/// pure computation.
pub trait HolidaySource: std::fmt::Debug {
    /// All holidays falling in `year`.
    ///
    /// An `Err` means the source was unavailable or the payload did not
    /// parse; the caller substitutes the fallback list.  A year the source
    /// simply has no records for is `Ok` and empty.
    fn holidays_for_year(&self, year: Year) -> Result<Vec<RawHoliday>>;
}

/// An in-memory source, for tests and offline use.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    by_year: HashMap<Year, Vec<RawHoliday>>,
}

impl StaticSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the records for one year, builder style.
    pub fn with_year(mut self, year: Year, records: Vec<RawHoliday>) -> Self {
        self.by_year.insert(year, records);
        self
    }
}

impl HolidaySource for StaticSource {
    fn holidays_for_year(&self, year: Year) -> Result<Vec<RawHoliday>> {
        Ok(self.by_year.get(&year).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ac_time::Date;

    #[test]
    fn parses_a_payload() {
        let json = r#"[
            {"date": "2025-01-01", "name": "New Year's Day"},
            {"date": "20250815", "name": "Liberation Day"}
        ]"#;
        let raw = parse_payload(json).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].name, "New Year's Day");
    }

    #[test]
    fn rejects_a_non_array_payload() {
        assert!(parse_payload("{}").is_err());
        assert!(parse_payload("not json").is_err());
    }

    #[test]
    fn normalization_accepts_both_date_forms() {
        let raw = vec![
            RawHoliday {
                date: "2025-01-01".into(),
                name: "New Year's Day".into(),
            },
            RawHoliday {
                date: "20250815".into(),
                name: "Liberation Day".into(),
            },
        ];
        let set = normalize_records(raw);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Date::from_ymd(2025, 1, 1).unwrap()));
        assert!(set.contains(Date::from_ymd(2025, 8, 15).unwrap()));
    }

    #[test]
    fn normalization_drops_malformed_records() {
        let raw = vec![
            RawHoliday {
                date: "2025-02-30".into(),
                name: "no such day".into(),
            },
            RawHoliday {
                date: "soon".into(),
                name: "not a date".into(),
            },
            RawHoliday {
                date: "2025-03-01".into(),
                name: "Independence Movement Day".into(),
            },
        ];
        let set = normalize_records(raw);
        assert_eq!(set.len(), 1);
        assert!(set.contains(Date::from_ymd(2025, 3, 1).unwrap()));
    }

    #[test]
    fn duplicate_dates_collapse_to_the_first() {
        let raw = vec![
            RawHoliday {
                date: "2025-01-01".into(),
                name: "first".into(),
            },
            RawHoliday {
                date: "20250101".into(),
                name: "second".into(),
            },
        ];
        let set = normalize_records(raw);
        assert_eq!(set.len(), 1);
        assert_eq!(set.name_of(Date::from_ymd(2025, 1, 1).unwrap()), Some("first"));
    }

    #[test]
    fn static_source_is_empty_for_unknown_years() {
        let source = StaticSource::new();
        assert_eq!(source.holidays_for_year(2025).unwrap(), vec![]);
    }
}
