//! Per-year lookup with fallback, and the caller-owned cache.
//!
//! The cache is an explicit object passed around by the caller, not module
//! state: one instance per session, one lookup per year, every arithmetic
//! call reuses the same sets.

use std::collections::HashMap;

use ac_core::Year;

use crate::fallback::fallback_holidays;
use crate::record::HolidaySet;
use crate::source::{normalize_records, HolidaySource};

/// Where a year's holiday set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// The external source answered; the set is verified data.
    Fetched,
    /// The source failed; the set is the fixed fallback list and may
    /// undercount.
    Fallback,
}

/// One year's holiday set together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearHolidays {
    /// The (normalized) holidays of the year.
    pub set: HolidaySet,
    /// Whether the set is verified or the fallback approximation.
    pub provenance: Provenance,
}

impl YearHolidays {
    /// Return `true` if this is the degraded fallback set.
    pub fn is_fallback(&self) -> bool {
        self.provenance == Provenance::Fallback
    }
}

/// Look up the holidays of one year, substituting the fallback list on any
/// failure.
///
/// Never fails: calendar math degrades to an approximate count rather than
/// blocking enrollment screens on a non-critical dependency.  The substitution
/// is logged and visible in the result's provenance.
pub fn lookup_year(source: &dyn HolidaySource, year: Year) -> YearHolidays {
    match source.holidays_for_year(year) {
        Ok(raw) => YearHolidays {
            set: normalize_records(raw),
            provenance: Provenance::Fetched,
        },
        Err(err) => {
            log::warn!("holiday lookup for {year} failed, using the fixed fallback list: {err}");
            YearHolidays {
                set: fallback_holidays(year),
                provenance: Provenance::Fallback,
            }
        }
    }
}

/// Caller-owned `year -> holidays` cache.
///
/// Each year is looked up at most once per cache lifetime, fallback results
/// included; a session that saw the source go down keeps its approximate set
/// rather than re-fetching on every keystroke.
#[derive(Debug, Default)]
pub struct HolidayCache {
    years: HashMap<Year, YearHolidays>,
}

impl HolidayCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached entry for `year`, looking it up through `source` on first
    /// access.
    pub fn get_or_lookup(&mut self, source: &dyn HolidaySource, year: Year) -> &YearHolidays {
        self.years
            .entry(year)
            .or_insert_with(|| lookup_year(source, year))
    }

    /// The merged holiday set of the years `first..=last`.
    pub fn span(&mut self, source: &dyn HolidaySource, first: Year, last: Year) -> HolidaySet {
        let mut merged = HolidaySet::new();
        for year in first..=last {
            merged.merge(self.get_or_lookup(source, year).set.clone());
        }
        merged
    }

    /// The cached entry for `year`, if it has been looked up.
    pub fn get(&self, year: Year) -> Option<&YearHolidays> {
        self.years.get(&year)
    }

    /// Number of years held in the cache.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Return `true` if nothing has been looked up yet.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ac_core::errors::{Error, Result};
    use ac_time::Date;

    use crate::source::{RawHoliday, StaticSource};

    #[derive(Debug, Default)]
    struct DownSource;

    impl HolidaySource for DownSource {
        fn holidays_for_year(&self, year: Year) -> Result<Vec<RawHoliday>> {
            Err(Error::Lookup(format!("connection refused for {year}")))
        }
    }

    #[test]
    fn successful_lookup_is_fetched() {
        let source = StaticSource::new().with_year(
            2025,
            vec![RawHoliday {
                date: "2025-01-01".into(),
                name: "New Year's Day".into(),
            }],
        );
        let year = lookup_year(&source, 2025);
        assert_eq!(year.provenance, Provenance::Fetched);
        assert_eq!(year.set.len(), 1);
    }

    #[test]
    fn failed_lookup_degrades_to_fallback() {
        let year = lookup_year(&DownSource, 2025);
        assert!(year.is_fallback());
        assert_eq!(year.set.len(), 8);
        assert!(year.set.contains(Date::from_ymd(2025, 12, 25).unwrap()));
    }

    #[test]
    fn cache_looks_each_year_up_once() {
        #[derive(Debug, Default)]
        struct CountingSource {
            calls: std::cell::RefCell<Vec<Year>>,
        }

        impl HolidaySource for CountingSource {
            fn holidays_for_year(&self, year: Year) -> Result<Vec<RawHoliday>> {
                self.calls.borrow_mut().push(year);
                Ok(vec![])
            }
        }

        let source = CountingSource::default();
        let mut cache = HolidayCache::new();
        cache.get_or_lookup(&source, 2025);
        cache.get_or_lookup(&source, 2025);
        cache.span(&source, 2025, 2026);
        assert_eq!(*source.calls.borrow(), vec![2025, 2026]);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn span_merges_consecutive_years() {
        let source = StaticSource::new()
            .with_year(
                2025,
                vec![RawHoliday {
                    date: "2025-12-25".into(),
                    name: "Christmas Day".into(),
                }],
            )
            .with_year(
                2026,
                vec![RawHoliday {
                    date: "2026-01-01".into(),
                    name: "New Year's Day".into(),
                }],
            );
        let mut cache = HolidayCache::new();
        let set = cache.span(&source, 2025, 2026);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Date::from_ymd(2025, 12, 25).unwrap()));
        assert!(set.contains(Date::from_ymd(2026, 1, 1).unwrap()));
    }

    #[test]
    fn fallback_results_are_cached_too() {
        let mut cache = HolidayCache::new();
        cache.get_or_lookup(&DownSource, 2025);
        assert!(cache.get(2025).unwrap().is_fallback());
        // A later hit serves the cached fallback set.
        let again = cache.get_or_lookup(&DownSource, 2025);
        assert_eq!(again.set.len(), 8);
    }
}
