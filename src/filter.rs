//! Narrows a trip table to the rows matching the month/day selectors.

use serde::Serialize;

use crate::city::{Day, Month};
use crate::trips::{Trip, TripTable};

/// Month and day selectors; `None` means "all" and matches every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TripFilter {
    pub month: Option<Month>,
    pub day: Option<Day>,
}

impl TripFilter {
    pub fn matches(&self, trip: &Trip) -> bool {
        self.month.is_none_or(|m| trip.month == m.number())
            && self.day.is_none_or(|d| trip.day == d)
    }

    /// Returns the matching subsequence as a new table with the same
    /// schema. Row order is preserved; an empty result is valid.
    pub fn apply(&self, table: &TripTable) -> TripTable {
        let rows = table
            .trips()
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect();
        TripTable::new(rows, table.schema())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::{OptionalColumns, test_trip};

    fn january_week() -> TripTable {
        // 2017-01-01 was a Sunday
        let trips = vec![
            test_trip("2017-01-01 09:00:00"),
            test_trip("2017-01-02 10:00:00"),
            test_trip("2017-01-02 18:00:00"),
            test_trip("2017-02-06 08:00:00"),
            test_trip("2017-06-05 07:30:00"),
        ];
        TripTable::new(trips, OptionalColumns::default())
    }

    #[test]
    fn test_all_all_keeps_every_row_in_order() {
        let table = january_week();
        let filtered = TripFilter::default().apply(&table);
        assert_eq!(filtered.len(), table.len());
        for (kept, source) in filtered.trips().iter().zip(table.trips()) {
            assert_eq!(kept.start, source.start);
        }
    }

    #[test]
    fn test_filtering_is_idempotent_under_all_all() {
        let table = january_week();
        let once = TripFilter {
            month: Some(Month::January),
            day: None,
        }
        .apply(&table);
        let twice = TripFilter::default().apply(&once);
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.trips().iter().zip(twice.trips()) {
            assert_eq!(a.start, b.start);
        }
    }

    #[test]
    fn test_month_filter_matches_derived_month() {
        let table = january_week();
        let filtered = TripFilter {
            month: Some(Month::January),
            day: None,
        }
        .apply(&table);
        assert_eq!(filtered.len(), 3);
        assert!(filtered.trips().iter().all(|t| t.month == 1));
    }

    #[test]
    fn test_day_filter_matches_derived_day() {
        let table = january_week();
        let filtered = TripFilter {
            month: None,
            day: Some(Day::Monday),
        }
        .apply(&table);
        // Jan 2, Feb 6, and Jun 5 2017 were all Mondays
        assert_eq!(filtered.len(), 4);
        assert!(filtered.trips().iter().all(|t| t.day == Day::Monday));
    }

    #[test]
    fn test_combined_filter_intersects() {
        let table = january_week();
        let filtered = TripFilter {
            month: Some(Month::January),
            day: Some(Day::Monday),
        }
        .apply(&table);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_empty_result_keeps_schema() {
        let schema = OptionalColumns {
            user_type: true,
            gender: true,
            birth_year: true,
        };
        let table = TripTable::new(vec![test_trip("2017-01-01 09:00:00")], schema);
        let filtered = TripFilter {
            month: Some(Month::March),
            day: None,
        }
        .apply(&table);
        assert!(filtered.is_empty());
        assert_eq!(filtered.schema(), schema);
    }
}
