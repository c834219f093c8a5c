//! Row and table types shared across the pipeline.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::city::Day;

/// One validated trip row with its derived start-time columns.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start: NaiveDateTime,
    /// Best-effort; rows with an unparseable end time keep `None`.
    pub end: Option<NaiveDateTime>,
    pub start_station: String,
    pub end_station: String,
    pub duration_secs: u64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    /// Coerced at load; non-numeric source values become `None`.
    pub birth_year: Option<i32>,

    // derived from `start`
    pub month: u32,
    pub day: Day,
    pub hour: u32,
}

impl Trip {
    /// Builds a trip from parsed fields, deriving month, day, and hour
    /// from the start time. Optional rider fields start out unset.
    pub fn new(
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
        start_station: String,
        end_station: String,
        duration_secs: u64,
    ) -> Trip {
        Trip {
            month: start.month(),
            day: Day::from(start.weekday()),
            hour: start.hour(),
            start,
            end,
            start_station,
            end_station,
            duration_secs,
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }
}

/// Which optional columns the source table carried, decided once from the
/// CSV header rather than per row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OptionalColumns {
    pub user_type: bool,
    pub gender: bool,
    pub birth_year: bool,
}

/// An ordered trip table. Filtering produces a new table with the same
/// schema; row order always follows the source.
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    trips: Vec<Trip>,
    schema: OptionalColumns,
}

impl TripTable {
    pub fn new(trips: Vec<Trip>, schema: OptionalColumns) -> TripTable {
        TripTable { trips, schema }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn schema(&self) -> OptionalColumns {
        self.schema
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn test_trip(start: &str) -> Trip {
    let start = NaiveDateTime::parse_from_str(start, crate::loader::START_TIME_FORMAT).unwrap();
    Trip::new(start, None, "A".to_string(), "B".to_string(), 0)
}
