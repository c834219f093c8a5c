//! CSV loading and column derivation.
//!
//! Reads a city's trip table into memory in one pass: deserialize each
//! row, parse timestamps, derive the month/day/hour columns, and coerce
//! the optional rider fields. Which optional columns exist is decided
//! once from the header.

use std::path::Path;
use std::time::Instant;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::debug;

use crate::city::City;
use crate::error::LoadError;
use crate::trips::{OptionalColumns, Trip, TripTable};

/// Timestamp layout used by every source file.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row as it appears in the source CSV. Optional columns deserialize
/// to `None` for every row when the file does not carry them; extra
/// columns (the unnamed leading index) are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: Option<String>,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender")]
    gender: Option<String>,
    #[serde(rename = "Birth Year")]
    birth_year: Option<String>,
}

/// Loads the trip table for `city` from `data_dir`.
pub fn load_city(data_dir: &Path, city: City) -> Result<TripTable, LoadError> {
    load_path(&data_dir.join(city.source_file()))
}

/// Loads a trip table from an explicit CSV path.
///
/// # Errors
///
/// [`LoadError::SourceUnavailable`] when the file cannot be read or a row
/// does not match the expected shape; [`LoadError::MalformedTimestamp`]
/// when a start time fails to parse. End times and birth years degrade to
/// absent values instead of failing the load.
pub fn load_path(path: &Path) -> Result<TripTable, LoadError> {
    let started = Instant::now();

    let mut rdr = csv::Reader::from_path(path).map_err(|e| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let headers = rdr
        .headers()
        .map_err(|e| LoadError::SourceUnavailable {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();
    let schema = OptionalColumns {
        user_type: headers.iter().any(|h| h == "User Type"),
        gender: headers.iter().any(|h| h == "Gender"),
        birth_year: headers.iter().any(|h| h == "Birth Year"),
    };

    let mut trips = Vec::new();
    for (idx, row) in rdr.deserialize().enumerate() {
        let raw: RawTrip = row.map_err(|e| LoadError::SourceUnavailable {
            path: path.to_path_buf(),
            source: e,
        })?;

        // line 1 is the header
        let line = idx as u64 + 2;
        let start = NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT).map_err(
            |e| LoadError::MalformedTimestamp {
                value: raw.start_time.clone(),
                line,
                source: e,
            },
        )?;
        let end = raw.end_time.as_deref().and_then(parse_end_time);

        let mut trip = Trip::new(
            start,
            end,
            raw.start_station,
            raw.end_station,
            raw.trip_duration.max(0.0) as u64,
        );
        trip.user_type = raw.user_type.filter(|v| !v.trim().is_empty());
        trip.gender = raw.gender.filter(|v| !v.trim().is_empty());
        trip.birth_year = raw.birth_year.as_deref().and_then(coerce_birth_year);
        trips.push(trip);
    }

    debug!(
        path = %path.display(),
        rows = trips.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Trip table loaded"
    );

    Ok(TripTable::new(trips, schema))
}

fn parse_end_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), START_TIME_FORMAT).ok()
}

/// Birth years arrive as text, sometimes fractional ("1992.0"), sometimes
/// junk. Anything non-numeric counts as absent.
fn coerce_birth_year(value: &str) -> Option<i32> {
    value.trim().parse::<f64>().ok().map(|y| y as i32)
}
