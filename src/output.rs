//! Report assembly and rendering.
//!
//! Builds the per-cycle statistics report, prints it as text or JSON,
//! and appends one-line summaries to a CSV file.

use std::fs::OpenOptions;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::city::{City, Day, Month};
use crate::filter::TripFilter;
use crate::loader::START_TIME_FORMAT;
use crate::stats::{DurationStats, StationStats, TimeStats, UserStats};
use crate::trips::{Trip, TripTable};

const RULE: &str = "----------------------------------------";

/// Everything one filter cycle computed, ready for rendering.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub city: City,
    pub filter: TripFilter,
    pub trip_count: usize,
    pub time: Option<TimeStats>,
    pub stations: Option<StationStats>,
    pub duration: Option<DurationStats>,
    pub users: Option<UserStats>,
}

impl StatsReport {
    /// Runs every statistic group over an already-filtered table.
    pub fn build(city: City, filter: TripFilter, table: &TripTable) -> StatsReport {
        let started = Instant::now();
        let report = StatsReport {
            city,
            filter,
            trip_count: table.len(),
            time: TimeStats::from_table(table),
            stations: StationStats::from_table(table),
            duration: DurationStats::from_table(table),
            users: UserStats::from_table(table),
        };
        debug!(
            city = %city,
            trips = table.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Statistics computed"
        );
        report
    }
}

/// Prints all four statistic groups as a console report.
pub fn print_report(report: &StatsReport) {
    print_time_stats(report.time.as_ref());
    print_station_stats(report.stations.as_ref());
    print_duration_stats(report.duration.as_ref());
    print_user_stats(report.users.as_ref());
}

/// Prints the report as pretty JSON.
pub fn print_json(report: &StatsReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn print_time_stats(stats: Option<&TimeStats>) {
    println!("\nMost Frequent Times of Travel");
    match stats {
        None => print_empty(),
        Some(s) => {
            println!("Most common month: {}", month_label(s.month));
            println!("Most common day of week: {}", s.day);
            println!("Most common start hour: {}:00", s.hour);
        }
    }
    println!("{RULE}");
}

pub fn print_station_stats(stats: Option<&StationStats>) {
    println!("\nMost Popular Stations and Trip");
    match stats {
        None => print_empty(),
        Some(s) => {
            println!("Most common start station: {}", s.start_station);
            println!("Most common end station: {}", s.end_station);
            println!("Most common trip: {}", s.trip);
        }
    }
    println!("{RULE}");
}

pub fn print_duration_stats(stats: Option<&DurationStats>) {
    println!("\nTrip Duration");
    match stats {
        None => print_empty(),
        Some(s) => {
            println!(
                "Total travel time: {} ({} seconds)",
                s.total_breakdown(),
                group_thousands(s.total_seconds)
            );
            println!(
                "Average travel time: {} ({:.2} seconds)",
                s.mean_breakdown(),
                s.mean_seconds
            );
        }
    }
    println!("{RULE}");
}

pub fn print_user_stats(stats: Option<&UserStats>) {
    println!("\nUser Stats");
    match stats {
        None => print_empty(),
        Some(s) => {
            match &s.user_types {
                Some(counts) => {
                    println!("Counts by user type:");
                    print_counts(counts);
                }
                None => println!("User type data not available for this city."),
            }
            match &s.genders {
                Some(counts) => {
                    println!("\nCounts by gender:");
                    print_counts(counts);
                }
                None => println!("\nGender data not available for this city."),
            }
            match &s.birth_years {
                Some(years) => {
                    println!("\nBirth year stats:");
                    println!("  Earliest: {}", years.earliest);
                    println!("  Most recent: {}", years.most_recent);
                    println!("  Most common: {}", years.most_common);
                }
                None => println!("\nBirth year data not available for this city."),
            }
        }
    }
    println!("{RULE}");
}

/// Prints one page of raw rows.
pub fn print_trips(trips: &[Trip]) {
    for trip in trips {
        let end = trip
            .end
            .map(|e| e.format(START_TIME_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}  {:>6}s  {} -> {}  [{} | end {}]",
            trip.start.format(START_TIME_FORMAT),
            trip.duration_secs,
            trip.start_station,
            trip.end_station,
            trip.user_type.as_deref().unwrap_or("-"),
            end,
        );
    }
}

fn print_empty() {
    println!("No data available for the selected filters.");
}

fn print_counts(counts: &[(String, usize)]) {
    for (value, count) in counts {
        println!("  {value}: {count}");
    }
}

/// Canonical name for covered months, plain number otherwise.
fn month_label(month: u32) -> String {
    match Month::from_number(month) {
        Some(m) => m.to_string(),
        None => format!("month {month}"),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Flat one-line summary of a stats run, appended to a CSV log.
#[derive(Debug, Serialize)]
pub struct SummaryRecord {
    pub generated_at: DateTime<Utc>,
    pub city: City,
    pub month_filter: Option<Month>,
    pub day_filter: Option<Day>,
    pub trip_count: usize,
    pub busiest_hour: Option<u32>,
    pub top_start_station: Option<String>,
    pub total_seconds: Option<u64>,
    pub mean_seconds: Option<f64>,
}

impl SummaryRecord {
    pub fn from_report(report: &StatsReport) -> SummaryRecord {
        SummaryRecord {
            generated_at: Utc::now(),
            city: report.city,
            month_filter: report.filter.month,
            day_filter: report.filter.day,
            trip_count: report.trip_count,
            busiest_hour: report.time.as_ref().map(|t| t.hour),
            top_start_station: report.stations.as_ref().map(|s| s.start_station.clone()),
            total_seconds: report.duration.as_ref().map(|d| d.total_seconds),
            mean_seconds: report.duration.as_ref().map(|d| d.mean_seconds),
        }
    }
}

/// Appends a [`SummaryRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_summary(path: &str, record: &SummaryRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending summary record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::{OptionalColumns, TripTable, test_trip};
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn small_table() -> TripTable {
        let mut a = test_trip("2017-01-02 09:00:00");
        a.start_station = "Canal St".to_string();
        a.end_station = "State St".to_string();
        a.duration_secs = 100;
        let mut b = a.clone();
        b.duration_secs = 200;
        TripTable::new(vec![a, b], OptionalColumns::default())
    }

    #[test]
    fn test_build_fills_every_group() {
        let table = small_table();
        let report = StatsReport::build(City::Chicago, TripFilter::default(), &table);
        assert_eq!(report.trip_count, 2);
        assert!(report.time.is_some());
        assert!(report.stations.is_some());
        assert!(report.duration.is_some());
        assert!(report.users.is_some());
    }

    #[test]
    fn test_build_on_empty_table_reports_no_data() {
        let table = TripTable::new(vec![], OptionalColumns::default());
        let report = StatsReport::build(City::Washington, TripFilter::default(), &table);
        assert_eq!(report.trip_count, 0);
        assert!(report.time.is_none());
        assert!(report.stations.is_none());
        assert!(report.duration.is_none());
        assert!(report.users.is_none());
    }

    #[test]
    fn test_print_report_does_not_panic() {
        let table = small_table();
        let report = StatsReport::build(City::Chicago, TripFilter::default(), &table);
        print_report(&report);
        print_trips(table.trips());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let report = StatsReport::build(
            City::Chicago,
            TripFilter::default(),
            &TripTable::new(vec![], OptionalColumns::default()),
        );
        print_json(&report).unwrap();
    }

    #[test]
    fn test_month_label_falls_back_to_number() {
        assert_eq!(month_label(1), "January");
        assert_eq!(month_label(6), "June");
        assert_eq!(month_label(11), "month 11");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_append_summary_writes_header_once() {
        let path = temp_path("bikeshare_output_test_header.csv");
        let _ = fs::remove_file(&path);

        let report = StatsReport::build(City::Chicago, TripFilter::default(), &small_table());
        let record = SummaryRecord::from_report(&report);
        append_summary(&path, &record).unwrap();
        append_summary(&path, &record).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content
            .lines()
            .filter(|l| l.contains("generated_at"))
            .count();
        assert_eq!(header_count, 1);
        assert_eq!(content.lines().count(), 3);

        fs::remove_file(&path).unwrap();
    }
}
