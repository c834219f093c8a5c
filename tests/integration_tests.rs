use std::path::PathBuf;

use bikeshare_explorer::city::{City, Day, Month};
use bikeshare_explorer::filter::TripFilter;
use bikeshare_explorer::loader::load_path;
use bikeshare_explorer::output::StatsReport;
use bikeshare_explorer::paginate::RawDataPager;
use bikeshare_explorer::stats::user::MISSING_LABEL;
use bikeshare_explorer::stats::{DurationStats, StationStats, TimeStats, UserStats};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_full_pipeline_unfiltered() {
    let table = load_path(&fixture("full_city.csv")).expect("fixture should load");
    assert_eq!(table.len(), 5);

    let schema = table.schema();
    assert!(schema.user_type);
    assert!(schema.gender);
    assert!(schema.birth_year);

    // the fourth row carries an unparseable end time
    assert_eq!(table.trips()[3].end, None);
    assert!(table.trips()[0].end.is_some());

    let time = TimeStats::from_table(&table).expect("table has rows");
    assert_eq!(time.month, 1);
    // Monday and Friday both appear twice; Monday is earlier in the week
    assert_eq!(time.day, Day::Monday);
    assert_eq!(time.hour, 9);

    let stations = StationStats::from_table(&table).expect("table has rows");
    assert_eq!(stations.start_station, "Canal St");
    assert_eq!(stations.end_station, "State St");
    assert_eq!(stations.trip, "Canal St -> State St");

    let duration = DurationStats::from_table(&table).expect("table has rows");
    assert_eq!(duration.total_seconds, 4553);
    assert!((duration.mean_seconds - 910.6).abs() < 1e-9);

    let users = UserStats::from_table(&table).expect("table has rows");
    assert_eq!(
        users.user_types.unwrap(),
        vec![
            ("Subscriber".to_string(), 3),
            (MISSING_LABEL.to_string(), 1),
            ("Customer".to_string(), 1),
        ]
    );
    assert_eq!(
        users.genders.unwrap(),
        vec![
            ("Female".to_string(), 2),
            ("Male".to_string(), 2),
            (MISSING_LABEL.to_string(), 1),
        ]
    );
    let years = users.birth_years.unwrap();
    assert_eq!(years.earliest, 1985);
    assert_eq!(years.most_recent, 1992);
    assert_eq!(years.most_common, 1992);
}

#[test]
fn test_filtered_pipeline_matches_selectors() {
    let table = load_path(&fixture("full_city.csv")).unwrap();

    let january = TripFilter {
        month: Some(Month::January),
        day: None,
    }
    .apply(&table);
    assert_eq!(january.len(), 3);
    assert!(january.trips().iter().all(|t| t.month == 1));

    let mondays = TripFilter {
        month: None,
        day: Some(Day::Monday),
    }
    .apply(&table);
    assert_eq!(mondays.len(), 2);
    assert!(mondays.trips().iter().all(|t| t.day == Day::Monday));

    // filtering an already-filtered table by all/all is a no-op
    let again = TripFilter::default().apply(&january);
    assert_eq!(again.len(), january.len());
    for (a, b) in again.trips().iter().zip(january.trips()) {
        assert_eq!(a.start, b.start);
    }
}

#[test]
fn test_empty_filter_result_propagates_everywhere() {
    let table = load_path(&fixture("full_city.csv")).unwrap();
    let march = TripFilter {
        month: Some(Month::March),
        day: None,
    }
    .apply(&table);
    assert!(march.is_empty());

    let report = StatsReport::build(City::Chicago, TripFilter::default(), &march);
    assert_eq!(report.trip_count, 0);
    assert!(report.time.is_none());
    assert!(report.stations.is_none());
    assert!(report.duration.is_none());
    assert!(report.users.is_none());

    let mut pager = RawDataPager::new(&march);
    assert!(pager.is_empty());
    assert!(pager.next_page().is_none());
}

#[test]
fn test_pagination_over_loaded_table() {
    let table = load_path(&fixture("full_city.csv")).unwrap();
    let mut pager = RawDataPager::new(&table);

    let first = pager.next_page().unwrap();
    assert_eq!(first.len(), 5);
    assert_eq!(first[0].start_station, "Canal St");
    assert!(pager.next_page().is_none());
    assert!(!pager.is_empty());
}

#[test]
fn test_table_without_demographic_columns() {
    let table = load_path(&fixture("plain_city.csv")).unwrap();
    assert_eq!(table.len(), 2);

    let schema = table.schema();
    assert!(schema.user_type);
    assert!(!schema.gender);
    assert!(!schema.birth_year);

    let users = UserStats::from_table(&table).expect("table has rows");
    assert_eq!(
        users.user_types.unwrap(),
        vec![("Customer".to_string(), 1), ("Subscriber".to_string(), 1)]
    );
    assert_eq!(users.genders, None);
    assert_eq!(users.birth_years, None);

    let report = StatsReport::build(City::Washington, TripFilter::default(), &table);
    assert!(report.time.is_some());
    assert!(report.duration.is_some());
}
