//! CLI entry point for the bikeshare explorer.
//!
//! Provides an interactive exploration loop and a one-shot statistics
//! subcommand over the per-city trip tables.

mod prompt;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use bikeshare_explorer::city::{City, Day, Month};
use bikeshare_explorer::filter::TripFilter;
use bikeshare_explorer::loader;
use bikeshare_explorer::output::{self, StatsReport, SummaryRecord};
use bikeshare_explorer::paginate::RawDataPager;
use bikeshare_explorer::trips::TripTable;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively pick a city and filters, then browse statistics
    Explore {
        /// Directory containing the per-city CSV files
        #[arg(short, long)]
        data_dir: Option<String>,
    },
    /// Compute statistics for one city without prompting
    Stats {
        /// City to analyze
        #[arg(value_enum)]
        city: City,

        /// Restrict to a single month (January through June)
        #[arg(short, long, value_enum)]
        month: Option<Month>,

        /// Restrict to a single day of the week
        #[arg(short, long, value_enum)]
        day: Option<Day>,

        /// Directory containing the per-city CSV files
        #[arg(long)]
        data_dir: Option<String>,

        /// Print the report as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,

        /// CSV file to append a one-line summary to
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // stderr defaults to warn; the file layer captures debug
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Explore { data_dir } => {
            explore(&resolve_data_dir(data_dir))?;
        }
        Commands::Stats {
            city,
            month,
            day,
            data_dir,
            json,
            output,
        } => {
            let data_dir = resolve_data_dir(data_dir);
            let filter = TripFilter { month, day };

            let table = loader::load_city(&data_dir, city)?;
            let filtered = filter.apply(&table);
            let report = StatsReport::build(city, filter, &filtered);

            if json {
                output::print_json(&report)?;
            } else {
                output::print_report(&report);
            }

            if let Some(path) = output {
                output::append_summary(&path, &SummaryRecord::from_report(&report))?;
            }
        }
    }

    Ok(())
}

/// Resolution order: CLI flag, then `BIKESHARE_DATA_DIR`, then `./data`.
fn resolve_data_dir(arg: Option<String>) -> PathBuf {
    let dir = arg
        .or_else(|| std::env::var("BIKESHARE_DATA_DIR").ok())
        .unwrap_or_else(|| "data".to_string());
    PathBuf::from(dir)
}

/// Runs filter cycles until the user declines to restart.
fn explore(data_dir: &Path) -> Result<()> {
    println!("Hello! Let's explore some US bikeshare data!");

    loop {
        let selection = prompt::get_filters()?;
        info!(city = %selection.city, "Loading trip table");

        let table = loader::load_city(data_dir, selection.city)?;
        let filtered = selection.filter.apply(&table);
        debug!(
            total = table.len(),
            filtered = filtered.len(),
            "Filter applied"
        );

        let report = StatsReport::build(selection.city, selection.filter, &filtered);
        output::print_report(&report);

        show_raw_data(&filtered)?;

        if !prompt::confirm("\nWould you like to restart? (yes/no): ")? {
            break;
        }
    }

    Ok(())
}

/// Pages raw rows five at a time while the user keeps asking for more.
fn show_raw_data(table: &TripTable) -> Result<()> {
    if !prompt::confirm("\nWould you like to see 5 lines of raw data? (yes/no): ")? {
        return Ok(());
    }

    let mut pager = RawDataPager::new(table);
    loop {
        match pager.next_page() {
            Some(page) => output::print_trips(page),
            None => {
                println!("No more raw data to display.");
                break;
            }
        }
        if pager.remaining() == 0 {
            println!("No more raw data to display.");
            break;
        }
        if !prompt::confirm("Show 5 more rows? (yes/no): ")? {
            break;
        }
    }

    Ok(())
}
