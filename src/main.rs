//! CLI entry point for the bikeshare explorer.
//!
//! Provides an interactive explore loop and a one-shot analyze command
//! over the configured city datasets.

mod prompt;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use bikeshare_explorer::config::CityData;
use bikeshare_explorer::dataset::TripDataset;
use bikeshare_explorer::filter::{self, FilterSpec};
use bikeshare_explorer::loader::{self, LoadError};
use bikeshare_explorer::output;
use bikeshare_explorer::stats::types::StatsReport;

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// JSON file mapping city names to trip CSVs
    #[arg(short, long, global = true)]
    cities: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively pick filters and browse statistics
    Explore,
    /// Run a single filtered analysis without prompts
    Analyze {
        /// City to analyze, as named in the city table
        city: String,

        /// Month filter: january through june, or all
        #[arg(short, long, default_value = "all")]
        month: String,

        /// Day filter: monday through sunday, or all
        #[arg(short, long, default_value = "all")]
        day: String,

        /// Write the computed statistics to a JSON file
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the filtered trips to a CSV file
        #[arg(long)]
        export_trips: Option<PathBuf>,
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

    // Stderr stays quiet by default so the prompts are readable
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
    let cities = city_table(cli.cities.as_deref())?;

    match cli.command {
        Commands::Explore => explore(&cities),
        Commands::Analyze {
            city,
            month,
            day,
            json,
            export_trips,
        } => {
            let spec = FilterSpec::new(&cities, &city, &month, &day)?;
            analyze(&cities, &spec, json.as_deref(), export_trips.as_deref())
        }
    }
}

/// Resolves the city table: `--cities` flag, then the `BIKESHARE_CITIES`
/// environment variable, then the bundled defaults.
fn city_table(flag: Option<&Path>) -> Result<CityData> {
    if let Some(path) = flag {
        return CityData::load(path);
    }
    if let Ok(path) = std::env::var("BIKESHARE_CITIES") {
        return CityData::load(Path::new(&path));
    }
    Ok(CityData::bundled())
}

/// The original interactive flow: filters, stats, raw-record pager,
/// restart.
fn explore(cities: &CityData) -> Result<()> {
    println!("Hello! Let's explore some US bikeshare data!");

    loop {
        let Some(spec) = prompt::get_filters(cities)? else {
            break;
        };

        match load_and_filter(cities, &spec) {
            Ok(dataset) => {
                report_stats(&dataset);
                prompt::page_raw_data(&dataset)?;
            }
            Err(load_error) => {
                error!(city = %spec.city, error = %load_error, "Analysis failed");
                println!("Sorry, that city's data could not be loaded: {load_error}");
            }
        }

        if !prompt::confirm("\nWould you like to restart? Enter yes or no.")? {
            break;
        }
    }

    Ok(())
}

/// One-shot analysis for scripting.
fn analyze(
    cities: &CityData,
    spec: &FilterSpec,
    json: Option<&Path>,
    export_trips: Option<&Path>,
) -> Result<()> {
    let dataset = load_and_filter(cities, spec)?;
    info!(city = %spec.city, rows = dataset.len(), "Filtered dataset ready");

    let report = StatsReport::compute(&dataset);
    output::print_report(&report);

    if let Some(path) = json {
        output::write_json(path, &report).context("writing JSON report")?;
    }
    if let Some(path) = export_trips {
        output::export_trips(path, &dataset).context("exporting filtered trips")?;
    }

    Ok(())
}

fn load_and_filter(cities: &CityData, spec: &FilterSpec) -> Result<TripDataset, LoadError> {
    let dataset = loader::load(cities, &spec.city)?;
    debug!(city = %spec.city, rows = dataset.len(), "City data loaded");
    Ok(filter::apply(&dataset, spec.month, spec.day))
}

fn report_stats(dataset: &TripDataset) {
    let started = Instant::now();
    let report = StatsReport::compute(dataset);
    output::print_report(&report);

    println!(
        "\nComputed in {:.3} seconds.",
        started.elapsed().as_secs_f64()
    );
    println!("{}", "-".repeat(40));
}
