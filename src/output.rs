//! Rendering and persistence for computed statistics.
//!
//! Supports pretty terminal output, JSON report export, and CSV export of
//! the filtered trips.

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::dataset::{TIME_FORMAT, TripDataset, TripRecord, month_name, weekday_name};
use crate::stats::types::{
    CategoryCount, DurationStats, StationStats, StatsReport, TimeStats, UserStats,
};

/// Prints every computed group in section order, then a note for each
/// group that could not (fully) be computed.
pub fn print_report(report: &StatsReport) {
    if let Some(times) = &report.times {
        print_time_stats(times);
    }
    if let Some(stations) = &report.stations {
        print_station_stats(stations);
    }
    if let Some(durations) = &report.durations {
        print_duration_stats(durations);
    }
    if let Some(users) = &report.users {
        print_user_stats(users);
    }

    if !report.failures.is_empty() {
        println!();
        for failure in &report.failures {
            println!("note: {}: {}", failure.group.label(), failure.error);
        }
    }
}

pub fn print_time_stats(stats: &TimeStats) {
    println!("\nMost Frequent Times of Travel");
    println!("-----------------------------");
    println!(
        "  month:      {} ({} trips)",
        month_name(stats.month.value),
        stats.month.count
    );
    println!(
        "  day:        {} ({} trips)",
        weekday_name(stats.weekday.value),
        stats.weekday.count
    );
    println!(
        "  start hour: {}:00 ({} trips)",
        stats.hour.value, stats.hour.count
    );
}

pub fn print_station_stats(stats: &StationStats) {
    println!("\nMost Popular Stations and Trip");
    println!("------------------------------");
    println!(
        "  start station: {} ({} trips)",
        stats.start_station.value, stats.start_station.count
    );
    println!(
        "  end station:   {} ({} trips)",
        stats.end_station.value, stats.end_station.count
    );
    println!(
        "  trip:          {} ({} trips)",
        stats.trip.value, stats.trip.count
    );
}

pub fn print_duration_stats(stats: &DurationStats) {
    println!("\nTrip Duration");
    println!("-------------");
    println!("  total travel time:   {} days", stats.total_days);
    println!("  average travel time: {} minutes", stats.average_minutes);
}

pub fn print_user_stats(stats: &UserStats) {
    println!("\nUser Stats");
    println!("----------");

    match &stats.user_types {
        Some(counts) => {
            println!("  Counts by user type:");
            print_counts(counts);
        }
        None => println!("  User types are not recorded for this selection."),
    }

    match &stats.genders {
        Some(counts) => {
            println!("  Counts by gender:");
            print_counts(counts);
        }
        None => println!("  Genders are not recorded for this selection."),
    }

    match &stats.birth_years {
        Some(years) => {
            println!(
                "  Earliest birth year:    {} (age {})",
                years.earliest, years.oldest_age
            );
            println!(
                "  Most recent birth year: {} (age {})",
                years.most_recent, years.youngest_age
            );
            println!(
                "  Most common birth year: {} ({} riders)",
                years.most_common.value, years.most_common.count
            );
        }
        None => println!("  Birth years are not recorded for this selection."),
    }
}

fn print_counts(counts: &[CategoryCount]) {
    let width = counts
        .iter()
        .map(|row| row.value.len())
        .max()
        .unwrap_or(0);
    for row in counts {
        println!("    {:<width$}  {}", row.value, row.count, width = width);
    }
}

/// Prints a page of raw records for the interactive pager.
pub fn print_records(records: &[TripRecord]) {
    for trip in records {
        let mut extras = Vec::new();
        if let Some(user_type) = &trip.user_type {
            extras.push(user_type.clone());
        }
        if let Some(gender) = &trip.gender {
            extras.push(gender.clone());
        }
        if let Some(year) = trip.birth_year {
            extras.push(year.to_string());
        }

        let extras = if extras.is_empty() {
            String::new()
        } else {
            format!("  [{}]", extras.join(", "))
        };
        println!(
            "  {}  {:>6}s  {} -> {}{}",
            trip.start_time.format(TIME_FORMAT),
            trip.duration_seconds,
            trip.start_station,
            trip.end_station,
            extras
        );
    }
}

/// Writes the report as pretty-printed JSON. Absent sub-stats are omitted
/// rather than zero-filled.
pub fn write_json(path: &Path, report: &StatsReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    debug!(path = %path.display(), "Report written");
    Ok(())
}

/// Writes the dataset's records back out as CSV in the source column
/// layout. Optional columns appear only when the source schema had them.
pub fn export_trips(path: &Path, dataset: &TripDataset) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_path(path)?;

    let mut header = vec![
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
    ];
    if dataset.columns.user_type {
        header.push("User Type");
    }
    if dataset.columns.gender {
        header.push("Gender");
    }
    if dataset.columns.birth_year {
        header.push("Birth Year");
    }
    writer.write_record(&header)?;

    for trip in &dataset.records {
        let mut row = vec![
            trip.start_time.format(TIME_FORMAT).to_string(),
            trip.end_time.format(TIME_FORMAT).to_string(),
            trip.duration_seconds.to_string(),
            trip.start_station.clone(),
            trip.end_station.clone(),
        ];
        if dataset.columns.user_type {
            row.push(trip.user_type.clone().unwrap_or_default());
        }
        if dataset.columns.gender {
            row.push(trip.gender.clone().unwrap_or_default());
        }
        if dataset.columns.birth_year {
            row.push(
                trip.birth_year
                    .map(|year| year.to_string())
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = dataset.len(), "Trips exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Columns;
    use crate::loader;
    use crate::stats::mode::Mode;
    use chrono::{Datelike, NaiveDateTime, Weekday};
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    fn trip(start: &str, gender: Option<&str>) -> TripRecord {
        let start_time = NaiveDateTime::parse_from_str(start, TIME_FORMAT).unwrap();
        TripRecord {
            start_time,
            end_time: start_time + chrono::Duration::seconds(120),
            duration_seconds: 120.0,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: gender.map(str::to_string),
            birth_year: None,
            month: start_time.month(),
            weekday: start_time.weekday(),
        }
    }

    fn sample_report() -> StatsReport {
        StatsReport {
            times: Some(TimeStats {
                month: Mode { value: 1, count: 2 },
                weekday: Mode {
                    value: Weekday::Sun,
                    count: 2,
                },
                hour: Mode { value: 8, count: 2 },
            }),
            stations: None,
            durations: Some(DurationStats {
                total_days: 0.01,
                average_minutes: 4.0,
            }),
            users: None,
            failures: vec![],
        }
    }

    #[test]
    fn test_print_report_does_not_panic() {
        print_report(&sample_report());
    }

    #[test]
    fn test_print_records_does_not_panic() {
        print_records(&[trip("2017-01-01 08:00:00", Some("Male"))]);
    }

    #[test]
    fn test_write_json_omits_absent_groups() {
        let path = temp_path("bikeshare_explorer_test_report.json");
        let _ = fs::remove_file(&path);

        write_json(&path, &sample_report()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("total_days"));
        assert!(!content.contains("stations"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_export_round_trips_through_loader() {
        let path = temp_path("bikeshare_explorer_test_export.csv");
        let _ = fs::remove_file(&path);

        let dataset = TripDataset {
            records: vec![
                trip("2017-01-01 08:00:00", Some("Male")),
                trip("2017-01-08 08:30:00", None),
            ],
            columns: Columns {
                user_type: true,
                gender: true,
                birth_year: false,
            },
        };

        export_trips(&path, &dataset).unwrap();
        let reloaded = loader::load_path(&path).unwrap();

        assert_eq!(reloaded.records, dataset.records);
        assert_eq!(reloaded.columns, dataset.columns);

        fs::remove_file(&path).unwrap();
    }
}
