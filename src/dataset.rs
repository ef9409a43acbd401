//! Trip records and the per-city dataset.

use chrono::{NaiveDateTime, Timelike, Weekday};

/// Timestamp layout used by the city CSV files.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One bike-share rental event.
///
/// `month` and `weekday` are derived from `start_time` when the record is
/// loaded and stay consistent with it; filtering never rewrites either.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_seconds: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    /// 1-based month of `start_time`.
    pub month: u32,
    /// Weekday of `start_time`.
    pub weekday: Weekday,
}

impl TripRecord {
    /// Start time truncated to the hour.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Which optional columns the source schema provided.
///
/// One city's files carry no gender or birth-year column at all, which is
/// different from a present column with blank cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Columns {
    pub user_type: bool,
    pub gender: bool,
    pub birth_year: bool,
}

/// An ordered set of trips for one city, plus its schema flags.
#[derive(Debug, Clone, Default)]
pub struct TripDataset {
    pub records: Vec<TripRecord>,
    pub columns: Columns,
}

impl TripDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// English name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    month
        .checked_sub(1)
        .and_then(|idx| NAMES.get(idx as usize))
        .copied()
        .unwrap_or("unknown")
}

/// Full English weekday name. Chrono's own `Display` abbreviates.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
