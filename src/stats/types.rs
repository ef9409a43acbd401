//! Result types for the statistic groups.

use chrono::Weekday;
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::mode::Mode;
use crate::dataset::weekday_name;

/// A statistic group could not be computed for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsError {
    #[error("no trips match the current selection")]
    EmptyDataset,
    #[error("column `{0}` is not present in this city's data")]
    MissingField(&'static str),
}

/// Most frequent travel times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    /// 1-based month number.
    pub month: Mode<u32>,
    #[serde(serialize_with = "ser_weekday_mode")]
    pub weekday: Mode<Weekday>,
    /// Start hour, 0-23.
    pub hour: Mode<u32>,
}

/// Most popular stations and route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub start_station: Mode<String>,
    pub end_station: Mode<String>,
    /// `"{start} / {end}"` route string.
    pub trip: Mode<String>,
}

/// Duration totals, pre-rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_days: f64,
    pub average_minutes: f64,
}

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Earliest/most recent/most common birth year, with ages relative to the
/// reference calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub oldest_age: i32,
    pub most_recent: i32,
    pub youngest_age: i32,
    pub most_common: Mode<i32>,
}

/// Rider demographics. Sub-stats are `None`, and omitted from serialized
/// output, when the backing column is absent or has no reported values for
/// the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_types: Option<Vec<CategoryCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genders: Option<Vec<CategoryCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_years: Option<BirthYearStats>,
}

/// The four caller-facing statistic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatGroup {
    Times,
    Stations,
    Durations,
    Users,
}

impl StatGroup {
    /// Human label used in terminal output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Times => "travel times",
            Self::Stations => "stations",
            Self::Durations => "trip durations",
            Self::Users => "user stats",
        }
    }
}

/// A group that could not (fully) be computed, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupFailure {
    pub group: StatGroup,
    pub error: StatsError,
}

/// Complete aggregation result for one filtered dataset: whatever could be
/// computed, plus one entry per group-level failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<TimeStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stations: Option<StationStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durations: Option<DurationStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<UserStats>,
    pub failures: Vec<GroupFailure>,
}

impl StatsReport {
    /// True when at least one group produced a result.
    pub fn has_results(&self) -> bool {
        self.times.is_some()
            || self.stations.is_some()
            || self.durations.is_some()
            || self.users.is_some()
    }
}

fn ser_weekday_mode<S>(mode: &Mode<Weekday>, ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeStruct;

    let mut s = ser.serialize_struct("Mode", 2)?;
    s.serialize_field("value", weekday_name(mode.value))?;
    s.serialize_field("count", &mode.count)?;
    s.end()
}
