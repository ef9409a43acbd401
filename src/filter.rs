//! Month and weekday filtering over a loaded dataset.

use chrono::Weekday;
use thiserror::Error;

use crate::config::CityData;
use crate::dataset::TripDataset;

/// Months the source data covers; filters accept these or `all`.
pub const MONTH_CHOICES: [&str; 6] = [
    "january", "february", "march", "april", "may", "june",
];

/// A requested value fell outside the enumerated filter sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFilter {
    #[error("unknown city `{0}`")]
    City(String),
    #[error("`{0}` is not a month between january and june, or `all`")]
    Month(String),
    #[error("`{0}` is not a day of the week, or `all`")]
    Day(String),
}

/// Month dimension of a [`FilterSpec`]; `All` disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    /// 1-based month number, january = 1.
    Only(u32),
}

impl MonthFilter {
    /// Parses `january`..`june` (any case) or `all`.
    pub fn parse(input: &str) -> Result<Self, InvalidFilter> {
        let normalized = input.trim().to_lowercase();
        if normalized == "all" {
            return Ok(Self::All);
        }

        MONTH_CHOICES
            .iter()
            .position(|month| *month == normalized)
            .map(|idx| Self::Only(idx as u32 + 1))
            .ok_or(InvalidFilter::Month(normalized))
    }

    fn matches(self, month: u32) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => month == wanted,
        }
    }
}

/// Weekday dimension of a [`FilterSpec`]; `All` disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Parses a weekday name (any case) or `all`.
    pub fn parse(input: &str) -> Result<Self, InvalidFilter> {
        let normalized = input.trim().to_lowercase();
        if normalized == "all" {
            return Ok(Self::All);
        }

        normalized
            .parse::<Weekday>()
            .map(Self::Only)
            .map_err(|_| InvalidFilter::Day(normalized))
    }

    fn matches(self, day: Weekday) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => day == wanted,
        }
    }
}

/// A validated city/month/day selection.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub city: String,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSpec {
    /// Validates raw input against the configured city set and the
    /// month/day choices. City names are lower-cased first.
    pub fn new(
        cities: &CityData,
        city: &str,
        month: &str,
        day: &str,
    ) -> Result<Self, InvalidFilter> {
        let city = city.trim().to_lowercase();
        if !cities.contains(&city) {
            return Err(InvalidFilter::City(city));
        }

        Ok(Self {
            city,
            month: MonthFilter::parse(month)?,
            day: DayFilter::parse(day)?,
        })
    }
}

/// Returns the records matching both filter dimensions (logical AND), in
/// their original order. An empty result is not an error.
pub fn apply(dataset: &TripDataset, month: MonthFilter, day: DayFilter) -> TripDataset {
    let records = dataset
        .records
        .iter()
        .filter(|trip| month.matches(trip.month) && day.matches(trip.weekday))
        .cloned()
        .collect();

    TripDataset {
        records,
        columns: dataset.columns,
    }
}
