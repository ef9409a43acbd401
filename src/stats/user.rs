//! Rider demographics: user types, genders, and birth years.
//!
//! Availability is schema-dependent: one city's files carry no gender or
//! birth-year column. Those sub-stats come back as `None` instead of
//! failing the whole group, so the counts that can be computed still are.

use chrono::{Datelike, Local};

use super::mode::mode;
use super::types::{BirthYearStats, CategoryCount, StatsError, UserStats};
use crate::dataset::{TripDataset, TripRecord};

/// Computes user-type, gender, and birth-year statistics, with ages
/// relative to the current calendar year.
pub fn user_stats(dataset: &TripDataset) -> Result<UserStats, StatsError> {
    user_stats_for_year(dataset, Local::now().year())
}

/// Like [`user_stats`], with an explicit reference year for the age math.
pub fn user_stats_for_year(
    dataset: &TripDataset,
    current_year: i32,
) -> Result<UserStats, StatsError> {
    if dataset.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    let records = &dataset.records;

    let user_types = if dataset.columns.user_type {
        category_counts(records.iter().filter_map(|trip| trip.user_type.clone()))
    } else {
        None
    };

    let genders = if dataset.columns.gender {
        category_counts(records.iter().filter_map(|trip| trip.gender.clone()))
    } else {
        None
    };

    let birth_years = if dataset.columns.birth_year {
        birth_year_stats(records, current_year)
    } else {
        None
    };

    Ok(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

/// Frequency table over the reported values; `None` when nothing was
/// reported at all.
fn category_counts(values: impl Iterator<Item = String>) -> Option<Vec<CategoryCount>> {
    let table = super::mode::value_counts(values);
    if table.is_empty() {
        return None;
    }

    Some(
        table
            .into_iter()
            .map(|(value, count)| CategoryCount { value, count })
            .collect(),
    )
}

fn birth_year_stats(records: &[TripRecord], current_year: i32) -> Option<BirthYearStats> {
    let years: Vec<i32> = records.iter().filter_map(|trip| trip.birth_year).collect();

    let earliest = *years.iter().min()?;
    let most_recent = *years.iter().max()?;
    let most_common = mode(years.iter().copied())?;

    Some(BirthYearStats {
        earliest,
        oldest_age: current_year - earliest,
        most_recent,
        youngest_age: current_year - most_recent,
        most_common,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Columns, TIME_FORMAT, TripDataset, TripRecord};
    use crate::stats::mode::Mode;
    use chrono::NaiveDateTime;

    fn trip(
        user_type: Option<&str>,
        gender: Option<&str>,
        birth_year: Option<i32>,
    ) -> TripRecord {
        let start_time =
            NaiveDateTime::parse_from_str("2017-01-01 08:00:00", TIME_FORMAT).unwrap();
        TripRecord {
            start_time,
            end_time: start_time + chrono::Duration::seconds(120),
            duration_seconds: 120.0,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: user_type.map(str::to_string),
            gender: gender.map(str::to_string),
            birth_year,
            month: 1,
            weekday: chrono::Weekday::Sun,
        }
    }

    fn full_schema() -> Columns {
        Columns {
            user_type: true,
            gender: true,
            birth_year: true,
        }
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let dataset = TripDataset {
            records: vec![],
            columns: full_schema(),
        };
        assert_eq!(
            user_stats_for_year(&dataset, 2020),
            Err(StatsError::EmptyDataset)
        );
    }

    #[test]
    fn test_counts_and_birth_year_rollup() {
        let dataset = TripDataset {
            records: vec![
                trip(Some("Subscriber"), Some("Male"), Some(1985)),
                trip(Some("Subscriber"), Some("Female"), Some(1990)),
                trip(Some("Customer"), None, None),
                trip(Some("Subscriber"), Some("Male"), Some(1962)),
                trip(Some("Customer"), Some("Male"), Some(1985)),
            ],
            columns: full_schema(),
        };

        let stats = user_stats_for_year(&dataset, 2020).unwrap();

        assert_eq!(
            stats.user_types,
            Some(vec![
                CategoryCount {
                    value: "Subscriber".to_string(),
                    count: 3
                },
                CategoryCount {
                    value: "Customer".to_string(),
                    count: 2
                },
            ])
        );
        // Blank gender cells are excluded from the counts
        assert_eq!(
            stats.genders,
            Some(vec![
                CategoryCount {
                    value: "Male".to_string(),
                    count: 3
                },
                CategoryCount {
                    value: "Female".to_string(),
                    count: 1
                },
            ])
        );

        let years = stats.birth_years.unwrap();
        assert_eq!(years.earliest, 1962);
        assert_eq!(years.oldest_age, 58);
        assert_eq!(years.most_recent, 1990);
        assert_eq!(years.youngest_age, 30);
        assert_eq!(
            years.most_common,
            Mode {
                value: 1985,
                count: 2
            }
        );
    }

    #[test]
    fn test_absent_columns_yield_none() {
        let dataset = TripDataset {
            records: vec![trip(Some("Registered"), None, None)],
            columns: Columns {
                user_type: true,
                gender: false,
                birth_year: false,
            },
        };

        let stats = user_stats_for_year(&dataset, 2020).unwrap();
        assert!(stats.user_types.is_some());
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);
    }

    #[test]
    fn test_present_column_with_no_reported_values() {
        let dataset = TripDataset {
            records: vec![trip(Some("Subscriber"), None, None)],
            columns: full_schema(),
        };

        let stats = user_stats_for_year(&dataset, 2020).unwrap();
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);
    }

    #[test]
    fn test_birth_year_tie_goes_to_older_cohort() {
        let dataset = TripDataset {
            records: vec![
                trip(None, None, Some(1990)),
                trip(None, None, Some(1970)),
            ],
            columns: full_schema(),
        };

        let stats = user_stats_for_year(&dataset, 2020).unwrap();
        let years = stats.birth_years.unwrap();
        assert_eq!(years.most_common.value, 1970);
    }
}
