//! Partial-results aggregation across all statistic groups.

use chrono::{Datelike, Local};
use tracing::debug;

use super::duration::duration_stats;
use super::station::station_stats;
use super::time::time_stats;
use super::types::{GroupFailure, StatGroup, StatsError, StatsReport};
use super::user::user_stats_for_year;
use crate::dataset::TripDataset;

impl StatsReport {
    /// Runs every statistic group over `dataset`, keeping whatever
    /// succeeds. Failures are collected instead of aborting sibling
    /// groups.
    pub fn compute(dataset: &TripDataset) -> Self {
        Self::compute_for_year(dataset, Local::now().year())
    }

    /// Like [`StatsReport::compute`], with an explicit reference year for
    /// the birth-year age math.
    pub fn compute_for_year(dataset: &TripDataset, current_year: i32) -> Self {
        let mut failures = Vec::new();

        let times = record(time_stats(dataset), StatGroup::Times, &mut failures);
        let stations = record(station_stats(dataset), StatGroup::Stations, &mut failures);
        let durations = record(duration_stats(dataset), StatGroup::Durations, &mut failures);
        let users = record(
            user_stats_for_year(dataset, current_year),
            StatGroup::Users,
            &mut failures,
        );

        // Columns missing from this city's schema are worth a note even
        // though the rest of the user group computed
        if users.is_some() {
            for (present, column) in [
                (dataset.columns.user_type, "User Type"),
                (dataset.columns.gender, "Gender"),
                (dataset.columns.birth_year, "Birth Year"),
            ] {
                if !present {
                    failures.push(GroupFailure {
                        group: StatGroup::Users,
                        error: StatsError::MissingField(column),
                    });
                }
            }
        }

        debug!(failures = failures.len(), "Statistics computed");
        Self {
            times,
            stations,
            durations,
            users,
            failures,
        }
    }
}

fn record<T>(
    result: Result<T, StatsError>,
    group: StatGroup,
    failures: &mut Vec<GroupFailure>,
) -> Option<T> {
    match result {
        Ok(stats) => Some(stats),
        Err(error) => {
            failures.push(GroupFailure { group, error });
            None
        }
    }
}
