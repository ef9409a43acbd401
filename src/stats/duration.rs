//! Total and average trip duration.

use super::types::{DurationStats, StatsError};
use crate::dataset::TripDataset;

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Computes total travel time in days and mean travel time in minutes,
/// both rounded to two decimals.
pub fn duration_stats(dataset: &TripDataset) -> Result<DurationStats, StatsError> {
    if dataset.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let total_seconds: f64 = dataset
        .records
        .iter()
        .map(|trip| trip.duration_seconds)
        .sum();
    let mean_seconds = total_seconds / dataset.len() as f64;

    Ok(DurationStats {
        total_days: round2(total_seconds / SECONDS_PER_DAY),
        average_minutes: round2(mean_seconds / SECONDS_PER_MINUTE),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
