//! Most popular start station, end station, and route.

use super::mode::mode;
use super::types::{StationStats, StatsError};
use crate::dataset::TripDataset;

/// Computes the most frequent start station, end station, and combined
/// start-to-end route over the filtered dataset.
pub fn station_stats(dataset: &TripDataset) -> Result<StationStats, StatsError> {
    if dataset.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    let records = &dataset.records;

    let start_station = mode(records.iter().map(|trip| trip.start_station.clone())).unwrap();
    let end_station = mode(records.iter().map(|trip| trip.end_station.clone())).unwrap();
    let trip = mode(
        records
            .iter()
            .map(|trip| format!("{} / {}", trip.start_station, trip.end_station)),
    )
    .unwrap();

    Ok(StationStats {
        start_station,
        end_station,
        trip,
    })
}
