//! Most frequent travel times: month, weekday, and start hour.

use chrono::Weekday;

use super::mode::{Mode, mode};
use super::types::{StatsError, TimeStats};
use crate::dataset::TripDataset;

/// Monday-first order; backs the weekday tie-break.
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Computes the most frequent month, weekday, and start hour over the
/// filtered dataset.
pub fn time_stats(dataset: &TripDataset) -> Result<TimeStats, StatsError> {
    if dataset.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    let records = &dataset.records;

    let month = mode(records.iter().map(|trip| trip.month)).unwrap();
    let weekday = mode(
        records
            .iter()
            .map(|trip| trip.weekday.num_days_from_monday()),
    )
    .unwrap();
    let hour = mode(records.iter().map(|trip| trip.start_hour())).unwrap();

    Ok(TimeStats {
        month,
        weekday: Mode {
            value: WEEK[weekday.value as usize],
            count: weekday.count,
        },
        hour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Columns, TIME_FORMAT, TripRecord};
    use chrono::{Datelike, NaiveDateTime};

    fn trip(start: &str) -> TripRecord {
        let start_time = NaiveDateTime::parse_from_str(start, TIME_FORMAT).unwrap();
        TripRecord {
            start_time,
            end_time: start_time + chrono::Duration::seconds(60),
            duration_seconds: 60.0,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            weekday: start_time.weekday(),
        }
    }

    fn dataset(starts: &[&str]) -> TripDataset {
        TripDataset {
            records: starts.iter().map(|start| trip(start)).collect(),
            columns: Columns::default(),
        }
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let result = time_stats(&TripDataset::default());
        assert_eq!(result, Err(StatsError::EmptyDataset));
    }

    #[test]
    fn test_most_common_month_day_and_hour() {
        let data = dataset(&[
            "2017-06-05 08:00:00", // Monday
            "2017-06-06 17:30:00", // Tuesday
            "2017-06-12 17:05:00", // Monday
            "2017-01-02 09:00:00", // Monday
        ]);

        let stats = time_stats(&data).unwrap();
        assert_eq!(stats.month, Mode { value: 6, count: 3 });
        assert_eq!(stats.weekday.value, Weekday::Mon);
        assert_eq!(stats.weekday.count, 3);
        assert_eq!(stats.hour, Mode { value: 17, count: 2 });
    }

    #[test]
    fn test_single_value_counts_whole_dataset() {
        let data = dataset(&[
            "2017-03-15 12:00:00",
            "2017-03-15 12:10:00",
            "2017-03-15 12:20:00",
        ]);

        let stats = time_stats(&data).unwrap();
        assert_eq!(stats.month, Mode { value: 3, count: 3 });
        assert_eq!(stats.hour, Mode { value: 12, count: 3 });
    }

    #[test]
    fn test_month_tie_goes_to_january() {
        let data = dataset(&["2017-06-05 08:00:00", "2017-01-02 09:00:00"]);

        let stats = time_stats(&data).unwrap();
        assert_eq!(stats.month, Mode { value: 1, count: 1 });
    }

    #[test]
    fn test_weekday_tie_goes_earlier_in_week() {
        let data = dataset(&[
            "2017-06-04 08:00:00", // Sunday
            "2017-06-05 08:00:00", // Monday
        ]);

        let stats = time_stats(&data).unwrap();
        assert_eq!(stats.weekday.value, Weekday::Mon);
    }
}
