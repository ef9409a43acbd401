//! CSV loading and derived-field computation.
//!
//! Every record gets its `month` and `weekday` filled in from the start
//! time here, so downstream filtering and statistics never re-parse dates.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::debug;

use crate::config::CityData;
use crate::dataset::{Columns, TIME_FORMAT, TripDataset, TripRecord};

/// A source file could not be turned into a [`TripDataset`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no data source configured for city `{0}`")]
    UnknownCity(String),
    #[error("could not read trip data from {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed trip record in {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// One raw CSV row. Column names match the source files; the nameless
/// leading index column is ignored by the reader.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time", deserialize_with = "de_datetime")]
    start_time: NaiveDateTime,
    #[serde(rename = "End Time", deserialize_with = "de_datetime")]
    end_time: NaiveDateTime,
    #[serde(rename = "Trip Duration")]
    duration_seconds: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default, deserialize_with = "de_birth_year")]
    birth_year: Option<i32>,
}

fn de_datetime<'de, D>(de: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(de)?;
    NaiveDateTime::parse_from_str(raw.trim(), TIME_FORMAT).map_err(serde::de::Error::custom)
}

/// Source files store birth years as floats (`1992.0`); blank cells mean
/// the rider did not report one.
fn de_birth_year<'de, D>(de: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Option::deserialize(de)?;
    Ok(raw.map(|year| year as i32))
}

/// Loads every trip for `city` using the paths in `cities`.
pub fn load(cities: &CityData, city: &str) -> Result<TripDataset, LoadError> {
    let path = cities
        .path_for(city)
        .ok_or_else(|| LoadError::UnknownCity(city.to_string()))?;
    load_path(path)
}

/// Loads a trip CSV directly from `path`, deriving the calendar fields.
pub fn load_path(path: &Path) -> Result<TripDataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = csv::Reader::from_reader(file);

    let headers = rdr
        .headers()
        .map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let columns = Columns {
        user_type: headers.iter().any(|header| header == "User Type"),
        gender: headers.iter().any(|header| header == "Gender"),
        birth_year: headers.iter().any(|header| header == "Birth Year"),
    };

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let raw: RawTrip = row.map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(derive_fields(raw));
    }

    debug!(path = %path.display(), rows = records.len(), "Trip data loaded");
    Ok(TripDataset { records, columns })
}

fn derive_fields(raw: RawTrip) -> TripRecord {
    let month = raw.start_time.month();
    let weekday = raw.start_time.weekday();

    TripRecord {
        start_time: raw.start_time,
        end_time: raw.end_time,
        duration_seconds: raw.duration_seconds,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: raw.user_type,
        gender: raw.gender,
        birth_year: raw.birth_year,
        month,
        weekday,
    }
}
