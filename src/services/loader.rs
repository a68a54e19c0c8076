// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip log loading and month/day filtering.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Capabilities, City, FilterParams, TripRecord, TripTable};
use crate::time_utils::parse_timestamp;

const REQUIRED_COLUMNS: [&str; 6] = [
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];
const GENDER_COLUMN: &str = "Gender";
const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// One CSV row before validation.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: String,
    #[serde(rename = "Start Station")]
    start_station: Option<String>,
    #[serde(rename = "End Station")]
    end_station: Option<String>,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender")]
    gender: Option<String>,
    #[serde(rename = "Birth Year")]
    birth_year: Option<String>,
}

impl RawTrip {
    fn into_record(self, line: u64) -> Result<TripRecord> {
        let start_time = parse_timestamp(&self.start_time).ok_or_else(|| {
            AppError::malformed(line, format!("invalid Start Time '{}'", self.start_time))
        })?;
        let end_time = parse_timestamp(&self.end_time).ok_or_else(|| {
            AppError::malformed(line, format!("invalid End Time '{}'", self.end_time))
        })?;

        let duration_secs = self
            .trip_duration
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite() && *d >= 0.0)
            .ok_or_else(|| {
                AppError::malformed(
                    line,
                    format!("invalid Trip Duration '{}'", self.trip_duration),
                )
            })?;

        let birth_year = match non_empty(self.birth_year) {
            Some(raw) => Some(parse_year(&raw).ok_or_else(|| {
                AppError::malformed(line, format!("invalid Birth Year '{}'", raw))
            })?),
            None => None,
        };

        Ok(TripRecord {
            start_time,
            end_time,
            duration_secs,
            start_station: non_empty(self.start_station),
            end_station: non_empty(self.end_station),
            user_type: non_empty(self.user_type),
            gender: non_empty(self.gender),
            birth_year,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Birth years are sometimes written as floats ("1992.0").
fn parse_year(raw: &str) -> Option<i32> {
    let value = raw.trim().parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

/// Resolves cities to trip logs and builds filtered trip tables.
#[derive(Debug, Clone)]
pub struct TripLoader {
    data_dir: PathBuf,
    sources: BTreeMap<City, String>,
}

impl TripLoader {
    pub fn new(config: &Config) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            sources: config.city_files.clone(),
        }
    }

    /// Path of the trip log for `city`.
    pub fn source_path(&self, city: City) -> Result<PathBuf> {
        self.sources
            .get(&city)
            .map(|file| self.data_dir.join(file))
            .ok_or_else(|| {
                AppError::Configuration(format!("No trip log configured for {}", city))
            })
    }

    /// Load the city's trip log and apply the month and day filters.
    pub fn load(&self, params: &FilterParams) -> Result<TripTable> {
        let path = self.source_path(params.city)?;
        tracing::info!(city = %params.city, path = %path.display(), "Loading trip log");

        let table = load_from_file(&path)?;
        let total = table.len();
        let table = table.filter(params.month, params.day);

        tracing::info!(
            city = %params.city,
            month = %params.month,
            day = %params.day,
            total,
            kept = table.len(),
            "Trip log filtered"
        );
        Ok(table)
    }
}

/// Load every trip in a CSV trip log.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<TripTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file, path)
}

/// Load every trip from CSV data. `source` is only used in error messages.
pub fn load_from_reader<R: Read>(reader: R, source: &Path) -> Result<TripTable> {
    let mut reader = csv::ReaderBuilder::new().from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| csv_error(e, source))?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::malformed(
                1,
                format!("missing required column '{}'", column),
            ));
        }
    }
    let capabilities = Capabilities {
        gender: headers.iter().any(|h| h == GENDER_COLUMN),
        birth_year: headers.iter().any(|h| h == BIRTH_YEAR_COLUMN),
    };

    let mut records = Vec::new();
    let mut row = csv::StringRecord::new();
    while let Some(record) = next_record(&mut reader, &mut row, &headers, source)
        .inspect_err(|e| {
            tracing::warn!(source = %source.display(), error = %e, "Rejecting trip log");
        })?
    {
        records.push(record);
    }

    tracing::debug!(
        rows = records.len(),
        gender = capabilities.gender,
        birth_year = capabilities.birth_year,
        "Parsed trip log"
    );
    Ok(TripTable::new(records, capabilities))
}

/// Read and validate the next row. `None` at end of input.
fn next_record<R: Read>(
    reader: &mut csv::Reader<R>,
    row: &mut csv::StringRecord,
    headers: &csv::StringRecord,
    source: &Path,
) -> Result<Option<TripRecord>> {
    if !reader.read_record(row).map_err(|e| csv_error(e, source))? {
        return Ok(None);
    }
    let line = row.position().map(|p| p.line()).unwrap_or_default();
    let raw: RawTrip = row
        .deserialize(Some(headers))
        .map_err(|e| AppError::malformed(line, e.to_string()))?;
    raw.into_record(line).map(Some)
}

fn csv_error(err: csv::Error, source: &Path) -> AppError {
    let line = err.position().map(|p| p.line()).unwrap_or_default();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => AppError::Io {
            path: source.to_path_buf(),
            source: io,
        },
        kind => AppError::malformed(line, format!("{:?}", kind)),
    }
}
