// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip records and the in-memory trip table.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

use crate::models::filter::{DayFilter, MonthFilter};
use crate::time_utils::format_timestamp;

/// One bike-share rental.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Rental start (local time of the source log)
    pub start_time: NaiveDateTime,
    /// Rental end
    pub end_time: NaiveDateTime,
    /// Trip duration in seconds, as written in the log
    pub duration_secs: f64,
    /// Station names; `None` when the cell is empty
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// Subscriber, Customer, ... (`None` when the cell is empty)
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Calendar month (1-12) of the start time.
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Hour of day (0-23) of the start time.
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    pub fn matches(&self, month: MonthFilter, day: DayFilter) -> bool {
        let month_ok = month.ordinal().is_none_or(|m| self.month() == m);
        let day_ok = match day {
            DayFilter::All => true,
            DayFilter::Only(d) => self.weekday() == d,
        };
        month_ok && day_ok
    }
}

/// Which optional columns the source log provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Capabilities {
    pub gender: bool,
    pub birth_year: bool,
}

/// Ordered trip records loaded from one city's log.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripTable {
    records: Vec<TripRecord>,
    capabilities: Capabilities,
}

impl TripTable {
    pub fn new(records: Vec<TripRecord>, capabilities: Capabilities) -> Self {
        Self {
            records,
            capabilities,
        }
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep only the records matching both selectors, preserving order.
    pub fn filter(mut self, month: MonthFilter, day: DayFilter) -> Self {
        self.records.retain(|r| r.matches(month, day));
        self
    }
}

/// Projection of a trip shown when paging through raw data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawTripRow {
    pub start_time: String,
    pub end_time: String,
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
}

impl From<&TripRecord> for RawTripRow {
    fn from(record: &TripRecord) -> Self {
        Self {
            start_time: format_timestamp(&record.start_time),
            end_time: format_timestamp(&record.end_time),
            trip_duration: record.duration_secs,
            start_station: record.start_station.clone().unwrap_or_default(),
            end_station: record.end_station.clone().unwrap_or_default(),
        }
    }
}
