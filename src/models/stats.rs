// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report types produced by the aggregators.
//!
//! Every value the CLI prints is available here, so the reports can be
//! rendered as text or serialized as JSON.

use serde::{Serialize, Serializer};
use std::time::Duration;

use crate::time_utils::DurationBreakdown;

/// Separator used to join start and end station into a trip name.
pub const STATION_PAIR_SEPARATOR: &str = " - ";

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeOfTravel {
    /// Most common month (1-12)
    pub month: u32,
    /// Most common weekday name ("Monday" ... "Sunday")
    pub weekday: String,
    /// Most common start hour (0-23)
    pub hour: u32,
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationPopularity {
    pub start_station: String,
    pub end_station: String,
    /// "<start> - <end>"
    pub trip: String,
}

/// Total and mean trip duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripDurationStats {
    pub total_seconds: u64,
    pub total: DurationBreakdown,
    pub mean_seconds: u64,
    pub mean: DurationBreakdown,
}

/// Number of trips for one category value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: u64,
}

/// Birth year extremes and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Rider demographics. `None` means the city's data does not carry the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDemographics {
    pub user_types: Vec<CategoryCount>,
    pub genders: Option<Vec<CategoryCount>>,
    pub birth_years: Option<BirthYearStats>,
}

/// A report plus the wall-clock time spent computing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timed<T> {
    pub report: T,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

/// All four reports over one filtered trip table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub trips: usize,
    pub time_of_travel: Timed<TimeOfTravel>,
    pub stations: Timed<StationPopularity>,
    pub durations: Timed<TripDurationStats>,
    pub users: Timed<UserDemographics>,
}
