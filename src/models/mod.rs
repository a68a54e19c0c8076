// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod filter;
pub mod stats;
pub mod trip;

pub use filter::{City, DayFilter, FilterParams, MonthFilter};
pub use stats::{
    BirthYearStats, CategoryCount, StationPopularity, TimeOfTravel, Timed, TripDurationStats,
    TripSummary, UserDemographics,
};
pub use trip::{Capabilities, RawTripRow, TripRecord, TripTable};
