// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Bikeshare Explorer: descriptive statistics over bike-share trip logs.
//!
//! This crate loads a city's trip log, narrows it by month and weekday,
//! and reports travel times, popular stations, trip durations and rider
//! demographics.

pub mod config;
pub mod error;
pub mod interactive;
pub mod models;
pub mod services;
pub mod time_utils;

use config::Config;
use error::Result;
use models::{FilterParams, TripSummary};
use services::TripLoader;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub loader: TripLoader,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let loader = TripLoader::new(&config);
        Self { config, loader }
    }

    /// Load, filter and summarize in one step.
    pub fn analyze(&self, params: &FilterParams) -> Result<TripSummary> {
        let table = self.loader.load(params)?;
        services::summarize(&table)
    }
}
