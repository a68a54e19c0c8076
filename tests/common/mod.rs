// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use bikeshare_explorer::config::Config;
use bikeshare_explorer::models::{City, DayFilter, FilterParams, MonthFilter};
use bikeshare_explorer::services::TripLoader;

pub const FIXTURE_DIR: &str = "tests/fixtures";

/// Config pointing at the committed CSV fixtures.
#[allow(dead_code)]
pub fn fixture_config() -> Config {
    Config {
        data_dir: FIXTURE_DIR.into(),
        ..Config::default()
    }
}

/// Loader over the committed CSV fixtures.
#[allow(dead_code)]
pub fn fixture_loader() -> TripLoader {
    TripLoader::new(&fixture_config())
}

/// Build filter params from prompt-style strings.
#[allow(dead_code)]
pub fn params(city: &str, month: &str, day: &str) -> FilterParams {
    FilterParams::new(
        city.parse::<City>().expect("valid city"),
        month.parse::<MonthFilter>().expect("valid month"),
        day.parse::<DayFilter>().expect("valid day"),
    )
}
