// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local use.
//! Command-line flags are applied on top by the binary.

use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use crate::models::City;

/// Rows shown per raw-data page unless overridden.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the trip logs
    pub data_dir: PathBuf,
    /// Trip log file name per city, relative to `data_dir`
    pub city_files: BTreeMap<City, String>,
    /// Level applied to this crate's log events
    pub log_level: String,
    pub log_format: LogFormat,
    /// Rows per page when browsing raw data
    pub page_size: usize,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            city_files: default_city_files(),
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let mut city_files = default_city_files();
        for city in City::ALL {
            if let Ok(name) = env::var(file_override_var(city)) {
                city_files.insert(city, name.trim().to_string());
            }
        }

        let log_format = match env::var("BIKESHARE_LOG_FORMAT") {
            Ok(raw) => match raw.trim().to_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => return Err(ConfigError::Invalid("BIKESHARE_LOG_FORMAT", raw)),
            },
            Err(_) => LogFormat::Text,
        };

        let page_size = match env::var("BIKESHARE_PAGE_SIZE") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid("BIKESHARE_PAGE_SIZE", raw)),
            },
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            data_dir: env::var("BIKESHARE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            city_files,
            log_level: env::var("BIKESHARE_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            log_format,
            page_size,
        })
    }
}

fn default_city_files() -> BTreeMap<City, String> {
    City::ALL
        .into_iter()
        .map(|c| (c, c.default_file_name().to_string()))
        .collect()
}

fn file_override_var(city: City) -> &'static str {
    match city {
        City::Chicago => "BIKESHARE_CHICAGO_FILE",
        City::NewYorkCity => "BIKESHARE_NEW_YORK_CITY_FILE",
        City::Washington => "BIKESHARE_WASHINGTON_FILE",
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: '{1}'")]
    Invalid(&'static str, String),
}
