// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter parameters: the city, month and weekday a session analyzes.

use chrono::{Month, Weekday};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::time_utils::weekday_name;

/// Months covered by the trip logs, in calendar order.
pub const SUPPORTED_MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Weekday vocabulary accepted by the day filter.
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Cities with a trip log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase name as typed at the prompt.
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Default trip log file name for this city.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            City::Chicago => write!(f, "Chicago"),
            City::NewYorkCity => write!(f, "New York City"),
            City::Washington => write!(f, "Washington"),
        }
    }
}

impl FromStr for City {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| AppError::Configuration(format!("Unknown city '{}'", s.trim())))
    }
}

/// Month selector: everything, or a single supported month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    /// 1-based month number, or `None` for "all".
    pub fn ordinal(&self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::Only(m) => Some(m.number_from_month()),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(MonthFilter::All);
        }
        let position = SUPPORTED_MONTHS
            .iter()
            .position(|m| *m == wanted)
            .ok_or_else(|| {
                AppError::UnsupportedSelector(format!(
                    "month '{}' (expected all or january..june)",
                    s.trim()
                ))
            })?;
        let month = Month::try_from(position as u8 + 1).map_err(|_| {
            AppError::UnsupportedSelector(format!("month '{}'", s.trim()))
        })?;
        Ok(MonthFilter::Only(month))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => write!(f, "all"),
            MonthFilter::Only(m) => write!(f, "{}", m.name().to_lowercase()),
        }
    }
}

/// Weekday selector: everything, or a single day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl FromStr for DayFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(DayFilter::All);
        }
        if !WEEKDAYS.contains(&wanted.as_str()) {
            return Err(AppError::UnsupportedSelector(format!(
                "day '{}' (expected all or monday..sunday)",
                s.trim()
            )));
        }
        wanted
            .parse::<Weekday>()
            .map(DayFilter::Only)
            .map_err(|_| AppError::UnsupportedSelector(format!("day '{}'", s.trim())))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => write!(f, "all"),
            DayFilter::Only(d) => write!(f, "{}", weekday_name(*d).to_lowercase()),
        }
    }
}

/// The (city, month, day) triple chosen for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParams {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterParams {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Whole-city selection with no month or day narrowing.
    pub fn whole_city(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }
}

impl fmt::Display for FilterParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city = {}, month = {}, day = {}",
            self.city.key(),
            self.month,
            self.day
        )
    }
}
