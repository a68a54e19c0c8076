// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Descriptive statistics over a filtered trip table.
//!
//! The four aggregators are independent and only read the table:
//! 1. Time of travel (month, weekday, hour)
//! 2. Station popularity (start, end, start/end pair)
//! 3. Trip duration (total and mean)
//! 4. User demographics (user type, gender, birth year)

use std::time::Instant;

use crate::error::{AppError, Result};
use crate::models::stats::STATION_PAIR_SEPARATOR;
use crate::models::{
    BirthYearStats, CategoryCount, StationPopularity, TimeOfTravel, Timed, TripDurationStats,
    TripSummary, TripTable, UserDemographics,
};
use crate::services::frequency::FrequencyCounter;
use crate::time_utils::{decompose, weekday_name};

/// Run `f` and record how long it took.
pub fn timed<T>(f: impl FnOnce() -> Result<T>) -> Result<Timed<T>> {
    let started = Instant::now();
    let report = f()?;
    Ok(Timed {
        report,
        elapsed: started.elapsed(),
    })
}

fn mode_of<K, I>(values: I, what: &'static str) -> Result<K>
where
    K: std::hash::Hash + Eq + Clone,
    I: IntoIterator<Item = K>,
{
    let counter: FrequencyCounter<K> = values.into_iter().collect();
    counter.mode().cloned().ok_or(AppError::EmptyInput(what))
}

/// Most common month, weekday and start hour.
pub fn time_of_travel(table: &TripTable) -> Result<TimeOfTravel> {
    let trips = table.records();
    Ok(TimeOfTravel {
        month: mode_of(trips.iter().map(|t| t.month()), "month of travel")?,
        weekday: weekday_name(mode_of(trips.iter().map(|t| t.weekday()), "day of travel")?)
            .to_string(),
        hour: mode_of(trips.iter().map(|t| t.hour()), "hour of travel")?,
    })
}

/// Most popular start station, end station and start/end pair.
///
/// Trips with a missing station are left out of that station's count, and
/// only trips with both stations form a pair.
pub fn station_popularity(table: &TripTable) -> Result<StationPopularity> {
    let trips = table.records();
    Ok(StationPopularity {
        start_station: mode_of(
            trips.iter().filter_map(|t| t.start_station.as_deref()),
            "start station",
        )?
        .to_string(),
        end_station: mode_of(
            trips.iter().filter_map(|t| t.end_station.as_deref()),
            "end station",
        )?
        .to_string(),
        trip: mode_of(
            trips.iter().filter_map(|t| {
                Some(station_pair(
                    t.start_station.as_deref()?,
                    t.end_station.as_deref()?,
                ))
            }),
            "station pair",
        )?,
    })
}

/// Name of a trip from `start` to `end`, e.g. "A - B".
pub fn station_pair(start: &str, end: &str) -> String {
    format!("{}{}{}", start, STATION_PAIR_SEPARATOR, end)
}

/// Total travel time and mean trip duration.
pub fn trip_durations(table: &TripTable) -> Result<TripDurationStats> {
    let trips = table.records();
    if trips.is_empty() {
        return Err(AppError::EmptyInput("trip duration"));
    }

    let total_seconds = trips
        .iter()
        .try_fold(0u64, |total, t| total.checked_add(t.duration_secs.trunc() as u64))
        .ok_or_else(|| anyhow::anyhow!("total trip duration exceeds {} seconds", u64::MAX))?;
    let mean = trips.iter().map(|t| t.duration_secs).sum::<f64>() / trips.len() as f64;
    let mean_seconds = mean.trunc() as u64;

    Ok(TripDurationStats {
        total_seconds,
        total: decompose(total_seconds),
        mean_seconds,
        mean: decompose(mean_seconds),
    })
}

/// Counts per user type and gender, plus birth year statistics.
///
/// Gender is `None` when the log has no gender column. Birth year is
/// `None` when the column is absent or no trip in the table has a value.
pub fn user_demographics(table: &TripTable) -> Result<UserDemographics> {
    let trips = table.records();
    let capabilities = table.capabilities();

    let user_types = category_counts(trips.iter().filter_map(|t| t.user_type.as_deref()));

    let genders = capabilities
        .gender
        .then(|| category_counts(trips.iter().filter_map(|t| t.gender.as_deref())));

    let birth_years = if capabilities.birth_year {
        birth_year_stats(trips.iter().filter_map(|t| t.birth_year))
    } else {
        None
    };

    Ok(UserDemographics {
        user_types,
        genders,
        birth_years,
    })
}

fn category_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<CategoryCount> {
    values
        .collect::<FrequencyCounter<&str>>()
        .into_counts()
        .into_iter()
        .map(|(value, count)| CategoryCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

fn birth_year_stats(years: impl Iterator<Item = i32>) -> Option<BirthYearStats> {
    let years: Vec<i32> = years.collect();
    let earliest = *years.iter().min()?;
    let most_recent = *years.iter().max()?;
    let most_common = years
        .iter()
        .copied()
        .collect::<FrequencyCounter<i32>>()
        .mode()
        .copied()?;
    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}

/// Run all four aggregators over `table`.
pub fn summarize(table: &TripTable) -> Result<TripSummary> {
    let time_of_travel = timed(|| time_of_travel(table))?;
    tracing::debug!(elapsed = ?time_of_travel.elapsed, "Time of travel computed");

    let stations = timed(|| station_popularity(table))?;
    tracing::debug!(elapsed = ?stations.elapsed, "Station popularity computed");

    let durations = timed(|| trip_durations(table))?;
    tracing::debug!(elapsed = ?durations.elapsed, "Trip durations computed");

    let users = timed(|| user_demographics(table))?;
    tracing::debug!(elapsed = ?users.elapsed, "User demographics computed");

    Ok(TripSummary {
        trips: table.len(),
        time_of_travel,
        stations,
        durations,
        users,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{Capabilities, TripRecord};
    use crate::time_utils::{parse_timestamp, DurationBreakdown};

    fn trip(start: &str, from: &str, to: &str, duration: f64) -> TripRecord {
        let start_time = parse_timestamp(start).unwrap();
        TripRecord {
            start_time,
            end_time: start_time,
            duration_secs: duration,
            start_station: Some(from.to_string()),
            end_station: Some(to.to_string()),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }

    #[test]
    fn test_two_identical_trips() {
        // 2017-01-02 is a Monday
        let table = TripTable::new(
            vec![
                trip("2017-01-02 08:00:00", "A", "B", 120.0),
                trip("2017-01-02 08:30:00", "A", "B", 180.0),
            ],
            Capabilities::default(),
        );

        assert_eq!(
            time_of_travel(&table).unwrap(),
            TimeOfTravel {
                month: 1,
                weekday: "Monday".to_string(),
                hour: 8
            }
        );
        assert_eq!(
            station_popularity(&table).unwrap(),
            StationPopularity {
                start_station: "A".to_string(),
                end_station: "B".to_string(),
                trip: "A - B".to_string()
            }
        );

        let durations = trip_durations(&table).unwrap();
        assert_eq!(durations.total_seconds, 300);
        assert_eq!(
            durations.total,
            DurationBreakdown {
                days: 0,
                hours: 0,
                minutes: 5,
                seconds: 0
            }
        );
        assert_eq!(durations.mean_seconds, 150);
        assert_eq!(
            (durations.mean.hours, durations.mean.minutes, durations.mean.seconds),
            (0, 2, 30)
        );
    }

    #[test]
    fn test_station_pair_format() {
        assert_eq!(station_pair("A", "B"), "A - B");
    }

    #[test]
    fn test_empty_table_fails() {
        let table = TripTable::default();
        for err in [
            time_of_travel(&table).unwrap_err(),
            station_popularity(&table).unwrap_err(),
            trip_durations(&table).unwrap_err(),
        ] {
            assert_eq!(err.kind(), ErrorKind::EmptyInput);
        }
        assert_eq!(summarize(&table).unwrap_err().kind(), ErrorKind::EmptyInput);
    }

    #[test]
    fn test_fractional_durations_truncate() {
        let table = TripTable::new(
            vec![
                trip("2017-01-02 08:00:00", "A", "B", 10.9),
                trip("2017-01-02 08:00:00", "A", "B", 10.9),
            ],
            Capabilities::default(),
        );
        let durations = trip_durations(&table).unwrap();
        assert_eq!(durations.total_seconds, 20);
        assert_eq!(durations.mean_seconds, 10);
    }

    #[test]
    fn test_missing_stations_are_not_counted() {
        let mut no_start = trip("2017-01-02 08:00:00", "", "B", 60.0);
        no_start.start_station = None;
        let mut no_end = trip("2017-01-02 09:00:00", "C", "", 60.0);
        no_end.end_station = None;
        let table = TripTable::new(
            vec![
                no_start.clone(),
                no_start,
                no_end.clone(),
                no_end,
                trip("2017-01-02 10:00:00", "A", "D", 60.0),
            ],
            Capabilities::default(),
        );

        assert_eq!(
            station_popularity(&table).unwrap(),
            StationPopularity {
                start_station: "C".to_string(),
                end_station: "B".to_string(),
                trip: "A - D".to_string()
            }
        );
    }

    #[test]
    fn test_all_stations_missing_is_empty_input() {
        let mut anonymous = trip("2017-01-02 08:00:00", "", "", 60.0);
        anonymous.start_station = None;
        anonymous.end_station = None;
        let table = TripTable::new(vec![anonymous], Capabilities::default());

        let err = station_popularity(&table).unwrap_err();
        assert!(matches!(err, AppError::EmptyInput("start station")), "{err}");
    }

    #[test]
    fn test_duration_total_overflow_is_an_error() {
        let table = TripTable::new(
            vec![
                trip("2017-01-02 08:00:00", "A", "B", 1e19),
                trip("2017-01-02 09:00:00", "A", "B", 1e19),
            ],
            Capabilities::default(),
        );
        assert_eq!(
            trip_durations(&table).unwrap_err().kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_demographics_respect_capabilities() {
        let mut with_rider = trip("2017-01-02 08:00:00", "A", "B", 60.0);
        with_rider.gender = Some("Female".to_string());
        with_rider.birth_year = Some(1985);
        let mut customer = trip("2017-01-02 09:00:00", "A", "B", 60.0);
        customer.user_type = Some("Customer".to_string());

        let records = vec![with_rider.clone(), customer, with_rider];

        let full = TripTable::new(
            records.clone(),
            Capabilities {
                gender: true,
                birth_year: true,
            },
        );
        let report = user_demographics(&full).unwrap();
        assert_eq!(
            report.user_types,
            vec![
                CategoryCount {
                    value: "Subscriber".to_string(),
                    count: 2
                },
                CategoryCount {
                    value: "Customer".to_string(),
                    count: 1
                },
            ]
        );
        assert_eq!(
            report.genders,
            Some(vec![CategoryCount {
                value: "Female".to_string(),
                count: 2
            }])
        );
        assert_eq!(
            report.birth_years,
            Some(BirthYearStats {
                earliest: 1985,
                most_recent: 1985,
                most_common: 1985
            })
        );

        let bare = TripTable::new(records, Capabilities::default());
        let report = user_demographics(&bare).unwrap();
        assert_eq!(report.genders, None);
        assert_eq!(report.birth_years, None);
    }

    #[test]
    fn test_birth_year_column_without_values() {
        let table = TripTable::new(
            vec![trip("2017-01-02 08:00:00", "A", "B", 60.0)],
            Capabilities {
                gender: true,
                birth_year: true,
            },
        );
        let report = user_demographics(&table).unwrap();
        assert_eq!(report.birth_years, None);
        assert_eq!(report.genders, Some(vec![]));
    }

    #[test]
    fn test_summarize_collects_all_reports() {
        let table = TripTable::new(
            vec![trip("2017-03-04 17:00:00", "X", "Y", 600.0)],
            Capabilities::default(),
        );
        let summary = summarize(&table).unwrap();
        assert_eq!(summary.trips, 1);
        assert_eq!(summary.time_of_travel.report.weekday, "Saturday");
        assert_eq!(summary.stations.report.trip, "X - Y");
        assert_eq!(summary.durations.report.mean.minutes, 10);
    }
}
