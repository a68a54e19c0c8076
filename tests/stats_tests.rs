// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end statistics over the committed fixtures.
//!
//! Expected values were counted by hand from tests/fixtures/*.csv.

use bikeshare_explorer::error::ErrorKind;
use bikeshare_explorer::models::{BirthYearStats, CategoryCount};
use bikeshare_explorer::services::stats;
use bikeshare_explorer::time_utils::DurationBreakdown;
use bikeshare_explorer::AppState;

mod common;
use common::{fixture_config, fixture_loader, params};

fn counts(pairs: &[(&str, u64)]) -> Vec<CategoryCount> {
    pairs
        .iter()
        .map(|(value, count)| CategoryCount {
            value: value.to_string(),
            count: *count,
        })
        .collect()
}

#[test]
fn test_chicago_full_summary() {
    let state = AppState::new(fixture_config());
    let summary = state.analyze(&params("chicago", "all", "all")).unwrap();

    assert_eq!(summary.trips, 12);

    let times = &summary.time_of_travel.report;
    assert_eq!(times.month, 1);
    assert_eq!(times.weekday, "Monday");
    assert_eq!(times.hour, 8);

    let stations = &summary.stations.report;
    assert_eq!(stations.start_station, "Canal St & Adams St");
    assert_eq!(stations.end_station, "Clinton St & Madison St");
    assert_eq!(
        stations.trip,
        "Canal St & Adams St - Clinton St & Madison St"
    );

    let durations = &summary.durations.report;
    assert_eq!(durations.total_seconds, 14_100);
    assert_eq!(
        durations.total,
        DurationBreakdown {
            days: 0,
            hours: 3,
            minutes: 55,
            seconds: 0
        }
    );
    assert_eq!(durations.mean_seconds, 1_175);
    assert_eq!((durations.mean.minutes, durations.mean.seconds), (19, 35));

    let users = &summary.users.report;
    assert_eq!(
        users.user_types,
        counts(&[("Subscriber", 8), ("Customer", 3), ("Dependent", 1)])
    );
    assert_eq!(
        users.genders,
        Some(counts(&[("Male", 5), ("Female", 3)]))
    );
    assert_eq!(
        users.birth_years,
        Some(BirthYearStats {
            earliest: 1972,
            most_recent: 1999,
            most_common: 1985
        })
    );
}

#[test]
fn test_ties_go_to_first_seen_value() {
    let table = fixture_loader()
        .load(&params("new york city", "all", "all"))
        .unwrap();

    let times = stats::time_of_travel(&table).unwrap();
    assert_eq!(times.month, 2);
    assert_eq!(times.weekday, "Wednesday");
    assert_eq!(times.hour, 9);

    let stations = stats::station_popularity(&table).unwrap();
    assert_eq!(stations.start_station, "W 21 St & 6 Ave");
    assert_eq!(stations.end_station, "E 17 St & Broadway");
    assert_eq!(stations.trip, "W 21 St & 6 Ave - E 17 St & Broadway");

    let users = stats::user_demographics(&table).unwrap();
    assert_eq!(users.genders, Some(counts(&[("Female", 1), ("Male", 2)])));
    assert_eq!(users.birth_years.map(|b| b.most_common), Some(1980));
}

#[test]
fn test_fractional_durations() {
    let table = fixture_loader()
        .load(&params("new york city", "all", "all"))
        .unwrap();
    let durations = stats::trip_durations(&table).unwrap();
    assert_eq!(durations.total_seconds, 3_300);
    assert_eq!(durations.mean_seconds, 825);
}

#[test]
fn test_washington_has_no_rider_details() {
    let table = fixture_loader()
        .load(&params("washington", "all", "all"))
        .unwrap();

    let users = stats::user_demographics(&table).unwrap();
    assert_eq!(
        users.user_types,
        counts(&[("Subscriber", 1), ("Customer", 2)])
    );
    assert_eq!(users.genders, None);
    assert_eq!(users.birth_years, None);

    let durations = stats::trip_durations(&table).unwrap();
    assert_eq!(durations.total_seconds, 2_889);
    assert_eq!(durations.mean_seconds, 963);
}

#[test]
fn test_filtered_summary() {
    let state = AppState::new(fixture_config());
    let summary = state
        .analyze(&params("chicago", "january", "monday"))
        .unwrap();

    assert_eq!(summary.trips, 3);
    assert_eq!(summary.time_of_travel.report.hour, 8);
    assert_eq!(summary.durations.report.total_seconds, 2_400);
    assert_eq!(summary.durations.report.mean_seconds, 800);
    assert_eq!(
        summary.users.report.birth_years,
        Some(BirthYearStats {
            earliest: 1985,
            most_recent: 1990,
            most_common: 1985
        })
    );
}

#[test]
fn test_empty_selection_fails_aggregation_not_loading() {
    let table = fixture_loader()
        .load(&params("chicago", "march", "tuesday"))
        .unwrap();
    assert!(table.is_empty());

    assert_eq!(
        stats::time_of_travel(&table).unwrap_err().kind(),
        ErrorKind::EmptyInput
    );
    assert_eq!(
        stats::station_popularity(&table).unwrap_err().kind(),
        ErrorKind::EmptyInput
    );
    assert_eq!(
        stats::trip_durations(&table).unwrap_err().kind(),
        ErrorKind::EmptyInput
    );
}

#[test]
fn test_summary_serializes_to_json() {
    let state = AppState::new(fixture_config());
    let summary = state.analyze(&params("washington", "all", "all")).unwrap();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["trips"], 3);
    assert_eq!(json["stations"]["report"]["trip"], "Lincoln Memorial - Jefferson Dr & 14th St SW");
    assert!(json["users"]["report"]["genders"].is_null());
    assert!(json["durations"]["elapsed_ms"].is_number());
}
