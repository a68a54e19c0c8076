// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Text rendering of the statistics reports and raw rows.

use std::io::{self, Write};
use std::time::Duration;

use crate::models::{
    CategoryCount, RawTripRow, StationPopularity, TimeOfTravel, TripDurationStats, TripSummary,
    UserDemographics,
};

const RULE_WIDTH: usize = 40;

pub fn write_rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "\nThis took {:.6} seconds.", elapsed.as_secs_f64())?;
    write_rule(out)
}

pub fn write_time_of_travel<W: Write>(out: &mut W, report: &TimeOfTravel) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    writeln!(out, "The most popular month is: {}", report.month)?;
    writeln!(out, "The most popular day of the week is: {}", report.weekday)?;
    writeln!(out, "The most common start hour is: {}", report.hour)
}

pub fn write_stations<W: Write>(out: &mut W, report: &StationPopularity) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    writeln!(out, "The most popular start station is: {}", report.start_station)?;
    writeln!(out, "The most popular end station is: {}", report.end_station)?;
    writeln!(
        out,
        "The most frequent combination of start/end station for trips is: {}",
        report.trip
    )
}

pub fn write_durations<W: Write>(out: &mut W, report: &TripDurationStats) -> io::Result<()> {
    let total = report.total;
    let mean = report.mean;
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    writeln!(
        out,
        "The total travel time is {} days, {} hours, {} minutes and {} seconds (days:hours:minutes:seconds)",
        total.days, total.hours, total.minutes, total.seconds
    )?;
    writeln!(
        out,
        "The mean travel time is {} hours, {} minutes and {} seconds (hours:minutes:seconds)",
        mean.hours, mean.minutes, mean.seconds
    )
}

fn write_counts<W: Write>(out: &mut W, label: &str, counts: &[CategoryCount]) -> io::Result<()> {
    let width = counts
        .iter()
        .map(|c| c.value.len())
        .chain(std::iter::once(label.len()))
        .max()
        .unwrap_or_default();
    writeln!(out, "{:<width$}  counts", label)?;
    for c in counts {
        writeln!(out, "{:<width$}  {}", c.value, c.count)?;
    }
    writeln!(out)
}

pub fn write_users<W: Write>(out: &mut W, report: &UserDemographics) -> io::Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    write_counts(out, "User Type", &report.user_types)?;

    match &report.genders {
        Some(genders) => write_counts(out, "Gender", genders)?,
        None => writeln!(out, "Gender data is not available for this city.\n")?,
    }

    match &report.birth_years {
        Some(years) => {
            writeln!(out, "The oldest user was born in {}", years.earliest)?;
            writeln!(out, "The youngest user was born in {}", years.most_recent)?;
            writeln!(out, "The most common year of birth is {}", years.most_common)
        }
        None => writeln!(out, "Birth year data is not available for this selection."),
    }
}

/// Render every report with its timing footer.
pub fn write_summary<W: Write>(out: &mut W, summary: &TripSummary) -> io::Result<()> {
    write_time_of_travel(out, &summary.time_of_travel.report)?;
    write_elapsed(out, summary.time_of_travel.elapsed)?;
    write_stations(out, &summary.stations.report)?;
    write_elapsed(out, summary.stations.elapsed)?;
    write_durations(out, &summary.durations.report)?;
    write_elapsed(out, summary.durations.elapsed)?;
    write_users(out, &summary.users.report)?;
    write_elapsed(out, summary.users.elapsed)
}

/// Render raw rows as an aligned table, numbering them from `first_row`.
pub fn write_rows<W: Write>(out: &mut W, first_row: usize, rows: &[RawTripRow]) -> io::Result<()> {
    writeln!(
        out,
        "{:>6}  {:<19}  {:<19}  {:>13}  {}  ->  {}",
        "", "Start Time", "End Time", "Trip Duration", "Start Station", "End Station"
    )?;
    for (offset, row) in rows.iter().enumerate() {
        writeln!(
            out,
            "{:>6}  {:<19}  {:<19}  {:>13}  {}  ->  {}",
            first_row + offset,
            row.start_time,
            row.end_time,
            row.trip_duration,
            row.start_station,
            row.end_station
        )?;
    }
    Ok(())
}
