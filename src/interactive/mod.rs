// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interactive command-line session.
//!
//! Each run of the session loop:
//! 1. Ask for city, month and day, then confirm the selection
//! 2. Load and filter the trip log
//! 3. Print the four statistics reports
//! 4. Offer to page through raw rows
//! 5. Offer to start over

pub mod prompt;
pub mod render;

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::models::{City, DayFilter, FilterParams, MonthFilter, TripTable};
use crate::services::{summarize, RawDataPager, TripLoader};
use prompt::{io_error, Prompter};

const GREETING: &str = "Hello! Let's explore some US bikeshare data!\n\
With this program you can retrieve descriptive statistics for different cities and timeframes.\n";

/// How the session loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user declined to restart after a run.
    Finished,
    /// The user rejected their own selection at the confirmation prompt.
    Cancelled,
}

/// One interactive user session over stdin/stdout (or any reader/writer).
pub struct Session<R, W> {
    loader: TripLoader,
    page_size: usize,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(loader: TripLoader, page_size: usize, input: R, output: W) -> Self {
        Self {
            loader,
            page_size,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run sessions until the user stops.
    ///
    /// Errors that are not session-fatal are shown and the user is offered
    /// a restart; fatal ones end the loop and are returned.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        loop {
            let Some(params) = self.get_filters()? else {
                writeln!(
                    self.prompter.output(),
                    "Please restart the program to enter other inputs. Exiting now..."
                )
                .map_err(io_error)?;
                return Ok(SessionOutcome::Cancelled);
            };

            tracing::info!(%params, "Session filters confirmed");
            if let Err(err) = self.analyze(&params) {
                if err.is_session_fatal() {
                    return Err(err);
                }
                tracing::warn!(%params, error = %err, "Selection could not be analyzed");
                writeln!(
                    self.prompter.output(),
                    "\nCould not analyze {}: {}",
                    params, err
                )
                .map_err(io_error)?;
            }

            if !self
                .prompter
                .confirm("\nWould you like to restart? Enter yes or no.\n")?
            {
                return Ok(SessionOutcome::Finished);
            }
        }
    }

    /// Prompt for the three selectors. `None` when the user rejects them.
    fn get_filters(&mut self) -> Result<Option<FilterParams>> {
        let out = self.prompter.output();
        writeln!(out, "{}", GREETING).map_err(io_error)?;
        writeln!(
            out,
            "We can explore data for the following cities: Chicago, New York City, Washington."
        )
        .map_err(io_error)?;

        let city: City = self.prompter.ask_until(
            "Please input the name of the city you want to explore data from: ",
            "The city name you provided is invalid.",
            |answer| answer.parse::<City>(),
        )?;

        writeln!(
            self.prompter.output(),
            "\nYou can explore data for \"all\" months or for individual months from \"January\" to \"June\""
        )
        .map_err(io_error)?;
        let month: MonthFilter = self.prompter.ask_until(
            "Please indicate the month you want to explore data from: ",
            "The month you provided is invalid.",
            |answer| answer.parse::<MonthFilter>(),
        )?;

        writeln!(
            self.prompter.output(),
            "\nYou can explore data for \"all\" weekdays or for individual days from \"Monday\" to \"Sunday\""
        )
        .map_err(io_error)?;
        let day: DayFilter = self.prompter.ask_until(
            "Please indicate the day you want to explore data from: ",
            "The day you provided is invalid.",
            |answer| answer.parse::<DayFilter>(),
        )?;

        let params = FilterParams::new(city, month, day);
        writeln!(self.prompter.output(), "\nYour input was {}\n", params).map_err(io_error)?;
        if !self.prompter.confirm("Is that correct [yes/no]? ")? {
            return Ok(None);
        }
        render::write_rule(self.prompter.output()).map_err(io_error)?;
        Ok(Some(params))
    }

    fn analyze(&mut self, params: &FilterParams) -> Result<()> {
        let table = self.loader.load(params)?;
        self.report(&table)
    }

    /// Print the reports for one filtered table, then offer raw rows.
    fn report(&mut self, table: &TripTable) -> Result<()> {
        if table.is_empty() {
            writeln!(
                self.prompter.output(),
                "\nNo trips match this selection; there is nothing to summarize."
            )
            .map_err(io_error)?;
            return Ok(());
        }

        let summary = summarize(table)?;
        render::write_summary(self.prompter.output(), &summary).map_err(io_error)?;
        self.browse_raw_data(table)
    }

    fn browse_raw_data(&mut self, table: &TripTable) -> Result<()> {
        let mut pager = RawDataPager::new(table, self.page_size);
        let mut prompt = "Do you want to see raw data? [yes/no]: ";
        let mut shown = 0;

        while self.prompter.confirm(prompt)? {
            match pager.next() {
                Some(rows) => {
                    render::write_rows(self.prompter.output(), shown, &rows).map_err(io_error)?;
                    shown += rows.len();
                }
                None => {
                    writeln!(self.prompter.output(), "No more rows to display.")
                        .map_err(io_error)?;
                    break;
                }
            }
            prompt = "\nDo you want to see more raw data? [yes/no]: ";
        }

        render::write_rule(self.prompter.output()).map_err(io_error)
    }
}
