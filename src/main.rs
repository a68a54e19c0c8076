// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bikeshare Explorer CLI
//!
//! Interactive exploration of bike-share trip logs, or a one-shot report
//! when the city is given on the command line.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use bikeshare_explorer::{
    config::{Config, LogFormat},
    interactive::{render, Session, SessionOutcome},
    models::{City, DayFilter, FilterParams, MonthFilter, TripSummary},
    AppState,
};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(version, about = "Explore US bikeshare trip data")]
struct Args {
    /// Directory containing the city trip logs
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Analyze this city and exit instead of prompting
    #[arg(long)]
    city: Option<City>,

    /// Month to analyze in one-shot mode ("all" or january..june)
    #[arg(long, default_value = "all", requires = "city")]
    month: MonthFilter,

    /// Day to analyze in one-shot mode ("all" or monday..sunday)
    #[arg(long, default_value = "all", requires = "city")]
    day: DayFilter,

    /// Print the one-shot report as JSON
    #[arg(long, default_value_t = false, requires = "city")]
    json: bool,
}

/// One-shot JSON output.
#[derive(Serialize)]
struct JsonReport<'a> {
    city: City,
    month: String,
    day: String,
    summary: &'a TripSummary,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(format) = args.log_format {
        config.log_format = format;
    }

    init_logging(&config);
    tracing::info!(data_dir = %config.data_dir.display(), "Starting Bikeshare Explorer");

    let state = AppState::new(config);

    match args.city {
        Some(city) => {
            let params = FilterParams::new(city, args.month, args.day);
            let summary = state
                .analyze(&params)
                .with_context(|| format!("Failed to analyze {}", params))?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            if args.json {
                let report = JsonReport {
                    city,
                    month: params.month.to_string(),
                    day: params.day.to_string(),
                    summary: &summary,
                };
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                render::write_summary(&mut out, &summary)?;
            }
        }
        None => {
            let stdin = io::stdin();
            let mut session = Session::new(
                state.loader.clone(),
                state.config.page_size,
                stdin.lock(),
                io::stdout(),
            );
            match session.run()? {
                SessionOutcome::Finished => tracing::info!("Session finished"),
                SessionOutcome::Cancelled => tracing::info!("Selection rejected, exiting"),
            }
        }
    }

    Ok(())
}

/// Initialize logging to stderr, as JSON or plain text.
fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "warn,bikeshare_explorer={}",
            config.log_level
        ))
    });

    match config.log_format {
        LogFormat::Json => {
            let format = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_target(false)
                .with_current_span(true)
                .flatten_event(true);
            tracing_subscriber::registry().with(filter).with(format).init();
        }
        LogFormat::Text => {
            let format = tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false);
            tracing_subscriber::registry().with(filter).with(format).init();
        }
    }
}
