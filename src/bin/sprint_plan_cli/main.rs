// ABOUTME: Sprint Plan CLI - parse the training document and maintain the plan file
// ABOUTME: Subcommands for parse, patch, merge, verify, and validate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Parse the document into training_plan.json
//! sprint-plan parse --input data/sprint_training_plan.txt
//!
//! # Mark race day and drop test sessions
//! sprint-plan patch
//!
//! # Merge a weekly long-run block after race day
//! sprint-plan merge --anchor-date 2025-08-17 --start 2025-08-24 --distances 8,10,12
//!
//! # Check the race-day record
//! sprint-plan verify
//!
//! # Report consistency findings
//! sprint-plan validate --strict
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sprint_plan::config::parse_date;
use sprint_plan::logging::{init_from_env, LoggingConfig};
use sprint_plan::ActivityType;
use tracing::debug;

use helpers::display::display_error;

#[derive(Parser)]
#[command(
    name = "sprint-plan",
    about = "Sprint triathlon training plan tools",
    long_about = "Parse a free-form weekly training plan into dated daily records \
                  and maintain the resulting JSON plan file."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Parse a plan document into the JSON plan file
    Parse {
        /// Plan document to parse
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Output file (defaults to SPRINT_PLAN_FILE or training_plan.json)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Monday the first week starts on (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        start_date: Option<NaiveDate>,

        /// Line that ends the document banner
        #[arg(long)]
        banner_marker: Option<String>,
    },

    /// Overwrite title and type of one record, dropping test sessions
    Patch {
        /// Plan file to patch
        #[arg(long)]
        file: Option<PathBuf>,

        /// Date of the record (defaults to the race date)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// New title (defaults to the race title)
        #[arg(long)]
        title: Option<String>,

        /// New activity type
        #[arg(long)]
        activity_type: Option<ActivityType>,

        /// Keep Test records in the sequence
        #[arg(long)]
        keep_tests: bool,

        /// Write to this file instead of overwriting the input
        #[arg(long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the patched sequence instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Upsert long-run records after an anchor record and re-sort by date
    Merge {
        /// Plan file to merge into
        #[arg(long)]
        file: Option<PathBuf>,

        /// Date of the record whose week the new block continues from
        #[arg(long, value_parser = parse_date)]
        anchor_date: NaiveDate,

        /// JSON file of {"date", "distanceKm"} entries
        #[arg(long, conflicts_with_all = ["start", "distances"])]
        entries: Option<PathBuf>,

        /// Date of the first long run
        #[arg(long, value_parser = parse_date, requires = "distances")]
        start: Option<NaiveDate>,

        /// Comma-separated distances in kilometres
        #[arg(long, value_delimiter = ',', requires = "start")]
        distances: Vec<f64>,

        /// Days between long runs (weekly when omitted)
        #[arg(long, requires = "start")]
        cadence_days: Option<u64>,

        /// Write to this file instead of overwriting the input
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Check one record against expected values (exit code 1 on mismatch)
    Verify {
        /// Plan file to check
        #[arg(long)]
        file: Option<PathBuf>,

        /// Date of the record (defaults to the race date)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Expected activity type (defaults to Race)
        #[arg(long)]
        activity_type: Option<ActivityType>,

        /// Expected title (defaults to the race title)
        #[arg(long)]
        title: Option<String>,
    },

    /// Report consistency findings (exit code 1 when any are found)
    Validate {
        /// Plan file to check
        #[arg(long)]
        file: Option<PathBuf>,

        /// Also flag Test and Unknown records
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            display_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Execute the selected subcommand; `Ok(false)` means a check did not pass
fn run(cli: Cli) -> Result<bool> {
    if cli.verbose {
        LoggingConfig::from_env().with_level("debug").init()?;
    } else {
        init_from_env()?;
    }
    debug!("Sprint Plan CLI");

    let passed = match cli.command {
        Command::Parse {
            input,
            output,
            start_date,
            banner_marker,
        } => {
            commands::parse::run(&input, output, start_date, banner_marker)?;
            true
        }
        Command::Patch {
            file,
            date,
            title,
            activity_type,
            keep_tests,
            output,
            stdout,
        } => {
            let args = commands::patch::PatchArgs {
                file,
                date,
                title,
                activity_type,
                keep_tests,
                output,
                stdout,
            };
            commands::patch::run(args)?;
            true
        }
        Command::Merge {
            file,
            anchor_date,
            entries,
            start,
            distances,
            cadence_days,
            output,
        } => {
            let source = match (entries, start) {
                (Some(path), _) => commands::merge::EntrySource::File(path),
                (None, Some(start)) => commands::merge::EntrySource::Schedule {
                    start,
                    distances,
                    cadence_days,
                },
                (None, None) => bail!("merge needs either --entries or --start with --distances"),
            };
            commands::merge::run(file, anchor_date, source, output)?;
            true
        }
        Command::Verify {
            file,
            date,
            activity_type,
            title,
        } => commands::verify::run(file, date, activity_type, title)?,
        Command::Validate { file, strict } => commands::validate::run(file, strict)?,
    };

    Ok(passed)
}
