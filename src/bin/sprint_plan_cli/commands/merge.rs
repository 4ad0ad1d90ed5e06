// ABOUTME: Merge command for sprint-plan
// ABOUTME: Builds or loads long-run entries and upserts them into the plan file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use sprint_plan::storage::{read_plan, write_plan};
use sprint_plan::tools::{
    long_run_schedule, merge_long_runs, read_long_run_entries, weekly_long_run_schedule,
};

use super::resolve_plan_file;
use crate::helpers::display::display_merge_summary;

/// Where the long-run entries come from
pub enum EntrySource {
    /// JSON entries file
    File(PathBuf),
    /// Fixed-cadence schedule
    Schedule {
        start: NaiveDate,
        distances: Vec<f64>,
        cadence_days: Option<u64>,
    },
}

/// Merge long runs after `anchor_date` and persist the sequence
pub fn run(
    file: Option<PathBuf>,
    anchor_date: NaiveDate,
    source: EntrySource,
    output: Option<PathBuf>,
) -> Result<()> {
    let file = resolve_plan_file(file)?;
    let entries = match source {
        EntrySource::File(path) => read_long_run_entries(&path)?,
        EntrySource::Schedule {
            start,
            distances,
            cadence_days,
        } => match cadence_days {
            Some(cadence_days) => long_run_schedule(start, cadence_days, &distances)?,
            None => weekly_long_run_schedule(start, &distances)?,
        },
    };

    let records = read_plan(&file)?;
    let before = records.len();
    let merged = merge_long_runs(records, anchor_date, &entries)?;

    let destination = output.unwrap_or(file);
    write_plan(&destination, &merged)?;
    display_merge_summary(entries.len(), before, merged.len(), &destination);
    Ok(())
}
