// ABOUTME: Merge tool - upsert externally computed long-run records by date
// ABOUTME: Weeks continue from an anchor record; the sequence is re-sorted afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Merging is keyed on exact date: an entry replaces the record already at its
//! date or is appended, so re-running with the same entries changes nothing.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use sprint_plan_core::constants::long_run;
use sprint_plan_core::{ActivityType, DailyRecord, PlanError, PlanResult};
use tracing::{debug, info};

use super::{find_index, find_unique_index};

/// One externally sourced long run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongRunEntry {
    /// Date of the run
    pub date: NaiveDate,
    /// Distance in kilometres
    pub distance_km: f64,
}

impl LongRunEntry {
    /// Title written onto the merged record
    #[must_use]
    pub fn title(&self) -> String {
        format!("Long Run {} km", self.distance_km)
    }

    /// Details written onto the merged record
    #[must_use]
    pub fn details(&self) -> String {
        format!(
            "Run {} km at an easy, conversational pace.",
            self.distance_km
        )
    }

    /// Record for this entry in the given plan week
    #[must_use]
    pub fn to_record(&self, week: u32) -> DailyRecord {
        DailyRecord::new(
            week,
            self.date,
            ActivityType::Run,
            self.title(),
            self.details(),
        )
    }
}

/// Entries dated `start`, `start + cadence`, `start + 2 * cadence`, ...
///
/// # Errors
/// Returns `PlanError::Config` for a zero cadence or a date past the calendar range
pub fn long_run_schedule(
    start: NaiveDate,
    cadence_days: u64,
    distances: &[f64],
) -> PlanResult<Vec<LongRunEntry>> {
    if cadence_days == 0 {
        return Err(PlanError::config("long-run cadence must be at least one day"));
    }

    let mut entries = Vec::with_capacity(distances.len());
    let mut date = start;
    for (i, &distance_km) in distances.iter().enumerate() {
        if i > 0 {
            date = date.checked_add_days(Days::new(cadence_days)).ok_or_else(|| {
                PlanError::config(format!("long-run date after {date} is out of range"))
            })?;
        }
        entries.push(LongRunEntry { date, distance_km });
    }
    Ok(entries)
}

/// Weekly schedule using the default cadence
///
/// # Errors
/// Returns `PlanError::Config` if a date is past the calendar range
pub fn weekly_long_run_schedule(
    start: NaiveDate,
    distances: &[f64],
) -> PlanResult<Vec<LongRunEntry>> {
    long_run_schedule(start, u64::from(long_run::DEFAULT_CADENCE_DAYS), distances)
}

/// Load entries from a JSON file of `{ "date": ..., "distanceKm": ... }` objects
///
/// # Errors
/// Returns `PlanError::MissingInputFile` if the file does not exist, and I/O or
/// decoding errors otherwise
pub fn read_long_run_entries(path: &Path) -> PlanResult<Vec<LongRunEntry>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            PlanError::MissingInputFile {
                path: path.to_path_buf(),
            }
        } else {
            PlanError::Io(e)
        }
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Upsert long-run records after the anchor record, then sort by date
///
/// Entry `i` (zero-based) is assigned week `anchor.week + i + 1`. The sort is
/// stable, so records sharing a date would keep their relative order.
///
/// # Errors
/// Returns `PlanError::RecordNotFound` if no record has the anchor date,
/// `PlanError::DuplicateDate` if the anchor or any entry date matches more
/// than one existing record, and `PlanError::Config` if a week number would
/// overflow
pub fn merge_long_runs(
    mut records: Vec<DailyRecord>,
    anchor_date: NaiveDate,
    entries: &[LongRunEntry],
) -> PlanResult<Vec<DailyRecord>> {
    let anchor_week = records[find_unique_index(&records, anchor_date)?].week;

    let mut replaced = 0_usize;
    let mut appended = 0_usize;
    for (offset, entry) in (1_u32..).zip(entries) {
        let week = anchor_week.checked_add(offset).ok_or_else(|| {
            PlanError::config(format!(
                "week after anchor week {anchor_week} is out of range for {}",
                entry.date
            ))
        })?;
        let record = entry.to_record(week);
        match find_index(&records, entry.date)? {
            Some(index) => {
                debug!(date = %entry.date, week = record.week, "Replacing record");
                records[index] = record;
                replaced += 1;
            }
            None => {
                debug!(date = %entry.date, week = record.week, "Appending record");
                records.push(record);
                appended += 1;
            }
        }
    }

    records.sort_by_key(|record| record.date);
    info!(
        anchor = %anchor_date,
        anchor_week,
        replaced,
        appended,
        total = records.len(),
        "Merged long runs"
    );
    Ok(records)
}
