// ABOUTME: Collaborator tools that operate on a persisted plan sequence
// ABOUTME: Record patching, long-run merging, and single-record verification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Every tool addresses records by exact calendar date and expects that date
//! to identify at most one record.

/// Insert or replace long-run records after an anchor date
pub mod merge;
/// Overwrite one record and drop test sessions
pub mod patch;
/// Compare one record against expected values
pub mod verify;

pub use merge::{
    long_run_schedule, merge_long_runs, read_long_run_entries, weekly_long_run_schedule,
    LongRunEntry,
};
pub use patch::{apply_record_patch, PatchOutcome, RecordPatch};
pub use verify::{verify_record, FieldCheck, VerificationReport};

use chrono::NaiveDate;
use sprint_plan_core::{DailyRecord, PlanError, PlanResult};

/// Index of the single record at `date`
///
/// # Errors
/// Returns `PlanError::RecordNotFound` if no record has that date and
/// `PlanError::DuplicateDate` if more than one does
pub fn find_unique_index(records: &[DailyRecord], date: NaiveDate) -> PlanResult<usize> {
    match find_index(records, date)? {
        Some(index) => Ok(index),
        None => Err(PlanError::RecordNotFound { date }),
    }
}

/// Index of the record at `date`, or `None` when absent
///
/// # Errors
/// Returns `PlanError::DuplicateDate` if more than one record has that date
pub fn find_index(records: &[DailyRecord], date: NaiveDate) -> PlanResult<Option<usize>> {
    let mut matches = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.date == date)
        .map(|(index, _)| index);

    let first = matches.next();
    let extra = matches.count();
    if extra > 0 {
        return Err(PlanError::DuplicateDate {
            date,
            count: extra + 1,
        });
    }
    Ok(first)
}
