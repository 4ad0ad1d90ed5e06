// ABOUTME: Patch tool - overwrite title and type of the record at one date
// ABOUTME: Drops test sessions from the sequence before patching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sprint_plan_core::{ActivityType, DailyRecord, PlanResult};
use tracing::{debug, info};

use super::find_unique_index;
use crate::config::RaceConfig;

/// New values for the record at `date`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    /// Date of the record to overwrite
    pub date: NaiveDate,
    /// Replacement title
    pub title: String,
    /// Replacement type
    pub activity_type: ActivityType,
}

impl RecordPatch {
    /// Patch that marks the race-day record
    #[must_use]
    pub fn race_day(config: &RaceConfig) -> Self {
        Self {
            date: config.date,
            title: config.title.clone(),
            activity_type: config.activity_type,
        }
    }
}

/// Result of a patch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Sequence after filtering and patching
    pub records: Vec<DailyRecord>,
    /// Number of test-session records removed
    pub removed_tests: usize,
}

/// Drop test records (when asked), then overwrite the unique record at the
/// patch date. Details, week, and day name are left untouched.
///
/// # Errors
/// Returns `PlanError::RecordNotFound` if no record has the patch date after
/// filtering, and `PlanError::DuplicateDate` if several do
pub fn apply_record_patch(
    records: Vec<DailyRecord>,
    patch: &RecordPatch,
    drop_test_sessions: bool,
) -> PlanResult<PatchOutcome> {
    let before = records.len();
    let mut records: Vec<DailyRecord> = if drop_test_sessions {
        records
            .into_iter()
            .filter(|record| record.activity_type != ActivityType::Test)
            .collect()
    } else {
        records
    };
    let removed_tests = before - records.len();
    if removed_tests > 0 {
        debug!(removed_tests, "Dropped test sessions");
    }

    let index = find_unique_index(&records, patch.date)?;
    let record = &mut records[index];
    record.title.clone_from(&patch.title);
    record.activity_type = patch.activity_type;

    info!(
        date = %patch.date,
        title = %patch.title,
        activity_type = %patch.activity_type,
        removed_tests,
        "Patched record"
    );
    Ok(PatchOutcome {
        records,
        removed_tests,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprint_plan_core::PlanError;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
    }

    fn sample() -> Vec<DailyRecord> {
        vec![
            DailyRecord::new(12, day(15), ActivityType::Test, "FTP Test", ""),
            DailyRecord::rest(12, day(16)),
            DailyRecord::new(12, day(17), ActivityType::Unknown, "RACE DAY", "Have fun"),
        ]
    }

    fn race_patch() -> RecordPatch {
        RecordPatch::race_day(&RaceConfig::default())
    }

    #[test]
    fn test_patch_race_day_and_drop_tests() {
        let outcome = apply_record_patch(sample(), &race_patch(), true).unwrap();
        assert_eq!(outcome.removed_tests, 1);
        assert_eq!(outcome.records.len(), 2);
        let race = &outcome.records[1];
        assert_eq!(race.title, "Toronto Island Multisport Triathlon");
        assert_eq!(race.activity_type, ActivityType::Race);
        assert_eq!(race.details, "Have fun");
        assert_eq!(race.week, 12);
    }

    #[test]
    fn test_keep_tests() {
        let outcome = apply_record_patch(sample(), &race_patch(), false).unwrap();
        assert_eq!(outcome.removed_tests, 0);
        assert_eq!(outcome.records.len(), 3);
    }

    #[test]
    fn test_missing_date() {
        let patch = RecordPatch {
            date: day(1),
            ..race_patch()
        };
        assert!(matches!(
            apply_record_patch(sample(), &patch, true),
            Err(PlanError::RecordNotFound { .. })
        ));
    }

    #[test]
    fn test_patching_a_test_session_date_fails_after_filtering() {
        let patch = RecordPatch {
            date: day(15),
            ..race_patch()
        };
        assert!(matches!(
            apply_record_patch(sample(), &patch, true),
            Err(PlanError::RecordNotFound { .. })
        ));
    }
}
