// ABOUTME: Integration tests for plan validation over parsed and merged sequences
// ABOUTME: Checks that findings match what each tool leaves behind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{date, parse_canonical};
use sprint_plan::config::RaceConfig;
use sprint_plan::tools::{apply_record_patch, long_run_schedule, merge_long_runs, RecordPatch};
use sprint_plan::validation::{validate_plan, validate_plan_strict, ValidationIssue};

#[test]
fn test_parsed_plan_is_valid() {
    let records = parse_canonical().into_records();
    let report = validate_plan(&records);
    assert!(report.is_valid(), "{:?}", report.issues);
    assert_eq!(report.record_count, 84);
    assert_eq!(report.week_count, 12);
}

#[test]
fn test_strict_mode_flags_test_sessions_until_patched() {
    let records = parse_canonical().into_records();
    let strict = validate_plan_strict(&records);
    assert_eq!(strict.count_of("DISALLOWED_ACTIVITY_TYPE"), 9);

    let patched = apply_record_patch(records, &RecordPatch::race_day(&RaceConfig::default()), true)
        .unwrap()
        .records;
    let after = validate_plan_strict(&patched);
    assert_eq!(after.count_of("DISALLOWED_ACTIVITY_TYPE"), 0);
    assert_eq!(after.count_of("NON_CONTIGUOUS_DATE"), 9);
}

#[test]
fn test_merged_plan_reports_gaps_and_short_weeks() {
    let records = parse_canonical().into_records();
    let entries = long_run_schedule(date(2025, 8, 24), 7, &[8.0, 10.0]).unwrap();
    let merged = merge_long_runs(records, date(2025, 8, 17), &entries).unwrap();

    let report = validate_plan(&merged);
    assert_eq!(report.count_of("INCOMPLETE_WEEK"), 2);
    assert_eq!(report.count_of("NON_CONTIGUOUS_DATE"), 2);
    assert!(report.issues.contains(&ValidationIssue::IncompleteWeek { week: 13, count: 1 }));
    assert_eq!(report.count_of("DUPLICATE_DATE"), 0);
}
