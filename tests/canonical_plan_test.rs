// ABOUTME: Integration tests parsing the canonical 12-week sprint plan document
// ABOUTME: Covers week invariants, classification, corrections, and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{canonical_record, canonical_start, date, parse_canonical, CANONICAL_TEXT};
use sprint_plan::parser::{CorrectionTable, PlanParser};
use sprint_plan::storage::to_json_string;
use sprint_plan::constants::plan::{CANONICAL_WEEKS, DAYS_PER_WEEK};
use sprint_plan::{ActivityType, DayOfWeek, PlanError};

#[test]
fn test_canonical_plan_has_84_records() {
    let plan = parse_canonical();
    assert_eq!(plan.week_numbers, (1..=CANONICAL_WEEKS).collect::<Vec<_>>());
    assert_eq!(plan.records.len(), CANONICAL_WEEKS as usize * DAYS_PER_WEEK);
    assert_eq!(plan.records.len(), 84);
    assert_eq!(plan.expected_record_count(), 84);
    assert!(plan.count_matches());
    assert!(plan.issues.is_empty());
}

#[test]
fn test_every_week_runs_monday_to_sunday() {
    let plan = parse_canonical();
    for (index, week) in plan.records.chunks(7).enumerate() {
        let days: Vec<DayOfWeek> = week.iter().map(|record| record.day_of_week).collect();
        assert_eq!(days, DayOfWeek::ALL.to_vec());
        assert!(week.iter().all(|record| record.week == index as u32 + 1));
    }
}

#[test]
fn test_dates_are_contiguous() {
    let plan = parse_canonical();
    assert_eq!(plan.records[0].date, canonical_start());
    assert_eq!(plan.records[83].date, date(2025, 8, 17));
    for pair in plan.records.windows(2) {
        assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
    }
}

#[test]
fn test_type_counts() {
    let plan = parse_canonical();
    let count = |kind: ActivityType| {
        plan.records
            .iter()
            .filter(|record| record.activity_type == kind)
            .count()
    };
    assert_eq!(count(ActivityType::Rest), 19);
    assert_eq!(count(ActivityType::Swim), 18);
    assert_eq!(count(ActivityType::Run), 18);
    assert_eq!(count(ActivityType::Bike), 15);
    assert_eq!(count(ActivityType::Test), 9);
    assert_eq!(count(ActivityType::Brick), 4);
    assert_eq!(count(ActivityType::Race), 1);
    assert_eq!(count(ActivityType::Unknown), 0);
}

#[test]
fn test_first_monday_keeps_document_details() {
    let plan = parse_canonical();
    let monday = &plan.records[0];
    assert_eq!(monday.title, "Day Off");
    assert_eq!(monday.activity_type, ActivityType::Rest);
    assert!(monday.details.starts_with("Take the day off, including as much time off your feet"));
}

#[test]
fn test_test_sessions_are_classified_before_sports() {
    let plan = parse_canonical();
    let tuesday = canonical_record(&plan, 1, 1);
    assert_eq!(tuesday.title, "30-Minute Swim Test");
    assert_eq!(tuesday.activity_type, ActivityType::Test);
    let thursday = canonical_record(&plan, 1, 3);
    assert_eq!(thursday.title, "45-Minute Run Test");
    assert_eq!(thursday.activity_type, ActivityType::Test);
}

#[test]
fn test_corrections_applied() {
    let plan = parse_canonical();

    let week3_saturday = canonical_record(&plan, 3, 5);
    assert_eq!(week3_saturday.date, date(2025, 6, 14));
    assert_eq!(week3_saturday.title, "60-Min Build Bike + 5-Min Run");
    assert_eq!(week3_saturday.activity_type, ActivityType::Brick);

    let week5_wednesday = canonical_record(&plan, 5, 2);
    assert_eq!(week5_wednesday.activity_type, ActivityType::Bike);
    assert_eq!(
        week5_wednesday.details,
        "Ride easy/ conversational, and use an easy gear with a high cadence."
    );

    let week7_monday = canonical_record(&plan, 7, 0);
    assert_eq!(week7_monday.details, "Take the day off.");

    let week7_thursday = canonical_record(&plan, 7, 3);
    assert_eq!(week7_thursday.title, "50-Minute Build Run");
    assert_eq!(week7_thursday.activity_type, ActivityType::Run);

    let week8_saturday = canonical_record(&plan, 8, 5);
    assert_eq!(week8_saturday.title, "30-Minute Easy Run");
    assert_eq!(
        week8_saturday.details,
        "Run/walk easy (conversational), taking breaks as needed."
    );

    let week12_saturday = canonical_record(&plan, 12, 5);
    assert_eq!(week12_saturday.title, "20-Min Pre-Race Brick");
    assert_eq!(week12_saturday.activity_type, ActivityType::Brick);

    let race = canonical_record(&plan, 12, 6);
    assert_eq!(race.title, "RACE DAY");
    assert_eq!(race.activity_type, ActivityType::Race);
    assert_eq!(race.details, "Arrive early, trust your sprint training plan, have fun!");
}

#[test]
fn test_without_corrections_keywords_decide() {
    let plan = PlanParser::new(canonical_start())
        .with_corrections(CorrectionTable::empty())
        .parse(CANONICAL_TEXT)
        .unwrap();

    let week3_saturday = canonical_record(&plan, 3, 5);
    assert_eq!(week3_saturday.activity_type, ActivityType::Bike);
    let race = canonical_record(&plan, 12, 6);
    assert_eq!(race.activity_type, ActivityType::Unknown);
    let pre_race = canonical_record(&plan, 12, 5);
    assert_eq!(pre_race.title, "20-Minute Pre-Race Workout");
    assert_eq!(pre_race.activity_type, ActivityType::Unknown);
    assert_eq!(plan.issues.len(), 2);
}

#[test]
fn test_parsing_is_deterministic() {
    let first = to_json_string(&parse_canonical().records).unwrap();
    let second = to_json_string(&parse_canonical().records).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_banner_aborts() {
    let text = CANONICAL_TEXT.replace("12 Week Sprint Training Plan", "Plan");
    let result = PlanParser::new(canonical_start()).parse(&text);
    assert!(matches!(result, Err(PlanError::Format(_))));
}

#[test]
fn test_wrong_start_weekday_aborts() {
    let result = PlanParser::new(date(2025, 5, 28)).parse(CANONICAL_TEXT);
    assert!(matches!(result, Err(PlanError::Alignment(_))));
}

#[test]
fn test_other_monday_shifts_dates() {
    let plan = PlanParser::new(date(2026, 1, 5)).parse(CANONICAL_TEXT).unwrap();
    assert_eq!(plan.records.len(), 84);
    assert_eq!(plan.records[0].date, date(2026, 1, 5));
    assert_eq!(plan.records[83].date, date(2026, 3, 29));
    assert_eq!(plan.records[83].day_of_week, DayOfWeek::Sunday);
}
