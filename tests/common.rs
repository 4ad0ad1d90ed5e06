// ABOUTME: Shared test utilities for the sprint plan integration tests
// ABOUTME: Loads the canonical document and builds small record sequences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `sprint_plan`

use chrono::{Days, NaiveDate};
use sprint_plan::parser::{ParsedPlan, PlanParser};
use sprint_plan::DailyRecord;

/// The canonical 12-week sprint plan document
pub const CANONICAL_TEXT: &str = include_str!("../data/sprint_training_plan.txt");

/// Monday the canonical plan starts on
pub fn canonical_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 26).unwrap()
}

/// Calendar date helper
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Parse the canonical document with default settings
pub fn parse_canonical() -> ParsedPlan {
    PlanParser::new(canonical_start())
        .parse(CANONICAL_TEXT)
        .unwrap()
}

/// Record of the canonical plan at the given week and 0-based day index
pub fn canonical_record(plan: &ParsedPlan, week: u32, day_index: usize) -> &DailyRecord {
    plan.records
        .iter()
        .filter(|record| record.week == week)
        .nth(day_index)
        .unwrap()
}

/// `weeks` full weeks of rest records starting on `start`
pub fn rest_weeks(start: NaiveDate, weeks: u32) -> Vec<DailyRecord> {
    (0..u64::from(weeks) * 7)
        .map(|offset| {
            let week = (offset / 7) as u32 + 1;
            DailyRecord::rest(week, start.checked_add_days(Days::new(offset)).unwrap())
        })
        .collect()
}
