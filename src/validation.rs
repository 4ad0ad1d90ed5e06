// ABOUTME: Read-only consistency checks over a persisted plan sequence
// ABOUTME: Reports type, week completeness, day-name, contiguity, and duplicate-date findings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Validation
//!
//! Findings are collected, never fixed: the sequence is only borrowed.
//! A plan that went through the merge tool legitimately has gaps and short
//! trailing weeks, so callers decide which findings matter to them.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use sprint_plan_core::constants::plan::DAYS_PER_WEEK;
use sprint_plan_core::{ActivityType, DailyRecord, DayOfWeek};
use tracing::debug;

/// One finding about a plan sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Record was never classified
    UnknownActivityType {
        /// Date of the record
        date: NaiveDate,
        /// Title of the record
        title: String,
    },
    /// Type that should not remain in a finished plan (strict mode only)
    DisallowedActivityType {
        /// Date of the record
        date: NaiveDate,
        /// Offending type
        activity_type: ActivityType,
    },
    /// Week does not hold exactly seven records
    IncompleteWeek {
        /// Week number
        week: u32,
        /// Records found for that week
        count: usize,
    },
    /// Stored day name disagrees with the weekday of the date
    DayOrderMismatch {
        /// Date of the record
        date: NaiveDate,
        /// Weekday of `date`
        expected: DayOfWeek,
        /// Day name stored on the record
        actual: DayOfWeek,
    },
    /// Record does not follow its predecessor by exactly one day
    NonContiguousDate {
        /// Date of the preceding record
        previous: NaiveDate,
        /// Date of this record
        date: NaiveDate,
    },
    /// Several records share a date
    DuplicateDate {
        /// Shared date
        date: NaiveDate,
        /// Number of records with that date
        count: usize,
    },
}

impl ValidationIssue {
    /// Stable identifier for the finding kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownActivityType { .. } => "UNKNOWN_ACTIVITY_TYPE",
            Self::DisallowedActivityType { .. } => "DISALLOWED_ACTIVITY_TYPE",
            Self::IncompleteWeek { .. } => "INCOMPLETE_WEEK",
            Self::DayOrderMismatch { .. } => "DAY_ORDER_MISMATCH",
            Self::NonContiguousDate { .. } => "NON_CONTIGUOUS_DATE",
            Self::DuplicateDate { .. } => "DUPLICATE_DATE",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownActivityType { date, title } => {
                write!(f, "{date}: '{title}' has no recognised activity type")
            }
            Self::DisallowedActivityType {
                date,
                activity_type,
            } => write!(f, "{date}: {activity_type} is not allowed in a finished plan"),
            Self::IncompleteWeek { week, count } => {
                write!(f, "week {week} has {count} records, expected {DAYS_PER_WEEK}")
            }
            Self::DayOrderMismatch {
                date,
                expected,
                actual,
            } => write!(f, "{date}: labelled {actual} but falls on {expected}"),
            Self::NonContiguousDate { previous, date } => {
                write!(f, "{date} does not follow {previous}")
            }
            Self::DuplicateDate { date, count } => {
                write!(f, "{date} appears {count} times")
            }
        }
    }
}

/// Findings for one sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Findings in discovery order
    pub issues: Vec<ValidationIssue>,
    /// Records inspected
    pub record_count: usize,
    /// Distinct week numbers inspected
    pub week_count: usize,
}

impl ValidationReport {
    /// True when no finding was recorded
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of findings of the given kind
    #[must_use]
    pub fn count_of(&self, kind: &str) -> usize {
        self.issues.iter().filter(|issue| issue.kind() == kind).count()
    }
}

/// Validate a sequence, leaving Test sessions alone
#[must_use]
pub fn validate_plan(records: &[DailyRecord]) -> ValidationReport {
    validate(records, false)
}

/// Validate a finished sequence, also flagging Test and Unknown records
#[must_use]
pub fn validate_plan_strict(records: &[DailyRecord]) -> ValidationReport {
    validate(records, true)
}

fn validate(records: &[DailyRecord], strict: bool) -> ValidationReport {
    let mut issues = Vec::new();
    let mut weeks: BTreeMap<u32, usize> = BTreeMap::new();
    let mut dates: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for record in records {
        *weeks.entry(record.week).or_default() += 1;
        *dates.entry(record.date).or_default() += 1;
        check_record(record, strict, &mut issues);
    }

    for pair in records.windows(2) {
        let (previous, current) = (pair[0].date, pair[1].date);
        if previous.succ_opt() != Some(current) && previous != current {
            issues.push(ValidationIssue::NonContiguousDate {
                previous,
                date: current,
            });
        }
    }

    issues.extend(
        weeks
            .iter()
            .filter(|(_, &count)| count != DAYS_PER_WEEK)
            .map(|(&week, &count)| ValidationIssue::IncompleteWeek { week, count }),
    );
    issues.extend(
        dates
            .iter()
            .filter(|(_, &count)| count > 1)
            .map(|(&date, &count)| ValidationIssue::DuplicateDate { date, count }),
    );

    debug!(
        records = records.len(),
        weeks = weeks.len(),
        issues = issues.len(),
        strict,
        "Validated plan"
    );
    ValidationReport {
        issues,
        record_count: records.len(),
        week_count: weeks.len(),
    }
}

fn check_record(record: &DailyRecord, strict: bool, issues: &mut Vec<ValidationIssue>) {
    if record.activity_type == ActivityType::Unknown {
        issues.push(ValidationIssue::UnknownActivityType {
            date: record.date,
            title: record.title.clone(),
        });
    }
    if strict && !record.activity_type.is_publishable() {
        issues.push(ValidationIssue::DisallowedActivityType {
            date: record.date,
            activity_type: record.activity_type,
        });
    }

    let expected = DayOfWeek::of_date(record.date);
    if record.day_of_week != expected {
        issues.push(ValidationIssue::DayOrderMismatch {
            date: record.date,
            expected,
            actual: record.day_of_week,
        });
    }
}
