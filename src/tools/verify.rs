// ABOUTME: Verify tool - compare the record at one date against expected values
// ABOUTME: Produces a per-field report instead of failing on the first mismatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::Serialize;
use sprint_plan_core::{ActivityType, DailyRecord, PlanResult};
use tracing::{info, warn};

use super::find_unique_index;

/// Outcome of one field comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    /// Interchange field name
    pub field: &'static str,
    /// Expected value
    pub expected: String,
    /// Value found on the record
    pub actual: String,
    /// Whether the two match exactly
    pub passed: bool,
}

impl FieldCheck {
    fn compare(field: &'static str, expected: &str, actual: &str) -> Self {
        Self {
            field,
            expected: expected.to_owned(),
            actual: actual.to_owned(),
            passed: expected == actual,
        }
    }
}

/// All field checks for the record at `date`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Date that was verified
    pub date: NaiveDate,
    /// One check per verified field
    pub checks: Vec<FieldCheck>,
}

impl VerificationReport {
    /// True only when every check passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    /// Checks that did not pass
    pub fn failures(&self) -> impl Iterator<Item = &FieldCheck> {
        self.checks.iter().filter(|check| !check.passed)
    }
}

/// Check type and title of the unique record at `date`
///
/// # Errors
/// Returns `PlanError::RecordNotFound` if no record has that date and
/// `PlanError::DuplicateDate` if several do
pub fn verify_record(
    records: &[DailyRecord],
    date: NaiveDate,
    expected_type: ActivityType,
    expected_title: &str,
) -> PlanResult<VerificationReport> {
    let record = &records[find_unique_index(records, date)?];
    let report = VerificationReport {
        date,
        checks: vec![
            FieldCheck::compare(
                "activityType",
                expected_type.as_str(),
                record.activity_type.as_str(),
            ),
            FieldCheck::compare("title", expected_title, &record.title),
        ],
    };

    if report.passed() {
        info!(date = %date, "Record matches expected values");
    } else {
        for check in report.failures() {
            warn!(
                date = %date,
                field = check.field,
                expected = %check.expected,
                actual = %check.actual,
                "Record field mismatch"
            );
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprint_plan_core::PlanError;

    const TITLE: &str = "Toronto Island Multisport Triathlon";

    fn race_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 17).unwrap()
    }

    #[test]
    fn test_matching_record_passes() {
        let records = vec![DailyRecord::new(12, race_date(), ActivityType::Race, TITLE, "")];
        let report = verify_record(&records, race_date(), ActivityType::Race, TITLE).unwrap();
        assert!(report.passed());
        assert_eq!(report.checks.len(), 2);
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn test_each_field_is_reported() {
        let records = vec![DailyRecord::new(
            12,
            race_date(),
            ActivityType::Unknown,
            "RACE DAY",
            "",
        )];
        let report = verify_record(&records, race_date(), ActivityType::Race, TITLE).unwrap();
        assert!(!report.passed());
        let failed: Vec<_> = report.failures().map(|check| check.field).collect();
        assert_eq!(failed, vec!["activityType", "title"]);
        assert_eq!(report.checks[0].actual, "Unknown");
    }

    #[test]
    fn test_only_title_wrong() {
        let records = vec![DailyRecord::new(12, race_date(), ActivityType::Race, "RACE DAY", "")];
        let report = verify_record(&records, race_date(), ActivityType::Race, TITLE).unwrap();
        assert!(report.checks[0].passed);
        assert!(!report.checks[1].passed);
    }

    #[test]
    fn test_missing_record() {
        assert!(matches!(
            verify_record(&[], race_date(), ActivityType::Race, TITLE),
            Err(PlanError::RecordNotFound { .. })
        ));
    }
}
