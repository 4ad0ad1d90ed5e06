// ABOUTME: Plan document parser - sectionizer, activity builder, and calendar sequencer
// ABOUTME: Converts a free-form weekly training plan into dated Monday-to-Sunday records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Parser
//!
//! Data flows strictly through three stages:
//!
//! 1. **Sectionizer** finds `Week <N>` headers and day-name markers
//! 2. **Activity Builder** derives title, details and type for each day block,
//!    then applies the literal correction table
//! 3. **Calendar Sequencer** dates every activity and fills skipped weekdays
//!    with rest days so each week yields exactly seven records
//!
//! Any stage failure aborts the whole parse; there is no partial output.

/// Per-day title/details extraction and keyword classification
pub mod activity_builder;
/// Literal overrides for known anomalies of the canonical document
pub mod corrections;
/// Calendar placement and rest-day synthesis
pub mod sequencer;
/// Week and day boundary detection
pub mod sectionizer;

pub use activity_builder::{build_activity, build_week, classify, Activity, WeekActivities};
pub use corrections::{Correction, CorrectionTable, DetailsOverride};
pub use sectionizer::{sectionize, RawDayBlock, WeekSection};
pub use sequencer::{sequence_plan, sequence_week, CalendarCursor, SequencedWeek};

use chrono::NaiveDate;
use sprint_plan_core::constants::plan::{self, DAYS_PER_WEEK};
use sprint_plan_core::{ActivityType, DailyRecord, DayOfWeek, PlanResult};
use tracing::{info, warn};

use crate::config::PlanConfig;

/// Non-fatal finding surfaced for human review
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanIssue {
    /// Title matched no classification rule and no correction
    UnknownActivityType {
        /// Week of the record
        week: u32,
        /// Day of the record
        day: DayOfWeek,
        /// Date of the record
        date: NaiveDate,
        /// Title that could not be classified
        title: String,
    },
}

/// Output of a successful parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPlan {
    /// Dated records, seven per week, in calendar order
    pub records: Vec<DailyRecord>,
    /// Week numbers in document order
    pub week_numbers: Vec<u32>,
    /// Non-fatal findings
    pub issues: Vec<PlanIssue>,
}

impl ParsedPlan {
    /// Number of records a complete plan should contain (weeks x 7)
    #[must_use]
    pub fn expected_record_count(&self) -> usize {
        self.week_numbers.len() * DAYS_PER_WEEK
    }

    /// Whether the record count equals the expected count
    #[must_use]
    pub fn count_matches(&self) -> bool {
        self.records.len() == self.expected_record_count()
    }

    /// Take the records, dropping diagnostics
    #[must_use]
    pub fn into_records(self) -> Vec<DailyRecord> {
        self.records
    }
}

/// Configured three-stage parser
#[derive(Debug, Clone)]
pub struct PlanParser {
    start_date: NaiveDate,
    banner_marker: String,
    corrections: CorrectionTable,
}

impl PlanParser {
    /// Parser for a plan starting on the given Monday, using the canonical
    /// banner marker and correction table
    #[must_use]
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            banner_marker: plan::BANNER_MARKER.to_owned(),
            corrections: CorrectionTable::canonical(),
        }
    }

    /// Parser built from loaded configuration
    #[must_use]
    pub fn from_config(config: &PlanConfig) -> Self {
        Self::new(config.start_date).with_banner_marker(config.banner_marker.clone())
    }

    /// Use a different banner marker
    #[must_use]
    pub fn with_banner_marker(mut self, marker: impl Into<String>) -> Self {
        self.banner_marker = marker.into();
        self
    }

    /// Use a different correction table
    #[must_use]
    pub const fn with_corrections(mut self, corrections: CorrectionTable) -> Self {
        self.corrections = corrections;
        self
    }

    /// Configured start date
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Parse a whole document
    ///
    /// # Errors
    /// Returns `PlanError::Format` for a missing banner or week headers,
    /// `PlanError::Alignment` when the document's first day does not match the
    /// start date, and `PlanError::Sequencing` for malformed weeks
    pub fn parse(&self, text: &str) -> PlanResult<ParsedPlan> {
        let sections = sectionize(text, &self.banner_marker)?;
        let week_numbers = sections.iter().map(|section| section.week_number).collect();
        let weeks = sections
            .into_iter()
            .map(|section| build_week(section, &self.corrections))
            .collect();
        let records = sequence_plan(self.start_date, weeks)?;

        let issues = collect_issues(&records);
        for issue in &issues {
            let PlanIssue::UnknownActivityType {
                week,
                day,
                date,
                title,
            } = issue;
            warn!(
                week,
                day = %day,
                date = %date,
                title = %title,
                "Unknown activity type, needs review"
            );
        }

        let parsed = ParsedPlan {
            records,
            week_numbers,
            issues,
        };
        info!(
            weeks = parsed.week_numbers.len(),
            records = parsed.records.len(),
            expected = parsed.expected_record_count(),
            unknown = parsed.issues.len(),
            "Parsed training plan"
        );
        if !parsed.count_matches() {
            warn!(
                records = parsed.records.len(),
                expected = parsed.expected_record_count(),
                "Record count does not match weeks x 7"
            );
        }
        Ok(parsed)
    }
}

impl Default for PlanParser {
    fn default() -> Self {
        Self::new(plan::default_start_date())
    }
}

fn collect_issues(records: &[DailyRecord]) -> Vec<PlanIssue> {
    records
        .iter()
        .filter(|record| record.activity_type == ActivityType::Unknown)
        .map(|record| PlanIssue::UnknownActivityType {
            week: record.week,
            day: record.day_of_week,
            date: record.date,
            title: record.title.clone(),
        })
        .collect()
}
