// ABOUTME: Turns raw day blocks into titled, classified activities
// ABOUTME: Keyword classification of free-text titles followed by literal corrections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use sprint_plan_core::constants::rest_day;
use sprint_plan_core::{ActivityType, DayOfWeek};
use tracing::debug;

use super::corrections::CorrectionTable;
use super::sectionizer::{RawDayBlock, WeekSection};

/// Title fragments that mark a fitness test session
const TEST_KEYWORDS: [&str; 3] = ["Swim Test", "Run Test", "Bike Test"];

/// A day's workout before it is placed on the calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Week the activity belongs to
    pub week_number: u32,
    /// Day marker it was listed under
    pub day: DayOfWeek,
    /// First content line, or "Day Off" for a bare day marker
    pub title: String,
    /// Remaining lines joined with newlines
    pub details: String,
    /// Classification of the title
    pub activity_type: ActivityType,
}

/// Activities of one week in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekActivities {
    /// Week number from the document header
    pub week_number: u32,
    /// Activities in the order their day markers appeared
    pub activities: Vec<Activity>,
}

/// Classify a title by keyword; the first matching rule wins
///
/// Matching is a case-sensitive substring test, so "Test" is checked before the
/// sport keywords ("45-Minute Run Test" is a test, not a run).
#[must_use]
pub fn classify(title: &str) -> ActivityType {
    if title == rest_day::TITLE {
        ActivityType::Rest
    } else if TEST_KEYWORDS.iter().any(|keyword| title.contains(keyword)) {
        ActivityType::Test
    } else if title.contains("Swim") {
        ActivityType::Swim
    } else if title.contains("Bike") || title.contains("Ride") {
        ActivityType::Bike
    } else if title.contains("Run") {
        ActivityType::Run
    } else {
        ActivityType::Unknown
    }
}

/// Build the activity for one day block
#[must_use]
pub fn build_activity(block: RawDayBlock, corrections: &CorrectionTable) -> Activity {
    let RawDayBlock {
        week_number,
        day,
        lines,
    } = block;

    let mut lines = lines.into_iter();
    let title = lines.next().unwrap_or_else(|| rest_day::TITLE.to_owned());
    let mut details = lines.collect::<Vec<_>>().join("\n").trim().to_owned();

    let activity_type = classify(&title);
    if activity_type == ActivityType::Rest && details.is_empty() {
        rest_day::DEFAULT_DETAILS.clone_into(&mut details);
    }

    let mut activity = Activity {
        week_number,
        day,
        title,
        details,
        activity_type,
    };

    if corrections.apply(&mut activity).is_some() {
        debug!(
            week = week_number,
            day = %day,
            title = %activity.title,
            activity_type = %activity.activity_type,
            "Applied literal correction"
        );
    }

    activity
}

/// Build all activities of a sectionized week
#[must_use]
pub fn build_week(section: WeekSection, corrections: &CorrectionTable) -> WeekActivities {
    WeekActivities {
        week_number: section.week_number,
        activities: section
            .days
            .into_iter()
            .map(|block| build_activity(block, corrections))
            .collect(),
    }
}
