// ABOUTME: DailyRecord model - one dated day of a training plan
// ABOUTME: Field names and date format match the JSON interchange file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ActivityType, DayOfWeek};
use crate::constants::rest_day;

/// One day of the plan as written to the interchange file
///
/// ```json
/// {
///     "week": 1,
///     "dayOfWeek": "Monday",
///     "date": "2025-05-26",
///     "activityType": "Rest",
///     "title": "Day Off",
///     "details": "Take the day off."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    /// Plan week number (1-based)
    pub week: u32,
    /// Day name, always consistent with `date`
    pub day_of_week: DayOfWeek,
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Workout classification
    pub activity_type: ActivityType,
    /// Workout title (first line of the day block)
    pub title: String,
    /// Workout details, possibly empty
    pub details: String,
}

impl DailyRecord {
    /// Build a record for a calendar date; the day name is derived from the date
    #[must_use]
    pub fn new(
        week: u32,
        date: NaiveDate,
        activity_type: ActivityType,
        title: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            week,
            day_of_week: DayOfWeek::of_date(date),
            date,
            activity_type,
            title: title.into(),
            details: details.into(),
        }
    }

    /// Placeholder rest day for a weekday the document skipped
    #[must_use]
    pub fn rest(week: u32, date: NaiveDate) -> Self {
        Self::new(
            week,
            date,
            ActivityType::Rest,
            rest_day::TITLE,
            rest_day::DEFAULT_DETAILS,
        )
    }
}
