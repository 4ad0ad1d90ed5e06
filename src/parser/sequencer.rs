// ABOUTME: Places activities on the calendar, one Monday-to-Sunday week at a time
// ABOUTME: Synthesizes rest days for skipped weekdays so every week yields seven records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calendar Sequencer
//!
//! A single cursor date walks forward one day per emitted record. The cursor is
//! passed into each week step and returned from it, never held in shared state.
//! After a week completes the cursor sits on the following Monday.

use chrono::NaiveDate;
use sprint_plan_core::constants::plan::DAYS_PER_WEEK;
use sprint_plan_core::{DailyRecord, DayOfWeek, PlanError, PlanResult};
use tracing::debug;

use super::activity_builder::{Activity, WeekActivities};

/// Upper bound on rest days synthesized before one parsed day
const MAX_SKIPPED_DAYS: usize = DAYS_PER_WEEK - 1;

/// Running calendar position of the sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    date: NaiveDate,
}

impl CalendarCursor {
    /// Cursor at the plan start date
    ///
    /// # Errors
    /// Returns `PlanError::Alignment` if the date is not a Monday
    pub fn starting_at(date: NaiveDate) -> PlanResult<Self> {
        let day = DayOfWeek::of_date(date);
        if day != DayOfWeek::Monday {
            return Err(PlanError::alignment(format!(
                "plan start date {date} falls on a {day}; plan weeks run Monday to Sunday"
            )));
        }
        Ok(Self { date })
    }

    /// Current date
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.date
    }

    /// Weekday of the current date
    #[must_use]
    pub fn day(self) -> DayOfWeek {
        DayOfWeek::of_date(self.date)
    }

    fn advance(self, week: u32) -> PlanResult<Self> {
        self.date
            .succ_opt()
            .map(|date| Self { date })
            .ok_or_else(|| PlanError::sequencing(week, "calendar date overflow"))
    }
}

/// Records of one week plus the cursor for the next week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencedWeek {
    /// Exactly seven records, Monday to Sunday
    pub records: Vec<DailyRecord>,
    /// Cursor positioned on the following Monday
    pub next: CalendarCursor,
}

/// Lay one week of activities onto the calendar
///
/// Weekdays the document skipped, mid-week or trailing, become rest days.
/// A week with no day blocks at all becomes seven rest days.
///
/// # Errors
/// Returns `PlanError::Sequencing` if the cursor is not on a Monday, a day is
/// listed twice or out of order, or the week does not close at seven records
pub fn sequence_week(
    cursor: CalendarCursor,
    week_number: u32,
    activities: Vec<Activity>,
) -> PlanResult<SequencedWeek> {
    if cursor.day() != DayOfWeek::Monday {
        return Err(PlanError::sequencing(
            week_number,
            format!("week must begin on a Monday, cursor is on {}", cursor.day()),
        ));
    }

    let mut cursor = cursor;
    let mut records = Vec::with_capacity(DAYS_PER_WEEK);
    let mut last_day: Option<DayOfWeek> = None;

    for activity in activities {
        if let Some(previous) = last_day {
            if activity.day <= previous {
                return Err(PlanError::sequencing(
                    week_number,
                    format!("{} listed after {previous}", activity.day),
                ));
            }
        }

        let parsed_index = activity.day.index();
        let mut expected_index = cursor.day().index();
        let mut skipped = 0;
        while expected_index < parsed_index {
            if skipped == MAX_SKIPPED_DAYS {
                return Err(PlanError::sequencing(
                    week_number,
                    format!("skipped-day recovery did not reach {}", activity.day),
                ));
            }
            debug!(week = week_number, date = %cursor.date(), "Synthesizing skipped rest day");
            records.push(DailyRecord::rest(week_number, cursor.date()));
            cursor = cursor.advance(week_number)?;
            expected_index = cursor.day().index();
            skipped += 1;
        }

        if expected_index != parsed_index {
            return Err(PlanError::sequencing(
                week_number,
                format!("cursor on {} cannot place {}", cursor.day(), activity.day),
            ));
        }

        records.push(DailyRecord {
            week: week_number,
            day_of_week: activity.day,
            date: cursor.date(),
            activity_type: activity.activity_type,
            title: activity.title,
            details: activity.details,
        });
        cursor = cursor.advance(week_number)?;
        last_day = Some(activity.day);
    }

    while !last_day.is_some_and(DayOfWeek::is_sunday) {
        debug!(week = week_number, date = %cursor.date(), "Synthesizing trailing rest day");
        records.push(DailyRecord::rest(week_number, cursor.date()));
        last_day = Some(cursor.day());
        cursor = cursor.advance(week_number)?;
    }

    if records.len() != DAYS_PER_WEEK || cursor.day() != DayOfWeek::Monday {
        return Err(PlanError::sequencing(
            week_number,
            format!(
                "week closed with {} records and cursor on {}",
                records.len(),
                cursor.day()
            ),
        ));
    }

    Ok(SequencedWeek {
        records,
        next: cursor,
    })
}

/// Sequence all weeks from the plan start date
///
/// The first day listed in the document must fall on the start date's weekday.
/// Week numbers need not be consecutive: the cursor advances by emitted days,
/// so each week follows the previous one on the calendar.
///
/// # Errors
/// Returns `PlanError::Alignment` if the start date is not a Monday or the
/// document's first day does not match it, and propagates week faults
pub fn sequence_plan(
    start_date: NaiveDate,
    weeks: Vec<WeekActivities>,
) -> PlanResult<Vec<DailyRecord>> {
    let mut cursor = CalendarCursor::starting_at(start_date)?;

    let first_day = weeks
        .iter()
        .find_map(|week| week.activities.first())
        .map(|activity| (activity.week_number, activity.day));
    if let Some((week, day)) = first_day {
        if day != cursor.day() {
            return Err(PlanError::alignment(format!(
                "document begins on {day} of week {week} but the plan starts on {} {start_date}",
                cursor.day()
            )));
        }
    }

    let mut records = Vec::with_capacity(weeks.len() * DAYS_PER_WEEK);
    for week in weeks {
        let sequenced = sequence_week(cursor, week.week_number, week.activities)?;
        debug!(
            week = week.week_number,
            next_monday = %sequenced.next.date(),
            "Sequenced week"
        );
        records.extend(sequenced.records);
        cursor = sequenced.next;
    }

    Ok(records)
}
