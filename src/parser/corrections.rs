// ABOUTME: Literal correction table for known anomalies in the canonical plan document
// ABOUTME: Overrides title, type, or details keyed by week, day, and original title
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Correction Table
//!
//! Keyword classification stays general; the handful of entries it gets wrong
//! in the canonical document are listed here as data. Lookups are literal:
//! a correction applies only when week, day and (if given) the original title
//! all match exactly. The first matching entry wins.

use sprint_plan_core::{ActivityType, DayOfWeek};

use super::activity_builder::Activity;

/// How a correction rewrites the details text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsOverride {
    /// Always replace the details
    Replace(&'static str),
    /// Fill in details only when the document omitted them
    DefaultIfEmpty(&'static str),
}

/// One literal override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    /// Week the anomaly occurs in
    pub week: u32,
    /// Day the anomaly occurs on
    pub day: DayOfWeek,
    /// Title as parsed from the document; `None` matches any title
    pub original_title: Option<&'static str>,
    /// Replacement title
    pub title: Option<&'static str>,
    /// Replacement activity type
    pub activity_type: Option<ActivityType>,
    /// Replacement details
    pub details: Option<DetailsOverride>,
}

impl Correction {
    /// Whether this entry addresses the given day
    #[must_use]
    pub fn matches(&self, week: u32, day: DayOfWeek, title: &str) -> bool {
        self.week == week
            && self.day == day
            && self.original_title.is_none_or(|original| original == title)
    }

    /// Write the overrides onto an activity
    pub fn apply(&self, activity: &mut Activity) {
        if let Some(title) = self.title {
            title.clone_into(&mut activity.title);
        }
        if let Some(activity_type) = self.activity_type {
            activity.activity_type = activity_type;
        }
        match self.details {
            Some(DetailsOverride::Replace(details)) => details.clone_into(&mut activity.details),
            Some(DetailsOverride::DefaultIfEmpty(details)) if activity.details.is_empty() => {
                details.clone_into(&mut activity.details);
            }
            Some(DetailsOverride::DefaultIfEmpty(_)) | None => {}
        }
    }
}

const fn brick(week: u32, title: &'static str) -> Correction {
    Correction {
        week,
        day: DayOfWeek::Saturday,
        original_title: None,
        title: Some(title),
        activity_type: Some(ActivityType::Brick),
        details: None,
    }
}

/// Known anomalies of the canonical 12-week sprint plan
pub const CANONICAL_CORRECTIONS: &[Correction] = &[
    // Week 7 Monday carries a stray "." line under "Day Off". Replacing it
    // departs from the raw document, whose details would otherwise be "."
    Correction {
        week: 7,
        day: DayOfWeek::Monday,
        original_title: Some("Day Off"),
        title: None,
        activity_type: None,
        details: Some(DetailsOverride::Replace("Take the day off.")),
    },
    brick(3, "60-Min Build Bike + 5-Min Run"),
    // Week 5 Wednesday repeats the swim test details under a bike title
    Correction {
        week: 5,
        day: DayOfWeek::Wednesday,
        original_title: Some("45-Minute Easy Bike"),
        title: None,
        activity_type: Some(ActivityType::Bike),
        details: Some(DetailsOverride::Replace(
            "Ride easy/ conversational, and use an easy gear with a high cadence.",
        )),
    },
    Correction {
        week: 7,
        day: DayOfWeek::Thursday,
        original_title: Some("50-Minute Build Ride"),
        title: Some("50-Minute Build Run"),
        activity_type: Some(ActivityType::Run),
        details: None,
    },
    brick(7, "65-Min Build Bike + 8-Min Run"),
    Correction {
        week: 8,
        day: DayOfWeek::Saturday,
        original_title: Some("30-Minute Easy Run"),
        title: None,
        activity_type: Some(ActivityType::Run),
        details: Some(DetailsOverride::DefaultIfEmpty(
            "Run/walk easy (conversational), taking breaks as needed.",
        )),
    },
    brick(10, "65-Min Build Bike + 10-Min Run"),
    brick(12, "20-Min Pre-Race Brick"),
    Correction {
        week: 12,
        day: DayOfWeek::Sunday,
        original_title: Some("RACE DAY"),
        title: None,
        activity_type: Some(ActivityType::Race),
        details: Some(DetailsOverride::DefaultIfEmpty(
            "Arrive early, trust your sprint training plan, have fun!",
        )),
    },
];

/// Enumerable set of literal corrections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionTable {
    entries: &'static [Correction],
}

impl CorrectionTable {
    /// Table over the given entries
    #[must_use]
    pub const fn new(entries: &'static [Correction]) -> Self {
        Self { entries }
    }

    /// Corrections for the canonical 12-week sprint plan
    #[must_use]
    pub const fn canonical() -> Self {
        Self::new(CANONICAL_CORRECTIONS)
    }

    /// Table with no entries
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(&[])
    }

    /// All entries in lookup order
    #[must_use]
    pub const fn entries(&self) -> &'static [Correction] {
        self.entries
    }

    /// First entry matching a day, if any
    #[must_use]
    pub fn lookup(&self, week: u32, day: DayOfWeek, title: &str) -> Option<&'static Correction> {
        self.entries
            .iter()
            .find(|entry| entry.matches(week, day, title))
    }

    /// Apply the matching entry to an activity, returning it when one applied
    pub fn apply(&self, activity: &mut Activity) -> Option<&'static Correction> {
        let correction = self.lookup(activity.week_number, activity.day, &activity.title)?;
        correction.apply(activity);
        Some(correction)
    }
}

impl Default for CorrectionTable {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(
        week: u32,
        day: DayOfWeek,
        title: &str,
        details: &str,
        kind: ActivityType,
    ) -> Activity {
        Activity {
            week_number: week,
            day,
            title: title.to_owned(),
            details: details.to_owned(),
            activity_type: kind,
        }
    }

    fn corrected(mut activity: Activity) -> Activity {
        CorrectionTable::canonical().apply(&mut activity);
        activity
    }

    #[test]
    fn test_week_3_saturday_becomes_brick() {
        let result = corrected(activity(
            3,
            DayOfWeek::Saturday,
            "60-Minute Build Bike",
            "WU- 12 minutes easy",
            ActivityType::Bike,
        ));
        assert_eq!(result.title, "60-Min Build Bike + 5-Min Run");
        assert_eq!(result.activity_type, ActivityType::Brick);
        assert_eq!(result.details, "WU- 12 minutes easy");
    }

    #[test]
    fn test_week_5_wednesday_details_replaced() {
        let result = corrected(activity(
            5,
            DayOfWeek::Wednesday,
            "45-Minute Easy Bike",
            "WU- 5 to 10 minutes easy swim",
            ActivityType::Bike,
        ));
        assert_eq!(
            result.details,
            "Ride easy/ conversational, and use an easy gear with a high cadence."
        );
        assert_eq!(result.activity_type, ActivityType::Bike);
    }

    #[test]
    fn test_week_5_wednesday_requires_original_title() {
        let mut other = activity(5, DayOfWeek::Wednesday, "Day Off", "x", ActivityType::Rest);
        assert!(CorrectionTable::canonical().apply(&mut other).is_none());
        assert_eq!(other.details, "x");
    }

    #[test]
    fn test_week_7_thursday_ride_is_a_run() {
        let result = corrected(activity(
            7,
            DayOfWeek::Thursday,
            "50-Minute Build Ride",
            "WU- 10 minutes easy walk/ jog",
            ActivityType::Bike,
        ));
        assert_eq!(result.title, "50-Minute Build Run");
        assert_eq!(result.activity_type, ActivityType::Run);
    }

    #[test]
    fn test_week_7_monday_stray_line_cleared() {
        let result = corrected(activity(7, DayOfWeek::Monday, "Day Off", ".", ActivityType::Rest));
        assert_eq!(result.details, "Take the day off.");
        assert_eq!(result.activity_type, ActivityType::Rest);
    }

    #[test]
    fn test_week_7_and_10_saturday_bricks() {
        let week7 = corrected(activity(
            7,
            DayOfWeek::Saturday,
            "65-Minute Build Bike",
            "",
            ActivityType::Bike,
        ));
        assert_eq!(week7.title, "65-Min Build Bike + 8-Min Run");
        assert_eq!(week7.activity_type, ActivityType::Brick);

        let week10 = corrected(activity(
            10,
            DayOfWeek::Saturday,
            "65-Minute Build Bike",
            "",
            ActivityType::Bike,
        ));
        assert_eq!(week10.title, "65-Min Build Bike + 10-Min Run");
        assert_eq!(week10.activity_type, ActivityType::Brick);
    }

    #[test]
    fn test_week_8_saturday_default_details_only_when_empty() {
        let empty = corrected(activity(
            8,
            DayOfWeek::Saturday,
            "30-Minute Easy Run",
            "",
            ActivityType::Run,
        ));
        assert_eq!(
            empty.details,
            "Run/walk easy (conversational), taking breaks as needed."
        );

        let present = corrected(activity(
            8,
            DayOfWeek::Saturday,
            "30-Minute Easy Run",
            "Jog.",
            ActivityType::Run,
        ));
        assert_eq!(present.details, "Jog.");
    }

    #[test]
    fn test_week_12_pre_race_brick() {
        let result = corrected(activity(
            12,
            DayOfWeek::Saturday,
            "20-Minute Pre-Race Workout",
            "Bike 15 minutes progressing to race pace",
            ActivityType::Unknown,
        ));
        assert_eq!(result.title, "20-Min Pre-Race Brick");
        assert_eq!(result.activity_type, ActivityType::Brick);
    }

    #[test]
    fn test_week_12_race_day() {
        let result = corrected(activity(
            12,
            DayOfWeek::Sunday,
            "RACE DAY",
            "",
            ActivityType::Unknown,
        ));
        assert_eq!(result.activity_type, ActivityType::Race);
        assert_eq!(
            result.details,
            "Arrive early, trust your sprint training plan, have fun!"
        );
    }

    #[test]
    fn test_no_entry_for_unlisted_day() {
        let table = CorrectionTable::canonical();
        assert!(table.lookup(2, DayOfWeek::Saturday, "60-Minute Build Bike").is_none());
        assert!(table.lookup(3, DayOfWeek::Friday, "20-Minute Easy Swim").is_none());
    }

    #[test]
    fn test_entries_are_uniquely_keyed() {
        let entries = CorrectionTable::canonical().entries();
        assert_eq!(entries.len(), 9);
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert!(
                    !(a.week == b.week && a.day == b.day),
                    "week {} {} listed twice",
                    a.week,
                    a.day
                );
            }
        }
    }

    #[test]
    fn test_empty_table_never_applies() {
        let mut day = activity(
            3,
            DayOfWeek::Saturday,
            "60-Minute Build Bike",
            "",
            ActivityType::Bike,
        );
        assert!(CorrectionTable::empty().apply(&mut day).is_none());
        assert_eq!(day.activity_type, ActivityType::Bike);
    }
}
