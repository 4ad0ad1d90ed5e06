// ABOUTME: Canonical constants for the 12-week sprint triathlon plan
// ABOUTME: Start date, banner marker, rest-day defaults, and race-day patch values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan constants organized by concern.

/// Document structure and calendar anchoring
pub mod plan {
    use chrono::NaiveDate;

    /// Marker line that ends the introductory banner of the canonical document
    pub const BANNER_MARKER: &str = "12 Week Sprint Training Plan";

    /// Canonical plan start date (a Monday) in `YYYY-MM-DD`
    pub const DEFAULT_START_DATE: &str = "2025-05-26";

    /// Days in a plan week
    pub const DAYS_PER_WEEK: usize = 7;

    /// Number of weeks in the canonical document
    pub const CANONICAL_WEEKS: u32 = 12;

    /// Date format used in the interchange file and on the command line
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Canonical plan start date as a calendar date
    #[must_use]
    pub fn default_start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 26).unwrap_or_default()
    }
}

/// Rest day titles and details
pub mod rest_day {
    /// Title of an explicit or synthesized rest day
    pub const TITLE: &str = "Day Off";

    /// Details used when a rest day has none
    pub const DEFAULT_DETAILS: &str = "Take the day off.";
}

/// Race-day record patch defaults
pub mod race {
    use chrono::NaiveDate;

    /// Date of the target race in `YYYY-MM-DD`
    pub const DEFAULT_DATE: &str = "2025-08-17";

    /// Title written onto the race-day record
    pub const DEFAULT_TITLE: &str = "Toronto Island Multisport Triathlon";

    /// Race date as a calendar date
    #[must_use]
    pub fn default_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 17).unwrap_or_default()
    }
}

/// External long-run block defaults
pub mod long_run {
    /// Days between consecutive long runs
    pub const DEFAULT_CADENCE_DAYS: u32 = 7;
}
