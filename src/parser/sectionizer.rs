// ABOUTME: Splits a plan document into week-numbered blocks and day-named sub-blocks
// ABOUTME: Strips the introductory banner and preserves raw line order within each day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sectionizer
//!
//! The only structural markers in a plan document are `Week <N>` header lines
//! and lines consisting of exactly one English day name. This stage finds
//! those boundaries without interpreting the content between them.

use std::sync::LazyLock;

use regex::Regex;
use sprint_plan_core::{DayOfWeek, PlanError, PlanResult};
use tracing::debug;

/// Matches a line that is only a week header, e.g. `Week 12`
static WEEK_HEADER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*Week[ \t]+(\d+)[ \t\r]*$").ok());

/// Content lines found under one day marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDayBlock {
    /// Week the block belongs to (1-based)
    pub week_number: u32,
    /// Day marker that opened the block
    pub day: DayOfWeek,
    /// Non-empty trimmed lines in document order (may be empty)
    pub lines: Vec<String>,
}

impl RawDayBlock {
    /// Start an empty block for a day marker
    #[must_use]
    pub const fn new(week_number: u32, day: DayOfWeek) -> Self {
        Self {
            week_number,
            day,
            lines: Vec::new(),
        }
    }
}

/// All day blocks of one week, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSection {
    /// Week number from the `Week <N>` header
    pub week_number: u32,
    /// Day blocks as they appeared under the header
    pub days: Vec<RawDayBlock>,
}

/// Drop everything up to and including the banner marker
///
/// # Errors
/// Returns `PlanError::Format` if the marker does not occur in the document
pub fn strip_banner<'a>(text: &'a str, marker: &str) -> PlanResult<&'a str> {
    text.find(marker)
        .map(|position| &text[position + marker.len()..])
        .ok_or_else(|| {
            PlanError::format(format!(
                "banner marker '{marker}' not found in plan document"
            ))
        })
}

/// Split the post-banner text into `(week_number, block_text)` pairs
///
/// Text before the first header is discarded. Week numbers must be at least 1
/// and strictly increasing; they need not be consecutive.
///
/// # Errors
/// Returns `PlanError::Format` if no week header is present, a week number is
/// zero or unparsable, or week numbers go backwards
pub fn split_weeks(body: &str) -> PlanResult<Vec<(u32, &str)>> {
    let pattern = WEEK_HEADER
        .as_ref()
        .ok_or_else(|| PlanError::format("week header pattern failed to compile"))?;

    let mut headers = Vec::new();
    for captures in pattern.captures_iter(body) {
        let (Some(header), Some(number)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let week_number: u32 = number.as_str().parse().map_err(|e| {
            PlanError::format(format!("invalid week number '{}': {e}", number.as_str()))
        })?;
        if week_number == 0 {
            return Err(PlanError::format("week numbers start at 1, found 'Week 0'"));
        }
        headers.push((week_number, header.start(), header.end()));
    }

    if headers.is_empty() {
        return Err(PlanError::format(
            "no 'Week <N>' headers found after the banner",
        ));
    }

    let mut weeks: Vec<(u32, &str)> = Vec::with_capacity(headers.len());
    for (index, &(week_number, _, content_start)) in headers.iter().enumerate() {
        if let Some(&(previous, _)) = weeks.last() {
            if week_number <= previous {
                return Err(PlanError::format(format!(
                    "week {week_number} follows week {previous}; weeks must increase"
                )));
            }
        }
        let content_end = headers
            .get(index + 1)
            .map_or(body.len(), |&(_, next_start, _)| next_start);
        weeks.push((week_number, &body[content_start..content_end]));
    }

    Ok(weeks)
}

/// Scan one week block into day blocks
///
/// Lines are trimmed and blank lines dropped. A day marker closes the previous
/// block even when it collected no content, so a bare day header still yields a
/// (degenerate) block. Lines before the first day marker are ignored.
#[must_use]
pub fn split_days(week_number: u32, block: &str) -> Vec<RawDayBlock> {
    let mut days = Vec::new();
    let mut current: Option<RawDayBlock> = None;

    for line in block.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(day) = DayOfWeek::from_marker(line) {
            if let Some(finished) = current.replace(RawDayBlock::new(week_number, day)) {
                days.push(finished);
            }
        } else if let Some(open) = current.as_mut() {
            open.lines.push(line.to_owned());
        } else {
            debug!(week = week_number, line, "Ignoring text before first day marker");
        }
    }

    days.extend(current);
    days
}

/// Run the full sectionizing stage over a document
///
/// # Errors
/// Returns `PlanError::Format` if the banner marker or week headers are missing
pub fn sectionize(text: &str, banner_marker: &str) -> PlanResult<Vec<WeekSection>> {
    let body = strip_banner(text, banner_marker)?;
    let sections = split_weeks(body)?
        .into_iter()
        .map(|(week_number, block)| WeekSection {
            week_number,
            days: split_days(week_number, block),
        })
        .collect::<Vec<_>>();

    debug!(weeks = sections.len(), "Sectionized plan document");
    Ok(sections)
}
