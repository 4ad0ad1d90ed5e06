// ABOUTME: Verify command for sprint-plan
// ABOUTME: Checks one record (race day by default) and prints a per-field report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use sprint_plan::config::RaceConfig;
use sprint_plan::storage::read_plan;
use sprint_plan::tools::verify_record;
use sprint_plan::ActivityType;

use super::resolve_plan_file;
use crate::helpers::display::display_verification;

/// Verify one record; returns whether every field matched
pub fn run(
    file: Option<PathBuf>,
    date: Option<NaiveDate>,
    activity_type: Option<ActivityType>,
    title: Option<String>,
) -> Result<bool> {
    let file = resolve_plan_file(file)?;
    let race = RaceConfig::from_env()?;
    let date = date.unwrap_or(race.date);
    let activity_type = activity_type.unwrap_or(race.activity_type);
    let title = title.unwrap_or(race.title);

    let records = read_plan(&file)?;
    let report = verify_record(&records, date, activity_type, &title)?;
    display_verification(&report);
    Ok(report.passed())
}
