// ABOUTME: Patch command for sprint-plan
// ABOUTME: Applies a record patch (race day by default) to the plan file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use sprint_plan::config::RaceConfig;
use sprint_plan::storage::{read_plan, to_json_string, write_plan};
use sprint_plan::tools::{apply_record_patch, RecordPatch};
use sprint_plan::ActivityType;

use super::resolve_plan_file;
use crate::helpers::display::display_patch_outcome;

/// Flags of the patch subcommand
pub struct PatchArgs {
    pub file: Option<PathBuf>,
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub activity_type: Option<ActivityType>,
    pub keep_tests: bool,
    pub output: Option<PathBuf>,
    pub stdout: bool,
}

/// Patch one record and persist the sequence
pub fn run(args: PatchArgs) -> Result<()> {
    let file = resolve_plan_file(args.file)?;
    let race = RaceConfig::from_env()?;
    let patch = RecordPatch {
        date: args.date.unwrap_or(race.date),
        title: args.title.unwrap_or(race.title),
        activity_type: args.activity_type.unwrap_or(race.activity_type),
    };

    let records = read_plan(&file)?;
    let outcome = apply_record_patch(records, &patch, !args.keep_tests)?;

    if args.stdout {
        print!("{}", to_json_string(&outcome.records)?);
        return Ok(());
    }

    let destination = args.output.unwrap_or(file);
    write_plan(&destination, &outcome.records)?;
    display_patch_outcome(&patch, &outcome, &destination);
    Ok(())
}
