// ABOUTME: Validate command for sprint-plan
// ABOUTME: Prints consistency findings for the plan file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use anyhow::Result;
use sprint_plan::storage::read_plan;
use sprint_plan::validation::{validate_plan, validate_plan_strict};

use super::resolve_plan_file;
use crate::helpers::display::display_validation;

/// Validate the plan file; returns whether it is free of findings
pub fn run(file: Option<PathBuf>, strict: bool) -> Result<bool> {
    let file = resolve_plan_file(file)?;
    let records = read_plan(&file)?;
    let report = if strict {
        validate_plan_strict(&records)
    } else {
        validate_plan(&records)
    };
    display_validation(&report, &file);
    Ok(report.is_valid())
}
