// ABOUTME: Parse command for sprint-plan
// ABOUTME: Reads the plan document, runs the parser, and writes the JSON plan file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use sprint_plan::config::PlanConfig;
use sprint_plan::parser::PlanParser;
use sprint_plan::storage::write_plan;
use sprint_plan::PlanError;
use tracing::info;

use crate::helpers::display::display_parse_summary;

/// Parse `input` and write the records
pub fn run(
    input: &Path,
    output: Option<PathBuf>,
    start_date: Option<NaiveDate>,
    banner_marker: Option<String>,
) -> Result<()> {
    let mut config = PlanConfig::from_env()?;
    if let Some(start_date) = start_date {
        config.start_date = start_date;
    }
    if let Some(marker) = banner_marker {
        config.banner_marker = marker;
    }
    let output = output.unwrap_or_else(|| config.plan_file.clone());

    info!(input = %input.display(), start = %config.start_date, "Parsing plan document");
    let text = fs::read_to_string(input).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            PlanError::MissingInputFile {
                path: input.to_path_buf(),
            }
        } else {
            PlanError::Io(e)
        }
    })?;

    let parsed = PlanParser::from_config(&config).parse(&text)?;
    write_plan(&output, &parsed.records)?;
    display_parse_summary(&parsed, &output);
    Ok(())
}
