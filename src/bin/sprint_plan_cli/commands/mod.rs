// ABOUTME: Re-exports command modules for sprint-plan
// ABOUTME: Shared plan-file resolution used by every file-based command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod merge;
pub mod parse;
pub mod patch;
pub mod validate;
pub mod verify;

use std::path::PathBuf;

use anyhow::Result;
use sprint_plan::config::PlanConfig;

/// Plan file from the flag, else from configuration
pub fn resolve_plan_file(file: Option<PathBuf>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => Ok(PlanConfig::from_env()?.plan_file),
    }
}
