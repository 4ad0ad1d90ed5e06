// ABOUTME: Environment-driven configuration for plan parsing and record tools
// ABOUTME: Start date, banner marker, plan file location, and race-day patch values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is resolved in three layers: built-in canonical defaults,
//! then `SPRINT_PLAN_*` environment variables, then command-line flags (applied
//! by the CLI on top of the loaded values).

use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sprint_plan_core::constants::{plan, race};
use sprint_plan_core::{ActivityType, PlanError, PlanResult};

/// Environment variable for the plan start date
pub const ENV_START_DATE: &str = "SPRINT_PLAN_START_DATE";
/// Environment variable for the banner marker
pub const ENV_BANNER_MARKER: &str = "SPRINT_PLAN_BANNER_MARKER";
/// Environment variable for the interchange file path
pub const ENV_PLAN_FILE: &str = "SPRINT_PLAN_FILE";
/// Environment variable for the race date
pub const ENV_RACE_DATE: &str = "SPRINT_PLAN_RACE_DATE";
/// Environment variable for the race title
pub const ENV_RACE_TITLE: &str = "SPRINT_PLAN_RACE_TITLE";

/// Default interchange file name
pub const DEFAULT_PLAN_FILE: &str = "training_plan.json";

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
/// Returns `PlanError::Config` if the value is not a valid calendar date
pub fn parse_date(value: &str) -> PlanResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), plan::DATE_FORMAT).map_err(|e| {
        PlanError::config(format!("invalid date '{value}' (expected YYYY-MM-DD): {e}"))
    })
}

fn date_from_env(key: &str, default: NaiveDate) -> PlanResult<NaiveDate> {
    env::var(key).map_or(Ok(default), |value| {
        NaiveDate::parse_from_str(value.trim(), plan::DATE_FORMAT).map_err(|e| {
            PlanError::config(format!("{key}='{value}' is not a YYYY-MM-DD date: {e}"))
        })
    })
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parsing and storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Monday the first plan week starts on
    pub start_date: NaiveDate,
    /// Marker line ending the document banner
    pub banner_marker: String,
    /// Interchange file read and written by the tools
    pub plan_file: PathBuf,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            start_date: plan::default_start_date(),
            banner_marker: plan::BANNER_MARKER.to_owned(),
            plan_file: PathBuf::from(DEFAULT_PLAN_FILE),
        }
    }
}

impl PlanConfig {
    /// Load configuration from environment, falling back to canonical defaults
    ///
    /// # Errors
    /// Returns `PlanError::Config` if a date variable is malformed or the
    /// banner marker is empty
    pub fn from_env() -> PlanResult<Self> {
        let banner_marker = env_var_or(ENV_BANNER_MARKER, plan::BANNER_MARKER);
        if banner_marker.trim().is_empty() {
            return Err(PlanError::config(format!("{ENV_BANNER_MARKER} must not be empty")));
        }

        Ok(Self {
            start_date: date_from_env(ENV_START_DATE, plan::default_start_date())?,
            banner_marker,
            plan_file: PathBuf::from(env_var_or(ENV_PLAN_FILE, DEFAULT_PLAN_FILE)),
        })
    }
}

/// Replacement values for the race-day record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Date of the race-day record
    pub date: NaiveDate,
    /// Title written onto that record
    pub title: String,
    /// Type written onto that record
    pub activity_type: ActivityType,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            date: race::default_date(),
            title: race::DEFAULT_TITLE.to_owned(),
            activity_type: ActivityType::Race,
        }
    }
}

impl RaceConfig {
    /// Load race configuration from environment
    ///
    /// # Errors
    /// Returns `PlanError::Config` if the race date is malformed
    pub fn from_env() -> PlanResult<Self> {
        Ok(Self {
            date: date_from_env(ENV_RACE_DATE, race::default_date())?,
            title: env_var_or(ENV_RACE_TITLE, race::DEFAULT_TITLE),
            activity_type: ActivityType::Race,
        })
    }
}
