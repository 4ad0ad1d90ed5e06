// ABOUTME: Main library entry point for the sprint training plan toolkit
// ABOUTME: Parses a free-form weekly plan into dated records and maintains the JSON plan file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Sprint Plan
//!
//! Converts a semi-structured sprint-triathlon training document into a
//! normalized, dated sequence of daily workout records, then offers small
//! tools that operate on the persisted sequence.
//!
//! ## Features
//!
//! - **Parser**: week/day sectioning, keyword classification, literal
//!   corrections, and calendar sequencing with rest-day synthesis
//! - **Storage**: whole-sequence JSON read and write
//! - **Tools**: race-day patching, long-run merging, record verification
//! - **Validation**: read-only consistency report over any sequence
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::fs;
//! use std::path::Path;
//!
//! use sprint_plan::config::PlanConfig;
//! use sprint_plan::parser::PlanParser;
//! use sprint_plan::storage::write_plan;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = PlanConfig::from_env()?;
//!     let text = fs::read_to_string("data/sprint_training_plan.txt")?;
//!     let parsed = PlanParser::from_config(&config).parse(&text)?;
//!     println!("{} records (expected {})", parsed.records.len(), parsed.expected_record_count());
//!     write_plan(Path::new("training_plan.json"), &parsed.records)?;
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Three-stage plan document parser
pub mod parser;

/// JSON interchange file access
pub mod storage;

/// Patch, merge, and verify tools over a persisted sequence
pub mod tools;

/// Read-only plan consistency checks
pub mod validation;

pub use sprint_plan_core::{
    constants, ActivityType, DailyRecord, DayOfWeek, PlanError, PlanResult,
};
