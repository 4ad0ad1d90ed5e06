// ABOUTME: Error taxonomy for plan parsing and record tooling
// ABOUTME: Fatal parse errors, file lookup failures, and date-keyed record conflicts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Error Types
//!
//! Parsing failures (`Format`, `Alignment`, `Sequencing`) abort the whole run:
//! downstream consumers assume a complete seven-day-per-week sequence, so no
//! partial output is ever returned. Per-record classification ambiguity is not
//! an error and lives in the parser's diagnostics instead.

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced while parsing a plan or operating on a persisted plan
#[derive(Debug, Error)]
pub enum PlanError {
    /// Banner marker or week-header markers are missing or malformed
    #[error("Format error: {0}")]
    Format(String),

    /// First document day does not line up with the configured start date
    #[error("Alignment error: {0}")]
    Alignment(String),

    /// Calendar sequencing could not produce a Monday..Sunday week
    #[error("Sequencing fault in week {week}: {reason}")]
    Sequencing {
        /// Week being sequenced when the fault was detected
        week: u32,
        /// What went wrong
        reason: String,
    },

    /// A tool could not locate the persisted plan file
    #[error("Plan file not found: {}", path.display())]
    MissingInputFile {
        /// Path that was looked up
        path: PathBuf,
    },

    /// More than one existing record shares a date that must be unique
    #[error("Duplicate date {date}: {count} records share this date")]
    DuplicateDate {
        /// The conflicting date
        date: NaiveDate,
        /// Number of records found for that date
        count: usize,
    },

    /// No record exists for a date that a tool needs to address
    #[error("No record found for date {date}")]
    RecordNotFound {
        /// The date that was looked up
        date: NaiveDate,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding or decoding failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PlanError {
    /// Create a format error
    #[must_use]
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Create an alignment error
    #[must_use]
    pub fn alignment(message: impl Into<String>) -> Self {
        Self::Alignment(message.into())
    }

    /// Create a sequencing fault for the given week
    #[must_use]
    pub fn sequencing(week: u32, reason: impl Into<String>) -> Self {
        Self::Sequencing {
            week,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Stable machine-readable code for this error
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Format(_) => "FORMAT_ERROR",
            Self::Alignment(_) => "ALIGNMENT_ERROR",
            Self::Sequencing { .. } => "SEQUENCING_ERROR",
            Self::MissingInputFile { .. } => "MISSING_INPUT_FILE",
            Self::DuplicateDate { .. } => "DUPLICATE_DATE",
            Self::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Whether this error aborts a parse run
    #[must_use]
    pub const fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            Self::Format(_) | Self::Alignment(_) | Self::Sequencing { .. }
        )
    }
}

/// Result type alias for plan operations
pub type PlanResult<T> = Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PlanError::format("x").code(), "FORMAT_ERROR");
        assert_eq!(PlanError::alignment("x").code(), "ALIGNMENT_ERROR");
        assert_eq!(
            PlanError::MissingInputFile {
                path: PathBuf::from("training_plan.json")
            }
            .code(),
            "MISSING_INPUT_FILE"
        );
    }

    #[test]
    fn test_parse_failure_classification() {
        assert!(PlanError::format("banner").is_parse_failure());
        assert!(PlanError::sequencing(3, "gap").is_parse_failure());
        assert!(!PlanError::config("bad date").is_parse_failure());
    }

    #[test]
    fn test_display_includes_context() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
        let message = PlanError::DuplicateDate { date, count: 2 }.to_string();
        assert!(message.contains("2025-08-17"));
        assert!(message.contains('2'));
    }
}
