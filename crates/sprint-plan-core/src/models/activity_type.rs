// ABOUTME: Workout type taxonomy for daily plan records
// ABOUTME: Serializes as the bare variant name used by the interchange file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PlanError;

/// Type of workout scheduled on a plan day
///
/// `Unknown` is a legitimate value: titles the keyword rules cannot classify
/// are passed through for human review instead of failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    /// Swimming session
    Swim,
    /// Cycling session
    Bike,
    /// Running session
    Run,
    /// Bike immediately followed by a run
    Brick,
    /// Day off
    Rest,
    /// Race day
    Race,
    /// Timed fitness test (swim, bike or run)
    Test,
    /// Title matched no classification rule
    Unknown,
}

impl ActivityType {
    /// All variants in declaration order
    pub const ALL: [Self; 8] = [
        Self::Swim,
        Self::Bike,
        Self::Run,
        Self::Brick,
        Self::Rest,
        Self::Race,
        Self::Test,
        Self::Unknown,
    ];

    /// Name as written in the interchange file
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swim => "Swim",
            Self::Bike => "Bike",
            Self::Run => "Run",
            Self::Brick => "Brick",
            Self::Rest => "Rest",
            Self::Race => "Race",
            Self::Test => "Test",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether a finished plan may contain this type
    ///
    /// Test sessions are stripped by the record patch tool and `Unknown`
    /// entries need review, so neither belongs in a published plan.
    #[must_use]
    pub const fn is_publishable(self) -> bool {
        !matches!(self, Self::Test | Self::Unknown)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlanError::config(format!("Unknown activity type: '{s}'")))
    }
}
