// ABOUTME: Core types and constants for the sprint training plan parser
// ABOUTME: Foundation crate with error taxonomy, daily record model, and plan constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Sprint Plan Core
//!
//! Foundation crate providing the types shared by the plan parser, the
//! interchange file layer and the record tools. This crate is designed to
//! change infrequently.
//!
//! ## Modules
//!
//! - **errors**: `PlanError` taxonomy and the `PlanResult` alias
//! - **constants**: canonical plan values (start date, banner marker, rest defaults)
//! - **models**: `ActivityType`, `DayOfWeek` and the externally visible `DailyRecord`

/// Error taxonomy shared by the parser and the record tools
pub mod errors;

/// Canonical plan constants
pub mod constants;

/// Core data models (`DailyRecord`, `ActivityType`, `DayOfWeek`)
pub mod models;

pub use errors::{PlanError, PlanResult};
pub use models::{ActivityType, DailyRecord, DayOfWeek};
