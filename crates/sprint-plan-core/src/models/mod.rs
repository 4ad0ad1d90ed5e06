// ABOUTME: Core data models for the sprint training plan
// ABOUTME: Re-exports ActivityType, DayOfWeek and the DailyRecord interchange model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `ActivityType`: workout taxonomy recovered from free-text titles
//! - `DayOfWeek`: the seven canonical English day names used as line markers
//! - `DailyRecord`: one dated day of the plan, the unit of the interchange file

mod activity_type;
mod day;
mod record;

pub use activity_type::ActivityType;
pub use day::DayOfWeek;
pub use record::DailyRecord;
