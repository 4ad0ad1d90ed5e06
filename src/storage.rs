// ABOUTME: JSON interchange file for daily plan records
// ABOUTME: Whole-sequence read and write with 4-space pretty printing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The interchange file is a JSON array of `DailyRecord` objects. Tools always
//! read the full sequence, transform it in memory, and write the full sequence
//! back; callers that share a file must serialize those cycles themselves.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use sprint_plan_core::{DailyRecord, PlanError, PlanResult};
use tracing::{debug, info};

/// Indentation used by the interchange file
const INDENT: &[u8] = b"    ";

/// Render records as the interchange JSON text (trailing newline included)
///
/// # Errors
/// Returns `PlanError::Serialization` if encoding fails
pub fn to_json_string(records: &[DailyRecord]) -> PlanResult<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    buffer.push(b'\n');
    String::from_utf8(buffer)
        .map_err(|e| PlanError::Io(io::Error::new(ErrorKind::InvalidData, e)))
}

/// Decode records from interchange JSON text
///
/// # Errors
/// Returns `PlanError::Serialization` if the text is not a valid record array
pub fn from_json_str(json: &str) -> PlanResult<Vec<DailyRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Read the whole plan from an interchange file
///
/// # Errors
/// Returns `PlanError::MissingInputFile` if the file does not exist, and I/O or
/// decoding errors otherwise
pub fn read_plan(path: &Path) -> PlanResult<Vec<DailyRecord>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            PlanError::MissingInputFile {
                path: path.to_path_buf(),
            }
        } else {
            PlanError::Io(e)
        }
    })?;

    let records = from_json_str(&content)?;
    debug!(path = %path.display(), records = records.len(), "Read plan file");
    Ok(records)
}

/// Write the whole plan to an interchange file, replacing its contents
///
/// # Errors
/// Returns I/O or encoding errors
pub fn write_plan(path: &Path, records: &[DailyRecord]) -> PlanResult<()> {
    let json = to_json_string(records)?;
    fs::write(path, json)?;
    info!(path = %path.display(), records = records.len(), "Wrote plan file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sprint_plan_core::ActivityType;

    #[test]
    fn test_json_uses_four_space_indent() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 26).unwrap();
        let json = to_json_string(&[DailyRecord::rest(1, date)]).unwrap();
        assert!(json.starts_with("[\n    {\n        \"week\": 1,"));
        assert!(json.contains("\"dayOfWeek\": \"Monday\""));
        assert!(json.ends_with("]\n"));
    }

    #[test]
    fn test_from_json_str_rejects_bad_type() {
        let json = r#"[{"week":1,"dayOfWeek":"Monday","date":"2025-05-26",
            "activityType":"Yoga","title":"x","details":""}]"#;
        assert!(matches!(from_json_str(json), Err(PlanError::Serialization(_))));
    }

    #[test]
    fn test_from_json_str_accepts_records() {
        let json = r#"[{"week":1,"dayOfWeek":"Monday","date":"2025-05-26",
            "activityType":"Rest","title":"Day Off","details":""}]"#;
        let records = from_json_str(json).unwrap();
        assert_eq!(records[0].activity_type, ActivityType::Rest);
    }
}
