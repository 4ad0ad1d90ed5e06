// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for sprint-plan
// ABOUTME: Consistent display functions for parse, patch, merge, verify, and validate results

use std::path::Path;

use anyhow::Error;
use sprint_plan::parser::{ParsedPlan, PlanIssue};
use sprint_plan::tools::{PatchOutcome, RecordPatch, VerificationReport};
use sprint_plan::validation::ValidationReport;
use sprint_plan::PlanError;

/// Display the parse result: record count versus expected and review items
pub fn display_parse_summary(parsed: &ParsedPlan, output: &Path) {
    println!("Success Parsed {} weeks", parsed.week_numbers.len());
    println!(
        "   Records: {} (expected {})",
        parsed.records.len(),
        parsed.expected_record_count()
    );
    println!("   Output: {}", output.display());

    if !parsed.count_matches() {
        println!(
            "WARNING Record count {} does not match expected {}",
            parsed.records.len(),
            parsed.expected_record_count()
        );
    }

    if !parsed.issues.is_empty() {
        println!("\nNeeds review:");
        for issue in &parsed.issues {
            let PlanIssue::UnknownActivityType {
                week,
                day,
                date,
                title,
            } = issue;
            println!("   Week {week} {day} ({date}): '{title}' has unknown type");
        }
    }
}

/// Display the patched record and removed test count
pub fn display_patch_outcome(patch: &RecordPatch, outcome: &PatchOutcome, output: &Path) {
    println!("Success Patched record for {}", patch.date);
    println!("   Title: {}", patch.title);
    println!("   Activity Type: {}", patch.activity_type);
    println!("   Test sessions removed: {}", outcome.removed_tests);
    println!("   Records: {}", outcome.records.len());
    println!("   Output: {}", output.display());
}

/// Display merge counts
pub fn display_merge_summary(entries: usize, before: usize, after: usize, output: &Path) {
    println!("Success Merged {entries} long-run entries");
    println!("   Records: {before} -> {after}");
    println!("   Output: {}", output.display());
}

/// Display a per-field verification report
pub fn display_verification(report: &VerificationReport) {
    if report.passed() {
        println!("SUCCESS: Entry for {} is correctly labeled.", report.date);
    } else {
        println!("ERROR: Discrepancy found for entry on {}:", report.date);
    }

    for check in &report.checks {
        if check.passed {
            println!("  {}: '{}' (Correct)", check.field, check.actual);
        } else {
            println!(
                "  {}: '{}' (Expected: '{}')",
                check.field, check.actual, check.expected
            );
        }
    }
}

/// Display validation findings
pub fn display_validation(report: &ValidationReport, file: &Path) {
    println!(
        "Validated {}: {} records across {} weeks",
        file.display(),
        report.record_count,
        report.week_count
    );
    if report.is_valid() {
        println!("Success No issues found");
        return;
    }

    println!("WARNING {} issues found:", report.issues.len());
    for issue in &report.issues {
        println!("   [{}] {issue}", issue.kind());
    }
}

/// Display a failed run with its stable error code
pub fn display_error(error: &Error) {
    match error.downcast_ref::<PlanError>() {
        Some(plan_error) => {
            eprintln!("ERROR [{}]: {plan_error}", plan_error.code());
            if plan_error.is_parse_failure() {
                eprintln!("   No output was written.");
            }
        }
        None => eprintln!("ERROR: {error:#}"),
    }
}
