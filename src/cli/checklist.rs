//! Checklist command handler.
//!
//! Scores a snapshot against the completeness checklist only, for quick
//! "what's still missing" queries while a record is being filled in.

use chrono::NaiveDate;
use std::path::Path;

use crate::compliance::{ChecklistField, score};
use crate::error::{CalError, Result};

use super::{exit_codes, load_snapshot};

/// Run the checklist command, returning the desired exit code.
pub fn run_checklist(snapshot_path: &Path, today: NaiveDate, json: bool) -> Result<i32> {
    let snapshot = load_snapshot(snapshot_path)?;
    let report = score(&snapshot, today);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(CalError::from)?
        );
    } else {
        println!(
            "Completeness: {}/{} ({:.0}%)",
            report.satisfied_count,
            report.total_count,
            report.percent()
        );
        for field in ChecklistField::all() {
            let satisfied = report.items.get(field.name()).copied().unwrap_or(false);
            let marker = if satisfied { "✓" } else { "✗" };
            println!("  {marker} {}", field.label());
        }
    }

    if report.is_complete() {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::FINDINGS)
    }
}
