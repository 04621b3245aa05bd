//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. Each handler implements the business logic for a specific CLI
//! subcommand and returns the desired process exit code; the binary is the
//! only place that touches the system clock or `std::process::exit`.

mod assess;
mod checklist;
mod mpe;

pub use assess::run_assess;
pub use checklist::run_checklist;
pub use mpe::run_mpe;

use crate::error::{CalError, ErrorContext, Result};
use crate::model::CalibrationSnapshot;
use std::path::Path;

/// Process exit codes shared by the handlers.
pub mod exit_codes {
    /// Everything conforming and computable
    pub const OK: i32 = 0;
    /// Non-conforming readings or an incomplete record
    pub const FINDINGS: i32 = 1;
    /// Error occurred
    pub const ERROR: i32 = 3;
}

/// Load a calibration record snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<CalibrationSnapshot> {
    let content = std::fs::read_to_string(path).map_err(|e| CalError::io(path, e))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing snapshot from {}", path.display()))
}
