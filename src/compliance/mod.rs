//! Completeness scoring against the certificate checklist.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use masscal::compliance;
//! use masscal::model::CalibrationSnapshot;
//!
//! let record = CalibrationSnapshot::default();
//! let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
//! let report = compliance::score(&record, today);
//!
//! assert!(!report.is_complete());
//! for field in &report.missing_fields {
//!     println!("missing: {field}");
//! }
//! ```

mod checklist;

pub use checklist::{
    CHECKLIST_VERSION, ChecklistField, CompletenessReport, MIN_LINEARITY_READINGS,
    MIN_REPEATABILITY_MEASUREMENTS, score,
};
