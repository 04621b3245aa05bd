//! **A calculation and conformity engine for weighing-instrument calibration.**
//!
//! `masscal` turns raw field measurements from a balance calibration into
//! certified pass/fail metrology results under the OIML R76 legal-metrology
//! regime: accuracy classes, maximum-permissible-error tables, decision
//! rules, repeatability statistics, reference-weight adequacy and an
//! ISO 17025-style completeness checklist.
//!
//! The engine is a set of pure, deterministic functions over an input
//! snapshot. It performs no I/O, persists nothing, and renders nothing; the
//! surrounding application (acquisition wizard, certificate generator)
//! supplies the snapshot and consumes the structured results.
//!
//! ## Key Features
//!
//! - **Procedure resolution**: accuracy class, verification division `e` and
//!   capacity resolve to the test requirements — minimum reference-weight
//!   class, display precision, minimum linearity points.
//! - **MPE tables**: statically declared OIML R76 error bands per class with
//!   a single generic band scan; in-use verification doubles the tolerance.
//! - **Conformity verdicts**: three decision rules (`simple`, `guard_band`,
//!   `shared_risk`) producing a three-valued verdict — an out-of-range test
//!   point or a missing uncertainty is *indeterminate*, never silently
//!   non-conforming.
//! - **Repeatability statistics**: sample standard deviation and Type-A
//!   standard uncertainty from repeated indications.
//! - **Weight adequacy**: OIML R111 class ranking of the laboratory's
//!   reference-weight pool against the instrument's requirements, with
//!   certificate-expiry flagging.
//! - **Completeness scoring**: a fixed, ordered checklist over the record
//!   with a deterministic missing-field list.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the [`CalibrationSnapshot`] record and its parts —
//!   instrument profile, readings, reference weights. Mirrors the externally
//!   persisted calibration record schema.
//! - **[`procedure`]**: procedure resolution and the MPE tables.
//! - **[`evaluation`]**: reading errors, conformity verdicts, repeatability
//!   and eccentricity evaluation.
//! - **[`standards`]**: reference-weight adequacy ranking.
//! - **[`compliance`]**: the completeness checklist and scorer.
//! - **[`assessment`]**: the combined whole-snapshot entry point.
//!
//! ## Getting Started: Assessing a Snapshot
//!
//! ```
//! use chrono::NaiveDate;
//! use masscal::config::AssessmentConfig;
//! use masscal::model::{
//!     CalibrationSnapshot, InstrumentProfile, PrecisionClass, Reading, VerificationType,
//! };
//!
//! let snapshot = CalibrationSnapshot {
//!     instrument: InstrumentProfile::new(
//!         PrecisionClass::III,
//!         0.005,
//!         15.0,
//!         "kg",
//!         VerificationType::Initial,
//!     ),
//!     readings: vec![Reading::new(5.0, 5.002)],
//!     ..CalibrationSnapshot::default()
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
//! let report = masscal::assess_snapshot(&snapshot, &AssessmentConfig::default(), today);
//!
//! assert!(report.readings[0].verdict.is_pass());
//! println!(
//!     "completeness: {}/{}",
//!     report.completeness.satisfied_count, report.completeness.total_count
//! );
//! ```
//!
//! ## Indeterminate Results
//!
//! The engine has exactly one failure mode: an indeterminate result for
//! insufficient or invalid input. Numeric results use `Option`; conformity
//! uses [`Verdict`](evaluation::Verdict) with an explicit
//! `Indeterminate(reason)` variant. Nothing is ever coerced to zero or to a
//! failing verdict, because a fabricated zero error would be
//! indistinguishable from a genuinely perfect reading.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize↔f64 casts appear in the statistics and scoring
    // paths; all values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `mpe`/`mean` are clear in context
    clippy::similar_names
)]

pub mod assessment;
pub mod cli;
pub mod compliance;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod model;
pub mod procedure;
pub mod standards;

// Re-export main types for convenience
pub use assessment::{CalibrationAssessment, assess_snapshot};
pub use compliance::{ChecklistField, CompletenessReport};
pub use config::{AssessmentConfig, ConfigError, Validatable};
pub use error::{CalError, ErrorContext, Result};
pub use evaluation::{
    IndeterminateReason, ReadingEvaluation, RepeatabilityResult, Verdict, conformity,
    signed_error, statistics,
};
pub use model::{
    CalibrationSnapshot, DecisionRule, InstrumentProfile, PrecisionClass, Reading,
    ReferenceWeight, VerificationType, WeightClass,
};
pub use procedure::{ProcedureConfig, SuggestedPoints, mpe_for_load, resolve, suggest_points};
pub use standards::{WeightAssessment, assess_weights};
