//! Numeric evaluation of entered measurements: reading errors and conformity
//! verdicts, repeatability statistics and the eccentricity test.
//!
//! Everything here is a pure function over its arguments. The single failure
//! mode is an indeterminate result (`Option`/[`Verdict::Indeterminate`]);
//! nothing panics and nothing substitutes a default numeric value for
//! missing data.

mod eccentricity;
mod reading;
mod repeatability;

pub use eccentricity::{EccentricityEvaluation, evaluate_eccentricity};
pub use reading::{
    IndeterminateReason, ReadingEvaluation, Verdict, conformity, evaluate_reading, signed_error,
};
pub use repeatability::{RepeatabilityResult, statistics};
