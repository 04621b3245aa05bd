//! Reference-standard (mass standard) adequacy checking.

mod adequacy;

pub use adequacy::{WeightAssessment, assess_weights};
