//! Procedure derivation for a calibration: class-dependent requirements and
//! the maximum-permissible-error tables.
//!
//! # Usage
//!
//! ```
//! use masscal::model::{InstrumentProfile, PrecisionClass, VerificationType};
//! use masscal::procedure;
//!
//! let profile = InstrumentProfile::new(
//!     PrecisionClass::III,
//!     0.005,
//!     15.0,
//!     "kg",
//!     VerificationType::Initial,
//! );
//!
//! let config = procedure::resolve(&profile).expect("configured profile");
//! assert_eq!(config.minimum_linearity_points, 6);
//!
//! // 1000e → second band → 1.0e
//! assert_eq!(profile.mpe_at(5.0), Some(0.005));
//! ```

mod mpe;
mod resolver;

pub use mpe::{MpeBand, bands_for_class, mpe_for_load};
pub use resolver::{
    ProcedureConfig, SuggestedPoints, display_decimals, minimum_linearity_points,
    minimum_weight_class, resolve, suggest_points,
};
