//! Procedure resolution: instrument parameters → test procedure requirements.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{InstrumentProfile, PrecisionClass, WeightClass};

/// Derived test-procedure requirements for an instrument.
///
/// Recomputed from scratch whenever the instrument parameters change; the
/// config has no identity of its own and is never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureConfig {
    /// Loosest reference-weight class acceptable for this instrument
    pub minimum_weight_class: WeightClass,
    /// Decimal places for displaying readings and errors
    pub display_decimals: u8,
    /// Minimum number of linearity test points
    pub minimum_linearity_points: usize,
    /// Human-readable class label for certificates and UI
    pub class_label: String,
}

/// Loosest acceptable reference-weight class per instrument class.
#[must_use]
pub const fn minimum_weight_class(class: PrecisionClass) -> WeightClass {
    match class {
        PrecisionClass::I => WeightClass::E2,
        PrecisionClass::II => WeightClass::F1,
        PrecisionClass::III => WeightClass::M1,
        PrecisionClass::Iiii => WeightClass::M2,
    }
}

/// Minimum number of linearity test points per instrument class.
#[must_use]
pub const fn minimum_linearity_points(class: PrecisionClass) -> usize {
    match class {
        PrecisionClass::I => 10,
        PrecisionClass::II => 8,
        PrecisionClass::III => 6,
        PrecisionClass::Iiii => 5,
    }
}

/// Decimal places needed to display values with resolution `e`.
///
/// `e = 0.001` → 3, `e = 0.05` → 2, `e ≥ 1` → 0; clamped to at most 6.
#[must_use]
pub fn display_decimals(e: f64) -> u8 {
    if !e.is_finite() || e <= 0.0 || e >= 1.0 {
        return 0;
    }
    let decimals = (-e.log10()).ceil();
    (decimals as u8).min(6)
}

/// Resolve the procedure configuration for an instrument.
///
/// Returns `None` while `e` or `Max` are missing or non-positive — the
/// record is "not yet configurable", which callers surface instead of a
/// default configuration that could silently understate requirements.
#[must_use]
pub fn resolve(profile: &InstrumentProfile) -> Option<ProcedureConfig> {
    let e = profile.division()?;
    let _max = profile.capacity()?;

    let config = ProcedureConfig {
        minimum_weight_class: minimum_weight_class(profile.precision_class),
        display_decimals: display_decimals(e),
        minimum_linearity_points: minimum_linearity_points(profile.precision_class),
        class_label: profile.precision_class.label().to_string(),
    };
    debug!(
        class = %profile.precision_class,
        min_weight_class = %config.minimum_weight_class,
        decimals = config.display_decimals,
        points = config.minimum_linearity_points,
        "resolved procedure configuration"
    );
    Some(config)
}

/// Suggested test loads for an instrument, derived from its procedure
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedPoints {
    /// Linearity loads spread from 10% to 100% of capacity
    pub linearity_loads: Vec<f64>,
    /// Eccentricity load, about one third of capacity
    pub eccentricity_load: f64,
    /// Repeatability load, about half of capacity
    pub repeatability_load: f64,
}

/// Round a load to a whole number of divisions `e`.
fn round_to_division(value: f64, e: f64) -> f64 {
    (value / e).round() * e
}

/// Fraction of capacity for parameter `t ∈ [0, 1]` along the canonical
/// load curve: 10% / 25% / 50% / 75% / 100% when sampled at five evenly
/// spaced points, smooth supersets for higher point counts.
fn load_fraction(t: f64) -> f64 {
    if t <= 0.25 {
        0.10 + 0.60 * t
    } else {
        t
    }
}

/// Suggest test loads for a configured instrument.
///
/// All loads are rounded to whole multiples of `e` (an indication can only
/// ever be a multiple of the division). Returns `None` while the profile is
/// not configured.
#[must_use]
pub fn suggest_points(profile: &InstrumentProfile) -> Option<SuggestedPoints> {
    let e = profile.division()?;
    let max = profile.capacity()?;
    let n = minimum_linearity_points(profile.precision_class);

    let linearity_loads = (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            round_to_division(load_fraction(t) * max, e)
        })
        .collect();

    Some(SuggestedPoints {
        linearity_loads,
        eccentricity_load: round_to_division(max / 3.0, e),
        repeatability_load: round_to_division(max / 2.0, e),
    })
}
