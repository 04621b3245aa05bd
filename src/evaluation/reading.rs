//! Reading error and conformity evaluation.

use serde::{Deserialize, Serialize};

use crate::model::{DecisionRule, InstrumentProfile, Reading};

/// Signed indication error: indicated minus reference, in the reading unit.
///
/// Exact subtraction; no rounding is introduced here and the reference value
/// is never used as a divisor.
#[must_use]
pub fn signed_error(indicated: f64, reference: f64) -> f64 {
    indicated - reference
}

/// Why a conformity verdict could not be stated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndeterminateReason {
    /// Reference value or indication missing from the reading
    IndicationUnavailable,
    /// No applicable MPE (load out of range or instrument not configured)
    MpeUnavailable,
    /// Guard-band rule selected but no expanded uncertainty supplied
    UncertaintyUnavailable,
}

impl IndeterminateReason {
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::IndicationUnavailable => "reference value or indication not entered",
            Self::MpeUnavailable => "no applicable maximum permissible error for this load",
            Self::UncertaintyUnavailable => {
                "guard-band rule requires an expanded uncertainty, none available"
            }
        }
    }
}

/// Three-valued conformity verdict.
///
/// `Indeterminate` is a first-class outcome, not a failure: an out-of-range
/// test point or a missing uncertainty must never be reported as
/// non-conforming, since that would be indistinguishable from a genuine
/// failed reading on the certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// |error| within the acceptance zone of the decision rule
    Pass,
    /// |error| outside the acceptance zone
    Fail,
    /// Not computable from the available data
    Indeterminate(IndeterminateReason),
}

impl Verdict {
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail)
    }

    #[must_use]
    pub const fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Indeterminate(_))
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Indeterminate(_) => "indeterminate",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Conformity of a signed error against an MPE under a decision rule.
///
/// `expanded_uncertainty` is consulted only by [`DecisionRule::GuardBand`];
/// when that rule is selected and no uncertainty is available the verdict is
/// indeterminate rather than silently falling back to simple acceptance.
/// Boundary convention: `|error| == mpe` conforms (non-strict comparison).
#[must_use]
pub fn conformity(
    error: f64,
    mpe: f64,
    rule: DecisionRule,
    expanded_uncertainty: Option<f64>,
) -> Verdict {
    match rule {
        DecisionRule::Simple | DecisionRule::SharedRisk => {
            if error.abs() <= mpe {
                Verdict::Pass
            } else {
                Verdict::Fail
            }
        }
        DecisionRule::GuardBand => match expanded_uncertainty {
            Some(u) if u.is_finite() => {
                if error.abs() + u <= mpe {
                    Verdict::Pass
                } else {
                    Verdict::Fail
                }
            }
            _ => Verdict::Indeterminate(IndeterminateReason::UncertaintyUnavailable),
        },
    }
}

/// Evaluated linearity row: error, applicable MPE and verdict for one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingEvaluation {
    /// Conventional true value of the load
    pub reference_value: Option<f64>,
    /// Indication with increasing load
    pub indication: Option<f64>,
    /// Signed error, when both values above are present
    pub error: Option<f64>,
    /// Applicable MPE at the reference load, when one exists
    pub mpe: Option<f64>,
    /// Expanded uncertainty used by the guard-band rule, when available
    pub expanded_uncertainty: Option<f64>,
    /// Conformity verdict
    pub verdict: Verdict,
}

/// Evaluate one linearity reading against an instrument profile.
///
/// Missing indication data and inapplicable MPEs propagate into an
/// indeterminate verdict; they are never coerced into a failure.
#[must_use]
pub fn evaluate_reading(
    reading: &Reading,
    profile: &InstrumentProfile,
    rule: DecisionRule,
    expanded_uncertainty: Option<f64>,
) -> ReadingEvaluation {
    let reference = reading.reference();
    let indication = reading.indication();

    let error = match (indication, reference) {
        (Some(ind), Some(reference)) => Some(signed_error(ind, reference)),
        _ => None,
    };
    let mpe = reference.and_then(|load| profile.mpe_at(load));

    let verdict = match (error, mpe) {
        (None, _) => Verdict::Indeterminate(IndeterminateReason::IndicationUnavailable),
        (Some(_), None) => Verdict::Indeterminate(IndeterminateReason::MpeUnavailable),
        (Some(error), Some(mpe)) => conformity(error, mpe, rule, expanded_uncertainty),
    };

    ReadingEvaluation {
        reference_value: reference,
        indication,
        error,
        mpe,
        expanded_uncertainty,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PrecisionClass, VerificationType};

    fn profile() -> InstrumentProfile {
        InstrumentProfile::new(
            PrecisionClass::III,
            0.005,
            15.0,
            "kg",
            VerificationType::Initial,
        )
    }

    #[test]
    fn error_is_exact_signed_difference() {
        assert_eq!(signed_error(10.002, 10.0), 10.002 - 10.0);
        assert_eq!(signed_error(9.998, 10.0), 9.998 - 10.0);
        assert_eq!(signed_error(0.0, 0.0), 0.0);
    }

    #[test]
    fn simple_rule_boundary_conforms() {
        assert_eq!(
            conformity(0.005, 0.005, DecisionRule::Simple, None),
            Verdict::Pass
        );
        assert_eq!(
            conformity(-0.005, 0.005, DecisionRule::Simple, None),
            Verdict::Pass
        );
        assert_eq!(
            conformity(0.005_1, 0.005, DecisionRule::Simple, None),
            Verdict::Fail
        );
    }

    #[test]
    fn guard_band_is_stricter_than_simple() {
        // Within MPE but not once uncertainty is added
        assert_eq!(
            conformity(0.004, 0.005, DecisionRule::Simple, None),
            Verdict::Pass
        );
        assert_eq!(
            conformity(0.004, 0.005, DecisionRule::GuardBand, Some(0.002)),
            Verdict::Fail
        );
        assert_eq!(
            conformity(0.002, 0.005, DecisionRule::GuardBand, Some(0.002)),
            Verdict::Pass
        );
    }

    #[test]
    fn guard_band_without_uncertainty_is_indeterminate() {
        assert_eq!(
            conformity(0.001, 0.005, DecisionRule::GuardBand, None),
            Verdict::Indeterminate(IndeterminateReason::UncertaintyUnavailable)
        );
        assert_eq!(
            conformity(0.001, 0.005, DecisionRule::GuardBand, Some(f64::NAN)),
            Verdict::Indeterminate(IndeterminateReason::UncertaintyUnavailable)
        );
    }

    #[test]
    fn shared_risk_ignores_uncertainty() {
        assert_eq!(
            conformity(0.005, 0.005, DecisionRule::SharedRisk, Some(10.0)),
            Verdict::Pass
        );
    }

    #[test]
    fn missing_indication_propagates_as_indeterminate() {
        let reading = Reading {
            reference_value: Some(5.0),
            ..Reading::default()
        };
        let eval = evaluate_reading(&reading, &profile(), DecisionRule::Simple, None);
        assert_eq!(eval.error, None);
        assert_eq!(
            eval.verdict,
            Verdict::Indeterminate(IndeterminateReason::IndicationUnavailable)
        );
    }

    #[test]
    fn out_of_range_load_is_indeterminate_not_fail() {
        let reading = Reading::new(20.0, 20.1); // beyond Max = 15
        let eval = evaluate_reading(&reading, &profile(), DecisionRule::Simple, None);
        assert!(eval.error.is_some());
        assert_eq!(eval.mpe, None);
        assert_eq!(
            eval.verdict,
            Verdict::Indeterminate(IndeterminateReason::MpeUnavailable)
        );
    }

    #[test]
    fn conforming_reading_passes_end_to_end() {
        let reading = Reading::new(5.0, 5.003);
        let eval = evaluate_reading(&reading, &profile(), DecisionRule::Simple, None);
        assert_eq!(eval.error, Some(5.003 - 5.0));
        assert_eq!(eval.mpe, Some(0.005));
        assert_eq!(eval.verdict, Verdict::Pass);
    }
}
