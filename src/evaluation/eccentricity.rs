//! Eccentricity test evaluation.
//!
//! A load of roughly one third of capacity is placed at five platform
//! positions; the center indication is the reference and each off-center
//! indication is compared against it. The deviation at each position must
//! stay within the MPE at the applied load.

use serde::{Deserialize, Serialize};

use crate::model::{EccentricityPosition, EccentricityReading, InstrumentProfile};

use super::reading::{IndeterminateReason, Verdict, signed_error};

/// Evaluated eccentricity row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EccentricityEvaluation {
    pub position: EccentricityPosition,
    /// Load placed at the position
    pub load_applied: Option<f64>,
    /// Indicated value at the position
    pub indication: Option<f64>,
    /// Signed deviation from the center indication; `None` for the center
    /// row itself and while either indication is missing
    pub deviation_from_center: Option<f64>,
    /// Applicable MPE at the applied load
    pub mpe: Option<f64>,
    /// Verdict for off-center rows; `None` for the center (reference) row
    pub verdict: Option<Verdict>,
}

/// Evaluate the eccentricity test rows against an instrument profile.
///
/// The first row at [`EccentricityPosition::Center`] supplies the reference
/// indication. Rows with missing data or without an applicable MPE get an
/// indeterminate verdict; the input is not mutated.
#[must_use]
pub fn evaluate_eccentricity(
    rows: &[EccentricityReading],
    profile: &InstrumentProfile,
) -> Vec<EccentricityEvaluation> {
    let center_indication = rows
        .iter()
        .find(|r| r.position == EccentricityPosition::Center)
        .and_then(EccentricityReading::indicated);

    rows.iter()
        .map(|row| {
            let indication = row.indicated();
            let mpe = row
                .load_applied
                .and_then(|load| profile.mpe_at(load));

            if row.position == EccentricityPosition::Center {
                return EccentricityEvaluation {
                    position: row.position,
                    load_applied: row.load_applied,
                    indication,
                    deviation_from_center: None,
                    mpe,
                    verdict: None,
                };
            }

            let deviation = match (indication, center_indication) {
                (Some(ind), Some(center)) => Some(signed_error(ind, center)),
                _ => None,
            };
            let verdict = match (deviation, mpe) {
                (None, _) => Verdict::Indeterminate(IndeterminateReason::IndicationUnavailable),
                (Some(_), None) => Verdict::Indeterminate(IndeterminateReason::MpeUnavailable),
                (Some(dev), Some(mpe)) => {
                    if dev.abs() <= mpe {
                        Verdict::Pass
                    } else {
                        Verdict::Fail
                    }
                }
            };

            EccentricityEvaluation {
                position: row.position,
                load_applied: row.load_applied,
                indication,
                deviation_from_center: deviation,
                mpe,
                verdict: Some(verdict),
            }
        })
        .collect()
}
