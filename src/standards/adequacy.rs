//! Reference-weight adequacy assessment.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::{ReferenceWeight, WeightClass};

/// A reference weight annotated against the instrument's requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightAssessment {
    /// The weight as supplied (not mutated)
    pub weight: ReferenceWeight,
    /// Parsed class; `None` when absent or unrecognized
    pub class: Option<WeightClass>,
    /// Whether the class is at least as strict as the required minimum
    pub adequate: bool,
    /// Whether the calibration certificate has expired
    pub expired: bool,
    /// Whether the certificate expires within the warning window
    pub expiring_soon: bool,
}

impl WeightAssessment {
    /// Whether this weight can be used for the calibration as-is
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        self.adequate && !self.expired
    }
}

/// Assess and order a pool of reference weights.
///
/// Each weight is annotated with `adequate` (class at least as strict as
/// `required`) and `expired` (certificate expiry before `today`); weights
/// with an absent or unrecognized class rank loosest and are never adequate,
/// so an unknown designation cannot be approved by accident.
///
/// The returned collection is sorted usable-first, stricter class first on
/// ties, then by inventory code; the input slice is left untouched.
#[must_use]
pub fn assess_weights(
    required: WeightClass,
    weights: &[ReferenceWeight],
    today: NaiveDate,
    expiry_warning_days: u64,
) -> Vec<WeightAssessment> {
    let warning_horizon = today
        .checked_add_days(Days::new(expiry_warning_days))
        .unwrap_or(NaiveDate::MAX);

    let mut assessed: Vec<WeightAssessment> = weights
        .iter()
        .map(|weight| {
            let class = weight.class();
            let adequate = class.is_some_and(|c| c.satisfies(required));
            let expired = weight.is_expired(today);
            let expiring_soon = !expired
                && weight
                    .certificate_expiry
                    .is_some_and(|d| d <= warning_horizon);
            trace!(
                code = %weight.code,
                class = ?class,
                adequate,
                expired,
                "assessed reference weight"
            );
            WeightAssessment {
                weight: weight.clone(),
                class,
                adequate,
                expired,
                expiring_soon,
            }
        })
        .collect();

    assessed.sort_by(|a, b| {
        b.is_usable()
            .cmp(&a.is_usable())
            .then_with(|| strictness_rank(a.class).cmp(&strictness_rank(b.class)))
            .then_with(|| a.weight.code.cmp(&b.weight.code))
    });
    assessed
}

/// Sort key: known classes by rank, unknown classes after everything.
const fn strictness_rank(class: Option<WeightClass>) -> u8 {
    match class {
        Some(c) => c.rank(),
        None => u8::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight(code: &str, class: Option<&str>, expiry: Option<NaiveDate>) -> ReferenceWeight {
        ReferenceWeight {
            code: code.to_string(),
            nominal_value: Some(1.0),
            unit: Some("kg".to_string()),
            accuracy_class: class.map(str::to_string),
            certificate_expiry: expiry,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn adequacy_against_required_f1() {
        let pool = [
            weight("W-E2", Some("E2"), None),
            weight("W-F1", Some("F1"), None),
            weight("W-F2", Some("F2"), None),
            weight("W-M1", Some("M1"), None),
        ];
        let assessed = assess_weights(WeightClass::F1, &pool, today(), 30);
        let adequate: Vec<&str> = assessed
            .iter()
            .filter(|a| a.adequate)
            .map(|a| a.weight.code.as_str())
            .collect();
        assert_eq!(adequate, vec!["W-E2", "W-F1"]);
    }

    #[test]
    fn unrecognized_class_is_never_adequate() {
        let pool = [weight("W-X", Some("ASTM-0"), None)];
        let assessed = assess_weights(WeightClass::M3, &pool, today(), 30);
        assert!(!assessed[0].adequate);
        assert_eq!(assessed[0].class, None);
    }

    #[test]
    fn usable_weights_sort_first_then_stricter_class() {
        let expired = NaiveDate::from_ymd_opt(2025, 1, 1);
        let pool = [
            weight("A", Some("M1"), None),
            weight("B", Some("E2"), expired),
            weight("C", Some("F1"), None),
            weight("D", None, None),
        ];
        let assessed = assess_weights(WeightClass::M1, &pool, today(), 30);
        let order: Vec<&str> = assessed.iter().map(|a| a.weight.code.as_str()).collect();
        // C and A are usable (F1 stricter than M1 first); expired B and
        // classless D follow, B still ranking before D by class.
        assert_eq!(order, vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn expiry_window_flags_expiring_soon() {
        let pool = [
            weight("A", Some("F1"), NaiveDate::from_ymd_opt(2026, 3, 20)),
            weight("B", Some("F1"), NaiveDate::from_ymd_opt(2026, 8, 1)),
            weight("C", Some("F1"), NaiveDate::from_ymd_opt(2026, 2, 1)),
        ];
        let assessed = assess_weights(WeightClass::F1, &pool, today(), 30);
        let by_code = |code: &str| assessed.iter().find(|a| a.weight.code == code).unwrap();
        assert!(by_code("A").expiring_soon && !by_code("A").expired);
        assert!(!by_code("B").expiring_soon);
        assert!(by_code("C").expired && !by_code("C").expiring_soon);
    }

    #[test]
    fn input_is_not_mutated() {
        let pool = vec![weight("Z", Some("M2"), None), weight("A", Some("E1"), None)];
        let before = pool.clone();
        let _ = assess_weights(WeightClass::F1, &pool, today(), 30);
        assert_eq!(pool, before);
    }
}
