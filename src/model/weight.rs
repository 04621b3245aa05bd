//! Reference weights (mass standards) and their OIML R111 accuracy classes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OIML R111 accuracy class of a reference weight, strictest first.
///
/// The variant order defines the strictness ranking used by the adequacy
/// checker: `E1` is the strictest, `M3` the loosest. The intermediate
/// `M1-2`/`M2-3` classes are serialized with their hyphenated designations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeightClass {
    E1,
    E2,
    F1,
    F2,
    M1,
    #[serde(rename = "M1-2")]
    M12,
    M2,
    #[serde(rename = "M2-3")]
    M23,
    M3,
}

impl WeightClass {
    /// All classes, strictest first
    #[must_use]
    pub const fn all() -> &'static [WeightClass] {
        &[
            Self::E1,
            Self::E2,
            Self::F1,
            Self::F2,
            Self::M1,
            Self::M12,
            Self::M2,
            Self::M23,
            Self::M3,
        ]
    }

    #[must_use]
    pub const fn designation(&self) -> &'static str {
        match self {
            Self::E1 => "E1",
            Self::E2 => "E2",
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::M1 => "M1",
            Self::M12 => "M1-2",
            Self::M2 => "M2",
            Self::M23 => "M2-3",
            Self::M3 => "M3",
        }
    }

    /// Strictness rank, 1 (strictest) through 9 (loosest)
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::E1 => 1,
            Self::E2 => 2,
            Self::F1 => 3,
            Self::F2 => 4,
            Self::M1 => 5,
            Self::M12 => 6,
            Self::M2 => 7,
            Self::M23 => 8,
            Self::M3 => 9,
        }
    }

    /// Whether this class is at least as strict as `required`
    #[must_use]
    pub const fn satisfies(&self, required: WeightClass) -> bool {
        self.rank() <= required.rank()
    }

    /// Parse a class designation leniently.
    ///
    /// Returns `None` for unrecognized strings; the adequacy checker treats
    /// an unrecognized class as loosest-possible so an unknown weight can
    /// never be approved by accident.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "E1" => Some(Self::E1),
            "E2" => Some(Self::E2),
            "F1" => Some(Self::F1),
            "F2" => Some(Self::F2),
            "M1" => Some(Self::M1),
            "M1-2" | "M12" => Some(Self::M12),
            "M2" => Some(Self::M2),
            "M2-3" | "M23" => Some(Self::M23),
            "M3" => Some(Self::M3),
            _ => None,
        }
    }
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.designation())
    }
}

/// One calibrated mass standard from the laboratory's pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceWeight {
    /// Inventory code of the weight
    pub code: String,
    /// Nominal mass value
    #[serde(default)]
    pub nominal_value: Option<f64>,
    /// Unit of the nominal value
    #[serde(default)]
    pub unit: Option<String>,
    /// Accuracy class designation as recorded (kept as a string so that
    /// unrecognized designations survive round-trips and rank loosest)
    #[serde(default)]
    pub accuracy_class: Option<String>,
    /// Expiry date of the calibration certificate
    #[serde(default)]
    pub certificate_expiry: Option<NaiveDate>,
}

impl ReferenceWeight {
    /// Parsed accuracy class, `None` when absent or unrecognized
    #[must_use]
    pub fn class(&self) -> Option<WeightClass> {
        self.accuracy_class.as_deref().and_then(WeightClass::parse)
    }

    /// Whether the certificate expiry date lies strictly before `today`
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.certificate_expiry.is_some_and(|d| d < today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_order_matches_variant_order() {
        let all = WeightClass::all();
        for pair in all.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn satisfies_is_non_strict() {
        assert!(WeightClass::E2.satisfies(WeightClass::F1));
        assert!(WeightClass::F1.satisfies(WeightClass::F1));
        assert!(!WeightClass::F2.satisfies(WeightClass::F1));
    }

    #[test]
    fn parse_accepts_hyphenated_designations() {
        assert_eq!(WeightClass::parse("m1-2"), Some(WeightClass::M12));
        assert_eq!(WeightClass::parse("E2 "), Some(WeightClass::E2));
        assert_eq!(WeightClass::parse("ASTM-4"), None);
    }

    #[test]
    fn serde_roundtrips_hyphenated_designation() {
        let json = serde_json::to_string(&WeightClass::M23).unwrap();
        assert_eq!(json, "\"M2-3\"");
        let back: WeightClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WeightClass::M23);
    }

    #[test]
    fn weight_expiry_is_strictly_before_today() {
        let weight = ReferenceWeight {
            code: "W-001".to_string(),
            nominal_value: Some(5.0),
            unit: Some("kg".to_string()),
            accuracy_class: Some("F1".to_string()),
            certificate_expiry: NaiveDate::from_ymd_opt(2026, 6, 1),
        };
        let on_the_day = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let after = NaiveDate::from_ymd_opt(2026, 6, 2).unwrap();
        assert!(!weight.is_expired(on_the_day));
        assert!(weight.is_expired(after));
    }
}
