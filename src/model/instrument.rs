//! Instrument identification and metrological parameters.

use serde::{Deserialize, Serialize};

/// OIML R76 accuracy class of a non-automatic weighing instrument.
///
/// Classes are ordered from most to least accurate; the ordering is
/// meaningful and used when resolving procedure requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PrecisionClass {
    /// Special accuracy (laboratory balances)
    I,
    /// High accuracy (precision balances)
    II,
    /// Medium accuracy (commercial scales)
    III,
    /// Ordinary accuracy (coarse weighing)
    #[serde(rename = "IIII")]
    Iiii,
}

impl PrecisionClass {
    /// All classes, most accurate first
    #[must_use]
    pub const fn all() -> &'static [PrecisionClass] {
        &[Self::I, Self::II, Self::III, Self::Iiii]
    }

    /// Roman-numeral designation as it appears on the instrument plate
    #[must_use]
    pub const fn designation(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::Iiii => "IIII",
        }
    }

    /// Human-readable OIML wording for the class
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::I => "Class I (special accuracy)",
            Self::II => "Class II (high accuracy)",
            Self::III => "Class III (medium accuracy)",
            Self::Iiii => "Class IIII (ordinary accuracy)",
        }
    }
}

impl std::fmt::Display for PrecisionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.designation())
    }
}

impl std::str::FromStr for PrecisionClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "I" | "i" => Ok(Self::I),
            "II" | "ii" => Ok(Self::II),
            "III" | "iii" => Ok(Self::III),
            "IIII" | "iiii" => Ok(Self::Iiii),
            other => Err(format!(
                "unknown precision class '{other}' (expected I, II, III or IIII)"
            )),
        }
    }
}

/// Regulatory context of the verification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationType {
    /// New or repaired instrument
    #[default]
    Initial,
    /// Periodic recalibration
    Subsequent,
    /// Field/legal inspection with relaxed (doubled) tolerance
    InUse,
}

impl VerificationType {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Subsequent => "subsequent",
            Self::InUse => "in_use",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Initial => "Initial verification (new or repaired instrument)",
            Self::Subsequent => "Subsequent verification (periodic recalibration)",
            Self::InUse => "In-use verification (field inspection, doubled tolerance)",
        }
    }

    /// Whether the in-use doubling of the permissible error applies
    #[must_use]
    pub const fn doubles_mpe(&self) -> bool {
        matches!(self, Self::InUse)
    }
}

impl std::fmt::Display for VerificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Metrological identity of the instrument under calibration.
///
/// `verification_division_e` and `max_capacity` may be absent while the
/// operator is still filling in the record; procedure resolution and MPE
/// lookup report "not configurable" rather than failing in that state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentProfile {
    /// Accuracy class from the instrument plate
    pub precision_class: PrecisionClass,
    /// Verification scale division `e`, in the capacity unit
    #[serde(default)]
    pub verification_division_e: Option<f64>,
    /// Maximum capacity `Max`, in the capacity unit
    #[serde(default)]
    pub max_capacity: Option<f64>,
    /// Unit of capacity and readings (e.g. "kg", "g")
    #[serde(default = "default_capacity_unit")]
    pub capacity_unit: String,
    /// Regulatory context of the test
    #[serde(default)]
    pub verification_type: VerificationType,
}

fn default_capacity_unit() -> String {
    "kg".to_string()
}

impl Default for InstrumentProfile {
    fn default() -> Self {
        Self {
            precision_class: PrecisionClass::III,
            verification_division_e: None,
            max_capacity: None,
            capacity_unit: default_capacity_unit(),
            verification_type: VerificationType::default(),
        }
    }
}

impl InstrumentProfile {
    /// Create a fully specified profile
    #[must_use]
    pub fn new(
        precision_class: PrecisionClass,
        e: f64,
        max_capacity: f64,
        capacity_unit: impl Into<String>,
        verification_type: VerificationType,
    ) -> Self {
        Self {
            precision_class,
            verification_division_e: Some(e),
            max_capacity: Some(max_capacity),
            capacity_unit: capacity_unit.into(),
            verification_type,
        }
    }

    /// `e` when present and positive
    #[must_use]
    pub fn division(&self) -> Option<f64> {
        self.verification_division_e.filter(|e| *e > 0.0)
    }

    /// `Max` when present and positive
    #[must_use]
    pub fn capacity(&self) -> Option<f64> {
        self.max_capacity.filter(|m| *m > 0.0)
    }

    /// Whether `e` and `Max` are both present and positive, i.e. the
    /// profile carries enough data for MPE lookups to be meaningful
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.division().is_some() && self.capacity().is_some()
    }
}
