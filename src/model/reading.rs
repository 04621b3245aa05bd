//! Linearity readings, eccentricity rows and decision rules.

use serde::{Deserialize, Serialize};

/// Policy for converting a measured error and its uncertainty into a
/// pass/fail verdict (ILAC-G8 style).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    /// Conforming iff |error| ≤ MPE; uncertainty not considered
    #[default]
    Simple,
    /// Conforming iff |error| + U ≤ MPE; requires an expanded uncertainty
    GuardBand,
    /// Conforming iff |error| ≤ MPE; uncertainty intentionally ignored as a
    /// documented policy choice shared between laboratory and client
    SharedRisk,
}

impl DecisionRule {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::GuardBand => "guard_band",
            Self::SharedRisk => "shared_risk",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Simple => "Simple acceptance: |error| within MPE",
            Self::GuardBand => "Guarded acceptance: |error| plus expanded uncertainty within MPE",
            Self::SharedRisk => "Shared risk: |error| within MPE, uncertainty ignored by agreement",
        }
    }
}

impl std::fmt::Display for DecisionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One linearity test point as entered in the field.
///
/// Reference value and the increasing indication must both be present for an
/// error to be computable; the decreasing indication is optional (hysteresis
/// check).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Conventional true value of the applied load
    #[serde(default)]
    pub reference_value: Option<f64>,
    /// Indication with increasing load
    #[serde(default)]
    pub indication_increasing: Option<f64>,
    /// Indication with decreasing load
    #[serde(default)]
    pub indication_decreasing: Option<f64>,
    /// Coverage factor for expanded-uncertainty reporting
    #[serde(default = "default_coverage_factor")]
    pub coverage_factor: f64,
    /// Unit of the values in this row
    #[serde(default)]
    pub unit: Option<String>,
}

fn default_coverage_factor() -> f64 {
    2.0
}

impl Default for Reading {
    fn default() -> Self {
        Self {
            reference_value: None,
            indication_increasing: None,
            indication_decreasing: None,
            coverage_factor: default_coverage_factor(),
            unit: None,
        }
    }
}

impl Reading {
    /// Create a complete reading at a reference load
    #[must_use]
    pub fn new(reference_value: f64, indication_increasing: f64) -> Self {
        Self {
            reference_value: Some(reference_value),
            indication_increasing: Some(indication_increasing),
            ..Self::default()
        }
    }

    /// Reference value when present and finite
    #[must_use]
    pub fn reference(&self) -> Option<f64> {
        self.reference_value.filter(|v| v.is_finite())
    }

    /// Increasing indication when present and finite
    #[must_use]
    pub fn indication(&self) -> Option<f64> {
        self.indication_increasing.filter(|v| v.is_finite())
    }

    /// Whether both values needed for an error computation are present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.reference().is_some() && self.indication().is_some()
    }
}

/// Platform position of an eccentricity test load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EccentricityPosition {
    Center,
    Front,
    Back,
    Left,
    Right,
}

impl EccentricityPosition {
    /// The five test positions, center (reference) first
    #[must_use]
    pub const fn all() -> &'static [EccentricityPosition] {
        &[
            Self::Center,
            Self::Front,
            Self::Back,
            Self::Left,
            Self::Right,
        ]
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Front => "front",
            Self::Back => "back",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for EccentricityPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the eccentricity test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EccentricityReading {
    pub position: EccentricityPosition,
    /// Load placed at the position
    #[serde(default)]
    pub load_applied: Option<f64>,
    /// Indicated value at the position
    #[serde(default)]
    pub indication: Option<f64>,
}

impl EccentricityReading {
    #[must_use]
    pub const fn empty(position: EccentricityPosition) -> Self {
        Self {
            position,
            load_applied: None,
            indication: None,
        }
    }

    /// Indication when present and finite
    #[must_use]
    pub fn indicated(&self) -> Option<f64> {
        self.indication.filter(|v| v.is_finite())
    }
}
