//! Completeness checklist over a calibration record snapshot.
//!
//! A fixed, versioned, ordered list of named predicates mirroring the data an
//! ISO 17025 calibration certificate must carry. Predicates are independent
//! and total: a sub-field that is entirely absent evaluates to unsatisfied,
//! never to a panic, so the scorer works over any partially filled record.
//! The declaration order below is part of the public contract — it fixes the
//! order of `missing_fields` regardless of how the input record was built.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{CalibrationSnapshot, EccentricityPosition};

/// Checklist revision; bump when predicates are added, removed or reordered.
pub const CHECKLIST_VERSION: &str = "1";

/// Minimum complete linearity readings required by the checklist
pub const MIN_LINEARITY_READINGS: usize = 5;
/// Minimum numeric repeatability measurements required by the checklist
pub const MIN_REPEATABILITY_MEASUREMENTS: usize = 6;

/// The checklist predicates, in evaluation (and reporting) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistField {
    EquipmentIdentification,
    PrecisionClass,
    VerificationDivision,
    MaxCapacity,
    Temperature,
    Humidity,
    LaboratoryAddress,
    CalibrationDate,
    CalibrationMethod,
    StandardsUsed,
    StandardCertificatesValid,
    LinearityReadings,
    RepeatabilityMeasurements,
    EccentricityPositions,
    CoverageFactor,
    EnvironmentalConditionsInRange,
}

impl ChecklistField {
    /// All predicates in the documented evaluation order
    #[must_use]
    pub const fn all() -> &'static [ChecklistField] {
        &[
            Self::EquipmentIdentification,
            Self::PrecisionClass,
            Self::VerificationDivision,
            Self::MaxCapacity,
            Self::Temperature,
            Self::Humidity,
            Self::LaboratoryAddress,
            Self::CalibrationDate,
            Self::CalibrationMethod,
            Self::StandardsUsed,
            Self::StandardCertificatesValid,
            Self::LinearityReadings,
            Self::RepeatabilityMeasurements,
            Self::EccentricityPositions,
            Self::CoverageFactor,
            Self::EnvironmentalConditionsInRange,
        ]
    }

    /// Stable machine name used in `missing_fields`
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EquipmentIdentification => "equipment_identification",
            Self::PrecisionClass => "precision_class",
            Self::VerificationDivision => "verification_division",
            Self::MaxCapacity => "max_capacity",
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::LaboratoryAddress => "laboratory_address",
            Self::CalibrationDate => "calibration_date",
            Self::CalibrationMethod => "calibration_method",
            Self::StandardsUsed => "standards_used",
            Self::StandardCertificatesValid => "standard_certificates_valid",
            Self::LinearityReadings => "linearity_readings",
            Self::RepeatabilityMeasurements => "repeatability_measurements",
            Self::EccentricityPositions => "eccentricity_positions",
            Self::CoverageFactor => "coverage_factor",
            Self::EnvironmentalConditionsInRange => "environmental_conditions_in_range",
        }
    }

    /// Human-readable label for "what's missing" messaging
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EquipmentIdentification => "Instrument identification",
            Self::PrecisionClass => "Accuracy class",
            Self::VerificationDivision => "Verification division (e)",
            Self::MaxCapacity => "Maximum capacity (Max)",
            Self::Temperature => "Ambient temperature",
            Self::Humidity => "Relative humidity",
            Self::LaboratoryAddress => "Calibration location",
            Self::CalibrationDate => "Calibration date",
            Self::CalibrationMethod => "Calibration method",
            Self::StandardsUsed => "Reference standards used",
            Self::StandardCertificatesValid => "Valid standard certificates",
            Self::LinearityReadings => "Linearity readings (at least 5 complete)",
            Self::RepeatabilityMeasurements => "Repeatability measurements (at least 6)",
            Self::EccentricityPositions => "Eccentricity test (all 5 positions)",
            Self::CoverageFactor => "Coverage factor (k)",
            Self::EnvironmentalConditionsInRange => "Environmental conditions within range",
        }
    }

    /// Evaluate this predicate against a record snapshot.
    ///
    /// `today` only matters for the certificate-validity predicate.
    #[must_use]
    pub fn is_satisfied(&self, snapshot: &CalibrationSnapshot, today: NaiveDate) -> bool {
        match self {
            Self::EquipmentIdentification => snapshot
                .equipment_identification
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty()),
            // The class is always typed; the predicate exists so the
            // checklist stays meaningful if the field ever becomes optional
            // in the persisted schema.
            Self::PrecisionClass => true,
            Self::VerificationDivision => snapshot.instrument.division().is_some(),
            Self::MaxCapacity => snapshot.instrument.capacity().is_some(),
            Self::Temperature => snapshot.environment.temperature_celsius.is_some(),
            Self::Humidity => snapshot.environment.relative_humidity.is_some(),
            Self::LaboratoryAddress => snapshot
                .laboratory_address
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty()),
            Self::CalibrationDate => snapshot.calibration_date.is_some(),
            Self::CalibrationMethod => snapshot
                .calibration_method
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty()),
            Self::StandardsUsed => !snapshot.weights.is_empty(),
            Self::StandardCertificatesValid => {
                !snapshot.weights.is_empty()
                    && snapshot.weights.iter().all(|w| !w.is_expired(today))
            }
            Self::LinearityReadings => {
                snapshot.complete_readings().count() >= MIN_LINEARITY_READINGS
            }
            Self::RepeatabilityMeasurements => {
                snapshot.numeric_repeatability_measurements().len()
                    >= MIN_REPEATABILITY_MEASUREMENTS
            }
            Self::EccentricityPositions => EccentricityPosition::all().iter().all(|position| {
                snapshot
                    .eccentricity
                    .iter()
                    .any(|row| row.position == *position && row.indicated().is_some())
            }),
            Self::CoverageFactor => {
                snapshot.complete_readings().count() > 0
                    && snapshot
                        .complete_readings()
                        .all(|r| r.coverage_factor.is_finite() && r.coverage_factor > 0.0)
            }
            Self::EnvironmentalConditionsInRange => snapshot.environment.in_recommended_range(),
        }
    }
}

impl std::fmt::Display for ChecklistField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of scoring a record against the checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessReport {
    /// Checklist revision the report was produced with
    pub checklist_version: String,
    /// Predicates satisfied
    pub satisfied_count: usize,
    /// Total predicates evaluated
    pub total_count: usize,
    /// Names of unsatisfied predicates, in checklist order
    pub missing_fields: Vec<String>,
    /// Per-predicate outcome, in checklist order
    pub items: IndexMap<String, bool>,
}

impl CompletenessReport {
    /// Completion percentage, 0–100
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.satisfied_count as f64 / self.total_count as f64 * 100.0
    }

    /// Whether every predicate is satisfied (certificate-generation gate for
    /// the caller; the engine only reports)
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.satisfied_count == self.total_count
    }
}

/// Score a calibration record snapshot against the checklist.
#[must_use]
pub fn score(snapshot: &CalibrationSnapshot, today: NaiveDate) -> CompletenessReport {
    let mut items = IndexMap::with_capacity(ChecklistField::all().len());
    let mut missing_fields = Vec::new();

    for field in ChecklistField::all() {
        let satisfied = field.is_satisfied(snapshot, today);
        items.insert(field.name().to_string(), satisfied);
        if !satisfied {
            missing_fields.push(field.name().to_string());
        }
    }

    let total_count = items.len();
    let satisfied_count = total_count - missing_fields.len();
    debug!(satisfied_count, total_count, "scored completeness checklist");

    CompletenessReport {
        checklist_version: CHECKLIST_VERSION.to_string(),
        satisfied_count,
        total_count,
        missing_fields,
        items,
    }
}
