//! The calibration record snapshot consumed by the engine.
//!
//! The snapshot mirrors the externally persisted calibration record schema:
//! string enums for class/verification/decision-rule, sparse numeric fields
//! while the operator is still filling in the record, and repeatability
//! measurements as loosely typed entries (the acquisition UI stores free-form
//! cells, so non-numeric entries must be tolerated and filtered).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::instrument::InstrumentProfile;
use super::reading::{DecisionRule, EccentricityReading, Reading};
use super::weight::ReferenceWeight;

/// Recommended ambient temperature range, °C
pub const TEMPERATURE_RANGE_CELSIUS: (f64, f64) = (15.0, 25.0);
/// Recommended relative humidity range, %RH
pub const HUMIDITY_RANGE_PERCENT: (f64, f64) = (30.0, 70.0);

/// Ambient conditions at the time of calibration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalConditions {
    /// Temperature, °C
    #[serde(default)]
    pub temperature_celsius: Option<f64>,
    /// Relative humidity, %RH
    #[serde(default)]
    pub relative_humidity: Option<f64>,
    /// Atmospheric pressure, hPa
    #[serde(default)]
    pub pressure_hpa: Option<f64>,
}

impl EnvironmentalConditions {
    /// Whether every recorded condition lies within the recommended range.
    ///
    /// Unrecorded conditions do not count against the record here; the
    /// completeness checklist tracks their presence separately.
    #[must_use]
    pub fn in_recommended_range(&self) -> bool {
        self.warnings().is_empty()
    }

    /// Out-of-range warnings for recorded conditions
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Some(t) = self.temperature_celsius {
            let (lo, hi) = TEMPERATURE_RANGE_CELSIUS;
            if t < lo || t > hi {
                warnings.push(format!(
                    "temperature {t} °C outside recommended range {lo}-{hi} °C"
                ));
            }
        }
        if let Some(h) = self.relative_humidity {
            let (lo, hi) = HUMIDITY_RANGE_PERCENT;
            if h < lo || h > hi {
                warnings.push(format!(
                    "relative humidity {h} %RH outside recommended range {lo}-{hi} %RH"
                ));
            }
        }
        warnings
    }
}

/// Point-in-time snapshot of a calibration record.
///
/// All engine operations are pure functions over this structure; nothing in
/// it is mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalibrationSnapshot {
    /// Unambiguous identification of the instrument (code, serial number…)
    #[serde(default)]
    pub equipment_identification: Option<String>,
    /// Metrological parameters of the instrument
    #[serde(default)]
    pub instrument: InstrumentProfile,
    /// Ambient conditions
    #[serde(default)]
    pub environment: EnvironmentalConditions,
    /// Where the calibration was performed
    #[serde(default)]
    pub laboratory_address: Option<String>,
    /// Date the calibration was performed
    #[serde(default)]
    pub calibration_date: Option<NaiveDate>,
    /// Date the certificate is issued
    #[serde(default)]
    pub issued_date: Option<NaiveDate>,
    /// Calibration method description (e.g. "direct comparison")
    #[serde(default)]
    pub calibration_method: Option<String>,
    /// Decision rule for conformity statements
    #[serde(default)]
    pub decision_rule: DecisionRule,
    /// Linearity test rows
    #[serde(default)]
    pub readings: Vec<Reading>,
    /// Eccentricity test rows
    #[serde(default)]
    pub eccentricity: Vec<EccentricityReading>,
    /// Load applied during the repeatability test
    #[serde(default)]
    pub repeatability_load: Option<f64>,
    /// Repeated indications at the fixed load; entries may be numbers or
    /// free-form strings and are filtered before statistics are computed
    #[serde(default)]
    pub repeatability_measurements: Vec<serde_json::Value>,
    /// Reference weights used
    #[serde(default)]
    pub weights: Vec<ReferenceWeight>,
}

impl CalibrationSnapshot {
    /// Readings with both reference value and increasing indication present
    #[must_use]
    pub fn complete_readings(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter().filter(|r| r.is_complete())
    }

    /// Repeatability entries coerced to finite numbers.
    ///
    /// Accepts JSON numbers and numeric strings; everything else is dropped
    /// before `n` is counted, so a stray annotation in a measurement cell can
    /// never masquerade as a data point.
    #[must_use]
    pub fn numeric_repeatability_measurements(&self) -> Vec<f64> {
        self.repeatability_measurements
            .iter()
            .filter_map(coerce_numeric)
            .filter(|v| v.is_finite())
            .collect()
    }
}

fn coerce_numeric(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
