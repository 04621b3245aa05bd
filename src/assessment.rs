//! Whole-snapshot assessment.
//!
//! Combines the individual engines — procedure resolution, per-reading
//! conformity, eccentricity, repeatability, weight adequacy and the
//! completeness checklist — into one report over a calibration record
//! snapshot. This is the entry point the surrounding application (wizard,
//! certificate generator) calls at each workflow step.
//!
//! The assessment is a pure function of `(snapshot, config, today)`:
//! identical inputs produce bit-identical output, and the engine never
//! samples the clock itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compliance::{self, CompletenessReport};
use crate::config::AssessmentConfig;
use crate::evaluation::{
    EccentricityEvaluation, ReadingEvaluation, RepeatabilityResult, evaluate_eccentricity,
    evaluate_reading, statistics,
};
use crate::model::{CalibrationSnapshot, DecisionRule};
use crate::procedure::{self, ProcedureConfig};
use crate::standards::{WeightAssessment, assess_weights};

/// Combined result of assessing one calibration record snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationAssessment {
    /// Resolved procedure requirements; `None` while the instrument
    /// parameters are incomplete
    pub procedure: Option<ProcedureConfig>,
    /// Decision rule that was applied (snapshot's, unless overridden)
    pub decision_rule: DecisionRule,
    /// Per-reading error/MPE/verdict rows, in input order
    pub readings: Vec<ReadingEvaluation>,
    /// Evaluated eccentricity rows, in input order
    pub eccentricity: Vec<EccentricityEvaluation>,
    /// Repeatability statistics; `None` below 2 valid measurements
    pub repeatability: Option<RepeatabilityResult>,
    /// Reference weights, annotated and sorted usable-first
    pub weights: Vec<WeightAssessment>,
    /// Checklist score and missing-field list
    pub completeness: CompletenessReport,
    /// Out-of-range environmental conditions
    pub environment_warnings: Vec<String>,
}

impl CalibrationAssessment {
    /// Number of readings with a failed conformity verdict
    #[must_use]
    pub fn non_conforming_count(&self) -> usize {
        self.readings.iter().filter(|r| r.verdict.is_fail()).count()
            + self
                .eccentricity
                .iter()
                .filter(|r| r.verdict.is_some_and(|v| v.is_fail()))
                .count()
    }

    /// Number of rows whose verdict could not be determined
    #[must_use]
    pub fn indeterminate_count(&self) -> usize {
        self.readings
            .iter()
            .filter(|r| r.verdict.is_indeterminate())
            .count()
            + self
                .eccentricity
                .iter()
                .filter(|r| r.verdict.is_some_and(|v| v.is_indeterminate()))
                .count()
    }

    /// Whether every evaluated row passed and nothing was indeterminate
    #[must_use]
    pub fn all_conforming(&self) -> bool {
        self.non_conforming_count() == 0 && self.indeterminate_count() == 0
    }
}

/// Assess a calibration record snapshot.
///
/// `today` anchors certificate-expiry checks; callers pass the current date
/// (or a fixed one for reproducible reports).
///
/// The guard-band rule consumes the expanded uncertainty `k · uₐ` derived
/// from the repeatability test and each reading's coverage factor; when the
/// repeatability statistics are unavailable and the rule is guard-band, the
/// affected verdicts come back indeterminate rather than silently degrading
/// to simple acceptance.
#[must_use]
pub fn assess_snapshot(
    snapshot: &CalibrationSnapshot,
    config: &AssessmentConfig,
    today: NaiveDate,
) -> CalibrationAssessment {
    let decision_rule = config
        .decision_rule_override
        .unwrap_or(snapshot.decision_rule);
    let procedure = procedure::resolve(&snapshot.instrument);

    let repeatability = statistics(&snapshot.numeric_repeatability_measurements());

    let readings = snapshot
        .readings
        .iter()
        .map(|reading| {
            let expanded_uncertainty = repeatability
                .as_ref()
                .map(|r| r.uncertainty_type_a * reading.coverage_factor);
            evaluate_reading(reading, &snapshot.instrument, decision_rule, expanded_uncertainty)
        })
        .collect();

    let eccentricity = evaluate_eccentricity(&snapshot.eccentricity, &snapshot.instrument);

    let weights = match &procedure {
        Some(p) => assess_weights(
            p.minimum_weight_class,
            &snapshot.weights,
            today,
            config.expiry_warning_days,
        ),
        // Without a resolved procedure there is no required class; report
        // weights unranked rather than judging them against a guess.
        None => Vec::new(),
    };

    let completeness = compliance::score(snapshot, today);
    let environment_warnings = snapshot.environment.warnings();

    let assessment = CalibrationAssessment {
        procedure,
        decision_rule,
        readings,
        eccentricity,
        repeatability,
        weights,
        completeness,
        environment_warnings,
    };
    debug!(
        non_conforming = assessment.non_conforming_count(),
        indeterminate = assessment.indeterminate_count(),
        completeness = assessment.completeness.satisfied_count,
        "assessed calibration snapshot"
    );
    assessment
}
