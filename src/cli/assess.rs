//! Assess command handler.
//!
//! Runs the full snapshot assessment and prints it as a plain-text report or
//! as JSON for downstream tooling.

use chrono::NaiveDate;
use std::path::Path;

use crate::assessment::{CalibrationAssessment, assess_snapshot};
use crate::config::{AssessmentConfig, Validatable};
use crate::error::{CalError, Result};
use crate::evaluation::Verdict;
use crate::model::DecisionRule;

use super::{exit_codes, load_snapshot};

/// Run the assess command, returning the desired exit code.
pub fn run_assess(
    snapshot_path: &Path,
    rule_override: Option<DecisionRule>,
    today: NaiveDate,
    json: bool,
) -> Result<i32> {
    let config = AssessmentConfig {
        decision_rule_override: rule_override,
        ..AssessmentConfig::default()
    };
    let errors = config.validate();
    if let Some(first) = errors.first() {
        return Err(CalError::config(first.to_string()));
    }

    let snapshot = load_snapshot(snapshot_path)?;
    let assessment = assess_snapshot(&snapshot, &config, today);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&assessment).map_err(CalError::from)?
        );
    } else {
        print_text_report(&assessment);
    }

    if assessment.non_conforming_count() > 0 || !assessment.completeness.is_complete() {
        Ok(exit_codes::FINDINGS)
    } else {
        Ok(exit_codes::OK)
    }
}

fn print_text_report(assessment: &CalibrationAssessment) {
    match &assessment.procedure {
        Some(p) => {
            println!("Procedure: {}", p.class_label);
            println!(
                "  min weight class {}, {} linearity points, {} decimals",
                p.minimum_weight_class, p.minimum_linearity_points, p.display_decimals
            );
        }
        None => println!("Procedure: not configurable (missing e or Max)"),
    }
    println!("Decision rule: {}", assessment.decision_rule);

    if !assessment.readings.is_empty() {
        println!("\nReadings:");
        for (i, row) in assessment.readings.iter().enumerate() {
            let error = row
                .error
                .map_or_else(|| "—".to_string(), |e| format!("{e:+.4}"));
            let mpe = row
                .mpe
                .map_or_else(|| "—".to_string(), |m| format!("±{m:.4}"));
            println!(
                "  #{:<2} ref {:>10}  error {:>10}  MPE {:>10}  {}",
                i + 1,
                row.reference_value
                    .map_or_else(|| "—".to_string(), |v| format!("{v:.4}")),
                error,
                mpe,
                verdict_marker(row.verdict),
            );
        }
    }

    if !assessment.eccentricity.is_empty() {
        println!("\nEccentricity:");
        for row in &assessment.eccentricity {
            let marker = row
                .verdict
                .map_or_else(|| "REF".to_string(), |v| verdict_marker(v).to_string());
            let deviation = row
                .deviation_from_center
                .map_or_else(|| "—".to_string(), |d| format!("{d:+.4}"));
            println!("  {:<8} deviation {:>10}  {}", row.position, deviation, marker);
        }
    }

    if let Some(rep) = &assessment.repeatability {
        println!("\nRepeatability (n = {}):", rep.n);
        println!(
            "  mean {:.4}  s {:.6}  u_A {:.6}  range {:.4}",
            rep.mean, rep.std_dev, rep.uncertainty_type_a, rep.range
        );
    }

    if !assessment.weights.is_empty() {
        println!("\nReference weights:");
        for w in &assessment.weights {
            let mut flags = Vec::new();
            if !w.adequate {
                flags.push("inadequate class");
            }
            if w.expired {
                flags.push("certificate expired");
            }
            if w.expiring_soon {
                flags.push("expiring soon");
            }
            let status = if flags.is_empty() {
                "ok".to_string()
            } else {
                flags.join(", ")
            };
            println!(
                "  {:<12} {:<6} {}",
                w.weight.code,
                w.class.map_or("?", |c| c.designation()),
                status
            );
        }
    }

    println!(
        "\nCompleteness: {}/{} ({:.0}%)",
        assessment.completeness.satisfied_count,
        assessment.completeness.total_count,
        assessment.completeness.percent()
    );
    for field in &assessment.completeness.missing_fields {
        println!("  missing: {field}");
    }

    for warning in &assessment.environment_warnings {
        println!("warning: {warning}");
    }
}

const fn verdict_marker(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
        Verdict::Indeterminate(_) => "—",
    }
}
