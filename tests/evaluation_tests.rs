//! Reading evaluation: exact errors, decision rules, indeterminate
//! propagation.

use masscal::evaluation::{IndeterminateReason, Verdict, conformity, signed_error};
use masscal::model::DecisionRule;

#[test]
fn error_is_exact_for_representative_values() {
    let cases = [
        (10.002, 10.0),
        (9.998, 10.0),
        (0.0, 0.0),
        (0.001, 0.0), // zero reference must not divide anything
        (-0.5, 1.5),
        (1e9, 1e9 - 1.0),
    ];
    for (indicated, reference) in cases {
        assert_eq!(
            signed_error(indicated, reference),
            indicated - reference,
            "error must be the exact difference for ({indicated}, {reference})"
        );
    }
}

#[test]
fn simple_rule_non_strict_boundary() {
    assert_eq!(
        conformity(0.01, 0.01, DecisionRule::Simple, None),
        Verdict::Pass,
        "|error| == mpe must conform"
    );
    assert_eq!(
        conformity(-0.01, 0.01, DecisionRule::Simple, None),
        Verdict::Pass
    );
    assert_eq!(
        conformity(0.010_000_1, 0.01, DecisionRule::Simple, None),
        Verdict::Fail
    );
}

#[test]
fn guard_band_never_passes_what_simple_fails() {
    // For any positive uncertainty, guard-band is strictly more
    // conservative than simple acceptance.
    let mpe = 0.01;
    let uncertainties = [0.000_1, 0.002, 0.005, 0.02];
    let errors = [-0.02, -0.011, -0.01, -0.005, 0.0, 0.005, 0.009_9, 0.01, 0.015];
    for u in uncertainties {
        for error in errors {
            let simple = conformity(error, mpe, DecisionRule::Simple, None);
            let guarded = conformity(error, mpe, DecisionRule::GuardBand, Some(u));
            if simple == Verdict::Fail {
                assert_eq!(
                    guarded,
                    Verdict::Fail,
                    "guard-band passed (error {error}, U {u}) where simple failed"
                );
            }
        }
    }
}

#[test]
fn guard_band_requires_uncertainty() {
    let verdict = conformity(0.001, 0.01, DecisionRule::GuardBand, None);
    assert_eq!(
        verdict,
        Verdict::Indeterminate(IndeterminateReason::UncertaintyUnavailable)
    );
    assert!(verdict.is_indeterminate());
    assert!(!verdict.is_fail());
}

#[test]
fn shared_risk_matches_simple_and_ignores_uncertainty() {
    let errors = [-0.02, -0.01, 0.0, 0.01, 0.02];
    for error in errors {
        assert_eq!(
            conformity(error, 0.01, DecisionRule::SharedRisk, Some(99.0)),
            conformity(error, 0.01, DecisionRule::Simple, None),
        );
    }
}

#[test]
fn verdict_serialization_distinguishes_indeterminate_reasons() {
    let verdict = Verdict::Indeterminate(IndeterminateReason::MpeUnavailable);
    let json = serde_json::to_string(&verdict).unwrap();
    assert!(json.contains("indeterminate"));
    assert!(json.contains("mpe_unavailable"));

    let pass = serde_json::to_string(&Verdict::Pass).unwrap();
    assert_eq!(pass, "\"pass\"");
}
