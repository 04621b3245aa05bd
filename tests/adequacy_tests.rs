//! Reference-weight adequacy: class ranking, expiry, ordering.

use chrono::NaiveDate;
use masscal::model::{ReferenceWeight, WeightClass};
use masscal::standards::assess_weights;

fn weight(code: &str, class: &str, expiry: Option<&str>) -> ReferenceWeight {
    ReferenceWeight {
        code: code.to_string(),
        nominal_value: Some(1.0),
        unit: Some("kg".to_string()),
        accuracy_class: Some(class.to_string()),
        certificate_expiry: expiry.map(|d| d.parse().unwrap()),
    }
}

fn today() -> NaiveDate {
    "2026-03-01".parse().unwrap()
}

#[test]
fn required_f1_accepts_exactly_e2_and_f1_from_mixed_pool() {
    let pool = [
        weight("P1", "E2", None),
        weight("P2", "F1", None),
        weight("P3", "F2", None),
        weight("P4", "M1", None),
    ];
    let assessed = assess_weights(WeightClass::F1, &pool, today(), 30);

    let adequate: Vec<&str> = assessed
        .iter()
        .filter(|a| a.adequate)
        .map(|a| a.weight.code.as_str())
        .collect();
    assert_eq!(adequate.len(), 2);
    assert!(adequate.contains(&"P1"));
    assert!(adequate.contains(&"P2"));
}

#[test]
fn unrecognized_class_ranks_loosest_never_strictest() {
    // Even against the loosest requirement an unknown designation is
    // inadequate, so a typo can never approve a weight.
    let pool = [weight("P1", "E0", None), weight("P2", "M3", None)];
    let assessed = assess_weights(WeightClass::M3, &pool, today(), 30);

    let unknown = assessed.iter().find(|a| a.weight.code == "P1").unwrap();
    let known = assessed.iter().find(|a| a.weight.code == "P2").unwrap();
    assert!(!unknown.adequate);
    assert!(known.adequate);
    // And the unknown one sorts after the recognized one
    assert_eq!(assessed.last().unwrap().weight.code, "P1");
}

#[test]
fn expired_certificate_disqualifies_even_a_strict_class() {
    let pool = [
        weight("OLD", "E1", Some("2025-12-31")),
        weight("OK", "M1", Some("2027-01-01")),
    ];
    let assessed = assess_weights(WeightClass::M1, &pool, today(), 30);

    assert_eq!(assessed[0].weight.code, "OK");
    assert!(assessed[0].is_usable());
    let old = &assessed[1];
    assert!(old.expired);
    assert!(old.adequate, "class adequacy is independent of expiry");
    assert!(!old.is_usable());
}

#[test]
fn ties_between_usable_weights_break_on_stricter_class() {
    let pool = [
        weight("B-M1", "M1", None),
        weight("A-E2", "E2", None),
        weight("C-F1", "F1", None),
    ];
    let assessed = assess_weights(WeightClass::M1, &pool, today(), 30);
    let order: Vec<&str> = assessed.iter().map(|a| a.weight.code.as_str()).collect();
    assert_eq!(order, vec!["A-E2", "C-F1", "B-M1"]);
}

#[test]
fn missing_class_is_inadequate_and_missing_expiry_is_not_expired() {
    let pool = [ReferenceWeight {
        code: "BARE".to_string(),
        nominal_value: None,
        unit: None,
        accuracy_class: None,
        certificate_expiry: None,
    }];
    let assessed = assess_weights(WeightClass::M3, &pool, today(), 30);
    assert!(!assessed[0].adequate);
    assert!(!assessed[0].expired);
    assert!(!assessed[0].expiring_soon);
}

#[test]
fn expiry_exactly_today_is_still_usable_but_expiring_soon() {
    let pool = [weight("EDGE", "F1", Some("2026-03-01"))];
    let assessed = assess_weights(WeightClass::F1, &pool, today(), 30);
    assert!(!assessed[0].expired);
    assert!(assessed[0].expiring_soon);
    assert!(assessed[0].is_usable());
}
