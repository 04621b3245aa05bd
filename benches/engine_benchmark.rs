//! Benchmarks for the calibration engine.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use chrono::NaiveDate;
use masscal::assessment::assess_snapshot;
use masscal::config::AssessmentConfig;
use masscal::evaluation::statistics;
use masscal::model::{
    CalibrationSnapshot, InstrumentProfile, PrecisionClass, Reading, VerificationType,
};

fn bench_mpe_lookup(c: &mut Criterion) {
    let profile = InstrumentProfile::new(
        PrecisionClass::III,
        0.005,
        15.0,
        "kg",
        VerificationType::Initial,
    );
    c.bench_function("mpe_for_load", |b| {
        b.iter(|| {
            for i in 1..=100 {
                let load = f64::from(i) * 0.15;
                black_box(profile.mpe_at(black_box(load)));
            }
        });
    });
}

fn bench_repeatability(c: &mut Criterion) {
    let measurements: Vec<f64> = (0..10_000)
        .map(|i| 10.0 + f64::from(i % 7) * 0.001)
        .collect();
    c.bench_function("repeatability_10k", |b| {
        b.iter(|| black_box(statistics(black_box(&measurements))));
    });
}

fn bench_full_assessment(c: &mut Criterion) {
    let snapshot = CalibrationSnapshot {
        instrument: InstrumentProfile::new(
            PrecisionClass::III,
            0.005,
            15.0,
            "kg",
            VerificationType::Initial,
        ),
        readings: (1..=10)
            .map(|i| Reading::new(f64::from(i) * 1.5, f64::from(i) * 1.5 + 0.002))
            .collect(),
        repeatability_measurements: (0..10).map(|i| serde_json::json!(7.5 + f64::from(i % 3) * 0.001)).collect(),
        ..CalibrationSnapshot::default()
    };
    let config = AssessmentConfig::default();
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");

    c.bench_function("assess_snapshot", |b| {
        b.iter(|| black_box(assess_snapshot(black_box(&snapshot), &config, today)));
    });
}

criterion_group!(
    benches,
    bench_mpe_lookup,
    bench_repeatability,
    bench_full_assessment
);
criterion_main!(benches);
