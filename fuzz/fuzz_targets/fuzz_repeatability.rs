#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the repeatability statistics over raw float sequences.
fuzz_target!(|measurements: Vec<f64>| {
    if let Some(stats) = masscal::evaluation::statistics(&measurements) {
        // n counts only finite entries and never drops below 2
        assert!(stats.n >= 2);
        assert_eq!(
            stats.n,
            measurements.iter().filter(|v| v.is_finite()).count()
        );
    }
});
