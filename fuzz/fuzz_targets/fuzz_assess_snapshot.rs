#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the snapshot-to-assessment path.
///
/// Feeds arbitrary UTF-8 through JSON deserialization into the full
/// assessment. The engine must be total: any record that deserializes, no
/// matter how sparse or nonsensical its numbers, must assess without
/// panicking.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(snapshot) = serde_json::from_str::<masscal::model::CalibrationSnapshot>(s) else {
        return;
    };
    let config = masscal::config::AssessmentConfig::default();
    let today = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");
    let _ = masscal::assessment::assess_snapshot(&snapshot, &config, today);
});
