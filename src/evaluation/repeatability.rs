//! Repeatability statistics: mean, sample standard deviation and the Type-A
//! standard uncertainty derived from repeated indications at one fixed load.

use serde::{Deserialize, Serialize};

/// Statistics over `n ≥ 2` repeated indications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatabilityResult {
    /// Arithmetic mean of the indications
    pub mean: f64,
    /// Sample standard deviation (n−1 denominator)
    pub std_dev: f64,
    /// Type-A standard uncertainty, `std_dev / sqrt(n)`
    pub uncertainty_type_a: f64,
    /// Spread of the indications, max − min
    pub range: f64,
    /// Number of valid measurements used
    pub n: usize,
}

/// Compute repeatability statistics.
///
/// Non-finite entries are dropped before `n` is counted. Returns `None` for
/// fewer than 2 valid measurements — a standard deviation needs at least two
/// points, and reporting `std_dev = 0` for a single point would fabricate a
/// perfect repeatability figure.
///
/// The sample (n−1) variance denominator is required for metrological
/// correctness and must not be replaced with the population form.
#[must_use]
pub fn statistics(measurements: &[f64]) -> Option<RepeatabilityResult> {
    let valid: Vec<f64> = measurements
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .collect();
    let n = valid.len();
    if n < 2 {
        return None;
    }

    let count = n as f64;
    let mean = valid.iter().sum::<f64>() / count;
    let sum_sq_dev = valid.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
    let std_dev = (sum_sq_dev / (count - 1.0)).sqrt();
    let uncertainty_type_a = std_dev / count.sqrt();

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in &valid {
        min = min.min(v);
        max = max.max(v);
    }

    Some(RepeatabilityResult {
        mean,
        std_dev,
        uncertainty_type_a,
        range: max - min,
        n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn reference_series_to_six_decimals() {
        // Hand-computed: deviations 0, +0.01, −0.01, 0, +0.02, −0.02;
        // Σd² = 0.001; s = sqrt(0.001/5) = 0.01414214; u_A = s/√6.
        let result = statistics(&[10.00, 10.01, 9.99, 10.00, 10.02, 9.98]).unwrap();
        assert_eq!(result.n, 6);
        assert!((result.mean - 10.0).abs() < TOLERANCE);
        assert!((result.std_dev - 0.014_142).abs() < 1e-6 * 10.0);
        assert!((result.uncertainty_type_a - 0.005_774).abs() < 1e-6 * 10.0);
        assert!((result.range - 0.04).abs() < TOLERANCE);
    }

    #[test]
    fn fewer_than_two_points_is_indeterminate() {
        assert_eq!(statistics(&[]), None);
        assert_eq!(statistics(&[10.0]), None);
        // One valid point plus garbage is still one point
        assert_eq!(statistics(&[10.0, f64::NAN, f64::INFINITY]), None);
    }

    #[test]
    fn non_finite_entries_are_filtered_before_counting() {
        let with_noise = statistics(&[10.0, f64::NAN, 10.02, f64::NEG_INFINITY]).unwrap();
        let clean = statistics(&[10.0, 10.02]).unwrap();
        assert_eq!(with_noise, clean);
        assert_eq!(with_noise.n, 2);
    }

    #[test]
    fn sample_not_population_denominator() {
        // Two points a, b: sample s = |a−b|/√2; population would be |a−b|/2.
        let result = statistics(&[1.0, 3.0]).unwrap();
        assert!((result.std_dev - 2.0_f64 / 2.0_f64.sqrt()).abs() < TOLERANCE);
    }

    #[test]
    fn duplicates_are_significant() {
        let spread = statistics(&[5.0, 6.0]).unwrap();
        let dampened = statistics(&[5.0, 6.0, 5.5, 5.5, 5.5, 5.5]).unwrap();
        assert!(dampened.std_dev < spread.std_dev);
    }

    #[test]
    fn identical_inputs_give_bit_identical_output() {
        let input = [10.003, 9.997, 10.001, 10.000, 9.999, 10.002];
        assert_eq!(statistics(&input), statistics(&input));
    }
}
