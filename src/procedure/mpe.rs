//! Maximum permissible error tables (OIML R76-1, Table 6).
//!
//! The regulatory rules are declared as static band tables per accuracy
//! class — an ordered list of `(upper bound, error)` pairs expressed in
//! multiples of the verification division `e` — plus one generic band-scan.
//! Conversion to and from multiples of `e` happens only here; every other
//! module works in absolute values in the instrument's declared unit.
//!
//! Band upper bounds are inclusive: a load exactly at a boundary belongs to
//! the band whose bound equals it, not the next one. The last band of each
//! class is open-ended and is cut off by the instrument's `Max` before the
//! scan runs.

use crate::model::{InstrumentProfile, PrecisionClass, VerificationType};

/// One row of a permissible-error table, in multiples of `e`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MpeBand {
    /// Inclusive upper bound of the band, in multiples of `e`
    pub upper_bound_e: f64,
    /// Permissible error within the band, in multiples of `e`
    pub error_e: f64,
}

const fn band(upper_bound_e: f64, error_e: f64) -> MpeBand {
    MpeBand {
        upper_bound_e,
        error_e,
    }
}

const CLASS_I_BANDS: [MpeBand; 3] = [
    band(50_000.0, 0.5),
    band(200_000.0, 1.0),
    band(f64::INFINITY, 1.5),
];

const CLASS_II_BANDS: [MpeBand; 3] = [
    band(5_000.0, 0.5),
    band(20_000.0, 1.0),
    band(f64::INFINITY, 1.5),
];

const CLASS_III_BANDS: [MpeBand; 3] = [
    band(500.0, 0.5),
    band(2_000.0, 1.0),
    band(f64::INFINITY, 1.5),
];

const CLASS_IIII_BANDS: [MpeBand; 3] = [
    band(50.0, 0.5),
    band(200.0, 1.0),
    band(f64::INFINITY, 1.5),
];

/// Verification-phase MPE bands for an accuracy class, in load order.
#[must_use]
pub const fn bands_for_class(class: PrecisionClass) -> &'static [MpeBand; 3] {
    match class {
        PrecisionClass::I => &CLASS_I_BANDS,
        PrecisionClass::II => &CLASS_II_BANDS,
        PrecisionClass::III => &CLASS_III_BANDS,
        PrecisionClass::Iiii => &CLASS_IIII_BANDS,
    }
}

/// Maximum permissible error at `load`, in the same unit as `e`.
///
/// Returns `None` — "not applicable", never zero — when `e` or `Max` are
/// missing/non-positive, or when the load lies outside `(0, Max]`. Under
/// in-use verification the selected error is doubled after band selection;
/// the doubling never changes which band is selected.
#[must_use]
pub fn mpe_for_load(
    class: PrecisionClass,
    e: Option<f64>,
    max_capacity: Option<f64>,
    verification_type: VerificationType,
    load: f64,
) -> Option<f64> {
    let e = e.filter(|e| *e > 0.0 && e.is_finite())?;
    let max = max_capacity.filter(|m| *m > 0.0 && m.is_finite())?;
    if !load.is_finite() || load <= 0.0 || load > max {
        return None;
    }

    let load_in_e = load / e;
    let band = bands_for_class(class)
        .iter()
        .find(|b| load_in_e <= b.upper_bound_e)?;

    let mut mpe = band.error_e * e;
    if verification_type.doubles_mpe() {
        mpe *= 2.0;
    }
    Some(mpe)
}

impl InstrumentProfile {
    /// Maximum permissible error at `load` for this instrument.
    ///
    /// See [`mpe_for_load`] for the not-applicable conditions.
    #[must_use]
    pub fn mpe_at(&self, load: f64) -> Option<f64> {
        mpe_for_load(
            self.precision_class,
            self.division(),
            self.capacity(),
            self.verification_type,
            load,
        )
    }
}
