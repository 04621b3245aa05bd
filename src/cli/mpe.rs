//! MPE command handler.
//!
//! Prints the permissible-error table for an instrument profile, optionally
//! evaluating specific loads.

use crate::error::Result;
use crate::model::{InstrumentProfile, PrecisionClass, VerificationType};
use crate::procedure::{bands_for_class, display_decimals};

use super::exit_codes;

/// Run the mpe command, returning the desired exit code.
pub fn run_mpe(
    class: PrecisionClass,
    e: f64,
    max_capacity: f64,
    verification_type: VerificationType,
    unit: &str,
    loads: &[f64],
) -> Result<i32> {
    let profile = InstrumentProfile::new(class, e, max_capacity, unit, verification_type);
    let decimals = usize::from(display_decimals(e).max(1)) + 1;

    println!(
        "{} — e = {e} {unit}, Max = {max_capacity} {unit}, {}",
        class.label(),
        verification_type.description()
    );
    println!("\nBands (load in multiples of e):");
    for band in bands_for_class(class) {
        let factor = if verification_type.doubles_mpe() {
            2.0
        } else {
            1.0
        };
        let bound = if band.upper_bound_e.is_infinite() {
            format!("≤ Max ({max_capacity} {unit})")
        } else {
            format!("≤ {:.0}e ({} {unit})", band.upper_bound_e, band.upper_bound_e * e)
        };
        println!(
            "  {:<28} MPE ±{:.prec$} {unit}",
            bound,
            band.error_e * e * factor,
            prec = decimals,
        );
    }

    if !loads.is_empty() {
        println!("\nRequested loads:");
        for &load in loads {
            match profile.mpe_at(load) {
                Some(mpe) => {
                    println!("  {load:>12} {unit}  MPE ±{mpe:.prec$} {unit}", prec = decimals);
                }
                None => println!("  {load:>12} {unit}  not applicable"),
            }
        }
    }

    Ok(exit_codes::OK)
}
