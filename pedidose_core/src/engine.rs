//! Dose engine: the arithmetic core of the calculator.
//!
//! Converts a patient weight and a per-kilogram dose rate into a delivered
//! liquid volume for a given medication concentration. Pure functions only;
//! input positivity is the caller's responsibility (prompt loops and chart
//! validation reject non-positive values before anything reaches here).

use crate::types::LB_PER_KG;
use crate::{DoseEntry, MedicationProfile};

/// Round to 2 decimal places, half away from zero.
///
/// `f64::round` rounds half away from zero, which matches the reference
/// behavior of the calculator. Exactness beyond 2 decimals is not a goal.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a weight in pounds to kilograms at 2 decimal places.
pub fn kg_from_lb(lb: f64) -> f64 {
    round2(lb / LB_PER_KG)
}

/// Compute a single dose for `weight_kg` of body weight.
///
/// `total_dose_mg = rate * weight`; the delivered volume scales the total
/// dose by the medication's reference volume over its strength, rounded to
/// 2 decimal places. Deterministic, no side effects, no error conditions
/// given positive inputs.
pub fn compute_dose(med: &MedicationProfile, weight_kg: f64) -> DoseEntry {
    let total_dose_mg = med.rate_mg_per_kg * weight_kg;
    let volume_ml = round2(total_dose_mg * med.volume_ml / med.strength_mg);

    let summary = format!(
        "{} >> Weight: {}kg >> Dose = {:.2} mL",
        med.name, weight_kg, volume_ml
    );

    DoseEntry {
        medication: med.name.clone(),
        concentration: med.concentration_label(),
        rate_mg_per_kg: med.rate_mg_per_kg,
        weight_kg,
        total_dose_mg,
        volume_ml,
        summary,
    }
}
