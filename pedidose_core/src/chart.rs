//! Dosing-chart generation across a weight range.
//!
//! A chart repeats the dose engine over `start..=end` at a fixed increment
//! for one medication. Weights are computed index-based (`start + i * step`)
//! rather than by repeated accumulation, so floating-point drift can never
//! add or drop a row at the boundary.

use crate::engine::{compute_dose, round2};
use crate::history::{is_duplicate_among, DoseHistory};
use crate::{DoseEntry, Error, MedicationProfile, Result};

/// Validated weight range for a dosing chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartRange {
    start_kg: f64,
    end_kg: f64,
    step_kg: f64,
}

impl ChartRange {
    /// Validate and build a chart range.
    ///
    /// Rejects non-positive start weights, ranges that run backwards, and
    /// non-positive increments. These are user-facing validation errors:
    /// the caller reports them as a status and generates nothing.
    pub fn new(start_kg: f64, end_kg: f64, step_kg: f64) -> Result<Self> {
        if !start_kg.is_finite() || !end_kg.is_finite() || !step_kg.is_finite() {
            return Err(Error::ChartRange("weights must be finite numbers".into()));
        }
        if start_kg <= 0.0 {
            return Err(Error::ChartRange(format!(
                "start weight must be positive (got {})",
                start_kg
            )));
        }
        if start_kg > end_kg {
            return Err(Error::ChartRange(format!(
                "start weight {} exceeds end weight {}",
                start_kg, end_kg
            )));
        }
        if step_kg <= 0.0 {
            return Err(Error::ChartRange(format!(
                "increment must be positive (got {})",
                step_kg
            )));
        }
        Ok(Self {
            start_kg,
            end_kg,
            step_kg,
        })
    }

    pub fn start_kg(&self) -> f64 {
        self.start_kg
    }

    pub fn end_kg(&self) -> f64 {
        self.end_kg
    }

    pub fn step_kg(&self) -> f64 {
        self.step_kg
    }

    /// Number of increments that fit in the range (row count minus one).
    ///
    /// The small epsilon absorbs representation error in `end - start`, so
    /// a range like 5..=6 at 0.5 yields exactly 2 steps, never 1.
    fn steps(&self) -> u64 {
        ((self.end_kg - self.start_kg) / self.step_kg + 1e-9).floor() as u64
    }
}

/// Generate the dosing chart for one medication.
///
/// Each row's weight is rounded to 2 decimal places before the dose is
/// computed. Rows that would duplicate an entry already in `history`, or a
/// row generated earlier in this call, are dropped silently. The history is
/// not mutated; the caller appends the returned entries. Pure and
/// re-callable: identical arguments produce identical output.
pub fn generate_chart(
    med: &MedicationProfile,
    range: &ChartRange,
    history: &DoseHistory,
) -> Vec<DoseEntry> {
    let steps = range.steps();
    let mut entries: Vec<DoseEntry> = Vec::with_capacity(steps as usize + 1);

    for i in 0..=steps {
        let weight_kg = round2(range.start_kg + i as f64 * range.step_kg);
        if history.is_duplicate(&med.name, weight_kg)
            || is_duplicate_among(&entries, &med.name, weight_kg)
        {
            tracing::debug!("Chart row skipped as duplicate: {}kg", weight_kg);
            continue;
        }
        entries.push(compute_dose(med, weight_kg));
    }

    tracing::debug!(
        "Generated {} chart rows for {} ({}..={} by {})",
        entries.len(),
        med.name,
        range.start_kg,
        range.end_kg,
        range.step_kg
    );
    entries
}
