//! Session dose history with duplicate suppression.
//!
//! The history is an append-only, insertion-ordered collection of computed
//! dose entries, scoped to one interactive session. Two entries are
//! duplicates when they name the same medication and their weights differ
//! by less than [`WEIGHT_TOLERANCE_KG`](crate::types::WEIGHT_TOLERANCE_KG).

use crate::types::WEIGHT_TOLERANCE_KG;
use crate::DoseEntry;

/// Ordered, append-only store of computed dose entries.
#[derive(Clone, Debug, Default)]
pub struct DoseHistory {
    entries: Vec<DoseEntry>,
}

/// True iff `entries` already holds a dose for `medication` at a weight
/// within the duplicate tolerance of `weight_kg`.
///
/// Medication names are compared exactly. Shared with the chart generator,
/// which dedups against rows it has produced but not yet stored.
pub fn is_duplicate_among(entries: &[DoseEntry], medication: &str, weight_kg: f64) -> bool {
    entries
        .iter()
        .any(|e| e.medication == medication && (e.weight_kg - weight_kg).abs() < WEIGHT_TOLERANCE_KG)
}

impl DoseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a candidate against the stored entries.
    pub fn is_duplicate(&self, medication: &str, weight_kg: f64) -> bool {
        is_duplicate_among(&self.entries, medication, weight_kg)
    }

    /// Append an entry unless it duplicates prior work.
    ///
    /// Returns `true` if the entry was stored, `false` if it was suppressed.
    /// Every insertion path goes through here, so the invariant cannot be
    /// bypassed by a caller that forgets to check first.
    pub fn add(&mut self, entry: DoseEntry) -> bool {
        if self.is_duplicate(&entry.medication, entry.weight_kg) {
            tracing::debug!(
                "Suppressed duplicate dose: {} at {}kg",
                entry.medication,
                entry.weight_kg
            );
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Discard all entries. Irreversible within the session.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries in insertion order, for display and export.
    pub fn all(&self) -> &[DoseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
