//! Default catalog of medication presets.
//!
//! This module provides the built-in medications for the menu and merges
//! in any custom profiles declared in the config file.

use crate::types::{Catalog, MedicationProfile};
use once_cell::sync::Lazy;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with the built-in medication presets
///
/// **Note**: For production use, prefer `get_default_catalog()` which
/// returns a cached reference. This function is retained for testing and
/// custom catalog creation.
pub fn build_default_catalog() -> Catalog {
    Catalog {
        medications: vec![
            MedicationProfile {
                name: "Acetaminophen".into(),
                strength_mg: 160.0,
                volume_ml: 5.0,
                rate_mg_per_kg: 15.0,
            },
            MedicationProfile {
                name: "Ibuprofen".into(),
                strength_mg: 100.0,
                volume_ml: 5.0,
                rate_mg_per_kg: 10.0,
            },
            MedicationProfile {
                name: "Diphenhydramine".into(),
                strength_mg: 12.5,
                volume_ml: 5.0,
                rate_mg_per_kg: 1.0,
            },
        ],
    }
}

impl Catalog {
    /// Append custom profiles (from config) after the built-in presets.
    ///
    /// Menu numbering follows catalog order, so customs always sort after
    /// the presets users know by position.
    pub fn extend_with(&mut self, custom: impl IntoIterator<Item = MedicationProfile>) {
        self.medications.extend(custom);
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.medications.is_empty() {
            errors.push("Catalog has no medications".to_string());
        }

        for med in &self.medications {
            if med.name.trim().is_empty() {
                errors.push("Medication has empty name".to_string());
                continue;
            }
            if med.strength_mg <= 0.0 {
                errors.push(format!(
                    "Medication '{}' has non-positive strength {}mg",
                    med.name, med.strength_mg
                ));
            }
            if med.volume_ml <= 0.0 {
                errors.push(format!(
                    "Medication '{}' has non-positive reference volume {}mL",
                    med.name, med.volume_ml
                ));
            }
            if med.rate_mg_per_kg <= 0.0 {
                errors.push(format!(
                    "Medication '{}' has non-positive dose rate {}mg/kg",
                    med.name, med.rate_mg_per_kg
                ));
            }
        }

        // Duplicate names would make history dedup ambiguous
        for (i, med) in self.medications.iter().enumerate() {
            if self.medications[..i].iter().any(|m| m.name == med.name) {
                errors.push(format!("Duplicate medication name '{}'", med.name));
            }
        }

        errors
    }
}
