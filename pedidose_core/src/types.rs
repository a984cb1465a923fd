//! Core domain types for the pediatric dose calculator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Medication profiles (concentration + default dose rate)
//! - Computed dose entries
//! - The medication catalog
//! - Status messages and their severity

use serde::{Deserialize, Serialize};

/// Two weights closer than this are treated as the same patient weight
/// for duplicate suppression.
pub const WEIGHT_TOLERANCE_KG: f64 = 0.01;

/// Pounds per kilogram used by the imperial weight entry path.
pub const LB_PER_KG: f64 = 2.2;

// ============================================================================
// Medication Types
// ============================================================================

/// A liquid medication: strength per reference volume plus the default
/// per-kilogram dose rate.
///
/// Concentration is `strength_mg / volume_ml`. Profiles are immutable once
/// defined; custom profiles can be declared in the config file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MedicationProfile {
    pub name: String,
    pub strength_mg: f64,
    pub volume_ml: f64,
    pub rate_mg_per_kg: f64,
}

impl MedicationProfile {
    /// Human-readable concentration label, e.g. `160mg/5mL`.
    pub fn concentration_label(&self) -> String {
        format!("{}mg/{}mL", self.strength_mg, self.volume_ml)
    }
}

// ============================================================================
// Dose Entry
// ============================================================================

/// Result of one dose calculation.
///
/// Created by the dose engine, immutable after creation, owned by the
/// history store. `volume_ml` is rounded to 2 decimal places.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DoseEntry {
    pub medication: String,
    pub concentration: String,
    pub rate_mg_per_kg: f64,
    pub weight_kg: f64,
    pub total_dose_mg: f64,
    pub volume_ml: f64,
    pub summary: String,
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The ordered set of medications offered by the menu.
///
/// Order is significant: menu numbering follows insertion order, built-in
/// presets first, config customs after.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub medications: Vec<MedicationProfile>,
}

impl Catalog {
    /// Look up a medication by exact name.
    pub fn get(&self, name: &str) -> Option<&MedicationProfile> {
        self.medications.iter().find(|m| m.name == name)
    }

    pub fn len(&self) -> usize {
        self.medications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medications.is_empty()
    }
}

// ============================================================================
// Status Types
// ============================================================================

/// Severity of a user-facing status message.
///
/// The presentation layer maps severity to styling; nothing in the core
/// knows about colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Caution,
    Error,
}

/// One-line status message shown after each operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Status {
    pub level: StatusLevel,
    pub message: String,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            message: message.into(),
        }
    }

    pub fn caution(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Caution,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concentration_label() {
        let med = MedicationProfile {
            name: "Acetaminophen".into(),
            strength_mg: 160.0,
            volume_ml: 5.0,
            rate_mg_per_kg: 15.0,
        };
        assert_eq!(med.concentration_label(), "160mg/5mL");
    }

    #[test]
    fn test_catalog_get_is_exact_match() {
        let catalog = Catalog {
            medications: vec![MedicationProfile {
                name: "Ibuprofen".into(),
                strength_mg: 100.0,
                volume_ml: 5.0,
                rate_mg_per_kg: 10.0,
            }],
        };
        assert!(catalog.get("Ibuprofen").is_some());
        assert!(catalog.get("ibuprofen").is_none());
    }
}
