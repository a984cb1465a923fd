#![forbid(unsafe_code)]

//! Core domain model and business logic for the pediatric dose calculator.
//!
//! This crate provides:
//! - Domain types (medication profiles, dose entries, statuses)
//! - The dose engine and dosing-chart generator
//! - Session state and duplicate-suppressing history
//! - Catalog of built-in presets plus config-declared customs
//! - History export (text and CSV)

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod engine;
pub mod history;
pub mod chart;
pub mod session;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use engine::{compute_dose, kg_from_lb, round2};
pub use history::DoseHistory;
pub use chart::{generate_chart, ChartRange};
pub use session::{Session, WeightBounds};
pub use export::{export_history, export_history_csv};
