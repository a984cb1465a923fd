//! History export to timestamped files.
//!
//! The primary export is a plain-text file holding one summary line per
//! history entry, in insertion order. A CSV variant with the full numeric
//! fields is offered alongside it. Both refuse to write when the history
//! is empty; a new file is created per export, named after the moment of
//! the export at second resolution.

use crate::history::DoseHistory;
use crate::{DoseEntry, Error, Result};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Filename stem shared by both export formats.
const EXPORT_STEM: &str = "Pediatric Dosage Summary";

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    medication: String,
    concentration: String,
    rate_mg_per_kg: f64,
    weight_kg: f64,
    total_dose_mg: f64,
    volume_ml: f64,
}

impl From<&DoseEntry> for CsvRow {
    fn from(entry: &DoseEntry) -> Self {
        CsvRow {
            medication: entry.medication.clone(),
            concentration: entry.concentration.clone(),
            rate_mg_per_kg: entry.rate_mg_per_kg,
            weight_kg: entry.weight_kg,
            total_dose_mg: entry.total_dose_mg,
            volume_ml: entry.volume_ml,
        }
    }
}

/// Build the export filename for a given timestamp and extension,
/// e.g. `Pediatric Dosage Summary 20260807_142301.txt`.
pub fn export_filename(timestamp: DateTime<Local>, extension: &str) -> String {
    format!(
        "{} {}.{}",
        EXPORT_STEM,
        timestamp.format("%Y%m%d_%H%M%S"),
        extension
    )
}

/// Write the history as a text file, one summary line per entry.
///
/// Returns the path of the created file. Fails with
/// [`Error::EmptyHistory`] before touching the filesystem if there is
/// nothing to write.
pub fn export_history(history: &DoseHistory, dir: &Path) -> Result<PathBuf> {
    if history.is_empty() {
        return Err(Error::EmptyHistory);
    }

    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(Local::now(), "txt"));

    let mut contents = String::new();
    for entry in history.all() {
        contents.push_str(&entry.summary);
        contents.push('\n');
    }
    std::fs::write(&path, contents)?;

    tracing::info!("Exported {} entries to {:?}", history.len(), path);
    Ok(path)
}

/// Write the history as a CSV file with one record per entry.
pub fn export_history_csv(history: &DoseHistory, dir: &Path) -> Result<PathBuf> {
    if history.is_empty() {
        return Err(Error::EmptyHistory);
    }

    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(Local::now(), "csv"));

    let mut writer = csv::Writer::from_path(&path)?;
    for entry in history.all() {
        writer.serialize(CsvRow::from(entry))?;
    }
    writer.flush()?;

    tracing::info!("Exported {} entries to {:?}", history.len(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_dose;
    use crate::MedicationProfile;
    use chrono::TimeZone;

    fn filled_history() -> DoseHistory {
        let med = MedicationProfile {
            name: "Acetaminophen".into(),
            strength_mg: 160.0,
            volume_ml: 5.0,
            rate_mg_per_kg: 15.0,
        };
        let mut history = DoseHistory::new();
        history.add(compute_dose(&med, 10.0));
        history.add(compute_dose(&med, 12.0));
        history
    }

    #[test]
    fn test_filename_format() {
        let ts = Local.with_ymd_and_hms(2026, 8, 7, 14, 23, 1).unwrap();
        assert_eq!(
            export_filename(ts, "txt"),
            "Pediatric Dosage Summary 20260807_142301.txt"
        );
    }

    #[test]
    fn test_empty_history_creates_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = export_history(&DoseHistory::new(), temp_dir.path());
        assert!(matches!(result, Err(Error::EmptyHistory)));
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_text_export_one_line_per_entry_in_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let history = filled_history();

        let path = export_history(&history, temp_dir.path()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], history.all()[0].summary);
        assert_eq!(lines[1], history.all()[1].summary);
    }

    #[test]
    fn test_text_export_creates_missing_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("exports").join("today");
        let path = export_history(&filled_history(), &nested).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_csv_export_has_header_and_records() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = export_history_csv(&filled_history(), temp_dir.path()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 records
        assert!(lines[0].starts_with("medication,concentration"));
        assert!(lines[1].contains("Acetaminophen"));
    }

    #[test]
    fn test_csv_empty_history_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = export_history_csv(&DoseHistory::new(), temp_dir.path());
        assert!(matches!(result, Err(Error::EmptyHistory)));
    }
}
