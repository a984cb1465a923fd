//! Configuration file support.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/pedidose/config.toml`.
//! Every section is optional; a missing file means defaults throughout.

use crate::session::WeightBounds;
use crate::{Error, MedicationProfile, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub medications: MedicationsConfig,
}

/// Export destination configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
        }
    }
}

/// Weight caution band configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_caution_min_kg")]
    pub caution_min_kg: f64,

    #[serde(default = "default_caution_max_kg")]
    pub caution_max_kg: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            caution_min_kg: default_caution_min_kg(),
            caution_max_kg: default_caution_max_kg(),
        }
    }
}

impl LimitsConfig {
    pub fn bounds(&self) -> WeightBounds {
        WeightBounds {
            caution_min_kg: self.caution_min_kg,
            caution_max_kg: self.caution_max_kg,
        }
    }
}

/// Custom medications appended to the built-in presets
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MedicationsConfig {
    #[serde(default)]
    pub custom: Vec<MedicationProfile>,
}

// Default value functions
fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_caution_min_kg() -> f64 {
    5.0
}

fn default_caution_max_kg() -> f64 {
    99.0
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("pedidose").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.limits.caution_min_kg > self.limits.caution_max_kg {
            return Err(Error::Config(format!(
                "caution_min_kg {} exceeds caution_max_kg {}",
                self.limits.caution_min_kg, self.limits.caution_max_kg
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.limits.caution_min_kg, 5.0);
        assert_eq!(config.limits.caution_max_kg, 99.0);
        assert!(config.medications.custom.is_empty());
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.medications.custom.push(MedicationProfile {
            name: "Amoxicillin".into(),
            strength_mg: 250.0,
            volume_ml: 5.0,
            rate_mg_per_kg: 25.0,
        });
        config.save_to(&path).unwrap();

        let parsed = Config::load_from(&path).unwrap();
        assert_eq!(parsed.medications.custom, config.medications.custom);
        assert_eq!(parsed.limits.caution_max_kg, 99.0);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[limits]
caution_max_kg = 120.0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.limits.caution_max_kg, 120.0);
        assert_eq!(config.limits.caution_min_kg, 5.0); // default
        assert_eq!(config.data.export_dir, PathBuf::from("."));
    }

    #[test]
    fn test_custom_medication_from_toml() {
        let toml_str = r#"
[[medications.custom]]
name = "Cetirizine"
strength_mg = 5.0
volume_ml = 5.0
rate_mg_per_kg = 0.25
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.medications.custom.len(), 1);
        assert_eq!(config.medications.custom[0].name, "Cetirizine");
    }

    #[test]
    fn test_inverted_limits_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[limits]\ncaution_min_kg = 50.0\ncaution_max_kg = 10.0\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(Error::Config(_))
        ));
    }
}
