use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::sample_packages;
use crate::export::OutputFormat;
use crate::logging::LogConfig;
use crate::models::SensorPackage;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LogConfig,

    /// Summary output settings
    pub output: OutputSettings,

    /// Sensor packages to process, in order
    pub packages: Vec<SensorPackage>,
}

/// Summary output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Format used for each summary line
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LogConfig::default(),
            output: OutputSettings::default(),
            packages: sample_packages(),
        }
    }
}

/// Configuration management implementation
impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let toml_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fittrack")
            .join("config.toml")
    }

    /// Load the default configuration file, falling back to built-in defaults
    /// when it does not exist
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::default_config_path();

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_uses_sample_batch() {
        let config = AppConfig::default();

        let codes: Vec<&str> = config
            .packages
            .iter()
            .map(|p| p.workout_type.as_str())
            .collect();
        assert_eq!(codes, vec!["SWM", "RUN", "WLK"]);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let toml_str = r#"
            [output]
            format = "json"

            [[packages]]
            workout_type = "RUN"
            data = [15000, 1, 75]
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging, LogConfig::default());
        assert_eq!(config.packages.len(), 1);
        assert_eq!(config.packages[0].data, vec![15000.0, 1.0, 75.0]);
    }

    #[test]
    fn test_config_file_io() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut original_config = AppConfig::default();
        original_config
            .packages
            .push(SensorPackage::new("XYZ", vec![1.0, 2.0, 3.0]));

        original_config.save_to_file(&config_path).unwrap();
        let loaded_config = AppConfig::load_from_file(&config_path).unwrap();

        assert_eq!(loaded_config.packages.len(), 4);
        assert_eq!(loaded_config.packages[3].workout_type, "XYZ");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let err = AppConfig::load_from_file(temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
