//! Configuration management for haulcalc
//!
//! Config stored at: ~/.config/haulcalc/config.toml

use haulcalc_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (table, json)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Method used by `calc` when no id is given
    #[serde(default)]
    pub default_method: Option<String>,

    /// Where `export` writes workbooks when no output path is given
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Directory holding planning fixtures (topographic.toml, requests.csv)
    #[serde(default)]
    pub fixtures_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            default_method: None,
            export_dir: None,
            fixtures_dir: None,
        }
    }
}

pub const DEFAULT_FIXTURES_DIR: &str = "fixtures";
pub const PLAN_FIXTURE: &str = "topographic.toml";

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulcalc");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Fixtures directory; falls back to `fixtures` in the working directory
    pub fn fixtures_dir(&self) -> PathBuf {
        self.fixtures_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURES_DIR))
    }

    /// Default planning fixture inside the fixtures directory
    pub fn plan_fixture_path(&self) -> PathBuf {
        self.fixtures_dir().join(PLAN_FIXTURE)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulcalc Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Default method: {}",
            self.default_method.as_deref().unwrap_or("(none)")
        )?;
        writeln!(
            f,
            "Export dir:     {}",
            self.export_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(next to input)".to_string())
        )?;
        writeln!(f, "Fixtures dir:   {}", self.fixtures_dir().display())?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            output_format: OutputFormat::Json,
            default_method: Some("fleet-ring-route".to_string()),
            export_dir: Some(PathBuf::from("/tmp/exports")),
            fixtures_dir: None,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output_format = \"json\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.default_method.is_none());
    }

    #[test]
    fn test_broken_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output_format = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, haulcalc_types::Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_explicit_fixtures_dir() {
        let config = Config {
            fixtures_dir: Some(PathBuf::from("/data/plans")),
            ..Config::default()
        };
        assert_eq!(
            config.plan_fixture_path(),
            PathBuf::from("/data/plans/topographic.toml")
        );
    }

    #[test]
    fn test_default_fixtures_dir_is_relative() {
        assert_eq!(
            Config::default().plan_fixture_path(),
            PathBuf::from("fixtures/topographic.toml")
        );
    }
}
