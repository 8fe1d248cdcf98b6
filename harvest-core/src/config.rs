//! Configuration management for harvest scheduling
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (HARVEST_*)
//! 3. Config file (~/.config/harvest/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::report::OutputFormat;
use crate::{Error, Result};

/// Schedule calculation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Accept negative days to maturity
    pub allow_negative_dtm: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            allow_negative_dtm: true,
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Planting input settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Planting file used when none is given on the command line
    pub path: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub schedule: ScheduleConfig,
    pub output: OutputConfig,
    pub input: InputConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/harvest/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("harvest").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - HARVEST_INPUT: Planting file path
    /// - HARVEST_FORMAT: Output format (table or json)
    ///
    /// An unrecognized HARVEST_FORMAT is logged and ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(input) = std::env::var("HARVEST_INPUT") {
            self.input.path = Some(PathBuf::from(input));
        }

        if let Ok(format) = std::env::var("HARVEST_FORMAT") {
            self.apply_format_override(&format);
        }

        self
    }

    /// Set the output format from a text value, keeping the current format
    /// when the value is not a known format
    pub fn apply_format_override(&mut self, value: &str) {
        match value.parse() {
            Ok(format) => self.output.format = format,
            Err(e) => tracing::warn!(
                value,
                error = %e,
                format = ?self.output.format,
                "Ignoring HARVEST_FORMAT"
            ),
        }
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        input: Option<PathBuf>,
        format: Option<OutputFormat>,
        strict_dtm: bool,
    ) -> Self {
        if let Some(path) = input {
            self.input.path = Some(path);
        }

        if let Some(f) = format {
            self.output.format = f;
        }

        if strict_dtm {
            self.schedule.allow_negative_dtm = false;
        }

        self
    }

    /// Load configuration from `path` (or the default location) with
    /// environment overrides applied
    pub fn load_with_env(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => Self::load_from_file(p)?,
            None => Self::load()?,
        };
        Ok(config.with_env_overrides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.schedule.allow_negative_dtm);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.input.path.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(
            Some(PathBuf::from("beds.toml")),
            Some(OutputFormat::Json),
            true,
        );

        assert_eq!(config.input.path, Some(PathBuf::from("beds.toml")));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.schedule.allow_negative_dtm);
    }

    #[test]
    fn test_cli_overrides_keep_config_values() {
        let mut config = Config::default();
        config.input.path = Some(PathBuf::from("garden.json"));
        let config = config.with_cli_overrides(None, None, false);

        assert_eq!(config.input.path, Some(PathBuf::from("garden.json")));
        assert!(config.schedule.allow_negative_dtm);
    }

    #[test]
    fn test_format_override() {
        let mut config = Config::default();
        config.apply_format_override("json");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_override_is_ignored() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.apply_format_override("csv");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[schedule]
allow_negative_dtm = false

[output]
format = "json"

[input]
path = "/srv/garden/plantings.toml"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.schedule.allow_negative_dtm);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(
            config.input.path,
            Some(PathBuf::from("/srv/garden/plantings.toml"))
        );
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[output]
format = "table"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // schedule section should use defaults
        assert!(config.schedule.allow_negative_dtm);
        assert!(config.input.path.is_none());
    }

    #[test]
    fn test_load_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"csv\"").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
