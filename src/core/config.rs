use crate::locale::strings::Locale;
use crate::report::render::ReportFormat;
use crate::stores::account_store::{DEFAULT_PROGRAM_START_YEAR, DEFAULT_USERS_KEY};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub program: ProgramConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_users_key")]
    pub users_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProgramConfig {
    /// Calendar year counted as program year 1
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WizardConfig {
    /// Only accept the 16 canonical personality codes
    #[serde(default)]
    pub strict_personality: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// Extra or replacement personality → course recommendations
    #[serde(default)]
    pub recommendations: HashMap<String, Vec<String>>,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_users_key() -> String {
    DEFAULT_USERS_KEY.to_string()
}

fn default_start_year() -> i32 {
    DEFAULT_PROGRAM_START_YEAR
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

fn default_console() -> bool {
    false
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            users_key: default_users_key(),
        }
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            locale: Locale::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: ReportFormat::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate storage config
        if self.storage.users_key.trim().is_empty() {
            bail!("users_key must not be empty");
        }

        if self.storage.data_dir.as_os_str().is_empty() {
            bail!("data_dir must not be empty");
        }

        // Validate program config
        if !(2000..=2100).contains(&self.program.start_year) {
            bail!(
                "start_year ({}) must be between 2000 and 2100",
                self.program.start_year
            );
        }

        // Validate logging config
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        // Validate catalog overrides
        for (code, courses) in &self.catalog.recommendations {
            if code.len() != 4 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                bail!("Invalid personality type '{}' in catalog.recommendations", code);
            }
            if courses.iter().any(|c| c.trim().is_empty()) {
                bail!("Empty course name in catalog.recommendations.{}", code);
            }
        }

        Ok(())
    }
}
