//! Configuration management for numberknocker.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration directory name.
const CONFIG_DIR_NAME: &str = "numberknocker";

/// Default checklist file name.
pub const DEFAULT_CHECKLIST_FILE: &str = "phone_privacy_checklist.txt";

/// Default email template file name.
pub const DEFAULT_EMAIL_FILE: &str = "removal_email_template.txt";

/// Upper bound for the pause between browser launches.
const MAX_OPEN_DELAY_MS: u64 = 60_000;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `NUMBERKNOCKER_`)
/// 2. TOML config file at `~/.config/numberknocker/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output file configuration.
    pub output: OutputConfig,
    /// Browser configuration.
    pub browser: BrowserConfig,
}

/// Where the generated documents go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the documents are written to.
    pub directory: PathBuf,
    /// File name of the monitoring checklist.
    pub checklist_file: String,
    /// File name of the removal email template.
    pub email_file: String,
}

/// Browser-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Launch the system browser for accepted sites.
    /// When disabled the URL is only printed.
    pub enabled: bool,
    /// Pause after each browser launch in milliseconds.
    pub open_delay_ms: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            checklist_file: DEFAULT_CHECKLIST_FILE.to_string(),
            email_file: DEFAULT_EMAIL_FILE.to_string(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            open_delay_ms: 2_000,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("NUMBERKNOCKER_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate one specific configuration file.
    ///
    /// Unlike [`Config::load_from`], a missing file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be parsed, or
    /// holds invalid values.
    pub fn load_existing(config_path: &Path) -> Result<Self> {
        if !config_path.is_file() {
            return Err(Error::ConfigNotFound {
                path: config_path.to_path_buf(),
            });
        }
        Self::load_from(Some(config_path.to_path_buf()))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        validate_file_name("checklist_file", &self.output.checklist_file)?;
        validate_file_name("email_file", &self.output.email_file)?;

        if self.output.checklist_file == self.output.email_file {
            return Err(Error::validation(format!(
                "checklist_file and email_file must differ (both are '{}')",
                self.output.checklist_file
            )));
        }

        if self.browser.open_delay_ms > MAX_OPEN_DELAY_MS {
            return Err(Error::validation(format!(
                "open_delay_ms ({}) cannot exceed {MAX_OPEN_DELAY_MS}",
                self.browser.open_delay_ms
            )));
        }

        Ok(())
    }

    /// Full path of the checklist file.
    #[must_use]
    pub fn checklist_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.checklist_file)
    }

    /// Full path of the email template file.
    #[must_use]
    pub fn email_path(&self) -> PathBuf {
        self.output.directory.join(&self.output.email_file)
    }

    /// Get the pause between browser launches as a Duration.
    #[must_use]
    pub fn open_delay(&self) -> Duration {
        Duration::from_millis(self.browser.open_delay_ms)
    }

    /// Return a copy with the output directory replaced.
    #[must_use]
    pub fn with_output_dir(mut self, directory: impl AsRef<Path>) -> Self {
        self.output.directory = directory.as_ref().to_path_buf();
        self
    }
}

fn validate_file_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::validation(format!("{field} must not be empty")));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(Error::validation(format!(
            "{field} must be a plain file name, got '{name}'"
        )));
    }
    Ok(())
}
