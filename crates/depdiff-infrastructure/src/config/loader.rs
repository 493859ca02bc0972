//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values using Figment.

use std::env;
use std::path::{Path, PathBuf};

use depdiff_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `DEPDIFF_MATCHER__PARALLEL`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Nested keys use a double underscore (e.g., DEPDIFF_RECONCILE__REQUIRE_SAME_KIND)
        figment = figment.merge(
            Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Render configuration as TOML
    pub fn to_toml(config: &AppConfig) -> Result<String> {
        toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<()> {
        let toml_string = Self::to_toml(config)?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_matcher_config(config)?;
    Ok(())
}

fn validate_matcher_config(config: &AppConfig) -> Result<()> {
    let matcher = &config.matcher;
    for (name, value) in [
        ("fuzzy_equal", matcher.fuzzy_equal),
        ("fuzzy_maybe", matcher.fuzzy_maybe),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::configuration(format!(
                "matcher.{name} must be within [0, 1], got {value}"
            )));
        }
    }
    if matcher.fuzzy_maybe > matcher.fuzzy_equal {
        return Err(Error::configuration(format!(
            "matcher.fuzzy_maybe ({}) cannot exceed matcher.fuzzy_equal ({})",
            matcher.fuzzy_maybe, matcher.fuzzy_equal
        )));
    }
    Ok(())
}
