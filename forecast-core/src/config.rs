use anyhow::{Context, Result, anyhow};
use chrono::Locale;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{
    mapper::ForecastMapper,
    provider::{
        Coordinates,
        weatherapi::{DEFAULT_BASE_URL, DEFAULT_DAYS},
    },
};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "FORECAST_API_KEY";

/// Must name the same locale as [`crate::mapper::DEFAULT_LOCALE`].
pub const DEFAULT_LOCALE_NAME: &str = "ru_RU";

/// Red Square, Moscow.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates::new(55.7569, 37.6151);

/// Configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// latitude = 55.7569
/// longitude = 37.6151
/// locale = "ru_RU"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub days: u8,
    /// POSIX locale name for weekday labels, e.g. "ru_RU" or "en_US".
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            latitude: DEFAULT_COORDINATES.latitude,
            longitude: DEFAULT_COORDINATES.longitude,
            days: DEFAULT_DAYS,
            locale: DEFAULT_LOCALE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    /// `FORECAST_API_KEY` wins over the stored key.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;

        let mut cfg = if path.exists() {
            Self::load_from(&path)?
        } else {
            // First run: no config file.
            Self::default()
        };

        cfg.override_api_key(std::env::var(API_KEY_ENV).ok());
        Ok(cfg)
    }

    /// Replace the stored key with `key` unless it is missing or blank.
    pub fn override_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured for WeatherAPI.com.\n\
                 Hint: run `forecast configure` or set {API_KEY_ENV}."
            )
        })
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn locale(&self) -> Result<Locale> {
        Locale::try_from(self.locale.as_str())
            .map_err(|_| anyhow!("Unknown locale '{}' in config (expected e.g. ru_RU)", self.locale))
    }

    pub fn mapper(&self) -> Result<ForecastMapper> {
        Ok(ForecastMapper::new(self.locale()?))
    }
}
