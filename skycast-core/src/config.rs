use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

use crate::source::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, SourceSettings};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "WEATHERAPI_KEY";

pub const DEFAULT_CITY: &str = "London";

/// Which dashboard layout to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Cards, metrics row and the forecast strip.
    #[default]
    Plain,
    /// Plain plus hourly chart, UV and the coloured air quality card.
    Vista,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Plain => "plain",
            Variant::Vista => "vista",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Variant {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "plain" => Ok(Variant::Plain),
            "vista" => Ok(Variant::Vista),
            _ => Err(anyhow!("Unknown variant '{value}'. Supported variants: plain, vista.")),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "Paris"
/// variant = "vista"
/// timeout_secs = 5
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub default_city: Option<String>,
    pub variant: Option<Variant>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// API key from `env_value` (the `WEATHERAPI_KEY` value, if set) or the file.
    pub fn resolve_api_key(&self, env_value: Option<String>) -> Result<String> {
        env_value
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.trim().is_empty()))
            .ok_or_else(|| {
                anyhow!(
                    "No WeatherAPI key configured.\n\
                     Hint: set {API_KEY_ENV} or run `skycast configure` and enter your API key."
                )
            })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn default_city(&self) -> &str {
        self.default_city.as_deref().unwrap_or(DEFAULT_CITY)
    }

    pub fn variant(&self) -> Variant {
        self.variant.unwrap_or_default()
    }

    /// Data source settings, reading the key override from the process environment.
    pub fn source_settings(&self) -> Result<SourceSettings> {
        self.source_settings_with(std::env::var(API_KEY_ENV).ok())
    }

    pub fn source_settings_with(&self, env_key: Option<String>) -> Result<SourceSettings> {
        let api_key = self.resolve_api_key(env_key)?;
        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);

        Ok(SourceSettings::new(api_key).with_base_url(base_url).with_timeout(self.timeout()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("skycast-test-{}-{name}", std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn missing_key_errors_with_hint() {
        let cfg = Config::default();
        let err = cfg.resolve_api_key(None).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No WeatherAPI key configured"));
        assert!(msg.contains("skycast configure"));
    }

    #[test]
    fn env_key_wins_over_file() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        assert_eq!(cfg.resolve_api_key(Some("ENV_KEY".into())).unwrap(), "ENV_KEY");
        assert_eq!(cfg.resolve_api_key(None).unwrap(), "FILE_KEY");
        assert_eq!(cfg.resolve_api_key(Some("  ".into())).unwrap(), "FILE_KEY");
    }

    #[test]
    fn defaults_match_dashboard_expectations() {
        let cfg = Config::default();
        assert_eq!(cfg.default_city(), "London");
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
        assert_eq!(cfg.variant(), Variant::Plain);
    }

    #[test]
    fn source_settings_carry_overrides() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            base_url: Some("http://localhost:1234".into()),
            timeout_secs: Some(3),
            ..Config::default()
        };

        let settings = cfg.source_settings_with(None).unwrap();
        assert_eq!(settings.api_key, "KEY");
        assert_eq!(settings.base_url, "http://localhost:1234");
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }

    #[test]
    fn variant_parses_case_insensitively() {
        assert_eq!(Variant::try_from("Vista").unwrap(), Variant::Vista);
        assert_eq!(Variant::try_from("plain").unwrap(), Variant::Plain);
        assert!(Variant::try_from("fancy").unwrap_err().to_string().contains("Unknown variant"));
    }

    #[test]
    fn save_and_load_through_toml() {
        let path = temp_config_path("roundtrip");
        let cfg = Config {
            api_key: Some("KEY".into()),
            default_city: Some("Paris".into()),
            variant: Some(Variant::Vista),
            ..Config::default()
        };

        cfg.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        let _ = fs::remove_dir_all(path.parent().unwrap());

        assert_eq!(loaded.api_key.as_deref(), Some("KEY"));
        assert_eq!(loaded.default_city(), "Paris");
        assert_eq!(loaded.variant(), Variant::Vista);
    }

    #[test]
    fn missing_file_loads_default() {
        let path = temp_config_path("absent");
        let cfg = Config::load_from(&path).unwrap();
        assert!(cfg.api_key.is_none());
    }
}
