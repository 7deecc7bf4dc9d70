use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RateProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HistoryProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub rate: Option<RateProviderConfig>,
    pub history: Option<HistoryProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            rate: Some(RateProviderConfig {
                base_url: "https://dolarapi.com".to_string(),
            }),
            history: Some(HistoryProviderConfig {
                base_url: "https://api.argentinadatos.com".to_string(),
            }),
        }
    }
}

/// Color scheme for terminal output. `System` leaves the terminal's own
/// detection in charge.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub theme: Theme,
}

impl AppConfig {
    /// Loads the config from the default location. A missing file is not an
    /// error; the app works out of the box with built-in endpoints.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("ar", "dolartrack", "dolartrack")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn rate_base_url(&self) -> &str {
        self.providers
            .rate
            .as_ref()
            .map_or("https://dolarapi.com", |p| p.base_url.as_str())
    }

    pub fn history_base_url(&self) -> &str {
        self.providers
            .history
            .as_ref()
            .map_or("https://api.argentinadatos.com", |p| p.base_url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  rate:
    base_url: "http://localhost:9000"
  history:
    base_url: "http://localhost:9001"
theme: dark
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();

        assert_eq!(config.rate_base_url(), "http://localhost:9000");
        assert_eq!(config.history_base_url(), "http://localhost:9001");
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();

        assert_eq!(config.rate_base_url(), "https://dolarapi.com");
        assert_eq!(config.history_base_url(), "https://api.argentinadatos.com");
        assert_eq!(config.theme, Theme::System);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "theme: light").unwrap();

        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn test_load_from_invalid_yaml_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "providers: [not, a, map]").unwrap();

        assert!(AppConfig::load_from_path(file.path()).is_err());
    }
}
