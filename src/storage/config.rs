use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";
const CALENDAR_ID_PLACEHOLDER: &str = "YOUR_CALENDAR_ID_HERE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub display: DisplayConfig,
    pub map: MapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    pub api_key: String,
    pub calendar_id: String,
    pub enable_sync: bool,
    pub months_ahead: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    pub year: i32,
    pub month: u32,
    pub views: Vec<String>,
    pub theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    pub style: String,
}

impl CalendarConfig {
    /// Sync runs only when it is switched on and both credentials have been
    /// filled in with something other than the template placeholders.
    pub fn is_configured(&self) -> bool {
        self.enable_sync
            && !self.api_key.is_empty()
            && self.api_key != API_KEY_PLACEHOLDER
            && !self.calendar_id.is_empty()
            && self.calendar_id != CALENDAR_ID_PLACEHOLDER
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        Self::load_or_create_at(&Self::config_path())
    }

    pub fn load_or_create_at(config_path: &Path) -> Result<Self, ConfigError> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            tracing::info!("Wrote default config to {}", config_path.display());
            Ok(config)
        }
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jamnodes")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calendar: CalendarConfig {
                api_key: String::new(),
                calendar_id: String::new(),
                enable_sync: false,
                months_ahead: 3,
            },
            display: DisplayConfig {
                year: crate::calendar::DISPLAY_YEAR,
                month: crate::calendar::DISPLAY_MONTH,
                views: crate::ui::views::ViewId::ALL
                    .iter()
                    .map(|view| view.as_str().to_string())
                    .collect(),
                theme: "default".to_string(),
            },
            map: MapConfig {
                style: "Stamen Toner".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn calendar_config(api_key: &str, calendar_id: &str, enable_sync: bool) -> CalendarConfig {
        CalendarConfig {
            api_key: api_key.to_string(),
            calendar_id: calendar_id.to_string(),
            enable_sync,
            months_ahead: 3,
        }
    }

    #[test]
    fn default_config_is_not_configured_for_sync() {
        let config = Config::default();
        assert!(!config.calendar.is_configured());
    }

    #[test]
    fn default_config_looks_three_months_ahead() {
        let config = Config::default();
        assert_eq!(config.calendar.months_ahead, 3);
    }

    #[test]
    fn default_config_shows_march_2026_with_every_view() {
        let config = Config::default();
        assert_eq!((config.display.year, config.display.month), (2026, 3));
        assert_eq!(config.display.views.len(), 6);
    }

    #[test]
    fn placeholders_do_not_count_as_configured() {
        assert!(!calendar_config("YOUR_API_KEY_HERE", "jam@group.calendar.google.com", true).is_configured());
        assert!(!calendar_config("abc123", "YOUR_CALENDAR_ID_HERE", true).is_configured());
        assert!(!calendar_config("abc123", "", true).is_configured());
    }

    #[test]
    fn disabled_sync_is_not_configured() {
        assert!(!calendar_config("abc123", "jam@group.calendar.google.com", false).is_configured());
    }

    #[test]
    fn real_credentials_with_sync_enabled_are_configured() {
        assert!(calendar_config("abc123", "jam@group.calendar.google.com", true).is_configured());
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [calendar]
            api_key = "key"
            calendar_id = "jam@group.calendar.google.com"
            enable_sync = true
            months_ahead = 6

            [display]
            year = 2026
            month = 4
            views = ["timeline", "map"]
            theme = "night"

            [map]
            style = "CARTO Dark"
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.calendar.months_ahead, 6);
        assert!(config.calendar.is_configured());
        assert_eq!(config.display.views, vec!["timeline", "map"]);
        assert_eq!(config.map.style, "CARTO Dark");
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let invalid_toml = "this is not valid toml";
        let result = Config::from_toml(invalid_toml);
        assert!(result.is_err());
    }

    #[test]
    fn missing_config_is_created_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("jamnodes").join("config.toml");

        let config = Config::load_or_create_at(&config_path).unwrap();

        assert!(config_path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn existing_config_is_loaded_back() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let mut original = Config::default();
        original.calendar.api_key = "saved".to_string();
        original.save_to(&config_path).unwrap();

        let loaded = Config::load_or_create_at(&config_path).unwrap();

        assert_eq!(loaded.calendar.api_key, "saved");
    }
}
