use crate::error::Result;
use crate::model::BookState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Configuration for libris, stored in the catalog root as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibrisConfig {
    /// strftime format used when printing release dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// State assigned to newly added books
    #[serde(default)]
    pub default_state: BookState,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for LibrisConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            default_state: BookState::default(),
        }
    }
}

impl LibrisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: LibrisConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LibrisConfig::default();
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.default_state, BookState::Draft);
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let temp_dir = std::env::temp_dir().join("libris_test_config_missing");
        let _ = fs::remove_dir_all(&temp_dir);

        let config = LibrisConfig::load(&temp_dir).unwrap();
        assert_eq!(config, LibrisConfig::default());
    }

    #[test]
    fn save_and_load() {
        let temp_dir = std::env::temp_dir().join("libris_test_config_save");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let mut config = LibrisConfig::default();
        config.date_format = "%d.%m.%Y".to_string();
        config.default_state = BookState::Available;
        config.save(&temp_dir).unwrap();

        let loaded = LibrisConfig::load(&temp_dir).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: LibrisConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LibrisConfig::default());
    }
}
