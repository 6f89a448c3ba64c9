use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{errors::ConfigError, utils::persistence::write_atomic};

const DEFAULT_DIR_NAME: &str = ".iexpense";
const CONFIG_FILE: &str = "config.json";
const DATA_DIR: &str = "data";

/// Environment variable overriding the application base directory.
pub const HOME_ENV: &str = "IEXPENSE_HOME";

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    /// Optional custom directory for the expense blob. Defaults to `<base>/data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_data_dir(&self, base: &Path) -> PathBuf {
        match &self.data_dir {
            Some(path) => path.clone(),
            None => base.join(DATA_DIR),
        }
    }
}

/// Returns the application base directory, defaulting to `~/.iexpense`.
pub fn app_base_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Handles persistence of [`Config`] under a base directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(app_base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        let config_path = base.join(CONFIG_FILE);
        Ok(Self { base, config_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.config_path, json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_loads_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        let config = manager.load().expect("load");
        assert_eq!(config, Config::default());
        assert_eq!(config.currency, "USD");
        assert!(config.ui_color_enabled);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        let config = Config {
            currency: "EUR".into(),
            ui_color_enabled: false,
            data_dir: Some(dir.path().join("elsewhere")),
        };
        manager.save(&config).expect("save");
        assert_eq!(manager.load().expect("load"), config);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        fs::write(manager.config_path(), r#"{"currency":"GBP"}"#).expect("write");
        let config = manager.load().expect("load");
        assert_eq!(config.currency, "GBP");
        assert!(config.ui_color_enabled);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn malformed_config_is_reported() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        fs::write(manager.config_path(), "not json").expect("write");
        assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
    }

    #[test]
    fn data_dir_defaults_under_base() {
        let config = Config::default();
        let base = Path::new("/tmp/iexpense-base");
        assert_eq!(config.resolve_data_dir(base), base.join("data"));
    }
}
