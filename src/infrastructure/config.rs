use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{ConfigError, FileFormat};
use serde::Deserialize;

use crate::infrastructure::storage::DEFAULT_QUOTA_BYTES;
use crate::model::notifications::DEFAULT_DURATION;
use crate::presentation::config::KeyBindings;
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

const USER_CONFIG_FILES: [(&str, FileFormat); 5] = [
    ("config.json5", FileFormat::Json5),
    ("config.json", FileFormat::Json),
    ("config.yaml", FileFormat::Yaml),
    ("config.toml", FileFormat::Toml),
    ("config.ini", FileFormat::Ini),
];

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_key")]
    pub key: String,
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
            quota_bytes: default_quota_bytes(),
        }
    }
}

fn default_storage_key() -> String {
    String::from("userdeck_users")
}

fn default_quota_bytes() -> usize {
    DEFAULT_QUOTA_BYTES
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION.as_millis() as u64
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Config {
    /// The defaults shipped inside the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// Layers any user config files found in `config_dir` over the embedded
    /// defaults. Missing user files are fine.
    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let defaults = Self::embedded()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().into_owned())?
            .set_default("_config_dir", config_dir.to_string_lossy().into_owned())?;

        for (file, format) in USER_CONFIG_FILES {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("Loading config from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(format).required(false));
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(defaults);
        Ok(cfg)
    }

    /// User keybindings win; unbound defaults are kept. An empty category
    /// list falls back to the shipped one.
    fn merge_defaults(&mut self, defaults: Self) {
        for (keys, action) in defaults.keybindings.0 {
            self.keybindings.entry(keys).or_insert(action);
        }
        if self.categories.is_empty() {
            self.categories = defaults.categories;
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::presentation::config::Action;

    #[test]
    fn test_embedded_defaults() -> Result<(), ConfigError> {
        let cfg = Config::embedded()?;

        assert_eq!(cfg.storage, StorageConfig::default());
        assert_eq!(cfg.notifications.duration(), Duration::from_millis(3000));
        assert_eq!(
            cfg.categories,
            vec!["Customer", "Partner", "Supplier", "Internal"]
        );
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE)),
            Some(Action::OpenList)
        );

        Ok(())
    }

    #[test]
    fn test_load_without_user_files() -> Result<(), Box<dyn std::error::Error>> {
        let config_dir = TempDir::new()?;
        let data_dir = TempDir::new()?;
        let cfg = Config::load_from(config_dir.path(), data_dir.path())?;

        assert_eq!(cfg.config._data_dir, data_dir.path());
        assert_eq!(cfg.storage.key, "userdeck_users");
        assert_eq!(cfg.categories.len(), 4);
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Close)
        );

        Ok(())
    }

    #[test]
    fn test_user_file_overrides() -> Result<(), Box<dyn std::error::Error>> {
        let config_dir = TempDir::new()?;
        let data_dir = TempDir::new()?;
        std::fs::write(
            config_dir.path().join("config.json5"),
            r#"{
                keybindings: { "<n>": "AddUser" },
                storage: { key: "people" },
                notifications: { duration_ms: 1500 },
                categories: ["Staff"],
            }"#,
        )?;
        let cfg = Config::load_from(config_dir.path(), data_dir.path())?;

        assert_eq!(cfg.storage.key, "people");
        assert_eq!(cfg.storage.quota_bytes, DEFAULT_QUOTA_BYTES);
        assert_eq!(cfg.notifications.duration_ms, 1500);
        assert_eq!(cfg.categories, vec!["Staff"]);
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE)),
            Some(Action::AddUser)
        );
        assert_eq!(
            cfg.keybindings
                .action_for(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Action::AddUser)
        );

        Ok(())
    }
}
