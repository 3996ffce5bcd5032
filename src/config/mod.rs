//! Configuration management module.
//!
//! This module handles loading, validating and saving the picker's
//! configuration: theme, starting value, scroll tuning and key bindings.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, Hotkeys, InputMode};

use crate::error::AppError;
use crate::picker::MAX_VALUE;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/number-picker";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub initial_value: u16,
    pub item_height: f64,
    /// Distance of one wheel notch, in digit rows.
    pub scroll_step: f64,
    /// Snap distance per tick, in digit rows.
    pub settle_speed: f64,
    pub settle_delay_ms: u64,
    pub tick_rate_ms: u64,
    pub hotkeys: Hotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub initial_value: u16,
    #[serde(default = "default_item_height")]
    pub item_height: f64,
    #[serde(default = "default_scroll_step")]
    pub scroll_step: f64,
    #[serde(default = "default_settle_speed")]
    pub settle_speed: f64,
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub hotkeys: Hotkeys,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_item_height() -> f64 {
    1.0
}

/// A wheel notch moves a third of a digit row.
fn default_scroll_step() -> f64 {
    1.0 / 3.0
}

fn default_settle_speed() -> f64 {
    0.25
}

fn default_settle_delay_ms() -> u64 {
    250
}

fn default_tick_rate_ms() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default settings and no file path.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            initial_value: 0,
            item_height: default_item_height(),
            scroll_step: default_scroll_step(),
            settle_speed: default_settle_speed(),
            settle_delay_ms: default_settle_delay_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            hotkeys: Hotkeys::default(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided, or the default directory otherwise. A missing
    /// file leaves the defaults in place; it is written on the first save.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        if file_path.exists() {
            debug!("Loading configuration from {}", file_path.display());
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply(Config::parse(&contents)?);
        } else {
            debug!(
                "No configuration at {}, using defaults",
                file_path.display()
            );
        }
        self.file_path = Some(file_path);

        self.validate()?;
        Ok(())
    }

    /// Parse the YAML contents of a configuration file.
    ///
    fn parse(contents: &str) -> Result<FileSpec, ConfigError> {
        serde_yaml::from_str(contents).map_err(|e| ConfigError::DeserializationFailed(e.to_string()))
    }

    fn apply(&mut self, data: FileSpec) {
        self.theme_name = data.theme_name;
        self.initial_value = data.initial_value;
        self.item_height = data.item_height;
        self.scroll_step = data.scroll_step;
        self.settle_speed = data.settle_speed;
        self.settle_delay_ms = data.settle_delay_ms;
        self.tick_rate_ms = data.tick_rate_ms;
        self.hotkeys = data.hotkeys;
    }

    fn to_file_spec(&self) -> FileSpec {
        FileSpec {
            theme_name: self.theme_name.clone(),
            initial_value: self.initial_value,
            item_height: self.item_height,
            scroll_step: self.scroll_step,
            settle_speed: self.settle_speed,
            settle_delay_ms: self.settle_delay_ms,
            tick_rate_ms: self.tick_rate_ms,
            hotkeys: self.hotkeys.clone(),
        }
    }

    /// Reject settings the picker cannot run with.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_value > MAX_VALUE {
            return Err(ConfigError::InvalidSetting {
                name: "initial_value",
                message: format!("{} is above {}", self.initial_value, MAX_VALUE),
            });
        }
        for (name, value) in [
            ("item_height", self.item_height),
            ("scroll_step", self.scroll_step),
            ("settle_speed", self.settle_speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidSetting {
                    name,
                    message: format!("{} must be positive", value),
                });
            }
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "tick_rate_ms",
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let content = serde_yaml::to_string(&self.to_file_spec())
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        debug!("Saved configuration to {}", file_path.display());
        Ok(())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn scratch_dir() -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let dir = std::env::temp_dir().join(format!(
            "number-picker-config-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.tick_rate_ms, 60);
        assert!(config.file_path().is_none());
    }

    #[test]
    fn test_parse_fills_missing_fields() {
        let data = Config::parse("theme_name: dracula\ninitial_value: 42\n").unwrap();
        let mut config = Config::new();
        config.apply(data);
        assert_eq!(config.theme_name, "dracula");
        assert_eq!(config.initial_value, 42);
        assert_eq!(config.settle_delay_ms, 250);
        assert_eq!(config.hotkeys, Hotkeys::default());
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        let result = Config::parse("initial_value: [1, 2");
        assert!(matches!(result, Err(ConfigError::DeserializationFailed(_))));
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let mut config = Config::new();
        config.initial_value = 1000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSetting {
                name: "initial_value",
                ..
            })
        ));

        let mut config = Config::new();
        config.settle_speed = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSetting {
                name: "settle_speed",
                ..
            })
        ));

        let mut config = Config::new();
        config.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn test_load_missing_file_then_save_and_reload() {
        let dir = scratch_dir();
        let dir_str = dir.to_string_lossy().to_string();

        let mut config = Config::new();
        config.load(Some(&dir_str)).unwrap();
        assert!(dir.exists());
        assert_eq!(config.initial_value, 0);
        assert_eq!(config.file_path(), Some(dir.join(FILE_NAME).as_path()));

        config.initial_value = 321;
        config.theme_name = "dracula".to_string();
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(Some(&dir_str)).unwrap();
        assert_eq!(reloaded.initial_value, 321);
        assert_eq!(reloaded.theme_name, "dracula");
        assert_eq!(reloaded.hotkeys, config.hotkeys);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "initial_value: 5000\n").unwrap();

        let mut config = Config::new();
        let result = config.load(Some(&dir.to_string_lossy()));
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::InvalidSetting { .. }))
        ));

        let _ = fs::remove_dir_all(&dir);
    }
}
