//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the theme, log level, log pane visibility and hotkeys.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, ViewHotkeys};

use crate::error::AppError;
use crate::ui::Theme;
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/recipe-navigator";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub log_level: String,
    pub show_log: bool,
    pub hotkeys: ViewHotkeys,
    file_path: Option<PathBuf>,
    // Command line values for this run only. Never written by `save`.
    theme_override: Option<String>,
    log_level_override: Option<String>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub show_log: bool,
    #[serde(default)]
    pub hotkeys: Option<ViewHotkeys>,
}

fn default_theme_name() -> String {
    "rose-pine-dawn".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            show_log: false,
            hotkeys: ViewHotkeys::default(),
            file_path: None,
            theme_override: None,
            log_level_override: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file leaves the defaults in place;
    /// the file is written on the next save.
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

        let file_path = dir_path.join(FILE_NAME);
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.theme_name = data.theme_name;
            self.log_level = data.log_level;
            self.show_log = data.show_log;
            if let Some(hotkeys) = data.hotkeys {
                self.hotkeys = hotkeys;
            }
            for conflict in self.hotkeys.conflicts() {
                warn!("Conflicting hotkey in {}: {}", file_path.display(), conflict);
            }
        }
        self.file_path = Some(file_path);

        Ok(())
    }

    /// Serialize the configuration and write it to the disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
            show_log: self.show_log,
            hotkeys: Some(self.hotkeys.clone()),
        };
        let content = serde_yaml::to_string(&data)
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
        Ok(())
    }

    /// Return the path of the configuration file once loaded.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Use the given theme for this run without changing the saved one.
    ///
    pub fn override_theme(&mut self, name: &str) -> &mut Self {
        self.theme_override = Some(name.to_string());
        self
    }

    /// Use the given log level for this run without changing the saved one.
    ///
    pub fn override_log_level(&mut self, level: &str) -> &mut Self {
        self.log_level_override = Some(level.to_lowercase());
        self
    }

    /// Resolve the active theme, preferring the override.
    ///
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        let name = self.theme_override.as_ref().unwrap_or(&self.theme_name);
        Theme::from_name(name).ok_or_else(|| ConfigError::UnknownTheme {
            name: name.clone(),
            available: Theme::available_themes().join(", "),
        })
    }

    /// Parse the active log level, preferring the override.
    ///
    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        let level = self.log_level_override.as_ref().unwrap_or(&self.log_level);
        LevelFilter::from_str(level).map_err(|_| ConfigError::InvalidLogLevel(level.clone()))
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn defaults() {
        let config = Config::new();
        assert_eq!(config.theme_name, "rose-pine-dawn");
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Info);
        assert!(!config.show_log);
        assert!(config.file_path().is_none());
        assert!(config.theme().is_ok());
    }

    #[test]
    fn load_without_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "rose-pine-dawn");
        assert_eq!(config.file_path().unwrap(), dir.path().join(FILE_NAME));
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        config.theme_name = "dracula".to_string();
        config.log_level = "debug".to_string();
        config.show_log = true;
        config
            .hotkeys
            .home
            .insert(HotkeyAction::Quit, hotkeys::Hotkey::char('x'));
        config.save().unwrap();

        let mut loaded = Config::new();
        loaded.load(dir.path().to_str()).unwrap();
        assert_eq!(loaded.theme_name, "dracula");
        assert_eq!(loaded.log_level_filter().unwrap(), LevelFilter::Debug);
        assert!(loaded.show_log);
        assert_eq!(
            loaded.hotkeys.home.get(&HotkeyAction::Quit).unwrap().code,
            KeyCode::Char('x')
        );
    }

    #[test]
    fn overrides_are_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        config.override_theme("dracula").override_log_level("TRACE");
        assert_eq!(config.theme().unwrap().name, "dracula");
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Trace);
        config.show_log = true;
        config.save().unwrap();

        let mut next_run = Config::new();
        next_run.load(dir.path().to_str()).unwrap();
        assert_eq!(next_run.theme_name, "rose-pine-dawn");
        assert_eq!(next_run.theme().unwrap().name, "rose-pine-dawn");
        assert_eq!(next_run.log_level_filter().unwrap(), LevelFilter::Info);
        assert!(next_run.show_log);
    }

    #[test]
    fn unknown_override_theme_is_reported() {
        let mut config = Config::new();
        config.override_theme("solarized");
        assert!(matches!(
            config.theme(),
            Err(ConfigError::UnknownTheme { name, .. }) if name == "solarized"
        ));
    }

    #[test]
    fn partial_hotkeys_block_keeps_other_bindings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "hotkeys: {home: {quit: {code: Char, char: x}}}\n",
        )
        .unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        let defaults = ViewHotkeys::default();
        assert_eq!(
            config.hotkeys.home.get(&HotkeyAction::Quit).unwrap().code,
            KeyCode::Char('x')
        );
        assert_eq!(
            config.hotkeys.home.get(&HotkeyAction::Select),
            defaults.home.get(&HotkeyAction::Select)
        );
        assert_eq!(config.hotkeys.detail, defaults.detail);
        assert_eq!(config.hotkeys.add, defaults.add);
        assert_eq!(config.hotkeys.settings, defaults.settings);
    }

    #[test]
    fn partial_file_uses_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "theme_name: tokyo-night\n").unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.hotkeys, ViewHotkeys::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "show_log: [not, a, bool]\n").unwrap();
        let mut config = Config::new();
        let result = config.load(dir.path().to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn unknown_theme_and_level_are_rejected() {
        let config = Config {
            theme_name: "neon".to_string(),
            log_level: "loud".to_string(),
            ..Config::new()
        };
        assert!(matches!(
            config.theme(),
            Err(ConfigError::UnknownTheme { .. })
        ));
        assert!(matches!(
            config.log_level_filter(),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
