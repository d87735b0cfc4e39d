//! Configuration persistence for the trainer.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::SelectionError;
use crate::selection::Selection;

/// User preferences that persist between runs. Scores are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The currently selected theme name.
    pub theme: String,
    /// How long feedback stays on screen before moving on.
    pub advance_delay_ms: u64,
    /// Move to the next prompt automatically after feedback.
    pub auto_advance: bool,
    /// Questions per knowledge test.
    pub test_length: usize,
    /// Problems per math round.
    pub arithmetic_rounds: usize,
    /// Initial alphabet range, half-open, e.g. "0-5".
    pub alphabet_range: String,
    /// Shuffle alphabet and number rounds by default.
    pub randomize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            advance_delay_ms: 1500,
            auto_advance: true,
            test_length: 10,
            arithmetic_rounds: 10,
            alphabet_range: "0-5".to_string(),
            randomize: false,
        }
    }
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bgtutor")
            .join("config.toml")
    }

    /// Load config from `path`, returning defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Save config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    /// The configured starting range for alphabet practice.
    pub fn alphabet_selection(&self) -> Result<Selection, SelectionError> {
        let selection: Selection = self.alphabet_range.parse()?;
        selection.validate(crate::tables::ALPHABET.len())?;
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            theme: "rose".to_string(),
            advance_delay_ms: 800,
            auto_advance: false,
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"rose\"\ntest_length = 5\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, "rose");
        assert_eq!(config.test_length, 5);
        assert_eq!(config.advance_delay(), Duration::from_millis(1500));
        assert!(config.auto_advance);
    }

    #[test]
    fn garbage_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn alphabet_range_is_validated() {
        let mut config = Config::default();
        assert_eq!(config.alphabet_selection(), Ok(Selection::range(0, 5)));

        config.alphabet_range = "25-35".to_string();
        assert_eq!(
            config.alphabet_selection(),
            Err(SelectionError::OutOfBounds { index: 35, len: 30 })
        );

        config.alphabet_range = "five".to_string();
        assert!(matches!(config.alphabet_selection(), Err(SelectionError::Malformed(_))));
    }
}
