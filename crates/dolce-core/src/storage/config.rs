//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Notification behavior on achievement unlocks
//! - Default cooking-timer duration
//!
//! Configuration is stored at `~/.config/dolce/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Seconds to delay an unlock notification after the unlock.
    #[serde(default)]
    pub delay_secs: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_secs: 0,
        }
    }
}

/// Cooking-timer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_timer_minutes")]
    pub default_minutes: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_timer_minutes(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/dolce/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub timer: TimerConfig,
}

fn default_true() -> bool {
    true
}
fn default_timer_minutes() -> u32 {
    25
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file
    /// is missing or unparseable.
    pub fn load() -> Self {
        let Ok(path) = Self::path() else {
            return Self::default();
        };
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_default()
    }

    /// Save the configuration to disk.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert!(config.notifications.enabled);
        assert_eq!(config.timer.default_minutes, 25);
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = Config::default();
        config.timer.default_minutes = 40;
        config.notifications.enabled = false;

        let text = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&text).unwrap();
        assert_eq!(loaded.timer.default_minutes, 40);
        assert!(!loaded.notifications.enabled);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let loaded: Config = toml::from_str("").unwrap();
        assert!(loaded.notifications.enabled);
        assert_eq!(loaded.timer.default_minutes, 25);
    }
}
