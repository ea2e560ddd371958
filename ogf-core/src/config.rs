//! Framework configuration, stored as JSON.
//!
//! Every field has a default, so a config file only needs the values it
//! wants to change.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, math::Color};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub log: LogConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL core profile version as `[major, minor]`.
    pub gl_version: [u8; 2],
    pub resizable: bool,
    pub vsync: bool,
    pub clear_color: Color,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OGF".to_string(),
            width: 800,
            height: 600,
            gl_version: [3, 3],
            resizable: true,
            vsync: true,
            clear_color: Color::rgb(0.1, 0.1, 0.12),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Parses [`LogConfig::level`], falling back to `Info` for unknown names.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Assets used by the demo application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub model: Option<PathBuf>,
    pub texture: Option<PathBuf>,
}

impl Config {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&crate::io::file_content(path)?)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(path) {
            Err(Error::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_json(
            r#"{ "window": { "title": "Chalet", "width": 1280 }, "log": { "level": "debug" } }"#,
        )
        .unwrap();
        assert_eq!(config.window.title, "Chalet");
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.gl_version, [3, 3]);
        assert_eq!(config.log.level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.demo, DemoConfig::default());
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let log = LogConfig {
            level: "chatty".to_string(),
            file: None,
        };
        assert_eq!(log.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            Config::from_json("{ window: "),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("ogf-missing-config.json");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("ogf-{}-config.json", std::process::id()));
        let mut config = Config::default();
        config.demo.model = Some(PathBuf::from("res/chalet.obj"));
        std::fs::write(&path, config.to_json().unwrap()).unwrap();
        let loaded = Config::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap(), config);
    }
}
