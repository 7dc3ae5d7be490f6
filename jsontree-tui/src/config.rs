//! Viewer configuration.
//!
//! Read once at startup from a JSON file. Every field is optional; missing
//! fields take their defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use jsontree::clipboard::{CopyIndicator, Osc52Clipboard};

/// Config error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Spaces per nesting level.
    pub indent_width: usize,
    /// How long the "Copied!" acknowledgment stays up.
    pub copy_feedback_ms: u64,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// Largest base64 payload sent through OSC 52.
    pub osc52_max_bytes: usize,
    pub mouse: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            copy_feedback_ms: CopyIndicator::DEFAULT_TTL.as_millis() as u64,
            log_level: "debug".to_string(),
            osc52_max_bytes: Osc52Clipboard::<io::Stdout>::DEFAULT_MAX_BYTES,
            mouse: true,
        }
    }
}

impl ViewerConfig {
    /// Loads `explicit` if given (it must exist), otherwise the default
    /// config file if present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match crate::paths::config_file() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        self.log_level.parse().ok()
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"indent_width": 4, "mouse": false}"#).unwrap();

        let config = ViewerConfig::from_file(&path).unwrap();
        assert_eq!(config.indent_width, 4);
        assert!(!config.mouse);
        assert_eq!(config.copy_feedback(), Duration::from_secs(2));
        assert_eq!(config.osc52_max_bytes, 100_000);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ indent_width: ").unwrap();

        assert!(matches!(
            ViewerConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ViewerConfig::load(Some(&dir.path().join("nope.json")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn log_level_parses() {
        let mut config = ViewerConfig::default();
        assert_eq!(config.level_filter(), Some(log::LevelFilter::Debug));
        config.log_level = "loud".into();
        assert_eq!(config.level_filter(), None);
    }
}
