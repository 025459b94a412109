use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    CONFIG_FILE, DEFAULT_FPS, LOG_FILE, NARRATION_LANGUAGE, NARRATION_RATE,
};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "ENTRECAMADAS_DATA_DIR";

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Pick the data directory: explicit path, then `ENTRECAMADAS_DATA_DIR`,
    /// then the platform data dir, then `./entrecamadas_data`.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let data_dir = explicit
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .or_else(|| dirs::data_dir().map(|d| d.join("entrecamadas")))
            .unwrap_or_else(|| PathBuf::from("entrecamadas_data"));
        Self { data_dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new("entrecamadas_data")
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User settings from `config.json`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Cosmos frames per second
    pub fps: u32,
    pub narration_language: String,
    pub narration_rate: f32,
    /// Synthesizer program to run instead of the platform default
    pub speech_command: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            narration_language: NARRATION_LANGUAGE.to_string(),
            narration_rate: NARRATION_RATE,
            speech_command: None,
        }
    }
}

impl AppConfig {
    /// Load from `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str::<AppConfig>(&contents)?.sanitized()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like [`AppConfig::load`], falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "Using default config: {}", e);
            Self::default()
        })
    }

    /// Clamp values the UI cannot work with
    pub fn sanitized(mut self) -> Self {
        self.fps = self.fps.clamp(1, 60);
        if !(self.narration_rate.is_finite() && self.narration_rate > 0.0) {
            self.narration_rate = NARRATION_RATE;
        }
        if self.narration_language.trim().is_empty() {
            self.narration_language = NARRATION_LANGUAGE.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.fps, 20);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"narration_language":"pt-PT"}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.narration_language, "pt-PT");
        assert_eq!(config.narration_rate, 0.9);
        assert_eq!(config.fps, 20);
    }

    #[test]
    fn test_invalid_file_is_error_but_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "fps = 30").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse(_))));
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
    }

    #[test]
    fn test_sanitize_clamps() {
        let config = AppConfig {
            fps: 0,
            narration_rate: -1.0,
            narration_language: " ".into(),
            speech_command: None,
        }
        .sanitized();
        assert_eq!(config.fps, 1);
        assert_eq!(config.narration_rate, 0.9);
        assert_eq!(config.narration_language, "en-US");
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = CoreConfig::resolve(Some(PathBuf::from("/tmp/journal")));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/journal"));
        assert_eq!(config.config_path(), PathBuf::from("/tmp/journal/config.json"));
    }
}
