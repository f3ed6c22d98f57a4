//! Configuration utilities

use crate::defaults::{MAX_INPUT_BYTES, PREVIEW_CHARS};
use crate::error::{Error, Result};
use crate::sentiment::ScoringStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring settings
    pub scoring: ScoringSettings,
    /// Input settings
    pub input: InputSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Scoring settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    /// Strategy used when none is given on the command line
    pub strategy: ScoringStrategy,
}

/// Input settings for text and file analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Largest accepted input in bytes
    pub max_bytes: u64,
    /// Characters kept in the preview
    pub preview_chars: usize,
    /// Accepted file extensions, without the dot
    pub extensions: Vec<String>,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            max_bytes: MAX_INPUT_BYTES,
            preview_chars: PREVIEW_CHARS,
            extensions: vec!["txt".to_string(), "md".to_string()],
        }
    }
}

impl InputSettings {
    /// Check if a path has an accepted extension
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON format
    pub json_format: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Load configuration from file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path.as_ref())?;

    let ext = path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let config: AppConfig = match ext {
        "json" => serde_json::from_str(&content)?,
        "toml" => toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?,
        _ => return Err(Error::UnsupportedConfigFormat(ext.to_string())),
    };

    config.validate()?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<()> {
    let ext = path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let content = match ext {
        "json" => serde_json::to_string_pretty(config)?,
        "toml" => toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?,
        _ => return Err(Error::UnsupportedConfigFormat(ext.to_string())),
    };

    std::fs::write(path, content)?;
    Ok(())
}

impl AppConfig {
    /// Reject settings that would make every input unusable
    pub fn validate(&self) -> Result<()> {
        if self.input.max_bytes == 0 {
            return Err(Error::Config("input.max_bytes must be positive".to_string()));
        }
        if self.input.extensions.is_empty() {
            return Err(Error::Config("input.extensions must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.scoring.strategy, ScoringStrategy::Contextual);
        assert_eq!(config.input.max_bytes, 10_000);
        assert_eq!(config.input.preview_chars, 100);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_accepts_extensions() {
        let input = InputSettings::default();
        assert!(input.accepts(Path::new("journal.txt")));
        assert!(input.accepts(Path::new("NOTES.MD")));
        assert!(!input.accepts(Path::new("photo.png")));
        assert!(!input.accepts(Path::new("README")));
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str("[scoring]\nstrategy = \"flat\"\n").unwrap();
        assert_eq!(config.scoring.strategy, ScoringStrategy::Flat);
        assert_eq!(config.input, InputSettings::default());
    }

    #[test]
    fn test_round_trip_files() {
        let dir = tempdir().unwrap();
        let mut config = AppConfig::default();
        config.input.max_bytes = 2048;
        config.logging.level = "debug".to_string();

        for name in ["config.toml", "config.json"] {
            let path = dir.path().join(name);
            save_config(&config, &path).unwrap();
            assert_eq!(load_config(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_unsupported_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "level=info").unwrap();
        assert!(matches!(load_config(&path), Err(Error::UnsupportedConfigFormat(_))));
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let mut config = AppConfig::default();
        config.input.max_bytes = 0;
        assert!(config.validate().is_err());
    }
}
