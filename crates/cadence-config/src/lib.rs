use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::log::LogConfig;

pub mod log;

fn default_language() -> String {
    "es".to_string()
}

fn default_vocab_limit() -> usize {
    15
}

fn default_unknown_usefulness() -> f64 {
    0.5
}

fn default_max_lines() -> usize {
    2000
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language used when a command does not name one
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_vocab_limit")]
    pub vocab_limit: usize,
    /// Usefulness assigned to words missing from the frequency table
    #[serde(default = "default_unknown_usefulness")]
    pub unknown_usefulness: f64,
    /// Songs longer than this are rejected before analysis
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
    /// Persisted baseline to load at startup
    pub baseline_path: Option<PathBuf>,
    /// Extra pack assets registered on top of the embedded ones
    pub extra_packs: Vec<PathBuf>,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            vocab_limit: default_vocab_limit(),
            unknown_usefulness: default_unknown_usefulness(),
            max_lines: default_max_lines(),
            baseline_path: None,
            extra_packs: vec![],
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Defaults overridden by `CADENCE_*` environment variables
    pub fn new() -> Self {
        Self::default().with_env_overrides()
    }

    /// Load a JSON profile; omitted fields fall back to defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&data)?;
        Ok(config.with_env_overrides())
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(language) = env::var("CADENCE_LANGUAGE") {
            self.language = language;
        }

        self.vocab_limit = env::var("CADENCE_VOCAB_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.vocab_limit);

        self.unknown_usefulness = env::var("CADENCE_UNKNOWN_USEFULNESS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.unknown_usefulness);

        self.max_lines = env::var("CADENCE_MAX_LINES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.max_lines);

        if let Ok(path) = env::var("CADENCE_BASELINE_PATH") {
            self.baseline_path = Some(PathBuf::from(path));
        }

        self.log = self.log.with_env_overrides();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_profile_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"language": "fr"}"#).unwrap();
        assert_eq!(config.language, "fr");
        assert_eq!(config.vocab_limit, 15);
        assert_eq!(config.max_lines, 2000);
        assert!(config.baseline_path.is_none());
        assert!(config.extra_packs.is_empty());
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.language, config.language);
        assert_eq!(back.log.format, config.log.format);
    }
}
