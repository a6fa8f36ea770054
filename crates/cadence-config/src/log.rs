use std::env;

use serde::{Deserialize, Serialize};

fn default_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_filter(),
        }
    }
}

impl LogConfig {
    pub fn with_env_overrides(mut self) -> Self {
        match env::var("CADENCE_LOG_FORMAT").as_deref() {
            Ok("json") => self.format = LogFormat::Json,
            Ok("pretty") => self.format = LogFormat::Pretty,
            _ => {}
        }
        if let Ok(filter) = env::var("RUST_LOG") {
            self.filter = filter;
        }
        self
    }
}
