use std::path::Path;

use crate::adaptive::AdaptiveConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub adaptive: AdaptiveConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            log_level,
            adaptive: AdaptiveConfig::from_env(),
        }
    }

    /// Loads `.env` from the working directory (if any) before reading the environment.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Like [`Config::load`] with an explicit env file. Variables already set in
    /// the process take precedence over the file.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        if let Err(err) = dotenvy::from_path(path.as_ref()) {
            tracing::warn!(path = %path.as_ref().display(), error = %err, "env file not loaded");
        }
        Self::from_env()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            adaptive: AdaptiveConfig::default(),
        }
    }
}
