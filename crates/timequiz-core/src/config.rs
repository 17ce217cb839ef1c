//! Quiz configuration.
//!
//! Values come from built-in defaults, an optional TOML file and the
//! environment, in increasing order of priority. Command-line flags are
//! layered on top by the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::QuizError;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "timequiz.toml";

/// Settings for one quiz run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizConfig {
    /// Path of the `question,answer` CSV file.
    #[serde(default = "default_csv")]
    pub csv: PathBuf,
    /// Time limit for the whole quiz, in seconds.
    #[serde(default = "default_limit")]
    pub limit_secs: u64,
}

fn default_csv() -> PathBuf {
    PathBuf::from("problems.csv")
}

fn default_limit() -> u64 {
    10
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            csv: default_csv(),
            limit_secs: default_limit(),
        }
    }
}

impl QuizConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.limit_secs)
    }

    /// Parse a TOML document (useful for testing).
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, QuizError> {
        toml::from_str(content).map_err(|e| QuizError::Config {
            origin: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `TIMEQUIZ_CSV` / `TIMEQUIZ_LIMIT` style overrides.
    ///
    /// `lookup` maps a variable name to its value, so tests need not touch
    /// the real process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), QuizError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(csv) = lookup("TIMEQUIZ_CSV") {
            self.csv = PathBuf::from(csv);
        }
        if let Some(limit) = lookup("TIMEQUIZ_LIMIT") {
            self.limit_secs = limit.trim().parse().map_err(|_| QuizError::Config {
                origin: "TIMEQUIZ_LIMIT".into(),
                message: format!("not a whole number of seconds: '{limit}'"),
            })?;
        }
        Ok(())
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `timequiz.toml` in the current directory
/// 2. built-in defaults
///
/// Environment variable overrides: `TIMEQUIZ_CSV`, `TIMEQUIZ_LIMIT`.
pub fn load_config() -> Result<QuizConfig, QuizError> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default location.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig, QuizError> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => {
            return Err(QuizError::Config {
                origin: p.display().to_string(),
                message: "config file not found".into(),
            })
        }
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            local.exists().then_some(local)
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let origin = path.display().to_string();
            let content = std::fs::read_to_string(&path).map_err(|e| QuizError::Config {
                origin: origin.clone(),
                message: format!("failed to read: {e}"),
            })?;
            tracing::debug!(path = %origin, "using config file");
            QuizConfig::from_toml_str(&content, &origin)?
        }
        None => QuizConfig::default(),
    };

    config.apply_env(|name| std::env::var(name).ok())?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.csv, PathBuf::from("problems.csv"));
        assert_eq!(config.limit_secs, 10);
        assert_eq!(config.time_limit(), Duration::from_secs(10));
    }

    #[test]
    fn parse_partial_toml() {
        let config = QuizConfig::from_toml_str("limit_secs = 30\n", "test.toml").unwrap();
        assert_eq!(config.limit_secs, 30);
        assert_eq!(config.csv, PathBuf::from("problems.csv"));
    }

    #[test]
    fn parse_bad_toml() {
        let err = QuizConfig::from_toml_str("limit_secs = \"soon\"", "bad.toml").unwrap_err();
        assert!(matches!(err, QuizError::Config { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn env_overrides_file_values() {
        let env: HashMap<&str, &str> =
            HashMap::from([("TIMEQUIZ_CSV", "capitals.csv"), ("TIMEQUIZ_LIMIT", " 45 ")]);
        let mut config = QuizConfig::default();
        config
            .apply_env(|name| env.get(name).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.csv, PathBuf::from("capitals.csv"));
        assert_eq!(config.limit_secs, 45);
    }

    #[test]
    fn env_limit_must_be_numeric() {
        let mut config = QuizConfig::default();
        let err = config
            .apply_env(|name| (name == "TIMEQUIZ_LIMIT").then(|| "ten".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("TIMEQUIZ_LIMIT"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "csv = \"capitals.csv\"\nlimit_secs = 5\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.csv, PathBuf::from("capitals.csv"));
        assert_eq!(config.limit_secs, 5);
    }
}
