//! Configuration.
//!
//! The scraper runs with hardcoded defaults: the published landing URL,
//! a concurrency cap of 75, and a fixed output file name. An optional
//! `config.toml` next to the binary can override any of them; when the
//! file is absent the defaults apply unchanged.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Landing page listing all active scratch-off games.
pub const DEFAULT_LANDING_URL: &str = "https://www.mslottery.com/gamestatus/active/";

/// Maximum concurrent page fetches.
pub const DEFAULT_CONCURRENCY: usize = 75;

/// Output report file name.
pub const DEFAULT_OUTPUT_PATH: &str = "mslotto_games.csv";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub landing_url: String,
    pub concurrency: usize,
    pub output_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            landing_url: DEFAULT_LANDING_URL.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to the defaults
    /// when the file does not exist.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read config file {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {path}"))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.landing_url, DEFAULT_LANDING_URL);
        assert_eq!(cfg.concurrency, 75);
        assert_eq!(cfg.output_path, "mslotto_games.csv");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let cfg = AppConfig::load("/tmp/scratchrank_no_such_config.toml").unwrap();
        assert_eq!(cfg.concurrency, DEFAULT_CONCURRENCY);
    }

    #[test]
    fn test_partial_override() {
        let cfg: AppConfig = toml::from_str("concurrency = 8").unwrap();
        assert_eq!(cfg.concurrency, 8);
        assert_eq!(cfg.landing_url, DEFAULT_LANDING_URL);
    }
}
