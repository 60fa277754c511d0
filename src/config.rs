//! Application configuration loaded from environment variables.
//!
//! Built once in `main` and passed to the components that need it.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://gateway-run-indexer.bls.dev/api/v1";
pub const DEFAULT_ACCOUNTS_FILE: &str = "bless_tokens.json";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project hosting the Firestore database
    pub gcp_project_id: String,
    /// Base URL of the Bless indexer API
    pub api_base_url: String,
    /// JSON file listing the tracked accounts
    pub accounts_file: PathBuf,
    /// Time between tracking cycles
    pub cycle_interval: Duration,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
    /// Fetch attempts per account per cycle
    pub max_attempts: u32,
    /// Fixed delay before each retry
    pub retry_delay: Duration,
    /// Lower bound of the random pause between accounts
    pub pacing_min: Duration,
    /// Upper bound of the random pause between accounts
    pub pacing_max: Duration,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            accounts_file: PathBuf::from(DEFAULT_ACCOUNTS_FILE),
            cycle_interval: Duration::from_secs(3600),
            request_timeout: Duration::from_secs(30),
            max_attempts: 3,
            retry_delay: Duration::from_secs(10),
            pacing_min: Duration::from_secs(5),
            pacing_max: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let config = Self {
            gcp_project_id: env::var("GCP_PROJECT_ID")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?,
            api_base_url: env::var("BLESS_API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            accounts_file: env::var("ACCOUNTS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.accounts_file),
            cycle_interval: secs_var("CYCLE_INTERVAL_SECS").unwrap_or(defaults.cycle_interval),
            request_timeout: secs_var("REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout),
            max_attempts: env::var("MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_attempts),
            retry_delay: secs_var("RETRY_DELAY_SECS").unwrap_or(defaults.retry_delay),
            pacing_min: secs_var("PACING_MIN_SECS").unwrap_or(defaults.pacing_min),
            pacing_max: secs_var("PACING_MAX_SECS").unwrap_or(defaults.pacing_max),
        };

        if config.cycle_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "CYCLE_INTERVAL_SECS must be at least 1".to_string(),
            ));
        }

        if config.pacing_min > config.pacing_max {
            return Err(ConfigError::Invalid(format!(
                "PACING_MIN_SECS ({}) exceeds PACING_MAX_SECS ({})",
                config.pacing_min.as_secs(),
                config.pacing_max.as_secs()
            )));
        }

        Ok(config)
    }
}

/// Read a whole-seconds duration; unset or unparsable values yield `None`.
fn secs_var(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // All scenarios live in one test since they share process-wide env vars.
    #[test]
    fn test_config_from_env() {
        env::set_var("GCP_PROJECT_ID", "test-project");
        env::set_var("BLESS_API_BASE_URL", "http://localhost:9000/api/v1/");
        env::set_var("RETRY_DELAY_SECS", "not-a-number");
        env::set_var("PACING_MIN_SECS", "2");
        env::set_var("PACING_MAX_SECS", "4");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.gcp_project_id, "test-project");
        assert_eq!(config.api_base_url, "http://localhost:9000/api/v1");
        assert_eq!(config.retry_delay, Duration::from_secs(10));
        assert_eq!(config.pacing_min, Duration::from_secs(2));
        assert_eq!(config.pacing_max, Duration::from_secs(4));
        assert_eq!(config.max_attempts, 3);

        env::set_var("PACING_MIN_SECS", "20");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        env::remove_var("PACING_MIN_SECS");
        env::remove_var("PACING_MAX_SECS");

        env::set_var("CYCLE_INTERVAL_SECS", "0");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("CYCLE_INTERVAL_SECS")));
        env::remove_var("CYCLE_INTERVAL_SECS");

        env::remove_var("RETRY_DELAY_SECS");
        env::remove_var("BLESS_API_BASE_URL");
    }
}
