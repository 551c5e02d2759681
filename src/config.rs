//! Client configuration.
//!
//! The only deployment-time setting is the backend base URL, overridable via
//! `TINYURL_API_URL`. The two timer durations are compiled-in defaults kept
//! here so tests can shrink them.

use std::time::Duration;

/// Base URL of the deployed backend, used when no override is set.
pub const DEFAULT_BASE_URL: &str = "https://tinyurl-backend-02o2.onrender.com";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "TINYURL_API_URL";

/// Delay between a successful shorten and the follow-up snapshot refresh,
/// tolerating eventual-consistency lag on the backend.
const POST_SUBMIT_REFRESH: Duration = Duration::from_millis(500);

/// How long the "copied" indicator stays visible after a copy action.
const COPY_FEEDBACK_TIMEOUT: Duration = Duration::from_millis(2000);

/// Runtime configuration for the client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Delay before the post-submit snapshot refresh.
    pub post_submit_refresh: Duration,
    /// Auto-reset timeout for the copy indicator.
    pub copy_feedback_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            post_submit_refresh: POST_SUBMIT_REFRESH,
            copy_feedback_timeout: COPY_FEEDBACK_TIMEOUT,
        }
    }
}

impl Config {
    /// Resolve configuration from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                config.base_url = url.to_string();
            }
        }
        config
    }

    /// Override the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the post-submit refresh delay.
    pub fn with_post_submit_refresh(mut self, delay: Duration) -> Self {
        self.post_submit_refresh = delay;
        self
    }

    /// Override the copy indicator timeout.
    pub fn with_copy_feedback_timeout(mut self, timeout: Duration) -> Self {
        self.copy_feedback_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.post_submit_refresh, Duration::from_millis(500));
        assert_eq!(config.copy_feedback_timeout, Duration::from_millis(2000));
    }

    #[test]
    #[serial]
    fn test_from_env_override() {
        std::env::set_var(BASE_URL_ENV, "http://localhost:8000/");
        let config = Config::from_env();
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_blank_override() {
        std::env::set_var(BASE_URL_ENV, "   ");
        let config = Config::from_env();
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_base_url("http://127.0.0.1:9000")
            .with_post_submit_refresh(Duration::from_millis(10))
            .with_copy_feedback_timeout(Duration::from_millis(20));
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.post_submit_refresh, Duration::from_millis(10));
        assert_eq!(config.copy_feedback_timeout, Duration::from_millis(20));
    }
}
