//! Configuration module for RugScan
//!
//! The environment is read exactly once, in `from_env()`, at startup.
//! Everything downstream receives an explicit `AuditConfig` by reference.

use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::{
    DEFAULT_EXPLORER_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_MODEL_CANDIDATES,
    DEFAULT_MODEL_TIMEOUT_SECS, DEFAULT_PORT, ENV_ETHERSCAN_API_KEY, ENV_ETHERSCAN_API_URL,
    ENV_EXPLORER_TIMEOUT_SECS, ENV_GEMINI_API_KEY, ENV_GEMINI_API_URL, ENV_GEMINI_MODELS,
    ENV_HOST, ENV_MODEL_TIMEOUT_SECS, ENV_PLATFORM_PORT, ENV_PORT, ETHERSCAN_API_URL,
    GEMINI_API_URL,
};

/// Credentials and upstream settings for one audit pipeline
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Etherscan API key
    pub explorer_api_key: Option<String>,
    /// Gemini API key
    pub gemini_api_key: Option<String>,
    /// Etherscan v2 endpoint
    pub explorer_url: String,
    /// Gemini API base URL (without `/v1beta/...`)
    pub gemini_base_url: String,
    /// Model identifiers in priority order
    pub model_candidates: Vec<String>,
    /// Per-request timeout for the explorer call
    pub explorer_timeout: Duration,
    /// Per-request timeout for each model candidate
    pub model_timeout: Duration,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            explorer_api_key: None,
            gemini_api_key: None,
            explorer_url: ETHERSCAN_API_URL.to_string(),
            gemini_base_url: GEMINI_API_URL.to_string(),
            model_candidates: DEFAULT_MODEL_CANDIDATES
                .iter()
                .map(|m| m.to_string())
                .collect(),
            explorer_timeout: Duration::from_secs(DEFAULT_EXPLORER_TIMEOUT_SECS),
            model_timeout: Duration::from_secs(DEFAULT_MODEL_TIMEOUT_SECS),
        }
    }
}

impl AuditConfig {
    /// Config with both credentials set and default endpoints
    pub fn new(explorer_api_key: impl Into<String>, gemini_api_key: impl Into<String>) -> Self {
        Self {
            explorer_api_key: non_empty(explorer_api_key.into()),
            gemini_api_key: non_empty(gemini_api_key.into()),
            ..Self::default()
        }
    }

    /// Load from process environment
    ///
    /// Missing credentials are logged, not fatal: the API answers with a
    /// misconfiguration verdict instead.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let explorer_api_key = read_env(ENV_ETHERSCAN_API_KEY);
        let gemini_api_key = read_env(ENV_GEMINI_API_KEY);

        for (name, value) in [
            (ENV_ETHERSCAN_API_KEY, &explorer_api_key),
            (ENV_GEMINI_API_KEY, &gemini_api_key),
        ] {
            if value.is_some() {
                info!("🔑 {} configured (key hidden)", name);
            } else {
                warn!("⚠️ {} not set, /audit will report a misconfigured server", name);
            }
        }

        let model_candidates = read_env(ENV_GEMINI_MODELS)
            .map(|raw| parse_model_list(&raw))
            .filter(|models| !models.is_empty())
            .unwrap_or(defaults.model_candidates);

        Self {
            explorer_api_key,
            gemini_api_key,
            explorer_url: read_env(ENV_ETHERSCAN_API_URL).unwrap_or(defaults.explorer_url),
            gemini_base_url: read_env(ENV_GEMINI_API_URL).unwrap_or(defaults.gemini_base_url),
            model_candidates,
            explorer_timeout: read_secs(ENV_EXPLORER_TIMEOUT_SECS)
                .unwrap_or(defaults.explorer_timeout),
            model_timeout: read_secs(ENV_MODEL_TIMEOUT_SECS).unwrap_or(defaults.model_timeout),
        }
    }

    pub fn with_explorer_url(mut self, url: impl Into<String>) -> Self {
        self.explorer_url = url.into();
        self
    }

    pub fn with_gemini_base_url(mut self, url: impl Into<String>) -> Self {
        self.gemini_base_url = url.into();
        self
    }

    pub fn with_model_candidates<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.model_candidates = models.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_explorer_timeout(mut self, timeout: Duration) -> Self {
        self.explorer_timeout = timeout;
        self
    }

    pub fn with_model_timeout(mut self, timeout: Duration) -> Self {
        self.model_timeout = timeout;
        self
    }

    /// Both credentials, or the name of the first one missing
    pub fn credentials(&self) -> AppResult<(&str, &str)> {
        let explorer = self
            .explorer_api_key
            .as_deref()
            .ok_or_else(|| AppError::missing_api_key(ENV_ETHERSCAN_API_KEY))?;
        let gemini = self
            .gemini_api_key
            .as_deref()
            .ok_or_else(|| AppError::missing_api_key(ENV_GEMINI_API_KEY))?;
        Ok((explorer, gemini))
    }
}

/// Listen address for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Platform `PORT` wins over `RUGSCAN_PORT`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = read_env(ENV_HOST).unwrap_or(defaults.host);
        let port = read_env(ENV_PLATFORM_PORT)
            .or_else(|| read_env(ENV_PORT))
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        Self { host, port }
    }

    pub fn socket_addr(&self) -> eyre::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(non_empty)
}

fn read_secs(name: &str) -> Option<Duration> {
    read_env(name)
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|&s| s > 0)
        .map(Duration::from_secs)
}

/// Split a comma-separated model list, dropping blanks
pub fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;

    #[test]
    fn test_default_candidates_in_order() {
        let config = AuditConfig::default();
        assert_eq!(
            config.model_candidates,
            vec!["gemini-flash-latest", "gemini-2.0-flash-lite-preview-02-05"]
        );
        assert_eq!(config.explorer_url, "https://api.etherscan.io/v2/api");
    }

    #[test]
    fn test_blank_credentials_are_missing() {
        let config = AuditConfig::new("explorer-key", "   ");
        let err = config.credentials().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissingApiKey);
        assert!(err.message.contains("GEMINI_API_KEY"));

        let config = AuditConfig::new("", "gemini-key");
        let err = config.credentials().unwrap_err();
        assert!(err.message.contains("ETHERSCAN_API_KEY"));
    }

    #[test]
    fn test_credentials_present() {
        let config = AuditConfig::new("explorer-key", "gemini-key");
        assert_eq!(config.credentials().unwrap(), ("explorer-key", "gemini-key"));
    }

    #[test]
    fn test_parse_model_list() {
        assert_eq!(
            parse_model_list(" a , ,b,"),
            vec!["a".to_string(), "b".to_string()]
        );
        assert!(parse_model_list(" , ").is_empty());
    }

    #[test]
    fn test_server_socket_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
        };
        assert_eq!(server.socket_addr().unwrap().port(), 5000);
    }
}
