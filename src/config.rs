//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Lookup Service Address
//!
//! ### Method 1: Full URL
//!
//! ```bash
//! export LOOKUP_BASE_URL="http://161.97.83.44:5001"
//! ```
//!
//! ### Method 2: Individual components
//!
//! ```bash
//! export LOOKUP_HOST="161.97.83.44"
//! export LOOKUP_PORT="5001"
//! export LOOKUP_SCHEME="http"
//! ```
//!
//! If neither is set, `http://161.97.83.44:5001` is used.
//!
//! ## Optional Variables
//!
//! - `REDIRECT_POLICY` - `probe` or `blind` (default: `probe`)
//! - `LOOKUP_TIMEOUT_SECONDS` - Outbound lookup timeout (default: 10)
//! - `LOOKUP_MAX_REDIRECTS` - Redirect hops followed while probing (default: 10, max: 32)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `STATIC_DIR` - Directory served under `/static` (default: not served)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::domain::entities::{LookupEndpoint, RedirectPolicy};

/// Lookup service address used when nothing is configured.
pub const DEFAULT_LOOKUP_BASE_URL: &str = "http://161.97.83.44:5001";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the lookup service (`lookupBaseUrl`).
    pub lookup_base_url: String,
    pub redirect_policy: RedirectPolicy,
    /// Outbound lookup timeout in seconds; expiry answers 500.
    pub lookup_timeout_seconds: u64,
    pub lookup_max_redirects: usize,
    pub listen_addr: String,
    pub static_dir: Option<PathBuf>,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup_base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
            redirect_policy: RedirectPolicy::default(),
            lookup_timeout_seconds: 10,
            lookup_max_redirects: 10,
            listen_addr: "0.0.0.0:3000".to_string(),
            static_dir: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `REDIRECT_POLICY` names an unknown policy.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let lookup_base_url = Self::load_lookup_base_url();

        let redirect_policy = match env::var("REDIRECT_POLICY") {
            Ok(v) => v
                .parse::<RedirectPolicy>()
                .context("Failed to parse REDIRECT_POLICY")?,
            Err(_) => defaults.redirect_policy,
        };

        let lookup_timeout_seconds = env::var("LOOKUP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.lookup_timeout_seconds);

        let lookup_max_redirects = env::var("LOOKUP_MAX_REDIRECTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.lookup_max_redirects);

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let static_dir = env::var("STATIC_DIR")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            lookup_base_url,
            redirect_policy,
            lookup_timeout_seconds,
            lookup_max_redirects,
            listen_addr,
            static_dir,
            log_level,
            log_format,
        })
    }

    /// Loads the lookup base URL.
    ///
    /// Priority:
    /// 1. `LOOKUP_BASE_URL` environment variable
    /// 2. Constructed from `LOOKUP_SCHEME`, `LOOKUP_HOST`, `LOOKUP_PORT`
    /// 3. [`DEFAULT_LOOKUP_BASE_URL`]
    fn load_lookup_base_url() -> String {
        if let Ok(url) = env::var("LOOKUP_BASE_URL") {
            return url;
        }

        let Ok(host) = env::var("LOOKUP_HOST") else {
            return DEFAULT_LOOKUP_BASE_URL.to_string();
        };
        let port = env::var("LOOKUP_PORT").unwrap_or_else(|_| "5001".to_string());
        let scheme = env::var("LOOKUP_SCHEME").unwrap_or_else(|_| "http".to_string());

        format!("{}://{}:{}", scheme, host, port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `lookup_base_url` is not an absolute `http`/`https` URL
    /// - `lookup_timeout_seconds` is 0
    /// - `lookup_max_redirects` is outside 1..=32
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.lookup_base_url).with_context(|| {
            format!(
                "LOOKUP_BASE_URL must be an absolute URL, got '{}'",
                self.lookup_base_url
            )
        })?;

        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "LOOKUP_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.lookup_base_url
            );
        }

        if base.query().is_some() || base.fragment().is_some() {
            anyhow::bail!(
                "LOOKUP_BASE_URL must not carry a query or fragment, got '{}'",
                self.lookup_base_url
            );
        }

        if self.lookup_timeout_seconds == 0 {
            anyhow::bail!("LOOKUP_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.lookup_max_redirects == 0 || self.lookup_max_redirects > 32 {
            anyhow::bail!(
                "LOOKUP_MAX_REDIRECTS must be between 1 and 32, got {}",
                self.lookup_max_redirects
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    pub fn lookup_endpoint(&self) -> LookupEndpoint {
        LookupEndpoint::new(self.lookup_base_url.clone())
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Lookup service: {}", self.lookup_base_url);
        tracing::info!("  Redirect policy: {}", self.redirect_policy);
        tracing::info!(
            "  Lookup timeout: {}s, max redirects: {}",
            self.lookup_timeout_seconds,
            self.lookup_max_redirects
        );

        match &self.static_dir {
            Some(dir) => tracing::info!("  Static assets: {}", dir.display()),
            None => tracing::info!("  Static assets: disabled"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const LOOKUP_VARS: [&str; 4] = [
        "LOOKUP_BASE_URL",
        "LOOKUP_HOST",
        "LOOKUP_PORT",
        "LOOKUP_SCHEME",
    ];

    fn clear_lookup_vars() {
        // SAFETY: callers are #[serial]
        unsafe {
            for var in LOOKUP_VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.lookup_base_url = "ftp://lookup.local".to_string();
        assert!(config.validate().is_err());

        config.lookup_base_url = "lookup.local:5001".to_string();
        assert!(config.validate().is_err());

        config.lookup_base_url = "http://lookup.local?x=1".to_string();
        assert!(config.validate().is_err());

        config.lookup_base_url = "https://lookup.local/prefix/".to_string();
        assert!(config.validate().is_ok());

        config.lookup_timeout_seconds = 0;
        assert!(config.validate().is_err());
        config.lookup_timeout_seconds = 10;

        config.lookup_max_redirects = 0;
        assert!(config.validate().is_err());
        config.lookup_max_redirects = 33;
        assert!(config.validate().is_err());
        config.lookup_max_redirects = 5;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_lookup_endpoint_from_config() {
        let config = Config {
            lookup_base_url: "http://lookup.local:5001/".to_string(),
            ..Config::default()
        };

        assert_eq!(config.lookup_endpoint().base_url(), "http://lookup.local:5001");
        assert_eq!(config.lookup_timeout(), Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn test_lookup_base_url_default() {
        clear_lookup_vars();

        assert_eq!(Config::load_lookup_base_url(), DEFAULT_LOOKUP_BASE_URL);
    }

    #[test]
    #[serial]
    fn test_lookup_base_url_from_components() {
        clear_lookup_vars();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LOOKUP_HOST", "lookup-host");
            env::set_var("LOOKUP_PORT", "6001");
        }

        assert_eq!(Config::load_lookup_base_url(), "http://lookup-host:6001");

        unsafe {
            env::set_var("LOOKUP_SCHEME", "https");
        }
        assert_eq!(Config::load_lookup_base_url(), "https://lookup-host:6001");

        clear_lookup_vars();
    }

    #[test]
    #[serial]
    fn test_lookup_base_url_priority() {
        clear_lookup_vars();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOOKUP_BASE_URL", "http://from-url:5001");
            env::set_var("LOOKUP_HOST", "from-components");
        }

        let url = Config::load_lookup_base_url();

        assert!(url.contains("from-url"));
        assert!(!url.contains("from-components"));

        clear_lookup_vars();
    }

    #[test]
    #[serial]
    fn test_redirect_policy_from_env() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REDIRECT_POLICY", "blind");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.redirect_policy, RedirectPolicy::Blind);

        unsafe {
            env::set_var("REDIRECT_POLICY", "sometimes");
        }
        assert!(Config::from_env().is_err());

        unsafe {
            env::remove_var("REDIRECT_POLICY");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.redirect_policy, RedirectPolicy::Probe);
    }
}
