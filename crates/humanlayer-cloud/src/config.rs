//! Connection configuration
//!
//! `ConnectionConfig` holds whatever the caller supplied explicitly.
//! `resolve` fills the gaps from the environment and the built-in
//! default, producing a `ResolvedConfig` that `CloudConnection` consumes.
//! The connection itself never reads the environment.

use crate::util::{mask_api_key, non_empty};
use humanlayer_core::{Error, Result};
use std::fmt;
use std::time::Duration;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "HUMANLAYER_API_KEY";

/// Environment variable overriding the API base URL
pub const API_BASE_ENV: &str = "HUMANLAYER_API_BASE";

/// Production API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.humanlayer.dev/humanlayer/v1";

/// Timeout applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Explicit connection settings, all optional
#[derive(Clone, Default)]
pub struct ConnectionConfig {
    /// API key (falls back to `HUMANLAYER_API_KEY`)
    pub api_key: Option<String>,
    /// Base URL (falls back to `HUMANLAYER_API_BASE`, then the production URL)
    pub api_base_url: Option<String>,
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl ConnectionConfig {
    /// Create an empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Resolve against the process environment
    ///
    /// # Errors
    /// Returns `Error::Configuration` if no API key is available.
    pub fn resolve(self) -> Result<ResolvedConfig> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using a custom variable lookup
    ///
    /// Order for each field: explicit value, then `lookup`, then the
    /// default. Empty strings count as unset.
    ///
    /// # Errors
    /// Returns `Error::Configuration` if no API key is available.
    pub fn resolve_with<F>(self, lookup: F) -> Result<ResolvedConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(self.api_key)
            .or_else(|| non_empty(lookup(API_KEY_ENV)))
            .ok_or_else(|| {
                Error::Configuration(format!("{API_KEY_ENV} is required for cloud approvals"))
            })?;

        let api_base_url = non_empty(self.api_base_url)
            .or_else(|| non_empty(lookup(API_BASE_ENV)))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(ResolvedConfig {
            api_key,
            api_base_url,
            timeout: REQUEST_TIMEOUT,
        })
    }
}

/// Fully resolved settings: the API key is guaranteed non-empty
#[derive(Clone)]
pub struct ResolvedConfig {
    api_key: String,
    api_base_url: String,
    timeout: Duration,
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ResolvedConfig {
    /// Override the request timeout (defaults to [`REQUEST_TIMEOUT`])
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// API key sent as the bearer token
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Base URL that request paths are appended to
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Per-request timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
