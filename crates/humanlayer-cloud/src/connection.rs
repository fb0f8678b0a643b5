//! Authenticated HTTP access to the HumanLayer API

use crate::config::{ConnectionConfig, ResolvedConfig};
use humanlayer_core::Result;
use reqwest::{Client, Method, Response, StatusCode};
use tracing::debug;

/// One client session against the HumanLayer API
///
/// Every request carries `Authorization: Bearer <api_key>` and is bounded
/// by the configured timeout ([`crate::REQUEST_TIMEOUT`] by default).
/// Requests are attempted once; non-2xx statuses are returned to the
/// caller, not turned into errors.
#[derive(Debug)]
pub struct CloudConnection {
    client: Client,
    config: ResolvedConfig,
}

impl CloudConnection {
    /// Create a connection from resolved settings
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ResolvedConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// Resolve `config` against the environment and connect
    ///
    /// # Errors
    /// Returns `Error::Configuration` when no API key is available.
    pub fn from_config(config: ConnectionConfig) -> Result<Self> {
        Self::new(config.resolve()?)
    }

    /// Create from environment variables
    ///
    /// # Errors
    /// Returns `Error::Configuration` when `HUMANLAYER_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::from_config(ConnectionConfig::default())
    }

    /// The resolved API key
    #[must_use]
    pub fn api_key(&self) -> &str {
        self.config.api_key()
    }

    /// The resolved base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.api_base_url()
    }

    /// Send `method` to `{base_url}{path}`, with an optional JSON body
    ///
    /// # Errors
    /// Transport failures (connect, timeout) surface as `Error::Http`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        json: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.config.api_base_url(), path);

        let mut request = self
            .client
            .request(method, &url)
            .bearer_auth(self.config.api_key());
        if let Some(body) = json {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }
}

/// Read a response body as JSON and log it
///
/// The body is parsed regardless of status, so error responses must
/// still be JSON.
pub(crate) async fn read_json(response: Response) -> Result<(StatusCode, serde_json::Value)> {
    let status = response.status();
    let text = response.text().await?;
    let body: serde_json::Value = serde_json::from_str(&text)?;

    debug!(
        "response {} {}",
        status.as_u16(),
        serde_json::to_string_pretty(&body).unwrap_or_default()
    );

    Ok((status, body))
}
