//! Client-side wrapper configuration.

use std::time::Duration;

use url::Url;

use crate::error::Result;

/// Environment variable holding the public base URL for client-side calls.
pub const BASE_URL_ENV: &str = "TODO_API_URL";

/// Default public base URL when [`BASE_URL_ENV`] is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Fixed timeout budget for direct user-triggered calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`HttpClient`](crate::client::HttpClient).
///
/// Passed explicitly to the wrapper constructor; there is no global
/// singleton client. Fields are public so callers can use struct-update
/// syntax:
///
/// ```
/// use std::time::Duration;
/// use todo_client::ClientConfig;
///
/// let config = ClientConfig {
///     timeout: Duration::from_secs(30),
///     ..ClientConfig::default()
/// };
/// assert_eq!(config.base_url, "http://localhost:8080/api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL all relative paths resolve against. Stored without a
    /// trailing slash.
    pub base_url: String,
    /// Per-request timeout budget.
    pub timeout: Duration,
    /// Optional bearer token attached as an `Authorization` header on every
    /// request. Token acquisition and storage live outside this layer.
    pub bearer_token: Option<String>,
}

impl ClientConfig {
    /// Build a config with a validated base URL and default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)?;
        Ok(ClientConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            bearer_token: None,
        })
    }

    /// Resolve the base URL from [`BASE_URL_ENV`], falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            bearer_token: None,
        }
    }
}
