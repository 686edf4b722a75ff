//! Server-side wrapper configuration.

use url::Url;

use crate::error::Result;

/// Environment variable holding the internal base URL for server-rendered
/// calls. Deliberately distinct from the client-side variable: this one
/// resolves inside the backend's service network.
pub const INTERNAL_BASE_URL_ENV: &str = "TODO_API_INTERNAL_URL";

/// Default internal base URL when [`INTERNAL_BASE_URL_ENV`] is unset: the
/// backend's service name on the internal network.
pub const DEFAULT_INTERNAL_BASE_URL: &str = "http://backend:8080/api";

/// Configuration for [`ServerClient`](crate::server::ServerClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Internal base URL all relative paths resolve against. Stored without
    /// a trailing slash.
    pub base_url: String,
}

impl ServerConfig {
    /// Build a config with a validated base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)?;
        Ok(ServerConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve the base URL from [`INTERNAL_BASE_URL_ENV`], falling back to
    /// [`DEFAULT_INTERNAL_BASE_URL`].
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(INTERNAL_BASE_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_INTERNAL_BASE_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: DEFAULT_INTERNAL_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_service_network() {
        let config = ServerConfig::default();
        assert_eq!(config.base_url, "http://backend:8080/api");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ServerConfig::new("http://backend:8080/api/").unwrap();
        assert_eq!(config.base_url, "http://backend:8080/api");
    }
}
