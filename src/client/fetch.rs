//! Low-level client-side fetch wrapper.
//!
//! `HttpClient` issues one HTTP request per call against the public base
//! URL and normalizes the outcome:
//!
//! - success → JSON body decoded into the requested type
//! - 204 → no-content success, nothing parsed
//! - non-success → typed error carrying status, derived message, and the
//!   raw envelope, logged before it is returned
//! - transport failure → typed error wrapping the underlying reason and
//!   the attempted URL
//!
//! # Examples
//!
//! ```ignore
//! use todo_client::{ClientConfig, Fetcher, HttpClient, Todo};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::with_config(ClientConfig::from_env()?);
//!     let todos: Vec<Todo> = client.get("/todos").await?;
//!     println!("{} todos", todos.len());
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::transport::{join_url, read_response, Fetcher};

/// Client-side fetch wrapper for direct user-triggered calls.
///
/// Holds a connection pool and an explicit [`ClientConfig`]; cloning is
/// cheap and shares both.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl HttpClient {
    /// Create a wrapper with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a wrapper with an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        HttpClient {
            http,
            config: Arc::new(config),
        }
    }

    /// The wrapper configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpClient {
    fn endpoint(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }

    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        match self.send::<T, ()>(Method::GET, path, None).await? {
            Some(value) => Ok(value),
            // A 204 on a read means the caller was promised a body it never got.
            None => Err(ApiError::EmptyBody {
                status: StatusCode::NO_CONTENT.as_u16(),
                url: self.endpoint(path),
            }),
        }
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        let url = self.endpoint(path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = &self.config.bearer_token {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => {
                tracing::error!(%method, url = %url, error = %source, "request could not be sent");
                return Err(ApiError::Transport { url, source });
            }
        };

        read_response(&method, &url, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert_eq!(client.config().base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_endpoint_resolution() {
        let client = HttpClient::with_config(ClientConfig::new("http://localhost:9999").unwrap());
        assert_eq!(client.endpoint("/todos/1"), "http://localhost:9999/todos/1");
    }

    #[test]
    fn test_endpoint_absolute_passthrough() {
        let client = HttpClient::new();
        assert_eq!(
            client.endpoint("http://other-host:3000/todos"),
            "http://other-host:3000/todos"
        );
    }
}
