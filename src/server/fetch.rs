//! Server-side fetch wrapper for server-rendered initial loads.
//!
//! Parallel implementation of the client-side wrapper with two deliberate
//! differences:
//!
//! 1. The base URL resolves from a server-only environment variable, since
//!    server-rendered code runs inside the backend's service network, not
//!    the user's browser.
//! 2. Requests carry a cache-control directive for the server-rendering
//!    cache in front of this wrapper. Results of server-rendered fetches
//!    may be reused across requests, unlike client-side calls which are
//!    always direct; `no-store` is the default, and a revalidate window
//!    can be requested per call.
//!
//! Errors coming out of this wrapper are already typed; transport failures
//! wrap the underlying reason together with the attempted URL.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::server::config::ServerConfig;
use crate::transport::{join_url, read_response, Fetcher};

/// Cache-control directive attached to a server-rendered fetch.
///
/// Rendered into a `Cache-Control` request header; the rendering cache in
/// front of the wrapper interprets it. This layer itself never caches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheDirective {
    /// Always fetch fresh. The default.
    #[default]
    NoStore,
    /// Allow a cached result up to this many seconds old.
    Revalidate(u64),
}

impl CacheDirective {
    /// Header value for this directive.
    pub fn header_value(self) -> String {
        match self {
            CacheDirective::NoStore => "no-store".to_string(),
            CacheDirective::Revalidate(secs) => format!("max-age={secs}"),
        }
    }
}

/// Server-side fetch wrapper used during server-rendered initial page
/// loads.
#[derive(Debug, Clone)]
pub struct ServerClient {
    http: reqwest::Client,
    config: Arc<ServerConfig>,
}

impl ServerClient {
    /// Create a wrapper with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a wrapper with an explicit configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        ServerClient {
            http: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    /// The wrapper configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// GET with an explicit cache directive for the rendering cache.
    pub async fn get_with_cache<T>(&self, path: &str, cache: CacheDirective) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        match self
            .dispatch::<T, ()>(Method::GET, path, None, cache)
            .await?
        {
            Some(value) => Ok(value),
            None => Err(ApiError::EmptyBody {
                status: StatusCode::NO_CONTENT.as_u16(),
                url: self.endpoint(path),
            }),
        }
    }

    async fn dispatch<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        cache: CacheDirective,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        let url = self.endpoint(path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, cache.header_value());

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

impl Default for ServerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for ServerClient {
    fn endpoint(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }

    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        self.get_with_cache(path, CacheDirective::NoStore).await
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        self.dispatch(method, path, body, CacheDirective::NoStore)
            .await
    }
}
