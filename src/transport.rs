//! The transport contract shared by both fetch wrappers.
//!
//! [`HttpClient`](crate::client::HttpClient) and
//! [`ServerClient`](crate::server::ServerClient) are deliberately parallel
//! implementations of the same small contract: one resolves across the
//! public network boundary, the other inside the backend's service network.
//! The [`Fetcher`] trait captures that contract so the typed resource client
//! can run on either wrapper.
//!
//! Response normalization lives here as well, shared by both wrappers:
//!
//! - success with a body → decode JSON into the expected type
//! - 204 → no-content success, no parse attempted
//! - any other success status with an empty body → backend contract
//!   violation ([`ApiError::EmptyBody`])
//! - non-success → re-hydrate the error envelope (empty envelope when the
//!   body is not valid JSON), derive the message, log, and raise
//!   [`ApiError::Http`]

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::types::ErrorEnvelope;

/// The contract implemented by both fetch wrappers.
///
/// `send` is the full form: it issues one request and resolves to
/// `Ok(None)` on a 204 no-content success. `get` is the read form, where a
/// body is mandatory.
#[async_trait]
pub trait Fetcher {
    /// Resolve a relative path against the configured base URL. Paths that
    /// are already absolute pass through unchanged.
    fn endpoint(&self, path: &str) -> String;

    /// Issue a GET request and decode the JSON body.
    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send;

    /// Issue a request with an optional JSON body. Resolves to `Ok(None)`
    /// on a 204 no-content success.
    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync;
}

/// Join a relative path onto a base URL. Absolute URLs pass through
/// unchanged; the base is expected to carry no trailing slash (config
/// constructors strip it).
pub(crate) fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Normalize one response into the wrapper contract.
///
/// Logs every failure (status, derived message, raw body) before raising,
/// so every layer above can stay silent about errors it passes through.
pub(crate) async fn read_response<T>(
    method: &Method,
    url: &str,
    response: reqwest::Response,
) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let status = response.status();

    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    if !status.is_success() {
        // A failed read or a non-JSON body both fall back to the empty envelope.
        let raw = response.text().await.unwrap_or_default();
        let envelope: ErrorEnvelope = serde_json::from_str(&raw).unwrap_or_default();
        let message = envelope.message_or_fallback(status.as_u16());
        tracing::error!(
            %method,
            url,
            status = status.as_u16(),
            %message,
            raw = %raw,
            "request failed"
        );
        return Err(ApiError::Http {
            status: status.as_u16(),
            message,
            envelope,
        });
    }

    let bytes = response.bytes().await.map_err(|source| {
        tracing::error!(%method, url, error = %source, "response body could not be read");
        ApiError::Transport {
            url: url.to_string(),
            source,
        }
    })?;

    if bytes.is_empty() {
        // 204 is the only no-body success code.
        return Err(ApiError::EmptyBody {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
}
