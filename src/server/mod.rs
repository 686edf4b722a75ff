//! Server-side HTTP data access for server-rendered pages.
//!
//! Used for initial data fetching during server rendering, eliminating the
//! loading state on first paint. The wrapper mirrors the client-side one
//! but resolves its base URL on the backend's internal service network and
//! tags each request with a cache directive for the rendering cache.
//!
//! # Examples
//!
//! ```ignore
//! use todo_client::{CacheDirective, ServerClient, ServerConfig, Todo, TodoApi};
//!
//! // Initial list for a server-rendered page, cacheable for 30 seconds.
//! let client = ServerClient::with_config(ServerConfig::from_env()?);
//! let initial: Vec<Todo> = client.get_with_cache("/todos", CacheDirective::Revalidate(30)).await?;
//!
//! // The typed resource client runs on this wrapper too.
//! let api = TodoApi::new(client);
//! let todo = api.get_by_id(1).await?;
//! ```

mod config;
mod fetch;

pub use config::{ServerConfig, DEFAULT_INTERNAL_BASE_URL, INTERNAL_BASE_URL_ENV};
pub use fetch::{CacheDirective, ServerClient};
