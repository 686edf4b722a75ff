//! Client-side HTTP data access.
//!
//! This module is the browser-analogue half of the data-access layer:
//! every call is direct and user-triggered, resolved against the public
//! base URL, with a fixed timeout budget.
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── config - explicit wrapper configuration
//! ├── fetch  - HttpClient, the low-level fetch wrapper
//! └── todos  - TodoApi, the typed resource client
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ClientConfig`] | Base URL, timeout budget, optional bearer token |
//! | [`HttpClient`] | Low-level wrapper implementing [`Fetcher`](crate::transport::Fetcher) |
//! | [`TodoApi`] | Typed CRUD operations for the todo resource |
//!
//! # Examples
//!
//! ## Creating a client
//!
//! ```
//! use todo_client::{ClientConfig, HttpClient, TodoApi};
//!
//! // Default configuration
//! let api = TodoApi::new(HttpClient::new());
//!
//! // Custom configuration
//! let mut config = ClientConfig::new("https://todos.example.com/api").unwrap();
//! config.bearer_token = Some("secret-token".to_string());
//! let api = TodoApi::new(HttpClient::with_config(config));
//! ```
//!
//! ## Driving the resource client
//!
//! ```ignore
//! use todo_client::CreateTodo;
//!
//! let created = api
//!     .create(&CreateTodo { title: "Buy milk".to_string(), completed: false })
//!     .await?;
//! let toggled = api.toggle(&created).await?;
//! api.delete(toggled.id).await?;
//! ```

mod config;
mod fetch;
mod todos;

pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use fetch::HttpClient;
pub use todos::TodoApi;
