#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Architecture
//!
//! Control flow runs top to bottom: a view invokes a [`TodoList`]
//! controller method → the controller calls the typed [`TodoApi`] → the
//! resource client issues exactly one REST call through a fetch wrapper →
//! the wrapper normalizes the response or error → the controller applies
//! the resulting [`TodoAction`] to local state.
//!
//! Two wrappers implement the same [`Fetcher`] contract:
//!
//! - [`HttpClient`]: direct user-triggered calls, public base URL
//!   (`TODO_API_URL`), fixed timeout budget.
//! - [`ServerClient`]: server-rendered initial loads, internal base URL
//!   (`TODO_API_INTERNAL_URL`), per-call cache directives.
//!
//! Errors are a tagged union ([`ApiError`]): HTTP failures carry the
//! status and the backend's error envelope, transport failures wrap the
//! underlying reason and the attempted URL. The fetch wrappers raise, the
//! resource client passes through, and the state controller is the single
//! point that catches and converts to a display string.
//!
//! ## Module Structure
//!
//! - **[types]** - Domain DTOs (`Todo`, payloads) and the error envelope
//! - **[error]** - Error types and result handling
//! - **[transport]** - The `Fetcher` contract shared by both wrappers
//! - **[client]** - Client-side wrapper, config, and the typed resource client
//! - **[server]** - Server-side wrapper with cache directives
//! - **[state]** - Reducer-modeled list state and the async controller

pub mod client;
pub mod error;
pub mod server;
pub mod state;
pub mod transport;
pub mod types;

pub use client::{ClientConfig, HttpClient, TodoApi};
pub use error::{ApiError, Result};
pub use server::{CacheDirective, ServerClient, ServerConfig};
pub use state::{TodoAction, TodoList, TodoListState, TodoStats};
pub use transport::Fetcher;
pub use types::{CreateTodo, ErrorEnvelope, Todo, UpdateTodo};
