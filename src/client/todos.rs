//! Typed resource client for the todo API.
//!
//! Maps to backend routes under `/todos`:
//!
//! | Operation | Call |
//! |-----------|------|
//! | [`TodoApi::get_all`] | `GET /todos` |
//! | [`TodoApi::get_by_id`] | `GET /todos/:id` |
//! | [`TodoApi::create`] | `POST /todos` |
//! | [`TodoApi::update`] | `PUT /todos/:id` (full replace) |
//! | [`TodoApi::toggle`] | `PUT /todos/:id` with the flag inverted |
//! | [`TodoApi::delete`] | `DELETE /todos/:id` |
//!
//! Each operation is exactly one REST call through the underlying wrapper.
//! No batching, no optimistic concurrency control. Errors pass through
//! untouched; the state layer is the one place they are caught.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::HttpClient;
use crate::error::{ApiError, Result};
use crate::transport::Fetcher;
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Domain operations for the todo resource, generic over the fetch wrapper
/// so server-rendered code can run the same client on
/// [`ServerClient`](crate::server::ServerClient).
#[derive(Debug, Clone)]
pub struct TodoApi<F = HttpClient> {
    fetcher: F,
}

impl<F: Fetcher> TodoApi<F> {
    /// Wrap a fetch wrapper.
    pub fn new(fetcher: F) -> Self {
        TodoApi { fetcher }
    }

    /// Fetch all todos.
    pub async fn get_all(&self) -> Result<Vec<Todo>> {
        self.fetcher.get("/todos").await
    }

    /// Fetch a single todo by id.
    pub async fn get_by_id(&self, id: u64) -> Result<Todo> {
        self.fetcher.get(&format!("/todos/{id}")).await
    }

    /// Create a new todo. The backend assigns the id and timestamps.
    ///
    /// Empty-title validation is the caller's job; this layer sends the
    /// payload as given.
    pub async fn create(&self, input: &CreateTodo) -> Result<Todo> {
        self.write(Method::POST, "/todos", input).await
    }

    /// Replace a todo's title and completion flag. Full replacement
    /// semantics, not a partial patch.
    pub async fn update(&self, id: u64, input: &UpdateTodo) -> Result<Todo> {
        self.write(Method::PUT, &format!("/todos/{id}"), input).await
    }

    /// Flip a todo's completion flag by re-sending its current title with
    /// the flag inverted. Returns the server-confirmed record.
    pub async fn toggle(&self, todo: &Todo) -> Result<Todo> {
        self.update(
            todo.id,
            &UpdateTodo {
                title: todo.title.clone(),
                completed: !todo.completed,
            },
        )
        .await
    }

    /// Delete a todo. A 204 resolves without touching the body; a success
    /// body, if the backend sends one, is discarded.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.fetcher
            .send::<serde_json::Value, ()>(Method::DELETE, &format!("/todos/{id}"), None)
            .await?;
        Ok(())
    }

    /// Issue a write and require a record back. Writes answer 200/201 with
    /// the stored record; an empty-bodied success is a contract violation.
    async fn write<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        match self.fetcher.send(method, path, Some(body)).await? {
            Some(value) => Ok(value),
            None => Err(ApiError::EmptyBody {
                status: StatusCode::NO_CONTENT.as_u16(),
                url: self.fetcher.endpoint(path),
            }),
        }
    }
}

impl Default for TodoApi<HttpClient> {
    fn default() -> Self {
        TodoApi::new(HttpClient::new())
    }
}
