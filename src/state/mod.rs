//! Presentation state for the todo list.
//!
//! State transitions are modeled explicitly as a reducer over a small set
//! of actions so they can be tested in isolation from network code:
//!
//! | Action | Transition |
//! |--------|------------|
//! | [`TodoAction::Loaded`] | replace the list, clear the error |
//! | [`TodoAction::Created`] | append the server-returned record |
//! | [`TodoAction::Updated`] | replace the matching record by id |
//! | [`TodoAction::Deleted`] | drop the matching record by id |
//! | [`TodoAction::Failed`] | set the display message, leave the list untouched |
//!
//! [`TodoList`] is the async controller on top: it drives the resource
//! client and applies actions. It is the single point where errors are
//! caught and stringified; nothing propagates past it, and the list only
//! changes after the backend confirms a mutation (no optimistic merge to
//! roll back).
//!
//! # Examples
//!
//! ## Reducer in isolation
//!
//! ```
//! use todo_client::{Todo, TodoAction, TodoListState};
//!
//! let todo = Todo {
//!     id: 1,
//!     title: "Buy milk".to_string(),
//!     completed: false,
//!     created_at: "2024-05-01T10:00:00Z".to_string(),
//!     updated_at: "2024-05-01T10:00:00Z".to_string(),
//! };
//!
//! let mut state = TodoListState::default();
//! state.apply(TodoAction::Created(todo));
//! state.apply(TodoAction::Deleted(1));
//! assert!(state.todos.is_empty());
//! ```
//!
//! ## Controller over the network
//!
//! ```ignore
//! use todo_client::{HttpClient, TodoApi, TodoList};
//!
//! let mut list = TodoList::new(TodoApi::new(HttpClient::new()));
//! list.load().await;
//! list.create("Buy milk").await;
//! if let Some(message) = &list.state().error {
//!     eprintln!("{message}");
//! }
//! ```

use crate::client::{HttpClient, TodoApi};
use crate::transport::Fetcher;
use crate::types::{CreateTodo, Todo};

/// One state transition of the todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// The full list arrived from the backend.
    Loaded(Vec<Todo>),
    /// A create was confirmed; the record carries its backend-assigned id.
    Created(Todo),
    /// An update was confirmed; the record is the server-returned one.
    Updated(Todo),
    /// A delete was confirmed for this id.
    Deleted(u64),
    /// A call failed; the string is the display message.
    Failed(String),
}

/// In-memory state of the todo list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListState {
    /// Ordered list of records, reconciled by identifier match.
    pub todos: Vec<Todo>,
    /// Whether the initial load is in flight.
    pub loading: bool,
    /// Display message of the most recent failure, if any.
    pub error: Option<String>,
}

/// Active/completed/total counts for the list footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoStats {
    /// Records not yet completed.
    pub active: usize,
    /// Records marked completed.
    pub completed: usize,
    /// All records.
    pub total: usize,
}

impl TodoListState {
    /// Apply one action to the state.
    pub fn apply(&mut self, action: TodoAction) {
        match action {
            TodoAction::Loaded(todos) => {
                self.todos = todos;
                self.error = None;
            }
            TodoAction::Created(todo) => {
                self.todos.push(todo);
            }
            TodoAction::Updated(todo) => {
                if let Some(slot) = self.todos.iter_mut().find(|t| t.id == todo.id) {
                    *slot = todo;
                }
            }
            TodoAction::Deleted(id) => {
                self.todos.retain(|t| t.id != id);
            }
            TodoAction::Failed(message) => {
                self.error = Some(message);
            }
        }
    }

    /// Counts for the list footer.
    pub fn stats(&self) -> TodoStats {
        let completed = self.todos.iter().filter(|t| t.completed).count();
        TodoStats {
            active: self.todos.len() - completed,
            completed,
            total: self.todos.len(),
        }
    }
}

/// Async controller driving the resource client and applying actions.
///
/// Holds the list state and a [`TodoApi`]. Every method catches its own
/// failures: the error becomes a display string in the state and the list
/// is left exactly as it was before the failed call.
#[derive(Debug)]
pub struct TodoList<F = HttpClient> {
    api: TodoApi<F>,
    state: TodoListState,
}

impl<F: Fetcher> TodoList<F> {
    /// Create a controller with an empty list.
    pub fn new(api: TodoApi<F>) -> Self {
        TodoList {
            api,
            state: TodoListState::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &TodoListState {
        &self.state
    }

    /// Load the full list once. Clears any previous error and tracks the
    /// pending-request flag for the duration of the call.
    pub async fn load(&mut self) {
        self.state.loading = true;
        self.state.error = None;
        match self.api.get_all().await {
            Ok(todos) => self.state.apply(TodoAction::Loaded(todos)),
            Err(err) => self.state.apply(TodoAction::Failed(err.to_string())),
        }
        self.state.loading = false;
    }

    /// Create a todo from a title and append the confirmed record. Blank
    /// titles are skipped without issuing a request.
    pub async fn create(&mut self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        let input = CreateTodo {
            title: title.to_string(),
            completed: false,
        };
        match self.api.create(&input).await {
            Ok(todo) => self.state.apply(TodoAction::Created(todo)),
            Err(err) => self.state.apply(TodoAction::Failed(err.to_string())),
        }
    }

    /// Flip the completion flag of the record with this id. The state takes
    /// the server-returned record, never a locally guessed one. Unknown ids
    /// are ignored.
    pub async fn toggle(&mut self, id: u64) {
        let Some(todo) = self.state.todos.iter().find(|t| t.id == id).cloned() else {
            return;
        };
        match self.api.toggle(&todo).await {
            Ok(updated) => self.state.apply(TodoAction::Updated(updated)),
            Err(err) => self.state.apply(TodoAction::Failed(err.to_string())),
        }
    }

    /// Delete the record with this id, dropping it locally only after the
    /// backend confirms.
    pub async fn remove(&mut self, id: u64) {
        match self.api.delete(id).await {
            Ok(()) => self.state.apply(TodoAction::Deleted(id)),
            Err(err) => self.state.apply(TodoAction::Failed(err.to_string())),
        }
    }
}
