//! Todo list walkthrough against a live backend.
//!
//! Demonstrates the controller driving the full CRUD surface: load,
//! create, toggle, delete, with errors surfaced as display strings.
//!
//! Run with: cargo run --example todo_list
//!
//! Expects a backend at `TODO_API_URL` (default `http://localhost:8080/api`).

use todo_client::{ClientConfig, HttpClient, TodoApi, TodoList, TodoListState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("Todo Client Demo");
    println!("================\n");

    let config = ClientConfig::from_env()?;
    println!("Backend: {}\n", config.base_url);

    let mut list = TodoList::new(TodoApi::new(HttpClient::with_config(config)));

    list.load().await;
    render(list.state());

    println!("\nCreating \"Buy milk\"...");
    list.create("Buy milk").await;
    render(list.state());

    if let Some(created) = list.state().todos.last().cloned() {
        println!("\nToggling #{}...", created.id);
        list.toggle(created.id).await;
        render(list.state());

        println!("\nDeleting #{}...", created.id);
        list.remove(created.id).await;
        render(list.state());
    }

    Ok(())
}

fn render(state: &TodoListState) {
    if let Some(message) = &state.error {
        println!("  error: {message}");
        return;
    }

    for todo in &state.todos {
        let mark = if todo.completed { "x" } else { " " };
        println!("  [{mark}] #{} {}", todo.id, todo.title);
    }

    let stats = state.stats();
    println!(
        "  {} active | {} completed | {} total",
        stats.active, stats.completed, stats.total
    );
}
