//! End-to-end tests for the list controller over a mock backend: the full
//! path from user action through the resource client and wrapper down to
//! HTTP and back into local state.

use serde_json::json;
use todo_client::{ClientConfig, HttpClient, TodoApi, TodoList};

fn list_for(server: &mockito::ServerGuard) -> TodoList<HttpClient> {
    let config = ClientConfig::new(server.url()).unwrap();
    TodoList::new(TodoApi::new(HttpClient::with_config(config)))
}

fn todo_body(id: u64, title: &str, completed: bool, stamp: &str) -> String {
    json!({
        "id": id,
        "title": title,
        "completed": completed,
        "created_at": stamp,
        "updated_at": stamp,
    })
    .to_string()
}

#[tokio::test]
async fn test_load_fills_the_list_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/todos")
        .expect(1)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            "[{},{}]",
            todo_body(1, "Buy milk", false, "T1"),
            todo_body(2, "Walk dog", true, "T1"),
        ))
        .create_async()
        .await;

    let mut list = list_for(&server);
    list.load().await;

    assert!(!list.state().loading);
    assert!(list.state().error.is_none());
    assert_eq!(list.state().todos.len(), 2);
    let stats = list.state().stats();
    assert_eq!((stats.active, stats.completed, stats.total), (1, 1, 2));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_appends_record_with_backend_id() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/todos")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("POST", "/todos")
        .match_body(mockito::Matcher::Json(
            json!({"title": "Buy milk", "completed": false}),
        ))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(todo_body(1, "Buy milk", false, "T1"))
        .create_async()
        .await;

    let mut list = list_for(&server);
    list.load().await;
    list.create("Buy milk").await;

    assert_eq!(list.state().todos.len(), 1);
    assert_eq!(list.state().todos.last().unwrap().id, 1);
}

#[tokio::test]
async fn test_remove_issues_one_delete_and_drops_the_record() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/todos")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            "[{},{}]",
            todo_body(1, "Buy milk", false, "T1"),
            todo_body(2, "Walk dog", false, "T1"),
        ))
        .create_async()
        .await;
    let delete_mock = server
        .mock("DELETE", "/todos/1")
        .expect(1)
        .with_status(204)
        .create_async()
        .await;

    let mut list = list_for(&server);
    list.load().await;
    list.remove(1).await;

    let ids: Vec<u64> = list.state().todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2]);
    delete_mock.assert_async().await;
}

#[tokio::test]
async fn test_toggle_applies_the_server_confirmed_record() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/todos")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!("[{}]", todo_body(1, "Buy milk", false, "T1")))
        .create_async()
        .await;
    server
        .mock("PUT", "/todos/1")
        .match_body(mockito::Matcher::Json(
            json!({"title": "Buy milk", "completed": true}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(todo_body(1, "Buy milk", true, "T2"))
        .create_async()
        .await;

    let mut list = list_for(&server);
    list.load().await;
    list.toggle(1).await;

    let toggled = &list.state().todos[0];
    assert!(toggled.completed);
    // The stamp proves the state took the server's record, not a local guess.
    assert_eq!(toggled.updated_at, "T2");
}

#[tokio::test]
async fn test_failure_is_caught_and_displayed_without_touching_the_list() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/todos")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!("[{}]", todo_body(1, "Buy milk", false, "T1")))
        .create_async()
        .await;
    server
        .mock("DELETE", "/todos/1")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"database unavailable"}"#)
        .create_async()
        .await;

    let mut list = list_for(&server);
    list.load().await;
    list.remove(1).await;

    assert_eq!(
        list.state().error.as_deref(),
        Some("HTTP 500: database unavailable")
    );
    assert_eq!(list.state().todos.len(), 1);
}

#[tokio::test]
async fn test_reload_clears_a_previous_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/todos")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("DELETE", "/todos/9")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"todo not found"}"#)
        .create_async()
        .await;

    let mut list = list_for(&server);
    list.load().await;
    list.remove(9).await;
    assert_eq!(list.state().error.as_deref(), Some("HTTP 404: todo not found"));

    list.load().await;
    assert!(list.state().error.is_none());
}
