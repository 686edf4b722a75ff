//! Domain DTOs and the backend error envelope.
//!
//! The record shape mirrors the backend model exactly; list and get calls
//! return it with no extra transformation. Identifiers and both timestamps
//! are assigned by the backend and never set by the client. The timestamps
//! are carried as opaque RFC 3339 strings because nothing on this side
//! interprets them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single todo record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Backend-assigned identifier, immutable once assigned.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Backend-assigned creation timestamp (RFC 3339).
    pub created_at: String,
    /// Backend-assigned last-modified timestamp (RFC 3339).
    pub updated_at: String,
}

/// Payload for creating a new todo. The backend assigns the identifier and
/// both timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    /// Title of the new todo.
    pub title: String,
    /// Initial completion flag.
    pub completed: bool,
}

/// Payload for updating an existing todo. Full replacement semantics: both
/// fields are always sent, this is not a partial patch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    /// Replacement title.
    pub title: String,
    /// Replacement completion flag.
    pub completed: bool,
}

/// Structured error body produced by the backend on non-success responses.
///
/// Every field is optional; a response body that is not valid JSON
/// re-hydrates as the empty envelope. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    /// Human-readable message, preferred when deriving a display string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Alternative message field used by some backend handlers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-readable error kind.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Field-level validation detail, keyed by field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

impl ErrorEnvelope {
    /// Derive a human-readable message: `message`, then `error`, then a
    /// generic `HTTP <status> error` fallback.
    pub fn message_or_fallback(&self, status: u16) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| format!("HTTP {status} error"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_deserializes_backend_shape() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":1,"title":"Buy milk","completed":false,
                "created_at":"2024-05-01T10:00:00Z","updated_at":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.created_at, "2024-05-01T10:00:00Z");
    }

    #[test]
    fn test_update_todo_sends_both_fields() {
        let payload = UpdateTodo {
            title: "Buy milk".to_string(),
            completed: true,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["completed"], true);
    }

    #[test]
    fn test_envelope_prefers_message_field() {
        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"message":"title required","error":"bad request"}"#).unwrap();
        assert_eq!(envelope.message_or_fallback(422), "title required");
    }

    #[test]
    fn test_envelope_falls_back_to_error_field() {
        let envelope: ErrorEnvelope = serde_json::from_str(r#"{"error":"bad request"}"#).unwrap();
        assert_eq!(envelope.message_or_fallback(422), "bad request");
    }

    #[test]
    fn test_envelope_generic_fallback() {
        let envelope = ErrorEnvelope::default();
        assert_eq!(envelope.message_or_fallback(503), "HTTP 503 error");
    }

    #[test]
    fn test_envelope_ignores_unknown_fields() {
        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"error":"nope","trace_id":"abc123"}"#).unwrap();
        assert_eq!(envelope.error.as_deref(), Some("nope"));
    }

    #[test]
    fn test_envelope_details_mapping() {
        let envelope: ErrorEnvelope = serde_json::from_str(
            r#"{"error":"validation failed","type":"validation","details":{"title":"required"}}"#,
        )
        .unwrap();
        assert_eq!(envelope.kind.as_deref(), Some("validation"));
        let details = envelope.details.unwrap();
        assert_eq!(details.get("title").map(String::as_str), Some("required"));
    }
}
