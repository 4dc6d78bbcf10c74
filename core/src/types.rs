//! Domain DTOs for the remote todo API.
//!
//! # Design
//! These types mirror the remote resource model (`/todos`, `/users`) but are
//! defined independently of the mock-server crate; integration tests catch
//! any schema drift. The wire format is camelCase JSON (`userId`), so the
//! todo types carry a serde rename.

use serde::{Deserialize, Serialize};

/// A single todo item as the API represents it. `id` is server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

/// A user owning todos. Fetched once at startup, never mutated by this client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// Request payload for creating a new todo. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Partial PATCH body for the toggle operation. Serializes to exactly
/// `{"completed":<bool>}` so the server touches no other field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedPatch {
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_uses_camel_case_on_the_wire() {
        let todo = Todo {
            id: 1,
            user_id: 2,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["userId"], 2);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 16,
            user_id: 1,
            title: "Roundtrip".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn new_todo_defaults_completed_to_false() {
        let input: NewTodo =
            serde_json::from_str(r#"{"userId":1,"title":"No completed field"}"#).unwrap();
        assert_eq!(input.user_id, 1);
        assert!(!input.completed);
    }

    #[test]
    fn completed_patch_serializes_single_field() {
        let body = serde_json::to_string(&CompletedPatch { completed: true }).unwrap();
        assert_eq!(body, r#"{"completed":true}"#);
    }
}
