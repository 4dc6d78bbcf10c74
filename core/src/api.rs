//! Stateless HTTP request builder and response parser for the remote API.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Every parse checks the status BEFORE touching the body: the remote API
//! returns JSON-parseable bodies on failure too, so a clean deserialization
//! never implies success.

use crate::error::SyncError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CompletedPatch, NewTodo, Todo, User};

/// Stateless client for the `/todos` and `/users` resource collections.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. A [`crate::http::Transport`] executes the round
/// trip in between.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `/todos?_limit={limit}`. Used only at startup.
    pub fn build_list_todos(&self, limit: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos?_limit={limit}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// GET `/users`, the full collection.
    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/users", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, draft: &NewTodo) -> Result<HttpRequest, SyncError> {
        let body =
            serde_json::to_string(draft).map_err(|e| SyncError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// PATCH `/todos/{id}` with the single-field `{"completed":…}` body.
    pub fn build_set_completed(&self, id: u64, completed: bool) -> Result<HttpRequest, SyncError> {
        let body = serde_json::to_string(&CompletedPatch { completed })
            .map_err(|e| SyncError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/todos/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, SyncError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Deserialization(e.to_string()))
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, SyncError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Deserialization(e.to_string()))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, SyncError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Deserialization(e.to_string()))
    }

    pub fn parse_set_completed(&self, response: HttpResponse) -> Result<Todo, SyncError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Deserialization(e.to_string()))
    }

    /// Success is decided solely by the status; the body is ignored.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), SyncError> {
        check_success(&response)
    }
}

/// Map any non-2xx status to `SyncError::Http`, keeping the raw body.
fn check_success(response: &HttpResponse) -> Result<(), SyncError> {
    if response.is_success() {
        return Ok(());
    }
    Err(SyncError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_carries_the_limit() {
        let req = client().build_list_todos(15);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos?_limit=15");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_list_users_produces_correct_request() {
        let req = client().build_list_users();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/users");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_produces_json_post() {
        let draft = NewTodo {
            user_id: 1,
            title: "Buy milk".to_string(),
            completed: false,
        };
        let req = client().build_create_todo(&draft).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["userId"], 1);
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["completed"], false);
    }

    #[test]
    fn build_set_completed_sends_partial_body() {
        let req = client().build_set_completed(7, true).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "http://localhost:3000/todos/7");
        assert_eq!(req.body.as_deref(), Some(r#"{"completed":true}"#));
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/todos/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let body = r#"[{"id":1,"userId":1,"title":"A","completed":false}]"#;
        let todos = client().parse_list_todos(response(200, body)).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "A");
    }

    #[test]
    fn parse_list_users_success() {
        let body = r#"[{"id":1,"name":"Bob"}]"#;
        let users = client().parse_list_users(response(200, body)).unwrap();
        assert_eq!(users[0].name, "Bob");
    }

    #[test]
    fn parse_create_todo_accepts_201() {
        let body = r#"{"id":16,"userId":1,"title":"B","completed":false}"#;
        let todo = client().parse_create_todo(response(201, body)).unwrap();
        assert_eq!(todo.id, 16);
    }

    #[test]
    fn parse_set_completed_rejects_parseable_error_body() {
        // A JSON body on a 500 must not read as success.
        let err = client()
            .parse_set_completed(response(500, r#"{"error":"oops"}"#))
            .unwrap_err();
        assert!(matches!(err, SyncError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_delete_todo_ignores_body_content() {
        assert!(client().parse_delete_todo(response(200, "{}")).is_ok());
        assert!(client().parse_delete_todo(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_todo_fails_on_status_alone() {
        let err = client().parse_delete_todo(response(404, "{}")).unwrap_err();
        assert!(matches!(err, SyncError::Http { status: 404, .. }));
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client()
            .parse_list_todos(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, SyncError::Deserialization(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:3000/");
        let req = client.build_list_users();
        assert_eq!(req.path, "http://localhost:3000/users");
    }
}
