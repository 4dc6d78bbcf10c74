//! In-process stand-in for the remote todo API.
//!
//! Emulates the resource model the client depends on: integer server-assigned
//! ids, `_limit` on the todo listing, PATCH with a partial body, and a fixed
//! user collection that is never mutated.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

/// Insertion-ordered todos plus the id counter. Users live outside the lock;
/// they are immutable.
#[derive(Debug)]
pub struct Db {
    todos: Vec<Todo>,
    next_id: u64,
}

pub type SharedDb = Arc<RwLock<Db>>;

/// The fixed user collection every instance serves.
pub fn seed_users() -> Vec<User> {
    [
        (1, "Leanne Graham"),
        (2, "Ervin Howell"),
        (3, "Clementine Bauch"),
    ]
    .into_iter()
    .map(|(id, name)| User {
        id,
        name: name.to_string(),
    })
    .collect()
}

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router over a pre-seeded todo collection. The id counter starts past the
/// highest seeded id.
pub fn app_with(todos: Vec<Todo>) -> Router {
    let next_id = todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1;
    let db: SharedDb = Arc::new(RwLock::new(Db { todos, next_id }));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", axum::routing::patch(update_todo).delete(delete_todo))
        .route("/users", get(list_users))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(
    State(db): State<SharedDb>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Todo>> {
    let db = db.read().await;
    let todos = match params.limit {
        Some(limit) => db.todos.iter().take(limit).cloned().collect(),
        None => db.todos.clone(),
    };
    Json(todos)
}

async fn list_users() -> Json<Vec<User>> {
    Json(seed_users())
}

async fn create_todo(
    State(db): State<SharedDb>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let mut db = db.write().await;
    let todo = Todo {
        id: db.next_id,
        user_id: input.user_id,
        title: input.title,
        completed: input.completed,
    };
    db.next_id += 1;
    db.todos.push(todo.clone());
    tracing::debug!(id = todo.id, "todo created");
    (StatusCode::CREATED, Json(todo))
}

async fn update_todo(
    State(db): State<SharedDb>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut db = db.write().await;
    let todo = db
        .todos
        .iter_mut()
        .find(|todo| todo.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<SharedDb>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut db = db.write().await;
    let position = db
        .todos
        .iter()
        .position(|todo| todo.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    db.todos.remove(position);
    Ok(StatusCode::NO_CONTENT)
}
