//! In-memory store for the fetched todo and user collections.
//!
//! # Design
//! The store is the canonical client-side state: the view only ever holds a
//! disposable projection of it. Both collections are populated exactly once
//! at startup; users stay immutable afterwards, todos change through
//! `add_todo` / `remove_todo` / `set_completed`. Lookups are linear — the
//! collections are capped at the fetch limit.

use crate::error::SyncError;
use crate::types::{Todo, User};

/// Ordered todo and user collections, kept in sync with the remote state.
#[derive(Debug, Default)]
pub struct Store {
    todos: Vec<Todo>,
    users: Vec<User>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both collections with the freshly fetched lists. Called once,
    /// after both startup fetches have succeeded.
    pub fn load(&mut self, todos: Vec<Todo>, users: Vec<User>) {
        self.todos = todos;
        self.users = users;
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Append a todo. Display order is the view's concern, not the store's.
    pub fn add_todo(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Drop the todo with this id. Silent no-op when the id is absent.
    pub fn remove_todo(&mut self, id: u64) {
        self.todos.retain(|todo| todo.id != id);
    }

    /// Patch the completed flag of a stored todo. Silent no-op when absent —
    /// a racing delete may have removed the entry between flows.
    pub fn set_completed(&mut self, id: u64, completed: bool) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.completed = completed;
        }
    }

    /// Resolve a user's name by id. An unknown id is a precondition
    /// violation surfaced as `SyncError::UnknownUser`, never papered over
    /// with a placeholder name.
    pub fn user_name(&self, user_id: u64) -> Result<&str, SyncError> {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.name.as_str())
            .ok_or(SyncError::UnknownUser(user_id))
    }
}
