//! Interaction controller: binds events to flows over store, view, and API.
//!
//! # Design
//! [`App`] owns the store, both view surfaces, the request builder, and the
//! host-supplied transport. It starts in `Bootstrapping` and only reaches
//! `Ready` once BOTH startup fetches have parsed successfully — a failure of
//! either leaves store and view untouched, so a partial load never renders.
//! Handlers refuse to run before `Ready`.
//!
//! Flow rules:
//! - create is not optimistic: the item renders only after the server
//!   assigned its id, and the store gains the entry in the same step.
//! - toggle IS optimistic: the checkbox flips before the round trip and is
//!   rolled back on any failure; the store is patched on success only.
//! - delete is not optimistic: nothing changes until the server confirms.
//!
//! Every flow returns `Result`, the structured error channel; the host
//! decides how to surface a failure. No failure is fatal to the app.

use crate::api::ApiClient;
use crate::error::SyncError;
use crate::http::Transport;
use crate::store::Store;
use crate::types::{NewTodo, Todo};
use crate::view::{ListItem, TodoListView, UserSelect};

/// Controller lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the initial load completed; store and view are empty.
    Bootstrapping,
    /// Steady state, handlers accepted.
    Ready,
}

/// A user-initiated event, with its payload made explicit.
#[derive(Debug, Clone)]
pub enum Event {
    /// Form submission: selected user plus entered title.
    Submit { user_id: u64, title: String },
    /// Checkbox change on the item tagged `id`; `completed` is the new state.
    Toggle { id: u64, completed: bool },
    /// Click on an item's close affordance.
    Remove { id: u64 },
}

/// The client application: store, rendered views, and remote flows.
#[derive(Debug)]
pub struct App<T: Transport> {
    client: ApiClient,
    transport: T,
    store: Store,
    list: TodoListView,
    select: UserSelect,
    phase: Phase,
}

impl<T: Transport> App<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: ApiClient::new(base_url),
            transport,
            store: Store::new(),
            list: TodoListView::new(),
            select: UserSelect::new(),
            phase: Phase::Bootstrapping,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn list(&self) -> &TodoListView {
        &self.list
    }

    pub fn select(&self) -> &UserSelect {
        &self.select
    }

    /// Initial load: fetch both collections, then render. All-or-nothing —
    /// if either fetch or parse fails, nothing is stored and nothing is
    /// rendered, and the app stays in `Bootstrapping`.
    pub fn bootstrap(&mut self, limit: u32) -> Result<(), SyncError> {
        let todos_req = self.client.build_list_todos(limit);
        let users_req = self.client.build_list_users();

        let todos = self.client.parse_list_todos(self.transport.execute(&todos_req)?)?;
        let users = self.client.parse_list_users(self.transport.execute(&users_req)?)?;

        // Resolve every owner before touching the view, so a bad userId
        // cannot leave a half-rendered list behind.
        let mut items = Vec::with_capacity(todos.len());
        for todo in &todos {
            let name = users
                .iter()
                .find(|user| user.id == todo.user_id)
                .map(|user| user.name.as_str())
                .ok_or(SyncError::UnknownUser(todo.user_id))?;
            items.push(ListItem::for_todo(todo, name));
        }

        // Prepending in fetch order reverses the list visually.
        for item in items {
            self.list.prepend(item);
        }
        for user in &users {
            self.select.push_option(user);
        }
        tracing::debug!(todos = todos.len(), users = users.len(), "initial load complete");

        self.store.load(todos, users);
        self.phase = Phase::Ready;
        Ok(())
    }

    /// Create flow: POST the draft, then store and render the server's
    /// representation (which carries the assigned id) at the top of the list.
    pub fn create(&mut self, user_id: u64, title: &str) -> Result<u64, SyncError> {
        self.ensure_ready()?;
        let draft = NewTodo {
            user_id,
            title: title.to_string(),
            completed: false,
        };
        let request = self.client.build_create_todo(&draft)?;
        let created = self.client.parse_create_todo(self.transport.execute(&request)?)?;
        tracing::debug!(id = created.id, "todo created");

        let name = self.store.user_name(created.user_id)?.to_string();
        self.list.prepend(ListItem::for_todo(&created, &name));
        let id = created.id;
        self.store.add_todo(created);
        Ok(id)
    }

    /// Toggle flow, optimistic: flip the rendered checkbox first, then PATCH.
    /// On success the store entry is patched with the server's state; on any
    /// failure the checkbox reverts and the error propagates.
    pub fn toggle(&mut self, id: u64, completed: bool) -> Result<(), SyncError> {
        self.ensure_ready()?;
        self.list.set_checked(id, completed)?;
        match self.push_completed(id, completed) {
            Ok(updated) => {
                self.store.set_completed(updated.id, updated.completed);
                Ok(())
            }
            Err(err) => {
                // Rollback. The item cannot have vanished in between: flows
                // run to completion on this single-threaded app.
                self.list.set_checked(id, !completed)?;
                Err(err)
            }
        }
    }

    /// Delete flow, not optimistic: nothing changes until the server
    /// confirms, then the todo leaves store and view together.
    pub fn remove(&mut self, id: u64) -> Result<(), SyncError> {
        self.ensure_ready()?;
        let request = self.client.build_delete_todo(id);
        self.client.parse_delete_todo(self.transport.execute(&request)?)?;
        self.store.remove_todo(id);
        self.list.remove(id)
    }

    /// Event-to-flow dispatch.
    pub fn handle(&mut self, event: Event) -> Result<(), SyncError> {
        match event {
            Event::Submit { user_id, title } => self.create(user_id, &title).map(|_| ()),
            Event::Toggle { id, completed } => self.toggle(id, completed),
            Event::Remove { id } => self.remove(id),
        }
    }

    fn push_completed(&mut self, id: u64, completed: bool) -> Result<Todo, SyncError> {
        let request = self.client.build_set_completed(id, completed)?;
        self.client.parse_set_completed(self.transport.execute(&request)?)
    }

    fn ensure_ready(&self) -> Result<(), SyncError> {
        match self.phase {
            Phase::Ready => Ok(()),
            Phase::Bootstrapping => Err(SyncError::NotReady),
        }
    }
}
