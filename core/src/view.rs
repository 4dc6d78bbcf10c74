//! DOM-free projection of the page: the todo list and the user select.
//!
//! # Design
//! Each rendered todo becomes a [`ListItem`] tagged with its id — the sole
//! correlation key back to the store. New items are prepended, so the visual
//! order is most-recently-rendered-first; an initial load pushed through
//! `prepend` therefore shows the fetched list reversed, and every created
//! todo lands at the very top. Removal of an absent id is an error, not a
//! no-op: the caller owns the existence guarantee.

use std::fmt;

use crate::error::SyncError;
use crate::types::{Todo, User};

/// One rendered todo: checkbox state plus the `"{title} by {name}"` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: u64,
    pub checked: bool,
    pub label: String,
}

impl ListItem {
    /// Project a todo into its rendering, resolving the owner's name at
    /// render time.
    pub fn for_todo(todo: &Todo, user_name: &str) -> Self {
        Self {
            id: todo.id,
            checked: todo.completed,
            label: format!("{} by {}", todo.title, user_name),
        }
    }
}

/// The rendered todo list, newest first.
#[derive(Debug, Default)]
pub struct TodoListView {
    items: Vec<ListItem>,
}

impl TodoListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Insert at the top.
    pub fn prepend(&mut self, item: ListItem) {
        self.items.insert(0, item);
    }

    /// Flip the checkbox of the item tagged with `id`. Both the optimistic
    /// flip and its rollback go through here.
    pub fn set_checked(&mut self, id: u64, checked: bool) -> Result<(), SyncError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(SyncError::MissingItem(id))?;
        item.checked = checked;
        Ok(())
    }

    /// Detach the item tagged with `id`. Fails with `MissingItem` when no
    /// such item exists — the caller must guarantee existence.
    pub fn remove(&mut self, id: u64) -> Result<(), SyncError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(SyncError::MissingItem(id))?;
        self.items.remove(position);
        Ok(())
    }
}

impl fmt::Display for TodoListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            let mark = if item.checked { 'x' } else { ' ' };
            writeln!(f, "{:>5} [{mark}] {}", item.id, item.label)?;
        }
        Ok(())
    }
}

/// A selectable user option: value is the id, label is the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOption {
    pub value: u64,
    pub label: String,
}

/// The user-selection control of the creation form. Options are appended in
/// fetch order and never removed.
#[derive(Debug, Default)]
pub struct UserSelect {
    options: Vec<UserOption>,
}

impl UserSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &[UserOption] {
        &self.options
    }

    pub fn push_option(&mut self, user: &User) {
        self.options.push(UserOption {
            value: user.id,
            label: user.name.clone(),
        });
    }
}

impl fmt::Display for UserSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for option in &self.options {
            writeln!(f, "{:>5}  {}", option.value, option.label)?;
        }
        Ok(())
    }
}
