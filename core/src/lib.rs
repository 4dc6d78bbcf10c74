//! Client core for the todoboard app: a todo list synchronized with a
//! remote REST API.
//!
//! # Overview
//! Translates four CRUD operations (list, create, toggle-complete, delete)
//! into HTTP calls and view mutations. The crate performs no I/O itself
//! (host-does-IO pattern): `ApiClient` builds `HttpRequest` values and
//! parses `HttpResponse` values, and a host-supplied [`Transport`] executes
//! the round trips, making the whole controller deterministic and testable.
//!
//! # Design
//! - [`Store`] is the canonical client-side state; the view holds only a
//!   disposable projection keyed by todo id.
//! - [`App`] is the controller: `Bootstrapping` until both startup fetches
//!   succeed (all-or-nothing), then `Ready` for the create, toggle, and
//!   delete flows. Toggle is optimistic with rollback; create and delete
//!   apply nothing before the server confirms.
//! - Every flow returns `Result<_, SyncError>` — the structured error
//!   channel a host surfaces however it likes.

pub mod api;
pub mod app;
pub mod error;
pub mod http;
pub mod store;
pub mod types;
pub mod view;

pub use api::ApiClient;
pub use app::{App, Event, Phase};
pub use error::SyncError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use store::Store;
pub use types::{CompletedPatch, NewTodo, Todo, User};
pub use view::{ListItem, TodoListView, UserOption, UserSelect};
