//! # Client state for the todo board
//!
//! Everything the views need to know about the signed-in user, their tags and
//! their tasks, without any dependency on Dioxus. Remote calls go through
//! [`api::TodoService`]; the local key-value store through [`KeyValueStore`].
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`kv`] | [`KeyValueStore`] trait; [`MemoryStore`] and, on the web, `LocalStore` implement it |
//! | [`session`] | [`Session`] controller and the [`SessionState`] snapshot passed to every store |
//! | [`auth`] | Login, signup and logout flows |
//! | [`tags`] | [`TagStore`] requests and the [`TagCache`] they reconcile into |
//! | [`tasks`] | [`TaskStore`] requests, the [`TaskCache`] and the [`TaskFilter`] deriving the visible list |
//!
//! Mutations never touch a cache directly. A store call returns a change
//! ([`TaskChange`], [`TagChange`]) describing what the service confirmed, and
//! the caller applies it to whichever cache it owns.

pub mod auth;
pub mod error;
pub mod kv;
pub mod session;
pub mod tags;
pub mod tasks;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

#[cfg(test)]
mod fake;

pub use auth::{AuthError, LoginForm, SignupForm};
pub use error::StoreError;
pub use kv::KeyValueStore;
pub use session::{Session, SessionState};
pub use tags::{TagCache, TagChange, TagStore};
pub use tasks::{InFlight, TaskCache, TaskChange, TaskFilter, TaskQuery, TaskStore};
