//! # API crate: typed access to the remote todo service
//!
//! This crate is the only place that knows the wire shapes and URLs of the remote
//! task/tag/auth service. The `store` crate and the views talk to it exclusively
//! through the [`TodoService`] trait, so the same client state logic runs against
//! the real HTTP backend ([`HttpService`]) or an in-memory fake in tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | [`ClientConfig`]: base URL of the service, TOML (de)serialisation, compile-time override |
//! | [`error`] | [`ApiError`]: every way a request can fail, plus the user-facing message helpers |
//! | [`models`] | Domain entities ([`Tag`], [`Task`]), request bodies and the lenient wire records they are decoded from |
//! | [`http`] | [`HttpService`]: the `reqwest` implementation of [`TodoService`] |
//!
//! ## Endpoints
//!
//! | Call | Request |
//! |------|---------|
//! | [`TodoService::signup`] | `POST /v1/users` |
//! | [`TodoService::login`] | `POST /v1/users/login` |
//! | [`TodoService::list_tags`] | `GET /v1/tags?user_id=` |
//! | [`TodoService::create_tag`] | `POST /v1/tags` |
//! | [`TodoService::list_tasks`] | `GET /v1/tasks?user_id=` |
//! | [`TodoService::list_tasks_by_tag`] | `GET /v1/tags/tasks?tag_id=` |
//! | [`TodoService::create_task`] | `POST /v1/tasks` |
//! | [`TodoService::update_task`] | `PUT /v1/tasks/:id` |
//! | [`TodoService::set_completed`] | `PUT /v1/tasks/:id/set-completed` |
//! | [`TodoService::delete_task`] | `DELETE /v1/tasks/:id` |

use std::future::Future;

pub mod config;
pub mod error;
pub mod http;
pub mod models;

pub use config::ClientConfig;
pub use error::ApiError;
pub use http::HttpService;
pub use models::{
    Credentials, LoginGrant, NewTag, NewTask, NewUser, Tag, Task, TaskEdit, DEFAULT_TAG_COLOR,
    TAG_COLORS,
};

/// Async interface to the remote todo service.
///
/// Create and update calls return the entity as confirmed by the service. Callers
/// replace their cached copy with it instead of merging local edits.
pub trait TodoService {
    /// Register a new account. Returns the new user id when the service reports one.
    fn signup(
        &self,
        user: &NewUser,
    ) -> impl Future<Output = Result<Option<String>, ApiError>>;

    /// Exchange credentials for a user id and optional bearer token.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginGrant, ApiError>>;

    fn list_tags(&self, user_id: &str) -> impl Future<Output = Result<Vec<Tag>, ApiError>>;

    fn create_tag(&self, tag: &NewTag) -> impl Future<Output = Result<Tag, ApiError>>;

    fn list_tasks(&self, user_id: &str) -> impl Future<Output = Result<Vec<Task>, ApiError>>;

    /// List tasks carrying `tag_id`, filtered by the service.
    fn list_tasks_by_tag(
        &self,
        tag_id: &str,
    ) -> impl Future<Output = Result<Vec<Task>, ApiError>>;

    fn create_task(&self, task: &NewTask) -> impl Future<Output = Result<Task, ApiError>>;

    /// Replace title, content and tag of `task`.
    fn update_task(
        &self,
        task: &Task,
        edit: &TaskEdit,
    ) -> impl Future<Output = Result<Task, ApiError>>;

    fn set_completed(
        &self,
        task: &Task,
        completed: bool,
    ) -> impl Future<Output = Result<Task, ApiError>>;

    fn delete_task(&self, task_id: &str) -> impl Future<Output = Result<(), ApiError>>;
}
