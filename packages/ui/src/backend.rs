//! Shared constructors for the session store and the remote service.
//!
//! - **Web** (WASM + `web` feature): the session lives in `localStorage` via [`store::LocalStore`]
//! - **Everything else**: a process-wide [`store::MemoryStore`]
//!
//! The service is always [`api::HttpService`], configured by [`api::ClientConfig::load`]
//! and carrying the session's bearer token.

use api::{ClientConfig, HttpService};
use store::{SessionState, TagStore, TaskStore};

/// Create the platform-appropriate session controller.
pub fn make_session() -> store::Session<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Session::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static FALLBACK: std::sync::OnceLock<store::MemoryStore> = std::sync::OnceLock::new();
        store::Session::new(FALLBACK.get_or_init(store::MemoryStore::new).clone())
    }
}

/// HTTP client for the todo service, authenticated as `session`.
pub fn make_service(session: &SessionState) -> HttpService {
    HttpService::new(&ClientConfig::load()).with_token(session.token.clone())
}

/// Task requests for the signed-in user. `None` when signed out.
pub fn task_store(session: &SessionState) -> Option<TaskStore<HttpService>> {
    TaskStore::for_session(make_service(session), session)
}

/// Tag requests for the signed-in user. `None` when signed out.
pub fn tag_store(session: &SessionState) -> Option<TagStore<HttpService>> {
    TagStore::for_session(make_service(session), session)
}
