//! # Session controller
//!
//! [`Session`] wraps the local [`KeyValueStore`] and is the only code that reads
//! or writes the persisted login. Everything else works from a [`SessionState`]
//! snapshot handed to it explicitly: views receive it through context, stores
//! receive it as a constructor argument.

use api::LoginGrant;
use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

/// Key holding the signed-in user's identifier.
pub const USER_ID_KEY: &str = "user_id";
/// Key holding the optional bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Who is signed in, as last read from or written to the store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub user_id: Option<String>,
    pub token: Option<String>,
}

impl SessionState {
    /// Identifier of the signed-in user. `None` means nothing may be fetched.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Reads and writes the persisted session.
#[derive(Clone, Debug)]
pub struct Session<K: KeyValueStore> {
    store: K,
}

impl<K: KeyValueStore> Session<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Current state of the store. Blank values count as absent.
    pub fn state(&self) -> SessionState {
        SessionState {
            user_id: self.read(USER_ID_KEY),
            token: self.read(AUTH_TOKEN_KEY),
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.store.get(key).filter(|v| !v.trim().is_empty())
    }

    /// Persist a successful login. A grant without a token removes any stale one.
    pub fn sign_in(&self, grant: &LoginGrant) -> SessionState {
        self.store.set(USER_ID_KEY, &grant.user_id);
        match &grant.token {
            Some(token) => self.store.set(AUTH_TOKEN_KEY, token),
            None => self.store.remove(AUTH_TOKEN_KEY),
        }
        tracing::info!("Signed in as {}", grant.user_id);
        self.state()
    }

    /// Forget the signed-in user.
    pub fn sign_out(&self) -> SessionState {
        self.store.remove(USER_ID_KEY);
        self.store.remove(AUTH_TOKEN_KEY);
        tracing::info!("Signed out");
        SessionState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_empty_store_is_signed_out() {
        let session = Session::new(MemoryStore::new());
        let state = session.state();
        assert!(!state.is_signed_in());
        assert!(state.user_id().is_none());
    }

    #[test]
    fn test_sign_in_persists_id_and_token() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        let state = session.sign_in(&LoginGrant {
            user_id: "u1".to_string(),
            token: Some("tok".to_string()),
        });

        assert_eq!(state.user_id(), Some("u1"));
        assert_eq!(state.token(), Some("tok"));
        assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("u1"));

        // A fresh controller over the same store sees the login.
        assert_eq!(Session::new(store).state(), state);
    }

    #[test]
    fn test_sign_in_without_token_clears_old_token() {
        let store = MemoryStore::new();
        store.set(AUTH_TOKEN_KEY, "stale");
        let session = Session::new(store);

        let state = session.sign_in(&LoginGrant {
            user_id: "u2".to_string(),
            token: None,
        });

        assert!(state.token().is_none());
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        session.sign_in(&LoginGrant {
            user_id: "u1".to_string(),
            token: Some("tok".to_string()),
        });

        assert_eq!(session.sign_out(), SessionState::default());
        assert!(store.get(USER_ID_KEY).is_none());
        assert!(store.get(AUTH_TOKEN_KEY).is_none());
    }

    #[test]
    fn test_blank_user_id_counts_as_absent() {
        let store = MemoryStore::new();
        store.set(USER_ID_KEY, " ");
        assert!(!Session::new(store).state().is_signed_in());
    }
}
