//! # Account payloads
//!
//! The client never reads or edits a user record; it only registers one and
//! logs in with it. Accordingly this module holds the two request bodies
//! ([`NewUser`], [`Credentials`]) and the decoded login result ([`LoginGrant`]).
//!
//! Request bodies are trimmed on construction, the same normalisation the login
//! and signup forms apply before submitting.

use serde::{Deserialize, Serialize};

/// Body of `POST /v1/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.trim().to_string(),
        }
    }
}

/// Body of `POST /v1/users/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.trim().to_string(),
        }
    }
}

/// Raw signup answer. Only the identifier is of interest.
#[derive(Debug, Default, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
}

impl SignupResponse {
    pub fn into_id(self) -> Option<String> {
        self.id.or(self.mongo_id)
    }
}

/// Raw login answer: `{id, token?}`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// A successful login: who the user is and, optionally, how to authenticate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginGrant {
    pub user_id: String,
    pub token: Option<String>,
}

impl LoginResponse {
    /// `None` when the service answered without an identifier.
    pub fn into_grant(self) -> Option<LoginGrant> {
        let user_id = self.id.or(self.mongo_id).filter(|id| !id.is_empty())?;
        Some(LoginGrant {
            user_id,
            token: self.token.filter(|t| !t.is_empty()),
        })
    }
}
