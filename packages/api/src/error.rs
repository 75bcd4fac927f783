//! Errors returned by [`crate::TodoService`] implementations.

use serde::Deserialize;
use thiserror::Error;

/// Why a request to the todo service failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The service answered `401 Unauthorized`.
    #[error("unauthorized")]
    Unauthorized,
    /// Any other non-2xx answer. `message` is the `message` field of a JSON error body.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(String),
    /// A success response did not carry the identifier of the entity.
    #[error("response is missing an id")]
    MissingId,
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a status code and the raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        Self::Status {
            status,
            message: error_message(body),
        }
    }

    /// The message the service attached to this failure, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Service message when present, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message().unwrap_or(fallback).to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}
