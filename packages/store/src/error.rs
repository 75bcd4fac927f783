//! Errors from tag and task operations.

use api::ApiError;
use thiserror::Error;

/// Why a tag or task operation failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Rejected locally, nothing was sent.
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl StoreError {
    /// Short message for the form that issued the request.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Api(ApiError::Network(_)) => {
                "Could not reach the server. Please try again.".to_string()
            }
            Self::Api(err) => err.message_or("Request failed"),
        }
    }
}
