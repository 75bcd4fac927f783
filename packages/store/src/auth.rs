//! # Login and signup flows
//!
//! The form views collect input into a [`LoginForm`] or [`SignupForm`] and hand
//! it to [`login`] or [`signup`]. Both issue exactly one request and never
//! retry. Failures come back as an [`AuthError`] whose message the form shows
//! as-is:
//!
//! | Failure | Message |
//! |---------|---------|
//! | local validation | the validation message, nothing is sent |
//! | login answered 401 | "Incorrect email or password" |
//! | anything else | the service's `message`, or "Login failed" / "Signup failed" |

use api::{ApiError, Credentials, NewUser, TodoService};
use thiserror::Error;

use crate::kv::KeyValueStore;
use crate::session::{Session, SessionState};

/// Shortest password accepted by the signup form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Why a login or signup attempt failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// Rejected locally, nothing was sent.
    #[error("{0}")]
    Validation(String),
    /// The service rejected the email/password pair.
    #[error("Incorrect email or password")]
    InvalidCredentials,
    /// Any other failure, already phrased for the user.
    #[error("{0}")]
    Request(String),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Input of the login form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() {
            return Err(AuthError::Validation("Please enter your email".to_string()));
        }
        if self.password.trim().is_empty() {
            return Err(AuthError::Validation(
                "Please enter your password".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input of the signup form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Email must contain `@`, password must have [`MIN_PASSWORD_LEN`] characters.
    pub fn validate(&self) -> Result<(), AuthError> {
        if !self.email.contains('@') {
            return Err(AuthError::Validation(
                "Please enter a valid email".to_string(),
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// Result of a successful signup: where the login form should pick up.
#[derive(Clone, Debug, PartialEq)]
pub struct SignedUp {
    pub user_id: Option<String>,
    /// The submitted email, to pre-fill the login form.
    pub email: String,
}

/// Log in and persist the session. Returns the new session state.
pub async fn login<S, K>(
    service: &S,
    session: &Session<K>,
    form: &LoginForm,
) -> Result<SessionState, AuthError>
where
    S: TodoService,
    K: KeyValueStore,
{
    form.validate()?;
    let credentials = Credentials::new(&form.email, &form.password);
    match service.login(&credentials).await {
        Ok(grant) => Ok(session.sign_in(&grant)),
        Err(ApiError::Unauthorized) => {
            tracing::warn!("Login rejected for {}", credentials.email);
            Err(AuthError::InvalidCredentials)
        }
        Err(err) => {
            tracing::error!("Login failed: {}", err);
            Err(AuthError::Request(err.message_or("Login failed")))
        }
    }
}

/// Register a new account. Does not sign in.
pub async fn signup<S: TodoService>(service: &S, form: &SignupForm) -> Result<SignedUp, AuthError> {
    form.validate()?;
    let user = NewUser::new(&form.name, &form.email, &form.password);
    match service.signup(&user).await {
        Ok(user_id) => {
            tracing::info!("Signed up {}", user.email);
            Ok(SignedUp {
                user_id,
                email: user.email,
            })
        }
        Err(err) => {
            tracing::error!("Signup failed: {}", err);
            Err(AuthError::Request(err.message_or("Signup failed")))
        }
    }
}

/// Sign out. Returns the (empty) session state.
pub fn logout<K: KeyValueStore>(session: &Session<K>) -> SessionState {
    session.sign_out()
}
