use thiserror::Error;

/// Errors of the login and token gate flows.
///
/// The two client-facing variants carry fixed messages so that responses
/// never reveal which check failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown identifier or wrong secret at login.
    #[error("Incorrect email or password")]
    AuthenticationFailed,

    /// Missing, malformed, wrongly signed or expired token, or a subject
    /// that no longer resolves to a user.
    #[error("Could not validate credentials")]
    InvalidToken,

    #[error("Internal authentication error: {0}")]
    Internal(String),
}
