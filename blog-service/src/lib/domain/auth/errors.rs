use auth::JwtError;
use thiserror::Error;

/// Errors raised while logging in or resolving the caller of a protected request.
///
/// Every variant except `UserLookup` and `Internal` is an authentication failure and
/// surfaces to the client as a generic 401.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid access token: {0}")]
    InvalidToken(#[from] JwtError),

    #[error("No user registered for token subject {0}")]
    UnknownSubject(String),

    #[error("Token issuing failed: {0}")]
    TokenIssue(String),

    #[error("User lookup failed: {0}")]
    UserLookup(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
