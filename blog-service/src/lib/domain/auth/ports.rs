use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::Credentials;
use crate::domain::user::models::User;

/// Port for login and access-token resolution.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange an email and password for an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Email is not registered or the password does not match
    /// * `TokenIssue` - Signing the token failed
    /// * `UserLookup` - User store unavailable
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, AuthError>;

    /// Resolve the user a bearer token was issued for.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, tampered with, expired, or has no subject
    /// * `UnknownSubject` - Token is valid but no user owns its subject
    /// * `UserLookup` - User store unavailable
    async fn current_user(&self, token: &str) -> Result<User, AuthError>;
}
