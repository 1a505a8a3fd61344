use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

/// Login and access-token gate backed by the user store.
///
/// Tokens carry the user's email as subject; the gate resolves it back to a
/// stored user on every protected request.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(users: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            users,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, AuthError> {
        let Credentials { email, password } = credentials;

        let user = self
            .users
            .find_by_email(email.trim())
            .await
            .map_err(|e| AuthError::UserLookup(e.to_string()))?;

        let authenticator = Arc::clone(&self.authenticator);
        let account = user
            .as_ref()
            .map(|u| (u.email.as_str().to_string(), u.password_hash.clone()));

        // An unknown email still pays for one Argon2 verification
        let result = tokio::task::spawn_blocking(move || match account {
            Some((subject, password_hash)) => Some(authenticator.authenticate(
                &password,
                &password_hash,
                Claims::for_subject(subject),
            )),
            None => {
                authenticator.verify_password_decoy(&password);
                None
            }
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Authentication task failed: {}", e)))?;

        let (Some(user), Some(result)) = (user, result) else {
            tracing::warn!(email = %email, "Login rejected: email not registered");
            return Err(AuthError::InvalidCredentials);
        };

        match result {
            Ok(result) => {
                tracing::info!(user_id = %user.id, "Access token issued");
                Ok(AccessToken {
                    access_token: result.access_token,
                    token_type: result.token_type.to_string(),
                })
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!(user_id = %user.id, "Login rejected: password mismatch");
                Err(AuthError::InvalidCredentials)
            }
            Err(AuthenticationError::JwtError(e)) => Err(AuthError::TokenIssue(e.to_string())),
        }
    }

    async fn current_user(&self, token: &str) -> Result<User, AuthError> {
        let verified = self.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Access token rejected");
            AuthError::InvalidToken(e)
        })?;

        self.users
            .find_by_email(&verified.subject)
            .await
            .map_err(|e| AuthError::UserLookup(e.to_string()))?
            .ok_or_else(|| {
                tracing::warn!(subject = %verified.subject, "Access token subject has no user");
                AuthError::UnknownSubject(verified.subject)
            })
    }
}
