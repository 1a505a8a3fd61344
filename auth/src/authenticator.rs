use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenVerifier;
use crate::jwt::VerifiedToken;
use crate::jwt::DEFAULT_EXPIRATION_MINUTES;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Token type reported alongside every issued access token.
pub const BEARER_TOKEN_TYPE: &str = "bearer";

/// Authentication coordinator combining password verification and JWT handling.
///
/// Built once at startup from the signing secret and shared read-only afterwards.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_verifier: TokenVerifier,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
    /// Always [`BEARER_TOKEN_TYPE`]
    pub token_type: &'static str,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create an authenticator using HS256 and the default 30 minute token lifetime.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_settings(
            jwt_secret,
            Algorithm::HS256,
            Duration::minutes(DEFAULT_EXPIRATION_MINUTES),
        )
    }

    /// Create an authenticator with an explicit algorithm and token lifetime.
    pub fn with_settings(jwt_secret: &[u8], algorithm: Algorithm, expiration: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(jwt_secret, algorithm, expiration),
            token_verifier: TokenVerifier::new(jwt_secret, algorithm),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Spend one password verification on an account that does not exist.
    pub fn verify_password_decoy(&self, password: &str) {
        self.password_hasher.verify_decoy(password)
    }

    /// Verify credentials and issue a token for `claims`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: Claims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_issuer.issue(claims)?;

        Ok(AuthenticationResult {
            access_token,
            token_type: BEARER_TOKEN_TYPE,
        })
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Claims lack a subject or encoding failed
    pub fn generate_token(&self, claims: Claims) -> Result<String, JwtError> {
        self.token_issuer.issue(claims)
    }

    /// Validate and decode a token.
    ///
    /// # Errors
    /// * `JwtError` - Token is malformed, tampered with, expired, or has no subject
    pub fn validate_token(&self, token: &str) -> Result<VerifiedToken, JwtError> {
        self.token_verifier.verify(token)
    }

    /// Lifetime of issued tokens.
    pub fn token_lifetime(&self) -> Duration {
        self.token_issuer.expiration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, Claims::for_subject("alice@example.com"))
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());
        assert_eq!(result.token_type, "bearer");

        let verified = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(verified.subject, "alice@example.com");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate(
            "wrong_password",
            &hash,
            Claims::for_subject("alice@example.com"),
        );
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_default_token_lifetime() {
        let authenticator = Authenticator::new(SECRET);
        assert_eq!(authenticator.token_lifetime(), Duration::minutes(30));
    }

    #[test]
    fn test_secret_rotation_invalidates_tokens() {
        let old = Authenticator::new(SECRET);
        let new = Authenticator::new(b"rotated_secret_key_at_least_32_bytes");

        let token = old
            .generate_token(Claims::for_subject("alice@example.com"))
            .expect("Failed to generate token");

        assert!(old.validate_token(&token).is_ok());
        assert!(matches!(
            new.validate_token(&token),
            Err(JwtError::InvalidSignatureOrFormat(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let authenticator =
            Authenticator::with_settings(SECRET, Algorithm::HS256, Duration::seconds(-30));

        let token = authenticator
            .generate_token(Claims::for_subject("alice@example.com"))
            .expect("Failed to generate token");

        assert_eq!(authenticator.validate_token(&token), Err(JwtError::Expired));
    }
}
