use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::JwtError;

/// Lifetime of an access token unless configured otherwise.
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 30;

/// Mints signed, time-limited access tokens.
///
/// The secret and algorithm are fixed for the lifetime of the issuer. A token produced
/// here is self-contained: any [`TokenVerifier`](super::TokenVerifier) built from the same
/// secret and algorithm accepts it until `exp`.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    expiration: Duration,
}

impl TokenIssuer {
    /// Create an issuer.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret (at least 32 bytes for HS256)
    /// * `algorithm` - HMAC signing algorithm
    /// * `expiration` - Token lifetime added to the issuing time
    pub fn new(secret: &[u8], algorithm: Algorithm, expiration: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm,
            expiration,
        }
    }

    /// Token lifetime.
    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    /// Stamp `iat`/`exp` onto the claims and sign them.
    ///
    /// Any `iat` or `exp` already present is overwritten.
    ///
    /// # Errors
    /// * `MissingSubject` - Claims carry no subject
    /// * `EncodingFailed` - Token encoding failed or the expiry is not representable
    pub fn issue(&self, claims: Claims) -> Result<String, JwtError> {
        if claims.subject().is_none() {
            return Err(JwtError::MissingSubject);
        }

        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.expiration)
            .ok_or_else(|| JwtError::EncodingFailed("Token expiration out of range".to_string()))?;
        let claims = claims
            .with_issued_at(now.timestamp())
            .with_expiration(expires_at.timestamp());

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}
