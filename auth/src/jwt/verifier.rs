use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// A token that passed signature, expiry, and subject checks.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedToken {
    /// Identity the token was issued for
    pub subject: String,
    /// Full decoded payload
    pub claims: Claims,
}

/// Validates access tokens. Holds no per-token state.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a verifier for tokens signed with `secret` under `algorithm`.
    ///
    /// `exp` is mandatory and checked with zero leeway; tokens signed with any
    /// other algorithm are rejected.
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Decode and validate a token.
    ///
    /// # Errors
    /// * `Expired` - Current time is past `exp`
    /// * `MissingSubject` - Payload has no (or an empty) `sub`
    /// * `InvalidSignatureOrFormat` - Anything else: bad signature, wrong algorithm,
    ///   malformed segments, missing `exp`
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, JwtError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::Expired,
                    _ => JwtError::InvalidSignatureOrFormat(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        let subject = claims
            .subject()
            .map(str::to_string)
            .ok_or(JwtError::MissingSubject)?;

        Ok(VerifiedToken { subject, claims })
    }
}
