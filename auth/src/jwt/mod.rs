pub mod claims;
pub mod errors;
pub mod issuer;
pub mod verifier;

use std::str::FromStr;

use jsonwebtoken::Algorithm;

pub use claims::Claims;
pub use errors::JwtError;
pub use issuer::TokenIssuer;
pub use issuer::DEFAULT_EXPIRATION_MINUTES;
pub use verifier::TokenVerifier;
pub use verifier::VerifiedToken;

/// Parse a signing algorithm name, accepting only the symmetric HMAC family.
///
/// # Errors
/// * `UnsupportedAlgorithm` - Unknown name or an asymmetric algorithm
pub fn hmac_algorithm(name: &str) -> Result<Algorithm, JwtError> {
    match Algorithm::from_str(name) {
        Ok(algorithm @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(algorithm),
        _ => Err(JwtError::UnsupportedAlgorithm(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_algorithm() {
        assert_eq!(hmac_algorithm("HS256"), Ok(Algorithm::HS256));
        assert_eq!(hmac_algorithm("HS512"), Ok(Algorithm::HS512));
        assert!(matches!(
            hmac_algorithm("RS256"),
            Err(JwtError::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            hmac_algorithm("none"),
            Err(JwtError::UnsupportedAlgorithm(_))
        ));
    }
}
