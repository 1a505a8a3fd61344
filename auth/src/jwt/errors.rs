use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature or format is invalid: {0}")]
    InvalidSignatureOrFormat(String),

    #[error("Token has no subject claim")]
    MissingSubject,

    #[error("Token is expired")]
    Expired,

    #[error("Unsupported signing algorithm: {0} (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),
}
