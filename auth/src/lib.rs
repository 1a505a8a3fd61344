//! Authentication utilities library
//!
//! Provides the authentication building blocks for the blog service:
//! - Password hashing (Argon2id)
//! - Access token issuing and verification (HMAC-signed JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth
//!     .authenticate("password123", &hash, Claims::for_subject("alice@example.com"))
//!     .unwrap();
//! assert_eq!(result.token_type, "bearer");
//!
//! // Validate token
//! let verified = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(verified.subject, "alice@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::BEARER_TOKEN_TYPE;
pub use jwt::hmac_algorithm;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use jwt::TokenVerifier;
pub use jwt::VerifiedToken;
pub use password::PasswordError;
pub use password::PasswordHasher;

pub use jsonwebtoken::Algorithm;
