//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the task service:
//! - Password hashing (Argon2id, salted, constant-time verification)
//! - Access token issuance and verification (HMAC-signed JWT)
//! - Authentication coordination
//!
//! Looking a subject up in a credential store is left to the service, which
//! owns the store.
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
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{JwtKeys, TokenIssuer, TokenVerifier};
//! use chrono::Duration;
//!
//! let keys = JwtKeys::hs256(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let issuer = TokenIssuer::new(keys.clone());
//! let verifier = TokenVerifier::new(keys);
//!
//! let token = issuer.issue("a@x.com", Duration::minutes(30)).unwrap();
//! let claims = verifier.verify(&token).unwrap();
//! assert_eq!(claims.sub, "a@x.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, JwtKeys};
//! use chrono::Duration;
//!
//! let keys = JwtKeys::hs256(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let auth = Authenticator::new(keys, Duration::minutes(30));
//!
//! // Register: hash password
//! let hash = auth.hash_password("pw123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("pw123", &hash, "a@x.com").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "a@x.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::BEARER;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtKeys;
pub use jwt::TokenIssuer;
pub use jwt::TokenVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
