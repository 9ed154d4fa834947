use std::sync::OnceLock;

use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtKeys;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenVerifier;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Token type reported alongside issued access tokens.
pub const BEARER: &str = "bearer";

const DECOY_PASSWORD: &str = "decoy-password-for-unknown-subjects";

/// Authentication coordinator combining password verification and JWT handling.
///
/// Holds the process-wide signing keys and token lifetime. Cheap to share
/// behind an `Arc`; nothing in it is mutable.
#[derive(Debug, Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_verifier: TokenVerifier,
    token_ttl: Duration,
    decoy_hash: OnceLock<String>,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,

    /// Always `"bearer"`
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
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `keys` - Signing keys shared by issuer and verifier
    /// * `token_ttl` - Lifetime of issued access tokens
    pub fn new(keys: JwtKeys, token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(keys.clone()),
            token_verifier: TokenVerifier::new(keys),
            token_ttl,
            decoy_hash: OnceLock::new(),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue an access token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier the token will assert
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject)?;

        Ok(AuthenticationResult {
            access_token,
            token_type: BEARER,
        })
    }

    /// Reject a login for a subject that has no stored credential.
    ///
    /// Runs a full password verification against a decoy hash first, so the
    /// rejection costs the same as a wrong password for a known subject.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        match self.decoy_hash() {
            Ok(decoy) => {
                let _ = self.password_hasher.verify(password, decoy);
            }
            Err(e) => tracing::warn!(error = %e, "Failed to build decoy password hash"),
        }
        AuthenticationError::InvalidCredentials
    }

    /// Argon2 hash of a fixed password, computed once on first use.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn decoy_hash(&self) -> Result<&str, PasswordError> {
        if let Some(hash) = self.decoy_hash.get() {
            return Ok(hash);
        }
        let hash = self.password_hasher.hash(DECOY_PASSWORD)?;
        Ok(self.decoy_hash.get_or_init(|| hash))
    }

    /// Issue an access token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, subject: &str) -> Result<String, JwtError> {
        self.token_issuer.issue(subject, self.token_ttl)
    }

    /// Validate and decode an access token.
    ///
    /// # Errors
    /// * `InvalidToken` - Any validation failure
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_verifier.verify(token)
    }
}
