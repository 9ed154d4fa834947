use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access token claims.
///
/// A fixed set of registered RFC 7519 claims. Unknown fields in a decoded
/// token are ignored and never surface to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the account identifier the token asserts, e.g. an email)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, expiring `ttl` after `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - Account identifier the token asserts
    /// * `issued_at` - Issue instant
    /// * `ttl` - Lifetime of the token
    pub fn new(subject: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let expiration = issued_at + ttl;

        Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Subject claim.
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Check if token is expired.
    ///
    /// A token stays valid up to and including its `exp` second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
