use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::JwtError;
use super::keys::JwtKeys;

/// Signs access tokens.
///
/// Stateless: the output is a compact `header.payload.signature` string whose
/// validity is entirely computed at verification time.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    keys: JwtKeys,
}

impl TokenIssuer {
    pub fn new(keys: JwtKeys) -> Self {
        Self { keys }
    }

    /// Issue a token for `subject` expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, JwtError> {
        self.issue_at(subject, ttl, Utc::now())
    }

    /// Issue a token with an explicit issue instant.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_at(
        &self,
        subject: &str,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        self.sign(&Claims::new(subject, issued_at, ttl))
    }

    fn sign(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.keys.algorithm());

        encode(&header, claims, self.keys.encoding_key())
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}
