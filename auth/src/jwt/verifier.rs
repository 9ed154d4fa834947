use jsonwebtoken::decode;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;
use super::keys::JwtKeys;

/// Validates access tokens.
///
/// Checks structure, signature, algorithm, required claims and expiry with
/// zero leeway. Every rejection is reported as `JwtError::InvalidToken`; the
/// concrete reason is only logged.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    keys: JwtKeys,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(keys: JwtKeys) -> Self {
        let mut validation = Validation::new(keys.algorithm());
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self { keys, validation }
    }

    /// Decode and validate a token.
    ///
    /// # Arguments
    /// * `token` - Compact JWT string
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, wrongly signed, expired, or missing subject
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let token_data = decode::<Claims>(token, self.keys.decoding_key(), &self.validation)
            .map_err(|e| {
                tracing::debug!(reason = %e, "Token rejected");
                JwtError::InvalidToken
            })?;

        if token_data.claims.sub.trim().is_empty() {
            tracing::debug!(reason = "empty subject", "Token rejected");
            return Err(JwtError::InvalidToken);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;
    use jsonwebtoken::encode;
    use jsonwebtoken::Algorithm;
    use jsonwebtoken::EncodingKey;
    use jsonwebtoken::Header;
    use serde_json::json;

    use super::*;
    use crate::jwt::TokenIssuer;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn pair(secret: &[u8]) -> (TokenIssuer, TokenVerifier) {
        let keys = JwtKeys::hs256(secret).unwrap();
        (TokenIssuer::new(keys.clone()), TokenVerifier::new(keys))
    }

    #[test]
    fn test_issue_and_verify() {
        let (issuer, verifier) = pair(SECRET);

        let token = issuer.issue("a@x.com", Duration::minutes(30)).unwrap();
        let claims = verifier.verify(&token).expect("Token should verify");

        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_verify_just_before_expiry() {
        let (issuer, verifier) = pair(SECRET);
        let ttl = Duration::minutes(30);

        // Issued so that expiry lands a few seconds in the future.
        let issued_at = Utc::now() - ttl + Duration::seconds(5);
        let token = issuer.issue_at("a@x.com", ttl, issued_at).unwrap();

        assert!(verifier.verify(&token).is_ok());
    }

    #[test]
    fn test_verify_just_after_expiry() {
        let (issuer, verifier) = pair(SECRET);
        let ttl = Duration::minutes(30);

        let issued_at = Utc::now() - ttl - Duration::seconds(5);
        let token = issuer.issue_at("a@x.com", ttl, issued_at).unwrap();

        assert_eq!(verifier.verify(&token), Err(JwtError::InvalidToken));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let (issuer, _) = pair(b"secret1_at_least_32_bytes_long_key!");
        let (_, verifier) = pair(b"secret2_at_least_32_bytes_long_key!");

        let token = issuer.issue("a@x.com", Duration::minutes(30)).unwrap();

        assert_eq!(verifier.verify(&token), Err(JwtError::InvalidToken));
    }

    #[test]
    fn test_verify_malformed_token() {
        let (_, verifier) = pair(SECRET);

        for token in ["", "invalid.token.here", "not-a-jwt", "a.b"] {
            assert_eq!(verifier.verify(token), Err(JwtError::InvalidToken));
        }
    }

    #[test]
    fn test_verify_tampered_payload() {
        let (issuer, verifier) = pair(SECRET);
        let token = issuer.issue("a@x.com", Duration::minutes(30)).unwrap();
        let other = issuer.issue("b@x.com", Duration::minutes(30)).unwrap();

        // Splice b's payload onto a's signature.
        let a: Vec<&str> = token.split('.').collect();
        let b: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", a[0], b[1], a[2]);

        assert_eq!(verifier.verify(&forged), Err(JwtError::InvalidToken));
    }

    #[test]
    fn test_verify_missing_subject() {
        let (_, verifier) = pair(SECRET);
        let now = Utc::now().timestamp();

        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "iat": now, "exp": now + 600 }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(verifier.verify(&token), Err(JwtError::InvalidToken));
    }

    #[test]
    fn test_verify_empty_subject() {
        let (_, verifier) = pair(SECRET);
        let now = Utc::now().timestamp();

        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "sub": "", "iat": now, "exp": now + 600 }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(verifier.verify(&token), Err(JwtError::InvalidToken));
    }

    #[test]
    fn test_verify_missing_expiry() {
        let (_, verifier) = pair(SECRET);
        let now = Utc::now().timestamp();

        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "sub": "a@x.com", "iat": now }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(verifier.verify(&token), Err(JwtError::InvalidToken));
    }

    #[test]
    fn test_verify_rejects_other_algorithm() {
        let (_, verifier) = pair(SECRET);
        let now = Utc::now().timestamp();

        let token = encode(
            &Header::new(Algorithm::HS512),
            &json!({ "sub": "a@x.com", "iat": now, "exp": now + 600 }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(verifier.verify(&token), Err(JwtError::InvalidToken));
    }
}
