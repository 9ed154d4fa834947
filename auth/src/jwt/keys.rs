use std::fmt;
use std::str::FromStr;

use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;

use super::errors::JwtError;

/// Symmetric signing material shared by the token issuer and verifier.
///
/// Built once at startup and never mutated afterwards. Only the HMAC family
/// is accepted since the same secret both signs and verifies.
#[derive(Clone)]
pub struct JwtKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtKeys {
    /// Create signing keys from a secret and an HMAC algorithm.
    ///
    /// # Arguments
    /// * `secret` - Shared secret (should be at least 32 bytes for HS256)
    /// * `algorithm` - One of `HS256`, `HS384`, `HS512`
    ///
    /// # Errors
    /// * `EmptySecret` - The secret is empty
    /// * `UnsupportedAlgorithm` - The algorithm is not symmetric
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::EmptySecret);
        }

        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(Self {
                encoding_key: EncodingKey::from_secret(secret),
                decoding_key: DecodingKey::from_secret(secret),
                algorithm,
            }),
            other => Err(JwtError::UnsupportedAlgorithm(format!("{:?}", other))),
        }
    }

    /// Create HS256 signing keys.
    pub fn hs256(secret: &[u8]) -> Result<Self, JwtError> {
        Self::new(secret, Algorithm::HS256)
    }

    /// Create signing keys from configuration values.
    ///
    /// # Arguments
    /// * `secret` - Shared secret string
    /// * `algorithm` - Algorithm identifier such as `"HS256"`
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Unknown or non-HMAC identifier
    /// * `EmptySecret` - The secret is empty
    pub fn from_config(secret: &str, algorithm: &str) -> Result<Self, JwtError> {
        let algorithm = Algorithm::from_str(algorithm)
            .map_err(|_| JwtError::UnsupportedAlgorithm(algorithm.to_string()))?;

        Self::new(secret.as_bytes(), algorithm)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

impl fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtKeys")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_hmac() {
        for name in ["HS256", "HS384", "HS512"] {
            let keys = JwtKeys::from_config("secret_key_at_least_32_bytes_long!", name)
                .expect("HMAC algorithm should be accepted");
            assert_eq!(format!("{:?}", keys.algorithm()), name);
        }
    }

    #[test]
    fn test_rejects_asymmetric_algorithm() {
        let result = JwtKeys::from_config("secret", "RS256");
        assert!(matches!(result, Err(JwtError::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        let result = JwtKeys::from_config("secret", "none");
        assert!(matches!(result, Err(JwtError::UnsupportedAlgorithm(_))));
    }

    #[test]
    fn test_rejects_empty_secret() {
        let result = JwtKeys::hs256(b"");
        assert!(matches!(result, Err(JwtError::EmptySecret)));
    }

    #[test]
    fn test_debug_hides_secret() {
        let keys = JwtKeys::hs256(b"super_secret_value").unwrap();
        let rendered = format!("{:?}", keys);
        assert!(!rendered.contains("super_secret_value"));
    }
}
