use thiserror::Error;

/// Error type for JWT operations.
///
/// Verification failures are deliberately collapsed into `InvalidToken`:
/// callers cannot tell a bad signature from an expired or malformed token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Invalid token")]
    InvalidToken,
}
