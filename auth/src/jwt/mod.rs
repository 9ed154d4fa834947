pub mod claims;
pub mod errors;
pub mod issuer;
pub mod keys;
pub mod verifier;

pub use claims::Claims;
pub use errors::JwtError;
pub use issuer::TokenIssuer;
pub use keys::JwtKeys;
pub use verifier::TokenVerifier;
