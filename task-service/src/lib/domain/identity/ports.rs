use async_trait::async_trait;
use auth::Claims;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::AccessToken;
use crate::domain::identity::models::Credentials;
use crate::domain::user::models::User;

/// Port for the login handler and the token gate.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange credentials for an access token.
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Unknown identifier or wrong secret
    /// * `Internal` - Store or signing failure
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, AuthError>;

    /// Validate a bearer token and return its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - Any validation failure
    fn verify_token(&self, token: &str) -> Result<Claims, AuthError>;

    /// Resolve verified claims to the user they assert.
    ///
    /// # Errors
    /// * `InvalidToken` - Subject does not resolve to a user
    /// * `Internal` - Store failure
    async fn resolve(&self, claims: &Claims) -> Result<User, AuthError>;

    /// Verify a bearer token and resolve it to a user.
    ///
    /// # Errors
    /// * `InvalidToken` - Any verification or resolution failure
    /// * `Internal` - Store failure
    async fn authorize(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.verify_token(token)?;
        self.resolve(&claims).await
    }
}
