use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::models::AccessToken;
use crate::domain::identity::models::Credentials;
use crate::domain::identity::ports::AuthServicePort;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

/// Login handler and token gate over the user credential store.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(users: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            users,
            authenticator,
        }
    }

    async fn find_credentials(&self, identifier: &str) -> Result<Option<User>, AuthError> {
        let Ok(email) = EmailAddress::new(identifier.to_string()) else {
            return Ok(None);
        };

        self.users
            .find_by_email(&email)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, AuthError> {
        let Some(user) = self.find_credentials(&credentials.identifier).await? else {
            let authenticator = Arc::clone(&self.authenticator);
            let secret = credentials.secret;

            // Pay the same Argon2 cost as a wrong password for a known user.
            tokio::task::spawn_blocking(move || authenticator.reject_unknown(&secret))
                .await
                .map_err(|e| AuthError::Internal(format!("Verification task failed: {}", e)))?;

            tracing::info!("Login rejected");
            return Err(AuthError::AuthenticationFailed);
        };

        let authenticator = Arc::clone(&self.authenticator);
        let subject = user.email.as_str().to_string();
        let password_hash = user.password_hash;
        let secret = credentials.secret;

        // Argon2 verification is CPU-bound; run it on the blocking pool.
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&secret, &password_hash, &subject)
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Verification task failed: {}", e)))?;

        match result {
            Ok(result) => {
                tracing::info!(user_id = %user.id, "Login succeeded");
                Ok(AccessToken {
                    access_token: result.access_token,
                    token_type: result.token_type,
                })
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::info!("Login rejected");
                Err(AuthError::AuthenticationFailed)
            }
            Err(AuthenticationError::JwtError(e)) => Err(AuthError::Internal(e.to_string())),
        }
    }

    fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.authenticator
            .validate_token(token)
            .map_err(|_| AuthError::InvalidToken)
    }

    async fn resolve(&self, claims: &Claims) -> Result<User, AuthError> {
        match self.find_credentials(claims.subject()).await? {
            Some(user) => Ok(user),
            None => {
                tracing::debug!("Token subject no longer resolves to a user");
                Err(AuthError::InvalidToken)
            }
        }
    }
}
