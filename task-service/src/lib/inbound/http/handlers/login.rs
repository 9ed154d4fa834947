use axum::extract::State;
use axum::Form;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::identity::models::Credentials;
use crate::inbound::http::router::AppState;

/// OAuth2 password-grant style login.
///
/// `username` carries the account email. Responds with a bare token object
/// rather than the usual envelope so standard OAuth2 clients can consume it.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state
        .auth_service
        .login(Credentials::new(form.username, form.password))
        .await?;

    Ok(Json(TokenResponse {
        access_token: token.access_token,
        token_type: token.token_type.to_string(),
    }))
}

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}
