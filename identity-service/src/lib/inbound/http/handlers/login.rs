use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::AuthTokenResponse;
use crate::domain::user::models::Credentials;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::router::AppState;

pub async fn login<R: UserRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthTokenResponse>, ApiError> {
    if body.email.is_empty() || body.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Provide email and password.".to_string(),
        ));
    }

    // No shape validation on the identifier here: an address that could
    // never have registered simply fails the lookup and gets the same 401
    // as any other bad credential.
    let token = state
        .auth_service
        .authenticate(Credentials {
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(AuthTokenResponse { auth_token: token }))
}

/// HTTP request body for login (raw JSON).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}
