use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::AuthTokenResponse;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::router::AppState;
use crate::user::errors::DisplayNameError;
use crate::user::errors::EmailError;

pub async fn signup<R: UserRepository>(
    State(state): State<AppState<R>>,
    Json(body): Json<SignupRequest>,
) -> Result<Json<AuthTokenResponse>, ApiError> {
    let token = state
        .auth_service
        .register(body.try_into_command()?)
        .await?;

    Ok(Json(AuthTokenResponse { auth_token: token }))
}

/// HTTP request body for registration (raw JSON).
///
/// Missing fields deserialize to empty strings so absent and empty inputs
/// take the same rejection path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    username: String,
}

#[derive(Debug, Clone, Error)]
enum ParseSignupRequestError {
    #[error("Provide email, password and name")]
    MissingField,

    #[error("Provide a valid email address.")]
    Email(#[from] EmailError),

    #[error("Invalid name: {0}")]
    DisplayName(#[from] DisplayNameError),
}

impl SignupRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ParseSignupRequestError> {
        if self.email.is_empty() || self.password.is_empty() || self.username.is_empty() {
            return Err(ParseSignupRequestError::MissingField);
        }

        let email = EmailAddress::new(self.email)?;
        let username = DisplayName::new(self.username)?;
        Ok(RegisterUserCommand::new(email, username, self.password))
    }
}

impl From<ParseSignupRequestError> for ApiError {
    fn from(err: ParseSignupRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
