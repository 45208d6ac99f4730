use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::AuthError;

pub mod login;
pub mod signup;
pub mod verify;

/// Success payload for registration and login. The signed token is the
/// sole body; user fields travel inside the token, never beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthTokenResponse {
    #[serde(rename = "authToken")]
    pub auth_token: String,
}

/// Transport-level failure: a status code plus a `{"message": ...}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Conflict(String),
    UnprocessableEntity(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ApiErrorBody { message })).into_response()
    }
}

/// The one place domain failures become transport codes.
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidEmail(_)
            | AuthError::InvalidDisplayName(_)
            | AuthError::InvalidUserId(_) => ApiError::BadRequest(err.to_string()),
            AuthError::AlreadyRegistered => ApiError::Conflict(err.to_string()),
            AuthError::StoreRejected(_) => ApiError::UnprocessableEntity(err.to_string()),
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Incorrect Email or Password".to_string())
            }
            AuthError::Password(_)
            | AuthError::Token(_)
            | AuthError::Database(_)
            | AuthError::Unknown(_) => {
                // Detail goes to the log; the client gets a generic body
                tracing::error!(error = %err, "Request failed with internal error");
                ApiError::InternalServerError("Internal Server Error".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
}
