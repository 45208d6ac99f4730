use auth::Claims;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Verified identity attached to the request for downstream handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub claims: Claims,
}

/// Middleware guarding protected routes.
///
/// Extracts the bearer token, validates signature and expiry, and attaches
/// the decoded claims as a typed extension. Every failure collapses into
/// the same 401; the sub-reason is logged, never sent to the caller.
pub async fn authenticate<R: UserRepository>(
    State(state): State<AppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        unauthorized()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid user id");
        unauthorized()
    })?;

    req.extensions_mut()
        .insert(AuthenticatedUser { user_id, claims });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(unauthorized)?;

    let header = header.to_str().map_err(|_| unauthorized())?;

    header.strip_prefix("Bearer ").ok_or_else(unauthorized)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Invalid or missing token".to_string()).into_response()
}
