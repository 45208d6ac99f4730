use auth::Claims;
use axum::Extension;
use axum::Json;

use crate::inbound::http::middleware::AuthenticatedUser;

/// Echo the verified claims back to the caller.
///
/// The middleware has already validated the token; this handler receives
/// the decoded identity as a typed parameter.
pub async fn verify(Extension(user): Extension<AuthenticatedUser>) -> Json<Claims> {
    Json(user.claims)
}
