use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::signup::signup;
use super::handlers::verify::verify;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::AuthService;

/// Shared request state. Generic over the repository so tests can run the
/// full router against an in-memory directory.
pub struct AppState<R: UserRepository> {
    pub auth_service: Arc<AuthService<R>>,
    pub authenticator: Arc<Authenticator>,
}

impl<R: UserRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

pub fn create_router<R: UserRepository>(
    auth_service: Arc<AuthService<R>>,
    authenticator: Arc<Authenticator>,
    cors_allowed_origin: Option<&str>,
) -> Router {
    let state = AppState {
        auth_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/auth/signup", post(signup::<R>))
        .route("/auth/login", post(login::<R>));

    let protected_routes = Router::new()
        .route("/auth/verify", get(verify))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<R>,
        ));

    // Request spans deliberately omit headers: Authorization carries the
    // bearer token.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(cors_layer(cors_allowed_origin))
        .with_state(state)
}

fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    match allowed_origin.map(|origin| origin.parse::<HeaderValue>()) {
        Some(Ok(origin)) => CorsLayer::new().allow_origin(origin),
        Some(Err(_)) => {
            tracing::warn!("Configured CORS origin is not a valid header value, allowing any");
            CorsLayer::permissive()
        }
        None => CorsLayer::permissive(),
    }
}
