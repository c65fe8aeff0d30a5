// ABOUTME: HTTP API layer for GiveBridge providing REST endpoints and routing
// ABOUTME: Integration layer over the records and auth packages

use axum::{
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};

pub mod admin_handlers;
pub mod auth;
pub mod auth_handlers;
pub mod donations_handlers;
pub mod requests_handlers;
pub mod response;
pub mod state;

pub use state::AppState;

use response::ok;

/// Creates the auth API router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth_handlers::register))
        .route("/login", post(auth_handlers::login))
}

/// Creates the donations API router
pub fn create_donations_router() -> Router<AppState> {
    Router::new()
        .route("/", get(donations_handlers::list_donations))
        .route("/post", post(donations_handlers::create_donation))
}

/// Creates the requests API router
pub fn create_requests_router() -> Router<AppState> {
    Router::new()
        .route("/", get(requests_handlers::list_requests))
        .route("/post", post(requests_handlers::create_request))
}

/// Creates the admin API router
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/approve-donation/{id}",
            put(admin_handlers::approve_donation),
        )
        .route("/approve-request/{id}", put(admin_handlers::approve_request))
        .route("/match", post(admin_handlers::create_match))
        .route("/matches", get(admin_handlers::list_matches))
}

/// Assembles the full application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/auth", create_auth_router())
        .nest("/api/donations", create_donations_router())
        .nest("/api/requests", create_requests_router())
        .nest("/api/admin", create_admin_router())
        .route("/api/health", get(health))
        .with_state(state)
}

/// Liveness check
async fn health() -> impl IntoResponse {
    ok(serde_json::json!({ "status": "ok" }))
}
