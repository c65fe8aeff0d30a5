// ABOUTME: HTTP request handlers for request operations
// ABOUTME: Receiver submissions and the public request listing

use axum::{extract::State, response::Response, Json};
use tracing::info;

use givebridge_records::requests::RequestCreateInput;
use givebridge_records::users::Role;

use crate::auth::CurrentUser;
use crate::response::{ok, ApiError};
use crate::state::AppState;

/// Receiver posts a new request; the receiver id comes from the token
pub async fn create_request(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<RequestCreateInput>,
) -> Result<Response, ApiError> {
    current_user.require_role(Role::Receiver)?;

    info!("Creating request for receiver: {}", current_user.id);

    let request = state
        .db
        .request_storage
        .create_request(&current_user.id, input)
        .await?;

    Ok(ok(request))
}

/// List all requests with the receiver's name and email joined.
/// Open to unauthenticated callers.
pub async fn list_requests(State(state): State<AppState>) -> Result<Response, ApiError> {
    info!("Listing requests");

    let requests = state.db.request_storage.list_requests().await?;
    Ok(ok(requests))
}
