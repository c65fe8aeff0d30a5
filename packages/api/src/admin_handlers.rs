// ABOUTME: HTTP request handlers for admin operations
// ABOUTME: Approvals, match creation, and the match review listing

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use serde::Deserialize;
use tracing::info;

use givebridge_records::users::Role;

use crate::auth::CurrentUser;
use crate::response::{ok, ApiError};
use crate::state::AppState;

/// Approve a pending donation
pub async fn approve_donation(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    current_user.require_role(Role::Admin)?;

    info!("Approving donation: {}", id);

    let donation = state.db.donation_storage.approve_donation(&id).await?;
    Ok(ok(donation))
}

/// Approve a pending request
pub async fn approve_request(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    current_user.require_role(Role::Admin)?;

    info!("Approving request: {}", id);

    let request = state.db.request_storage.approve_request(&id).await?;
    Ok(ok(request))
}

/// Request body for pairing a donation with a request
#[derive(Deserialize)]
pub struct CreateMatchRequest {
    #[serde(rename = "donationId")]
    pub donation_id: String,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

/// Pair a donation with a request on behalf of the acting admin
pub async fn create_match(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(request): Json<CreateMatchRequest>,
) -> Result<Response, ApiError> {
    current_user.require_role(Role::Admin)?;

    info!(
        "Matching donation {} with request {}",
        request.donation_id, request.request_id
    );

    let created = state
        .db
        .match_storage
        .create_match(&request.donation_id, &request.request_id, &current_user.id)
        .await?;

    Ok(ok(created))
}

/// List all matches with both sides joined for review
pub async fn list_matches(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<Response, ApiError> {
    current_user.require_role(Role::Admin)?;

    info!("Listing matches");

    let matches = state.db.match_storage.list_matches().await?;
    Ok(ok(matches))
}
