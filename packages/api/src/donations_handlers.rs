// ABOUTME: HTTP request handlers for donation operations
// ABOUTME: Donor submissions and the public donation listing

use axum::{extract::State, response::Response, Json};
use tracing::info;

use givebridge_records::donations::DonationCreateInput;
use givebridge_records::users::Role;

use crate::auth::CurrentUser;
use crate::response::{ok, ApiError};
use crate::state::AppState;

/// Donor posts a new donation; the donor id comes from the token
pub async fn create_donation(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<DonationCreateInput>,
) -> Result<Response, ApiError> {
    current_user.require_role(Role::Donor)?;

    info!("Creating donation for donor: {}", current_user.id);

    let donation = state
        .db
        .donation_storage
        .create_donation(&current_user.id, input)
        .await?;

    Ok(ok(donation))
}

/// List all donations with the donor's name and email joined.
/// Open to unauthenticated callers.
pub async fn list_donations(State(state): State<AppState>) -> Result<Response, ApiError> {
    info!("Listing donations");

    let donations = state.db.donation_storage.list_donations().await?;
    Ok(ok(donations))
}
