// ABOUTME: Authentication context for API requests
// ABOUTME: Extracts the acting user from a bearer token and enforces roles

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use givebridge_records::users::Role;

use crate::response::ApiError;
use crate::state::AppState;

/// The authenticated actor behind a request
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub role: Role,
}

impl CurrentUser {
    /// Reject the request unless the actor carries the given role
    pub fn require_role(&self, role: Role) -> Result<(), ApiError> {
        if self.role != role {
            return Err(ApiError::Forbidden(format!("{:?} role required", role)));
        }
        Ok(())
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Malformed Authorization header".to_string()))?;

        let claims = state.jwt.verify_token(token)?;

        Ok(CurrentUser {
            id: claims.sub,
            role: claims.role,
        })
    }
}
