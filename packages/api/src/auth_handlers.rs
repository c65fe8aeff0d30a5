// ABOUTME: HTTP request handlers for registration and login
// ABOUTME: Issues bearer tokens against the identity store

use axum::{extract::State, response::Response, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use givebridge_auth::{hash_password, verify_password};
use givebridge_records::users::{Role, User, UserCreateInput};

use crate::response::{ok, ApiError};
use crate::state::AppState;

/// Request body for registration
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub language: Option<String>,
}

/// Request body for login. The optional role pins the portal the caller
/// is signing in through.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Register a new user and hand back a token
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Response, ApiError> {
    info!("Registering user: {}", request.email);

    if request.name.trim().is_empty() {
        return Err(ApiError::Validation("Name is required".to_string()));
    }
    if request.email.trim().is_empty() {
        return Err(ApiError::Validation("Email is required".to_string()));
    }
    if request.password.is_empty() {
        return Err(ApiError::Validation("Password is required".to_string()));
    }

    let password_hash = hash_password(&request.password)?;

    let user = state
        .db
        .user_storage
        .create_user(UserCreateInput {
            name: request.name,
            email: request.email,
            password_hash,
            role: request.role,
            phone: request.phone,
            organization: request.organization,
            language: request.language,
        })
        .await?;

    let token = state.jwt.create_token(&user.id, user.role)?;

    Ok(ok(AuthResponse { token, user }))
}

/// Verify credentials and hand back a token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    info!("Login attempt: {}", request.email);

    let user = state
        .db
        .user_storage
        .get_user_by_email(&request.email)
        .await?
        .ok_or(ApiError::NotFound)?;

    if !verify_password(&request.password, &user.password_hash)? {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    if let Some(role) = request.role {
        if role != user.role {
            return Err(ApiError::Forbidden(
                "Access denied for this portal".to_string(),
            ));
        }
    }

    let token = state.jwt.create_token(&user.id, user.role)?;

    Ok(ok(AuthResponse { token, user }))
}
