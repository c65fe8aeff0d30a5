// ABOUTME: Error types for authentication operations
// ABOUTME: Covers token issuing/verification and password hashing failures

use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token expired or invalid")]
    InvalidToken,

    #[error("Token encoding failed: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Invalid credentials")]
    InvalidCredentials,
}
