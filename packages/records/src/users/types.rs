// ABOUTME: User type definitions
// ABOUTME: Identity records with role-based access for donors, receivers, and admins

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Donor,
    Receiver,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip)] // never serialize the password hash
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user; the password arrives already hashed
#[derive(Debug, Clone)]
pub struct UserCreateInput {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub language: Option<String>,
}
