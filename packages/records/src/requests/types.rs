// ABOUTME: Request type definitions
// ABOUTME: Receiver-stated needs, symmetric to donations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::donations::Category;

/// Request lifecycle. `Fulfilled` is declared but no operation currently
/// transitions into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Matched,
    Fulfilled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub id: String,
    pub receiver_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub quantity: i64,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request joined with the owning receiver's display fields for listings
#[derive(Debug, Clone, Serialize)]
pub struct RequestWithReceiver {
    #[serde(flatten)]
    pub request: Request,
    pub receiver_name: String,
    pub receiver_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestCreateInput {
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub quantity: Option<i64>,
}
