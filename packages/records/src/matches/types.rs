// ABOUTME: Match type definitions
// ABOUTME: Admin-created pairings between one donation and one request

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Match lifecycle. New matches are written as `Approved` directly; the
/// `Pending` default exists only at the schema level. `Completed` is
/// declared but no operation currently transitions into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Approved,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub donation_id: String,
    pub request_id: String,
    pub admin_id: String,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Match joined with both sides' titles and owner names for admin review
#[derive(Debug, Clone, Serialize)]
pub struct MatchWithDetails {
    #[serde(flatten)]
    pub r#match: Match,
    pub donation_title: String,
    pub donor_name: String,
    pub request_title: String,
    pub receiver_name: String,
}
