// ABOUTME: Donation type definitions
// ABOUTME: Donor-offered items with category, quantity, and lifecycle status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Item category, shared with requests. Stored with the capitalized
/// variant names as the canonical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
pub enum Category {
    Clothes,
    Books,
    Food,
    Furniture,
    Other,
}

/// Donation lifecycle. `Completed` is declared but no operation currently
/// transitions into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Approved,
    Matched,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    pub donor_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub quantity: i64,
    pub photos: Vec<String>,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Donation joined with the owning donor's display fields for listings
#[derive(Debug, Clone, Serialize)]
pub struct DonationWithDonor {
    #[serde(flatten)]
    pub donation: Donation,
    pub donor_name: String,
    pub donor_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DonationCreateInput {
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub quantity: Option<i64>,
    pub photos: Option<Vec<String>>,
}
