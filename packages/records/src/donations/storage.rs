// ABOUTME: Donation storage layer using SQLite
// ABOUTME: Handles listing creation, approval, and donor-joined reads

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::types::{Donation, DonationCreateInput, DonationStatus, DonationWithDonor};
use crate::storage::StorageError;

pub struct DonationStorage {
    pool: SqlitePool,
}

impl DonationStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_donation(
        &self,
        donor_id: &str,
        input: DonationCreateInput,
    ) -> Result<Donation, StorageError> {
        let donation_id = nanoid::nanoid!();
        let now = Utc::now();
        let quantity = input.quantity.unwrap_or(1);

        if quantity < 1 {
            return Err(StorageError::InvalidQuantity(quantity));
        }

        debug!("Creating donation: {} for donor: {}", donation_id, donor_id);

        sqlx::query(
            r#"
            INSERT INTO donations (
                id, donor_id, title, description, category,
                quantity, photos, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&donation_id)
        .bind(donor_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.category)
        .bind(quantity)
        .bind(
            input
                .photos
                .as_ref()
                .map(|p| serde_json::to_string(p))
                .transpose()?,
        )
        .bind(DonationStatus::Pending)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        self.get_donation(&donation_id).await
    }

    pub async fn get_donation(&self, donation_id: &str) -> Result<Donation, StorageError> {
        debug!("Fetching donation: {}", donation_id);

        let row = sqlx::query("SELECT * FROM donations WHERE id = ?")
            .bind(donation_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
            .ok_or(StorageError::NotFound)?;

        Self::row_to_donation(&row)
    }

    /// List all donations joined with the donor's name and email,
    /// in creation order
    pub async fn list_donations(&self) -> Result<Vec<DonationWithDonor>, StorageError> {
        debug!("Listing donations");

        let rows = sqlx::query(
            r#"
            SELECT
                d.*,
                u.name as donor_name,
                u.email as donor_email
            FROM donations d
            JOIN users u ON d.donor_id = u.id
            ORDER BY d.created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let mut donations = Vec::new();
        for row in rows {
            donations.push(DonationWithDonor {
                donation: Self::row_to_donation(&row)?,
                donor_name: row.try_get("donor_name")?,
                donor_email: row.try_get("donor_email")?,
            });
        }

        Ok(donations)
    }

    /// Set a donation's status to approved. Idempotent: an already-approved
    /// donation keeps its status without error.
    pub async fn approve_donation(&self, donation_id: &str) -> Result<Donation, StorageError> {
        debug!("Approving donation: {}", donation_id);

        let result = sqlx::query("UPDATE donations SET status = ?, updated_at = ? WHERE id = ?")
            .bind(DonationStatus::Approved)
            .bind(Utc::now())
            .bind(donation_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.get_donation(donation_id).await
    }

    fn row_to_donation(row: &sqlx::sqlite::SqliteRow) -> Result<Donation, StorageError> {
        Ok(Donation {
            id: row.try_get("id")?,
            donor_id: row.try_get("donor_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            quantity: row.try_get("quantity")?,
            photos: row
                .try_get::<Option<String>, _>("photos")?
                .and_then(|s| serde_json::from_str(&s).ok())
                .unwrap_or_default(),
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
