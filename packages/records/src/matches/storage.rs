// ABOUTME: Match storage layer and the matching workflow
// ABOUTME: Creates match records and propagates status onto both sides in one transaction

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::types::{Match, MatchStatus, MatchWithDetails};
use crate::donations::DonationStatus;
use crate::requests::RequestStatus;
use crate::storage::StorageError;

pub struct MatchStorage {
    pool: SqlitePool,
}

impl MatchStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Pair a donation with a request on behalf of an admin.
    ///
    /// Writes the match row as `Approved` and flips both sides to `Matched`
    /// inside a single transaction: if either id fails to resolve, the whole
    /// workflow rolls back with `NotFound` and no partial state remains.
    ///
    /// Nothing here prevents pairing a donation or request that already
    /// carries a match; the listing surface exposes such rows for review.
    pub async fn create_match(
        &self,
        donation_id: &str,
        request_id: &str,
        admin_id: &str,
    ) -> Result<Match, StorageError> {
        let match_id = nanoid::nanoid!();
        let now = Utc::now();

        debug!(
            "Creating match: {} (donation: {}, request: {}, admin: {})",
            match_id, donation_id, request_id, admin_id
        );

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        sqlx::query(
            r#"
            INSERT INTO matches (
                id, donation_id, request_id, admin_id,
                status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&match_id)
        .bind(donation_id)
        .bind(request_id)
        .bind(admin_id)
        .bind(MatchStatus::Approved)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| match &e {
            // A dangling donation/request/admin id trips the foreign keys
            sqlx::Error::Database(db)
                if matches!(db.kind(), sqlx::error::ErrorKind::ForeignKeyViolation) =>
            {
                StorageError::NotFound
            }
            _ => StorageError::Sqlx(e),
        })?;

        let updated = sqlx::query("UPDATE donations SET status = ?, updated_at = ? WHERE id = ?")
            .bind(DonationStatus::Matched)
            .bind(now)
            .bind(donation_id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;
        if updated.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        let updated = sqlx::query("UPDATE requests SET status = ?, updated_at = ? WHERE id = ?")
            .bind(RequestStatus::Matched)
            .bind(now)
            .bind(request_id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;
        if updated.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tx.commit().await.map_err(StorageError::Sqlx)?;

        self.get_match(&match_id).await
    }

    pub async fn get_match(&self, match_id: &str) -> Result<Match, StorageError> {
        debug!("Fetching match: {}", match_id);

        let row = sqlx::query("SELECT * FROM matches WHERE id = ?")
            .bind(match_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
            .ok_or(StorageError::NotFound)?;

        Self::row_to_match(&row)
    }

    /// List all matches joined with both sides' titles and owner names,
    /// in creation order
    pub async fn list_matches(&self) -> Result<Vec<MatchWithDetails>, StorageError> {
        debug!("Listing matches");

        let rows = sqlx::query(
            r#"
            SELECT
                m.*,
                d.title as donation_title,
                du.name as donor_name,
                r.title as request_title,
                ru.name as receiver_name
            FROM matches m
            JOIN donations d ON m.donation_id = d.id
            JOIN users du ON d.donor_id = du.id
            JOIN requests r ON m.request_id = r.id
            JOIN users ru ON r.receiver_id = ru.id
            ORDER BY m.created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(MatchWithDetails {
                r#match: Self::row_to_match(&row)?,
                donation_title: row.try_get("donation_title")?,
                donor_name: row.try_get("donor_name")?,
                request_title: row.try_get("request_title")?,
                receiver_name: row.try_get("receiver_name")?,
            });
        }

        Ok(matches)
    }

    fn row_to_match(row: &sqlx::sqlite::SqliteRow) -> Result<Match, StorageError> {
        Ok(Match {
            id: row.try_get("id")?,
            donation_id: row.try_get("donation_id")?,
            request_id: row.try_get("request_id")?,
            admin_id: row.try_get("admin_id")?,
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
