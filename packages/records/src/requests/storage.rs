// ABOUTME: Request storage layer using SQLite
// ABOUTME: Handles need creation, approval, and receiver-joined reads

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::types::{Request, RequestCreateInput, RequestStatus, RequestWithReceiver};
use crate::storage::StorageError;

pub struct RequestStorage {
    pool: SqlitePool,
}

impl RequestStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_request(
        &self,
        receiver_id: &str,
        input: RequestCreateInput,
    ) -> Result<Request, StorageError> {
        let request_id = nanoid::nanoid!();
        let now = Utc::now();
        let quantity = input.quantity.unwrap_or(1);

        if quantity < 1 {
            return Err(StorageError::InvalidQuantity(quantity));
        }

        debug!(
            "Creating request: {} for receiver: {}",
            request_id, receiver_id
        );

        sqlx::query(
            r#"
            INSERT INTO requests (
                id, receiver_id, title, description, category,
                quantity, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request_id)
        .bind(receiver_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.category)
        .bind(quantity)
        .bind(RequestStatus::Pending)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        self.get_request(&request_id).await
    }

    pub async fn get_request(&self, request_id: &str) -> Result<Request, StorageError> {
        debug!("Fetching request: {}", request_id);

        let row = sqlx::query("SELECT * FROM requests WHERE id = ?")
            .bind(request_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
            .ok_or(StorageError::NotFound)?;

        Self::row_to_request(&row)
    }

    /// List all requests joined with the receiver's name and email,
    /// in creation order
    pub async fn list_requests(&self) -> Result<Vec<RequestWithReceiver>, StorageError> {
        debug!("Listing requests");

        let rows = sqlx::query(
            r#"
            SELECT
                r.*,
                u.name as receiver_name,
                u.email as receiver_email
            FROM requests r
            JOIN users u ON r.receiver_id = u.id
            ORDER BY r.created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let mut requests = Vec::new();
        for row in rows {
            requests.push(RequestWithReceiver {
                request: Self::row_to_request(&row)?,
                receiver_name: row.try_get("receiver_name")?,
                receiver_email: row.try_get("receiver_email")?,
            });
        }

        Ok(requests)
    }

    /// Set a request's status to approved. Idempotent like donation approval.
    pub async fn approve_request(&self, request_id: &str) -> Result<Request, StorageError> {
        debug!("Approving request: {}", request_id);

        let result = sqlx::query("UPDATE requests SET status = ?, updated_at = ? WHERE id = ?")
            .bind(RequestStatus::Approved)
            .bind(Utc::now())
            .bind(request_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.get_request(request_id).await
    }

    fn row_to_request(row: &sqlx::sqlite::SqliteRow) -> Result<Request, StorageError> {
        Ok(Request {
            id: row.try_get("id")?,
            receiver_id: row.try_get("receiver_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            quantity: row.try_get("quantity")?,
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
