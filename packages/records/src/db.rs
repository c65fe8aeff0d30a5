// ABOUTME: Database state shared across API handlers
// ABOUTME: Bundles the SQLite pool with per-entity storage layers

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::donations::DonationStorage;
use crate::matches::MatchStorage;
use crate::requests::RequestStorage;
use crate::storage::{self, StorageResult};
use crate::users::UserStorage;

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub user_storage: Arc<UserStorage>,
    pub donation_storage: Arc<DonationStorage>,
    pub request_storage: Arc<RequestStorage>,
    pub match_storage: Arc<MatchStorage>,
}

impl DbState {
    /// Create new database state from a SQLite pool
    pub fn new(pool: SqlitePool) -> Self {
        let user_storage = Arc::new(UserStorage::new(pool.clone()));
        let donation_storage = Arc::new(DonationStorage::new(pool.clone()));
        let request_storage = Arc::new(RequestStorage::new(pool.clone()));
        let match_storage = Arc::new(MatchStorage::new(pool.clone()));

        Self {
            pool,
            user_storage,
            donation_storage,
            request_storage,
            match_storage,
        }
    }

    /// Open the database at the given URL, run migrations, and build the state
    pub async fn connect(database_url: &str) -> StorageResult<Self> {
        let pool = storage::init_pool(database_url).await?;
        Ok(Self::new(pool))
    }
}
