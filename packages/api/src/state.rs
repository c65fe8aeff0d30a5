// ABOUTME: Shared application state for API handlers
// ABOUTME: Bundles database state with the token service

use std::sync::Arc;

use givebridge_auth::JwtService;
use givebridge_records::DbState;

#[derive(Clone)]
pub struct AppState {
    pub db: DbState,
    pub jwt: Arc<JwtService>,
}

impl AppState {
    pub fn new(db: DbState, jwt: JwtService) -> Self {
        Self {
            db,
            jwt: Arc::new(jwt),
        }
    }
}
