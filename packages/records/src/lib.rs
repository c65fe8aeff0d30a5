// ABOUTME: Entity records library for GiveBridge
// ABOUTME: Canonical types, SQLite storage layers, and the matching workflow

pub mod db;
pub mod donations;
pub mod matches;
pub mod requests;
pub mod storage;
pub mod users;

pub use db::DbState;
pub use storage::{StorageError, StorageResult};
