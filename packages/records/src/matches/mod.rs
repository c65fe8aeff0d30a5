// ABOUTME: Match records module
// ABOUTME: Provides types and storage for admin-created donation/request pairings

pub mod storage;
pub mod types;

#[cfg(test)]
mod storage_test;

pub use storage::*;
pub use types::*;
