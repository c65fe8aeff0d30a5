// ABOUTME: User management module
// ABOUTME: Provides types and storage for identity records

pub mod storage;
pub mod types;

#[cfg(test)]
mod storage_test;

pub use storage::*;
pub use types::*;
