// ABOUTME: Donation listings module
// ABOUTME: Provides types and storage for donor-offered items

pub mod storage;
pub mod types;


pub use storage::*;
pub use types::*;
