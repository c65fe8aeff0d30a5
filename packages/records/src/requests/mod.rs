// ABOUTME: Request listings module
// ABOUTME: Provides types and storage for receiver-stated needs

pub mod storage;
pub mod types;


pub use storage::*;
pub use types::*;
