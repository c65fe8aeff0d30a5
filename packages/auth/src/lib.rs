// ABOUTME: GiveBridge authentication library
// ABOUTME: Argon2 password hashing and JWT issuing/verification

pub mod error;
pub mod jwt;
pub mod password;

pub use error::{AuthError, AuthResult};
pub use jwt::{Claims, JwtService};
pub use password::{hash_password, verify_password};
