// ABOUTME: JWT issuing and verification
// ABOUTME: Bearer tokens carrying the user id and role, HS256-signed

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use givebridge_records::users::Role;

use crate::error::{AuthError, AuthResult};

/// Fixed multi-day token lifetime; there is no refresh or revocation
const TOKEN_TTL_DAYS: i64 = 7;

/// JWT claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user id
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
}

/// Creates and verifies bearer tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    /// Create a token for a user, valid for seven days
    pub fn create_token(&self, user_id: &str, role: Role) -> AuthResult<String> {
        let now = chrono::Utc::now();
        let exp = now + Duration::days(TOKEN_TTL_DAYS);

        let claims = Claims {
            sub: user_id.to_string(),
            role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a token, returning its claims if valid and unexpired
    pub fn verify_token(&self, token: &str) -> AuthResult<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_verify_token() {
        let service = JwtService::new("test_secret_key", "givebridge-test".to_string());

        let token = service.create_token("user-1", Role::Admin).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.iss, "givebridge-test");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = JwtService::new("test_secret_key", "givebridge-test".to_string());
        assert!(matches!(
            service.verify_token("not-a-token"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let service = JwtService::new("test_secret_key", "givebridge-test".to_string());
        let other = JwtService::new("another_secret", "givebridge-test".to_string());

        let token = other.create_token("user-1", Role::Donor).unwrap();
        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn test_issuer_mismatch_is_rejected() {
        let service = JwtService::new("test_secret_key", "givebridge-test".to_string());
        let other = JwtService::new("test_secret_key", "someone-else".to_string());

        let token = other.create_token("user-1", Role::Donor).unwrap();
        assert!(service.verify_token(&token).is_err());
    }
}
