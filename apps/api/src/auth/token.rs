//! Bearer token issuance and verification (HS256 JWT).

use anyhow::anyhow;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::AppError;

/// Claims embedded in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user's email (standard JWT `sub` claim).
    pub sub: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

/// Issues a signed token for `email`, expiring `jwt_expire_minutes` from now.
pub fn create_token(email: &str, config: &Config) -> Result<String, AppError> {
    let expire = Utc::now() + Duration::minutes(config.jwt_expire_minutes);
    let claims = Claims {
        sub: email.to_string(),
        exp: expire.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow!("token signing failed: {e}")))
}

/// Verifies signature and expiry, returning the claims.
pub fn verify_token(token: &str, config: &Config) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip_preserves_subject() {
        let config = Config::for_tests();
        let token = create_token("asha@example.com", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "asha@example.com");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = Config::for_tests();
        let token = create_token("asha@example.com", &config).unwrap();

        let mut other = Config::for_tests();
        other.jwt_secret = "a-different-secret".to_string();
        let err = verify_token(&token, &other).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let mut config = Config::for_tests();
        config.jwt_expire_minutes = -5;
        let token = create_token("asha@example.com", &config).unwrap();
        let err = verify_token(&token, &config).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
