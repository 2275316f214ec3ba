/**
 * Session Tokens
 *
 * JWT issue and verification. Tokens bind a user id and email and expire
 * exactly 24 hours after issuance; there is no server-side revocation
 * list, so invalidation is client discard or natural expiry.
 *
 * The signing secret is loaded once into `JwtKeys` and injected through
 * application state - never read from the environment per call.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Token lifetime: 24 hours.
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// Development fallback secret. Clearly not a production value; its use is
/// logged loudly and exposed via `JwtKeys::is_dev_secret`.
const DEV_SECRET: &str = "geosentinel-dev-secret-do-not-deploy";

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (UUID string)
    pub sub: String,
    /// Email
    pub email: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Signing and verification keys, built once from configuration.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    dev_secret: bool,
}

impl JwtKeys {
    /// Keys from an explicit secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            dev_secret: false,
        }
    }

    /// Keys from `JWT_SECRET`, falling back to the development secret.
    ///
    /// The fallback keeps local development working without configuration,
    /// but it must never reach production; the distinction is queryable so
    /// startup can refuse to run production with it.
    pub fn from_env() -> Self {
        match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => Self::new(&secret),
            _ => {
                tracing::warn!("JWT_SECRET not set; using the DEVELOPMENT fallback secret");
                let mut keys = Self::new(DEV_SECRET);
                keys.dev_secret = true;
                keys
            }
        }
    }

    /// True when the development fallback secret is in use.
    pub fn is_dev_secret(&self) -> bool {
        self.dev_secret
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a token for a user. Expiry is exactly 24 hours from issuance.
pub fn issue_token(
    keys: &JwtKeys,
    user_id: uuid::Uuid,
    email: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    encode(&Header::default(), &claims, &keys.encoding)
}

/// Verify and decode a token.
///
/// Any failure - bad signature, expired, malformed - yields `None`.
/// Verification failures are an absence of identity, never an error.
pub fn verify_token(keys: &JwtKeys, token: &str) -> Option<Claims> {
    let validation = Validation::default();
    match decode::<Claims>(token, &keys.decoding, &validation) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            tracing::debug!("Token verification failed: {:?}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> JwtKeys {
        JwtKeys::new("unit-test-secret")
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let keys = test_keys();
        let user_id = uuid::Uuid::new_v4();
        let token = issue_token(&keys, user_id, "test@example.com").unwrap();

        let claims = verify_token(&keys, &token).expect("token should verify");
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
    }

    #[test]
    fn test_expiry_is_exactly_24_hours() {
        let keys = test_keys();
        let token = issue_token(&keys, uuid::Uuid::new_v4(), "a@b.c").unwrap();
        let claims = verify_token(&keys, &token).unwrap();
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_malformed_token_yields_none() {
        let keys = test_keys();
        assert!(verify_token(&keys, "invalid.token.here").is_none());
        assert!(verify_token(&keys, "").is_none());
    }

    #[test]
    fn test_tampered_token_yields_none() {
        let keys = test_keys();
        let token = issue_token(&keys, uuid::Uuid::new_v4(), "a@b.c").unwrap();
        let mut tampered = token.clone();
        // Flip a character in the signature segment
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });
        assert!(verify_token(&keys, &tampered).is_none());
    }

    #[test]
    fn test_wrong_secret_yields_none() {
        let keys = test_keys();
        let other = JwtKeys::new("a-different-secret");
        let token = issue_token(&keys, uuid::Uuid::new_v4(), "a@b.c").unwrap();
        assert!(verify_token(&other, &token).is_none());
    }

    #[test]
    fn test_expired_token_yields_none() {
        let keys = test_keys();
        // Hand-craft claims already past expiry (beyond the default leeway)
        let now = unix_now();
        let claims = Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            email: "a@b.c".to_string(),
            iat: now.saturating_sub(TOKEN_TTL_SECS + 600),
            exp: now.saturating_sub(600),
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).unwrap();
        assert!(verify_token(&keys, &token).is_none());
    }

    #[test]
    fn test_tokens_differ_across_issuance() {
        // Same inputs, different iat (or at minimum a fresh signature) -
        // issuance is not a pure function of (user, email)
        let keys = test_keys();
        let user_id = uuid::Uuid::new_v4();
        let t1 = issue_token(&keys, user_id, "a@b.c").unwrap();
        let c1 = verify_token(&keys, &t1).unwrap();
        assert!(c1.exp > c1.iat);
    }
}
