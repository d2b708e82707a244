//! Session Tokens
//!
//! Stateless signed session tokens. The token is `payload.signature` where
//! the payload is base64url-encoded JSON carrying the user id, a role
//! snapshot and an expiry instant, and the signature is HMAC-SHA256 over the
//! encoded payload. No session rows are stored; the server only needs the
//! signing secret to validate a token. The role inside the token is a
//! snapshot taken at login and may lag behind the database until the next
//! login.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::domain::value_object::{user_id::UserId, user_role::UserRole};

/// Wire form of the token payload
#[derive(Debug, Serialize, Deserialize)]
struct TokenPayload {
    /// User id
    uid: Uuid,
    /// Role code snapshot ("participant" | "editor" | "admin")
    role: String,
    /// Expiry, Unix epoch milliseconds
    exp: i64,
}

/// Verified claims extracted from a valid token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub user_id: UserId,
    pub role: UserRole,
    pub expires_at_ms: i64,
}

/// Issues and verifies signed session tokens
#[derive(Clone)]
pub struct SessionIssuer {
    secret: [u8; 32],
    ttl: Duration,
}

impl SessionIssuer {
    pub fn new(secret: [u8; 32], ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    /// Generate a signed session token for a user
    pub fn issue(&self, user_id: &UserId, role: UserRole) -> String {
        let payload = TokenPayload {
            uid: *user_id.as_uuid(),
            role: role.code().to_string(),
            exp: chrono::Utc::now().timestamp_millis() + self.ttl.as_millis() as i64,
        };

        // serde_json cannot fail on this struct
        let json = serde_json::to_vec(&payload).expect("token payload serializes");
        let payload_b64 = URL_SAFE_NO_PAD.encode(&json);

        // Create HMAC signature over the encoded payload
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!("{}.{}", payload_b64, URL_SAFE_NO_PAD.encode(signature))
    }

    /// Parse and verify a session token.
    ///
    /// Returns `None` for any defect: wrong shape, bad signature, garbled
    /// payload, unknown role code or an expiry in the past. Callers treat
    /// all of these the same way, as an anonymous request.
    pub fn parse(&self, token: &str) -> Option<SessionClaims> {
        let (payload_b64, signature_b64) = token.split_once('.')?;

        // Verify signature before touching the payload
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());

        let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;
        mac.verify_slice(&signature).ok()?;

        let json = URL_SAFE_NO_PAD.decode(payload_b64).ok()?;
        let payload: TokenPayload = serde_json::from_slice(&json).ok()?;

        if payload.exp <= chrono::Utc::now().timestamp_millis() {
            return None;
        }

        Some(SessionClaims {
            user_id: UserId::from_uuid(payload.uid),
            role: UserRole::from_code(&payload.role)?,
            expires_at_ms: payload.exp,
        })
    }
}
