// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HMAC-SHA256-signed bearer tokens.
//!
//! A token is `base64url(claims-json) . base64url(hmac-sha256(payload))`.
//! Verification checks the signature in constant time, then the expiry.
//! Nothing else: no revocation list, no session lookup.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use pawhaven_core::{PawhavenError, Role};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Identity claims embedded in a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id (UUID string).
    pub sub: String,
    /// User email at issuance time.
    pub email: String,
    /// Display name at issuance time, used in notification text.
    pub full_name: String,
    /// Role at issuance time.
    pub role: Role,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Issues and verifies signed bearer tokens.
pub struct TokenSigner {
    key: Vec<u8>,
    ttl: Duration,
}

impl TokenSigner {
    /// Create a signer from a shared secret and a token lifetime.
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            key: secret.as_bytes().to_vec(),
            ttl,
        }
    }

    /// Issue a token for the given identity, expiring after this signer's TTL.
    pub fn issue(
        &self,
        user_id: &str,
        email: &str,
        full_name: &str,
        role: Role,
    ) -> Result<String, PawhavenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            role,
            iat: now,
            exp: now + self.ttl.num_seconds(),
        };

        let payload_json = serde_json::to_vec(&claims)
            .map_err(|e| PawhavenError::Internal(format!("claims serialization failed: {e}")))?;
        let payload = URL_SAFE_NO_PAD.encode(payload_json);
        let signature = URL_SAFE_NO_PAD.encode(self.sign(payload.as_bytes())?);
        Ok(format!("{payload}.{signature}"))
    }

    /// Verify a token's signature and expiry, returning its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, PawhavenError> {
        let (payload, signature) = token
            .split_once('.')
            .ok_or_else(|| PawhavenError::Unauthorized("Invalid or expired token".to_string()))?;

        let signature_bytes = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| PawhavenError::Unauthorized("Invalid or expired token".to_string()))?;

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature_bytes)
            .map_err(|_| PawhavenError::Unauthorized("Invalid or expired token".to_string()))?;

        let payload_bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| PawhavenError::Unauthorized("Invalid or expired token".to_string()))?;
        let claims: Claims = serde_json::from_slice(&payload_bytes)
            .map_err(|_| PawhavenError::Unauthorized("Invalid or expired token".to_string()))?;

        if claims.exp < Utc::now().timestamp() {
            return Err(PawhavenError::Unauthorized(
                "Invalid or expired token".to_string(),
            ));
        }

        Ok(claims)
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, PawhavenError> {
        let mut mac = self.mac()?;
        mac.update(payload);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    fn mac(&self) -> Result<HmacSha256, PawhavenError> {
        HmacSha256::new_from_slice(&self.key)
            .map_err(|e| PawhavenError::Internal(format!("HMAC key setup failed: {e}")))
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("key", &"[redacted]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new("unit-test-secret", Duration::days(7))
    }

    #[test]
    fn issue_and_verify_roundtrip() {
        let signer = signer();
        let token = signer
            .issue("user-1", "a@example.com", "Alice Adopter", Role::Customer)
            .unwrap();

        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "a@example.com");
        assert_eq!(claims.full_name, "Alice Adopter");
        assert_eq!(claims.role, Role::Customer);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let signer = signer();
        let token = signer
            .issue("user-1", "a@example.com", "Alice", Role::Customer)
            .unwrap();

        // Swap in a forged payload while keeping the original signature.
        let (_, signature) = token.split_once('.').unwrap();
        let forged_claims = r#"{"sub":"user-1","email":"a@example.com","full_name":"Alice","role":"admin","iat":0,"exp":99999999999}"#;
        let forged_payload = URL_SAFE_NO_PAD.encode(forged_claims);
        let forged = format!("{forged_payload}.{signature}");

        assert!(matches!(
            signer.verify(&forged),
            Err(PawhavenError::Unauthorized(_))
        ));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = signer()
            .issue("user-1", "a@example.com", "Alice", Role::Customer)
            .unwrap();
        let other = TokenSigner::new("different-secret", Duration::days(7));
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let expired = TokenSigner::new("unit-test-secret", Duration::seconds(-60));
        let token = expired
            .issue("user-1", "a@example.com", "Alice", Role::Customer)
            .unwrap();
        // Same key, but the token's exp is already in the past.
        assert!(matches!(
            signer().verify(&token),
            Err(PawhavenError::Unauthorized(_))
        ));
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        let signer = signer();
        assert!(signer.verify("").is_err());
        assert!(signer.verify("no-dot-here").is_err());
        assert!(signer.verify("two.dots.here").is_err());
        assert!(signer.verify("!!!.###").is_err());
    }

    #[test]
    fn debug_redacts_the_key() {
        let output = format!("{:?}", signer());
        assert!(!output.contains("unit-test-secret"));
        assert!(output.contains("[redacted]"));
    }
}
