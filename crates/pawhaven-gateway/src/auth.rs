// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication gate for the gateway.
//!
//! [`AuthUser`] is an extractor: any handler that declares it only runs for
//! requests carrying a valid `Authorization: Bearer` token. Missing or
//! invalid tokens yield 401. Admin-only routes additionally call
//! [`require_admin`], yielding 403 for everyone else. Token validity is
//! signature plus expiry only -- there is no session store.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use pawhaven_core::{PawhavenError, Role};

use crate::AppState;
use crate::error::ApiError;

/// The authenticated identity decoded from the bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| {
                PawhavenError::Unauthorized("Access denied. No token provided.".to_string())
            })?;

        let claims = state.signer.verify(token)?;

        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
            full_name: claims.full_name,
            role: claims.role,
        })
    }
}

/// Reject non-admin callers of catalog-management routes.
pub fn require_admin(user: &AuthUser) -> Result<(), PawhavenError> {
    if user.role == Role::Admin {
        Ok(())
    } else {
        Err(PawhavenError::Forbidden("Admin access required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: Role) -> AuthUser {
        AuthUser {
            id: "u1".to_string(),
            email: "u@example.com".to_string(),
            full_name: "User".to_string(),
            role,
        }
    }

    #[test]
    fn admin_passes_the_role_gate() {
        assert!(require_admin(&user_with_role(Role::Admin)).is_ok());
    }

    #[test]
    fn customer_and_staff_are_forbidden() {
        for role in [Role::Customer, Role::Staff] {
            let err = require_admin(&user_with_role(role)).unwrap_err();
            assert!(matches!(err, PawhavenError::Forbidden(_)));
        }
    }
}
