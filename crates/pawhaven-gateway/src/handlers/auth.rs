// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registration, login, and profile handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use pawhaven_auth::{hash_password, verify_password};
use pawhaven_core::PawhavenError;
use pawhaven_storage::User;
use pawhaven_storage::queries::users;

use crate::AppState;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::validate::{require_email, require_len, sanitize, sanitize_opt};

/// Request body for POST /api/auth/register.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Request body for POST /api/auth/login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for PUT /api/auth/profile.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Public view of an account. Never includes the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            phone: user.phone,
            address: user.address,
            created_at: user.created_at,
        }
    }
}

/// Response body for register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: UserResponse,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    require_email(&body.email)?;
    require_len("password", &body.password, 6, 128)?;
    require_len("full_name", &body.full_name, 2, 255)?;

    let email = body.email.trim().to_lowercase();
    let password_hash = hash_password(&body.password)?;

    // No pre-check for an existing email: the unique index decides, so two
    // concurrent registrations cannot both win.
    let user = users::create_user(
        &state.db,
        users::NewUser {
            email,
            password_hash,
            full_name: sanitize(&body.full_name),
            phone: sanitize_opt(body.phone),
            address: sanitize_opt(body.address),
        },
    )
    .await?;

    let token = state.signer.issue(
        &user.id,
        &user.email,
        &user.full_name,
        user.role
            .parse()
            .map_err(|_| PawhavenError::Internal(format!("unknown role `{}`", user.role)))?,
    )?;

    tracing::info!(user_id = %user.id, "new user registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            token,
            user: user.into(),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    require_email(&body.email)?;
    let email = body.email.trim().to_lowercase();

    // Wrong email and wrong password are indistinguishable to the caller.
    let invalid = || PawhavenError::Unauthorized("Invalid email or password".to_string());

    let user = users::find_active_by_email(&state.db, &email)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(&body.password, &user.password_hash)? {
        return Err(invalid().into());
    }

    users::touch_last_login(&state.db, &user.id).await?;

    let token = state.signer.issue(
        &user.id,
        &user.email,
        &user.full_name,
        user.role
            .parse()
            .map_err(|_| PawhavenError::Internal(format!("unknown role `{}`", user.role)))?,
    )?;

    tracing::info!(user_id = %user.id, "user logged in");
    Ok(Json(AuthResponse {
        success: true,
        token,
        user: user.into(),
    }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = users::get_user(&state.db, &auth.id)
        .await?
        .ok_or_else(|| PawhavenError::NotFound("User not found".to_string()))?;
    Ok(Json(user.into()))
}

/// PUT /api/auth/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<ProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if let Some(full_name) = &body.full_name {
        require_len("full_name", full_name, 2, 255)?;
    }

    let user = users::update_profile(
        &state.db,
        &auth.id,
        users::ProfileUpdate {
            full_name: sanitize_opt(body.full_name),
            phone: sanitize_opt(body.phone),
            address: sanitize_opt(body.address),
        },
    )
    .await?
    .ok_or_else(|| PawhavenError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_deserializes_with_optional_fields() {
        let json = r#"{"email": "a@example.com", "password": "secret1", "full_name": "Alice"}"#;
        let req: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.email, "a@example.com");
        assert!(req.phone.is_none());
        assert!(req.address.is_none());
    }

    #[test]
    fn auth_response_serializes_without_password_fields() {
        let response = AuthResponse {
            success: true,
            token: "tok".to_string(),
            user: UserResponse {
                id: "u1".to_string(),
                email: "a@example.com".to_string(),
                full_name: "Alice".to_string(),
                role: "customer".to_string(),
                phone: None,
                address: None,
                created_at: "2026-01-01T00:00:00.000Z".to_string(),
            },
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(!json.contains("password"));
    }
}
