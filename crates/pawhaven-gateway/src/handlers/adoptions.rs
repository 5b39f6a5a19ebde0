// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adoption request handlers.
//!
//! One authoritative creation flow, exposed at both POST /api/adoptions and
//! POST /api/user/adoption-requests: pet must exist, at most one open
//! request per (user, pet), then a best-effort notification to every admin.
//! The admin fan-out never fails or rolls back the created request.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use pawhaven_core::PawhavenError;
use pawhaven_storage::models::{AdoptionRequest, AdoptionRequestWithPet};
use pawhaven_storage::queries::{adoptions, notifications, pets};

use crate::AppState;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::validate::{require_uuid, sanitize_opt};

/// Request body for creating an adoption request.
#[derive(Debug, Deserialize)]
pub struct CreateAdoptionRequest {
    pub pet_id: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Response body for a successful creation.
#[derive(Debug, Serialize)]
pub struct AdoptionCreateResponse {
    pub success: bool,
    pub message: String,
    pub request: AdoptionRequest,
}

/// POST /api/adoptions and POST /api/user/adoption-requests
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateAdoptionRequest>,
) -> Result<(StatusCode, Json<AdoptionCreateResponse>), ApiError> {
    require_uuid("pet_id", &body.pet_id)?;
    let notes = sanitize_opt(body.notes).filter(|n| !n.is_empty());

    let pet = pets::get_pet(&state.db, &body.pet_id)
        .await?
        .ok_or_else(|| PawhavenError::NotFound("Pet not found".to_string()))?;

    // The partial unique index rejects a second open request for this
    // (user, pet) pair atomically; no application-level pre-check.
    let request = adoptions::create_request(&state.db, &auth.id, &pet.id, notes).await?;

    // Best-effort fan-out: a notification failure never fails the create.
    match notifications::notify_admins(
        &state.db,
        "New Adoption Request",
        &format!(
            "{} has submitted an adoption request for {}",
            auth.full_name, pet.name
        ),
    )
    .await
    {
        Ok(count) => {
            tracing::debug!(admins = count, request_id = %request.id, "admin fan-out complete");
        }
        Err(e) => {
            tracing::warn!(error = %e, request_id = %request.id, "admin fan-out failed");
        }
    }

    tracing::info!(user_id = %auth.id, pet_id = %pet.id, "adoption request submitted");
    Ok((
        StatusCode::CREATED,
        Json(AdoptionCreateResponse {
            success: true,
            message: "Your adoption request has been submitted successfully!".to_string(),
            request,
        }),
    ))
}

/// GET /api/user/adoption-requests
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<AdoptionRequestWithPet>>, ApiError> {
    let requests = adoptions::list_for_user(&state.db, &auth.id).await?;
    Ok(Json(requests))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_deserializes_without_notes() {
        let json = r#"{"pet_id": "550e8400-e29b-41d4-a716-446655440000"}"#;
        let req: CreateAdoptionRequest = serde_json::from_str(json).unwrap();
        assert!(req.notes.is_none());
    }

    #[test]
    fn create_response_serializes() {
        let response = AdoptionCreateResponse {
            success: true,
            message: "ok".to_string(),
            request: AdoptionRequest {
                id: "r1".to_string(),
                user_id: "u1".to_string(),
                pet_id: "p1".to_string(),
                notes: None,
                status: "pending".to_string(),
                created_at: "2026-01-01T00:00:00.000Z".to_string(),
                updated_at: "2026-01-01T00:00:00.000Z".to_string(),
            },
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"pending\""));
    }
}
