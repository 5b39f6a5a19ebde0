// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Favorites handlers. Add and remove are separate operations: the client
//! needs the row id returned by add in order to delete.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use pawhaven_core::PawhavenError;
use pawhaven_storage::models::{Favorite, FavoriteWithPet};
use pawhaven_storage::queries::favorites;

use crate::AppState;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::validate::require_uuid;

/// Request body for POST /api/user/favorites.
#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub pet_id: String,
}

/// Response body for DELETE /api/user/favorites/{id}.
#[derive(Debug, Serialize)]
pub struct RemoveFavoriteResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/user/favorites
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<FavoriteWithPet>>, ApiError> {
    let favorites = favorites::list_for_user(&state.db, &auth.id).await?;
    Ok(Json(favorites))
}

/// POST /api/user/favorites
pub async fn add(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<Favorite>), ApiError> {
    require_uuid("pet_id", &body.pet_id)?;

    // The unique index on (user, pet) rejects duplicates; the foreign key
    // rejects a missing pet. Neither needs a pre-check.
    let favorite = favorites::add_favorite(&state.db, &auth.id, &body.pet_id).await?;

    tracing::info!(user_id = %auth.id, pet_id = %body.pet_id, "pet added to favorites");
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /api/user/favorites/{id}
///
/// Scoped to the owner: a favorite belonging to another user is
/// indistinguishable from one that does not exist.
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<RemoveFavoriteResponse>, ApiError> {
    require_uuid("id", &id)?;

    if !favorites::remove_favorite(&state.db, &id, &auth.id).await? {
        return Err(PawhavenError::NotFound("Favorite not found".to_string()).into());
    }

    tracing::info!(user_id = %auth.id, favorite_id = %id, "favorite removed");
    Ok(Json(RemoveFavoriteResponse {
        success: true,
        message: "Removed from favorites".to_string(),
    }))
}
