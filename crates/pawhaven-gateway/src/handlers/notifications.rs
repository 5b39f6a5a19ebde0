// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification handlers. All operations are scoped to the owner; clients
//! never create notification rows directly.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use pawhaven_core::PawhavenError;
use pawhaven_storage::models::Notification;
use pawhaven_storage::queries::notifications;

use crate::AppState;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::validate::require_uuid;

/// Response body for GET /api/notifications/unread.
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
}

/// Response body for PUT /api/notifications/mark-all-read.
#[derive(Debug, Serialize)]
pub struct MarkAllReadResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/notifications
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let notifications = notifications::list_for_user(&state.db, &auth.id).await?;
    Ok(Json(notifications))
}

/// GET /api/notifications/unread
pub async fn unread(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UnreadCountResponse>, ApiError> {
    let unread = notifications::unread_count(&state.db, &auth.id).await?;
    Ok(Json(UnreadCountResponse { unread }))
}

/// PUT /api/notifications/{id}/read
///
/// Idempotent: marking an already-read notification succeeds again.
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Notification>, ApiError> {
    require_uuid("id", &id)?;
    let notification = notifications::mark_read(&state.db, &id, &auth.id)
        .await?
        .ok_or_else(|| PawhavenError::NotFound("Notification not found".to_string()))?;
    Ok(Json(notification))
}

/// PUT /api/notifications/mark-all-read
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MarkAllReadResponse>, ApiError> {
    notifications::mark_all_read(&state.db, &auth.id).await?;
    Ok(Json(MarkAllReadResponse {
        success: true,
        message: "All notifications marked as read".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_count_serializes() {
        let json = serde_json::to_string(&UnreadCountResponse { unread: 3 }).unwrap();
        assert_eq!(json, r#"{"unread":3}"#);
    }
}
