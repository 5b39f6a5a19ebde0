// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification preference handlers: lazy-create-on-read plus partial
//! updates. The flags are stored but consulted by no dispatch logic.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use pawhaven_core::PawhavenError;
use pawhaven_storage::models::UserPreferences;
use pawhaven_storage::queries::preferences;

use crate::AppState;
use crate::auth::AuthUser;
use crate::error::ApiError;

/// Request body for PUT /api/preferences; any subset of the flags.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePreferencesRequest {
    #[serde(default)]
    pub email_notifications: Option<bool>,
    #[serde(default)]
    pub push_notifications: Option<bool>,
    #[serde(default)]
    pub sms_notifications: Option<bool>,
    #[serde(default)]
    pub marketing_emails: Option<bool>,
    #[serde(default)]
    pub adoption_updates: Option<bool>,
    #[serde(default)]
    pub message_alerts: Option<bool>,
}

/// GET /api/preferences
///
/// Creates the default row transparently on first read.
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserPreferences>, ApiError> {
    let preferences = preferences::get_or_create(&state.db, &auth.id).await?;
    Ok(Json(preferences))
}

/// PUT /api/preferences
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<UpdatePreferencesRequest>,
) -> Result<Json<UserPreferences>, ApiError> {
    let update = preferences::PreferencesUpdate {
        email_notifications: body.email_notifications,
        push_notifications: body.push_notifications,
        sms_notifications: body.sms_notifications,
        marketing_emails: body.marketing_emails,
        adoption_updates: body.adoption_updates,
        message_alerts: body.message_alerts,
    };
    if update.is_empty() {
        return Err(
            PawhavenError::Validation("No preferences provided to update".to_string()).into(),
        );
    }

    let preferences = preferences::update(&state.db, &auth.id, update).await?;
    tracing::info!(user_id = %auth.id, "preferences updated");
    Ok(Json(preferences))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_accepts_partial_bodies() {
        let req: UpdatePreferencesRequest =
            serde_json::from_str(r#"{"sms_notifications": true}"#).unwrap();
        assert_eq!(req.sms_notifications, Some(true));
        assert!(req.email_notifications.is_none());
    }
}
